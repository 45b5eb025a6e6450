//! Static CSV-backed weight dataset

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One replayed reading
#[derive(Debug, Clone, Serialize)]
pub struct GeneratedSample {
    pub weight: f64,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
struct CsvRow {
    timestamp: String,
    weight: f64,
}

#[derive(Debug, thiserror::Error)]
pub enum DatasetError {
    #[error("CSV file not found at: {0}")]
    NotFound(String),

    #[error("Error parsing CSV file: {0}")]
    Parse(String),
}

/// Outcome of the startup load. A failed load is kept around so every
/// request can report why the dataset is unusable.
pub enum DatasetState {
    Ready(Dataset),
    Failed(String),
}

impl DatasetState {
    pub fn load(path: &str) -> Self {
        match Dataset::from_csv(Path::new(path)) {
            Ok(dataset) => {
                tracing::info!("Loaded {} samples from {}", dataset.len(), path);
                DatasetState::Ready(dataset)
            }
            Err(e) => {
                tracing::error!("{}. Requests will fail until the dataset is fixed.", e);
                DatasetState::Failed(e.to_string())
            }
        }
    }
}

/// The preloaded time series, kept in file order
#[derive(Debug)]
pub struct Dataset {
    samples: Vec<GeneratedSample>,
}

impl Dataset {
    pub fn from_csv(path: &Path) -> Result<Self, DatasetError> {
        if !path.exists() {
            return Err(DatasetError::NotFound(path.display().to_string()));
        }

        let mut reader = csv::Reader::from_path(path)
            .map_err(|e| DatasetError::Parse(e.to_string()))?;

        let mut samples = Vec::new();
        for row in reader.deserialize::<CsvRow>() {
            let row = row.map_err(|e| DatasetError::Parse(e.to_string()))?;
            let timestamp = parse_timestamp(&row.timestamp)
                .ok_or_else(|| DatasetError::Parse(format!("bad timestamp: {}", row.timestamp)))?;

            samples.push(GeneratedSample {
                weight: row.weight,
                timestamp,
            });
        }

        Ok(Self { samples })
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Samples inclusively within [start, end], in dataset order
    pub fn between(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> Vec<GeneratedSample> {
        self.samples
            .iter()
            .filter(|s| s.timestamp >= start && s.timestamp <= end)
            .cloned()
            .collect()
    }
}

/// Accept RFC 3339 or the naive `YYYY-MM-DD HH:MM:SS[.f]` form the
/// dataset ships with; naive times are taken as UTC.
pub fn parse_timestamp(value: &str) -> Option<DateTime<Utc>> {
    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Some(ts.with_timezone(&Utc));
    }

    NaiveDateTime::parse_from_str(value, "%Y-%m-%d %H:%M:%S%.f")
        .ok()
        .map(|naive| naive.and_utc())
}
