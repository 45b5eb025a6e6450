//! Prediction request/response shapes

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Time range query, millisecond epoch bounds. Both are required; the
/// missing-bound error is produced by [`RangeQuery::bounds`], not serde,
/// so the caller gets a message naming both fields.
#[derive(Debug, Default, Deserialize)]
pub struct RangeQuery {
    pub start_date: Option<i64>,
    pub end_date: Option<i64>,
}

impl RangeQuery {
    /// Resolve to inclusive UTC bounds
    pub fn bounds(&self) -> Result<(DateTime<Utc>, DateTime<Utc>), AppError> {
        let (start, end) = match (self.start_date, self.end_date) {
            (Some(start), Some(end)) => (start, end),
            _ => {
                return Err(AppError::Validation(
                    "Both start_date and end_date must be provided".to_string(),
                ))
            }
        };

        let start = DateTime::from_timestamp_millis(start)
            .ok_or_else(|| AppError::Validation("start_date is out of range".to_string()))?;
        let end = DateTime::from_timestamp_millis(end)
            .ok_or_else(|| AppError::Validation("end_date is out of range".to_string()))?;

        Ok((start, end))
    }
}

/// Answer republished from the prediction service
#[derive(Debug, Serialize)]
pub struct PredictionResponse {
    pub food_added: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    pub timestamp: DateTime<Utc>,
}

/// Echo returned by the insert endpoint
#[derive(Debug, Serialize)]
pub struct InsertAck {
    pub weight: f64,
    pub timestamp: DateTime<Utc>,
    pub test: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds_requires_both_fields() {
        let q = RangeQuery {
            start_date: Some(100_000),
            end_date: None,
        };
        let err = q.bounds().unwrap_err();
        assert!(err.to_string().contains("start_date and end_date"));

        let q = RangeQuery::default();
        assert!(q.bounds().is_err());
    }

    #[test]
    fn bounds_converts_millis() {
        let q = RangeQuery {
            start_date: Some(100_000),
            end_date: Some(300_000),
        };
        let (start, end) = q.bounds().unwrap();
        assert_eq!(start.timestamp(), 100);
        assert_eq!(end.timestamp(), 300);
    }
}
