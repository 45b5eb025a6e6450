//! Request handlers

use axum::{
    extract::{Query, State},
    Json,
};
use serde::Deserialize;

use crate::dataset::{parse_timestamp, DatasetState, GeneratedSample};
use crate::error::AppError;
use crate::{AppResult, AppState};

fn default_start() -> String {
    "2024-01-01 21:28:50".to_string()
}

fn default_end() -> String {
    "2024-01-01 21:38:20".to_string()
}

#[derive(Debug, Deserialize)]
pub struct GenerateQuery {
    #[serde(default = "default_start")]
    pub start_date: String,
    #[serde(default = "default_end")]
    pub end_date: String,
}

/// Replay the preloaded dataset filtered to the requested window
pub async fn generate(
    State(state): State<AppState>,
    Query(query): Query<GenerateQuery>,
) -> AppResult<Json<Vec<GeneratedSample>>> {
    let dataset = match state.dataset.as_ref() {
        DatasetState::Ready(dataset) => dataset,
        DatasetState::Failed(reason) => {
            return Err(AppError::DatasetUnavailable(reason.clone()))
        }
    };

    let start = parse_timestamp(&query.start_date)
        .ok_or_else(|| AppError::Validation(format!("invalid start_date: {}", query.start_date)))?;
    let end = parse_timestamp(&query.end_date)
        .ok_or_else(|| AppError::Validation(format!("invalid end_date: {}", query.end_date)))?;

    Ok(Json(dataset.between(start, end)))
}

#[derive(serde::Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    dataset_loaded: bool,
    timestamp: i64,
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        dataset_loaded: matches!(state.dataset.as_ref(), DatasetState::Ready(_)),
        timestamp: chrono::Utc::now().timestamp(),
    })
}
