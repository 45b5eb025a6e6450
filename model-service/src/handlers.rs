//! Request handlers

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};

use crate::{AppResult, AppState};

#[derive(Debug, Deserialize)]
pub struct WeightData {
    pub weights: Vec<f64>,
}

#[derive(Debug, Serialize)]
pub struct PredictionResponse {
    pub food_added: f64,
}

/// Predict how much food was added somewhere in the supplied history
pub async fn predict(
    State(state): State<AppState>,
    Json(data): Json<WeightData>,
) -> AppResult<Json<PredictionResponse>> {
    // A batched run over a long history can take a while and holds the
    // session lock the whole time; keep it off the async workers.
    let engine = state.engine.clone();
    let food_added = tokio::task::spawn_blocking(move || engine.predict(&data.weights))
        .await
        .map_err(|e| crate::AppError::Prediction(e.to_string()))??;

    Ok(Json(PredictionResponse { food_added }))
}

#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    version: &'static str,
    model_loaded: bool,
    timestamp: i64,
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        model_loaded: state.engine.is_loaded(),
        timestamp: chrono::Utc::now().timestamp(),
    })
}
