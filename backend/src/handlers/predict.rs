//! Prediction orchestration handler

use axum::{
    extract::{Query, State},
    Json,
};

use crate::models::{PredictionResponse, RangeQuery, WeightRecord};
use crate::{AppResult, AppState};

/// Fetch the weight history for a range, forward it to the model service,
/// and republish its answer stamped with the end of the range.
pub async fn food_amount(
    State(state): State<AppState>,
    Query(range): Query<RangeQuery>,
) -> AppResult<Json<PredictionResponse>> {
    let (start, end) = range.bounds()?;

    let records = WeightRecord::list_between(&state.pool, start, end).await?;

    // The store returns newest-first; the model expects the series in
    // chronological order, so reverse before forwarding.
    let weights: Vec<f64> = records.iter().rev().map(|r| r.weight).collect();

    let prediction = state.model_client.predict(&weights).await?;

    Ok(Json(PredictionResponse {
        food_added: prediction.food_added,
        confidence: prediction.confidence,
        timestamp: end,
    }))
}
