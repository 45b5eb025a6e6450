//! Error handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;

use crate::engine::EngineError;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Model artifact failed to load at startup
    #[error("Model not loaded: {0}")]
    ModelUnavailable(String),

    /// Inference threw (shape mismatch, numeric fault)
    #[error("Prediction error: {0}")]
    Prediction(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!("{}", self);

        let status = StatusCode::INTERNAL_SERVER_ERROR;
        let body = Json(json!({
            "error": self.to_string(),
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}

impl From<EngineError> for AppError {
    fn from(err: EngineError) -> Self {
        match err {
            EngineError::Unavailable(reason) => AppError::ModelUnavailable(reason),
            EngineError::Inference(msg) => AppError::Prediction(msg),
        }
    }
}
