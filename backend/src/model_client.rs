//! HTTP client for the prediction model service

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Client for the separately hosted model service. Built once at startup
/// and shared through application state. No request timeout is configured;
/// a hung model call blocks its request.
#[derive(Debug, Clone)]
pub struct ModelClient {
    base_url: String,
    http_client: reqwest::Client,
}

#[derive(Debug, Serialize)]
struct PredictRequest<'a> {
    weights: &'a [f64],
}

#[derive(Debug, Deserialize)]
pub struct PredictResponse {
    pub food_added: f64,
    #[serde(default)]
    pub confidence: Option<f64>,
}

/// Error body shape shared by the services
#[derive(Debug, Deserialize)]
struct ErrorResponse {
    error: String,
}

impl ModelClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url,
            http_client: reqwest::Client::new(),
        }
    }

    /// POST the weight history to the model service and return its answer.
    /// Any transport, server-side, or parse failure comes back as
    /// [`AppError::Upstream`] carrying the underlying message.
    pub async fn predict(&self, weights: &[f64]) -> Result<PredictResponse, AppError> {
        let url = format!("{}/model/predict/", self.base_url);

        let response = self
            .http_client
            .post(&url)
            .json(&PredictRequest { weights })
            .send()
            .await
            .map_err(|e| AppError::Upstream(e.to_string()))?;

        if response.status().is_success() {
            response
                .json()
                .await
                .map_err(|e| AppError::Upstream(e.to_string()))
        } else {
            let status = response.status().as_u16();
            let text = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<ErrorResponse>(&text)
                .map(|e| e.error)
                .unwrap_or(text);
            Err(AppError::Upstream(format!("{} ({})", detail, status)))
        }
    }
}
