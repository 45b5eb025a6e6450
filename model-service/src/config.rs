//! Configuration module

use std::env;

/// Same as used in training
pub const DEFAULT_SEQUENCE_LENGTH: usize = 500;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,

    /// Path to the exported ONNX model artifact
    pub model_path: String,

    /// Fixed input width of the model
    pub sequence_length: usize,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(6970),

            model_path: env::var("MODEL_PATH")
                .unwrap_or_else(|_| "cat_feeder_model.onnx".to_string()),

            sequence_length: env::var("SEQUENCE_LENGTH")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_SEQUENCE_LENGTH),
        }
    }
}
