//! Configuration module

use std::env;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite connection URL
    pub database_url: String,

    /// Server port
    pub port: u16,

    /// Base URL of the prediction model service
    pub model_url: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://weights.db?mode=rwc".to_string()),

            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(6969),

            model_url: env::var("MODEL_URL")
                .unwrap_or_else(|_| "http://127.0.0.1:6970".to_string()),
        }
    }
}
