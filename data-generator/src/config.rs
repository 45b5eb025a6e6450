//! Configuration module

use std::env;

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,

    /// Path to the backing CSV time series
    pub csv_path: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(6971),

            csv_path: env::var("CSV_PATH")
                .unwrap_or_else(|_| "three_day_df.csv".to_string()),
        }
    }
}
