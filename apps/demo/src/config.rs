//! Demo configuration.

use std::env;

/// Demo configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Log level.
    pub log_level: String,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            log_level: env::var("VELORENT_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
        }
    }
}
