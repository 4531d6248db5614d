//! Configuration for the client.

use std::env;

/// Where the remote service lives.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the REST gateway, e.g. `http://localhost:3000`
    pub api_url: String,
    /// URL of the change-stream endpoint, e.g. `ws://localhost:3000`
    pub stream_url: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// `WAYMARK_HOST` (default `localhost:3000`) derives both URLs;
    /// `WAYMARK_API_URL` and `WAYMARK_STREAM_URL` override them
    /// individually.
    pub fn from_env() -> Result<Self, ConfigError> {
        let host = env::var("WAYMARK_HOST").unwrap_or_else(|_| "localhost:3000".to_string());

        let api_url = env::var("WAYMARK_API_URL").unwrap_or_else(|_| format!("http://{host}"));
        let stream_url = env::var("WAYMARK_STREAM_URL").unwrap_or_else(|_| format!("ws://{host}"));

        if !api_url.starts_with("http://") && !api_url.starts_with("https://") {
            return Err(ConfigError::InvalidApiUrl(api_url));
        }
        if !stream_url.starts_with("ws://") && !stream_url.starts_with("wss://") {
            return Err(ConfigError::InvalidStreamUrl(stream_url));
        }

        Ok(Self {
            api_url,
            stream_url,
        })
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("WAYMARK_API_URL must use http or https, got {0}")]
    InvalidApiUrl(String),

    #[error("WAYMARK_STREAM_URL must use ws or wss, got {0}")]
    InvalidStreamUrl(String),
}
