use thiserror::Error;

use crate::pipeline::processing::validate::ValidationError;

/// Custom error types for the review hub
#[derive(Error, Debug)]
pub enum ReviewHubError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration parsing failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing required field: {0}")]
    MissingField(String),

    #[error("API error: {message}")]
    Api { message: String },

    #[error("Environment variable error: {0}")]
    Env(#[from] std::env::VarError),

    #[error("Submission validation failed")]
    Validation(#[from] ValidationError),
}

/// Result type alias for review hub operations
pub type Result<T> = std::result::Result<T, ReviewHubError>;
