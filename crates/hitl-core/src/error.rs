//! Error types for the approval client

use thiserror::Error;

/// Main error type for all client operations
#[derive(Error, Debug)]
pub enum HitlError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("File system error: {0}")]
    Io(#[from] std::io::Error),

    /// Non-2xx response, carrying the backend's message when it sent one
    #[error("Backend returned {status}: {message}")]
    Api { status: u16, message: String },

    #[error("Not found: {0}")]
    NotFound(String),
}

/// Result type for client operations
pub type Result<T> = std::result::Result<T, HitlError>;
