//! Error types for fairway.

use thiserror::Error;

/// Result type alias using fairway's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Maximum length of an error message kept for per-entry display.
pub const ERROR_DISPLAY_MAX: usize = 120;

/// Core error type for fairway operations.
#[derive(Error, Debug)]
pub enum Error {
    /// Required configuration value absent (fatal at startup)
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP/network request failed
    #[error("Request error: {0}")]
    Request(String),

    /// Remote store returned an error response
    #[error("Store error: {0}")]
    Store(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Every insertion strategy was attempted and failed
    #[error("Insertion failed: {0}")]
    InsertionFailed(String),

    /// File I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(e: reqwest::Error) -> Self {
        Error::Request(e.to_string())
    }
}

/// Truncate an error message to [`ERROR_DISPLAY_MAX`] characters for
/// per-entry report lines. Remote backends can echo entire payloads back
/// in error bodies, which would otherwise flood the summary output.
pub fn truncate_for_display(msg: &str) -> String {
    if msg.chars().count() <= ERROR_DISPLAY_MAX {
        msg.to_string()
    } else {
        let head: String = msg.chars().take(ERROR_DISPLAY_MAX).collect();
        format!("{head}...")
    }
}
