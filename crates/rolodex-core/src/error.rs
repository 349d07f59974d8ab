//! Error types for the `rolodex` core library.

use thiserror::Error;

/// Result type alias using the rolodex core [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Core error types for roster handling.
#[derive(Debug, Error)]
pub enum Error {
    /// A roster failed validation (empty or duplicate names).
    #[error("Invalid roster: {0}")]
    InvalidRoster(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
