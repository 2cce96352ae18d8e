//! Error types for appdock.

use thiserror::Error;

/// Common error type for appdock.
#[derive(Error, Debug)]
pub enum AppdockError {
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Resource not found.
    #[error("{0} not found")]
    NotFound(String),

    /// A client-supplied path escaped or would escape the applications root.
    #[error("unsafe path: {0}")]
    PathRejected(String),

    /// Validation error for user input.
    #[error("validation error: {0}")]
    Validation(String),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for appdock operations.
pub type Result<T> = std::result::Result<T, AppdockError>;
