//! Error types for the hivenote-core library.
//!
//! Parsing itself never fails: a line that matches nothing simply ends up in
//! the notes. These errors cover the configuration surface around the parser.

use thiserror::Error;

/// Main error type for the hivenote library.
#[derive(Error, Debug)]
pub enum HivenoteError {
    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for the hivenote library.
pub type Result<T> = std::result::Result<T, HivenoteError>;
