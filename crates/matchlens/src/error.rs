//! Error types for the Matchlens library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Matchlens operations.
#[derive(Debug, Error)]
pub enum MatchlensError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Parsed payload is not a sequence of records.
    #[error("expected a sequence")]
    Shape,

    /// Remote retrieval returned a non-success status.
    #[error("request failed with status {status}")]
    Transport { status: u16 },

    /// Error from the HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Content is not valid JSON syntax.
    #[error("{0}")]
    Parse(String),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for Matchlens operations.
pub type Result<T> = std::result::Result<T, MatchlensError>;
