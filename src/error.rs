use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the catalog server
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// Failures reported by a directory source
#[derive(Error, Debug)]
pub enum DirectoryError {
    /// Path unset, nonexistent, or not a directory
    #[error("Invalid directory: {path:?}")]
    InvalidDirectory { path: Option<PathBuf> },

    /// The directory exists but could not be opened for listing
    #[error("Unreadable directory {path:?}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DirectoryError {
    pub fn invalid(path: Option<PathBuf>) -> Self {
        DirectoryError::InvalidDirectory { path }
    }
}

/// Caller-visible outcome of a failed video query
#[derive(Error, Debug)]
pub enum QueryError {
    #[error("Bad request: {0}")]
    BadRequest(#[from] DirectoryError),
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, ServerError>;
