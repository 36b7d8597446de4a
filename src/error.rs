//! Error types for the media renamer.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the media renamer.
#[derive(Error, Debug)]
pub enum Error {
    // File system errors
    #[error("Path not found: {0}")]
    PathNotFound(String),

    #[error("Not a directory: {0}")]
    NotADirectory(String),

    // Validation errors
    #[error("No files in the working set. Add files or folders first")]
    NoFilesSelected,

    #[error("A title is required. Pass --title or save one with `config save`")]
    TitleRequired,

    #[error("No entry at position {0}")]
    InvalidIndex(usize),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // JSON errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    // Generic errors
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a generic error from a string.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Error::Other(msg.into())
    }
}
