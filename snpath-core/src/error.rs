//! Error types for snpath

use thiserror::Error;

/// Result type alias
pub type PathResult<T> = Result<T, PathError>;

/// Main error type
#[derive(Error, Debug)]
pub enum PathError {
    #[error("Buffer too small: need {needed} bytes, capacity is {capacity}")]
    BufferTooSmall { needed: usize, capacity: usize },

    #[error("Path not found: {0}")]
    NotFound(String),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Not a directory: {0}")]
    NotADirectory(String),

    #[error("Not a file: {0}")]
    NotAFile(String),

    #[error("Directory not empty: {0}")]
    DirectoryNotEmpty(String),

    #[error("Invalid path: {0}")]
    InvalidPath(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl PathError {
    pub fn is_not_found(&self) -> bool {
        match self {
            PathError::NotFound(_) => true,
            PathError::Io(e) => e.kind() == std::io::ErrorKind::NotFound,
            _ => false,
        }
    }

    /// True for failures caused by a destination buffer that cannot hold the result.
    pub fn is_capacity_error(&self) -> bool {
        matches!(self, PathError::BufferTooSmall { .. })
    }
}
