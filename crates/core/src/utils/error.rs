//! Error types for filesystem helpers.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for filesystem helpers.
pub type FsResult<T> = Result<T, FsError>;

/// Errors raised by the directory materializer and the JSON/size helpers.
#[derive(Debug, Error)]
pub enum FsError {
    /// A directory (or one of its parents) could not be created.
    ///
    /// Directories created earlier in the same call are left in place.
    #[error("Failed to create directory {path:?}: {source}")]
    DirectoryCreation {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to read a file or its metadata.
    #[error("Failed to read {path:?}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write a file.
    #[error("Failed to write file {path:?}: {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// JSON content could not be encoded or decoded.
    #[error("Invalid JSON in {path:?}: {source}")]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}
