//! Error types for pipeline components.

use crate::utils::FsError;
use std::path::PathBuf;
use thiserror::Error;

/// Result type for the data ingestion component.
pub type IngestionResult<T> = Result<T, IngestionError>;

/// Errors raised while fetching or unpacking a dataset archive.
///
/// None of these are retried by the component; the caller decides.
#[derive(Debug, Error)]
pub enum IngestionError {
    /// The configured source is not a usable URL.
    #[error("Invalid source URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },

    /// The HTTP client failed (connection, TLS, body transfer).
    #[error("Failed to download {url}: {source}")]
    Download {
        url: String,
        source: reqwest::Error,
    },

    /// The server answered with a non-success status.
    #[error("Download of {url} failed with HTTP status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
    },

    /// Local file I/O failed.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The archive could not be opened or one of its entries could not be read.
    #[error("Failed to read zip archive {path}: {source}")]
    Archive {
        path: PathBuf,
        source: zip::result::ZipError,
    },

    /// Directory materialization or size lookup failed.
    #[error(transparent)]
    Fs(#[from] FsError),
}
