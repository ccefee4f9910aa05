//! Pipeline components: the externally-facing work a stage performs once its
//! configuration entity has been resolved.

pub mod data_ingestion;
pub mod error;

pub use data_ingestion::{DataIngestion, DownloadOutcome};
pub use error::{IngestionError, IngestionResult};
