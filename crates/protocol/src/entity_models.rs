//! Stage configuration entities.
//!
//! Each pipeline stage consumes exactly one of these records. They are built
//! by the configuration manager from the matching sub-mapping of
//! `config/config.yaml` and carry no behaviour of their own.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Everything the data ingestion stage needs to fetch and unpack its dataset.
///
/// Serialized field names match the keys of the `data_ingestion` section
/// exactly, including the upper-case `source_URL`.
///
/// # Example
///
/// ```yaml
/// data_ingestion:
///   root_dir: artifacts/data_ingestion
///   source_URL: https://example.com/dataset.zip
///   local_data_file: artifacts/data_ingestion/data.zip
///   unzip_dir: artifacts/data_ingestion
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct DataIngestionConfig {
    /// Directory owned by the stage. Created before the stage runs.
    pub root_dir: PathBuf,

    /// Remote location of the dataset archive.
    #[serde(rename = "source_URL")]
    pub source_url: String,

    /// Where the downloaded archive is written.
    pub local_data_file: PathBuf,

    /// Directory the archive is extracted into.
    pub unzip_dir: PathBuf,
}
