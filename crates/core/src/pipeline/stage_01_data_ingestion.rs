//! Stage 01: data ingestion.

use super::PipelineStage;
use crate::components::data_ingestion::DataIngestion;
use crate::config::manager::ConfigurationManager;
use anyhow::{Context, Result};

pub const STAGE_NAME: &str = "Data Ingestion stage";

/// Downloads the dataset archive and extracts it into the stage directory.
#[derive(Debug, Default)]
pub struct DataIngestionPipeline;

impl DataIngestionPipeline {
    pub fn new() -> Self {
        Self
    }
}

impl PipelineStage for DataIngestionPipeline {
    fn name(&self) -> &str {
        STAGE_NAME
    }

    fn execute(&self, manager: &ConfigurationManager) -> Result<()> {
        let config = manager
            .get_data_ingestion_config()
            .context("Failed to resolve data ingestion configuration")?;

        let ingestion = DataIngestion::new(config)?;
        ingestion.download_file()?;
        ingestion.extract_zip_file()?;

        Ok(())
    }
}
