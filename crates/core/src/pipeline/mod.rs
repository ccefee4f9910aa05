//! Pipeline driver.
//!
//! A pipeline is an ordered list of [`PipelineStage`]s sharing one
//! [`ConfigurationManager`]. The [`PipelineRunner`] executes them strictly in
//! sequence and stops at the first failure.

pub mod runner;
pub mod stage_01_data_ingestion;

use crate::config::manager::ConfigurationManager;
use anyhow::Result;

pub use runner::PipelineRunner;
pub use stage_01_data_ingestion::DataIngestionPipeline;

/// One discrete step of the pipeline.
///
/// A stage resolves its own configuration entity from the manager and
/// performs its work. Stages do not retry; errors go back to the runner
/// unchanged.
pub trait PipelineStage {
    /// Human-readable stage name used in logs and reports.
    fn name(&self) -> &str;

    /// Run the stage to completion.
    fn execute(&self, manager: &ConfigurationManager) -> Result<()>;
}
