//! Sequential stage runner.

use super::{DataIngestionPipeline, PipelineStage};
use crate::config::manager::ConfigurationManager;
use anyhow::Result;
use mlp_protocol::report_models::{RunSummary, StageReport};

/// Executes stages in registration order against one configuration.
pub struct PipelineRunner {
    manager: ConfigurationManager,
    stages: Vec<Box<dyn PipelineStage>>,
}

impl PipelineRunner {
    /// Create an empty runner.
    pub fn new(manager: ConfigurationManager) -> Self {
        Self {
            manager,
            stages: Vec::new(),
        }
    }

    /// Create a runner with every built-in stage, in pipeline order.
    pub fn with_default_stages(manager: ConfigurationManager) -> Self {
        Self::new(manager).with_stage(DataIngestionPipeline::new())
    }

    /// Append a stage.
    pub fn with_stage(mut self, stage: impl PipelineStage + 'static) -> Self {
        self.stages.push(Box::new(stage));
        self
    }

    pub fn manager(&self) -> &ConfigurationManager {
        &self.manager
    }

    /// Names of the registered stages, in execution order.
    pub fn stage_names(&self) -> Vec<&str> {
        self.stages.iter().map(|stage| stage.name()).collect()
    }

    /// Run every stage in order.
    ///
    /// Returns the summary when all stages complete. On the first failure
    /// the remaining stages are skipped and the stage's error is returned
    /// with the stage name attached; `on_report` still sees the failed
    /// report, so callers can keep partial progress.
    pub fn run(&self) -> Result<RunSummary> {
        self.run_with(|_| {})
    }

    /// Like [`PipelineRunner::run`], calling `on_report` after each stage.
    pub fn run_with(&self, mut on_report: impl FnMut(&StageReport)) -> Result<RunSummary> {
        let mut summary = RunSummary::new();
        let span = tracing::info_span!("pipeline", run_id = %summary.run_id);
        let _entered = span.enter();

        for stage in &self.stages {
            let name = stage.name();
            tracing::info!(">>>>>> stage {name} started <<<<<<");
            let mut report = StageReport::started(name);

            match stage.execute(&self.manager) {
                Ok(()) => {
                    report.complete();
                    tracing::info!(">>>>>> stage {name} completed <<<<<<");
                    on_report(&report);
                    summary.stages.push(report);
                }
                Err(err) => {
                    tracing::error!(error = ?err, "stage {name} failed");
                    report.fail(format!("{err:#}"));
                    on_report(&report);
                    summary.stages.push(report);
                    return Err(err.context(format!("stage '{name}' failed")));
                }
            }
        }

        summary.finish();
        if summary.stages.is_empty() {
            tracing::warn!("pipeline has no stages");
        }
        Ok(summary)
    }
}

impl std::fmt::Debug for PipelineRunner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PipelineRunner")
            .field("manager", &self.manager)
            .field("stages", &self.stage_names())
            .finish()
    }
}
