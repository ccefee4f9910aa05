//! Run report models.
//!
//! This module defines the records the pipeline runner emits while it walks
//! through its stages.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Outcome of a single stage.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StageStatus {
    /// Stage is executing.
    Running,

    /// Stage finished without error.
    Completed,

    /// Stage returned an error; the run was aborted.
    Failed,
}

/// Execution record of one stage.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct StageReport {
    /// Name the stage reported for itself.
    pub name: String,

    pub status: StageStatus,

    pub started_at: DateTime<Utc>,

    /// Set once the stage leaves `Running`.
    pub finished_at: Option<DateTime<Utc>>,

    /// Rendered error chain when the stage failed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl StageReport {
    /// Open a report for a stage that is starting now.
    pub fn started(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            status: StageStatus::Running,
            started_at: Utc::now(),
            finished_at: None,
            error: None,
        }
    }

    /// Mark the stage as completed.
    pub fn complete(&mut self) {
        self.status = StageStatus::Completed;
        self.finished_at = Some(Utc::now());
    }

    /// Mark the stage as failed with the given error text.
    pub fn fail(&mut self, error: impl Into<String>) {
        self.status = StageStatus::Failed;
        self.finished_at = Some(Utc::now());
        self.error = Some(error.into());
    }
}

/// Summary of one pipeline run.
///
/// A run walks its stages in order and stops at the first failure, so at
/// most the last report can carry `StageStatus::Failed`.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RunSummary {
    /// Unique identifier for this run.
    pub run_id: Uuid,

    pub started_at: DateTime<Utc>,

    pub finished_at: Option<DateTime<Utc>>,

    /// One entry per stage that was started, in execution order.
    pub stages: Vec<StageReport>,
}

impl RunSummary {
    pub fn new() -> Self {
        Self {
            run_id: Uuid::new_v4(),
            started_at: Utc::now(),
            finished_at: None,
            stages: Vec::new(),
        }
    }

    /// Stamp the end of the run.
    pub fn finish(&mut self) {
        self.finished_at = Some(Utc::now());
    }

    /// True when every recorded stage completed.
    pub fn succeeded(&self) -> bool {
        self.stages
            .iter()
            .all(|stage| stage.status == StageStatus::Completed)
    }
}

impl Default for RunSummary {
    fn default() -> Self {
        Self::new()
    }
}
