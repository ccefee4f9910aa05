//! Mock stage implementations for deterministic runner tests.

use anyhow::{bail, Result};
use mlp_core::config::manager::ConfigurationManager;
use mlp_core::pipeline::PipelineStage;
use std::sync::{Arc, Mutex};

/// Shared log of stage names in the order they executed.
#[allow(dead_code)]
pub type ExecutionLog = Arc<Mutex<Vec<String>>>;

/// A stage that records its execution and succeeds.
#[allow(dead_code)]
pub struct RecordingStage {
    pub name: String,
    pub log: ExecutionLog,
}

#[allow(dead_code)]
impl RecordingStage {
    pub fn new(name: &str, log: &ExecutionLog) -> Self {
        Self {
            name: name.to_string(),
            log: Arc::clone(log),
        }
    }
}

impl PipelineStage for RecordingStage {
    fn name(&self) -> &str {
        &self.name
    }

    fn execute(&self, _manager: &ConfigurationManager) -> Result<()> {
        self.log
            .lock()
            .expect("Execution log poisoned")
            .push(self.name.clone());
        Ok(())
    }
}

/// A stage that records its execution and then fails.
#[allow(dead_code)]
pub struct FailingStage {
    pub name: String,
    pub message: String,
    pub log: ExecutionLog,
}

#[allow(dead_code)]
impl FailingStage {
    pub fn new(name: &str, message: &str, log: &ExecutionLog) -> Self {
        Self {
            name: name.to_string(),
            message: message.to_string(),
            log: Arc::clone(log),
        }
    }
}

impl PipelineStage for FailingStage {
    fn name(&self) -> &str {
        &self.name
    }

    fn execute(&self, _manager: &ConfigurationManager) -> Result<()> {
        self.log
            .lock()
            .expect("Execution log poisoned")
            .push(self.name.clone());
        bail!("{}", self.message)
    }
}

/// A stage that reads a value from the params document.
#[allow(dead_code)]
pub struct ParamsReadingStage {
    pub key: String,
    pub seen: Arc<Mutex<Option<u64>>>,
}

impl PipelineStage for ParamsReadingStage {
    fn name(&self) -> &str {
        "params reader"
    }

    fn execute(&self, manager: &ConfigurationManager) -> Result<()> {
        let value = manager
            .params()
            .get(&self.key)
            .and_then(serde_yaml::Value::as_u64);
        *self.seen.lock().expect("Params slot poisoned") = value;
        Ok(())
    }
}
