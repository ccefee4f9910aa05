//! Configuration loading and resolution.
//!
//! This module turns the YAML config and params documents into typed,
//! per-stage configuration entities and guarantees the directories those
//! stages depend on exist before they run.

pub mod error;
pub mod loader;
pub mod manager;
pub mod stage;

pub use error::{ConfigError, ConfigResult};
pub use loader::{read_yaml, ConfigBox};
pub use manager::ConfigurationManager;
pub use stage::StageConfig;
