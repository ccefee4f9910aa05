//! Configuration manager.
//!
//! The manager loads the config and params documents once, materializes the
//! artifact root, and hands out typed stage configuration entities on
//! demand. It is read-only after construction.

use crate::config::error::{ConfigError, ConfigResult};
use crate::config::loader::{read_yaml, ConfigBox};
use crate::config::stage::StageConfig;
use crate::constants::{CONFIG_FILE_PATH, PARAMS_FILE_PATH};
use crate::utils::create_directories;
use mlp_protocol::entity_models::DataIngestionConfig;
use std::path::{Path, PathBuf};

/// Top-level key naming the artifact root directory.
pub const ARTIFACTS_ROOT_KEY: &str = "artifacts_root";

/// Resolved configuration for one pipeline run.
///
/// A value of this type only exists once both documents have been loaded
/// and the artifact root exists on disk; a failed construction returns an
/// error and leaves nothing behind for callers to use.
///
/// # Example
///
/// ```rust,no_run
/// use mlp_core::config::manager::ConfigurationManager;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let manager = ConfigurationManager::new("config/config.yaml", "params.yaml")?;
/// let ingestion = manager.get_data_ingestion_config()?;
/// println!("Downloading {} into {}", ingestion.source_url, ingestion.local_data_file.display());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ConfigurationManager {
    config: ConfigBox,
    params: ConfigBox,
    artifacts_root: PathBuf,
}

impl ConfigurationManager {
    /// Load both documents and create the artifact root.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Init`] wrapping the underlying cause if either
    /// document cannot be loaded, `artifacts_root` is missing or invalid, or
    /// the directory cannot be created.
    pub fn new(config_path: impl AsRef<Path>, params_path: impl AsRef<Path>) -> ConfigResult<Self> {
        Self::initialize(config_path.as_ref(), params_path.as_ref())
            .map_err(|err| ConfigError::Init(Box::new(err)))
    }

    /// Same as [`ConfigurationManager::new`] with the default document paths.
    pub fn from_defaults() -> ConfigResult<Self> {
        Self::new(CONFIG_FILE_PATH, PARAMS_FILE_PATH)
    }

    fn initialize(config_path: &Path, params_path: &Path) -> ConfigResult<Self> {
        let config = read_yaml(config_path)?;
        let params = read_yaml(params_path)?;

        let artifacts_root = PathBuf::from(config.require_str(ARTIFACTS_ROOT_KEY)?);
        create_directories(&[&artifacts_root], true)?;

        Ok(Self {
            config,
            params,
            artifacts_root,
        })
    }

    /// Build the configuration entity of stage `T`.
    ///
    /// Reads the section named by `T::SECTION`, validates it, and creates
    /// the stage root directory. Safe to call any number of times; repeated
    /// calls return equal values and directory creation is a no-op after
    /// the first.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::MissingKey`] if the section or one of its required
    ///   keys is absent
    /// - [`ConfigError::Stage`] wrapping any other failure
    pub fn get_stage_config<T: StageConfig>(&self) -> ConfigResult<T> {
        self.build_stage_config::<T>().map_err(|err| match err {
            ConfigError::MissingKey { .. } => err,
            other => ConfigError::Stage {
                stage: T::SECTION.to_string(),
                source: Box::new(other),
            },
        })
    }

    fn build_stage_config<T: StageConfig>(&self) -> ConfigResult<T> {
        let section = self.config.section(T::SECTION)?;
        let entity = T::from_section(&section)?;
        create_directories(&[entity.root_dir()], true)?;

        tracing::debug!(stage = T::SECTION, "stage configuration resolved");
        Ok(entity)
    }

    /// Configuration of the data ingestion stage.
    pub fn get_data_ingestion_config(&self) -> ConfigResult<DataIngestionConfig> {
        self.get_stage_config()
    }

    pub fn config(&self) -> &ConfigBox {
        &self.config
    }

    /// Hyperparameters. Loaded but not validated here.
    pub fn params(&self) -> &ConfigBox {
        &self.params
    }

    pub fn artifacts_root(&self) -> &Path {
        &self.artifacts_root
    }
}
