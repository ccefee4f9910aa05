//! Typed stage configuration entities.
//!
//! Each stage entity is built from one top-level section of the config
//! document. Construction is the only place where the untyped YAML is
//! validated: every required key must be present and hold a non-empty
//! string, and path values must be usable as paths.

use crate::config::error::{ConfigError, ConfigResult};
use crate::config::loader::ConfigBox;
use mlp_protocol::entity_models::DataIngestionConfig;
use std::path::{Path, PathBuf};

/// A configuration entity owned by a single pipeline stage.
pub trait StageConfig: Sized {
    /// Top-level key of the section this entity is built from.
    const SECTION: &'static str;

    /// Directory the stage writes into. Materialized before the entity is
    /// handed out.
    fn root_dir(&self) -> &Path;

    /// Build the entity from its section.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::MissingKey`] naming the first absent key
    /// - [`ConfigError::InvalidValue`] for empty or malformed values
    fn from_section(section: &ConfigBox) -> ConfigResult<Self>;
}

impl StageConfig for DataIngestionConfig {
    const SECTION: &'static str = "data_ingestion";

    fn root_dir(&self) -> &Path {
        &self.root_dir
    }

    fn from_section(section: &ConfigBox) -> ConfigResult<Self> {
        Ok(Self {
            root_dir: require_path(section, "root_dir")?,
            source_url: section.require_str("source_URL")?.to_string(),
            local_data_file: require_path(section, "local_data_file")?,
            unzip_dir: require_path(section, "unzip_dir")?,
        })
    }
}

fn require_path(section: &ConfigBox, key: &str) -> ConfigResult<PathBuf> {
    let raw = section.require_str(key)?;
    if raw.contains('\0') {
        return Err(ConfigError::invalid_value(key, "path contains a NUL byte"));
    }
    Ok(PathBuf::from(raw))
}
