//! Error types for configuration loading and resolution.
//!
//! This module defines all errors that can occur while reading the YAML
//! documents, constructing the configuration manager and building stage
//! configuration entities.

use crate::utils::FsError;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during configuration loading and resolution.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The document path does not resolve to a file.
    #[error("Config document not found at {path}")]
    DocumentNotFound { path: PathBuf },

    /// The document parsed to nothing (empty file, only comments, or `~`).
    #[error("yaml file is empty: {path}")]
    EmptyDocument { path: PathBuf },

    /// Failed to read a configuration file from disk.
    #[error("Failed to read config file at {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to parse YAML configuration.
    #[error("Failed to parse YAML file at {path}: {source}")]
    YamlParse {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    /// The document parsed but its shape is unusable (e.g. a list at the top
    /// level).
    #[error("Invalid config document at {path}: {reason}")]
    InvalidDocument { path: PathBuf, reason: String },

    /// A key required to build a configuration value is absent.
    #[error("Missing required configuration key: {key}")]
    MissingKey { key: String },

    /// A key is present but its value cannot be used.
    #[error("Invalid value for configuration key {key}: {reason}")]
    InvalidValue { key: String, reason: String },

    /// Directory materialization failed.
    #[error(transparent)]
    Fs(#[from] FsError),

    /// The configuration manager could not be constructed.
    #[error("Error initializing ConfigurationManager: {0}")]
    Init(#[source] Box<ConfigError>),

    /// A stage configuration entity could not be built.
    #[error("Error getting {stage} config: {source}")]
    Stage {
        stage: String,
        #[source]
        source: Box<ConfigError>,
    },
}

impl ConfigError {
    pub(crate) fn missing_key(key: impl Into<String>) -> Self {
        Self::MissingKey { key: key.into() }
    }

    pub(crate) fn invalid_value(key: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            key: key.into(),
            reason: reason.into(),
        }
    }

    /// Name of the missing key, looking through `Init` and `Stage` wrappers.
    pub fn missing_key_name(&self) -> Option<&str> {
        match self {
            Self::MissingKey { key } => Some(key),
            Self::Init(inner) => inner.missing_key_name(),
            Self::Stage { source, .. } => source.missing_key_name(),
            _ => None,
        }
    }
}

/// Type alias for Result with ConfigError.
pub type ConfigResult<T> = Result<T, ConfigError>;
