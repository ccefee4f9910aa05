//! YAML document loader.
//!
//! This module reads the configuration and parameter documents into a
//! [`ConfigBox`], an immutable view over the parsed YAML that supports both
//! plain key lookup and dotted-path lookup (`data_ingestion.root_dir`).
//! Typed access goes through [`ConfigBox::deserialize`] or the stage
//! entities built by the configuration manager.

use crate::config::error::{ConfigError, ConfigResult};
use serde::de::DeserializeOwned;
use serde_yaml::Value;
use std::fs;
use std::io;
use std::path::Path;

/// Parsed YAML document.
///
/// The wrapped value is always a mapping for boxes produced by
/// [`read_yaml`] and [`ConfigBox::section`]. No schema is enforced; missing
/// keys only surface when a caller asks for them.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigBox {
    value: Value,
}

impl ConfigBox {
    pub fn new(value: Value) -> Self {
        Self { value }
    }

    /// Look up a top-level key.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.value.get(key)
    }

    /// Look up a dotted path such as `data_ingestion.root_dir`.
    ///
    /// Each segment descends into a mapping by key; numeric segments index
    /// into sequences.
    pub fn get_path(&self, path: &str) -> Option<&Value> {
        path.split('.').try_fold(&self.value, |current, segment| {
            match (current, segment.parse::<usize>()) {
                (Value::Sequence(items), Ok(index)) => items.get(index),
                _ => current.get(segment),
            }
        })
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Child mapping stored under `key`.
    ///
    /// # Errors
    ///
    /// - [`ConfigError::MissingKey`] if `key` is absent
    /// - [`ConfigError::InvalidValue`] if the value is not a mapping
    pub fn section(&self, key: &str) -> ConfigResult<ConfigBox> {
        match self.get(key) {
            None => Err(ConfigError::missing_key(key)),
            Some(value @ Value::Mapping(_)) => Ok(ConfigBox::new(value.clone())),
            Some(_) => Err(ConfigError::invalid_value(key, "expected a mapping")),
        }
    }

    /// String stored under `key`, required to be present and non-empty.
    pub fn require_str(&self, key: &str) -> ConfigResult<&str> {
        match self.get(key) {
            None => Err(ConfigError::missing_key(key)),
            Some(Value::String(s)) if s.trim().is_empty() => {
                Err(ConfigError::invalid_value(key, "must not be empty"))
            }
            Some(Value::String(s)) => Ok(s.as_str()),
            Some(Value::Null) => Err(ConfigError::invalid_value(key, "must not be empty")),
            Some(_) => Err(ConfigError::invalid_value(key, "expected a string")),
        }
    }

    /// Deserialize the whole box into a typed view.
    pub fn deserialize<T: DeserializeOwned>(&self) -> Result<T, serde_yaml::Error> {
        serde_yaml::from_value(self.value.clone())
    }

    /// Top-level keys that are strings, in document order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.value
            .as_mapping()
            .into_iter()
            .flat_map(|mapping| mapping.keys())
            .filter_map(Value::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.value.as_mapping().map_or(true, |m| m.is_empty())
    }

    pub fn as_value(&self) -> &Value {
        &self.value
    }
}

/// Reads a YAML document into a [`ConfigBox`].
///
/// # Errors
///
/// - [`ConfigError::DocumentNotFound`] if `path` does not exist
/// - [`ConfigError::EmptyDocument`] if the document holds no data
/// - [`ConfigError::YamlParse`] for syntax errors, with the parser error kept
/// - [`ConfigError::FileRead`] for any other I/O failure
/// - [`ConfigError::InvalidDocument`] if the top level is not a mapping
///
/// # Example
///
/// ```rust,no_run
/// use mlp_core::config::loader::read_yaml;
///
/// # fn example() -> Result<(), Box<dyn std::error::Error>> {
/// let config = read_yaml("config/config.yaml")?;
/// let root = config.get_path("data_ingestion.root_dir");
/// # Ok(())
/// # }
/// ```
pub fn read_yaml(path: impl AsRef<Path>) -> ConfigResult<ConfigBox> {
    let path = path.as_ref();

    let content = fs::read_to_string(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => ConfigError::DocumentNotFound {
            path: path.to_path_buf(),
        },
        _ => ConfigError::FileRead {
            path: path.to_path_buf(),
            source,
        },
    })?;

    if is_blank_document(&content) {
        return Err(ConfigError::EmptyDocument {
            path: path.to_path_buf(),
        });
    }

    let value: Value = serde_yaml::from_str(&content).map_err(|source| ConfigError::YamlParse {
        path: path.to_path_buf(),
        source,
    })?;

    match value {
        Value::Null => Err(ConfigError::EmptyDocument {
            path: path.to_path_buf(),
        }),
        Value::Mapping(_) => {
            tracing::info!("yaml file: {} loaded successfully", path.display());
            Ok(ConfigBox::new(value))
        }
        _ => Err(ConfigError::InvalidDocument {
            path: path.to_path_buf(),
            reason: "expected a mapping at the top level".to_string(),
        }),
    }
}

/// True when the document has no content besides comments and markers.
fn is_blank_document(content: &str) -> bool {
    content.lines().map(str::trim).all(|line| {
        line.is_empty() || line.starts_with('#') || line == "---" || line == "..."
    })
}
