//! core::config::schema
//!
//! Configuration schema types.
//!
//! # Location
//!
//! Searched in order of precedence:
//! 1. `$COUNTRYLANG_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/countrylang/config.toml`
//! 3. `~/.countrylang/config.toml` (canonical write location)
//!
//! # Validation
//!
//! Values are validated after parsing (e.g., a dataset path must not be
//! empty).

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::ConfigError;

/// User configuration.
///
/// # Example
///
/// ```toml
/// [dataset]
/// path = "/opt/data/countries.json"
///
/// [output]
/// json = false
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GlobalConfig {
    /// Dataset source settings
    pub dataset: Option<DatasetConfig>,

    /// CLI output defaults
    pub output: Option<OutputConfig>,
}

impl GlobalConfig {
    /// Validate the configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(dataset) = &self.dataset {
            dataset.validate()?;
        }
        Ok(())
    }
}

/// Dataset source settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct DatasetConfig {
    /// JSON document to load instead of the bundled dataset
    pub path: Option<PathBuf>,
}

impl DatasetConfig {
    /// Anchor a relative path at `base`.
    pub fn resolve_relative(&mut self, base: &Path) {
        if let Some(path) = self.path.as_mut() {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(path) = &self.path {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::InvalidValue(
                    "dataset.path cannot be empty".to_string(),
                ));
            }
        }
        Ok(())
    }
}

/// CLI output defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Print JSON instead of text
    pub json: Option<bool>,
}
