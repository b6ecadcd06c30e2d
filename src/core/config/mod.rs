//! core::config
//!
//! Configuration schema and loading.
//!
//! # Precedence
//!
//! Values are resolved in this order (later overrides earlier):
//! 1. Default values
//! 2. Config file
//! 3. CLI flags (not handled here)
//!
//! # Locations
//!
//! Searched in order:
//! 1. `$COUNTRYLANG_CONFIG` if set
//! 2. `$XDG_CONFIG_HOME/countrylang/config.toml`
//! 3. `~/.countrylang/config.toml` (canonical write location)
//!
//! A missing file is not an error; defaults apply. A relative
//! `dataset.path` is relative to the directory of the file it appears in.
//!
//! # Example
//!
//! ```no_run
//! use countrylang::core::config::Config;
//!
//! let config = Config::load().unwrap();
//! match config.dataset_path() {
//!     Some(path) => println!("dataset: {}", path.display()),
//!     None => println!("dataset: bundled"),
//! }
//! println!("json: {}", config.json_output());
//! ```

pub mod schema;

pub use schema::{DatasetConfig, GlobalConfig, OutputConfig};

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV: &str = "COUNTRYLANG_CONFIG";

/// Keys accepted by [`Config::get`] and [`Config::set`].
pub const KEYS: &[&str] = &["dataset.path", "output.json"];

/// Errors from configuration operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config file '{path}': {message}")]
    ParseError { path: PathBuf, message: String },

    #[error("failed to write config file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config value: {0}")]
    InvalidValue(String),

    #[error("unknown config key '{0}', expected one of: dataset.path, output.json")]
    UnknownKey(String),

    #[error("home directory not found")]
    NoHomeDir,
}

/// Loaded configuration and where it came from.
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub global: GlobalConfig,
    /// Path to the config file (if one was found)
    path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from the standard locations.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file exists but cannot be read, parsed,
    /// or validated.
    pub fn load() -> Result<Self, ConfigError> {
        match Self::locate() {
            Some(path) => Self::load_from_path(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load configuration from an explicit file.
    ///
    /// A relative `dataset.path` is resolved against the directory holding
    /// the config file, never against the process working directory.
    pub fn load_from_path(path: &Path) -> Result<Self, ConfigError> {
        let mut global = Self::read_config(path)?;
        global.validate()?;
        if let (Some(dataset), Some(base)) = (global.dataset.as_mut(), path.parent()) {
            dataset.resolve_relative(base);
        }
        tracing::debug!(path = %path.display(), "config loaded");
        Ok(Self {
            global,
            path: Some(path.to_path_buf()),
        })
    }

    /// First existing config file in precedence order.
    fn locate() -> Option<PathBuf> {
        // 1. Check $COUNTRYLANG_CONFIG
        if let Ok(path) = std::env::var(CONFIG_ENV) {
            let path = PathBuf::from(path);
            if path.exists() {
                return Some(path);
            }
        }

        // 2. Check $XDG_CONFIG_HOME/countrylang/config.toml
        if let Ok(xdg_home) = std::env::var("XDG_CONFIG_HOME") {
            let path = PathBuf::from(xdg_home).join("countrylang/config.toml");
            if path.exists() {
                return Some(path);
            }
        }

        // 3. Check ~/.countrylang/config.toml
        if let Some(home) = dirs::home_dir() {
            let path = home.join(".countrylang/config.toml");
            if path.exists() {
                return Some(path);
            }
        }

        None
    }

    fn read_config(path: &Path) -> Result<GlobalConfig, ConfigError> {
        let contents = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }

    /// Get the canonical path for the config file.
    ///
    /// Returns `~/.countrylang/config.toml`.
    pub fn global_config_path() -> Result<PathBuf, ConfigError> {
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
        Ok(home.join(".countrylang/config.toml"))
    }

    /// Where [`Config::save`] writes: the file this config was loaded from,
    /// otherwise the canonical location.
    pub fn write_path(&self) -> Result<PathBuf, ConfigError> {
        match &self.path {
            Some(path) => Ok(path.clone()),
            None => Self::global_config_path(),
        }
    }

    /// Validate and write this config atomically.
    pub fn save(&self) -> Result<PathBuf, ConfigError> {
        self.global.validate()?;
        let path = self.write_path()?;
        write_config_atomic(&path, &self.global)?;
        Ok(path)
    }

    // =========================================================================
    // Keyed access for `cl config`
    // =========================================================================

    /// Current value of a key, `None` when unset.
    pub fn get(&self, key: &str) -> Result<Option<String>, ConfigError> {
        match key {
            "dataset.path" => Ok(self
                .dataset_path()
                .map(|p| p.display().to_string())),
            "output.json" => Ok(self
                .global
                .output
                .as_ref()
                .and_then(|o| o.json)
                .map(|b| b.to_string())),
            _ => Err(ConfigError::UnknownKey(key.to_string())),
        }
    }

    /// Set a key from its string form.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        match key {
            "dataset.path" => {
                let candidate = DatasetConfig {
                    path: Some(PathBuf::from(value)),
                };
                candidate.validate()?;
                self.global.dataset = Some(candidate);
            }
            "output.json" => {
                let json = value.parse::<bool>().map_err(|_| {
                    ConfigError::InvalidValue(format!(
                        "output.json must be 'true' or 'false', got '{}'",
                        value
                    ))
                })?;
                let output = self.global.output.get_or_insert_with(Default::default);
                output.json = Some(json);
            }
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    // =========================================================================
    // Accessor methods with defaults
    // =========================================================================

    /// Get the configured dataset file.
    ///
    /// Returns `None` if not configured (the bundled dataset is used).
    pub fn dataset_path(&self) -> Option<&Path> {
        self.global
            .dataset
            .as_ref()
            .and_then(|d| d.path.as_deref())
    }

    /// Check if JSON output is the default.
    ///
    /// Defaults to `false` if not configured.
    pub fn json_output(&self) -> bool {
        self.global
            .output
            .as_ref()
            .and_then(|o| o.json)
            .unwrap_or(false)
    }

    /// Get the path to the loaded config file.
    pub fn loaded_from(&self) -> Option<&Path> {
        self.path.as_deref()
    }
}

/// Write a config file atomically.
///
/// Creates parent directories if needed, writes a temp file next to the
/// target and renames it into place.
fn write_config_atomic<T: serde::Serialize>(path: &Path, config: &T) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError {
            path: path.to_path_buf(),
            source: e,
        })?;
    }

    let contents =
        toml::to_string_pretty(config).map_err(|e| ConfigError::InvalidValue(e.to_string()))?;

    let temp_path = path.with_extension("toml.tmp");
    let mut file = fs::File::create(&temp_path).map_err(|e| ConfigError::WriteError {
        path: temp_path.clone(),
        source: e,
    })?;

    file.write_all(contents.as_bytes())
        .map_err(|e| ConfigError::WriteError {
            path: temp_path.clone(),
            source: e,
        })?;

    file.sync_all().map_err(|e| ConfigError::WriteError {
        path: temp_path.clone(),
        source: e,
    })?;

    fs::rename(&temp_path, path).map_err(|e| ConfigError::WriteError {
        path: path.to_path_buf(),
        source: e,
    })?;

    Ok(())
}
