//! source::file_loader
//!
//! Dataset read from a JSON file at an explicit path.
//!
//! The path is used exactly as given. Relative paths resolve against the
//! process working directory, so callers that care should pass an absolute
//! path.

use std::fs;
use std::path::{Path, PathBuf};

use super::traits::DatasetLoader;
use crate::core::error::DatasetError;

/// Loader for a dataset file on disk.
#[derive(Debug, Clone)]
pub struct FileLoader {
    /// Path to the dataset document
    path: PathBuf,
}

impl FileLoader {
    /// Create a loader for the file at `path`.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Get the path to the dataset file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl DatasetLoader for FileLoader {
    fn describe(&self) -> String {
        format!("file '{}'", self.path.display())
    }

    fn read(&self) -> Result<String, DatasetError> {
        fs::read_to_string(&self.path).map_err(|e| DatasetError::Read {
            source_name: self.describe(),
            message: e.to_string(),
        })
    }
}
