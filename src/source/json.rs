//! source::json
//!
//! Dataset held in memory as a JSON string.

use super::traits::DatasetLoader;
use crate::core::error::DatasetError;

/// Loader over an in-memory document.
///
/// Useful for embedding a custom dataset and for test fixtures.
#[derive(Debug, Clone)]
pub struct JsonLoader {
    document: String,
}

impl JsonLoader {
    pub fn new(document: impl Into<String>) -> Self {
        Self {
            document: document.into(),
        }
    }
}

impl DatasetLoader for JsonLoader {
    fn describe(&self) -> String {
        format!("in-memory document ({} bytes)", self.document.len())
    }

    fn read(&self) -> Result<String, DatasetError> {
        Ok(self.document.clone())
    }
}
