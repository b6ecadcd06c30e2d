//! source::traits
//!
//! Dataset loader trait definition.
//!
//! # Design
//!
//! The query layer never knows where the dataset came from. It receives a
//! [`DatasetLoader`] at construction time, asks it once for the document, and
//! from then on works only with the parsed, validated in-memory copy.
//!
//! # Example
//!
//! ```
//! use countrylang::source::{DatasetLoader, JsonLoader};
//!
//! let loader = JsonLoader::new(r#"{"languageFamilies": ["Uralic"]}"#);
//! let raw = loader.load().unwrap();
//! assert_eq!(raw.language_families, vec!["Uralic"]);
//! ```

use crate::core::error::DatasetError;
use crate::core::schema::{parse_dataset, RawDataset};

/// A source of the reference dataset document.
///
/// Implementations must be thread-safe (Send + Sync). Reading is expected to
/// happen once per process; implementations do not need to cache.
pub trait DatasetLoader: Send + Sync {
    /// Human-readable description of the source, used in diagnostics.
    fn describe(&self) -> String;

    /// Read the raw JSON document.
    ///
    /// # Errors
    ///
    /// `DatasetError::Read` if the source cannot be read.
    fn read(&self) -> Result<String, DatasetError>;

    /// Read and parse the document.
    ///
    /// Default implementation parses the output of [`DatasetLoader::read`].
    fn load(&self) -> Result<RawDataset, DatasetError> {
        let document = self.read()?;
        parse_dataset(&document)
    }
}
