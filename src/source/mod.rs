//! source
//!
//! Where the reference dataset comes from.
//!
//! # Architecture
//!
//! The dataset is read through the [`DatasetLoader`] trait, which has
//! several implementations:
//!
//! - [`BundledLoader`]: the document compiled into the binary (default)
//! - [`FileLoader`]: a JSON file at an explicit path
//! - [`JsonLoader`]: a document already in memory
//!
//! # Loader Selection
//!
//! Use [`create_loader`] to pick a loader from configuration:
//!
//! ```
//! use countrylang::source::create_loader;
//!
//! // No path configured: bundled dataset
//! let loader = create_loader(None);
//! assert_eq!(loader.describe(), "bundled dataset");
//! ```

mod bundled;
mod file_loader;
mod json;
mod traits;

pub use bundled::BundledLoader;
pub use file_loader::FileLoader;
pub use json::JsonLoader;
pub use traits::DatasetLoader;

use std::path::Path;

/// Create a dataset loader.
///
/// - `Some(path)`: [`FileLoader`] reading that file
/// - `None`: [`BundledLoader`]
pub fn create_loader(path: Option<&Path>) -> Box<dyn DatasetLoader> {
    match path {
        Some(path) => Box::new(FileLoader::with_path(path)),
        None => Box::new(BundledLoader),
    }
}

/// The name of the default source.
pub const DEFAULT_SOURCE: &str = "bundled";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_bundled_loader() {
        let loader = create_loader(None);
        assert_eq!(loader.describe(), "bundled dataset");
        assert!(loader.load().is_ok());
    }

    #[test]
    fn create_file_loader() {
        let loader = create_loader(Some(Path::new("/nonexistent/data.json")));
        assert!(loader.describe().contains("/nonexistent/data.json"));
        assert!(loader.load().is_err());
    }

    #[test]
    fn json_loader_describes_size() {
        let loader = JsonLoader::new("{}");
        assert!(loader.describe().contains("2 bytes"));
        assert!(loader.load().is_ok());
    }

    #[test]
    fn default_source_constant() {
        assert_eq!(DEFAULT_SOURCE, "bundled");
    }
}
