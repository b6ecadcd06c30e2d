//! source::bundled
//!
//! The dataset compiled into the binary.

use super::traits::DatasetLoader;
use crate::core::error::DatasetError;

/// The dataset document shipped with the crate.
const BUNDLED_DATASET: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/data/dataset.json"));

/// Loader for the dataset embedded at compile time.
///
/// Reading never touches the filesystem and cannot fail; parsing and
/// validation still run in [`crate::core::dataset::Dataset::load`].
#[derive(Debug, Clone, Copy, Default)]
pub struct BundledLoader;

impl DatasetLoader for BundledLoader {
    fn describe(&self) -> String {
        "bundled dataset".into()
    }

    fn read(&self) -> Result<String, DatasetError> {
        Ok(BUNDLED_DATASET.to_string())
    }
}
