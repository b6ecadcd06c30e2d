//! countrylang - Country, language and locale reference data
//!
//! Answers lookups over a dataset of countries (ISO 3166-1), languages
//! (ISO 639-1/2/2en/3), language families and locales.
//!
//! # Bundled Data
//!
//! The dataset compiled into the crate is a small sample (26 countries,
//! 26 languages) covering every record shape the schema allows. It is not
//! full ISO coverage: `cl exists country NO` prints `false`. Load a
//! complete dataset of the same layout with
//! [`CountryLanguage::from_loader`] and a [`source::FileLoader`], or in the
//! CLI with `--data <PATH>` or the `dataset.path` config key.
//!
//! # Architecture
//!
//! - [`core`] - Dataset schema, code resolution, lookups and aggregations
//! - [`source`] - Where the dataset document is read from
//! - [`query`] - [`CountryLanguage`], the public query surface
//! - [`cli`] - The `cl` command-line interface
//! - [`ui`] - User-facing output for the CLI
//! - [`logging`] - Diagnostic log subscriber for the CLI
//!
//! # Guarantees
//!
//! 1. The dataset is validated once at load and never mutated afterwards
//! 2. Code lookups are case-insensitive and scheme inference is deterministic
//! 3. Expanded records nest exactly one level deep
//!
//! # Example
//!
//! ```
//! use countrylang::CountryLanguage;
//!
//! let cl = CountryLanguage::bundled().unwrap();
//! let basque = cl.language("baq").unwrap();
//! assert_eq!(basque.iso639_1.as_deref(), Some("eu"));
//! assert_eq!(basque.family, "Language isolate");
//! ```

pub mod cli;
pub mod core;
pub mod logging;
pub mod query;
pub mod source;
pub mod ui;

pub use crate::core::error::{DatasetError, QueryError};
pub use crate::core::types::{CountryCodeType, Direction, EntityKind, LanguageCodeType};
pub use query::CountryLanguage;
