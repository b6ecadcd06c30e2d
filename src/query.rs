//! query
//!
//! The public query surface.
//!
//! [`CountryLanguage`] holds a shared reference to a loaded [`Dataset`] and
//! nothing else. Every method is a pure read, so one instance can be cloned
//! and used from any number of threads.
//!
//! # Example
//!
//! ```
//! use countrylang::CountryLanguage;
//!
//! let cl = CountryLanguage::bundled().unwrap();
//!
//! let morocco = cl.country("ma").unwrap();
//! assert_eq!(morocco.code_2, "MA");
//!
//! assert!(cl.country_code_exists("MAR"));
//! assert!(!cl.country_code_exists("ZZ"));
//!
//! let locales = cl.locales(false);
//! assert!(locales.contains(&"az_AZ_Cyrl".to_string()));
//! ```

use std::sync::{Arc, OnceLock};

use crate::core::aggregate::{self, CountryCodes, LanguageCodes};
use crate::core::dataset::Dataset;
use crate::core::error::{DatasetError, QueryError};
use crate::core::lookup::{self, CountryView, LanguageView};
use crate::core::schema::{Country, Language, LocaleCulture};
use crate::core::types::{CountryCodeType, EntityKind, LanguageCodeType};
use crate::source::{BundledLoader, DatasetLoader};

/// The lazily loaded bundled instance, including a cached load failure.
static BUNDLED: OnceLock<Result<CountryLanguage, DatasetError>> = OnceLock::new();

/// Country and language lookups over a loaded dataset.
#[derive(Debug, Clone)]
pub struct CountryLanguage {
    dataset: Arc<Dataset>,
}

impl CountryLanguage {
    /// Wrap an already loaded dataset.
    pub fn new(dataset: Dataset) -> Self {
        Self {
            dataset: Arc::new(dataset),
        }
    }

    /// Load a dataset through `loader`.
    ///
    /// # Errors
    ///
    /// Any read, parse or validation failure.
    pub fn from_loader(loader: &dyn DatasetLoader) -> Result<Self, DatasetError> {
        Dataset::load(loader).map(Self::new)
    }

    /// The process-wide instance over the bundled dataset.
    ///
    /// Loaded on first call, at most once even under concurrent first
    /// access. A load failure is remembered and returned on every call.
    pub fn bundled() -> Result<&'static CountryLanguage, DatasetError> {
        BUNDLED
            .get_or_init(|| Self::from_loader(&BundledLoader))
            .as_ref()
            .map_err(Clone::clone)
    }

    /// The underlying dataset.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    // =========================================================================
    // Code listings
    // =========================================================================

    /// All country codes of one scheme, in dataset order.
    pub fn country_codes(&self, code_type: CountryCodeType) -> Vec<String> {
        aggregate::country_codes(&self.dataset, code_type)
    }

    /// All country codes by integer selector: 1 numeric, 2 alpha-2, 3 alpha-3.
    ///
    /// # Errors
    ///
    /// `InvalidCodeType` for any other selector.
    pub fn country_codes_by_selector(&self, selector: i64) -> Result<Vec<String>, QueryError> {
        let code_type =
            CountryCodeType::from_selector(selector).ok_or(QueryError::InvalidCodeType {
                kind: EntityKind::Country,
                selector,
            })?;
        Ok(self.country_codes(code_type))
    }

    /// All language codes of one scheme, in dataset order.
    ///
    /// Languages without a code in that scheme are skipped.
    pub fn language_codes(&self, code_type: LanguageCodeType) -> Vec<String> {
        aggregate::language_codes(&self.dataset, code_type)
    }

    /// All language codes by integer selector: 1 ISO 639-1, 2 ISO 639-2en,
    /// 3 ISO 639-3.
    ///
    /// # Errors
    ///
    /// `InvalidCodeType` for any other selector.
    pub fn language_codes_by_selector(&self, selector: i64) -> Result<Vec<String>, QueryError> {
        let code_type =
            LanguageCodeType::from_selector(selector).ok_or(QueryError::InvalidCodeType {
                kind: EntityKind::Language,
                selector,
            })?;
        Ok(self.language_codes(code_type))
    }

    // =========================================================================
    // Existence
    // =========================================================================

    /// Whether `code` is a numeric, alpha-2 or alpha-3 code of some country.
    ///
    /// Never fails: blank or malformed input is `false`.
    pub fn country_code_exists(&self, code: &str) -> bool {
        aggregate::country_code_exists(&self.dataset, code)
    }

    /// Whether `code` is an ISO 639-1/2/2en/3 code of some language.
    ///
    /// Never fails: blank or malformed input is `false`.
    pub fn language_code_exists(&self, code: &str) -> bool {
        aggregate::language_code_exists(&self.dataset, code)
    }

    // =========================================================================
    // Single records
    // =========================================================================

    /// A country by alpha-2 or alpha-3 code, with its languages embedded.
    pub fn country(&self, code: &str) -> Result<CountryView, QueryError> {
        self.country_with(code, true)
    }

    /// A country, embedding its languages only if `expand` is set.
    pub fn country_with(&self, code: &str, expand: bool) -> Result<CountryView, QueryError> {
        lookup::get_country(&self.dataset, code, expand)
    }

    /// A language by ISO 639-1/2/2en/3 code, with its countries embedded.
    pub fn language(&self, code: &str) -> Result<LanguageView, QueryError> {
        self.language_with(code, true)
    }

    /// A language, embedding its countries only if `expand` is set.
    pub fn language_with(&self, code: &str, expand: bool) -> Result<LanguageView, QueryError> {
        lookup::get_language(&self.dataset, code, expand)
    }

    // =========================================================================
    // Related codes and locale metadata
    // =========================================================================

    /// Codes of the languages spoken in a country. Unknown country: empty.
    pub fn country_languages(&self, code: &str) -> Result<Vec<LanguageCodes>, QueryError> {
        aggregate::country_languages(&self.dataset, code)
    }

    /// Codes of the countries where a language is spoken. Unknown language:
    /// empty.
    pub fn language_countries(&self, code: &str) -> Result<Vec<CountryCodes>, QueryError> {
        aggregate::language_countries(&self.dataset, code)
    }

    /// MS locale cultures of a country. Unknown country: empty.
    pub fn country_ms_locales(&self, code: &str) -> Result<Vec<LocaleCulture>, QueryError> {
        aggregate::ms_locales(&self.dataset, EntityKind::Country, code)
    }

    /// MS locale cultures of a language. Unknown language: empty.
    pub fn language_ms_locales(&self, code: &str) -> Result<Vec<LocaleCulture>, QueryError> {
        aggregate::ms_locales(&self.dataset, EntityKind::Language, code)
    }

    // =========================================================================
    // Whole-dataset views
    // =========================================================================

    pub fn countries(&self) -> &[Country] {
        self.dataset.countries()
    }

    pub fn languages(&self) -> &[Language] {
        self.dataset.languages()
    }

    pub fn language_families(&self) -> &[String] {
        self.dataset.families()
    }

    /// Every locale as a string; see [`crate::core::schema::Locale::format`].
    pub fn locales(&self, script_before_region: bool) -> Vec<String> {
        aggregate::locales(&self.dataset, script_before_region)
    }

    /// Every language of a family (case-insensitive), countries embedded.
    pub fn language_family_members(&self, family: &str) -> Result<Vec<LanguageView>, QueryError> {
        aggregate::language_family_members(&self.dataset, family)
    }
}
