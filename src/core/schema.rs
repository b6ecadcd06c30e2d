//! core::schema
//!
//! Typed records of the reference dataset.
//!
//! # Document Layout
//!
//! ```json
//! {
//!   "countries": [{ "code_2": "MA", "code_3": "MAR", "numCode": "504", ... }],
//!   "languages": [{ "iso639_1": "ar", "iso639_3": "ara", ... }],
//!   "languageFamilies": ["Afro-Asiatic", ...],
//!   "locales": [["ar", "MA"], ["az", "AZ", "Cyrl"], ...]
//! }
//! ```
//!
//! Field names follow the published dataset, so records serialize back to
//! the same shape they were read from. Unknown fields are ignored: the
//! dataset is an external resource and may grow.
//!
//! # Example
//!
//! ```
//! use countrylang::core::schema::parse_dataset;
//!
//! let raw = parse_dataset(r#"{
//!     "countries": [],
//!     "languages": [],
//!     "languageFamilies": ["Uralic"],
//!     "locales": [["fi", "FI"]]
//! }"#).unwrap();
//!
//! assert_eq!(raw.locales[0].to_string(), "fi_FI");
//! ```

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

use super::error::DatasetError;
use super::types::{CountryCodeType, Direction, LanguageCodeType};

/// The whole document as read from a [`crate::source::DatasetLoader`].
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RawDataset {
    #[serde(default)]
    pub countries: Vec<Country>,
    #[serde(default)]
    pub languages: Vec<Language>,
    #[serde(rename = "languageFamilies", default)]
    pub language_families: Vec<String>,
    #[serde(default)]
    pub locales: Vec<Locale>,
}

/// Parse a dataset document.
///
/// # Errors
///
/// Returns `DatasetError::Parse` if the document is not valid JSON or a
/// record does not match the schema.
pub fn parse_dataset(json: &str) -> Result<RawDataset, DatasetError> {
    serde_json::from_str(json).map_err(|e| DatasetError::Parse(e.to_string()))
}

/// A country record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Country {
    #[serde(rename = "numCode")]
    pub num_code: String,
    pub code_2: String,
    pub code_3: String,
    pub name: String,
    /// Codes of the languages spoken in the country.
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(rename = "langCultureMs", default)]
    pub lang_culture_ms: Vec<LocaleCulture>,
}

impl Country {
    /// The value of one code field, `None` when empty.
    pub fn code(&self, code_type: CountryCodeType) -> Option<&str> {
        let value = match code_type {
            CountryCodeType::Numeric => &self.num_code,
            CountryCodeType::Alpha2 => &self.code_2,
            CountryCodeType::Alpha3 => &self.code_3,
        };
        non_empty(value)
    }
}

/// A language record.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Language {
    /// Not every language has a two-letter code.
    #[serde(default, deserialize_with = "empty_as_none")]
    pub iso639_1: Option<String>,
    pub iso639_2: String,
    pub iso639_2en: String,
    pub iso639_3: String,
    /// English names.
    #[serde(default)]
    pub name: Vec<String>,
    #[serde(rename = "nativeName", default)]
    pub native_name: Vec<String>,
    #[serde(default)]
    pub direction: Direction,
    pub family: String,
    /// Codes of the countries where the language is spoken.
    #[serde(default)]
    pub countries: Vec<String>,
    #[serde(rename = "langCultureMs", default)]
    pub lang_culture_ms: Vec<LocaleCulture>,
}

impl Language {
    /// The value of one code field, `None` when absent or empty.
    pub fn code(&self, code_type: LanguageCodeType) -> Option<&str> {
        match code_type {
            LanguageCodeType::Iso639_1 => self.iso639_1.as_deref().and_then(non_empty),
            LanguageCodeType::Iso639_2 => non_empty(&self.iso639_2),
            LanguageCodeType::Iso639_2En => non_empty(&self.iso639_2en),
            LanguageCodeType::Iso639_3 => non_empty(&self.iso639_3),
        }
    }

    /// First English name, if any.
    pub fn primary_name(&self) -> Option<&str> {
        self.name.first().map(String::as_str)
    }
}

/// Vendor locale metadata attached to a country or language.
///
/// Passed through untouched.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LocaleCulture {
    #[serde(rename = "langCultureName")]
    pub lang_culture_name: String,
    #[serde(rename = "displayName")]
    pub display_name: String,
    #[serde(rename = "cultureCode")]
    pub culture_code: String,
}

/// A (language, region, optional script) triple.
///
/// Stored as a two- or three-element string array. An empty script element
/// counts as absent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct Locale {
    pub language: String,
    pub region: String,
    pub script: Option<String>,
}

impl Locale {
    pub fn new(
        language: impl Into<String>,
        region: impl Into<String>,
        script: Option<String>,
    ) -> Self {
        Self {
            language: language.into(),
            region: region.into(),
            script: script.filter(|s| !s.is_empty()),
        }
    }

    /// Format as `language_region[_script]`, or `language[_script]_region`
    /// when `script_before_region` is set.
    pub fn format(&self, script_before_region: bool) -> String {
        let script = self
            .script
            .as_deref()
            .map(|s| format!("_{}", s))
            .unwrap_or_default();

        if script_before_region {
            format!("{}{}_{}", self.language, script, self.region)
        } else {
            format!("{}_{}{}", self.language, self.region, script)
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(false))
    }
}

impl TryFrom<Vec<String>> for Locale {
    type Error = String;

    fn try_from(parts: Vec<String>) -> Result<Self, Self::Error> {
        let mut parts = parts.into_iter();
        match (parts.next(), parts.next(), parts.next(), parts.next()) {
            (Some(language), Some(region), script, None) => {
                Ok(Locale::new(language, region, script))
            }
            _ => Err("locale must have 2 or 3 elements: language, region, optional script".into()),
        }
    }
}

impl From<Locale> for Vec<String> {
    fn from(locale: Locale) -> Self {
        let mut parts = vec![locale.language, locale.region];
        if let Some(script) = locale.script {
            parts.push(script);
        }
        parts
    }
}

fn non_empty(value: &str) -> Option<&str> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}

fn empty_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value: Option<String> = Option::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}
