//! core::types
//!
//! Strong types for the code schemes and small enums shared by the dataset
//! and query layers.
//!
//! # Types
//!
//! - [`EntityKind`] - Country or language
//! - [`CountryCodeType`] - ISO 3166 numeric, alpha-2, alpha-3
//! - [`LanguageCodeType`] - ISO 639-1, 639-2, 639-2en, 639-3
//! - [`Direction`] - Script direction of a language
//!
//! # Selectors
//!
//! Callers that speak in integer selectors (1, 2, 3) convert them once at the
//! boundary through `from_selector`. Anything outside the range is rejected
//! there, so the rest of the crate only ever sees a valid enum.
//!
//! # Examples
//!
//! ```
//! use countrylang::core::types::{CountryCodeType, LanguageCodeType};
//!
//! assert_eq!(CountryCodeType::from_selector(2), Some(CountryCodeType::Alpha2));
//! assert_eq!(LanguageCodeType::from_selector(2), Some(LanguageCodeType::Iso639_2En));
//! assert_eq!(CountryCodeType::from_selector(4), None);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// The two record kinds held by the dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Country,
    Language,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Country => "country",
            EntityKind::Language => "language",
        }
    }

    /// Normalize a raw code to the case used by this kind's schemes.
    ///
    /// Country codes are uppercase, language codes lowercase. Surrounding
    /// whitespace is not stripped.
    pub fn normalize(&self, code: &str) -> String {
        match self {
            EntityKind::Country => code.to_uppercase(),
            EntityKind::Language => code.to_lowercase(),
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// ISO 3166 country code schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CountryCodeType {
    /// Zero-padded numeric code, e.g. `504`.
    Numeric,
    /// Two-letter code, e.g. `MA`.
    #[default]
    Alpha2,
    /// Three-letter code, e.g. `MAR`.
    Alpha3,
}

impl CountryCodeType {
    /// All schemes in existence-check order.
    pub const ALL: [CountryCodeType; 3] = [
        CountryCodeType::Numeric,
        CountryCodeType::Alpha2,
        CountryCodeType::Alpha3,
    ];

    /// Parse an integer selector: 1 numeric, 2 alpha-2, 3 alpha-3.
    pub fn from_selector(selector: i64) -> Option<Self> {
        match selector {
            1 => Some(CountryCodeType::Numeric),
            2 => Some(CountryCodeType::Alpha2),
            3 => Some(CountryCodeType::Alpha3),
            _ => None,
        }
    }

    /// Name of the dataset field holding this code.
    pub fn field(&self) -> &'static str {
        match self {
            CountryCodeType::Numeric => "numCode",
            CountryCodeType::Alpha2 => "code_2",
            CountryCodeType::Alpha3 => "code_3",
        }
    }
}

impl fmt::Display for CountryCodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CountryCodeType::Numeric => "numeric",
            CountryCodeType::Alpha2 => "alpha-2",
            CountryCodeType::Alpha3 => "alpha-3",
        };
        write!(f, "{}", name)
    }
}

/// ISO 639 language code schemes.
///
/// `Iso639_2` holds the terminological codes (derived from native names),
/// `Iso639_2En` the bibliographic ones (derived from English names). They
/// differ for a handful of languages, e.g. French is `fra` / `fre`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum LanguageCodeType {
    #[default]
    Iso639_1,
    Iso639_2,
    Iso639_2En,
    Iso639_3,
}

impl LanguageCodeType {
    /// All schemes in existence-check order.
    pub const ALL: [LanguageCodeType; 4] = [
        LanguageCodeType::Iso639_1,
        LanguageCodeType::Iso639_2,
        LanguageCodeType::Iso639_2En,
        LanguageCodeType::Iso639_3,
    ];

    /// Precedence for resolving a three-letter code.
    pub const THREE_LETTER: [LanguageCodeType; 3] = [
        LanguageCodeType::Iso639_2,
        LanguageCodeType::Iso639_2En,
        LanguageCodeType::Iso639_3,
    ];

    /// Parse an integer selector: 1 ISO 639-1, 2 ISO 639-2en, 3 ISO 639-3.
    ///
    /// Selector 2 maps to the English-derived 639-2 codes, matching the
    /// code listings the dataset has always exposed. The terminological
    /// 639-2 codes are reachable through [`LanguageCodeType::Iso639_2`]
    /// directly.
    pub fn from_selector(selector: i64) -> Option<Self> {
        match selector {
            1 => Some(LanguageCodeType::Iso639_1),
            2 => Some(LanguageCodeType::Iso639_2En),
            3 => Some(LanguageCodeType::Iso639_3),
            _ => None,
        }
    }

    /// Name of the dataset field holding this code.
    pub fn field(&self) -> &'static str {
        match self {
            LanguageCodeType::Iso639_1 => "iso639_1",
            LanguageCodeType::Iso639_2 => "iso639_2",
            LanguageCodeType::Iso639_2En => "iso639_2en",
            LanguageCodeType::Iso639_3 => "iso639_3",
        }
    }
}

impl fmt::Display for LanguageCodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LanguageCodeType::Iso639_1 => "ISO 639-1",
            LanguageCodeType::Iso639_2 => "ISO 639-2",
            LanguageCodeType::Iso639_2En => "ISO 639-2en",
            LanguageCodeType::Iso639_3 => "ISO 639-3",
        };
        write!(f, "{}", name)
    }
}

/// Script direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Direction {
    #[default]
    #[serde(rename = "LTR")]
    Ltr,
    #[serde(rename = "RTL")]
    Rtl,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Ltr => write!(f, "LTR"),
            Direction::Rtl => write!(f, "RTL"),
        }
    }
}
