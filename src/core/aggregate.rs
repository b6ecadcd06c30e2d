//! core::aggregate
//!
//! Derived views over the dataset: code listings, existence checks,
//! related-code tuples, locale strings and family membership.

use serde::Serialize;

use super::dataset::Dataset;
use super::error::QueryError;
use super::lookup::{expand_language, find_country, find_language, LanguageView};
use super::resolve::normalized;
use super::schema::LocaleCulture;
use super::types::{CountryCodeType, EntityKind, LanguageCodeType};

/// Identifying codes of a language, as listed for a country.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageCodes {
    pub iso639_1: Option<String>,
    /// The English-derived ISO 639-2 code.
    pub iso639_2: String,
    pub iso639_3: String,
}

/// Identifying codes of a country, as listed for a language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryCodes {
    pub code_2: String,
    pub code_3: String,
    #[serde(rename = "numCode")]
    pub num_code: String,
}

/// Every non-empty value of a country code field, in dataset order.
pub fn country_codes(dataset: &Dataset, code_type: CountryCodeType) -> Vec<String> {
    dataset
        .countries()
        .iter()
        .filter_map(|c| c.code(code_type))
        .map(str::to_string)
        .collect()
}

/// Every non-empty value of a language code field, in dataset order.
///
/// Languages without a code in the scheme contribute nothing.
pub fn language_codes(dataset: &Dataset, code_type: LanguageCodeType) -> Vec<String> {
    dataset
        .languages()
        .iter()
        .filter_map(|l| l.code(code_type))
        .map(str::to_string)
        .collect()
}

/// Whether any country carries `code` in any scheme.
///
/// Schemes are tried numeric, alpha-2, alpha-3. Blank input is `false`.
pub fn country_code_exists(dataset: &Dataset, code: &str) -> bool {
    let Ok(code) = normalized(code, EntityKind::Country) else {
        return false;
    };
    CountryCodeType::ALL
        .iter()
        .any(|&code_type| dataset.country_by(code_type, &code).is_some())
}

/// Whether any language carries `code` in any scheme.
///
/// Schemes are tried ISO 639-1, 639-2, 639-2en, 639-3. Blank input is
/// `false`.
pub fn language_code_exists(dataset: &Dataset, code: &str) -> bool {
    let Ok(code) = normalized(code, EntityKind::Language) else {
        return false;
    };
    LanguageCodeType::ALL
        .iter()
        .any(|&code_type| dataset.language_by(code_type, &code).is_some())
}

/// Codes of every language spoken in a country, in the country's order.
///
/// An unknown country yields an empty list; malformed input is an error.
pub fn country_languages(dataset: &Dataset, code: &str) -> Result<Vec<LanguageCodes>, QueryError> {
    let country = match find_country(dataset, code) {
        Ok(country) => country,
        Err(e) if e.is_not_found() => return Ok(Vec::new()),
        Err(e) => return Err(e),
    };

    country
        .languages
        .iter()
        .map(|lang_code| {
            let language = find_language(dataset, lang_code)?;
            Ok(LanguageCodes {
                iso639_1: language.iso639_1.clone(),
                iso639_2: language.iso639_2en.clone(),
                iso639_3: language.iso639_3.clone(),
            })
        })
        .collect()
}

/// Codes of every country where a language is spoken, in the language's
/// order.
///
/// An unknown language yields an empty list; malformed input is an error.
pub fn language_countries(dataset: &Dataset, code: &str) -> Result<Vec<CountryCodes>, QueryError> {
    let language = match find_language(dataset, code) {
        Ok(language) => language,
        Err(e) if e.is_not_found() => return Ok(Vec::new()),
        Err(e) => return Err(e),
    };

    language
        .countries
        .iter()
        .map(|country_code| {
            let country = find_country(dataset, country_code)?;
            Ok(CountryCodes {
                code_2: country.code_2.clone(),
                code_3: country.code_3.clone(),
                num_code: country.num_code.clone(),
            })
        })
        .collect()
}

/// The MS locale cultures attached to a country or language.
///
/// An unknown code yields an empty list; malformed input is an error.
pub fn ms_locales(
    dataset: &Dataset,
    kind: EntityKind,
    code: &str,
) -> Result<Vec<LocaleCulture>, QueryError> {
    let found = match kind {
        EntityKind::Country => find_country(dataset, code).map(|c| &c.lang_culture_ms),
        EntityKind::Language => find_language(dataset, code).map(|l| &l.lang_culture_ms),
    };
    match found {
        Ok(cultures) => Ok(cultures.clone()),
        Err(e) if e.is_not_found() => Ok(Vec::new()),
        Err(e) => Err(e),
    }
}

/// Every locale formatted as a string.
///
/// `script_before_region == false` gives `language_region[_script]`,
/// `true` gives `language[_script]_region`.
pub fn locales(dataset: &Dataset, script_before_region: bool) -> Vec<String> {
    dataset
        .locales()
        .iter()
        .map(|locale| locale.format(script_before_region))
        .collect()
}

/// Every language of a family, each with its countries embedded.
///
/// The family name is matched case-insensitively.
///
/// # Errors
///
/// `EmptyInput` for a blank name, `UnknownFamily` if no family matches.
pub fn language_family_members(
    dataset: &Dataset,
    family: &str,
) -> Result<Vec<LanguageView>, QueryError> {
    if family.trim().is_empty() {
        return Err(QueryError::EmptyInput("language family"));
    }
    let wanted = family.to_lowercase();

    let known = dataset
        .families()
        .iter()
        .any(|f| f.to_lowercase() == wanted);
    if !known {
        return Err(QueryError::UnknownFamily(family.to_string()));
    }

    dataset
        .languages()
        .iter()
        .filter(|l| l.family.to_lowercase() == wanted)
        .map(|l| expand_language(dataset, l))
        .collect()
}
