//! core::lookup
//!
//! Single-record fetch and cross-reference expansion.
//!
//! # Expansion
//!
//! Countries list their languages by code and languages list their countries
//! by code. An expanded view replaces that code list with the referenced
//! records, fetched with expansion switched off. Depth is therefore exactly
//! one hop in either direction.
//!
//! The hop limit is carried by the types: [`CountryView`] embeds raw
//! [`Language`] records, whose `countries` field is a plain `Vec<String>`, and
//! [`LanguageView`] embeds raw [`Country`] records. There is no type that can
//! hold a second level of nesting.
//!
//! ```text
//! country("MA")             CountryView { languages: Records([Language{ar}, Language{fr}]) }
//!   Language{ar}.countries  ["DZ", "IL", "MA"]   <- codes, not records
//! ```

use serde::Serialize;

use super::dataset::Dataset;
use super::error::QueryError;
use super::resolve::{resolve_country, resolve_language};
use super::schema::{Country, Language, LocaleCulture};
use super::types::{Direction, EntityKind};

/// A related-entity list: either the raw codes or the embedded records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Linked<T> {
    Codes(Vec<String>),
    Records(Vec<T>),
}

impl<T> Linked<T> {
    pub fn len(&self) -> usize {
        match self {
            Linked::Codes(codes) => codes.len(),
            Linked::Records(records) => records.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The embedded records, or `None` if this list holds codes.
    pub fn records(&self) -> Option<&[T]> {
        match self {
            Linked::Codes(_) => None,
            Linked::Records(records) => Some(records),
        }
    }

    /// The raw codes, or `None` if this list was expanded.
    pub fn codes(&self) -> Option<&[String]> {
        match self {
            Linked::Codes(codes) => Some(codes),
            Linked::Records(_) => None,
        }
    }
}

/// A country as returned by a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CountryView {
    #[serde(rename = "numCode")]
    pub num_code: String,
    pub code_2: String,
    pub code_3: String,
    pub name: String,
    pub languages: Linked<Language>,
    #[serde(rename = "langCultureMs")]
    pub lang_culture_ms: Vec<LocaleCulture>,
}

/// A language as returned by a query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageView {
    pub iso639_1: Option<String>,
    pub iso639_2: String,
    pub iso639_2en: String,
    pub iso639_3: String,
    pub name: Vec<String>,
    #[serde(rename = "nativeName")]
    pub native_name: Vec<String>,
    pub direction: Direction,
    pub family: String,
    pub countries: Linked<Country>,
    #[serde(rename = "langCultureMs")]
    pub lang_culture_ms: Vec<LocaleCulture>,
}

/// Find the country a raw code refers to.
///
/// # Errors
///
/// `EmptyInput`, `InvalidCodeFormat` or `NotFound`.
pub fn find_country<'a>(dataset: &'a Dataset, code: &str) -> Result<&'a Country, QueryError> {
    let query = resolve_country(code)?;
    tracing::trace!(code = %query.code, code_type = %query.code_type, "country lookup");
    dataset
        .match_country(&query)
        .ok_or(QueryError::NotFound {
            kind: EntityKind::Country,
            code: query.code,
        })
}

/// Find the language a raw code refers to.
///
/// # Errors
///
/// `EmptyInput`, `InvalidCodeFormat` or `NotFound`.
pub fn find_language<'a>(dataset: &'a Dataset, code: &str) -> Result<&'a Language, QueryError> {
    let query = resolve_language(code)?;
    tracing::trace!(code = %query.code, "language lookup");
    dataset
        .match_language(&query)
        .ok_or(QueryError::NotFound {
            kind: EntityKind::Language,
            code: query.code,
        })
}

/// Fetch a country, optionally embedding its languages.
pub fn get_country(dataset: &Dataset, code: &str, expand: bool) -> Result<CountryView, QueryError> {
    let country = find_country(dataset, code)?;
    if expand {
        expand_country(dataset, country)
    } else {
        Ok(shallow_country(country))
    }
}

/// Fetch a language, optionally embedding its countries.
pub fn get_language(
    dataset: &Dataset,
    code: &str,
    expand: bool,
) -> Result<LanguageView, QueryError> {
    let language = find_language(dataset, code)?;
    if expand {
        expand_language(dataset, language)
    } else {
        Ok(shallow_language(language))
    }
}

/// View of a country with its language codes left as codes.
pub fn shallow_country(country: &Country) -> CountryView {
    CountryView {
        num_code: country.num_code.clone(),
        code_2: country.code_2.clone(),
        code_3: country.code_3.clone(),
        name: country.name.clone(),
        languages: Linked::Codes(country.languages.clone()),
        lang_culture_ms: country.lang_culture_ms.clone(),
    }
}

/// View of a language with its country codes left as codes.
pub fn shallow_language(language: &Language) -> LanguageView {
    LanguageView {
        iso639_1: language.iso639_1.clone(),
        iso639_2: language.iso639_2.clone(),
        iso639_2en: language.iso639_2en.clone(),
        iso639_3: language.iso639_3.clone(),
        name: language.name.clone(),
        native_name: language.native_name.clone(),
        direction: language.direction,
        family: language.family.clone(),
        countries: Linked::Codes(language.countries.clone()),
        lang_culture_ms: language.lang_culture_ms.clone(),
    }
}

/// View of a country with each referenced language embedded.
///
/// The embedded records are fetched without expansion.
pub fn expand_country(dataset: &Dataset, country: &Country) -> Result<CountryView, QueryError> {
    let languages = country
        .languages
        .iter()
        .map(|code| find_language(dataset, code).cloned())
        .collect::<Result<Vec<_>, _>>()?;
    tracing::trace!(country = %country.code_2, languages = languages.len(), "expanded country");

    Ok(CountryView {
        languages: Linked::Records(languages),
        ..shallow_country(country)
    })
}

/// View of a language with each referenced country embedded.
///
/// The embedded records are fetched without expansion.
pub fn expand_language(dataset: &Dataset, language: &Language) -> Result<LanguageView, QueryError> {
    let countries = language
        .countries
        .iter()
        .map(|code| find_country(dataset, code).cloned())
        .collect::<Result<Vec<_>, _>>()?;
    tracing::trace!(language = %language.iso639_3, countries = countries.len(), "expanded language");

    Ok(LanguageView {
        countries: Linked::Records(countries),
        ..shallow_language(language)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::schema::parse_dataset;

    /// `xxa` is the ISO 639-3 code of one language and the ISO 639-2 code of
    /// another, which exercises the three-letter precedence.
    const FIXTURE: &str = r#"{
        "countries": [
            {"code_2": "MA", "code_3": "MAR", "numCode": "504", "name": "Morocco", "languages": ["ar", "fr"],
             "langCultureMs": [{"langCultureName": "ar-MA", "displayName": "Arabic - Morocco", "cultureCode": "0x1801"}]},
            {"code_2": "FR", "code_3": "FRA", "numCode": "250", "name": "France", "languages": ["fra"]},
            {"code_2": "AQ", "code_3": "ATA", "numCode": "010", "name": "Antarctica", "languages": []}
        ],
        "languages": [
            {"iso639_1": "ar", "iso639_2": "ara", "iso639_2en": "ara", "iso639_3": "ara",
             "name": ["Arabic"], "direction": "RTL", "family": "Afro-Asiatic", "countries": ["MA"]},
            {"iso639_1": "fr", "iso639_2": "fra", "iso639_2en": "fre", "iso639_3": "fra",
             "name": ["French"], "family": "Indo-European", "countries": ["MAR", "FR"]},
            {"iso639_2": "aaa", "iso639_2en": "aaa", "iso639_3": "xxa",
             "name": ["First"], "family": "Constructed"},
            {"iso639_2": "xxa", "iso639_2en": "bbb", "iso639_3": "bbb",
             "name": ["Second"], "family": "Constructed"}
        ],
        "languageFamilies": ["Afro-Asiatic", "Indo-European", "Constructed"],
        "locales": []
    }"#;

    fn dataset() -> Dataset {
        Dataset::from_raw(parse_dataset(FIXTURE).unwrap()).unwrap()
    }

    #[test]
    fn find_country_by_alpha2_and_alpha3() {
        let ds = dataset();
        assert_eq!(find_country(&ds, "ma").unwrap().name, "Morocco");
        assert_eq!(find_country(&ds, "fra").unwrap().name, "France");
    }

    #[test]
    fn find_country_errors_are_distinct() {
        let ds = dataset();
        assert_eq!(
            find_country(&ds, ""),
            Err(QueryError::EmptyInput("country code"))
        );
        assert!(matches!(
            find_country(&ds, "MARO"),
            Err(QueryError::InvalidCodeFormat { .. })
        ));
        assert_eq!(
            find_country(&ds, "xx"),
            Err(QueryError::NotFound {
                kind: EntityKind::Country,
                code: "XX".into()
            })
        );
    }

    #[test]
    fn numeric_code_is_not_a_fetch_key() {
        let ds = dataset();
        assert!(find_country(&ds, "504").unwrap_err().is_not_found());
    }

    #[test]
    fn find_language_precedence() {
        let ds = dataset();
        // Matches iso639_2 of "Second" before iso639_3 of "First".
        assert_eq!(find_language(&ds, "xxa").unwrap().name, ["Second"]);
        assert_eq!(find_language(&ds, "FRE").unwrap().iso639_3, "fra");
        assert_eq!(find_language(&ds, "aaa").unwrap().iso639_3, "xxa");
    }

    #[test]
    fn two_letter_language_code_only_matches_iso639_1() {
        let ds = dataset();
        assert_eq!(find_language(&ds, "AR").unwrap().iso639_3, "ara");
        assert!(find_language(&ds, "xx").unwrap_err().is_not_found());
    }

    #[test]
    fn shallow_country_keeps_codes() {
        let ds = dataset();
        let view = get_country(&ds, "MA", false).unwrap();
        assert_eq!(view.languages.codes(), Some(&["ar".to_string(), "fr".to_string()][..]));
        assert_eq!(view.lang_culture_ms.len(), 1);
    }

    #[test]
    fn expanded_country_embeds_raw_languages() {
        let ds = dataset();
        let view = get_country(&ds, "MA", true).unwrap();
        let languages = view.languages.records().unwrap();
        assert_eq!(languages.len(), 2);
        assert_eq!(languages[0].iso639_3, "ara");
        assert_eq!(languages[1].iso639_3, "fra");
        // One hop only: the embedded language still lists country codes.
        assert_eq!(languages[1].countries, vec!["MAR", "FR"]);
    }

    #[test]
    fn expanded_language_embeds_raw_countries() {
        let ds = dataset();
        let view = get_language(&ds, "fr", true).unwrap();
        let countries = view.countries.records().unwrap();
        assert_eq!(countries.len(), 2);
        assert_eq!(countries[0].code_2, "MA");
        assert_eq!(countries[0].languages, vec!["ar", "fr"]);
        assert_eq!(countries[1].code_2, "FR");
    }

    #[test]
    fn empty_reference_list_expands_to_empty() {
        let ds = dataset();
        let country = get_country(&ds, "AQ", true).unwrap();
        assert_eq!(country.languages, Linked::Records(vec![]));

        let language = get_language(&ds, "bbb", true).unwrap();
        assert!(language.countries.is_empty());
        assert!(language.countries.records().is_some());
    }

    #[test]
    fn shallow_fetch_is_repeatable() {
        let ds = dataset();
        let first = get_country(&ds, "FR", false).unwrap();
        let second = get_country(&ds, "FR", false).unwrap();
        assert_eq!(first, second);
        assert_eq!(ds.countries()[1].languages, vec!["fra"]);
    }

    #[test]
    fn views_serialize_with_dataset_field_names() {
        let ds = dataset();
        let view = get_country(&ds, "MA", true).unwrap();
        let json = serde_json::to_value(&view).unwrap();
        assert_eq!(json["numCode"], "504");
        assert_eq!(json["languages"][0]["iso639_3"], "ara");
        assert_eq!(json["languages"][0]["countries"][0], "MA");

        let shallow = serde_json::to_value(get_country(&ds, "MA", false).unwrap()).unwrap();
        assert_eq!(shallow["languages"][0], "ar");
    }
}
