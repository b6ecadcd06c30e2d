//! core::dataset
//!
//! The validated, indexed, immutable in-memory dataset.
//!
//! # Invariants
//!
//! Checked once in [`Dataset::from_raw`] and never re-validated per query:
//!
//! - Every language family belongs to the dataset's family list
//! - Alpha-2, alpha-3 and numeric country codes are unique
//! - ISO 639-3 codes are present and unique
//! - Every country → language and language → country reference resolves
//!
//! # Indexes
//!
//! Each code field gets a map from value to the position of the FIRST record
//! carrying it, so an indexed lookup returns exactly what a front-to-back
//! scan would.

use std::collections::{HashMap, HashSet};

use super::error::DatasetError;
use super::resolve::{resolve_country, resolve_language, CountryQuery, LanguageQuery};
use super::schema::{Country, Language, Locale, RawDataset};
use super::types::{CountryCodeType, LanguageCodeType};
use crate::source::DatasetLoader;

/// The loaded reference dataset.
///
/// Immutable after construction; share it behind an `Arc`.
#[derive(Debug, Clone)]
pub struct Dataset {
    countries: Vec<Country>,
    languages: Vec<Language>,
    families: Vec<String>,
    locales: Vec<Locale>,
    country_index: HashMap<CountryCodeType, HashMap<String, usize>>,
    language_index: HashMap<LanguageCodeType, HashMap<String, usize>>,
}

impl Dataset {
    /// Load and validate a dataset through a loader.
    ///
    /// # Errors
    ///
    /// Any read, parse or validation failure from the loader or
    /// [`Dataset::from_raw`].
    pub fn load(loader: &dyn DatasetLoader) -> Result<Self, DatasetError> {
        let source = loader.describe();
        let raw = loader.load()?;
        let dataset = Self::from_raw(raw)?;
        tracing::debug!(
            source = %source,
            countries = dataset.countries.len(),
            languages = dataset.languages.len(),
            families = dataset.families.len(),
            locales = dataset.locales.len(),
            "dataset loaded"
        );
        Ok(dataset)
    }

    /// Build the indexes and check the dataset invariants.
    ///
    /// # Errors
    ///
    /// Returns `DatasetError::Invalid` naming the first violation found.
    pub fn from_raw(raw: RawDataset) -> Result<Self, DatasetError> {
        let RawDataset {
            countries,
            languages,
            language_families,
            locales,
        } = raw;

        let mut country_index = HashMap::new();
        for code_type in CountryCodeType::ALL {
            let index = build_index(&countries, |c| c.code(code_type));
            country_index.insert(code_type, index);
        }

        let mut language_index = HashMap::new();
        for code_type in LanguageCodeType::ALL {
            let index = build_index(&languages, |l| l.code(code_type));
            language_index.insert(code_type, index);
        }

        let dataset = Self {
            countries,
            languages,
            families: language_families,
            locales,
            country_index,
            language_index,
        };
        dataset.validate()?;
        Ok(dataset)
    }

    fn validate(&self) -> Result<(), DatasetError> {
        let families: HashSet<&str> = self.families.iter().map(String::as_str).collect();

        for country in &self.countries {
            if country.code_2.is_empty() {
                return Err(DatasetError::Invalid(format!(
                    "country '{}' has no alpha-2 code",
                    country.name
                )));
            }
        }
        for code_type in CountryCodeType::ALL {
            ensure_unique(
                self.countries.iter().filter_map(|c| c.code(code_type)),
                &format!("country {}", code_type.field()),
            )?;
        }

        for language in &self.languages {
            if language.iso639_3.is_empty() {
                return Err(DatasetError::Invalid(format!(
                    "language '{}' has no ISO 639-3 code",
                    language.primary_name().unwrap_or("?")
                )));
            }
            if !families.contains(language.family.as_str()) {
                return Err(DatasetError::Invalid(format!(
                    "language '{}' belongs to unknown family '{}'",
                    language.iso639_3, language.family
                )));
            }
        }
        ensure_unique(
            self.languages.iter().map(|l| l.iso639_3.as_str()),
            &format!("language {}", LanguageCodeType::Iso639_3.field()),
        )?;

        for country in &self.countries {
            for code in &country.languages {
                let found = resolve_language(code)
                    .ok()
                    .and_then(|q| self.match_language(&q));
                if found.is_none() {
                    return Err(DatasetError::Invalid(format!(
                        "country '{}' references unknown language '{}'",
                        country.code_2, code
                    )));
                }
            }
        }
        for language in &self.languages {
            for code in &language.countries {
                let found = resolve_country(code)
                    .ok()
                    .and_then(|q| self.match_country(&q));
                if found.is_none() {
                    return Err(DatasetError::Invalid(format!(
                        "language '{}' references unknown country '{}'",
                        language.iso639_3, code
                    )));
                }
            }
        }

        Ok(())
    }

    /// All countries, in dataset order.
    pub fn countries(&self) -> &[Country] {
        &self.countries
    }

    /// All languages, in dataset order.
    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    /// All language family names, in dataset order.
    pub fn families(&self) -> &[String] {
        &self.families
    }

    /// All locale triples, in dataset order.
    pub fn locales(&self) -> &[Locale] {
        &self.locales
    }

    /// First country whose `code_type` field equals `code` exactly.
    pub fn country_by(&self, code_type: CountryCodeType, code: &str) -> Option<&Country> {
        self.country_index
            .get(&code_type)
            .and_then(|index| index.get(code))
            .map(|&i| &self.countries[i])
    }

    /// First language whose `code_type` field equals `code` exactly.
    pub fn language_by(&self, code_type: LanguageCodeType, code: &str) -> Option<&Language> {
        self.language_index
            .get(&code_type)
            .and_then(|index| index.get(code))
            .map(|&i| &self.languages[i])
    }

    /// Match a resolved country query.
    pub fn match_country(&self, query: &CountryQuery) -> Option<&Country> {
        self.country_by(query.code_type, &query.code)
    }

    /// Match a resolved language query, trying each candidate scheme in order.
    pub fn match_language(&self, query: &LanguageQuery) -> Option<&Language> {
        query
            .candidates
            .iter()
            .find_map(|&code_type| self.language_by(code_type, &query.code))
    }
}

fn build_index<'a, T, F>(records: &'a [T], code: F) -> HashMap<String, usize>
where
    F: Fn(&'a T) -> Option<&'a str>,
{
    let mut index = HashMap::new();
    for (i, record) in records.iter().enumerate() {
        if let Some(value) = code(record) {
            index.entry(value.to_string()).or_insert(i);
        }
    }
    index
}

fn ensure_unique<'a>(
    values: impl Iterator<Item = &'a str>,
    what: &str,
) -> Result<(), DatasetError> {
    let mut seen = HashSet::new();
    for value in values {
        if !seen.insert(value) {
            return Err(DatasetError::Invalid(format!(
                "duplicate {} '{}'",
                what, value
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::schema::parse_dataset;

    fn dataset(json: &str) -> Result<Dataset, DatasetError> {
        Dataset::from_raw(parse_dataset(json).expect("fixture parses"))
    }

    const SMALL: &str = r#"{
        "countries": [
            {"code_2": "FR", "code_3": "FRA", "numCode": "250", "name": "France", "languages": ["fr"]},
            {"code_2": "BE", "code_3": "BEL", "numCode": "056", "name": "Belgium", "languages": ["fre", "nld"]}
        ],
        "languages": [
            {"iso639_1": "fr", "iso639_2": "fra", "iso639_2en": "fre", "iso639_3": "fra",
             "name": ["French"], "family": "Indo-European", "countries": ["FR", "BEL"]},
            {"iso639_1": "nl", "iso639_2": "nld", "iso639_2en": "dut", "iso639_3": "nld",
             "name": ["Dutch"], "family": "Indo-European", "countries": ["BE"]}
        ],
        "languageFamilies": ["Indo-European"],
        "locales": [["fr", "FR"], ["nl", "BE"]]
    }"#;

    #[test]
    fn loads_valid_dataset() {
        let ds = dataset(SMALL).unwrap();
        assert_eq!(ds.countries().len(), 2);
        assert_eq!(ds.languages().len(), 2);
        assert_eq!(ds.families(), ["Indo-European".to_string()]);
        assert_eq!(ds.locales().len(), 2);
    }

    #[test]
    fn indexed_lookup_by_each_scheme() {
        let ds = dataset(SMALL).unwrap();
        assert_eq!(ds.country_by(CountryCodeType::Numeric, "056").unwrap().code_2, "BE");
        assert_eq!(ds.country_by(CountryCodeType::Alpha3, "FRA").unwrap().code_2, "FR");
        assert!(ds.country_by(CountryCodeType::Alpha2, "fr").is_none());
        assert_eq!(
            ds.language_by(LanguageCodeType::Iso639_2En, "dut").unwrap().iso639_3,
            "nld"
        );
    }

    #[test]
    fn match_language_follows_candidate_order() {
        let ds = dataset(SMALL).unwrap();
        let q = resolve_language("fre").unwrap();
        assert_eq!(ds.match_language(&q).unwrap().iso639_3, "fra");
    }

    #[test]
    fn unknown_family_rejected() {
        let json = SMALL.replace(
            r#""languageFamilies": ["Indo-European"]"#,
            r#""languageFamilies": ["Uralic"]"#,
        );
        let err = dataset(&json).unwrap_err();
        assert!(matches!(err, DatasetError::Invalid(ref m) if m.contains("unknown family")));
    }

    #[test]
    fn family_membership_is_case_sensitive() {
        let json = SMALL.replace(
            r#""languageFamilies": ["Indo-European"]"#,
            r#""languageFamilies": ["indo-european"]"#,
        );
        assert!(dataset(&json).is_err());
    }

    #[test]
    fn duplicate_alpha2_rejected() {
        let json = SMALL.replace(r#""code_2": "BE""#, r#""code_2": "FR""#);
        let err = dataset(&json).unwrap_err();
        assert!(err.to_string().contains("duplicate"));
    }

    #[test]
    fn duplicate_error_names_the_field() {
        let json = SMALL.replace(r#""code_3": "BEL""#, r#""code_3": "FRA""#);
        let err = dataset(&json).unwrap_err();
        assert_eq!(
            err,
            DatasetError::Invalid("duplicate country code_3 'FRA'".to_string())
        );

        let json = SMALL.replace(r#""iso639_3": "nld""#, r#""iso639_3": "fra""#);
        let err = dataset(&json).unwrap_err();
        assert!(err.to_string().contains("duplicate language iso639_3 'fra'"));
    }

    #[test]
    fn dangling_language_reference_rejected() {
        let json = SMALL.replace(r#"["fre", "nld"]"#, r#"["fre", "xxx"]"#);
        let err = dataset(&json).unwrap_err();
        assert!(err.to_string().contains("unknown language 'xxx'"));
    }

    #[test]
    fn dangling_country_reference_rejected() {
        let json = SMALL.replace(r#"["FR", "BEL"]"#, r#"["FR", "BELG"]"#);
        let err = dataset(&json).unwrap_err();
        assert!(err.to_string().contains("unknown country 'BELG'"));
    }

    #[test]
    fn index_keeps_first_occurrence() {
        let records = vec![
            Country {
                num_code: "001".into(),
                code_2: "AA".into(),
                code_3: "AAA".into(),
                name: "first".into(),
                languages: vec![],
                lang_culture_ms: vec![],
            },
            Country {
                num_code: "002".into(),
                code_2: "AA".into(),
                code_3: "AAB".into(),
                name: "second".into(),
                languages: vec![],
                lang_culture_ms: vec![],
            },
        ];
        let index = build_index(&records, |c| c.code(CountryCodeType::Alpha2));
        assert_eq!(index.get("AA"), Some(&0));
    }
}
