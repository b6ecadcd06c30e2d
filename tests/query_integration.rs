//! Integration tests for the query surface over the bundled dataset.

use countrylang::core::aggregate::{CountryCodes, LanguageCodes};
use countrylang::core::lookup::Linked;
use countrylang::source::{FileLoader, JsonLoader};
use countrylang::{
    CountryCodeType, CountryLanguage, DatasetError, Direction, EntityKind, LanguageCodeType,
    QueryError,
};

use tempfile::TempDir;

fn cl() -> &'static CountryLanguage {
    CountryLanguage::bundled().expect("bundled dataset loads")
}

// =============================================================================
// Fetch
// =============================================================================

#[test]
fn country_by_alpha2_and_alpha3() {
    let by_2 = cl().country("ma").unwrap();
    let by_3 = cl().country("MAR").unwrap();

    assert_eq!(by_2, by_3);
    assert_eq!(by_2.code_2, "MA");
    assert_eq!(by_2.name, "Morocco");
    assert_eq!(by_2.num_code, "504");
}

#[test]
fn country_embeds_languages_one_level() {
    let morocco = cl().country("MA").unwrap();
    let languages = morocco.languages.records().expect("expanded by default");

    let codes: Vec<_> = languages.iter().map(|l| l.iso639_3.as_str()).collect();
    assert_eq!(codes, ["ara", "fra"]);
    // Embedded languages keep their countries as codes.
    assert!(languages[0].countries.contains(&"MA".to_string()));
}

#[test]
fn shallow_country_keeps_codes() {
    let morocco = cl().country_with("MA", false).unwrap();
    assert_eq!(
        morocco.languages,
        Linked::Codes(vec!["ar".to_string(), "fr".to_string()])
    );
}

#[test]
fn country_without_languages() {
    let antarctica = cl().country("AQ").unwrap();
    assert!(antarctica.languages.is_empty());
}

#[test]
fn unknown_country_is_not_found() {
    let err = cl().country("XX").unwrap_err();
    assert_eq!(
        err,
        QueryError::NotFound {
            kind: EntityKind::Country,
            code: "XX".to_string()
        }
    );
    assert!(err.is_not_found());
}

#[test]
fn malformed_country_codes() {
    assert!(matches!(
        cl().country("M"),
        Err(QueryError::InvalidCodeFormat { .. })
    ));
    assert!(matches!(
        cl().country("MORO"),
        Err(QueryError::InvalidCodeFormat { .. })
    ));
    assert!(matches!(cl().country(""), Err(QueryError::EmptyInput(_))));
    // Numeric codes are not fetch keys: three characters mean alpha-3.
    assert!(cl().country("504").unwrap_err().is_not_found());
}

#[test]
fn language_by_every_scheme() {
    for code in ["fr", "FRA", "fre"] {
        let french = cl().language(code).unwrap();
        assert_eq!(french.iso639_3, "fra", "lookup by {code}");
    }
    assert_eq!(cl().language("baq").unwrap().iso639_1.as_deref(), Some("eu"));
    assert_eq!(cl().language("eus").unwrap().iso639_1.as_deref(), Some("eu"));
    assert_eq!(cl().language("wel").unwrap().iso639_3, "cym");
}

#[test]
fn language_without_two_letter_code() {
    let asturian = cl().language("ast").unwrap();
    assert_eq!(asturian.iso639_1, None);
    assert_eq!(asturian.name[0], "Asturian");
}

#[test]
fn language_embeds_countries() {
    let hebrew = cl().language("he").unwrap();
    assert_eq!(hebrew.direction, Direction::Rtl);
    let countries = hebrew.countries.records().unwrap();
    assert_eq!(countries.len(), 1);
    assert_eq!(countries[0].code_2, "IL");
    assert!(countries[0].languages.contains(&"he".to_string()));
}

#[test]
fn language_without_countries() {
    let esperanto = cl().language("eo").unwrap();
    assert_eq!(esperanto.family, "Constructed");
    assert!(esperanto.countries.is_empty());
}

#[test]
fn unknown_language_is_not_found() {
    assert!(cl().language("xx").unwrap_err().is_not_found());
    assert!(cl().language("xxx").unwrap_err().is_not_found());
    assert!(matches!(
        cl().language("engl"),
        Err(QueryError::InvalidCodeFormat { .. })
    ));
}

// =============================================================================
// Listings and existence
// =============================================================================

#[test]
fn code_listings_follow_dataset_order() {
    let alpha2 = cl().country_codes_by_selector(2).unwrap();
    let expected: Vec<_> = cl().countries().iter().map(|c| c.code_2.clone()).collect();
    assert_eq!(alpha2, expected);

    assert_eq!(
        cl().country_codes_by_selector(1).unwrap()[0],
        cl().countries()[0].num_code
    );
    assert_eq!(
        cl().country_codes_by_selector(3).unwrap(),
        cl().country_codes(CountryCodeType::Alpha3)
    );
}

#[test]
fn language_listing_skips_missing_codes() {
    let iso1 = cl().language_codes_by_selector(1).unwrap();
    assert_eq!(iso1.len(), cl().languages().len() - 1);
    assert!(!iso1.iter().any(String::is_empty));

    let iso2en = cl().language_codes_by_selector(2).unwrap();
    assert!(iso2en.contains(&"fre".to_string()));
    assert_eq!(iso2en, cl().language_codes(LanguageCodeType::Iso639_2En));

    let iso3 = cl().language_codes_by_selector(3).unwrap();
    assert_eq!(iso3.len(), cl().languages().len());
}

#[test]
fn bad_selectors() {
    for selector in [0, 4, -1] {
        assert!(matches!(
            cl().language_codes_by_selector(selector),
            Err(QueryError::InvalidCodeType { .. })
        ));
        assert!(matches!(
            cl().country_codes_by_selector(selector),
            Err(QueryError::InvalidCodeType { .. })
        ));
    }
}

#[test]
fn existence_checks() {
    assert!(cl().country_code_exists("MA"));
    assert!(cl().country_code_exists("mar"));
    assert!(cl().country_code_exists("504"));
    assert!(!cl().country_code_exists("ZZ"));
    assert!(!cl().country_code_exists(""));
    assert!(!cl().country_code_exists("   "));

    assert!(cl().language_code_exists("eu"));
    assert!(cl().language_code_exists("BAQ"));
    assert!(cl().language_code_exists("eus"));
    assert!(!cl().language_code_exists("xx"));
    assert!(!cl().language_code_exists(""));
}

// =============================================================================
// Related codes and locales
// =============================================================================

#[test]
fn country_languages_lists_every_language() {
    let related = cl().country_languages("BE").unwrap();
    assert_eq!(
        related,
        vec![
            LanguageCodes {
                iso639_1: Some("nl".into()),
                iso639_2: "dut".into(),
                iso639_3: "nld".into()
            },
            LanguageCodes {
                iso639_1: Some("fr".into()),
                iso639_2: "fre".into(),
                iso639_3: "fra".into()
            },
            LanguageCodes {
                iso639_1: Some("de".into()),
                iso639_2: "ger".into(),
                iso639_3: "deu".into()
            },
        ]
    );
}

#[test]
fn language_countries_uses_country_codes() {
    let related = cl().language_countries("he").unwrap();
    assert_eq!(
        related,
        vec![CountryCodes {
            code_2: "IL".into(),
            code_3: "ISR".into(),
            num_code: "376".into()
        }]
    );
    assert_eq!(cl().language_countries("fr").unwrap().len(), 6);
}

#[test]
fn related_codes_of_unknown_entity_are_empty() {
    assert!(cl().country_languages("XX").unwrap().is_empty());
    assert!(cl().language_countries("xxx").unwrap().is_empty());
    assert!(cl().country_languages("X").is_err());
}

#[test]
fn ms_locales() {
    let morocco = cl().country_ms_locales("MA").unwrap();
    assert_eq!(morocco.len(), 1);
    assert_eq!(morocco[0].lang_culture_name, "ar-MA");
    assert_eq!(morocco[0].culture_code, "0x1801");

    assert_eq!(cl().language_ms_locales("ara").unwrap().len(), 2);
    assert!(cl().country_ms_locales("RS").unwrap().is_empty());
    assert!(cl().country_ms_locales("ZZ").unwrap().is_empty());
}

#[test]
fn locale_formatting_modes() {
    let region_first = cl().locales(false);
    let script_first = cl().locales(true);

    assert!(region_first.contains(&"az_AZ_Cyrl".to_string()));
    assert!(script_first.contains(&"az_Cyrl_AZ".to_string()));
    assert!(region_first.contains(&"en_US".to_string()));
    assert!(script_first.contains(&"en_US".to_string()));
    assert_eq!(region_first.len(), script_first.len());
}

// =============================================================================
// Families
// =============================================================================

#[test]
fn family_members_case_insensitive() {
    let upper = cl().language_family_members("Indo-European").unwrap();
    let lower = cl().language_family_members("indo-european").unwrap();
    assert_eq!(upper, lower);
    assert!(upper.iter().all(|l| l.family == "Indo-European"));
    assert!(upper.iter().any(|l| l.iso639_3 == "fra"));
}

#[test]
fn family_members_are_expanded() {
    let uralic = cl().language_family_members("URALIC").unwrap();
    assert_eq!(uralic.len(), 1);
    assert_eq!(uralic[0].countries.records().unwrap()[0].code_2, "FI");
}

#[test]
fn family_edge_cases() {
    // Known family with no languages in the dataset.
    assert!(cl().language_family_members("Koreanic").unwrap().is_empty());
    assert_eq!(
        cl().language_family_members("Klingon"),
        Err(QueryError::UnknownFamily("Klingon".to_string()))
    );
    assert!(matches!(
        cl().language_family_members(" "),
        Err(QueryError::EmptyInput(_))
    ));
}

#[test]
fn families_listed_in_order() {
    let families = cl().language_families();
    assert_eq!(families.first().map(String::as_str), Some("Afro-Asiatic"));
    assert!(families.contains(&"Language isolate".to_string()));
}

// =============================================================================
// Loading
// =============================================================================

#[test]
fn load_from_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("data.json");
    std::fs::write(
        &path,
        r#"{
            "countries": [{"code_2": "FI", "code_3": "FIN", "numCode": "246", "name": "Finland", "languages": ["fi"]}],
            "languages": [{"iso639_1": "fi", "iso639_2": "fin", "iso639_2en": "fin", "iso639_3": "fin",
                           "name": ["Finnish"], "family": "Uralic", "countries": ["FI"]}],
            "languageFamilies": ["Uralic"],
            "locales": [["fi", "FI"]]
        }"#,
    )
    .unwrap();

    let custom = CountryLanguage::from_loader(&FileLoader::with_path(&path)).unwrap();
    assert_eq!(custom.countries().len(), 1);
    assert_eq!(custom.locales(false), ["fi_FI"]);
    assert!(custom.country("MA").unwrap_err().is_not_found());
}

#[test]
fn load_failures() {
    let missing = FileLoader::with_path("/nonexistent/countrylang.json");
    assert!(matches!(
        CountryLanguage::from_loader(&missing),
        Err(DatasetError::Read { .. })
    ));

    let garbage = JsonLoader::new("{ not json");
    assert!(matches!(
        CountryLanguage::from_loader(&garbage),
        Err(DatasetError::Parse(_))
    ));
}

#[test]
fn concurrent_readers() {
    let shared = cl().clone();
    let handles: Vec<_> = ["MA", "FR", "JP", "US"]
        .into_iter()
        .map(|code| {
            let cl = shared.clone();
            std::thread::spawn(move || cl.country(code).map(|c| c.code_2))
        })
        .collect();

    for (handle, code) in handles.into_iter().zip(["MA", "FR", "JP", "US"]) {
        assert_eq!(handle.join().unwrap().unwrap(), code);
    }
}
