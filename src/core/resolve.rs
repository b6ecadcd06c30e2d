//! core::resolve
//!
//! Infers which code scheme a caller supplied.
//!
//! # Rules
//!
//! - Country codes are uppercased. Two characters resolve to alpha-2, three
//!   to alpha-3. Numeric codes are only recognised by the existence check,
//!   which tries every scheme.
//! - Language codes are lowercased. Two characters resolve to ISO 639-1.
//!   Three characters are tried against ISO 639-2, then 639-2en, then 639-3;
//!   the first scheme with a matching record wins.
//! - Blank input is [`QueryError::EmptyInput`]; any other length is
//!   [`QueryError::InvalidCodeFormat`].
//!
//! Resolution is a pure function of the input. It never touches the dataset.

use super::error::QueryError;
use super::types::{CountryCodeType, EntityKind, LanguageCodeType};

/// A normalized country code and the scheme it must be matched against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryQuery {
    pub code: String,
    pub code_type: CountryCodeType,
}

/// A normalized language code and the schemes to try, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageQuery {
    pub code: String,
    pub candidates: &'static [LanguageCodeType],
}

/// Resolve a raw country code.
///
/// # Errors
///
/// - `EmptyInput` for blank input
/// - `InvalidCodeFormat` for lengths other than 2 or 3
pub fn resolve_country(raw: &str) -> Result<CountryQuery, QueryError> {
    let code = normalized(raw, EntityKind::Country)?;
    let code_type = match code.chars().count() {
        2 => CountryCodeType::Alpha2,
        3 => CountryCodeType::Alpha3,
        _ => {
            return Err(QueryError::InvalidCodeFormat {
                kind: EntityKind::Country,
                code,
            })
        }
    };
    Ok(CountryQuery { code, code_type })
}

/// Resolve a raw language code.
///
/// # Errors
///
/// - `EmptyInput` for blank input
/// - `InvalidCodeFormat` for lengths other than 2 or 3
pub fn resolve_language(raw: &str) -> Result<LanguageQuery, QueryError> {
    const TWO_LETTER: [LanguageCodeType; 1] = [LanguageCodeType::Iso639_1];

    let code = normalized(raw, EntityKind::Language)?;
    let candidates: &'static [LanguageCodeType] = match code.chars().count() {
        2 => &TWO_LETTER,
        3 => &LanguageCodeType::THREE_LETTER,
        _ => {
            return Err(QueryError::InvalidCodeFormat {
                kind: EntityKind::Language,
                code,
            })
        }
    };
    Ok(LanguageQuery { code, candidates })
}

/// Reject blank input and apply the case rule of `kind`.
pub fn normalized(raw: &str, kind: EntityKind) -> Result<String, QueryError> {
    if raw.trim().is_empty() {
        return Err(QueryError::EmptyInput(match kind {
            EntityKind::Country => "country code",
            EntityKind::Language => "language code",
        }));
    }
    Ok(kind.normalize(raw))
}
