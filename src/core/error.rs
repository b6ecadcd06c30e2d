//! core::error
//!
//! Error types for dataset loading and queries.
//!
//! # Policy
//!
//! Every failure is a typed variant returned to the caller. Nothing is
//! encoded as a string that could be confused with a successful value, and
//! nothing is silently turned into an empty result. The two exceptions live
//! in the query layer and are part of its contract: existence checks answer
//! `false` for any failure, and the related-code / MS locale convenience
//! queries answer an empty list for [`QueryError::NotFound`].

use thiserror::Error;

use super::types::EntityKind;

/// Errors from reading, parsing or validating the dataset.
///
/// Payloads are plain strings so the error is `Clone`; a failed lazy load is
/// cached and handed to every later caller.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DatasetError {
    /// The dataset source could not be read.
    #[error("failed to read dataset from {source_name}: {message}")]
    Read {
        source_name: String,
        message: String,
    },

    /// The dataset document is not valid JSON or does not match the schema.
    #[error("failed to parse dataset: {0}")]
    Parse(String),

    /// The dataset parsed but violates an invariant.
    #[error("invalid dataset: {0}")]
    Invalid(String),
}

/// Errors from lookup and aggregation queries.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum QueryError {
    /// No code (or family name) was supplied.
    #[error("no {0} provided")]
    EmptyInput(&'static str),

    /// The code length does not match any scheme of the requested kind.
    #[error("wrong type of {kind} code provided: '{code}'")]
    InvalidCodeFormat { kind: EntityKind, code: String },

    /// An integer code type selector outside 1..=3.
    #[error("wrong {kind} code type {selector}, valid values: 1, 2, 3")]
    InvalidCodeType { kind: EntityKind, selector: i64 },

    /// A well-formed code with no matching record.
    #[error("there is no {kind} with code '{code}'")]
    NotFound { kind: EntityKind, code: String },

    /// A family name not present in the dataset's family list.
    #[error("there is no language family '{0}'")]
    UnknownFamily(String),

    /// The dataset could not be loaded.
    #[error(transparent)]
    DatasetLoadFailure(#[from] DatasetError),
}

impl QueryError {
    /// True for the "well-formed but absent" case.
    pub fn is_not_found(&self) -> bool {
        matches!(self, QueryError::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display_formatting() {
        let err = QueryError::EmptyInput("country code");
        assert_eq!(err.to_string(), "no country code provided");

        let err = QueryError::InvalidCodeFormat {
            kind: EntityKind::Language,
            code: "abcd".into(),
        };
        assert!(err.to_string().contains("language"));
        assert!(err.to_string().contains("abcd"));

        let err = QueryError::InvalidCodeType {
            kind: EntityKind::Country,
            selector: 4,
        };
        assert!(err.to_string().contains("1, 2, 3"));

        let err = QueryError::NotFound {
            kind: EntityKind::Country,
            code: "XX".into(),
        };
        assert_eq!(err.to_string(), "there is no country with code 'XX'");

        let err = QueryError::UnknownFamily("Klingonic".into());
        assert!(err.to_string().contains("Klingonic"));
    }

    #[test]
    fn dataset_error_is_transparent() {
        let err: QueryError = DatasetError::Parse("expected value".into()).into();
        assert_eq!(err.to_string(), "failed to parse dataset: expected value");
        assert!(!err.is_not_found());
    }

    #[test]
    fn not_found_classification() {
        let err = QueryError::NotFound {
            kind: EntityKind::Language,
            code: "xx".into(),
        };
        assert!(err.is_not_found());
        assert!(!QueryError::EmptyInput("language code").is_not_found());
    }
}
