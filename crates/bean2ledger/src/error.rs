//! Conversion error types.

use chrono::NaiveDate;
use std::fmt;
use thiserror::Error;

/// Error returned when converting directives fails.
#[derive(Debug, Error)]
pub enum ConvertError {
    /// A metadata value has no representation in the target format.
    #[error("cannot format metadata value {key:?} of kind {kind}")]
    Format {
        /// The metadata key.
        key: String,
        /// The kind of the offending value.
        kind: &'static str,
    },

    /// A directive kind this converter does not know how to render.
    #[error("unsupported entry kind: {0}")]
    UnsupportedEntryKind(&'static str),

    /// A posting was handed over without an account.
    #[error("posting without account in transaction dated {date}")]
    MissingAccount {
        /// Date of the enclosing transaction.
        date: NaiveDate,
    },

    /// Unknown output format name.
    #[error("unknown output format: {0}")]
    UnknownFormat(String),

    /// A rename map has an empty key, which would match everywhere.
    #[error("empty key in {map}")]
    EmptyMappingKey {
        /// Name of the offending map.
        map: &'static str,
    },

    /// The account or currency map could not be compiled into a pattern.
    #[error("invalid mapping: {0}")]
    Mapping(#[from] regex::Error),

    /// Writing to the output buffer failed.
    #[error("formatting error: {0}")]
    Fmt(#[from] fmt::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = ConvertError::Format {
            key: "tag".to_string(),
            kind: "tag",
        };
        assert_eq!(
            err.to_string(),
            "cannot format metadata value \"tag\" of kind tag"
        );

        let err = ConvertError::MissingAccount {
            date: NaiveDate::from_ymd_opt(2020, 7, 25).unwrap(),
        };
        assert_eq!(
            err.to_string(),
            "posting without account in transaction dated 2020-07-25"
        );

        let err = ConvertError::UnknownFormat("beancount".to_string());
        assert_eq!(err.to_string(), "unknown output format: beancount");
    }
}
