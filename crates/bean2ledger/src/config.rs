//! Converter configuration.
//!
//! A [`Config`] is resolved once by the caller (typically deserialized from a
//! YAML or JSON config file) and then handed to the printer, which keeps it
//! for the duration of the conversion.
//!
//! ```
//! use bean2ledger::Config;
//!
//! let config: Config = serde_json::from_str(
//!     r#"{"indent": 4, "auxdate": "aux-date", "currency_map": {"EUR": "€"}}"#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.indent, 4);
//! assert_eq!(config.auxdate.as_deref(), Some("aux-date"));
//! assert_eq!(config.postdate, None);
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Default indentation of postings and transaction metadata.
pub const DEFAULT_INDENT: usize = 2;

/// Conversion settings.
///
/// Unknown keys are ignored when deserializing, and every key is optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Number of spaces before postings; posting metadata uses twice this.
    pub indent: usize,
    /// Account renames applied to the rendered text.
    pub account_map: BTreeMap<String, String>,
    /// Currency renames applied to the rendered text.
    pub currency_map: BTreeMap<String, String>,
    /// Metadata key holding an auxiliary (effective) date.
    pub auxdate: Option<String>,
    /// Metadata key holding a posting date.
    pub postdate: Option<String>,
    /// Metadata key holding a transaction code.
    pub code: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT,
            account_map: BTreeMap::new(),
            currency_map: BTreeMap::new(),
            auxdate: None,
            postdate: None,
            code: None,
        }
    }
}

impl Config {
    /// Set the indentation width.
    #[must_use]
    pub const fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Add an account rename.
    #[must_use]
    pub fn with_account_map(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.account_map.insert(from.into(), to.into());
        self
    }

    /// Add a currency rename.
    #[must_use]
    pub fn with_currency_map(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.currency_map.insert(from.into(), to.into());
        self
    }

    /// Set the auxiliary date key.
    #[must_use]
    pub fn with_auxdate(mut self, key: impl Into<String>) -> Self {
        self.auxdate = Some(key.into());
        self
    }

    /// Set the posting date key.
    #[must_use]
    pub fn with_postdate(mut self, key: impl Into<String>) -> Self {
        self.postdate = Some(key.into());
        self
    }

    /// Set the transaction code key.
    #[must_use]
    pub fn with_code(mut self, key: impl Into<String>) -> Self {
        self.code = Some(key.into());
        self
    }

    /// The posting indentation as a string of spaces.
    pub(crate) fn indent_str(&self) -> String {
        " ".repeat(self.indent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.indent, 2);
        assert!(config.account_map.is_empty());
        assert!(config.currency_map.is_empty());
        assert!(config.auxdate.is_none());
        assert!(config.postdate.is_none());
        assert!(config.code.is_none());
    }

    #[test]
    fn test_deserialize_partial_and_unknown_keys() {
        let config: Config = serde_json::from_str(
            r#"{
                "code": "code",
                "account_map": {"Assets:Test": "Assets:My Test"},
                "output_format": "hledger"
            }"#,
        )
        .unwrap();

        assert_eq!(config.indent, DEFAULT_INDENT);
        assert_eq!(config.code.as_deref(), Some("code"));
        assert_eq!(
            config.account_map.get("Assets:Test").map(String::as_str),
            Some("Assets:My Test")
        );
    }

    #[test]
    fn test_builders() {
        let config = Config::default()
            .with_indent(4)
            .with_account_map("Assets:Test", "Assets:My Test")
            .with_currency_map("EUR", "€")
            .with_auxdate("aux-date")
            .with_postdate("date")
            .with_code("code");

        assert_eq!(config.indent_str(), "    ");
        assert_eq!(config.currency_map.len(), 1);
        assert_eq!(config.postdate.as_deref(), Some("date"));
    }
}
