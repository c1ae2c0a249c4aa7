//! Account and currency renaming.
//!
//! Renames are applied to the rendered text rather than to the entries, so
//! they see exactly what the printer wrote. Accounts match as whole tokens
//! followed by the two-space amount separator, a tab or a line end.
//! Currencies match after a number and are re-quoted after renaming.

use regex::{Captures, Regex};
use std::collections::BTreeMap;

use crate::config::Config;
use crate::error::ConvertError;
use crate::number::quote_currency;

/// Compiled account and currency renames.
#[derive(Debug, Clone)]
pub struct Mapper {
    accounts: Option<Rename>,
    currencies: Option<Rename>,
}

#[derive(Debug, Clone)]
struct Rename {
    pattern: Regex,
    map: BTreeMap<String, String>,
}

impl Rename {
    fn new(
        name: &'static str,
        map: &BTreeMap<String, String>,
        template: &str,
    ) -> Result<Option<Self>, ConvertError> {
        if map.is_empty() {
            return Ok(None);
        }
        if map.contains_key("") {
            return Err(ConvertError::EmptyMappingKey { map: name });
        }
        // Longest first so that `Assets:Test-Bank` wins over `Assets:Test`
        let mut keys: Vec<&str> = map.keys().map(String::as_str).collect();
        keys.sort_by(|a, b| b.len().cmp(&a.len()).then_with(|| a.cmp(b)));
        let alternation = keys
            .iter()
            .map(|key| regex::escape(key))
            .collect::<Vec<_>>()
            .join("|");
        let pattern = Regex::new(&template.replace("ALT", &alternation))?;
        Ok(Some(Self {
            pattern,
            map: map.clone(),
        }))
    }

    fn lookup<'a>(&'a self, key: &'a str) -> &'a str {
        self.map.get(key).map_or(key, String::as_str)
    }
}

impl Mapper {
    /// Compile the renames of a configuration.
    pub fn new(config: &Config) -> Result<Self, ConvertError> {
        Ok(Self {
            accounts: Rename::new("account_map", &config.account_map, "ALT")?,
            currencies: Rename::new(
                "currency_map",
                &config.currency_map,
                r#"(\d )"?(ALT)"?"#,
            )?,
        })
    }

    /// Check whether no renames are configured.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.accounts.is_none() && self.currencies.is_none()
    }

    /// Apply all renames to rendered text.
    ///
    /// ```
    /// use bean2ledger::{Config, Mapper};
    ///
    /// let config = Config::default()
    ///     .with_account_map("Assets:Test", "Assets:My Test")
    ///     .with_currency_map("TEST", "TEST1");
    /// let mapper = Mapper::new(&config).unwrap();
    ///
    /// assert_eq!(
    ///     mapper.apply("  Assets:Test  1000.00 TEST\n"),
    ///     "  Assets:My Test  1000.00 \"TEST1\"\n"
    /// );
    /// ```
    #[must_use]
    pub fn apply(&self, text: &str) -> String {
        let text = match &self.accounts {
            Some(rename) => rewrite(rename, text, is_account_token, |caps| {
                rename.lookup(&caps[0]).to_string()
            }),
            None => text.to_string(),
        };
        match &self.currencies {
            Some(rename) => rewrite(rename, &text, is_currency_token, |caps| {
                format!("{}{}", &caps[1], quote_currency(rename.lookup(&caps[2])))
            }),
            None => text,
        }
    }
}

/// Replace every accepted match, scanning left to right.
///
/// The scan always moves forward, also past accepted empty matches.
fn rewrite(
    rename: &Rename,
    text: &str,
    accept: impl Fn(&str, usize, usize) -> bool,
    replace: impl Fn(&Captures<'_>) -> String,
) -> String {
    let mut out = String::with_capacity(text.len());
    let mut copied = 0;
    let mut pos = 0;
    while let Some(caps) = rename.pattern.captures_at(text, pos) {
        let Some(whole) = caps.get(0) else { break };
        let step = text[whole.start()..].chars().next().map_or(1, char::len_utf8);
        if accept(text, whole.start(), whole.end()) {
            out.push_str(&text[copied..whole.start()]);
            out.push_str(&replace(&caps));
            copied = whole.end();
            pos = if whole.is_empty() {
                whole.end() + step
            } else {
                whole.end()
            };
        } else {
            pos = whole.start() + step;
        }
        if pos >= text.len() {
            break;
        }
    }
    out.push_str(&text[copied..]);
    out
}

fn is_account_token(text: &str, start: usize, end: usize) -> bool {
    let before_ok = text[..start].chars().next_back().map_or(true, char::is_whitespace);
    let rest = &text[end..];
    let after_ok = rest.is_empty()
        || rest.starts_with("  ")
        || rest.starts_with('\t')
        || rest.starts_with('\n')
        || rest.starts_with("\r\n");
    before_ok && after_ok
}

fn is_currency_token(text: &str, _start: usize, end: usize) -> bool {
    !text[end..]
        .chars()
        .next()
        .is_some_and(|c| c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '\'' | '-'))
}
