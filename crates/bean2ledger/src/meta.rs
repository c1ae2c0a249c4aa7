//! Metadata rendering.
//!
//! Metadata becomes comment lines below the transaction header or below a
//! posting. Ledger distinguishes typed values (`key:: value`) from plain
//! strings (`key: value`); hledger only knows plain tags.

use bean2ledger_core::{MetaValue, Metadata};
use std::fmt::Write;
use tracing::debug;

use crate::error::ConvertError;
use crate::number::render_raw_amount;

/// Target syntax for metadata lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaStyle {
    /// `; key: text` for strings, `; key:: value` for typed values.
    Ledger,
    /// `; key: text` for everything.
    HLedger,
}

/// Check whether a key is parser bookkeeping that is never printed.
#[must_use]
pub fn is_hidden_key(key: &str) -> bool {
    key == "filename" || key == "lineno" || key.starts_with("__")
}

/// Format one metadata entry without the leading `; `.
///
/// Returns `Ok(None)` for nested maps, which have no line representation.
pub fn format_meta_entry(
    key: &str,
    value: &MetaValue,
    style: MetaStyle,
) -> Result<Option<String>, ConvertError> {
    let entry = match (style, value) {
        (_, MetaValue::String(s)) => format!("{key}: {}", escape_string(s)),
        (_, MetaValue::Account(s) | MetaValue::Currency(s)) => format!("{key}: {s}"),
        (_, MetaValue::None) => format!("{key}:"),
        (_, MetaValue::Map(_)) => {
            debug!(key, "skipping nested metadata");
            return Ok(None);
        }
        (_, MetaValue::Tag(_) | MetaValue::Link(_)) => return Err(unformattable(key, value)),

        (MetaStyle::Ledger, MetaValue::Number(n)) => format!("{key}:: {n}"),
        (MetaStyle::Ledger, MetaValue::Amount(a)) => format!("{key}:: {}", render_raw_amount(a)),
        (MetaStyle::Ledger, MetaValue::Date(d)) => format!("{key}:: [{d}]"),
        (MetaStyle::Ledger, MetaValue::Bool(b)) => format!("{key}:: {b}"),

        (MetaStyle::HLedger, MetaValue::Number(n)) => format!("{key}: {n}"),
        (MetaStyle::HLedger, MetaValue::Amount(a)) => format!("{key}: {}", render_raw_amount(a)),
        (MetaStyle::HLedger, MetaValue::Date(d)) => format!("{key}: {d}"),
        (MetaStyle::HLedger, MetaValue::Bool(b)) => {
            format!("{key}: {}", if *b { "True" } else { "False" })
        }

        (_, _) => return Err(unformattable(key, value)),
    };
    Ok(Some(entry))
}

/// Write metadata lines at the given indentation.
///
/// Hidden keys and keys listed in `consumed` are left out.
pub fn write_metadata(
    out: &mut String,
    indent: &str,
    meta: &Metadata,
    consumed: &[&str],
    style: MetaStyle,
) -> Result<(), ConvertError> {
    for (key, value) in meta.iter() {
        if is_hidden_key(key) || consumed.contains(&key) {
            continue;
        }
        if let Some(entry) = format_meta_entry(key, value, style)? {
            writeln!(out, "{indent}; {entry}")?;
        }
    }
    Ok(())
}

/// Escape embedded newlines so a value stays on one line.
#[must_use]
pub fn escape_string(s: &str) -> String {
    s.replace('\n', "\\n")
}

fn unformattable(key: &str, value: &MetaValue) -> ConvertError {
    ConvertError::Format {
        key: key.to_string(),
        kind: value.kind(),
    }
}
