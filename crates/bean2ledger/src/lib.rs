//! Convert beancount entries to ledger and hledger journals.
//!
//! The converter takes directives that an upstream parser has already
//! booked and interpolated, and renders them as text in one of two target
//! dialects:
//!
//! - [`OutputFormat::Ledger`] - ledger, with lot costs, typed metadata and
//!   `[DATE=AUX]` posting dates
//! - [`OutputFormat::HLedger`] - hledger, with costs as prices and plain tags
//!
//! Amounts are aligned to end at column 75 and printed at the display
//! precision most common for their currency. Whenever that rounding leaves a
//! transaction unbalanced, the difference is booked to [`ROUNDING_ACCOUNT`].
//!
//! # Example
//!
//! ```
//! use bean2ledger::{convert, Config, OutputFormat};
//! use bean2ledger_core::{Amount, Directive, NaiveDate, Open, Posting, Transaction};
//! use rust_decimal_macros::dec;
//!
//! let date = NaiveDate::from_ymd_opt(2014, 3, 2).unwrap();
//! let entries = vec![
//!     Directive::Open(Open::new(date, "Assets:Cash")),
//!     Directive::Transaction(
//!         Transaction::new(date, "Something")
//!             .with_posting(Posting::new(
//!                 "Expenses:Restaurant",
//!                 Amount::new(dec!(50.02), "USD"),
//!             ))
//!             .with_posting(Posting::auto("Assets:Cash")),
//!     ),
//! ];
//!
//! let text = convert(&entries, OutputFormat::Ledger, &Config::default()).unwrap();
//! assert!(text.starts_with("account Assets:Cash\n\n2014-03-02 * Something\n"));
//! assert!(text.ends_with("  Assets:Cash\n"));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod classify;
pub mod config;
pub mod error;
pub mod mapping;
pub mod meta;
pub mod number;
pub mod precision;
pub mod printer;
pub mod residual;

pub use config::Config;
pub use error::ConvertError;
pub use mapping::Mapper;
pub use number::{quote_currency, render_amount, render_number, render_raw_amount};
pub use precision::{DisplayPrecision, Precision};
pub use printer::{printer_for, HLedgerPrinter, LedgerPrinter, Printer, PrinterContext};
pub use residual::ROUNDING_ACCOUNT;

use bean2ledger_core::Directive;
use std::fmt;
use std::str::FromStr;
use tracing::debug;

/// Target journal dialect.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OutputFormat {
    /// ledger
    #[default]
    Ledger,
    /// hledger
    HLedger,
}

impl FromStr for OutputFormat {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ledger" => Ok(Self::Ledger),
            "hledger" => Ok(Self::HLedger),
            other => Err(ConvertError::UnknownFormat(other.to_string())),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ledger => write!(f, "ledger"),
            Self::HLedger => write!(f, "hledger"),
        }
    }
}

/// Convert directives to journal text.
///
/// The display precision is derived from the postings of `directives`.
pub fn convert(
    directives: &[Directive],
    format: OutputFormat,
    config: &Config,
) -> Result<String, ConvertError> {
    let precision = DisplayPrecision::from_directives(directives);
    convert_with_precision(directives, format, config, precision)
}

/// Convert directives to journal text with a precomputed display precision.
///
/// Each directive renders to a record ending in a newline. Records are
/// separated by a blank line and keep the input order.
pub fn convert_with_precision(
    directives: &[Directive],
    format: OutputFormat,
    config: &Config,
    precision: DisplayPrecision,
) -> Result<String, ConvertError> {
    debug!(%format, entries = directives.len(), "converting");
    let printer = printer_for(format, config.clone(), precision)?;
    let records = directives
        .iter()
        .map(|directive| printer.format_directive(directive))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(records.join("\n"))
}
