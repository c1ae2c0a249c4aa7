//! Core types for bean2ledger
//!
//! This crate provides the entry model handed to the converter by an
//! upstream beancount parser:
//!
//! - [`Amount`] - A decimal number with a currency
//! - [`Cost`] - Acquisition cost of a position (lot)
//! - [`Posting`] - One leg of a transaction, with balancer markers
//! - [`Metadata`] / [`MetaValue`] - Ordered key/value annotations
//! - [`Directive`] - All directive types (Transaction, Balance, Open, etc.)
//!
//! # Example
//!
//! ```
//! use bean2ledger_core::{Amount, Cost, Directive, Posting, Transaction};
//! use rust_decimal_macros::dec;
//! use chrono::NaiveDate;
//!
//! let date = NaiveDate::from_ymd_opt(2014, 11, 2).unwrap();
//! let txn = Transaction::new(date, "Buy HOOL")
//!     .with_posting(
//!         Posting::new("Assets:Invest", Amount::new(dec!(5), "HOOL"))
//!             .with_cost(Cost::new(dec!(520.0), "USD").with_date(date)),
//!     )
//!     .with_posting(Posting::interpolated(
//!         "Assets:Cash",
//!         Amount::new(dec!(-2600.0), "USD"),
//!     ));
//!
//! let units = Amount::new(dec!(5), "HOOL");
//! let weight = txn.postings[0].weight_of(&units).unwrap();
//! assert_eq!(weight.number, dec!(2600.0));
//!
//! let dir = Directive::Transaction(txn);
//! assert_eq!(dir.type_name(), "transaction");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod amount;
pub mod cost;
pub mod directive;

pub use amount::Amount;
pub use cost::Cost;
pub use directive::{
    Balance, Close, Commodity, Custom, Directive, Document, Event, MetaValue, Metadata, Note,
    Open, Pad, Posting, Price, Query, Transaction,
};

// Re-export commonly used external types
pub use chrono::NaiveDate;
pub use rust_decimal::Decimal;
