//! Per-currency display precision.
//!
//! The precision context records, for every currency, how often each count of
//! fractional digits occurs in the units of the input postings. Postings are
//! then displayed with the most common digit count, and rounding absorption
//! postings with the largest one seen.

use bean2ledger_core::{Amount, Directive};
use rust_decimal::Decimal;
use std::collections::{BTreeMap, HashMap};

/// Which recorded digit count to render with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Precision {
    /// The digit count used most often for the currency.
    MostCommon,
    /// The largest digit count seen for the currency.
    Maximum,
}

/// Histogram of fractional digit counts per currency.
#[derive(Debug, Clone, Default)]
pub struct DisplayPrecision {
    digits: HashMap<String, BTreeMap<u32, usize>>,
}

impl DisplayPrecision {
    /// Create an empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the context from the units of all transaction postings.
    ///
    /// Postings filled in by the balancer are skipped, since their digits
    /// come from arithmetic rather than from the user. Residual postings are
    /// counted.
    #[must_use]
    pub fn from_directives(directives: &[Directive]) -> Self {
        let mut ctx = Self::new();
        for txn in directives.iter().filter_map(Directive::as_transaction) {
            for posting in &txn.postings {
                if posting.automatic && !posting.residual {
                    continue;
                }
                if let Some(units) = &posting.units {
                    ctx.update(units);
                }
            }
        }
        ctx
    }

    /// Record the digits of an amount.
    pub fn update(&mut self, amount: &Amount) {
        self.update_number(&amount.currency, amount.number);
    }

    /// Record the digits of a number in the given currency.
    pub fn update_number(&mut self, currency: &str, number: Decimal) {
        let counts = self.digits.entry(currency.to_string()).or_default();
        *counts.entry(number.scale()).or_default() += 1;
    }

    /// Most frequent digit count for a currency.
    ///
    /// Ties resolve toward the larger digit count.
    #[must_use]
    pub fn most_common(&self, currency: &str) -> Option<u32> {
        let counts = self.digits.get(currency)?;
        // BTreeMap iterates in ascending digit order; max_by_key keeps the last maximum
        counts
            .iter()
            .max_by_key(|(_, count)| **count)
            .map(|(digits, _)| *digits)
    }

    /// Largest digit count seen for a currency.
    #[must_use]
    pub fn maximum(&self, currency: &str) -> Option<u32> {
        self.digits.get(currency)?.keys().next_back().copied()
    }

    /// Digit count for a currency under the given selection.
    #[must_use]
    pub fn get(&self, currency: &str, which: Precision) -> Option<u32> {
        match which {
            Precision::MostCommon => self.most_common(currency),
            Precision::Maximum => self.maximum(currency),
        }
    }

    /// Check whether any digits were recorded for a currency.
    #[must_use]
    pub fn contains(&self, currency: &str) -> bool {
        self.digits.contains_key(currency)
    }
}
