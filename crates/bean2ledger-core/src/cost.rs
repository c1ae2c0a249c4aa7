//! Acquisition cost of a lot.
//!
//! A [`Cost`] is the booked cost basis of a posting: the per-unit cost,
//! its currency, the acquisition date and an optional lot label. Upstream
//! booking has already resolved total costs (`{{...}}`) to per-unit numbers.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::Amount;

/// A cost represents the acquisition cost of a position (lot).
///
/// When you buy 5 shares of HOOL at 520 USD on 2014-11-02, the cost is:
/// - number: 520
/// - currency: "USD"
/// - date: Some(2014-11-02)
/// - label: None (or Some("lot1") if labeled)
///
/// # Examples
///
/// ```
/// use bean2ledger_core::Cost;
/// use rust_decimal_macros::dec;
/// use chrono::NaiveDate;
///
/// let cost = Cost::new(dec!(520.0), "USD")
///     .with_date(NaiveDate::from_ymd_opt(2014, 11, 2).unwrap());
///
/// assert_eq!(cost.number, dec!(520.0));
/// assert_eq!(cost.currency, "USD");
/// assert_eq!(cost.total_cost(dec!(5)).unwrap().number, dec!(2600.0));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cost {
    /// Cost per unit
    pub number: Decimal,
    /// Currency of the cost
    pub currency: String,
    /// Acquisition date
    pub date: Option<NaiveDate>,
    /// Lot label
    pub label: Option<String>,
}

impl Cost {
    /// Create a new cost with the given number and currency.
    #[must_use]
    pub fn new(number: Decimal, currency: impl Into<String>) -> Self {
        Self {
            number,
            currency: currency.into(),
            date: None,
            label: None,
        }
    }

    /// Add a date to this cost.
    #[must_use]
    pub const fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Add a label to this cost.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Get the per-unit cost as an amount.
    #[must_use]
    pub fn as_amount(&self) -> Amount {
        Amount::new(self.number, self.currency.clone())
    }

    /// Calculate the total cost for a given number of units.
    ///
    /// Returns `None` when the product does not fit a `Decimal`.
    #[must_use]
    pub fn total_cost(&self, units: Decimal) -> Option<Amount> {
        Some(Amount::new(
            units.checked_mul(self.number)?,
            self.currency.clone(),
        ))
    }
}
