//! Amount type representing a decimal number with a currency.
//!
//! An [`Amount`] pairs a decimal number with a currency code. Amounts arrive
//! from the upstream parser already interpolated, so only the handful of
//! operations the converter needs are provided here.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Neg;

/// An amount is a quantity paired with a currency.
///
/// # Examples
///
/// ```
/// use bean2ledger_core::Amount;
/// use rust_decimal_macros::dec;
///
/// let amount = Amount::new(dec!(100.00), "USD");
/// assert_eq!(amount.number, dec!(100.00));
/// assert_eq!(amount.currency, "USD");
///
/// let weight = Amount::new(dec!(150.75), "THB").convert(&Amount::new(dec!(0.03344), "USD"));
/// assert_eq!(weight, Some(Amount::new(dec!(5.0410800), "USD")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Amount {
    /// The decimal quantity
    pub number: Decimal,
    /// The currency code (e.g., "USD", "EUR", "HOOL")
    pub currency: String,
}

impl Amount {
    /// Create a new amount.
    #[must_use]
    pub fn new(number: Decimal, currency: impl Into<String>) -> Self {
        Self {
            number,
            currency: currency.into(),
        }
    }

    /// Multiply this amount by a per-unit rate, yielding an amount in the
    /// rate's currency.
    ///
    /// Returns `None` when the product does not fit a `Decimal`.
    #[must_use]
    pub fn convert(&self, rate: &Self) -> Option<Self> {
        Some(Self {
            number: self.number.checked_mul(rate.number)?,
            currency: rate.currency.clone(),
        })
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.number, self.currency)
    }
}

impl Neg for Amount {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            number: -self.number,
            currency: self.currency,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_convert() {
        let units = Amount::new(dec!(150.75), "THB");
        let rate = Amount::new(dec!(0.03344), "USD");
        let weight = units.convert(&rate).unwrap();
        assert_eq!(weight.number, dec!(5.0410800));
        assert_eq!(weight.currency, "USD");
    }

    #[test]
    fn test_convert_overflow() {
        let units = Amount::new(dec!(1000000000000000), "HOOL");
        let rate = Amount::new(dec!(1000000000000000), "USD");
        assert_eq!(units.convert(&rate), None);
    }

    #[test]
    fn test_neg_and_display() {
        let amount = Amount::new(dec!(10.00), "EUR");
        assert_eq!(amount.to_string(), "10.00 EUR");
        assert_eq!((-amount).to_string(), "-10.00 EUR");
    }
}
