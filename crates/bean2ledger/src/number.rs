//! Number and currency rendering.
//!
//! Posting units are rounded to the display precision of their currency,
//! while costs, prices and metadata amounts are printed exactly as given.

use bean2ledger_core::Amount;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::precision::{DisplayPrecision, Precision};

/// Round a number to the display precision of its currency.
///
/// Uses banker's rounding and pads with trailing zeros up to the selected
/// digit count. Numbers in currencies without recorded digits are returned
/// unchanged. A zero result never carries a negative sign.
#[must_use]
pub fn display_number(
    number: Decimal,
    currency: &str,
    precision: &DisplayPrecision,
    which: Precision,
) -> Decimal {
    let mut rounded = match precision.get(currency, which) {
        Some(dp) => {
            let mut n = number.round_dp_with_strategy(dp, RoundingStrategy::MidpointNearestEven);
            n.rescale(dp);
            n
        }
        None => number,
    };
    if rounded.is_zero() {
        rounded.set_sign_positive(true);
    }
    rounded
}

/// Render a number at the display precision of its currency.
#[must_use]
pub fn render_number(
    number: Decimal,
    currency: &str,
    precision: &DisplayPrecision,
    which: Precision,
) -> String {
    display_number(number, currency, precision, which).to_string()
}

/// Render an amount at display precision, quoting the currency if needed.
///
/// ```
/// use bean2ledger::{render_amount, DisplayPrecision, Precision};
/// use bean2ledger_core::Amount;
/// use rust_decimal_macros::dec;
///
/// let mut precision = DisplayPrecision::new();
/// precision.update(&Amount::new(dec!(150.75), "THB"));
///
/// let amount = Amount::new(dec!(140.1), "THB");
/// assert_eq!(render_amount(&amount, &precision, Precision::MostCommon), "140.10 THB");
/// ```
#[must_use]
pub fn render_amount(amount: &Amount, precision: &DisplayPrecision, which: Precision) -> String {
    format!(
        "{} {}",
        render_number(amount.number, &amount.currency, precision, which),
        quote_currency(&amount.currency)
    )
}

/// Render an amount exactly as given, quoting the currency if needed.
#[must_use]
pub fn render_raw_amount(amount: &Amount) -> String {
    let mut number = amount.number;
    if number.is_zero() {
        number.set_sign_positive(true);
    }
    format!("{} {}", number, quote_currency(&amount.currency))
}

/// Quote a currency code if it contains a digit, dot or dash.
///
/// Already quoted codes are returned unchanged.
///
/// ```
/// use bean2ledger::quote_currency;
///
/// assert_eq!(quote_currency("HOOL"), "HOOL");
/// assert_eq!(quote_currency("HOOL1"), "\"HOOL1\"");
/// assert_eq!(quote_currency("\"E.R\""), "\"E.R\"");
/// ```
#[must_use]
pub fn quote_currency(code: &str) -> String {
    if is_quoted(code) {
        return code.to_string();
    }
    if code.chars().any(|c| c.is_ascii_digit() || c == '.' || c == '-') {
        format!("\"{code}\"")
    } else {
        code.to_string()
    }
}

fn is_quoted(code: &str) -> bool {
    code.len() >= 2 && code.starts_with('"') && code.ends_with('"')
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn context(samples: &[(Decimal, &str)]) -> DisplayPrecision {
        let mut ctx = DisplayPrecision::new();
        for (number, currency) in samples {
            ctx.update_number(currency, *number);
        }
        ctx
    }

    #[test]
    fn test_pads_to_common_precision() {
        let ctx = context(&[(dec!(0.11110000), "FOO"), (dec!(0.11110000), "FOO")]);
        assert_eq!(
            render_number(dec!(0.1111), "FOO", &ctx, Precision::MostCommon),
            "0.11110000"
        );
    }

    #[test]
    fn test_rounds_half_even() {
        let ctx = context(&[(dec!(1.00), "USD")]);
        assert_eq!(
            render_number(dec!(2.345), "USD", &ctx, Precision::MostCommon),
            "2.34"
        );
        assert_eq!(
            render_number(dec!(2.355), "USD", &ctx, Precision::MostCommon),
            "2.36"
        );
        assert_eq!(
            render_number(dec!(-5.04), "USD", &context(&[(dec!(4.990), "USD")]), Precision::MostCommon),
            "-5.040"
        );
    }

    #[test]
    fn test_no_negative_zero() {
        let ctx = context(&[(dec!(0.00), "EUR")]);
        assert_eq!(
            render_number(dec!(-0.00), "EUR", &ctx, Precision::MostCommon),
            "0.00"
        );
        assert_eq!(
            render_number(dec!(-0.0001), "EUR", &ctx, Precision::MostCommon),
            "0.00"
        );
        assert_eq!(
            render_raw_amount(&Amount::new(dec!(-0.00), "EUR")),
            "0.00 EUR"
        );
    }

    #[test]
    fn test_unknown_currency_renders_raw() {
        let ctx = DisplayPrecision::new();
        assert_eq!(
            render_number(dec!(0.03310116086236), "USD", &ctx, Precision::MostCommon),
            "0.03310116086236"
        );
    }

    #[test]
    fn test_maximum_precision() {
        let ctx = context(&[(dec!(1.5), "USD"), (dec!(1.5), "USD"), (dec!(0.001), "USD")]);
        assert_eq!(
            render_amount(&Amount::new(dec!(-0.001), "USD"), &ctx, Precision::Maximum),
            "-0.001 USD"
        );
        assert_eq!(
            render_amount(&Amount::new(dec!(-0.001), "USD"), &ctx, Precision::MostCommon),
            "0.0 USD"
        );
    }

    #[test]
    fn test_raw_amount_keeps_digits() {
        assert_eq!(
            render_raw_amount(&Amount::new(dec!(520.0), "USD")),
            "520.0 USD"
        );
        assert_eq!(
            render_raw_amount(&Amount::new(dec!(101.689996215), "GBP")),
            "101.689996215 GBP"
        );
    }

    #[test]
    fn test_quote_currency() {
        assert_eq!(quote_currency("USD"), "USD");
        assert_eq!(quote_currency("GB00BPN5P782"), "\"GB00BPN5P782\"");
        assert_eq!(quote_currency("E.R"), "\"E.R\"");
        assert_eq!(quote_currency("E-R"), "\"E-R\"");
        assert_eq!(quote_currency("\"E-R\""), "\"E-R\"");
        assert_eq!(quote_currency("€"), "€");
    }
}
