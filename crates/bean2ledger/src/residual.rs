//! Rounding residual absorption.
//!
//! Amounts are printed at the display precision of their currency, so the
//! printed weights of a transaction may no longer sum to zero even though
//! the underlying numbers do. Ledger checks balance against what it reads,
//! so every such leftover is moved to [`ROUNDING_ACCOUNT`].

use bean2ledger_core::{Amount, Posting, Transaction};
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::classify::{is_elided, posting_kind, PostingKind};
use crate::number::display_number;
use crate::precision::{DisplayPrecision, Precision};

/// Account receiving rounding residuals.
pub const ROUNDING_ACCOUNT: &str = "Equity:Rounding";

/// Produce a copy of the transaction whose printed amounts balance.
///
/// 1. Rounding postings that would print as zero are dropped.
/// 2. Unless some posting is printed without an amount (the target tool then
///    balances the transaction itself), one residual posting per unbalanced
///    weight currency is appended, in order of first appearance.
#[must_use]
pub fn normalize(txn: &Transaction, precision: &DisplayPrecision) -> Transaction {
    let mut result = txn.clone();

    result.postings.retain(|posting| {
        let zero = posting.account == ROUNDING_ACCOUNT
            && posting
                .units
                .as_ref()
                .is_some_and(|units| displayed_units(posting, units, precision).is_zero());
        if zero {
            debug!(date = %txn.date, "dropping zero rounding posting");
        }
        !zero
    });

    if result.postings.iter().any(is_elided) {
        return result;
    }

    for (currency, sum) in displayed_residual(&result, precision) {
        if sum.is_zero() {
            continue;
        }
        debug!(date = %txn.date, %currency, residual = %sum, "absorbing rounding residual");
        result
            .postings
            .push(Posting::residual(ROUNDING_ACCOUNT, Amount::new(-sum, currency)));
    }

    result
}

/// Sum of printed weights per weight currency, in order of first appearance.
///
/// A currency whose weights overflow a `Decimal` is left out: its residual
/// cannot be known, so nothing is absorbed for it.
#[must_use]
pub fn displayed_residual(
    txn: &Transaction,
    precision: &DisplayPrecision,
) -> Vec<(String, Decimal)> {
    let mut sums: Vec<(String, Option<Decimal>)> = Vec::new();
    for posting in &txn.postings {
        if posting.units.is_none() {
            continue;
        }
        let (currency, number) = match displayed_weight(posting, precision) {
            Some(weight) => (weight.currency, Some(weight.number)),
            None => (weight_currency(posting).to_string(), None),
        };
        match sums.iter_mut().find(|(c, _)| *c == currency) {
            Some((_, sum)) => *sum = sum.zip(number).and_then(|(a, b)| a.checked_add(b)),
            None => sums.push((currency, number)),
        }
    }
    sums.into_iter()
        .filter_map(|(currency, sum)| match sum {
            Some(sum) => Some((currency, sum)),
            None => {
                warn!(%currency, date = %txn.date, "weight overflow, residual not absorbed");
                None
            }
        })
        .collect()
}

/// The weight of a posting as computed from its printed units.
///
/// Converted weights are rounded to the display precision of the weight
/// currency. `None` without units or when the conversion overflows.
#[must_use]
pub fn displayed_weight(posting: &Posting, precision: &DisplayPrecision) -> Option<Amount> {
    let units = posting.units.as_ref()?;
    let shown = Amount::new(
        displayed_units(posting, units, precision),
        units.currency.clone(),
    );
    let weight = posting.weight_of(&shown)?;
    if posting_kind(posting) == PostingKind::Simple {
        return Some(weight);
    }
    let number = display_number(
        weight.number,
        &weight.currency,
        precision,
        Precision::MostCommon,
    );
    Some(Amount::new(number, weight.currency))
}

fn weight_currency(posting: &Posting) -> &str {
    match (&posting.cost, &posting.price, &posting.units) {
        (Some(cost), _, _) => &cost.currency,
        (None, Some(price), _) => &price.currency,
        (None, None, Some(units)) => &units.currency,
        (None, None, None) => "",
    }
}

/// Units as printed: residual postings use the maximum precision.
fn displayed_units(posting: &Posting, units: &Amount, precision: &DisplayPrecision) -> Decimal {
    let which = if posting.residual {
        Precision::Maximum
    } else {
        Precision::MostCommon
    };
    display_number(units.number, &units.currency, precision, which)
}
