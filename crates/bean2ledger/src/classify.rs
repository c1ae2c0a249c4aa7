//! Posting classification.
//!
//! Postings fall into three buckets depending on how their weight is
//! computed: plain units, units converted at a price, or units held at cost.
//! Cost takes precedence when a posting carries both.

use bean2ledger_core::{Posting, Transaction};
use std::collections::HashSet;
use tracing::debug;

/// How a posting contributes to the transaction balance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PostingKind {
    /// Weight is the units themselves.
    Simple,
    /// Weight is units times the per-unit price.
    Priced,
    /// Weight is units times the per-unit cost.
    Costed,
}

/// Determine the kind of a posting.
#[must_use]
pub const fn posting_kind(posting: &Posting) -> PostingKind {
    if posting.cost.is_some() {
        PostingKind::Costed
    } else if posting.price.is_some() {
        PostingKind::Priced
    } else {
        PostingKind::Simple
    }
}

/// Postings of a transaction partitioned by kind, in input order.
#[derive(Debug, Default)]
pub struct PostingKinds<'a> {
    /// Postings without cost or price.
    pub simple: Vec<&'a Posting>,
    /// Postings with a price and no cost.
    pub priced: Vec<&'a Posting>,
    /// Postings held at cost.
    pub costed: Vec<&'a Posting>,
    /// Whether some posting is printed without an amount.
    pub any_elided: bool,
}

impl PostingKinds<'_> {
    /// Total number of postings classified.
    #[must_use]
    pub fn len(&self) -> usize {
        self.simple.len() + self.priced.len() + self.costed.len()
    }

    /// Check whether the transaction had no postings.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Partition the postings of a transaction by kind.
#[must_use]
pub fn classify(txn: &Transaction) -> PostingKinds<'_> {
    let mut kinds = PostingKinds::default();
    for posting in &txn.postings {
        kinds.any_elided |= is_elided(posting);
        match posting_kind(posting) {
            PostingKind::Simple => kinds.simple.push(posting),
            PostingKind::Priced => kinds.priced.push(posting),
            PostingKind::Costed => kinds.costed.push(posting),
        }
    }
    kinds
}

/// Check whether a posting is printed without an amount.
///
/// Postings the balancer completed are printed bare so the target tool
/// infers the amount itself. Residual postings always show their amount.
#[must_use]
pub const fn is_elided(posting: &Posting) -> bool {
    (posting.automatic && !posting.residual) || posting.units.is_none()
}

/// Check whether a cost posting needs an explicit `@ cost` price.
///
/// Ledger mis-balances transactions with more than two postings when a lot
/// held at cost has no price, unless some posting is left for it to infer.
/// The posting must belong to the classified transaction.
#[must_use]
pub fn needs_cost_price(kinds: &PostingKinds<'_>, posting: &Posting) -> bool {
    posting.price.is_none()
        && kinds.len() > 2
        && !kinds.any_elided
        && kinds.costed.iter().any(|costed| std::ptr::eq(*costed, posting))
}

/// Select the postings to render.
///
/// The balancer may split one amount-less posting into several, one per
/// currency, all sharing the source line of the original. Only the first of
/// those is kept. Postings without a source line are always kept.
#[must_use]
pub fn dedup_postings(postings: &[Posting]) -> Vec<&Posting> {
    let mut seen = HashSet::new();
    postings
        .iter()
        .filter(|posting| {
            if !is_elided(posting) {
                return true;
            }
            match posting.lineno {
                Some(lineno) if !seen.insert(lineno) => {
                    debug!(account = %posting.account, lineno, "collapsing duplicate posting");
                    false
                }
                _ => true,
            }
        })
        .collect()
}
