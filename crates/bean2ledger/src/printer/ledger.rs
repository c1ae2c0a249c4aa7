//! Ledger dialect.

use bean2ledger_core::{Open, Posting, Transaction};
use std::fmt::Write;

use super::{align, posting_dates, posting_prefix, prepare_transaction, Printer, PrinterContext};
use crate::classify::{classify, is_elided, needs_cost_price, PostingKinds};
use crate::error::ConvertError;
use crate::meta::{escape_string, write_metadata, MetaStyle};
use crate::number::{render_amount, render_raw_amount};
use crate::precision::Precision;

/// Printer for the ledger journal format.
///
/// Lots are written as `UNITS {COST} [DATE] (LABEL)`, typed metadata uses
/// the `key:: value` form, and posting dates become a trailing `[DATE=AUX]`
/// comment.
#[derive(Debug, Clone)]
pub struct LedgerPrinter {
    ctx: PrinterContext,
}

impl LedgerPrinter {
    /// Create a printer over a prepared context.
    #[must_use]
    pub const fn new(ctx: PrinterContext) -> Self {
        Self { ctx }
    }

    fn write_posting(
        &self,
        out: &mut String,
        txn: &Transaction,
        kinds: &PostingKinds<'_>,
        posting: &Posting,
    ) -> Result<(), ConvertError> {
        let ctx = &self.ctx;
        let prefix = posting_prefix(ctx, txn, posting)?;
        let dates = posting_dates(posting, ctx.config());

        let mut line = match &posting.units {
            Some(units) if !is_elided(posting) => {
                let which = if posting.residual {
                    Precision::Maximum
                } else {
                    Precision::MostCommon
                };
                let mut field = render_amount(units, ctx.precision(), which);
                if let Some(cost) = &posting.cost {
                    write!(field, " {{{}}}", render_raw_amount(&cost.as_amount()))?;
                    if let Some(acquired) = cost.date.filter(|d| *d != txn.date) {
                        write!(field, " [{acquired}]")?;
                    }
                    if let Some(label) = &cost.label {
                        write!(field, " ({})", escape_string(label))?;
                    }
                }

                let mut line = align(&prefix, &field);
                if let Some(price) = &posting.price {
                    write!(line, " @ {}", render_raw_amount(price))?;
                } else if let Some(cost) = &posting.cost {
                    if needs_cost_price(kinds, posting) {
                        write!(line, " @ {}", render_raw_amount(&cost.as_amount()))?;
                    }
                }
                line
            }
            _ => prefix,
        };

        if !dates.is_empty() {
            line.push_str("  ; [");
            if let Some(date) = dates.date {
                write!(line, "{date}")?;
            }
            if let Some(aux) = dates.aux {
                write!(line, "={aux}")?;
            }
            line.push(']');
        }
        writeln!(out, "{line}")?;

        write_metadata(
            out,
            ctx.meta_indent(),
            &posting.meta,
            &dates.consumed,
            MetaStyle::Ledger,
        )
    }
}

impl Printer for LedgerPrinter {
    fn context(&self) -> &PrinterContext {
        &self.ctx
    }

    fn format_transaction(&self, txn: &Transaction) -> Result<String, ConvertError> {
        let ctx = &self.ctx;
        let indent = ctx.indent();
        let prepared = prepare_transaction(txn, ctx);
        let mut out = String::new();

        writeln!(out, "{}", prepared.header)?;

        let mut tags: Vec<&str> = txn.tags.iter().map(String::as_str).collect();
        tags.sort_unstable();
        tags.dedup();
        if !tags.is_empty() {
            writeln!(out, "{indent}; :{}:", tags.join(":"))?;
        }

        let mut links: Vec<&str> = txn.links.iter().map(String::as_str).collect();
        links.sort_unstable();
        links.dedup();
        if !links.is_empty() {
            writeln!(out, "{indent}; Link: {}", links.join(", "))?;
        }

        write_metadata(
            &mut out,
            indent,
            &prepared.txn.meta,
            &prepared.consumed,
            MetaStyle::Ledger,
        )?;

        let kinds = classify(&prepared.txn);
        for posting in prepared.postings() {
            self.write_posting(&mut out, &prepared.txn, &kinds, posting)?;
        }

        Ok(out)
    }

    fn format_open(&self, open: &Open) -> Result<String, ConvertError> {
        let mut out = format!("account {}\n", open.account);
        if !open.currencies.is_empty() {
            let assertion = open
                .currencies
                .iter()
                .map(|currency| format!("commodity == \"{}\"", currency.trim_matches('"')))
                .collect::<Vec<_>>()
                .join(" | ");
            writeln!(out, "{}assert {assertion}", self.ctx.indent())?;
        }
        Ok(out)
    }
}
