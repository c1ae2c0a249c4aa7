//! hledger dialect.

use bean2ledger_core::{Open, Posting, Transaction};
use std::fmt::Write;

use super::{align, posting_dates, posting_prefix, prepare_transaction, Printer, PrinterContext};
use crate::classify::is_elided;
use crate::error::ConvertError;
use crate::meta::{write_metadata, MetaStyle};
use crate::number::{render_amount, render_raw_amount};
use crate::precision::Precision;

/// Printer for the hledger journal format.
///
/// hledger has no lot syntax, so a cost is written as the conversion price.
/// Metadata values are plain tags and posting dates become `date:` and
/// `date2:` tags.
#[derive(Debug, Clone)]
pub struct HLedgerPrinter {
    ctx: PrinterContext,
}

impl HLedgerPrinter {
    /// Create a printer over a prepared context.
    #[must_use]
    pub const fn new(ctx: PrinterContext) -> Self {
        Self { ctx }
    }

    fn write_posting(
        &self,
        out: &mut String,
        txn: &Transaction,
        posting: &Posting,
    ) -> Result<(), ConvertError> {
        let ctx = &self.ctx;
        let prefix = posting_prefix(ctx, txn, posting)?;

        let line = match &posting.units {
            Some(units) if !is_elided(posting) => {
                let which = if posting.residual {
                    Precision::Maximum
                } else {
                    Precision::MostCommon
                };
                let mut field = render_amount(units, ctx.precision(), which);
                let rate = posting
                    .cost
                    .as_ref()
                    .map(|cost| cost.as_amount())
                    .or_else(|| posting.price.clone());
                if let Some(rate) = rate {
                    write!(field, " @ {}", render_raw_amount(&rate))?;
                }
                align(&prefix, &field)
            }
            _ => prefix,
        };
        writeln!(out, "{line}")?;

        let indent = ctx.meta_indent();
        let dates = posting_dates(posting, ctx.config());
        write_metadata(out, indent, &posting.meta, &dates.consumed, MetaStyle::HLedger)?;
        if let Some(date) = dates.date {
            writeln!(out, "{indent}; date: {date}")?;
        }
        if let Some(aux) = dates.aux {
            writeln!(out, "{indent}; date2: {aux}")?;
        }
        Ok(())
    }
}

impl Printer for HLedgerPrinter {
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
            let tags: Vec<String> = tags.iter().map(|tag| format!("{tag}:")).collect();
            writeln!(out, "{indent}; {}", tags.join(", "))?;
        }

        let mut links: Vec<&str> = txn.links.iter().map(String::as_str).collect();
        links.sort_unstable();
        links.dedup();
        if !links.is_empty() {
            writeln!(out, "{indent}; Link: {}", links.join(" "))?;
        }

        write_metadata(
            &mut out,
            indent,
            &prepared.txn.meta,
            &prepared.consumed,
            MetaStyle::HLedger,
        )?;

        for posting in prepared.postings() {
            self.write_posting(&mut out, &prepared.txn, posting)?;
        }

        Ok(out)
    }

    fn format_open(&self, open: &Open) -> Result<String, ConvertError> {
        Ok(format!("account {}\n", open.account))
    }
}
