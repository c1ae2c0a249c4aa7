//! Directive printers.
//!
//! A [`Printer`] renders one directive at a time. Both dialects share the
//! dispatch over directive kinds, the transaction header, the amount
//! alignment and every non-transaction directive except `open`; they differ
//! in how postings, tags and metadata are written.

mod hledger;
mod ledger;

pub use hledger::HLedgerPrinter;
pub use ledger::LedgerPrinter;

use bean2ledger_core::{
    Close, Commodity, Directive, Document, Event, MetaValue, NaiveDate, Note, Open, Pad,
    Posting, Price, Query, Transaction,
};
use tracing::debug;

use crate::classify::dedup_postings;
use crate::config::Config;
use crate::error::ConvertError;
use crate::mapping::Mapper;
use crate::meta::escape_string;
use crate::number::{quote_currency, render_raw_amount};
use crate::precision::DisplayPrecision;
use crate::residual::normalize;
use crate::OutputFormat;

/// Column at which amounts end.
pub const WIDTH: usize = 75;

/// Minimum gap between an account and its amount.
const MIN_GAP: usize = 2;

/// Shared state of a printer, fixed for one conversion.
#[derive(Debug, Clone)]
pub struct PrinterContext {
    config: Config,
    precision: DisplayPrecision,
    mapper: Mapper,
    indent: String,
    meta_indent: String,
}

impl PrinterContext {
    /// Build the context, compiling the configured renames.
    pub fn new(config: Config, precision: DisplayPrecision) -> Result<Self, ConvertError> {
        let mapper = Mapper::new(&config)?;
        let indent = config.indent_str();
        let meta_indent = indent.repeat(2);
        Ok(Self {
            config,
            precision,
            mapper,
            indent,
            meta_indent,
        })
    }

    /// The configuration.
    #[must_use]
    pub const fn config(&self) -> &Config {
        &self.config
    }

    /// The display precision context.
    #[must_use]
    pub const fn precision(&self) -> &DisplayPrecision {
        &self.precision
    }

    /// Indentation of postings and transaction metadata.
    #[must_use]
    pub fn indent(&self) -> &str {
        &self.indent
    }

    /// Indentation of posting metadata.
    #[must_use]
    pub fn meta_indent(&self) -> &str {
        &self.meta_indent
    }
}

/// Renders directives in one target dialect.
pub trait Printer {
    /// The state shared by all directives of this conversion.
    fn context(&self) -> &PrinterContext;

    /// Render a transaction.
    fn format_transaction(&self, txn: &Transaction) -> Result<String, ConvertError>;

    /// Render an account declaration.
    fn format_open(&self, open: &Open) -> Result<String, ConvertError>;

    /// Render any directive, with renames applied.
    ///
    /// Balance assertions and custom directives have no equivalent and
    /// render as an empty string.
    fn format_directive(&self, directive: &Directive) -> Result<String, ConvertError> {
        let text = match directive {
            Directive::Transaction(txn) => self.format_transaction(txn)?,
            Directive::Open(open) => self.format_open(open)?,
            Directive::Close(close) => format_close(close),
            Directive::Commodity(comm) => format_commodity(comm),
            Directive::Pad(pad) => format_pad(pad),
            Directive::Event(event) => format_event(event),
            Directive::Query(query) => format_query(query),
            Directive::Note(note) => format_note(note),
            Directive::Document(doc) => format_document(doc),
            Directive::Price(price) => format_price(price),
            Directive::Balance(_) | Directive::Custom(_) => {
                debug!(kind = directive.type_name(), date = %directive.date(), "no output");
                String::new()
            }
            other => return Err(ConvertError::UnsupportedEntryKind(other.type_name())),
        };
        Ok(self.context().mapper.apply(&text))
    }
}

/// Create the printer for an output format.
pub fn printer_for(
    format: OutputFormat,
    config: Config,
    precision: DisplayPrecision,
) -> Result<Box<dyn Printer>, ConvertError> {
    let context = PrinterContext::new(config, precision)?;
    Ok(match format {
        OutputFormat::Ledger => Box::new(LedgerPrinter::new(context)),
        OutputFormat::HLedger => Box::new(HLedgerPrinter::new(context)),
    })
}

/// A transaction ready for rendering: residuals absorbed, header built and
/// the transaction-level metadata keys already shown in the header noted.
pub(crate) struct PreparedTransaction<'a> {
    pub txn: Transaction,
    pub header: String,
    pub consumed: Vec<&'a str>,
}

impl PreparedTransaction<'_> {
    /// Postings to render, with split amount-less postings collapsed.
    pub fn postings(&self) -> Vec<&Posting> {
        dedup_postings(&self.txn.postings)
    }
}

/// Normalize a transaction and build its header line.
///
/// The header is `DATE[=AUX] [FLAG] [(CODE)] [PAYEE |] [NARRATION]`.
pub(crate) fn prepare_transaction<'a>(
    txn: &Transaction,
    ctx: &'a PrinterContext,
) -> PreparedTransaction<'a> {
    let config = &ctx.config;
    let mut consumed = Vec::new();

    let mut date = txn.date.to_string();
    if let Some(key) = config.auxdate.as_deref() {
        if let Some(aux) = txn.meta.get(key).and_then(MetaValue::as_date) {
            date.push('=');
            date.push_str(&aux.to_string());
            consumed.push(key);
        }
    }

    let mut parts = vec![date];
    if is_valid_flag(txn.flag) {
        parts.push(txn.flag.to_string());
    }
    if let Some(key) = config.code.as_deref() {
        if let Some(code) = txn.meta.get(key).and_then(code_text) {
            parts.push(format!("({code})"));
            consumed.push(key);
        }
    }
    if let Some(payee) = txn.payee.as_deref().filter(|p| !p.is_empty()) {
        parts.push(format!("{} |", escape_string(payee)));
    }
    if !txn.narration.is_empty() {
        parts.push(escape_string(&txn.narration));
    }

    PreparedTransaction {
        txn: normalize(txn, &ctx.precision),
        header: parts.join(" "),
        consumed,
    }
}

/// Dates attached to a posting through configured metadata keys.
#[derive(Debug, Default)]
pub(crate) struct PostingDates<'a> {
    pub date: Option<NaiveDate>,
    pub aux: Option<NaiveDate>,
    pub consumed: Vec<&'a str>,
}

impl PostingDates<'_> {
    pub const fn is_empty(&self) -> bool {
        self.date.is_none() && self.aux.is_none()
    }
}

pub(crate) fn posting_dates<'a>(posting: &Posting, config: &'a Config) -> PostingDates<'a> {
    let mut dates = PostingDates::default();
    let lookup = |key: Option<&'a str>| {
        key.and_then(|key| {
            posting
                .meta
                .get(key)
                .and_then(MetaValue::as_date)
                .map(|date| (key, date))
        })
    };
    if let Some((key, date)) = lookup(config.postdate.as_deref()) {
        dates.date = Some(date);
        dates.consumed.push(key);
    }
    if let Some((key, aux)) = lookup(config.auxdate.as_deref()) {
        dates.aux = Some(aux);
        dates.consumed.push(key);
    }
    dates
}

/// The `INDENT [FLAG ]ACCOUNT` start of a posting line.
pub(crate) fn posting_prefix(
    ctx: &PrinterContext,
    txn: &Transaction,
    posting: &Posting,
) -> Result<String, ConvertError> {
    if posting.account.is_empty() {
        return Err(ConvertError::MissingAccount { date: txn.date });
    }
    let mut line = ctx.indent.clone();
    if let Some(flag) = posting.flag.filter(|f| is_valid_flag(*f)) {
        line.push(flag);
        line.push(' ');
    }
    line.push_str(&posting.account);
    Ok(line)
}

/// Join two fields so that the right one ends at [`WIDTH`].
///
/// At least two spaces separate them.
#[must_use]
pub fn align(left: &str, right: &str) -> String {
    let used = left.chars().count() + right.chars().count();
    let gap = WIDTH.saturating_sub(used).max(MIN_GAP);
    format!("{left}{}{right}", " ".repeat(gap))
}

/// Only `*` and `!` exist in both target formats.
pub(crate) const fn is_valid_flag(flag: char) -> bool {
    matches!(flag, '*' | '!')
}

/// Textual form of a transaction code value, if it has one.
fn code_text(value: &MetaValue) -> Option<String> {
    match value {
        MetaValue::String(s) | MetaValue::Account(s) | MetaValue::Currency(s) => {
            Some(escape_string(s))
        }
        MetaValue::Number(n) => Some(n.to_string()),
        MetaValue::Date(d) => Some(d.to_string()),
        MetaValue::Bool(b) => Some(b.to_string()),
        MetaValue::Amount(a) => Some(render_raw_amount(a)),
        _ => None,
    }
}

fn format_close(close: &Close) -> String {
    format!(";; Close: {} close {}\n", close.date, close.account)
}

fn format_commodity(comm: &Commodity) -> String {
    format!("commodity {}\n", quote_currency(&comm.currency))
}

fn format_pad(pad: &Pad) -> String {
    format!(
        ";; Pad: {} {} {}\n",
        pad.date, pad.account, pad.source_account
    )
}

fn format_event(event: &Event) -> String {
    format!(
        ";; Event: {} \"{}\" \"{}\"\n",
        event.date,
        escape_string(&event.event_type),
        escape_string(&event.value)
    )
}

fn format_query(query: &Query) -> String {
    format!(
        ";; Query: {} \"{}\" \"{}\"\n",
        query.date,
        escape_string(&query.name),
        escape_string(&query.query)
    )
}

fn format_note(note: &Note) -> String {
    format!(
        ";; Note: {} {} {}\n",
        note.date,
        note.account,
        escape_string(&note.comment)
    )
}

fn format_document(doc: &Document) -> String {
    format!(";; Document: {} {} {}\n", doc.date, doc.account, doc.path)
}

/// `P DATE CURRENCY` with the price ending at [`WIDTH`].
fn format_price(price: &Price) -> String {
    let left = format!("P {} {}", price.date, quote_currency(&price.currency));
    let mut out = align(&left, &render_raw_amount(&price.amount));
    out.push('\n');
    out
}
