//! Directive types representing all beancount directives.
//!
//! Beancount has 12 directive types that can appear in a ledger file:
//!
//! - [`Transaction`] - Transfers between accounts
//! - [`Balance`] - Assert that an account has a specific balance
//! - [`Open`] - Open an account for use
//! - [`Close`] - Close an account
//! - [`Commodity`] - Declare a commodity/currency
//! - [`Pad`] - Pad an account to match a balance assertion
//! - [`Event`] - Record a life event
//! - [`Query`] - Store a named query
//! - [`Note`] - Add a note to an account
//! - [`Document`] - Link a document to an account
//! - [`Price`] - Record a price for a commodity
//! - [`Custom`] - Custom directive type
//!
//! Directives are handed over by the parser after booking and interpolation,
//! so postings carry complete amounts plus the markers the balancer left on
//! them ([`Posting::automatic`], [`Posting::residual`]).

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::{Amount, Cost};

/// Metadata value types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum MetaValue {
    /// String value
    String(String),
    /// Account reference
    Account(String),
    /// Currency code
    Currency(String),
    /// Tag reference
    Tag(String),
    /// Link reference
    Link(String),
    /// Date value
    Date(NaiveDate),
    /// Numeric value
    Number(Decimal),
    /// Boolean value
    Bool(bool),
    /// Amount value
    Amount(Amount),
    /// Nested key/value structure
    Map(Metadata),
    /// Key present without a value
    None,
}

impl MetaValue {
    /// Get the kind name of this value, for diagnostics.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::String(_) => "string",
            Self::Account(_) => "account",
            Self::Currency(_) => "currency",
            Self::Tag(_) => "tag",
            Self::Link(_) => "link",
            Self::Date(_) => "date",
            Self::Number(_) => "number",
            Self::Bool(_) => "bool",
            Self::Amount(_) => "amount",
            Self::Map(_) => "map",
            Self::None => "none",
        }
    }

    /// Get the date if this is a date value.
    #[must_use]
    pub const fn as_date(&self) -> Option<NaiveDate> {
        match self {
            Self::Date(d) => Some(*d),
            _ => None,
        }
    }
}

/// Metadata is an insertion-ordered key-value map attached to directives
/// and postings.
///
/// ```
/// use bean2ledger_core::{MetaValue, Metadata};
///
/// let mut meta = Metadata::new();
/// meta.insert("string", MetaValue::String("foo".to_string()));
/// meta.insert("bool", MetaValue::Bool(true));
/// meta.insert("string", MetaValue::String("bar".to_string()));
///
/// let keys: Vec<&str> = meta.iter().map(|(k, _)| k).collect();
/// assert_eq!(keys, ["string", "bool"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata(Vec<(String, MetaValue)>);

impl Metadata {
    /// Create an empty metadata map.
    #[must_use]
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Insert a value, replacing an existing entry in place.
    ///
    /// Returns the previous value for the key, if any.
    pub fn insert(&mut self, key: impl Into<String>, value: MetaValue) -> Option<MetaValue> {
        let key = key.into();
        if let Some(slot) = self.0.iter_mut().find(|(k, _)| *k == key) {
            return Some(std::mem::replace(&mut slot.1, value));
        }
        self.0.push((key, value));
        None
    }

    /// Get the value for a key.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&MetaValue> {
        self.0.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Iterate over entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MetaValue)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>> FromIterator<(K, MetaValue)> for Metadata {
    fn from_iter<I: IntoIterator<Item = (K, MetaValue)>>(iter: I) -> Self {
        let mut meta = Self::new();
        for (key, value) in iter {
            meta.insert(key, value);
        }
        meta
    }
}

/// A posting within a transaction.
///
/// Postings represent the individual legs of a transaction. After
/// interpolation every posting normally carries units; postings the balancer
/// filled in are marked [`automatic`](Self::automatic), and rounding
/// absorption postings are additionally marked [`residual`](Self::residual).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Posting {
    /// The account for this posting
    pub account: String,
    /// The units (None when the balancer left the amount open)
    pub units: Option<Amount>,
    /// Cost basis of the position
    pub cost: Option<Cost>,
    /// Per-unit conversion price (@)
    pub price: Option<Amount>,
    /// Posting flag, if any
    pub flag: Option<char>,
    /// Posting metadata
    pub meta: Metadata,
    /// Source line the posting was parsed from
    pub lineno: Option<u32>,
    /// Inserted or completed by the balancer rather than written by the user
    pub automatic: bool,
    /// Absorbs a rounding residual
    pub residual: bool,
}

impl Posting {
    /// Create a new posting with the given account and units.
    #[must_use]
    pub fn new(account: impl Into<String>, units: Amount) -> Self {
        Self {
            account: account.into(),
            units: Some(units),
            cost: None,
            price: None,
            flag: None,
            meta: Metadata::new(),
            lineno: None,
            automatic: false,
            residual: false,
        }
    }

    /// Create an automatic posting without any amount.
    #[must_use]
    pub fn auto(account: impl Into<String>) -> Self {
        Self {
            account: account.into(),
            units: None,
            cost: None,
            price: None,
            flag: None,
            meta: Metadata::new(),
            lineno: None,
            automatic: true,
            residual: false,
        }
    }

    /// Create an automatic posting whose units were filled in by interpolation.
    #[must_use]
    pub fn interpolated(account: impl Into<String>, units: Amount) -> Self {
        Self {
            automatic: true,
            ..Self::new(account, units)
        }
    }

    /// Create a residual posting absorbing a rounding difference.
    #[must_use]
    pub fn residual(account: impl Into<String>, units: Amount) -> Self {
        Self {
            automatic: true,
            residual: true,
            ..Self::new(account, units)
        }
    }

    /// Add a cost basis.
    #[must_use]
    pub fn with_cost(mut self, cost: Cost) -> Self {
        self.cost = Some(cost);
        self
    }

    /// Add a per-unit price.
    #[must_use]
    pub fn with_price(mut self, price: Amount) -> Self {
        self.price = Some(price);
        self
    }

    /// Add a flag.
    #[must_use]
    pub const fn with_flag(mut self, flag: char) -> Self {
        self.flag = Some(flag);
        self
    }

    /// Add a metadata entry.
    #[must_use]
    pub fn with_meta(mut self, key: impl Into<String>, value: MetaValue) -> Self {
        self.meta.insert(key, value);
        self
    }

    /// Set the source line.
    #[must_use]
    pub const fn with_lineno(mut self, lineno: u32) -> Self {
        self.lineno = Some(lineno);
        self
    }

    /// The amount the given units contribute to the transaction balance
    /// when booked on this posting: converted at cost, else at price, else
    /// the units themselves.
    ///
    /// Returns `None` when the conversion overflows.
    #[must_use]
    pub fn weight_of(&self, units: &Amount) -> Option<Amount> {
        match (&self.cost, &self.price) {
            (Some(cost), _) => cost.total_cost(units.number),
            (None, Some(price)) => units.convert(price),
            (None, None) => Some(units.clone()),
        }
    }
}

/// All directive types in beancount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum Directive {
    /// Transaction directive - records transfers between accounts
    Transaction(Transaction),
    /// Balance assertion - asserts an account balance at a point in time
    Balance(Balance),
    /// Open account - opens an account for use
    Open(Open),
    /// Close account - closes an account
    Close(Close),
    /// Commodity declaration - declares a currency/commodity
    Commodity(Commodity),
    /// Pad directive - auto-pad an account to match a balance
    Pad(Pad),
    /// Event directive - records a life event
    Event(Event),
    /// Query directive - stores a named query
    Query(Query),
    /// Note directive - adds a note to an account
    Note(Note),
    /// Document directive - links a document to an account
    Document(Document),
    /// Price directive - records a commodity price
    Price(Price),
    /// Custom directive - custom user-defined directive
    Custom(Custom),
}

impl Directive {
    /// Get the date of this directive.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        match self {
            Self::Transaction(t) => t.date,
            Self::Balance(b) => b.date,
            Self::Open(o) => o.date,
            Self::Close(c) => c.date,
            Self::Commodity(c) => c.date,
            Self::Pad(p) => p.date,
            Self::Event(e) => e.date,
            Self::Query(q) => q.date,
            Self::Note(n) => n.date,
            Self::Document(d) => d.date,
            Self::Price(p) => p.date,
            Self::Custom(c) => c.date,
        }
    }

    /// Get as a transaction, if this is one.
    #[must_use]
    pub const fn as_transaction(&self) -> Option<&Transaction> {
        match self {
            Self::Transaction(t) => Some(t),
            _ => None,
        }
    }

    /// Get the directive type name.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Transaction(_) => "transaction",
            Self::Balance(_) => "balance",
            Self::Open(_) => "open",
            Self::Close(_) => "close",
            Self::Commodity(_) => "commodity",
            Self::Pad(_) => "pad",
            Self::Event(_) => "event",
            Self::Query(_) => "query",
            Self::Note(_) => "note",
            Self::Document(_) => "document",
            Self::Price(_) => "price",
            Self::Custom(_) => "custom",
        }
    }
}

/// A transaction directive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    /// Transaction date
    pub date: NaiveDate,
    /// Transaction flag (* or !, other flags are not renderable)
    pub flag: char,
    /// Payee (optional)
    pub payee: Option<String>,
    /// Narration (empty when absent)
    pub narration: String,
    /// Tags attached to this transaction
    pub tags: Vec<String>,
    /// Links attached to this transaction
    pub links: Vec<String>,
    /// Transaction metadata
    pub meta: Metadata,
    /// Postings (account entries)
    pub postings: Vec<Posting>,
}

impl Transaction {
    /// Create a new transaction.
    #[must_use]
    pub fn new(date: NaiveDate, narration: impl Into<String>) -> Self {
        Self {
            date,
            flag: '*',
            payee: None,
            narration: narration.into(),
            tags: Vec::new(),
            links: Vec::new(),
            meta: Metadata::new(),
            postings: Vec::new(),
        }
    }

    /// Set the flag.
    #[must_use]
    pub const fn with_flag(mut self, flag: char) -> Self {
        self.flag = flag;
        self
    }

    /// Set the payee.
    #[must_use]
    pub fn with_payee(mut self, payee: impl Into<String>) -> Self {
        self.payee = Some(payee.into());
        self
    }

    /// Add a tag.
    #[must_use]
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Add a link.
    #[must_use]
    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.links.push(link.into());
        self
    }

    /// Add a metadata entry.
    #[must_use]
    pub fn with_meta(mut self, key: impl Into<String>, value: MetaValue) -> Self {
        self.meta.insert(key, value);
        self
    }

    /// Add a posting.
    #[must_use]
    pub fn with_posting(mut self, posting: Posting) -> Self {
        self.postings.push(posting);
        self
    }
}

/// A balance assertion directive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Balance {
    /// Assertion date
    pub date: NaiveDate,
    /// Account to check
    pub account: String,
    /// Expected amount
    pub amount: Amount,
    /// Tolerance (if explicitly specified)
    pub tolerance: Option<Decimal>,
    /// Metadata
    pub meta: Metadata,
}

impl Balance {
    /// Create a new balance assertion.
    #[must_use]
    pub fn new(date: NaiveDate, account: impl Into<String>, amount: Amount) -> Self {
        Self {
            date,
            account: account.into(),
            amount,
            tolerance: None,
            meta: Metadata::new(),
        }
    }
}

/// An open account directive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Open {
    /// Date account was opened
    pub date: NaiveDate,
    /// Account name (e.g., "Assets:Bank:Checking")
    pub account: String,
    /// Allowed currencies (empty = any currency allowed)
    pub currencies: Vec<String>,
    /// Booking method for this account
    pub booking: Option<String>,
    /// Metadata
    pub meta: Metadata,
}

impl Open {
    /// Create a new open directive.
    #[must_use]
    pub fn new(date: NaiveDate, account: impl Into<String>) -> Self {
        Self {
            date,
            account: account.into(),
            currencies: Vec::new(),
            booking: None,
            meta: Metadata::new(),
        }
    }

    /// Set allowed currencies.
    #[must_use]
    pub fn with_currencies(mut self, currencies: Vec<String>) -> Self {
        self.currencies = currencies;
        self
    }
}

/// A close account directive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Close {
    /// Date account was closed
    pub date: NaiveDate,
    /// Account name
    pub account: String,
    /// Metadata
    pub meta: Metadata,
}

impl Close {
    /// Create a new close directive.
    #[must_use]
    pub fn new(date: NaiveDate, account: impl Into<String>) -> Self {
        Self {
            date,
            account: account.into(),
            meta: Metadata::new(),
        }
    }
}

/// A commodity declaration directive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Commodity {
    /// Declaration date
    pub date: NaiveDate,
    /// Currency/commodity code (e.g., "USD", "HOOL")
    pub currency: String,
    /// Metadata
    pub meta: Metadata,
}

impl Commodity {
    /// Create a new commodity declaration.
    #[must_use]
    pub fn new(date: NaiveDate, currency: impl Into<String>) -> Self {
        Self {
            date,
            currency: currency.into(),
            meta: Metadata::new(),
        }
    }
}

/// A pad directive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pad {
    /// Pad date
    pub date: NaiveDate,
    /// Account to pad
    pub account: String,
    /// Source account for padding (e.g., Equity:Opening-Balances)
    pub source_account: String,
    /// Metadata
    pub meta: Metadata,
}

impl Pad {
    /// Create a new pad directive.
    #[must_use]
    pub fn new(
        date: NaiveDate,
        account: impl Into<String>,
        source_account: impl Into<String>,
    ) -> Self {
        Self {
            date,
            account: account.into(),
            source_account: source_account.into(),
            meta: Metadata::new(),
        }
    }
}

/// An event directive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    /// Event date
    pub date: NaiveDate,
    /// Event type (e.g., "location", "employer")
    pub event_type: String,
    /// Event value
    pub value: String,
    /// Metadata
    pub meta: Metadata,
}

impl Event {
    /// Create a new event directive.
    #[must_use]
    pub fn new(date: NaiveDate, event_type: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            date,
            event_type: event_type.into(),
            value: value.into(),
            meta: Metadata::new(),
        }
    }
}

/// A query directive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    /// Query date
    pub date: NaiveDate,
    /// Query name
    pub name: String,
    /// Query string
    pub query: String,
    /// Metadata
    pub meta: Metadata,
}

impl Query {
    /// Create a new query directive.
    #[must_use]
    pub fn new(date: NaiveDate, name: impl Into<String>, query: impl Into<String>) -> Self {
        Self {
            date,
            name: name.into(),
            query: query.into(),
            meta: Metadata::new(),
        }
    }
}

/// A note directive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Note {
    /// Note date
    pub date: NaiveDate,
    /// Account
    pub account: String,
    /// Note text
    pub comment: String,
    /// Metadata
    pub meta: Metadata,
}

impl Note {
    /// Create a new note directive.
    #[must_use]
    pub fn new(date: NaiveDate, account: impl Into<String>, comment: impl Into<String>) -> Self {
        Self {
            date,
            account: account.into(),
            comment: comment.into(),
            meta: Metadata::new(),
        }
    }
}

/// A document directive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    /// Document date
    pub date: NaiveDate,
    /// Account
    pub account: String,
    /// File path to the document
    pub path: String,
    /// Metadata
    pub meta: Metadata,
}

impl Document {
    /// Create a new document directive.
    #[must_use]
    pub fn new(date: NaiveDate, account: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            date,
            account: account.into(),
            path: path.into(),
            meta: Metadata::new(),
        }
    }
}

/// A price directive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Price date
    pub date: NaiveDate,
    /// Currency being priced
    pub currency: String,
    /// Price amount (in another currency)
    pub amount: Amount,
    /// Metadata
    pub meta: Metadata,
}

impl Price {
    /// Create a new price directive.
    #[must_use]
    pub fn new(date: NaiveDate, currency: impl Into<String>, amount: Amount) -> Self {
        Self {
            date,
            currency: currency.into(),
            amount,
            meta: Metadata::new(),
        }
    }
}

/// A custom directive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Custom {
    /// Custom directive date
    pub date: NaiveDate,
    /// Custom type name (e.g., "budget", "autopay")
    pub custom_type: String,
    /// Values/arguments for this custom directive
    pub values: Vec<MetaValue>,
    /// Metadata
    pub meta: Metadata,
}

impl Custom {
    /// Create a new custom directive.
    #[must_use]
    pub fn new(date: NaiveDate, custom_type: impl Into<String>) -> Self {
        Self {
            date,
            custom_type: custom_type.into(),
            values: Vec::new(),
            meta: Metadata::new(),
        }
    }

    /// Add a value.
    #[must_use]
    pub fn with_value(mut self, value: MetaValue) -> Self {
        self.values.push(value);
        self
    }
}
