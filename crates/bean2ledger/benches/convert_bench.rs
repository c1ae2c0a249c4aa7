//! Conversion benchmarks.
//!
//! Run with: cargo bench -p bean2ledger

#![allow(missing_docs)]

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rust_decimal::Decimal;

use bean2ledger::{Config, DisplayPrecision, OutputFormat, convert, convert_with_precision};
use bean2ledger_core::{
    Amount, Commodity, Cost, Directive, MetaValue, NaiveDate, Open, Posting, Price, Transaction,
};

/// Generate a realistic set of booked entries with N transactions.
fn generate_entries(num_transactions: usize) -> Vec<Directive> {
    let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap_or_default();
    let mut entries = Vec::with_capacity(num_transactions + 16);

    for account in [
        "Assets:Bank:Checking",
        "Assets:Investment",
        "Expenses:Food",
        "Expenses:Coffee",
        "Expenses:Groceries",
        "Expenses:Transport",
        "Expenses:Travel",
        "Equity:Opening",
    ] {
        entries.push(Directive::Open(Open::new(start, account)));
    }
    entries.push(Directive::Commodity(Commodity::new(start, "STOCK")));

    let categories = ["Food", "Coffee", "Groceries", "Transport"];
    let payees = ["Store A", "Store B", "Cafe", "Gas Station", "Supermarket"];

    for i in 0..num_transactions {
        let date = start + chrono::Days::new((i / 3) as u64);
        let payee = payees[i % payees.len()];
        let txn = Transaction::new(date, format!("Transaction {i}"))
            .with_payee(payee)
            .with_tag(format!("tag{}", i % 7));

        let txn = match i % 10 {
            // Stock purchase at cost
            0 => {
                let units = Amount::new(Decimal::from(1 + i % 5), "STOCK");
                let cost = Cost::new(Decimal::new(10_050 + (i % 100) as i64, 2), "USD")
                    .with_date(date);
                let total = cost.total_cost(units.number);
                let txn =
                    txn.with_posting(Posting::new("Assets:Investment", units).with_cost(cost));
                match total {
                    Some(total) => {
                        txn.with_posting(Posting::interpolated("Assets:Bank:Checking", -total))
                    }
                    None => txn.with_posting(Posting::auto("Assets:Bank:Checking")),
                }
            }
            // Foreign currency expense with a conversion rate
            1 => txn
                .with_meta("aux-date", MetaValue::Date(date))
                .with_posting(
                    Posting::new("Expenses:Travel", Amount::new(Decimal::new(15_075, 2), "THB"))
                        .with_price(Amount::new(Decimal::new(3344, 5), "USD")),
                )
                .with_posting(Posting::new(
                    "Assets:Bank:Checking",
                    Amount::new(Decimal::new(-504, 2), "USD"),
                )),
            _ => {
                let category = categories[i % categories.len()];
                let number = Decimal::new(1000 + (i % 100) as i64 * 100, 2);
                txn.with_posting(Posting::new(
                    format!("Expenses:{category}"),
                    Amount::new(number, "USD"),
                ))
                .with_posting(Posting::interpolated(
                    "Assets:Bank:Checking",
                    Amount::new(-number, "USD"),
                ))
            }
        };
        entries.push(Directive::Transaction(txn));

        if i % 50 == 0 {
            entries.push(Directive::Price(Price::new(
                date,
                "STOCK",
                Amount::new(Decimal::new(10_100 + (i % 100) as i64, 2), "USD"),
            )));
        }
    }

    entries
}

fn bench_convert(c: &mut Criterion) {
    let config = Config::default().with_auxdate("aux-date");

    for format in [OutputFormat::Ledger, OutputFormat::HLedger] {
        let mut group = c.benchmark_group(format!("convert_{format}"));

        for size in [100, 1000, 5000] {
            let entries = generate_entries(size);
            group.throughput(Throughput::Elements(size as u64));

            group.bench_with_input(
                BenchmarkId::from_parameter(format!("{size}_txns")),
                &entries,
                |b, entries| {
                    b.iter(|| convert(black_box(entries), format, &config));
                },
            );
        }

        group.finish();
    }
}

fn bench_precision_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("precision_scan");
    let entries = generate_entries(10_000);
    group.throughput(Throughput::Elements(10_000));

    group.bench_function("10k_transactions", |b| {
        b.iter(|| DisplayPrecision::from_directives(black_box(&entries)));
    });

    group.finish();
}

fn bench_renames(c: &mut Criterion) {
    let mut group = c.benchmark_group("renames");
    let entries = generate_entries(1000);
    let precision = DisplayPrecision::from_directives(&entries);
    let config = Config::default()
        .with_account_map("Assets:Bank:Checking", "Assets:Checking")
        .with_currency_map("USD", "$");
    group.throughput(Throughput::Elements(1000));

    group.bench_function("1k_transactions", |b| {
        b.iter(|| {
            convert_with_precision(
                black_box(&entries),
                OutputFormat::Ledger,
                &config,
                precision.clone(),
            )
        });
    });

    group.finish();
}

criterion_group!(benches, bench_convert, bench_precision_scan, bench_renames);
criterion_main!(benches);
