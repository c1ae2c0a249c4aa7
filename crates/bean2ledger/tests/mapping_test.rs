//! Account and currency renames applied through a full conversion.

use bean2ledger::{convert, Config, ConvertError, OutputFormat};
use bean2ledger_core::{Amount, Cost, Directive, NaiveDate, Open, Posting, Price, Transaction};
use rust_decimal_macros::dec;

// ============================================================================
// Helper Functions
// ============================================================================

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn mapping_config() -> Config {
    serde_json::from_str(
        r#"{
            "account_map": {
                "Assets:Test": "Assets:My Test",
                "Assets:Test-Bank": "Assets:Test Bank"
            },
            "currency_map": {
                "EUR": "€",
                "TEST": "TEST1"
            }
        }"#,
    )
    .unwrap()
}

fn entries() -> Vec<Directive> {
    let d = date(2020, 11, 19);
    vec![
        Directive::Open(Open::new(date(2020, 1, 1), "Assets:Test")),
        Directive::Open(Open::new(date(2020, 1, 1), "Assets:Test-Bank")),
        Directive::Transaction(
            Transaction::new(d, "Map account and currency")
                .with_posting(Posting::new(
                    "Assets:Test",
                    Amount::new(dec!(1000.00), "EUR"),
                ))
                .with_posting(Posting::interpolated(
                    "Assets:Test",
                    Amount::new(dec!(-1000.00), "EUR"),
                )),
        ),
        Directive::Transaction(
            Transaction::new(d, "Map quoted currency")
                .with_posting(Posting::new(
                    "Assets:Test",
                    Amount::new(dec!(1000.00), "TEST"),
                ))
                .with_posting(Posting::interpolated(
                    "Assets:Test-Bank",
                    Amount::new(dec!(-1000.00), "TEST"),
                )),
        ),
    ]
}

fn normalized_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|line| !line.is_empty())
        .collect()
}

// ============================================================================
// Conversion
// ============================================================================

#[test]
fn test_mapping_ledger() {
    let result = convert(&entries(), OutputFormat::Ledger, &mapping_config()).unwrap();
    assert_eq!(
        normalized_lines(&result),
        [
            "account Assets:My Test",
            "account Assets:Test Bank",
            "2020-11-19 * Map account and currency",
            "Assets:My Test 1000.00 €",
            "Assets:My Test",
            "2020-11-19 * Map quoted currency",
            "Assets:My Test 1000.00 \"TEST1\"",
            "Assets:Test Bank",
        ]
    );
    assert!(result.contains("\n  Assets:My Test\n"));
}

#[test]
fn test_mapping_hledger() {
    let result = convert(&entries(), OutputFormat::HLedger, &mapping_config()).unwrap();
    assert!(result.contains("account Assets:Test Bank\n"));
    assert!(result.contains(" 1000.00 €\n"));
    assert!(result.contains(" 1000.00 \"TEST1\"\n"));
    assert!(!result.contains("Assets:Test-Bank"));
}

#[test]
fn test_mapping_reaches_prices_and_costs() {
    let d = date(2020, 11, 19);
    let entries = vec![
        Directive::Price(Price::new(d, "TEST", Amount::new(dec!(1.16), "EUR"))),
        Directive::Transaction(
            Transaction::new(d, "Buy")
                .with_posting(
                    Posting::new("Assets:Test", Amount::new(dec!(5), "TEST"))
                        .with_cost(Cost::new(dec!(1.16), "EUR").with_date(d)),
                )
                .with_posting(Posting::interpolated(
                    "Assets:Test-Bank",
                    Amount::new(dec!(-5.80), "EUR"),
                )),
        ),
    ];

    let result = convert(&entries, OutputFormat::Ledger, &mapping_config()).unwrap();
    let lines = normalized_lines(&result);
    // The date ends in a digit, so the priced commodity is renamed too
    assert_eq!(lines[0], "P 2020-11-19 \"TEST1\" 1.16 €");
    assert_eq!(lines[2], "Assets:My Test 5 \"TEST1\" {1.16 €}");
    assert_eq!(lines[3], "Assets:Test Bank");
}

#[test]
fn test_unmapped_output_is_unchanged() {
    let plain = convert(&entries(), OutputFormat::Ledger, &Config::default()).unwrap();
    assert!(plain.contains("Assets:Test-Bank"));
    assert!(plain.contains(" 1000.00 EUR\n"));
}

#[test]
fn test_invalid_config_is_reported() {
    let err = serde_json::from_str::<Config>(r#"{"indent": "wide"}"#).unwrap_err();
    assert!(err.to_string().contains("invalid type"));

    let err = "journal".parse::<OutputFormat>().unwrap_err();
    assert!(matches!(err, ConvertError::UnknownFormat(_)));
}

#[test]
fn test_empty_account_key_is_reported() {
    let config: Config = serde_json::from_str(r#"{"account_map": {"": "X"}}"#).unwrap();
    let err = convert(&entries(), OutputFormat::Ledger, &config).unwrap_err();
    assert!(matches!(
        err,
        ConvertError::EmptyMappingKey { map: "account_map" }
    ));
    assert_eq!(err.to_string(), "empty key in account_map");
}
