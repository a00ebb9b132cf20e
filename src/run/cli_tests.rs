#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal_macros::dec;
use tempfile::TempDir;

use super::*;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
}

#[test]
fn test_parse_add_defaults() {
    let add = parse_add_args(&args(&["12.50"]), today()).unwrap();
    assert_eq!(
        add,
        AddArgs {
            amount: "12.50".into(),
            description: String::new(),
            category: Category::Food,
            date: "2024-03-15".into(),
        }
    );
}

#[test]
fn test_parse_add_all_flags_any_order() {
    let add = parse_add_args(
        &args(&[
            "30",
            "--date",
            "2024-01-02",
            "--category",
            "bills",
            "--description",
            "Power bill",
        ]),
        today(),
    )
    .unwrap();
    assert_eq!(add.amount, "30");
    assert_eq!(add.description, "Power bill");
    assert_eq!(add.category, Category::Bills);
    assert_eq!(add.date, "2024-01-02");
}

#[test]
fn test_parse_add_requires_amount() {
    assert!(parse_add_args(&[], today()).is_err());
    assert!(parse_add_args(&args(&["--category", "Food"]), today()).is_err());
}

#[test]
fn test_parse_add_rejects_unknown_category() {
    let err = parse_add_args(&args(&["5", "--category", "Groceries"]), today()).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("Groceries"));
    assert!(msg.contains("Transportation"));
}

#[test]
fn test_parse_add_rejects_bad_date() {
    assert!(parse_add_args(&args(&["5", "--date", "15/03/2024"]), today()).is_err());
    assert!(parse_add_args(&args(&["5", "--date", "2024-02-30"]), today()).is_err());
}

#[test]
fn test_parse_add_flag_without_value() {
    assert!(parse_add_args(&args(&["5", "--description"]), today()).is_err());
}

#[test]
fn test_add_appends_to_ledger() {
    let dir = TempDir::new().unwrap();
    let store = LedgerStore::new(dir.path().join("expenses.csv"));

    as_cli(
        &args(&["expensetui", "add", "9.99", "--category", "Entertainment", "--date", "2024-05-01"]),
        &store,
    )
    .unwrap();

    let ledger = store.load().unwrap();
    assert_eq!(ledger.len(), 1);
    let expense = ledger.iter().next().unwrap();
    assert_eq!(expense.amount, dec!(9.99));
    assert_eq!(expense.category, Category::Entertainment);
    assert_eq!(expense.date, "2024-05-01");
}

#[test]
fn test_add_invalid_amount_writes_nothing() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("expenses.csv");
    let store = LedgerStore::new(&path);

    let err = as_cli(&args(&["expensetui", "add", "abc"]), &store).unwrap_err();
    assert_eq!(err.to_string(), "'abc' is not a number");
    let err = as_cli(&args(&["expensetui", "add", "0"]), &store).unwrap_err();
    assert_eq!(err.to_string(), "Amount should be greater than zero");
    assert!(!path.exists());
}

#[test]
fn test_unknown_command_fails() {
    let dir = TempDir::new().unwrap();
    let store = LedgerStore::new(dir.path().join("expenses.csv"));
    assert!(as_cli(&args(&["expensetui", "frobnicate"]), &store).is_err());
}

#[test]
fn test_summaries_on_missing_ledger_succeed() {
    let dir = TempDir::new().unwrap();
    let store = LedgerStore::new(dir.path().join("expenses.csv"));
    as_cli(&args(&["expensetui", "monthly"]), &store).unwrap();
    as_cli(&args(&["expensetui", "categories"]), &store).unwrap();
    as_cli(&args(&["expensetui", "list"]), &store).unwrap();
}

#[test]
fn test_summary_lines_scale_to_largest() {
    let totals = vec![
        ("2024-01".to_string(), dec!(100)),
        ("2024-02".to_string(), dec!(50)),
        ("2024-03".to_string(), dec!(0.01)),
    ];
    let lines = summary_lines(&totals);
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0].matches('█').count(), BAR_WIDTH);
    assert_eq!(lines[1].matches('█').count(), BAR_WIDTH / 2);
    // Tiny totals still get one cell
    assert_eq!(lines[2].matches('█').count(), 1);
    assert!(lines[0].contains("2024-01"));
    assert!(lines[0].contains("100.00"));
}

#[test]
fn test_list_rejects_bad_date_filter() {
    let dir = TempDir::new().unwrap();
    let store = LedgerStore::new(dir.path().join("expenses.csv"));
    assert!(as_cli(&args(&["expensetui", "list", "--date", "March"]), &store).is_err());
    as_cli(&args(&["expensetui", "list", "--date", "2024-03-15"]), &store).unwrap();
}

#[test]
fn test_summaries_of_overflowing_ledger_fail_cleanly() {
    let dir = TempDir::new().unwrap();
    let store = LedgerStore::new(dir.path().join("expenses.csv"));
    for _ in 0..2 {
        as_cli(
            &args(&["expensetui", "add", "50000000000000000000000000000", "--date", "2024-01-01"]),
            &store,
        )
        .unwrap();
    }

    for command in ["monthly", "categories", "list"] {
        let err = as_cli(&args(&["expensetui", command]), &store).unwrap_err();
        assert!(err.to_string().contains("larger than the biggest supported amount"));
    }
}

#[test]
fn test_summary_lines_handle_extreme_totals() {
    let totals = vec![
        ("a".to_string(), Decimal::MAX),
        ("b".to_string(), dec!(0.0000001)),
    ];
    let lines = summary_lines(&totals);
    assert_eq!(lines[0].matches('█').count(), BAR_WIDTH);
    assert_eq!(lines[1].matches('█').count(), 1);
}
