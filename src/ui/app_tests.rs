#![allow(clippy::unwrap_used)]

use chrono::NaiveDate;
use rust_decimal_macros::dec;
use tempfile::TempDir;

use super::*;
use crate::models::Category;

fn setup() -> (TempDir, LedgerStore, App) {
    let dir = TempDir::new().unwrap();
    let store = LedgerStore::new(dir.path().join("expenses.csv"));
    let form = ExpenseForm::new(NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    (dir, store, App::new(form))
}

#[test]
fn test_submit_valid_expense() {
    let (_dir, store, mut app) = setup();
    app.form.amount = "12.50".into();
    app.form.description = "Lunch".into();
    app.submit_expense(&store);

    let dialog = app.dialog.clone().unwrap();
    assert_eq!(dialog.kind, DialogKind::Info);
    assert_eq!(dialog.message, "Expense added successfully!");
    assert!(app.form.amount.is_empty());
    assert!(app.form.description.is_empty());

    let ledger = store.load().unwrap();
    let group = ledger.get("2024-01-15").unwrap();
    assert_eq!(group.len(), 1);
    assert_eq!(group[0].amount, dec!(12.50));
    assert_eq!(group[0].description, "Lunch");
    assert_eq!(group[0].category, Category::Food);
}

#[test]
fn test_submit_invalid_amount_writes_nothing() {
    let (_dir, store, mut app) = setup();
    app.form.amount = "0".into();
    app.form.description = "Free".into();
    app.submit_expense(&store);

    let dialog = app.dialog.clone().unwrap();
    assert_eq!(dialog.kind, DialogKind::Error);
    assert_eq!(dialog.title, "Invalid Input");
    assert_eq!(dialog.message, "Amount should be greater than zero");
    assert_eq!(app.form.amount, "0");
    assert_eq!(app.form.description, "Free");
    assert!(!store.path().exists());
}

#[test]
fn test_refresh_summaries() {
    let (_dir, store, mut app) = setup();
    for (amount, category) in [("10", Category::Food), ("7", Category::Bills)] {
        app.form.amount = amount.into();
        app.form.category = category;
        app.submit_expense(&store);
    }
    app.dialog = None;

    app.refresh_summaries(&store);
    assert_eq!(app.record_count, 2);
    assert_eq!(app.ledger_total, dec!(17));
    assert_eq!(app.monthly_totals, vec![("2024-01".to_string(), dec!(17))]);
    assert_eq!(
        app.category_totals,
        vec![("Food".to_string(), dec!(10)), ("Bills".to_string(), dec!(7))]
    );
    assert!(app.dialog.is_none());

    app.screen = Screen::Categories;
    assert_eq!(app.current_totals().len(), 2);
    app.screen = Screen::Monthly;
    assert_eq!(app.current_totals().len(), 1);
}

#[test]
fn test_huge_amounts_surface_as_error_instead_of_crashing() {
    let (_dir, store, mut app) = setup();
    for _ in 0..2 {
        app.form.amount = "50000000000000000000000000000".into();
        app.submit_expense(&store);
        assert_eq!(app.dialog.take().unwrap().kind, DialogKind::Info);
    }

    app.switch_screen(&store, Screen::Monthly);
    assert!(app.monthly_totals.is_empty());
    assert!(app.category_totals.is_empty());
    assert_eq!(app.ledger_total, Decimal::ZERO);

    let dialog = app.dialog.unwrap();
    assert_eq!(dialog.kind, DialogKind::Error);
    assert_eq!(dialog.title, "Unreadable Ledger");
    assert!(dialog.message.contains("2024-01"));
}

#[test]
fn test_invalid_utf8_row_is_reported_as_unreadable() {
    let (_dir, store, mut app) = setup();
    let mut bytes = b"date,amount,description,category\n2024-01-01,5,".to_vec();
    bytes.extend_from_slice(&[0xff, 0xfe]);
    bytes.extend_from_slice(b",Food\n");
    std::fs::write(store.path(), bytes).unwrap();

    app.refresh_summaries(&store);
    let dialog = app.dialog.unwrap();
    assert_eq!(dialog.kind, DialogKind::Error);
    assert_eq!(dialog.title, "Unreadable Ledger");
}

#[test]
fn test_refresh_summaries_on_broken_ledger_shows_nothing_partial() {
    let (_dir, store, mut app) = setup();
    app.monthly_totals = vec![("stale".into(), dec!(1))];
    std::fs::write(
        store.path(),
        "date,amount,description,category\n2024-01-01,5,ok,Food\n2024-01-02,x,bad,Food\n",
    )
    .unwrap();

    app.refresh_summaries(&store);
    assert!(app.monthly_totals.is_empty());
    assert!(app.category_totals.is_empty());
    assert_eq!(app.record_count, 0);

    let dialog = app.dialog.unwrap();
    assert_eq!(dialog.kind, DialogKind::Error);
    assert_eq!(dialog.title, "Unreadable Ledger");
}

#[test]
fn test_screen_helpers() {
    assert_eq!(Screen::all().len(), 3);
    assert!(!Screen::Form.shows_summary());
    assert!(Screen::Monthly.shows_summary());
    assert_eq!(format!("{}", Screen::Categories), "Category Summary");
    assert_eq!(format!("{}", InputMode::Editing), "EDIT");
}
