#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;
use crate::ledger::tests::expense;
use crate::models::Category;

fn sample() -> Ledger {
    [
        expense("2024-01-01", dec!(10), Category::Food),
        expense("2024-01-15", dec!(5), Category::Food),
        expense("2024-02-01", dec!(7), Category::Bills),
    ]
    .into_iter()
    .collect()
}

#[test]
fn test_summarize_by_month() {
    assert_eq!(
        summarize_by_month(&sample()).unwrap(),
        vec![("2024-01".to_string(), dec!(15)), ("2024-02".to_string(), dec!(7))]
    );
}

#[test]
fn test_summarize_by_category() {
    assert_eq!(
        summarize_by_category(&sample()).unwrap(),
        vec![("Food".to_string(), dec!(15)), ("Bills".to_string(), dec!(7))]
    );
}

#[test]
fn test_summaries_of_empty_ledger() {
    let ledger = Ledger::new();
    assert!(summarize_by_month(&ledger).unwrap().is_empty());
    assert!(summarize_by_category(&ledger).unwrap().is_empty());
}

#[test]
fn test_month_order_is_first_encounter_not_chronological() {
    let ledger: Ledger = [
        expense("2024-05-02", dec!(1), Category::Food),
        expense("2023-12-31", dec!(2), Category::Food),
        expense("2024-05-20", dec!(3), Category::Food),
    ]
    .into_iter()
    .collect();

    let months: Vec<String> = summarize_by_month(&ledger).unwrap()
        .into_iter()
        .map(|(m, _)| m)
        .collect();
    assert_eq!(months, ["2024-05", "2023-12"]);
}

#[test]
fn test_category_order_follows_date_groups() {
    // Group order decides encounter order, even when a later push lands in an earlier group
    let mut ledger = Ledger::new();
    ledger.push(expense("2024-02-01", dec!(1), Category::Bills));
    ledger.push(expense("2024-01-01", dec!(2), Category::Food));
    ledger.push(expense("2024-02-01", dec!(4), Category::Food));

    assert_eq!(
        summarize_by_category(&ledger).unwrap(),
        vec![("Bills".to_string(), dec!(1)), ("Food".to_string(), dec!(6))]
    );
}

#[test]
fn test_unlisted_categories_grouped_verbatim() {
    let ledger: Ledger = [
        expense("2024-01-01", dec!(1), Category::Unlisted("Rent".into())),
        expense("2024-01-02", dec!(2), Category::Unlisted("rent".into())),
        expense("2024-01-03", dec!(3), Category::Unlisted("Rent".into())),
    ]
    .into_iter()
    .collect();

    assert_eq!(
        summarize_by_category(&ledger).unwrap(),
        vec![("Rent".to_string(), dec!(4)), ("rent".to_string(), dec!(2))]
    );
}

#[test]
fn test_summaries_are_deterministic() {
    let ledger = sample();
    assert_eq!(summarize_by_month(&ledger).unwrap(), summarize_by_month(&ledger).unwrap());
    assert_eq!(summarize_by_category(&ledger).unwrap(), summarize_by_category(&ledger).unwrap());
}

#[test]
fn test_summary_sums_without_rounding() {
    let ledger: Ledger = [
        expense("2024-01-01", dec!(0.1), Category::Food),
        expense("2024-01-02", dec!(0.2), Category::Food),
    ]
    .into_iter()
    .collect();
    assert_eq!(summarize_by_month(&ledger).unwrap(), vec![("2024-01".to_string(), dec!(0.3))]);
}

#[test]
fn test_overflowing_total_is_an_error() {
    let huge = Decimal::MAX - dec!(1);
    let ledger: Ledger = [
        expense("2024-01-01", huge, Category::Food),
        expense("2024-01-02", huge, Category::Bills),
        expense("2024-02-01", huge, Category::Food),
    ]
    .into_iter()
    .collect();

    let err = summarize_by_month(&ledger).unwrap_err();
    assert!(matches!(err, LedgerError::Overflow { ref key } if key == "2024-01"));
    let err = summarize_by_category(&ledger).unwrap_err();
    assert!(matches!(err, LedgerError::Overflow { ref key } if key == "Food"));
}

#[test]
fn test_large_totals_within_range_still_sum() {
    let ledger: Ledger = [
        expense("2024-01-01", dec!(30000000000000000000000000000), Category::Food),
        expense("2024-01-02", dec!(40000000000000000000000000000), Category::Food),
    ]
    .into_iter()
    .collect();
    assert_eq!(
        summarize_by_month(&ledger).unwrap(),
        vec![("2024-01".to_string(), dec!(70000000000000000000000000000))]
    );
}
