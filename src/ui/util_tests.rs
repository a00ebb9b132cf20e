#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;

use super::util::*;

// ── truncate ──────────────────────────────────────────────────

#[test]
fn test_truncate_fits() {
    assert_eq!(truncate("Food", 10), "Food");
    assert_eq!(truncate("Bills", 5), "Bills");
    assert_eq!(truncate("", 3), "");
}

#[test]
fn test_truncate_long_label() {
    assert_eq!(truncate("Transportation", 10), "Transport…");
    assert_eq!(truncate("Entertainment", 2), "E…");
}

#[test]
fn test_truncate_edges() {
    assert_eq!(truncate("Food", 0), "");
    assert_eq!(truncate("Food", 1), "…");
}

#[test]
fn test_truncate_multibyte() {
    assert_eq!(truncate("café crème", 5), "café…");
    assert_eq!(truncate("日本語テスト", 4), "日本語…");
}

// ── format_amount ─────────────────────────────────────────────

#[test]
fn test_format_amount_groups_thousands() {
    assert_eq!(format_amount(dec!(1234.56)), "1,234.56");
    assert_eq!(format_amount(dec!(1234567.89)), "1,234,567.89");
    assert_eq!(format_amount(dec!(999.99)), "999.99");
}

#[test]
fn test_format_amount_pads_and_rounds() {
    assert_eq!(format_amount(dec!(0)), "0.00");
    assert_eq!(format_amount(dec!(5)), "5.00");
    assert_eq!(format_amount(dec!(42.5)), "42.50");
}

#[test]
fn test_format_amount_negative() {
    assert_eq!(format_amount(dec!(-4)), "-4.00");
    assert_eq!(format_amount(dec!(-99999.01)), "-99,999.01");
}

// ── bar_height ────────────────────────────────────────────────

#[test]
fn test_bar_height_in_cents() {
    assert_eq!(bar_height(dec!(15)), 1500);
    assert_eq!(bar_height(dec!(0.5)), 50);
    assert_eq!(bar_height(dec!(42.504)), 4250);
}

#[test]
fn test_bar_height_non_positive() {
    assert_eq!(bar_height(dec!(0)), 0);
    assert_eq!(bar_height(dec!(-3)), 0);
}
