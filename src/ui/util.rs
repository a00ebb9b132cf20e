use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

/// Two decimal places with thousand separators, no currency symbol.
/// e.g. `1234567.891` → `"1,234,567.89"`
pub(crate) fn format_amount(val: Decimal) -> String {
    let fixed = format!("{:.2}", val.abs());
    let (int_part, dec_part) = fixed.split_once('.').unwrap_or((&fixed, "00"));

    let grouped = int_part
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(",");

    let sign = if val < Decimal::ZERO { "-" } else { "" };
    format!("{sign}{grouped}.{dec_part}")
}

/// Bar height in cents, so sub-unit totals still draw. Negative or
/// out-of-range totals draw as empty bars.
pub(crate) fn bar_height(val: Decimal) -> u64 {
    val.checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|cents| cents.round().to_u64())
        .unwrap_or(0)
}

/// Truncate to `max` visible characters, ending in "…" when shortened.
/// Counts chars, not bytes, so multi-byte text is safe.
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if max == 0 {
        return String::new();
    }
    if s.chars().count() <= max {
        return s.to_string();
    }
    let kept: String = s.chars().take(max - 1).collect();
    format!("{kept}…")
}
