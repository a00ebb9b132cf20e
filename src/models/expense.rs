use rust_decimal::Decimal;
use std::str::FromStr;

use super::Category;
use crate::error::ValidationError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expense {
    pub date: String,
    pub amount: Decimal,
    pub description: String,
    pub category: Category,
}

impl Expense {
    /// The first seven characters of the date (`YYYY-MM`). Dates shorter
    /// than that are used whole.
    pub fn month_key(&self) -> &str {
        match self.date.char_indices().nth(7) {
            Some((end, _)) => &self.date[..end],
            None => &self.date,
        }
    }
}

/// Build an expense from raw form input.
///
/// Only the amount is checked. Description, category and date are taken as
/// given: the form restricts category to the fixed choices and the date
/// picker always yields `YYYY-MM-DD`.
pub fn validate_and_build(
    raw_amount: &str,
    description: &str,
    category: Category,
    date: &str,
) -> Result<Expense, ValidationError> {
    let amount = parse_amount(raw_amount)
        .ok_or_else(|| ValidationError::NotANumber(raw_amount.trim().to_string()))?;
    if amount <= Decimal::ZERO {
        return Err(ValidationError::NotPositive);
    }
    Ok(Expense {
        date: date.to_string(),
        amount,
        description: description.to_string(),
        category,
    })
}

/// Parse a plain or scientific decimal, ignoring surrounding whitespace.
pub(crate) fn parse_amount(s: &str) -> Option<Decimal> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return None;
    }
    Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .ok()
}
