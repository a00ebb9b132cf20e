use std::collections::HashMap;

use rust_decimal::Decimal;

use super::Ledger;
use crate::error::LedgerError;
use crate::models::Expense;

/// Total spent per `YYYY-MM`, in the order months are first met while
/// scanning the ledger's date groups. Not sorted chronologically.
/// Fails with [`LedgerError::Overflow`] if a month's total leaves `Decimal`'s range.
pub(crate) fn summarize_by_month(ledger: &Ledger) -> Result<Vec<(String, Decimal)>, LedgerError> {
    sum_by_key(ledger, Expense::month_key)
}

/// Total spent per category name, in first-encounter order.
pub(crate) fn summarize_by_category(ledger: &Ledger) -> Result<Vec<(String, Decimal)>, LedgerError> {
    sum_by_key(ledger, |e| e.category.as_str())
}

fn sum_by_key<F>(ledger: &Ledger, key: F) -> Result<Vec<(String, Decimal)>, LedgerError>
where
    F: Fn(&Expense) -> &str,
{
    let mut totals: Vec<(String, Decimal)> = Vec::new();
    let mut seen: HashMap<String, usize> = HashMap::new();

    for expense in ledger.iter() {
        let k = key(expense);
        match seen.get(k) {
            Some(&i) => {
                totals[i].1 = totals[i]
                    .1
                    .checked_add(expense.amount)
                    .ok_or_else(|| LedgerError::Overflow { key: k.to_string() })?;
            }
            None => {
                seen.insert(k.to_string(), totals.len());
                totals.push((k.to_string(), expense.amount));
            }
        }
    }

    Ok(totals)
}

#[cfg(test)]
#[path = "summary_tests.rs"]
mod tests;
