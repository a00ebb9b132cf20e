mod store;
mod summary;

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::error::LedgerError;
use crate::models::Expense;

pub(crate) use store::LedgerStore;
pub(crate) use summary::{summarize_by_category, summarize_by_month};

/// Expenses grouped by date.
///
/// Date groups iterate in the order each date was first pushed; records
/// within a group keep insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Ledger {
    groups: Vec<(String, Vec<Expense>)>,
    index: HashMap<String, usize>,
}

impl Ledger {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Append to the expense's date group, creating the group if needed.
    pub(crate) fn push(&mut self, expense: Expense) {
        match self.index.get(&expense.date) {
            Some(&i) => self.groups[i].1.push(expense),
            None => {
                self.index.insert(expense.date.clone(), self.groups.len());
                self.groups.push((expense.date.clone(), vec![expense]));
            }
        }
    }

    pub(crate) fn get(&self, date: &str) -> Option<&[Expense]> {
        self.index.get(date).map(|&i| self.groups[i].1.as_slice())
    }

    /// `(date, records)` pairs in first-seen order.
    pub(crate) fn groups(&self) -> impl Iterator<Item = (&str, &[Expense])> {
        self.groups
            .iter()
            .map(|(date, entries)| (date.as_str(), entries.as_slice()))
    }

    /// Every record, group by group.
    pub(crate) fn iter(&self) -> impl Iterator<Item = &Expense> {
        self.groups.iter().flat_map(|(_, entries)| entries.iter())
    }

    pub(crate) fn len(&self) -> usize {
        self.groups.iter().map(|(_, entries)| entries.len()).sum()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Sum of every amount. Fails rather than wrapping when the sum leaves
    /// `Decimal`'s range.
    pub(crate) fn total(&self) -> Result<Decimal, LedgerError> {
        checked_sum(self.iter(), "all expenses")
    }
}

/// Add up `expenses`, naming `key` in the error if the sum overflows.
pub(crate) fn checked_sum<'a>(
    expenses: impl IntoIterator<Item = &'a Expense>,
    key: &str,
) -> Result<Decimal, LedgerError> {
    expenses
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, e| acc.checked_add(e.amount))
        .ok_or_else(|| LedgerError::Overflow { key: key.to_string() })
}

impl FromIterator<Expense> for Ledger {
    fn from_iter<I: IntoIterator<Item = Expense>>(iter: I) -> Self {
        let mut ledger = Self::new();
        for expense in iter {
            ledger.push(expense);
        }
        ledger
    }
}
