use chrono::{Datelike, Local, Months, NaiveDate};

use crate::error::ValidationError;
use crate::models::{validate_and_build, Category, Expense};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FormField {
    Amount,
    Description,
    Category,
    Date,
    Submit,
}

impl FormField {
    pub(crate) fn all() -> &'static [FormField] {
        &[
            Self::Amount,
            Self::Description,
            Self::Category,
            Self::Date,
            Self::Submit,
        ]
    }

    pub(crate) fn label(&self) -> &'static str {
        match self {
            Self::Amount => "Amount",
            Self::Description => "Description",
            Self::Category => "Category",
            Self::Date => "Date",
            Self::Submit => "Add Expense",
        }
    }

    pub(crate) fn is_text(&self) -> bool {
        matches!(self, Self::Amount | Self::Description)
    }
}

/// Current values of the add-expense form.
#[derive(Debug, Clone)]
pub(crate) struct ExpenseForm {
    pub(crate) amount: String,
    pub(crate) description: String,
    pub(crate) category: Category,
    pub(crate) date: NaiveDate,
    pub(crate) focus: FormField,
}

impl ExpenseForm {
    pub(crate) fn new(date: NaiveDate) -> Self {
        Self {
            amount: String::new(),
            description: String::new(),
            category: Category::default(),
            date,
            focus: FormField::Amount,
        }
    }

    pub(crate) fn today() -> Self {
        Self::new(Local::now().date_naive())
    }

    pub(crate) fn date_string(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// Validate the current values into an expense. Fields are left untouched.
    pub(crate) fn build(&self) -> Result<Expense, ValidationError> {
        validate_and_build(
            &self.amount,
            &self.description,
            self.category.clone(),
            &self.date_string(),
        )
    }

    /// Reset after a successful add. Category and date stay for the next entry.
    pub(crate) fn clear_text_fields(&mut self) {
        self.amount.clear();
        self.description.clear();
        self.focus = FormField::Amount;
    }

    pub(crate) fn focused_text_mut(&mut self) -> Option<&mut String> {
        match self.focus {
            FormField::Amount => Some(&mut self.amount),
            FormField::Description => Some(&mut self.description),
            _ => None,
        }
    }

    pub(crate) fn focus_next(&mut self) {
        let fields = FormField::all();
        let idx = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        if idx + 1 < fields.len() {
            self.focus = fields[idx + 1];
        }
    }

    pub(crate) fn focus_prev(&mut self) {
        let fields = FormField::all();
        let idx = fields.iter().position(|f| *f == self.focus).unwrap_or(0);
        self.focus = fields[idx.saturating_sub(1)];
    }

    /// `+`/`-` on the focused field: cycle the category or move the date by days.
    pub(crate) fn adjust(&mut self, delta: i32) {
        match self.focus {
            FormField::Category => self.category = self.category.cycle(delta),
            FormField::Date => self.shift_days(delta.into()),
            _ => {}
        }
    }

    pub(crate) fn shift_days(&mut self, days: i64) {
        if let Some(d) = self.date.checked_add_signed(chrono::Duration::days(days)) {
            self.date = d;
        }
    }

    /// Move by whole months, clamping the day to the target month's length.
    pub(crate) fn shift_months(&mut self, months: i32) {
        let step = Months::new(months.unsigned_abs());
        let shifted = if months >= 0 {
            self.date.checked_add_months(step)
        } else {
            self.date.checked_sub_months(step)
        };
        if let Some(d) = shifted {
            self.date = d;
        }
    }
}

/// Day numbers of `date`'s month laid out in Monday-first weeks.
pub(crate) fn month_weeks(date: NaiveDate) -> Vec<[Option<u32>; 7]> {
    let Some(first) = date.with_day(1) else {
        return Vec::new();
    };
    let days_in_month = first
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .map_or(31, |last| last.day());

    let mut weeks = Vec::new();
    let mut week = [None; 7];
    let mut col = first.weekday().num_days_from_monday() as usize;
    for day in 1..=days_in_month {
        week[col] = Some(day);
        col += 1;
        if col == 7 {
            weeks.push(week);
            week = [None; 7];
            col = 0;
        }
    }
    if col > 0 {
        weeks.push(week);
    }
    weeks
}

#[cfg(test)]
#[path = "form_tests.rs"]
mod tests;
