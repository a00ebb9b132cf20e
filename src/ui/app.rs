use rust_decimal::Decimal;
use tracing::warn;

use super::form::ExpenseForm;
use crate::error::LedgerError;
use crate::ledger::{summarize_by_category, summarize_by_month, LedgerStore};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Form,
    Monthly,
    Categories,
}

impl Screen {
    pub(crate) fn all() -> &'static [Screen] {
        &[Self::Form, Self::Monthly, Self::Categories]
    }

    pub(crate) fn shows_summary(&self) -> bool {
        matches!(self, Self::Monthly | Self::Categories)
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Form => write!(f, "Add Expense"),
            Self::Monthly => write!(f, "Monthly Summary"),
            Self::Categories => write!(f, "Category Summary"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
    Editing,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
            Self::Editing => write!(f, "EDIT"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum DialogKind {
    Info,
    Error,
}

/// Modal message; any key dismisses it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Dialog {
    pub(crate) kind: DialogKind,
    pub(crate) title: String,
    pub(crate) message: String,
}

impl Dialog {
    pub(crate) fn info(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: DialogKind::Info,
            title: title.into(),
            message: message.into(),
        }
    }

    pub(crate) fn error(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            kind: DialogKind::Error,
            title: title.into(),
            message: message.into(),
        }
    }
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,
    pub(crate) dialog: Option<Dialog>,

    // Add Expense
    pub(crate) form: ExpenseForm,

    // Summaries (recomputed from disk whenever a summary screen is shown)
    pub(crate) monthly_totals: Vec<(String, Decimal)>,
    pub(crate) category_totals: Vec<(String, Decimal)>,
    pub(crate) record_count: usize,
    pub(crate) ledger_total: Decimal,
}

impl App {
    pub(crate) fn new(form: ExpenseForm) -> Self {
        Self {
            running: true,
            screen: Screen::Form,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            status_message: String::new(),
            show_help: false,
            dialog: None,

            form,

            monthly_totals: Vec::new(),
            category_totals: Vec::new(),
            record_count: 0,
            ledger_total: Decimal::ZERO,
        }
    }

    /// Summary screens are recomputed from disk every time they are shown.
    pub(crate) fn switch_screen(&mut self, store: &LedgerStore, screen: Screen) {
        self.screen = screen;
        if screen.shows_summary() {
            self.refresh_summaries(store);
        }
    }

    /// Validate the form and append it to the ledger.
    ///
    /// Invalid input leaves the form as typed and writes nothing. On success
    /// the amount and description are cleared.
    pub(crate) fn submit_expense(&mut self, store: &LedgerStore) {
        let expense = match self.form.build() {
            Ok(expense) => expense,
            Err(e) => {
                self.dialog = Some(Dialog::error("Invalid Input", e.to_string()));
                return;
            }
        };

        match store.append(expense) {
            Ok(()) => {
                self.form.clear_text_fields();
                self.dialog = Some(Dialog::info("Success", "Expense added successfully!"));
                if self.screen.shows_summary() {
                    self.refresh_summaries(store);
                }
            }
            Err(e) => self.report_ledger_error("add expense", e),
        }
    }

    /// Reload the ledger and recompute both summaries. Any failure clears
    /// them rather than showing stale or partial totals.
    pub(crate) fn refresh_summaries(&mut self, store: &LedgerStore) {
        let summaries = store.load().and_then(|ledger| {
            Ok((
                summarize_by_month(&ledger)?,
                summarize_by_category(&ledger)?,
                ledger.len(),
                ledger.total()?,
            ))
        });
        match summaries {
            Ok((monthly, categories, count, total)) => {
                self.monthly_totals = monthly;
                self.category_totals = categories;
                self.record_count = count;
                self.ledger_total = total;
            }
            Err(e) => {
                self.monthly_totals.clear();
                self.category_totals.clear();
                self.record_count = 0;
                self.ledger_total = Decimal::ZERO;
                self.report_ledger_error("load ledger", e);
            }
        }
    }

    pub(crate) fn report_ledger_error(&mut self, action: &str, e: LedgerError) {
        warn!("Failed to {action}: {e}");
        let title = if e.is_parse() {
            "Unreadable Ledger"
        } else {
            "Error"
        };
        self.dialog = Some(Dialog::error(title, format!("Could not {action}: {e}")));
    }

    /// Totals for the current summary screen.
    pub(crate) fn current_totals(&self) -> &[(String, Decimal)] {
        match self.screen {
            Screen::Categories => &self.category_totals,
            _ => &self.monthly_totals,
        }
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}

#[cfg(test)]
#[path = "app_tests.rs"]
mod tests;
