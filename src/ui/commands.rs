use std::collections::HashMap;
use std::sync::LazyLock;

use chrono::NaiveDate;

use super::app::{App, Screen};
use crate::ledger::LedgerStore;
use crate::models::Category;

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App, &LedgerStore) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit ExpenseTUI", cmd_quit, r);
    register_command!("quit", "Quit ExpenseTUI", cmd_quit, r);
    register_command!("f", "Go to Add Expense", cmd_form, r);
    register_command!("form", "Go to Add Expense", cmd_form, r);
    register_command!("m", "View Monthly Summary", cmd_monthly, r);
    register_command!("monthly", "View Monthly Summary", cmd_monthly, r);
    register_command!("c", "View Category Summary", cmd_categories, r);
    register_command!("categories", "View Category Summary", cmd_categories, r);
    register_command!("h", "Show available commands", cmd_help, r);
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!(
        "add",
        "Add expense (e.g. :add 12.50 Food Lunch)",
        cmd_add,
        r
    );
    register_command!(
        "date",
        "Set expense date (e.g. :date 2024-03-15)",
        cmd_date,
        r
    );
    register_command!("today", "Set expense date to today", cmd_today, r);

    r
});

pub(crate) fn handle_command(
    input: &str,
    app: &mut App,
    store: &LedgerStore,
) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        (cmd.run)(args, app, store)?;
    } else {
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }

    Ok(())
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 1)
        .min_by_key(|k| (levenshtein(input, k), **k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App, _store: &LedgerStore) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_form(_args: &str, app: &mut App, store: &LedgerStore) -> anyhow::Result<()> {
    app.switch_screen(store, Screen::Form);
    Ok(())
}

fn cmd_monthly(_args: &str, app: &mut App, store: &LedgerStore) -> anyhow::Result<()> {
    app.switch_screen(store, Screen::Monthly);
    Ok(())
}

fn cmd_categories(_args: &str, app: &mut App, store: &LedgerStore) -> anyhow::Result<()> {
    app.switch_screen(store, Screen::Categories);
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App, _store: &LedgerStore) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

/// `:add <amount> [category] [description...]`. The category token is only
/// taken as a category when it names one of the fixed choices; otherwise it
/// starts the description and the form's category is kept.
fn cmd_add(args: &str, app: &mut App, store: &LedgerStore) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_status("Usage: :add <amount> [category] [description]. Example: :add 12.50 Food Lunch");
        return Ok(());
    }

    let mut parts = args.splitn(2, ' ');
    let amount = parts.next().unwrap_or("");
    let rest = parts.next().unwrap_or("").trim();

    let (category, description) = {
        let mut rest_parts = rest.splitn(2, ' ');
        let first = rest_parts.next().unwrap_or("");
        match Category::parse_choice(first) {
            Some(c) => (Some(c), rest_parts.next().unwrap_or("").trim()),
            None => (None, rest),
        }
    };

    app.form.amount = amount.to_string();
    app.form.description = description.to_string();
    if let Some(c) = category {
        app.form.category = c;
    }
    app.submit_expense(store);
    Ok(())
}

fn cmd_date(args: &str, app: &mut App, _store: &LedgerStore) -> anyhow::Result<()> {
    match NaiveDate::parse_from_str(args, "%Y-%m-%d") {
        Ok(d) => {
            app.form.date = d;
            app.set_status(format!("Date set to {}", app.form.date_string()));
        }
        Err(_) => app.set_status("Invalid date. Use YYYY-MM-DD (e.g. 2024-03-15)"),
    }
    Ok(())
}

fn cmd_today(_args: &str, app: &mut App, _store: &LedgerStore) -> anyhow::Result<()> {
    app.form.date = chrono::Local::now().date_naive();
    app.set_status(format!("Date set to {}", app.form.date_string()));
    Ok(())
}

#[cfg(test)]
#[path = "commands_tests.rs"]
mod tests;
