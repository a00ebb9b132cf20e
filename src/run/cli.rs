use anyhow::{Context, Result};
use chrono::NaiveDate;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use tracing::info;

use crate::ledger::{checked_sum, summarize_by_category, summarize_by_month, LedgerStore};
use crate::models::{validate_and_build, Category, Expense};
use crate::ui::util::{format_amount, truncate};

const BAR_WIDTH: usize = 30;
const ADD_USAGE: &str =
    "Usage: expensetui add <amount> [--description <text>] [--category <name>] [--date <YYYY-MM-DD>]";

pub(crate) fn as_cli(args: &[String], store: &LedgerStore) -> Result<()> {
    match args[1].as_str() {
        "add" | "a" => cli_add(&args[2..], store),
        "monthly" | "m" => cli_summary(store, SummaryKind::Monthly),
        "categories" | "c" => cli_summary(store, SummaryKind::Categories),
        "list" | "ls" => cli_list(&args[2..], store),
        "path" => {
            println!("{}", store.path().display());
            Ok(())
        }
        "--help" | "-h" | "help" => {
            print_usage();
            Ok(())
        }
        "--version" | "-V" | "version" => {
            println!("expensetui {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

fn print_usage() {
    println!("ExpenseTUI - local-only expense tracker");
    println!();
    println!("Usage: expensetui [command]");
    println!();
    println!("Commands:");
    println!("  (none)                        Launch interactive TUI");
    println!("  add <amount>                  Record an expense");
    println!("    --description <text>        What it was for (default: empty)");
    println!("    --category <name>           Food, Transportation, Entertainment, Bills, Others (default: Food)");
    println!("    --date <YYYY-MM-DD>         Day of the expense (default: today)");
    println!("  monthly                       Print totals per month");
    println!("  categories                    Print totals per category");
    println!("  list                          Print every recorded expense, by date");
    println!("    --date <YYYY-MM-DD>         Only that day");
    println!("  path                          Print the ledger file location");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
    println!();
    println!("Environment:");
    println!("  EXPENSETUI_FILE               Use this ledger file instead of the default");
    println!("  RUST_LOG                      Log filter (e.g. expensetui=debug)");
}

/// Options of `add`, parsed from `--flag value` pairs.
#[derive(Debug, PartialEq, Eq)]
pub(crate) struct AddArgs {
    pub(crate) amount: String,
    pub(crate) description: String,
    pub(crate) category: Category,
    pub(crate) date: String,
}

pub(crate) fn parse_add_args(args: &[String], today: NaiveDate) -> Result<AddArgs> {
    let amount = args
        .first()
        .filter(|a| !a.starts_with("--"))
        .cloned()
        .ok_or_else(|| anyhow::anyhow!(ADD_USAGE))?;

    let description = flag_value(args, "--description")?.unwrap_or("").to_string();

    let category = match flag_value(args, "--category")? {
        Some(name) => Category::parse_choice(name).ok_or_else(|| {
            let choices: Vec<&str> = Category::all().iter().map(|c| c.as_str()).collect();
            anyhow::anyhow!("Unknown category '{name}'. Choose one of: {}", choices.join(", "))
        })?,
        None => Category::default(),
    };

    let date = match flag_value(args, "--date")? {
        Some(raw) => NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .with_context(|| format!("Invalid date '{raw}'. Use YYYY-MM-DD"))?,
        None => today,
    };

    Ok(AddArgs {
        amount,
        description,
        category,
        date: date.format("%Y-%m-%d").to_string(),
    })
}

/// Value following `name`, if the flag is present at all.
fn flag_value<'a>(args: &'a [String], name: &str) -> Result<Option<&'a str>> {
    match args.iter().position(|a| a == name) {
        Some(i) => args
            .get(i + 1)
            .map(|v| Some(v.as_str()))
            .ok_or_else(|| anyhow::anyhow!("{name} needs a value\n{ADD_USAGE}")),
        None => Ok(None),
    }
}

fn cli_add(args: &[String], store: &LedgerStore) -> Result<()> {
    let add = parse_add_args(args, chrono::Local::now().date_naive())?;
    let expense = validate_and_build(&add.amount, &add.description, add.category, &add.date)?;
    let line = format!(
        "Added {} {} on {}",
        format_amount(expense.amount),
        expense.category,
        expense.date
    );
    store.append(expense).context("Failed to save expense")?;
    info!("{line}");
    println!("{line}");
    Ok(())
}

#[derive(Debug, Clone, Copy)]
enum SummaryKind {
    Monthly,
    Categories,
}

fn cli_summary(store: &LedgerStore, kind: SummaryKind) -> Result<()> {
    let ledger = store.load().context("Failed to load ledger")?;
    let (title, totals) = match kind {
        SummaryKind::Monthly => ("Monthly Expenses Summary", summarize_by_month(&ledger)?),
        SummaryKind::Categories => ("Category-wise Expenses Summary", summarize_by_category(&ledger)?),
    };

    println!("{title}");
    println!("{}", "─".repeat(60));
    if totals.is_empty() {
        println!("  No expenses recorded");
        return Ok(());
    }
    for line in summary_lines(&totals) {
        println!("{line}");
    }
    println!("{}", "─".repeat(60));
    println!(
        "  {:<16} {:>12}  ({} expenses)",
        "Total",
        format_amount(ledger.total()?),
        ledger.len()
    );
    Ok(())
}

/// One aligned text bar per key, scaled to the largest total.
pub(crate) fn summary_lines(totals: &[(String, Decimal)]) -> Vec<String> {
    let max = totals
        .iter()
        .map(|(_, t)| *t)
        .max()
        .unwrap_or(Decimal::ZERO);

    totals
        .iter()
        .map(|(key, total)| {
            let filled = if max > Decimal::ZERO && *total > Decimal::ZERO {
                // Divide first so the product never exceeds BAR_WIDTH
                total
                    .checked_div(max)
                    .and_then(|ratio| ratio.checked_mul(Decimal::from(BAR_WIDTH as u64)))
                    .and_then(|scaled| scaled.round().to_usize())
                    .unwrap_or(0)
                    .max(1)
            } else {
                0
            };
            format!(
                "  {:<16} {:>12}  {}",
                truncate(key, 16),
                format_amount(*total),
                "█".repeat(filled.min(BAR_WIDTH))
            )
        })
        .collect()
}

fn cli_list(args: &[String], store: &LedgerStore) -> Result<()> {
    let ledger = store.load().context("Failed to load ledger")?;
    let only = match args.windows(2).find(|w| w[0] == "--date") {
        Some(w) => Some(
            NaiveDate::parse_from_str(&w[1], "%Y-%m-%d")
                .with_context(|| format!("Invalid date '{}'. Use YYYY-MM-DD", w[1]))?
                .format("%Y-%m-%d")
                .to_string(),
        ),
        None => None,
    };

    let groups: Vec<(&str, &[Expense])> = match &only {
        Some(date) => ledger
            .get(date)
            .map(|entries| vec![(date.as_str(), entries)])
            .unwrap_or_default(),
        None => ledger.groups().collect(),
    };
    if groups.is_empty() {
        println!("No expenses recorded");
        return Ok(());
    }

    for (date, entries) in groups {
        let day_total = checked_sum(entries, date)?;
        println!("{date}  ({})", format_amount(day_total));
        for expense in entries {
            println!(
                "  {:>12}  {:<15} {}",
                format_amount(expense.amount),
                truncate(expense.category.as_str(), 15),
                expense.description
            );
        }
    }
    Ok(())
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
