mod config;
mod error;
mod ledger;
mod models;
mod run;
mod ui;

use anyhow::Result;
use std::path::Path;
use tracing_subscriber::EnvFilter;

use crate::config::Config;
use crate::ledger::LedgerStore;

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();
    let config = Config::load()?;
    let store = LedgerStore::new(&config.ledger_path);

    match args.len() {
        1 => {
            init_file_logger(&config.log_path);
            run::as_tui(&store)
        }
        2.. => {
            init_stderr_logger();
            run::as_cli(&args, &store)
        }
        _ => {
            eprintln!("Usage: expensetui [command]");
            Ok(())
        }
    }
}

fn env_filter(default_level: &str) -> EnvFilter {
    match std::env::var("RUST_LOG").ok() {
        Some(_) => EnvFilter::from_default_env(),
        None => EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), default_level)),
    }
}

fn init_stderr_logger() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter("warn"))
        .with_writer(std::io::stderr)
        .init();
}

/// The TUI owns the terminal, so logs go to a file beside the ledger. If the
/// file cannot be opened the TUI runs without logging.
fn init_file_logger(path: &Path) {
    let file = match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
    {
        Ok(file) => file,
        Err(_) => return,
    };
    tracing_subscriber::fmt()
        .with_env_filter(env_filter("info"))
        .with_ansi(false)
        .with_writer(std::sync::Mutex::new(file))
        .init();
}
