use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

/// Overrides the ledger location when set and non-empty.
pub(crate) const LEDGER_ENV: &str = "EXPENSETUI_FILE";

const LEDGER_FILE: &str = "expenses.csv";
const LOG_FILE: &str = "expensetui.log";

/// Paths resolved once at startup and fixed for the life of the process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Config {
    pub(crate) ledger_path: PathBuf,
    pub(crate) log_path: PathBuf,
}

impl Config {
    pub(crate) fn load() -> Result<Self> {
        let from_env = std::env::var_os(LEDGER_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        if let Some(path) = from_env {
            return Ok(Self::with_ledger(path));
        }

        let proj_dirs = directories::ProjectDirs::from("com", "expensetui", "ExpenseTUI")
            .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))?;
        let data_dir = proj_dirs.data_dir();
        std::fs::create_dir_all(data_dir)
            .with_context(|| format!("Failed to create data directory: {}", data_dir.display()))?;
        Ok(Self::in_dir(data_dir))
    }

    /// Ledger and log side by side in `dir`.
    pub(crate) fn in_dir(dir: &Path) -> Self {
        Self::with_ledger(dir.join(LEDGER_FILE))
    }

    /// Use an explicit ledger file; the log goes next to it.
    pub(crate) fn with_ledger(ledger_path: PathBuf) -> Self {
        let log_path = ledger_path.with_file_name(LOG_FILE);
        Self {
            ledger_path,
            log_path,
        }
    }
}
