use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::{debug, info};

use super::Ledger;
use crate::error::LedgerError;
use crate::models::{parse_amount, Category, Expense};

/// Column names of the ledger file, in write order.
pub(crate) const HEADER: [&str; 4] = ["date", "amount", "description", "category"];

/// Whole-file persistence for a [`Ledger`].
///
/// Every save rewrites the file from scratch. `append` is load, push, save,
/// so two processes appending at once can lose a record: the store assumes
/// it is the only writer.
#[derive(Debug, Clone)]
pub(crate) struct LedgerStore {
    path: PathBuf,
}

impl LedgerStore {
    pub(crate) fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub(crate) fn path(&self) -> &Path {
        &self.path
    }

    /// Read the full ledger. A missing file is an empty ledger.
    pub(crate) fn load(&self) -> Result<Ledger, LedgerError> {
        let mut rdr = match csv::ReaderBuilder::new()
            .flexible(true)
            .has_headers(true)
            .from_path(&self.path)
        {
            Ok(rdr) => rdr,
            Err(e) if is_not_found(&e) => {
                debug!(path = %self.path.display(), "ledger file absent, starting empty");
                return Ok(Ledger::new());
            }
            Err(e) => return Err(e.into()),
        };

        let headers = rdr.headers()?;
        if headers.is_empty() {
            return Ok(Ledger::new());
        }
        let columns = Columns::locate(headers)?;
        let mut ledger = Ledger::new();
        for result in rdr.records() {
            let record = result?;
            ledger.push(columns.read(&record)?);
        }

        debug!(path = %self.path.display(), records = ledger.len(), "loaded ledger");
        Ok(ledger)
    }

    /// Replace the file with the full contents of `ledger`.
    ///
    /// Rows are written to a sibling temp file which is then renamed over the
    /// ledger, so a failed write leaves the previous file intact.
    pub(crate) fn save(&self, ledger: &Ledger) -> Result<(), LedgerError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| LedgerError::io(parent, e))?;
        }

        let tmp = self.path.with_extension("csv.tmp");
        if let Err(e) = write_rows(&tmp, ledger) {
            let _ = fs::remove_file(&tmp);
            return Err(e);
        }
        fs::rename(&tmp, &self.path).map_err(|e| LedgerError::io(&self.path, e))?;

        debug!(path = %self.path.display(), records = ledger.len(), "saved ledger");
        Ok(())
    }

    /// Add one expense to the end of its date group and save.
    pub(crate) fn append(&self, expense: Expense) -> Result<(), LedgerError> {
        let mut ledger = self.load()?;
        info!(
            date = %expense.date,
            amount = %expense.amount,
            category = %expense.category,
            "appending expense"
        );
        ledger.push(expense);
        self.save(&ledger)
    }
}

fn is_not_found(e: &csv::Error) -> bool {
    matches!(e.kind(), csv::ErrorKind::Io(io) if io.kind() == ErrorKind::NotFound)
}

fn write_rows(path: &Path, ledger: &Ledger) -> Result<(), LedgerError> {
    let mut wtr = csv::Writer::from_path(path)?;
    wtr.write_record(HEADER)?;
    for expense in ledger.iter() {
        let amount = expense.amount.to_string();
        wtr.write_record([
            expense.date.as_str(),
            amount.as_str(),
            expense.description.as_str(),
            expense.category.as_str(),
        ])?;
    }
    wtr.flush().map_err(|e| LedgerError::io(path, e))?;
    Ok(())
}

/// Positions of the named columns in the file's header.
struct Columns {
    date: usize,
    amount: usize,
    description: usize,
    category: usize,
}

impl Columns {
    fn locate(headers: &csv::StringRecord) -> Result<Self, LedgerError> {
        let find = |column: &'static str| {
            headers
                .iter()
                .position(|h| h == column)
                .ok_or(LedgerError::MissingColumn { column })
        };
        Ok(Self {
            date: find("date")?,
            amount: find("amount")?,
            description: find("description")?,
            category: find("category")?,
        })
    }

    fn read(&self, record: &csv::StringRecord) -> Result<Expense, LedgerError> {
        let line = record.position().map_or(0, |p| p.line());
        let field = |idx: usize, column: &'static str| {
            record
                .get(idx)
                .ok_or(LedgerError::MissingField { line, column })
        };

        let date = field(self.date, "date")?;
        let raw_amount = field(self.amount, "amount")?;
        let description = field(self.description, "description")?;
        let category = field(self.category, "category")?;

        let amount = parse_amount(raw_amount).ok_or_else(|| LedgerError::InvalidAmount {
            line,
            value: raw_amount.to_string(),
        })?;

        Ok(Expense {
            date: date.to_string(),
            amount,
            description: description.to_string(),
            category: Category::from_stored(category),
        })
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
