use std::path::PathBuf;

use thiserror::Error;

/// Rejected user input. Raised before anything touches the ledger file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("Amount should be greater than zero")]
    NotPositive,
}

/// Failure to read or write the ledger file. Aborts the whole operation.
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Ledger header is missing the '{column}' column")]
    MissingColumn { column: &'static str },

    #[error("Line {line}: missing '{column}' field")]
    MissingField { line: u64, column: &'static str },

    #[error("Line {line}: amount '{value}' is not a number")]
    InvalidAmount { line: u64, value: String },

    #[error("Total for '{key}' is larger than the biggest supported amount")]
    Overflow { key: String },
}

impl LedgerError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// True for errors caused by the file's contents rather than the filesystem.
    pub fn is_parse(&self) -> bool {
        match self {
            Self::Csv(e) => matches!(e.kind(), csv::ErrorKind::Utf8 { .. }),
            Self::MissingColumn { .. }
            | Self::MissingField { .. }
            | Self::InvalidAmount { .. }
            | Self::Overflow { .. } => true,
            Self::Io { .. } => false,
        }
    }
}
