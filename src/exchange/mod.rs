//! Bulk CSV exchange for contact data.
//!
//! # Responsibility
//! - Export every stored contact to a CSV file.
//! - Import contacts from a CSV file through the repository write path.
//!
//! # Invariants
//! - The wire format is the naive unquoted one: header
//!   `ID,Name,Phone Number,Category`, fields joined by commas, no escaping.
//!   Fields containing commas corrupt row boundaries; this is kept for
//!   compatibility with previously exported files.
//! - File handles are scoped to a single call and released on every exit
//!   path, including errors.

use crate::repo::contact_repo::RepoError;
use std::error::Error;
use std::fmt::{Display, Formatter};

mod export;
mod import;

pub use export::{export_contacts_csv, ExportReport, CSV_HEADER};
pub use import::{import_contacts_csv, ImportReport};

pub type ExchangeResult<T> = Result<T, ExchangeError>;

/// Combined I/O and engine failure for CSV export/import.
#[derive(Debug)]
pub enum ExchangeError {
    Io(std::io::Error),
    Repo(RepoError),
}

impl Display for ExchangeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "csv file error: {err}"),
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ExchangeError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Repo(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ExchangeError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<RepoError> for ExchangeError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}
