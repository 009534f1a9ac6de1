//! SQLite storage bootstrap for the contact store.
//!
//! # Responsibility
//! - Open and configure SQLite connections.
//! - Ensure the contact schema exists before any data access.
//! - Release connections explicitly with engine errors surfaced.
//!
//! # Invariants
//! - Schema creation is idempotent; re-running it is a no-op.
//! - Callers must not read/write contact data before `ensure_schema`
//!   succeeds (`open_db` guarantees this ordering).

use std::error::Error;
use std::fmt::{Display, Formatter};

mod open;
mod schema;

pub use open::{close_db, open_db, open_db_in_memory};
pub use schema::{ensure_schema, CONTACTS_TABLE};

/// Well-known relative path of the shared contact database file.
///
/// Callers wanting an isolated store pass their own path to `open_db`;
/// callers wanting the conventional location open this one.
pub const DEFAULT_DB_PATH: &str = "contacts.db";

pub type DbResult<T> = Result<T, DbError>;

/// Storage-engine failure during open, schema setup, or close.
#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
