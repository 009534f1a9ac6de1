//! Contact repository contract and SQLite implementation.
//!
//! # Responsibility
//! - Provide stable CRUD APIs over the `contacts` table.
//! - Keep SQL details inside the persistence boundary.
//!
//! # Invariants
//! - Write paths call `NewContact::validate()` before SQL mutations; an
//!   invalid draft never reaches the engine and never consumes an ID.
//! - `list_contacts` returns rows in ascending ID order (insertion order).
//! - Update/delete on a missing ID report zero rows affected via
//!   `Ok(false)` instead of erroring; deletion is idempotent.

use crate::db::DbError;
use crate::model::contact::{Contact, ContactId, ContactValidationError, NewContact};
use rusqlite::{params, Connection, Row};
use std::error::Error;
use std::fmt::{Display, Formatter};

const CONTACT_SELECT_SQL: &str = "SELECT id, name, phone_number, category FROM contacts";

pub type RepoResult<T> = Result<T, RepoError>;

/// Repository error for contact persistence and query operations.
#[derive(Debug)]
pub enum RepoError {
    Validation(ContactValidationError),
    Db(DbError),
    /// Contract member declared but not implemented in this version.
    NotImplemented(&'static str),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Db(err) => write!(f, "{err}"),
            Self::NotImplemented(operation) => {
                write!(f, "operation `{operation}` is not implemented")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Db(err) => Some(err),
            Self::NotImplemented(_) => None,
        }
    }
}

impl From<ContactValidationError> for RepoError {
    fn from(value: ContactValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<DbError> for RepoError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for RepoError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Repository interface for contact CRUD operations.
pub trait ContactRepository {
    /// Inserts a validated draft and returns the engine-assigned ID.
    fn insert_contact(&self, draft: &NewContact) -> RepoResult<ContactId>;
    /// Returns all contacts ordered by ascending ID; empty table gives
    /// an empty vector, not an error.
    fn list_contacts(&self) -> RepoResult<Vec<Contact>>;
    /// Replaces name/phone/category of the row matching `id`. Returns
    /// whether a row was changed.
    fn update_contact(&self, id: ContactId, draft: &NewContact) -> RepoResult<bool>;
    /// Removes the row matching `id`. Returns whether a row was removed;
    /// a missing ID is `Ok(false)`, never an error.
    fn delete_contact(&self, id: ContactId) -> RepoResult<bool>;
    /// Exact-match search by name and category. Declared for contract
    /// stability; unimplemented in this version and always fails with
    /// `RepoError::NotImplemented`.
    fn search_contacts(&self, name: &str, category: &str) -> RepoResult<Vec<Contact>>;
}

/// SQLite-backed contact repository borrowing a bootstrapped connection.
pub struct SqliteContactRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteContactRepository<'conn> {
    pub fn new(conn: &'conn Connection) -> Self {
        Self { conn }
    }
}

impl ContactRepository for SqliteContactRepository<'_> {
    fn insert_contact(&self, draft: &NewContact) -> RepoResult<ContactId> {
        draft.validate()?;

        self.conn.execute(
            "INSERT INTO contacts (name, phone_number, category) VALUES (?1, ?2, ?3);",
            params![
                draft.name.as_str(),
                draft.phone_number.as_str(),
                draft.category.as_str(),
            ],
        )?;

        Ok(self.conn.last_insert_rowid())
    }

    fn list_contacts(&self) -> RepoResult<Vec<Contact>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{CONTACT_SELECT_SQL} ORDER BY id ASC;"))?;

        let mut rows = stmt.query([])?;
        let mut contacts = Vec::new();
        while let Some(row) = rows.next()? {
            contacts.push(parse_contact_row(row)?);
        }

        Ok(contacts)
    }

    fn update_contact(&self, id: ContactId, draft: &NewContact) -> RepoResult<bool> {
        draft.validate()?;

        let changed = self.conn.execute(
            "UPDATE contacts SET name = ?1, phone_number = ?2, category = ?3 WHERE id = ?4;",
            params![
                draft.name.as_str(),
                draft.phone_number.as_str(),
                draft.category.as_str(),
                id,
            ],
        )?;

        Ok(changed > 0)
    }

    fn delete_contact(&self, id: ContactId) -> RepoResult<bool> {
        let changed = self
            .conn
            .execute("DELETE FROM contacts WHERE id = ?1;", params![id])?;

        Ok(changed > 0)
    }

    fn search_contacts(&self, _name: &str, _category: &str) -> RepoResult<Vec<Contact>> {
        Err(RepoError::NotImplemented("search_contacts"))
    }
}

fn parse_contact_row(row: &Row<'_>) -> RepoResult<Contact> {
    Ok(Contact {
        id: row.get("id")?,
        name: row.get("name")?,
        phone_number: row.get("phone_number")?,
        category: row.get("category")?,
    })
}
