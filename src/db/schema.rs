//! Idempotent schema setup for the contact table.

use super::DbResult;
use rusqlite::Connection;

/// Name of the single table holding contact rows.
pub const CONTACTS_TABLE: &str = "contacts";

/// Creates the contact table when absent.
///
/// Safe to call any number of times: an existing table is left untouched
/// and no data is lost. `open_db` calls this before handing out the
/// connection, but the function stays public so embedding callers can
/// re-assert the schema on a connection they opened themselves.
pub fn ensure_schema(conn: &Connection) -> DbResult<()> {
    conn.execute_batch(include_str!("schema.sql"))?;
    Ok(())
}
