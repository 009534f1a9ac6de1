//! Connection bootstrap and release for SQLite.
//!
//! # Responsibility
//! - Open file or in-memory SQLite connections, creating the file if absent.
//! - Configure the busy timeout and ensure the schema before returning.
//! - Close connections with engine-side failures reported, not swallowed.
//!
//! # Invariants
//! - Returned connections always have the contact table in place.
//! - Open/close failures are ordinary `Err` values, never panics.

use super::schema::ensure_schema;
use super::DbResult;
use log::{error, info};
use rusqlite::Connection;
use std::path::Path;
use std::time::Duration;

const BUSY_TIMEOUT: Duration = Duration::from_secs(5);

/// Opens (or creates) a SQLite database file and ensures the schema.
///
/// # Side effects
/// - Creates the database file when it does not exist.
/// - Emits `db_open` logging events with status.
pub fn open_db(path: impl AsRef<Path>) -> DbResult<Connection> {
    let path = path.as_ref();
    info!("event=db_open module=db status=start mode=file path={}", path.display());

    let conn = match Connection::open(path) {
        Ok(conn) => conn,
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode=file path={} error={err}",
                path.display()
            );
            return Err(err.into());
        }
    };

    match bootstrap_connection(&conn) {
        Ok(()) => {
            info!("event=db_open module=db status=ok mode=file path={}", path.display());
            Ok(conn)
        }
        Err(err) => {
            error!(
                "event=db_open module=db status=error mode=file path={} error={err}",
                path.display()
            );
            Err(err)
        }
    }
}

/// Opens an in-memory SQLite database and ensures the schema.
///
/// Used by tests and by callers wanting isolated throwaway stores.
pub fn open_db_in_memory() -> DbResult<Connection> {
    info!("event=db_open module=db status=start mode=memory");

    let conn = match Connection::open_in_memory() {
        Ok(conn) => conn,
        Err(err) => {
            error!("event=db_open module=db status=error mode=memory error={err}");
            return Err(err.into());
        }
    };

    match bootstrap_connection(&conn) {
        Ok(()) => {
            info!("event=db_open module=db status=ok mode=memory");
            Ok(conn)
        }
        Err(err) => {
            error!("event=db_open module=db status=error mode=memory error={err}");
            Err(err)
        }
    }
}

/// Releases a connection, reporting engine-side close failures.
///
/// Consuming the connection makes double-close unrepresentable; simply
/// dropping a `Connection` also releases it, so this function exists for
/// callers who want the close result and the log event.
pub fn close_db(conn: Connection) -> DbResult<()> {
    match conn.close() {
        Ok(()) => {
            info!("event=db_close module=db status=ok");
            Ok(())
        }
        Err((_conn, err)) => {
            error!("event=db_close module=db status=error error={err}");
            Err(err.into())
        }
    }
}

fn bootstrap_connection(conn: &Connection) -> DbResult<()> {
    conn.busy_timeout(BUSY_TIMEOUT)?;
    ensure_schema(conn)?;
    Ok(())
}
