//! Contact-management data layer over SQLite.
//! This crate is the single source of truth for contact persistence,
//! validation, and CSV exchange; presentation is left to embedding callers.

pub mod db;
pub mod exchange;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use db::{
    close_db, ensure_schema, open_db, open_db_in_memory, DbError, DbResult, DEFAULT_DB_PATH,
};
pub use exchange::{
    export_contacts_csv, import_contacts_csv, ExchangeError, ExchangeResult, ExportReport,
    ImportReport, CSV_HEADER,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::contact::{
    is_valid_phone_number, Contact, ContactId, ContactValidationError, NewContact,
};
pub use repo::contact_repo::{ContactRepository, RepoError, RepoResult, SqliteContactRepository};
pub use service::contact_service::ContactService;

/// Returns the crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
