use contactdb::db::{
    close_db, ensure_schema, open_db, open_db_in_memory, CONTACTS_TABLE, DEFAULT_DB_PATH,
};
use contactdb::{ContactRepository, NewContact, SqliteContactRepository};
use rusqlite::Connection;

#[test]
fn open_in_memory_creates_contact_table() {
    let conn = open_db_in_memory().unwrap();
    assert_table_exists(&conn, CONTACTS_TABLE);
}

#[test]
fn ensure_schema_is_idempotent_and_preserves_data() {
    let conn = open_db_in_memory().unwrap();
    let repo = SqliteContactRepository::new(&conn);

    repo.insert_contact(&NewContact::new("Alice", "08123456789", "family"))
        .unwrap();

    ensure_schema(&conn).unwrap();
    ensure_schema(&conn).unwrap();

    let contacts = repo.list_contacts().unwrap();
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].name, "Alice");
}

#[test]
fn reopening_same_database_file_keeps_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(DEFAULT_DB_PATH);

    let conn_first = open_db(&path).unwrap();
    let repo = SqliteContactRepository::new(&conn_first);
    repo.insert_contact(&NewContact::new("Alice", "08123456789", "family"))
        .unwrap();
    close_db(conn_first).unwrap();

    let conn_second = open_db(&path).unwrap();
    assert_table_exists(&conn_second, CONTACTS_TABLE);
    let repo = SqliteContactRepository::new(&conn_second);
    let contacts = repo.list_contacts().unwrap();
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].phone_number, "08123456789");
}

#[test]
fn open_creates_missing_database_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fresh.db");
    assert!(!path.exists());

    let conn = open_db(&path).unwrap();
    assert!(path.exists());
    assert_table_exists(&conn, CONTACTS_TABLE);
}

#[test]
fn open_on_unwritable_location_returns_error_not_panic() {
    let dir = tempfile::tempdir().unwrap();
    // A directory path cannot be opened as a database file.
    let result = open_db(dir.path());
    assert!(result.is_err());
}

#[test]
fn ids_survive_reopen_without_reuse() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("contacts.db");

    let conn = open_db(&path).unwrap();
    let repo = SqliteContactRepository::new(&conn);
    let first = repo
        .insert_contact(&NewContact::new("Alice", "08123456789", "family"))
        .unwrap();
    repo.delete_contact(first).unwrap();
    close_db(conn).unwrap();

    let conn = open_db(&path).unwrap();
    let repo = SqliteContactRepository::new(&conn);
    let second = repo
        .insert_contact(&NewContact::new("Bob", "08199998888", "work"))
        .unwrap();
    // AUTOINCREMENT retires IDs permanently, even across connections.
    assert!(second > first);
}

fn assert_table_exists(conn: &Connection, table_name: &str) {
    let exists: i64 = conn
        .query_row(
            "SELECT EXISTS(
                SELECT 1
                FROM sqlite_master
                WHERE type = 'table' AND name = ?1
            );",
            [table_name],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(exists, 1, "table {table_name} does not exist");
}
