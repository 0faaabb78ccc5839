use pocket_tarot_core::db::migrations::latest_version;
use pocket_tarot_core::db::{open_db, open_db_in_memory, DbError};
use rusqlite::{params, Connection};

const TABLES: [&str; 6] = [
    "users",
    "journal_entries",
    "accounts",
    "auth_session",
    "password_resets",
    "preferences",
];

#[test]
fn open_db_in_memory_applies_all_migrations() {
    let conn = open_db_in_memory().unwrap();

    assert_eq!(schema_version(&conn), latest_version());
    for table in TABLES {
        assert_table_exists(&conn, table);
    }
}

#[test]
fn opening_same_database_twice_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("pocket_tarot.sqlite3");

    let conn_first = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_first), latest_version());
    conn_first
        .execute(
            "INSERT INTO users (user_id, email) VALUES (?1, ?2);",
            params!["user-1", "seer@example.com"],
        )
        .unwrap();
    drop(conn_first);

    let conn_second = open_db(&path).unwrap();
    assert_eq!(schema_version(&conn_second), latest_version());
    let count: i64 = conn_second
        .query_row("SELECT COUNT(*) FROM users;", [], |row| row.get(0))
        .unwrap();
    assert_eq!(count, 1);
}

#[test]
fn opening_database_with_newer_schema_version_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("future.sqlite3");

    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 999;").unwrap();
    drop(conn);

    let err = open_db(&path).unwrap_err();
    match err {
        DbError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        } => {
            assert_eq!(db_version, 999);
            assert_eq!(latest_supported, latest_version());
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn schema_rejects_negative_counter_and_unknown_reading_type() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO users (user_id, email) VALUES ('user-1', '');",
        [],
    )
    .unwrap();

    let negative = conn
        .execute(
            "UPDATE users SET entry_count = -1 WHERE user_id = 'user-1';",
            [],
        )
        .unwrap_err();
    assert!(DbError::from(negative).is_constraint_violation());

    let bad_type = conn
        .execute(
            "INSERT INTO journal_entries (entry_id, user_id, reading_type, timestamp, cards_json, notes)
             VALUES ('e-1', 'user-1', 'Ten Card Reading', 0, '[]', '');",
            [],
        )
        .unwrap_err();
    assert!(DbError::from(bad_type).is_constraint_violation());
}

#[test]
fn entries_require_an_existing_profile() {
    let conn = open_db_in_memory().unwrap();
    let err = conn
        .execute(
            "INSERT INTO journal_entries (entry_id, user_id, reading_type, timestamp, cards_json, notes)
             VALUES ('e-1', 'nobody', 'Card of the Day', 0, '[]', '');",
            [],
        )
        .unwrap_err();
    assert!(DbError::from(err).is_constraint_violation());
}

fn schema_version(conn: &Connection) -> u32 {
    conn.query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap()
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
