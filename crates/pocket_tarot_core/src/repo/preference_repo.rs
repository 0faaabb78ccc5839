//! Device-wide key/value preferences.

use crate::repo::journal_repo::{table_exists, RepoError, RepoResult};
use rusqlite::{params, Connection, OptionalExtension};

/// Repository interface for string preferences.
pub trait PreferenceRepository {
    fn get_preference(&self, key: &str) -> RepoResult<Option<String>>;
    fn set_preference(&self, key: &str, value: &str) -> RepoResult<()>;
    fn remove_preference(&self, key: &str) -> RepoResult<()>;
}

/// SQLite-backed preference repository.
pub struct SqlitePreferenceRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqlitePreferenceRepository<'conn> {
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        if !table_exists(conn, "preferences")? {
            return Err(RepoError::MissingRequiredTable("preferences"));
        }
        Ok(Self { conn })
    }
}

impl PreferenceRepository for SqlitePreferenceRepository<'_> {
    fn get_preference(&self, key: &str) -> RepoResult<Option<String>> {
        let value = self
            .conn
            .query_row(
                "SELECT value FROM preferences WHERE key = ?1;",
                [key],
                |row| row.get(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set_preference(&self, key: &str, value: &str) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO preferences (key, value, updated_at)
             VALUES (?1, ?2, strftime('%s', 'now') * 1000)
             ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at;",
            params![key, value],
        )?;
        Ok(())
    }

    fn remove_preference(&self, key: &str) -> RepoResult<()> {
        self.conn
            .execute("DELETE FROM preferences WHERE key = ?1;", [key])?;
        Ok(())
    }
}
