//! Account, session and password-reset persistence for the local identity
//! provider.
//!
//! # Responsibility
//! - Store credential records and federated links keyed by opaque user id.
//! - Keep the single signed-in session row.
//!
//! # Invariants
//! - Emails are stored normalized (trimmed, lowercase) and are unique.
//! - `auth_session` holds at most one row.

use crate::repo::journal_repo::{table_exists, RepoError, RepoResult};
use rusqlite::{params, Connection, OptionalExtension, Row};

const ACCOUNT_SELECT_SQL: &str = "SELECT
    user_id,
    email,
    password_hash,
    federated_key
FROM accounts";

/// Stored account record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountRecord {
    pub user_id: String,
    pub email: String,
    /// Argon2id PHC string; `None` for federated-only accounts.
    pub password_hash: Option<String>,
    /// `provider:subject` for accounts created by federated sign-in.
    pub federated_key: Option<String>,
}

/// Repository interface for identity persistence.
pub trait AccountRepository {
    fn find_by_email(&self, email: &str) -> RepoResult<Option<AccountRecord>>;
    fn find_by_federated_key(&self, federated_key: &str) -> RepoResult<Option<AccountRecord>>;
    fn find_by_user_id(&self, user_id: &str) -> RepoResult<Option<AccountRecord>>;
    /// Inserts a new account. Constraint violations surface as `RepoError::Db`.
    fn insert_account(&self, account: &AccountRecord) -> RepoResult<()>;
    /// Replaces the signed-in session.
    fn set_session(&self, user_id: &str) -> RepoResult<()>;
    fn clear_session(&self) -> RepoResult<()>;
    fn session_user_id(&self) -> RepoResult<Option<String>>;
    fn record_password_reset(&self, user_id: &str, token: &str) -> RepoResult<()>;
    fn password_reset_count(&self, user_id: &str) -> RepoResult<u32>;
}

/// SQLite-backed account repository.
pub struct SqliteAccountRepository<'conn> {
    conn: &'conn Connection,
}

impl<'conn> SqliteAccountRepository<'conn> {
    pub fn try_new(conn: &'conn Connection) -> RepoResult<Self> {
        for table in ["accounts", "auth_session", "password_resets"] {
            if !table_exists(conn, table)? {
                return Err(RepoError::MissingRequiredTable(table));
            }
        }
        Ok(Self { conn })
    }

    fn find_one(&self, column: &str, value: &str) -> RepoResult<Option<AccountRecord>> {
        let record = self
            .conn
            .query_row(
                &format!("{ACCOUNT_SELECT_SQL} WHERE {column} = ?1;"),
                [value],
                parse_account_row,
            )
            .optional()?;
        Ok(record)
    }
}

impl AccountRepository for SqliteAccountRepository<'_> {
    fn find_by_email(&self, email: &str) -> RepoResult<Option<AccountRecord>> {
        self.find_one("email", email)
    }

    fn find_by_federated_key(&self, federated_key: &str) -> RepoResult<Option<AccountRecord>> {
        self.find_one("federated_key", federated_key)
    }

    fn find_by_user_id(&self, user_id: &str) -> RepoResult<Option<AccountRecord>> {
        self.find_one("user_id", user_id)
    }

    fn insert_account(&self, account: &AccountRecord) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO accounts (
                user_id,
                email,
                password_hash,
                federated_key
            ) VALUES (?1, ?2, ?3, ?4);",
            params![
                account.user_id.as_str(),
                account.email.as_str(),
                account.password_hash.as_deref(),
                account.federated_key.as_deref(),
            ],
        )?;
        Ok(())
    }

    fn set_session(&self, user_id: &str) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO auth_session (slot, user_id, signed_in_at)
             VALUES (1, ?1, strftime('%s', 'now') * 1000)
             ON CONFLICT(slot) DO UPDATE SET
                user_id = excluded.user_id,
                signed_in_at = excluded.signed_in_at;",
            [user_id],
        )?;
        Ok(())
    }

    fn clear_session(&self) -> RepoResult<()> {
        self.conn.execute("DELETE FROM auth_session;", [])?;
        Ok(())
    }

    fn session_user_id(&self) -> RepoResult<Option<String>> {
        let user_id = self
            .conn
            .query_row("SELECT user_id FROM auth_session WHERE slot = 1;", [], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(user_id)
    }

    fn record_password_reset(&self, user_id: &str, token: &str) -> RepoResult<()> {
        self.conn.execute(
            "INSERT INTO password_resets (token, user_id) VALUES (?1, ?2);",
            params![token, user_id],
        )?;
        Ok(())
    }

    fn password_reset_count(&self, user_id: &str) -> RepoResult<u32> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM password_resets WHERE user_id = ?1;",
            [user_id],
            |row| row.get(0),
        )?;
        u32::try_from(count).map_err(|_| {
            RepoError::InvalidData(format!("invalid count `{count}` in password_resets"))
        })
    }
}

fn parse_account_row(row: &Row<'_>) -> rusqlite::Result<AccountRecord> {
    Ok(AccountRecord {
        user_id: row.get("user_id")?,
        email: row.get("email")?,
        password_hash: row.get("password_hash")?,
        federated_key: row.get("federated_key")?,
    })
}
