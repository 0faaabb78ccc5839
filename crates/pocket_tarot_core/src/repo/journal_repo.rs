//! Entry store contracts and SQLite implementation.
//!
//! # Responsibility
//! - Persist user profiles (`users`) and journal entries (`journal_entries`).
//! - Keep `entry_count` changes atomic with the entry insert/delete they
//!   account for.
//!
//! # Invariants
//! - Counter updates are single SQL increments/decrements executed in the
//!   same `IMMEDIATE` transaction as the entry write; application code never
//!   does read-then-write on the counter.
//! - `append_entry` re-checks the quota inside the transaction, so a racing
//!   append cannot push a free profile past the quota.
//! - Entry lists are ordered `timestamp DESC, entry_id ASC`.
//!
use crate::db::DbError;
use crate::model::journal::{EntryCard, EntryId, JournalEntry, ReadingType};
use crate::model::profile::UserProfile;
use rusqlite::types::Value;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row, TransactionBehavior};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

const ENTRY_SELECT_SQL: &str = "SELECT
    entry_id,
    user_id,
    reading_type,
    timestamp,
    cards_json,
    notes
FROM journal_entries";

const PROFILE_SELECT_SQL: &str = "SELECT
    user_id,
    email,
    has_unlimited_access,
    entry_count
FROM users";

pub type RepoResult<T> = Result<T, RepoError>;

/// Store error for profile, entry, account and preference persistence.
#[derive(Debug)]
pub enum RepoError {
    Db(DbError),
    EntryNotFound(EntryId),
    ProfileNotFound(String),
    InvalidData(String),
    MissingRequiredTable(&'static str),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Db(err) => write!(f, "{err}"),
            Self::EntryNotFound(id) => write!(f, "journal entry not found: {id}"),
            Self::ProfileNotFound(user_id) => write!(f, "user profile not found: {user_id}"),
            Self::InvalidData(message) => write!(f, "invalid persisted data: {message}"),
            Self::MissingRequiredTable(table) => {
                write!(f, "database is missing required table `{table}`")
            }
        }
    }
}

impl Error for RepoError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Db(err) => Some(err),
            _ => None,
        }
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

/// Filter and window options for listing one user's entries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryListQuery {
    /// Exact reading type match.
    pub reading_type: Option<ReadingType>,
    /// Inclusive lower bound, epoch milliseconds.
    pub start_ms: Option<i64>,
    /// Inclusive upper bound, epoch milliseconds.
    pub end_ms: Option<i64>,
    /// Maximum rows to return; `None` returns every match.
    pub limit: Option<u32>,
    /// Number of rows to skip.
    pub offset: u32,
}

/// Result of a guarded append.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppendOutcome {
    /// Entry stored; carries the profile after the increment.
    Appended(UserProfile),
    /// Quota was reached when the transaction ran; nothing was written.
    QuotaExceeded(UserProfile),
}

/// Counter state around a reconciliation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterReconciliation {
    /// `entry_count` before the correction.
    pub previous_count: u32,
    /// Profile after the correction.
    pub profile: UserProfile,
}

impl CounterReconciliation {
    pub fn drifted(&self) -> bool {
        self.previous_count != self.profile.entry_count
    }
}

/// Storage contract for the journal access controller.
pub trait EntryStore {
    /// Gets one profile by user id.
    fn get_profile(&self, user_id: &str) -> RepoResult<Option<UserProfile>>;
    /// Inserts `profile` unless one already exists; returns the stored profile.
    fn create_profile_if_absent(&mut self, profile: &UserProfile) -> RepoResult<UserProfile>;
    /// Inserts `entry` and increments the owner's counter in one transaction,
    /// unless the owner is locked at `free_quota`.
    fn append_entry(&mut self, entry: &JournalEntry, free_quota: u32) -> RepoResult<AppendOutcome>;
    /// Gets one entry by id regardless of owner.
    fn get_entry(&self, entry_id: EntryId) -> RepoResult<Option<JournalEntry>>;
    /// Deletes the owner's entry and decrements the counter (floored at 0).
    fn remove_entry(&mut self, user_id: &str, entry_id: EntryId) -> RepoResult<UserProfile>;
    /// Replaces the notes of the owner's entry.
    fn update_entry_notes(&mut self, user_id: &str, entry_id: EntryId, notes: &str)
        -> RepoResult<()>;
    /// Lists the user's entries matching `query`, newest first.
    fn list_entries(&self, user_id: &str, query: &EntryListQuery) -> RepoResult<Vec<JournalEntry>>;
    /// Counts the user's entries matching `query`; window fields are ignored.
    fn count_entries(&self, user_id: &str, query: &EntryListQuery) -> RepoResult<u32>;
    /// Sets the counter to the number of stored entries in one statement.
    fn reconcile_entry_count(&mut self, user_id: &str) -> RepoResult<CounterReconciliation>;
    /// Sets `has_unlimited_access = true`.
    fn grant_unlimited_access(&mut self, user_id: &str) -> RepoResult<UserProfile>;
}

/// SQLite-backed entry store.
pub struct SqliteEntryStore<'conn> {
    conn: &'conn mut Connection,
}

impl<'conn> SqliteEntryStore<'conn> {
    /// Constructs a store from a migrated connection.
    pub fn try_new(conn: &'conn mut Connection) -> RepoResult<Self> {
        for table in ["users", "journal_entries"] {
            if !table_exists(conn, table)? {
                return Err(RepoError::MissingRequiredTable(table));
            }
        }
        Ok(Self { conn })
    }
}

impl EntryStore for SqliteEntryStore<'_> {
    fn get_profile(&self, user_id: &str) -> RepoResult<Option<UserProfile>> {
        load_profile(self.conn, user_id)
    }

    fn create_profile_if_absent(&mut self, profile: &UserProfile) -> RepoResult<UserProfile> {
        self.conn.execute(
            "INSERT OR IGNORE INTO users (user_id, email, has_unlimited_access, entry_count)
             VALUES (?1, ?2, ?3, ?4);",
            params![
                profile.user_id.as_str(),
                profile.email.as_str(),
                bool_to_int(profile.has_unlimited_access),
                i64::from(profile.entry_count),
            ],
        )?;
        require_profile(self.conn, profile.user_id.as_str())
    }

    fn append_entry(&mut self, entry: &JournalEntry, free_quota: u32) -> RepoResult<AppendOutcome> {
        let cards_json = encode_cards(&entry.cards)?;
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let changed = tx.execute(
            "UPDATE users
             SET
                entry_count = entry_count + 1,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE user_id = ?1
               AND (has_unlimited_access = 1 OR entry_count < ?2);",
            params![entry.user_id.as_str(), i64::from(free_quota)],
        )?;

        if changed == 0 {
            let profile = require_profile(&tx, entry.user_id.as_str())?;
            // Nothing written; dropping the transaction rolls it back.
            return Ok(AppendOutcome::QuotaExceeded(profile));
        }

        tx.execute(
            "INSERT INTO journal_entries (
                entry_id,
                user_id,
                reading_type,
                timestamp,
                cards_json,
                notes
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6);",
            params![
                entry.id.to_string(),
                entry.user_id.as_str(),
                entry.reading_type.label(),
                entry.timestamp,
                cards_json,
                entry.notes.as_str(),
            ],
        )?;

        let profile = require_profile(&tx, entry.user_id.as_str())?;
        tx.commit()?;
        Ok(AppendOutcome::Appended(profile))
    }

    fn get_entry(&self, entry_id: EntryId) -> RepoResult<Option<JournalEntry>> {
        let mut stmt = self
            .conn
            .prepare(&format!("{ENTRY_SELECT_SQL} WHERE entry_id = ?1;"))?;
        let mut rows = stmt.query([entry_id.to_string()])?;
        if let Some(row) = rows.next()? {
            return Ok(Some(parse_entry_row(row)?));
        }
        Ok(None)
    }

    fn remove_entry(&mut self, user_id: &str, entry_id: EntryId) -> RepoResult<UserProfile> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let deleted = tx.execute(
            "DELETE FROM journal_entries WHERE entry_id = ?1 AND user_id = ?2;",
            params![entry_id.to_string(), user_id],
        )?;
        if deleted == 0 {
            return Err(RepoError::EntryNotFound(entry_id));
        }

        tx.execute(
            "UPDATE users
             SET
                entry_count = MAX(entry_count - 1, 0),
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE user_id = ?1;",
            [user_id],
        )?;

        let profile = require_profile(&tx, user_id)?;
        tx.commit()?;
        Ok(profile)
    }

    fn update_entry_notes(
        &mut self,
        user_id: &str,
        entry_id: EntryId,
        notes: &str,
    ) -> RepoResult<()> {
        let changed = self.conn.execute(
            "UPDATE journal_entries SET notes = ?3 WHERE entry_id = ?1 AND user_id = ?2;",
            params![entry_id.to_string(), user_id, notes],
        )?;
        if changed == 0 {
            return Err(RepoError::EntryNotFound(entry_id));
        }
        Ok(())
    }

    fn list_entries(&self, user_id: &str, query: &EntryListQuery) -> RepoResult<Vec<JournalEntry>> {
        let (filter_sql, mut bind_values) = entry_filter(user_id, query);
        let mut sql = format!("{ENTRY_SELECT_SQL} {filter_sql} ORDER BY timestamp DESC, entry_id ASC");

        if let Some(limit) = query.limit {
            sql.push_str(" LIMIT ?");
            bind_values.push(Value::Integer(i64::from(limit)));
            if query.offset > 0 {
                sql.push_str(" OFFSET ?");
                bind_values.push(Value::Integer(i64::from(query.offset)));
            }
        } else if query.offset > 0 {
            sql.push_str(" LIMIT -1 OFFSET ?");
            bind_values.push(Value::Integer(i64::from(query.offset)));
        }

        let mut stmt = self.conn.prepare(&sql)?;
        let mut rows = stmt.query(params_from_iter(bind_values))?;
        let mut entries = Vec::new();
        while let Some(row) = rows.next()? {
            entries.push(parse_entry_row(row)?);
        }
        Ok(entries)
    }

    fn count_entries(&self, user_id: &str, query: &EntryListQuery) -> RepoResult<u32> {
        let (filter_sql, bind_values) = entry_filter(user_id, query);
        let count: i64 = self.conn.query_row(
            &format!("SELECT COUNT(*) FROM journal_entries {filter_sql};"),
            params_from_iter(bind_values),
            |row| row.get(0),
        )?;
        to_count(count, "journal_entries count")
    }

    fn reconcile_entry_count(&mut self, user_id: &str) -> RepoResult<CounterReconciliation> {
        let tx = self
            .conn
            .transaction_with_behavior(TransactionBehavior::Immediate)?;

        let previous_count = require_profile(&tx, user_id)?.entry_count;
        tx.execute(
            "UPDATE users
             SET
                entry_count = (SELECT COUNT(*) FROM journal_entries WHERE user_id = ?1),
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE user_id = ?1
               AND entry_count <> (SELECT COUNT(*) FROM journal_entries WHERE user_id = ?1);",
            [user_id],
        )?;

        let profile = require_profile(&tx, user_id)?;
        tx.commit()?;
        Ok(CounterReconciliation {
            previous_count,
            profile,
        })
    }

    fn grant_unlimited_access(&mut self, user_id: &str) -> RepoResult<UserProfile> {
        let changed = self.conn.execute(
            "UPDATE users
             SET
                has_unlimited_access = 1,
                updated_at = (strftime('%s', 'now') * 1000)
             WHERE user_id = ?1;",
            [user_id],
        )?;
        if changed == 0 {
            return Err(RepoError::ProfileNotFound(user_id.to_string()));
        }
        require_profile(self.conn, user_id)
    }
}

fn entry_filter(user_id: &str, query: &EntryListQuery) -> (String, Vec<Value>) {
    let mut sql = String::from("WHERE user_id = ?");
    let mut bind_values = vec![Value::Text(user_id.to_string())];

    if let Some(reading_type) = query.reading_type {
        sql.push_str(" AND reading_type = ?");
        bind_values.push(Value::Text(reading_type.label().to_string()));
    }
    if let Some(start_ms) = query.start_ms {
        sql.push_str(" AND timestamp >= ?");
        bind_values.push(Value::Integer(start_ms));
    }
    if let Some(end_ms) = query.end_ms {
        sql.push_str(" AND timestamp <= ?");
        bind_values.push(Value::Integer(end_ms));
    }

    (sql, bind_values)
}

fn load_profile(conn: &Connection, user_id: &str) -> RepoResult<Option<UserProfile>> {
    conn.query_row(
        &format!("{PROFILE_SELECT_SQL} WHERE user_id = ?1;"),
        [user_id],
        |row| {
            Ok((
                row.get::<_, String>("user_id")?,
                row.get::<_, String>("email")?,
                row.get::<_, i64>("has_unlimited_access")?,
                row.get::<_, i64>("entry_count")?,
            ))
        },
    )
    .optional()?
    .map(|(user_id, email, unlimited, count)| {
        Ok(UserProfile {
            user_id,
            email,
            has_unlimited_access: int_to_bool(unlimited, "users.has_unlimited_access")?,
            entry_count: to_count(count, "users.entry_count")?,
        })
    })
    .transpose()
}

fn require_profile(conn: &Connection, user_id: &str) -> RepoResult<UserProfile> {
    load_profile(conn, user_id)?.ok_or_else(|| RepoError::ProfileNotFound(user_id.to_string()))
}

fn parse_entry_row(row: &Row<'_>) -> RepoResult<JournalEntry> {
    let id_text: String = row.get("entry_id")?;
    let id = Uuid::parse_str(&id_text).map_err(|_| {
        RepoError::InvalidData(format!(
            "invalid uuid value `{id_text}` in journal_entries.entry_id"
        ))
    })?;

    let type_text: String = row.get("reading_type")?;
    let reading_type = ReadingType::parse(&type_text).ok_or_else(|| {
        RepoError::InvalidData(format!(
            "invalid reading type `{type_text}` in journal_entries.reading_type"
        ))
    })?;

    let cards_json: String = row.get("cards_json")?;
    let cards: Vec<EntryCard> = serde_json::from_str(&cards_json).map_err(|err| {
        RepoError::InvalidData(format!(
            "invalid cards for entry `{id_text}` in journal_entries.cards_json: {err}"
        ))
    })?;

    Ok(JournalEntry {
        id,
        reading_type,
        user_id: row.get("user_id")?,
        timestamp: row.get("timestamp")?,
        cards,
        notes: row.get("notes")?,
    })
}

fn encode_cards(cards: &[EntryCard]) -> RepoResult<String> {
    serde_json::to_string(cards)
        .map_err(|err| RepoError::InvalidData(format!("cannot encode entry cards: {err}")))
}

fn to_count(value: i64, column: &str) -> RepoResult<u32> {
    u32::try_from(value)
        .map_err(|_| RepoError::InvalidData(format!("invalid count `{value}` in {column}")))
}

fn int_to_bool(value: i64, column: &str) -> RepoResult<bool> {
    match value {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(RepoError::InvalidData(format!(
            "invalid boolean `{other}` in {column}"
        ))),
    }
}

fn bool_to_int(value: bool) -> i64 {
    if value {
        1
    } else {
        0
    }
}

pub(crate) fn table_exists(conn: &Connection, table: &str) -> RepoResult<bool> {
    let exists: i64 = conn.query_row(
        "SELECT EXISTS(
            SELECT 1
            FROM sqlite_master
            WHERE type = 'table' AND name = ?1
        );",
        [table],
        |row| row.get(0),
    )?;
    Ok(exists == 1)
}
