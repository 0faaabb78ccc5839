//! Repository layer abstractions and persistence implementations.
//!
//! # Responsibility
//! - Define use-case oriented data access contracts (`EntryStore`,
//!   `AccountRepository`, `PreferenceRepository`).
//! - Isolate SQLite query details from service/business orchestration.
//!
//! # Invariants
//! - Repository APIs return semantic errors (`EntryNotFound`,
//!   `ProfileNotFound`) in addition to DB transport errors.
//! - Profile counters only change inside the same transaction as the entry
//!   write they account for, or through explicit reconciliation.

pub mod account_repo;
pub mod journal_repo;
pub mod preference_repo;
