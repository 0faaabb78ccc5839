//! Core domain logic for Pocket Tarot.
//! This crate is the single source of truth for journal access rules.

pub mod auth;
pub mod catalog;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;
pub mod spread;

pub use auth::{
    AuthError, AuthUser, FederatedSignIn, IdentityProvider, LocalIdentityProvider,
    PASSWORD_RESET_SENT_MESSAGE,
};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::card::{DrawnCard, TarotCard};
pub use model::journal::{EntryCard, EntryDraft, EntryId, JournalEntry, ReadingType};
pub use model::profile::{AccessState, UserId, UserProfile, FREE_ENTRY_QUOTA};
pub use repo::account_repo::SqliteAccountRepository;
pub use repo::journal_repo::{
    AppendOutcome, CounterReconciliation, EntryListQuery, EntryStore, RepoError, RepoResult,
    SqliteEntryStore,
};
pub use repo::preference_repo::SqlitePreferenceRepository;
pub use service::clock::{Clock, SystemClock};
pub use service::deck_service::{CardBack, DeckError, DeckService};
pub use service::journal_service::{
    AddEntryOutcome, JournalAction, JournalError, JournalFilter, JournalPage, JournalService,
    JOURNAL_PAGE_SIZE, LOGIN_REQUIRED_MESSAGE, QUOTA_EXCEEDED_MESSAGE,
};
pub use service::payment_service::{PaymentError, PaymentOutcome, PaymentReceipt, PaymentService};
pub use spread::{Spread, SpreadError, SpreadKind};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
