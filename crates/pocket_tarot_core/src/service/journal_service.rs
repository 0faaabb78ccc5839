//! Journal access controller.
//!
//! # Responsibility
//! - Decide whether a completed spread may be persisted as a journal entry.
//! - Keep `UserProfile::entry_count` consistent with stored entries.
//! - Unlock unlimited access on payment confirmation.
//! - Serve filtered, paginated journal listings.
//!
//! # Invariants
//! - Access state is re-derived from a fresh profile on every call; nothing
//!   is cached between calls.
//! - Only the owner may read, edit or delete an entry.
//! - A refused add (`QuotaExceeded`) performs no store mutation.
//! - Listing reconciles the counter with the observed stored entry count.

use crate::model::journal::{DraftValidationError, EntryDraft, EntryId, JournalEntry, ReadingType};
use crate::model::profile::{AccessState, UserProfile, FREE_ENTRY_QUOTA};
use crate::repo::journal_repo::{AppendOutcome, EntryListQuery, EntryStore, RepoError};
use crate::service::clock::{Clock, SystemClock};
use log::{info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Entries per journal page.
pub const JOURNAL_PAGE_SIZE: u32 = 5;

/// Message shown when the free quota blocks a save.
pub const QUOTA_EXCEEDED_MESSAGE: &str =
    "You have reached the maximum of 3 entries. Please upgrade to get unlimited access.";

/// Message shown when a journal call has no signed-in user behind it.
pub const LOGIN_REQUIRED_MESSAGE: &str = "Please log in to use your journal.";

/// Journal controller errors.
#[derive(Debug)]
pub enum JournalError {
    /// Caller does not own the entry.
    NotOwner(EntryId),
    EntryNotFound(EntryId),
    /// No profile exists for the caller; sign-in did not complete.
    ProfileMissing(String),
    InvalidDraft(DraftValidationError),
    Store(RepoError),
}

impl Display for JournalError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotOwner(entry_id) => write!(f, "journal entry {entry_id} belongs to another user"),
            Self::EntryNotFound(entry_id) => write!(f, "journal entry not found: {entry_id}"),
            Self::ProfileMissing(user_id) => write!(f, "no profile for user {user_id}"),
            Self::InvalidDraft(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl JournalError {
    /// Message suitable for the journal screen.
    pub fn user_message(&self, action: JournalAction) -> &'static str {
        match self {
            Self::NotOwner(_) => "You can only change your own journal entries.",
            Self::ProfileMissing(_) => LOGIN_REQUIRED_MESSAGE,
            Self::InvalidDraft(_) => "Reveal every card before saving your reading.",
            Self::EntryNotFound(_) | Self::Store(_) => action.failure_message(),
        }
    }
}

impl Error for JournalError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::InvalidDraft(err) => Some(err),
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for JournalError {
    fn from(value: RepoError) -> Self {
        match value {
            RepoError::EntryNotFound(entry_id) => Self::EntryNotFound(entry_id),
            RepoError::ProfileNotFound(user_id) => Self::ProfileMissing(user_id),
            other => Self::Store(other),
        }
    }
}

impl From<DraftValidationError> for JournalError {
    fn from(value: DraftValidationError) -> Self {
        Self::InvalidDraft(value)
    }
}

/// Journal operation a failure is reported for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JournalAction {
    Add,
    Update,
    Delete,
    Load,
}

impl JournalAction {
    pub fn failure_message(self) -> &'static str {
        match self {
            Self::Add => "Failed to add journal entry.",
            Self::Update => "Failed to update journal entry.",
            Self::Delete => "Failed to delete journal entry.",
            Self::Load => "Failed to load journal entries.",
        }
    }
}

/// Result of `add_entry`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddEntryOutcome {
    /// Entry stored; `profile` reflects the incremented counter.
    Saved {
        entry: JournalEntry,
        profile: UserProfile,
    },
    /// Refused: the user is locked at the free quota.
    QuotaExceeded { profile: UserProfile },
}

impl AddEntryOutcome {
    pub fn profile(&self) -> &UserProfile {
        match self {
            Self::Saved { profile, .. } | Self::QuotaExceeded { profile } => profile,
        }
    }

    pub fn is_saved(&self) -> bool {
        matches!(self, Self::Saved { .. })
    }
}

/// Listing filter supplied by the presentation layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JournalFilter {
    /// Exact reading type match.
    pub reading_type: Option<ReadingType>,
    /// Inclusive lower bound, epoch milliseconds.
    pub start_ms: Option<i64>,
    /// Inclusive upper bound, epoch milliseconds.
    pub end_ms: Option<i64>,
}

/// One page of the filtered, newest-first journal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JournalPage {
    pub items: Vec<JournalEntry>,
    /// 1-based page number that was requested.
    pub page: u32,
    pub page_size: u32,
    /// Matches across all pages.
    pub total_items: u32,
    pub total_pages: u32,
    /// Profile after counter reconciliation.
    pub profile: UserProfile,
}

/// Journal access controller over an entry store.
pub struct JournalService<S: EntryStore, C: Clock = SystemClock> {
    store: S,
    clock: C,
}

impl<S: EntryStore> JournalService<S> {
    /// Creates a controller stamping entries with wall-clock time.
    pub fn new(store: S) -> Self {
        Self::with_clock(store, SystemClock)
    }
}

impl<S: EntryStore, C: Clock> JournalService<S, C> {
    pub fn with_clock(store: S, clock: C) -> Self {
        Self { store, clock }
    }

    /// Returns the profile, creating a free one on first sign-in.
    pub fn ensure_profile(
        &mut self,
        user_id: &str,
        email: &str,
    ) -> Result<UserProfile, JournalError> {
        if let Some(profile) = self.store.get_profile(user_id)? {
            return Ok(profile);
        }

        let profile = self
            .store
            .create_profile_if_absent(&UserProfile::new(user_id, email))?;
        info!(
            "event=profile_create module=journal status=ok user_id={} access={}",
            profile.user_id,
            profile.access_state().as_str()
        );
        Ok(profile)
    }

    /// Loads the caller's profile.
    pub fn profile(&self, user_id: &str) -> Result<UserProfile, JournalError> {
        self.store
            .get_profile(user_id)?
            .ok_or_else(|| JournalError::ProfileMissing(user_id.to_string()))
    }

    pub fn access_state(&self, user_id: &str) -> Result<AccessState, JournalError> {
        Ok(self.profile(user_id)?.access_state())
    }

    /// Persists a new entry if the caller is `Free` or `Unlimited`.
    ///
    /// The store re-checks the quota inside its transaction, so a concurrent
    /// add that wins the race still yields `QuotaExceeded` here.
    pub fn add_entry(
        &mut self,
        user_id: &str,
        draft: EntryDraft,
    ) -> Result<AddEntryOutcome, JournalError> {
        draft.validate()?;
        let profile = self.profile(user_id)?;
        if !profile.can_add_entry() {
            warn!(
                "event=entry_add module=journal status=refused reason=quota_exceeded user_id={} entry_count={}",
                user_id, profile.entry_count
            );
            return Ok(AddEntryOutcome::QuotaExceeded { profile });
        }

        let entry = JournalEntry::from_draft(draft, user_id, self.clock.now_epoch_ms());
        match self.store.append_entry(&entry, FREE_ENTRY_QUOTA)? {
            AppendOutcome::Appended(profile) => {
                info!(
                    "event=entry_add module=journal status=ok user_id={} entry_id={} type={:?} entry_count={} access={}",
                    user_id,
                    entry.id,
                    entry.reading_type,
                    profile.entry_count,
                    profile.access_state().as_str()
                );
                Ok(AddEntryOutcome::Saved { entry, profile })
            }
            AppendOutcome::QuotaExceeded(profile) => {
                warn!(
                    "event=entry_add module=journal status=refused reason=quota_raced user_id={} entry_count={}",
                    user_id, profile.entry_count
                );
                Ok(AddEntryOutcome::QuotaExceeded { profile })
            }
        }
    }

    /// Deletes the caller's entry and returns the profile after the decrement.
    pub fn delete_entry(
        &mut self,
        user_id: &str,
        entry_id: EntryId,
    ) -> Result<UserProfile, JournalError> {
        self.require_owned(user_id, entry_id)?;
        let profile = self.store.remove_entry(user_id, entry_id)?;
        info!(
            "event=entry_delete module=journal status=ok user_id={} entry_id={} entry_count={} access={}",
            user_id,
            entry_id,
            profile.entry_count,
            profile.access_state().as_str()
        );
        Ok(profile)
    }

    /// Replaces the notes of the caller's entry; counters are untouched.
    pub fn update_entry_notes(
        &mut self,
        user_id: &str,
        entry_id: EntryId,
        notes: impl Into<String>,
    ) -> Result<JournalEntry, JournalError> {
        let mut entry = self.require_owned(user_id, entry_id)?;
        let notes = notes.into();
        self.store
            .update_entry_notes(user_id, entry_id, notes.as_str())?;
        entry.notes = notes;
        info!(
            "event=entry_update module=journal status=ok user_id={} entry_id={}",
            user_id, entry_id
        );
        Ok(entry)
    }

    /// Grants unlimited access. Idempotent.
    pub fn confirm_payment(&mut self, user_id: &str) -> Result<UserProfile, JournalError> {
        let profile = self.store.grant_unlimited_access(user_id)?;
        info!(
            "event=payment_confirm module=journal status=ok user_id={} entry_count={}",
            user_id, profile.entry_count
        );
        Ok(profile)
    }

    /// Returns one page of the caller's entries, newest first.
    ///
    /// `page` is 1-based; `0` is treated as `1`. Pages past the end are empty.
    /// Reconciles `entry_count` with the stored entry count first.
    pub fn list_entries(
        &mut self,
        user_id: &str,
        filter: &JournalFilter,
        page: u32,
    ) -> Result<JournalPage, JournalError> {
        let profile = self.reconcile_entry_count(user_id)?;

        let page = page.max(1);
        let mut query = EntryListQuery {
            reading_type: filter.reading_type,
            start_ms: filter.start_ms,
            end_ms: filter.end_ms,
            ..EntryListQuery::default()
        };
        let total_items = self.store.count_entries(user_id, &query)?;
        let total_pages = total_items.div_ceil(JOURNAL_PAGE_SIZE);

        query.limit = Some(JOURNAL_PAGE_SIZE);
        query.offset = (page - 1).saturating_mul(JOURNAL_PAGE_SIZE);
        let items = self.store.list_entries(user_id, &query)?;

        Ok(JournalPage {
            items,
            page,
            page_size: JOURNAL_PAGE_SIZE,
            total_items,
            total_pages,
            profile,
        })
    }

    /// Loads one of the caller's entries.
    pub fn get_entry(
        &self,
        user_id: &str,
        entry_id: EntryId,
    ) -> Result<JournalEntry, JournalError> {
        self.require_owned(user_id, entry_id)
    }

    /// Corrects `entry_count` when it drifted from the stored entries.
    pub fn reconcile_entry_count(&mut self, user_id: &str) -> Result<UserProfile, JournalError> {
        let reconciliation = self.store.reconcile_entry_count(user_id)?;
        if reconciliation.drifted() {
            warn!(
                "event=entry_count_reconciled module=journal status=ok user_id={} stored={} observed={} access={}",
                user_id,
                reconciliation.previous_count,
                reconciliation.profile.entry_count,
                reconciliation.profile.access_state().as_str()
            );
        }
        Ok(reconciliation.profile)
    }

    /// Consumes the controller and returns the store.
    pub fn into_store(self) -> S {
        self.store
    }

    fn require_owned(&self, user_id: &str, entry_id: EntryId) -> Result<JournalEntry, JournalError> {
        let entry = self
            .store
            .get_entry(entry_id)?
            .ok_or(JournalError::EntryNotFound(entry_id))?;
        if !entry.is_owned_by(user_id) {
            warn!(
                "event=entry_access module=journal status=refused reason=not_owner user_id={} entry_id={}",
                user_id, entry_id
            );
            return Err(JournalError::NotOwner(entry_id));
        }
        Ok(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::{JournalAction, JournalError};
    use crate::model::journal::DraftValidationError;
    use uuid::Uuid;

    #[test]
    fn user_message_prefers_specific_copy_over_action_fallback() {
        let not_owner = JournalError::NotOwner(Uuid::new_v4());
        assert_eq!(
            not_owner.user_message(JournalAction::Delete),
            "You can only change your own journal entries."
        );

        let missing = JournalError::EntryNotFound(Uuid::new_v4());
        assert_eq!(
            missing.user_message(JournalAction::Update),
            "Failed to update journal entry."
        );
        assert_eq!(
            JournalError::InvalidDraft(DraftValidationError::NoCards)
                .user_message(JournalAction::Add),
            "Reveal every card before saving your reading."
        );
    }
}
