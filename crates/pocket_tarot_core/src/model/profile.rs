//! User profile and journal access state.
//!
//! # Responsibility
//! - Hold the per-user access flag and entry counter.
//! - Derive `AccessState` from `(has_unlimited_access, entry_count)`.
//!
//! # Invariants
//! - `has_unlimited_access == true` always yields `Unlimited`.
//! - Without unlimited access, `entry_count >= FREE_ENTRY_QUOTA` is `Locked`.
//! - State is derived on every read, never cached separately.

use serde::{Deserialize, Serialize};

/// Opaque user identifier issued by the identity provider.
pub type UserId = String;

/// Number of journal entries allowed without unlimited access.
pub const FREE_ENTRY_QUOTA: u32 = 3;

/// Journal access state for one user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessState {
    /// Below quota; new entries allowed.
    Free,
    /// Quota reached without unlimited access; new entries refused.
    Locked,
    /// Unlimited access purchased.
    Unlimited,
}

impl AccessState {
    /// Derives the state from the profile fields.
    pub fn derive(has_unlimited_access: bool, entry_count: u32) -> Self {
        if has_unlimited_access {
            Self::Unlimited
        } else if entry_count >= FREE_ENTRY_QUOTA {
            Self::Locked
        } else {
            Self::Free
        }
    }

    /// Whether a new entry may be persisted in this state.
    pub fn allows_new_entry(self) -> bool {
        !matches!(self, Self::Locked)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Free => "free",
            Self::Locked => "locked",
            Self::Unlimited => "unlimited",
        }
    }
}

/// Per-user profile document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub user_id: UserId,
    pub email: String,
    pub has_unlimited_access: bool,
    pub entry_count: u32,
}

impl UserProfile {
    /// Creates the first-sign-in profile: free tier, zero entries.
    pub fn new(user_id: impl Into<UserId>, email: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            email: email.into(),
            has_unlimited_access: false,
            entry_count: 0,
        }
    }

    pub fn access_state(&self) -> AccessState {
        AccessState::derive(self.has_unlimited_access, self.entry_count)
    }

    pub fn can_add_entry(&self) -> bool {
        self.access_state().allows_new_entry()
    }

    /// Free entries left before the quota locks further adds.
    ///
    /// Returns `None` for unlimited profiles.
    pub fn remaining_free_entries(&self) -> Option<u32> {
        if self.has_unlimited_access {
            None
        } else {
            Some(FREE_ENTRY_QUOTA.saturating_sub(self.entry_count))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AccessState, UserProfile, FREE_ENTRY_QUOTA};

    #[test]
    fn new_profile_starts_free_with_zero_entries() {
        let profile = UserProfile::new("user-1", "seer@example.com");
        assert_eq!(profile.entry_count, 0);
        assert_eq!(profile.access_state(), AccessState::Free);
        assert_eq!(profile.remaining_free_entries(), Some(FREE_ENTRY_QUOTA));
    }

    #[test]
    fn any_count_at_or_above_quota_without_unlimited_is_locked() {
        assert_eq!(AccessState::derive(false, 2), AccessState::Free);
        assert_eq!(AccessState::derive(false, 3), AccessState::Locked);
        assert_eq!(AccessState::derive(false, 5), AccessState::Locked);
        assert!(!AccessState::derive(false, 5).allows_new_entry());
    }

    #[test]
    fn unlimited_access_ignores_entry_count() {
        assert_eq!(AccessState::derive(true, 0), AccessState::Unlimited);
        assert_eq!(AccessState::derive(true, 40), AccessState::Unlimited);
        let mut profile = UserProfile::new("user-2", "");
        profile.has_unlimited_access = true;
        profile.entry_count = 12;
        assert!(profile.can_add_entry());
        assert_eq!(profile.remaining_free_entries(), None);
    }
}
