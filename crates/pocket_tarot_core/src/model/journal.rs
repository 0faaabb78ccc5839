//! Journal entry model.
//!
//! # Responsibility
//! - Define persisted journal entries and the drafts submitted by callers.
//! - Own the stable string labels used for reading types.
//!
//! # Invariants
//! - `EntryId` is assigned by the entry store and never reused.
//! - `timestamp` is Unix epoch milliseconds.
//! - A draft carries at least one card.

use crate::model::profile::UserId;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a journal entry.
pub type EntryId = Uuid;

const CARD_OF_DAY_LABEL: &str = "Card of the Day";
const THREE_CARD_LABEL: &str = "Three Card Reading";
const FIVE_CARD_LABEL: &str = "Five Card Reading";

/// Kind of reading a journal entry records.
///
/// Serialized with the display labels so stored documents stay readable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReadingType {
    #[serde(rename = "Card of the Day")]
    CardOfDay,
    #[serde(rename = "Three Card Reading")]
    ThreeCard,
    #[serde(rename = "Five Card Reading")]
    FiveCard,
}

impl ReadingType {
    /// All reading types in display order.
    pub const ALL: [ReadingType; 3] = [Self::CardOfDay, Self::ThreeCard, Self::FiveCard];

    /// Stable display/storage label.
    pub fn label(self) -> &'static str {
        match self {
            Self::CardOfDay => CARD_OF_DAY_LABEL,
            Self::ThreeCard => THREE_CARD_LABEL,
            Self::FiveCard => FIVE_CARD_LABEL,
        }
    }

    /// Parses a display label or a short alias (`day|single`, `three`, `five`).
    pub fn parse(value: &str) -> Option<Self> {
        let trimmed = value.trim();
        match trimmed {
            CARD_OF_DAY_LABEL => return Some(Self::CardOfDay),
            THREE_CARD_LABEL => return Some(Self::ThreeCard),
            FIVE_CARD_LABEL => return Some(Self::FiveCard),
            _ => {}
        }

        match trimmed.to_ascii_lowercase().as_str() {
            "day" | "single" | "card-of-the-day" => Some(Self::CardOfDay),
            "three" | "three-card" => Some(Self::ThreeCard),
            "five" | "five-card" => Some(Self::FiveCard),
            _ => None,
        }
    }

    /// Number of cards a reading of this type holds.
    pub fn card_count(self) -> usize {
        match self {
            Self::CardOfDay => 1,
            Self::ThreeCard => 3,
            Self::FiveCard => 5,
        }
    }
}

impl Display for ReadingType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Card snapshot stored inside a journal entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntryCard {
    /// Image asset reference copied from the catalog.
    pub image: String,
    /// Display title, including the ` Reversed` suffix when applicable.
    pub title: String,
    /// Orientation-appropriate meaning.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Persisted journal entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JournalEntry {
    pub id: EntryId,
    #[serde(rename = "type")]
    pub reading_type: ReadingType,
    pub user_id: UserId,
    /// Creation time in epoch milliseconds.
    pub timestamp: i64,
    pub cards: Vec<EntryCard>,
    pub notes: String,
}

impl JournalEntry {
    /// Builds an entry from a draft, assigning a fresh id.
    pub fn from_draft(draft: EntryDraft, user_id: impl Into<UserId>, timestamp: i64) -> Self {
        Self {
            id: Uuid::new_v4(),
            reading_type: draft.reading_type,
            user_id: user_id.into(),
            timestamp,
            cards: draft.cards,
            notes: draft.notes,
        }
    }

    /// Returns whether `user_id` owns this entry.
    pub fn is_owned_by(&self, user_id: &str) -> bool {
        self.user_id == user_id
    }
}

/// Caller-submitted content for a new journal entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDraft {
    pub reading_type: ReadingType,
    pub cards: Vec<EntryCard>,
    pub notes: String,
}

impl EntryDraft {
    /// Checks draft shape before any store mutation.
    pub fn validate(&self) -> Result<(), DraftValidationError> {
        if self.cards.is_empty() {
            return Err(DraftValidationError::NoCards);
        }
        if self
            .cards
            .iter()
            .any(|card| card.title.trim().is_empty() || card.image.trim().is_empty())
        {
            return Err(DraftValidationError::BlankCard);
        }
        Ok(())
    }
}

/// Draft shape violations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DraftValidationError {
    NoCards,
    BlankCard,
}

impl Display for DraftValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoCards => write!(f, "journal entry must contain at least one card"),
            Self::BlankCard => write!(f, "journal entry card requires an image and a title"),
        }
    }
}

impl Error for DraftValidationError {}
