//! Tarot card model.
//!
//! # Responsibility
//! - Define the immutable catalog card and the per-session drawn card.
//! - Resolve orientation-dependent title and meaning text.
//!
//! # Invariants
//! - `TarotCard` values are static and never mutated.
//! - A `DrawnCard` only lives for one spread session unless snapshotted into
//!   a journal entry.

use crate::model::journal::EntryCard;

/// One card of the static deck.
#[derive(Debug, PartialEq, Eq)]
pub struct TarotCard {
    /// Unique display name, e.g. `The Fool`.
    pub name: &'static str,
    /// Image asset reference.
    pub image: &'static str,
    /// Upright meaning.
    pub description: &'static str,
    /// Reversed meaning.
    pub reversed_description: &'static str,
}

/// A card drawn into one spread slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawnCard {
    /// Catalog card backing this draw.
    pub card: &'static TarotCard,
    /// Orientation flag, decided by an independent fair coin flip.
    pub is_reversed: bool,
    /// Whether the card face is shown. Face-down cards show the card back.
    pub revealed: bool,
}

impl DrawnCard {
    /// Creates a face-down drawn card.
    pub fn face_down(card: &'static TarotCard, is_reversed: bool) -> Self {
        Self {
            card,
            is_reversed,
            revealed: false,
        }
    }

    /// Flips the card face up.
    pub fn reveal(&mut self) {
        self.revealed = true;
    }

    /// Display title, suffixed with ` Reversed` for reversed cards.
    pub fn title(&self) -> String {
        if self.is_reversed {
            format!("{} Reversed", self.card.name)
        } else {
            self.card.name.to_string()
        }
    }

    /// Meaning text for the drawn orientation.
    pub fn meaning(&self) -> &'static str {
        if self.is_reversed {
            self.card.reversed_description
        } else {
            self.card.description
        }
    }

    /// Snapshots this card into journal-entry form.
    pub fn to_entry_card(&self) -> EntryCard {
        EntryCard {
            image: self.card.image.to_string(),
            title: self.title(),
            description: Some(self.meaning().to_string()),
        }
    }
}
