//! Spread engine.
//!
//! # Responsibility
//! - Draw non-repeating cards from the catalog into spread slots.
//! - Track per-slot reveal state for one spread session.
//! - Snapshot a completed spread into a journal entry draft.
//!
//! # Invariants
//! - No two slots in one spread hold cards with the same name.
//! - Orientation is an independent fair coin flip per card.
//! - Drawing an already revealed slot never re-draws it.

use crate::catalog;
use crate::model::card::DrawnCard;
use crate::model::journal::{EntryDraft, ReadingType};
use rand::Rng;
use std::collections::HashSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Spread layouts offered to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpreadKind {
    Single,
    ThreeCard,
    FiveCard,
}

impl SpreadKind {
    /// Number of slots in this spread.
    pub fn size(self) -> usize {
        self.reading_type().card_count()
    }

    /// Journal reading type recorded when this spread is saved.
    pub fn reading_type(self) -> ReadingType {
        match self {
            Self::Single => ReadingType::CardOfDay,
            Self::ThreeCard => ReadingType::ThreeCard,
            Self::FiveCard => ReadingType::FiveCard,
        }
    }

    /// Parses the same aliases accepted by `ReadingType::parse`.
    pub fn parse(value: &str) -> Option<Self> {
        ReadingType::parse(value).map(Self::from)
    }
}

impl From<ReadingType> for SpreadKind {
    fn from(value: ReadingType) -> Self {
        match value {
            ReadingType::CardOfDay => Self::Single,
            ReadingType::ThreeCard => Self::ThreeCard,
            ReadingType::FiveCard => Self::FiveCard,
        }
    }
}

/// Spread engine errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpreadError {
    /// Slot index is outside the spread.
    SlotOutOfRange { index: usize, size: usize },
    /// Every catalog card is already drawn.
    DeckExhausted,
    /// Spread cannot be saved until every slot is revealed.
    Incomplete { revealed: usize, size: usize },
}

impl Display for SpreadError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::SlotOutOfRange { index, size } => {
                write!(f, "slot {index} is out of range for a spread of {size}")
            }
            Self::DeckExhausted => write!(f, "no undrawn cards left in the deck"),
            Self::Incomplete { revealed, size } => {
                write!(f, "spread incomplete: {revealed} of {size} cards revealed")
            }
        }
    }
}

impl Error for SpreadError {}

/// Draws one face-down card whose name is not among `existing`.
///
/// Samples uniformly from the catalog until an unused name comes up, then
/// flips an independent fair coin for orientation.
///
/// # Errors
/// - `DeckExhausted` when `existing` already covers the whole catalog.
pub fn draw_slot<'a, R>(
    existing: impl IntoIterator<Item = &'a DrawnCard>,
    rng: &mut R,
) -> Result<DrawnCard, SpreadError>
where
    R: Rng + ?Sized,
{
    let deck = catalog::cards();
    let taken: HashSet<&str> = existing.into_iter().map(|drawn| drawn.card.name).collect();
    if taken.len() >= deck.len() {
        return Err(SpreadError::DeckExhausted);
    }

    loop {
        let candidate = &deck[rng.gen_range(0..deck.len())];
        if !taken.contains(candidate.name) {
            let is_reversed = rng.gen_bool(0.5);
            return Ok(DrawnCard::face_down(candidate, is_reversed));
        }
    }
}

/// One spread session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spread {
    kind: SpreadKind,
    slots: Vec<Option<DrawnCard>>,
    active: Option<usize>,
}

impl Spread {
    /// Creates a spread with every slot undrawn (card back shown).
    pub fn new(kind: SpreadKind) -> Self {
        Self {
            kind,
            slots: vec![None; kind.size()],
            active: None,
        }
    }

    pub fn kind(&self) -> SpreadKind {
        self.kind
    }

    pub fn slots(&self) -> &[Option<DrawnCard>] {
        &self.slots
    }

    /// Slot most recently drawn or re-activated.
    pub fn active(&self) -> Option<&DrawnCard> {
        self.active
            .and_then(|index| self.slots.get(index))
            .and_then(Option::as_ref)
    }

    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    /// Draws and reveals one slot.
    ///
    /// A revealed slot is only re-activated. A face-down slot dealt by
    /// `deal_face_down` is flipped without re-drawing.
    pub fn draw<R: Rng + ?Sized>(
        &mut self,
        index: usize,
        rng: &mut R,
    ) -> Result<&DrawnCard, SpreadError> {
        let size = self.slots.len();
        if index >= size {
            return Err(SpreadError::SlotOutOfRange { index, size });
        }

        let drawn = match self.slots[index] {
            Some(mut existing) => {
                existing.reveal();
                existing
            }
            None => {
                let mut fresh = draw_slot(self.slots.iter().flatten(), rng)?;
                fresh.reveal();
                fresh
            }
        };
        self.active = Some(index);
        Ok(self.slots[index].insert(drawn))
    }

    /// Deals every undrawn slot face down.
    pub fn deal_face_down<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), SpreadError> {
        for index in 0..self.slots.len() {
            if self.slots[index].is_none() {
                let drawn = draw_slot(self.slots.iter().flatten(), rng)?;
                self.slots[index] = Some(drawn);
            }
        }
        Ok(())
    }

    /// Draws and reveals every slot in order.
    pub fn draw_all<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), SpreadError> {
        for index in 0..self.slots.len() {
            self.draw(index, rng)?;
        }
        Ok(())
    }

    /// Clears every slot back to undrawn.
    pub fn reset(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
        self.active = None;
    }

    pub fn revealed_count(&self) -> usize {
        self.slots
            .iter()
            .flatten()
            .filter(|drawn| drawn.revealed)
            .count()
    }

    /// Whether every slot is drawn and revealed.
    pub fn is_complete(&self) -> bool {
        self.revealed_count() == self.slots.len()
    }

    /// Snapshots a completed spread into a journal draft.
    pub fn to_draft(&self, notes: impl Into<String>) -> Result<EntryDraft, SpreadError> {
        if !self.is_complete() {
            return Err(SpreadError::Incomplete {
                revealed: self.revealed_count(),
                size: self.slots.len(),
            });
        }

        Ok(EntryDraft {
            reading_type: self.kind.reading_type(),
            cards: self
                .slots
                .iter()
                .flatten()
                .map(DrawnCard::to_entry_card)
                .collect(),
            notes: notes.into(),
        })
    }
}
