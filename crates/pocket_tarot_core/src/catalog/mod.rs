//! Static tarot card catalog.
//!
//! # Responsibility
//! - Expose the fixed 78-card deck to the spread engine.
//!
//! # Invariants
//! - Card names are unique.
//! - The catalog is immutable and fixed at build time.

mod deck;

use crate::model::card::TarotCard;
use deck::TAROT_DECK;

/// Returns every card in deck order (major arcana first).
pub fn cards() -> &'static [TarotCard] {
    &TAROT_DECK
}

/// Number of cards in the catalog.
pub fn len() -> usize {
    TAROT_DECK.len()
}

/// Looks up one card by exact name, case-insensitively.
pub fn find(name: &str) -> Option<&'static TarotCard> {
    let wanted = name.trim();
    TAROT_DECK
        .iter()
        .find(|card| card.name.eq_ignore_ascii_case(wanted))
}

#[cfg(test)]
mod tests {
    use super::{cards, find, len};
    use std::collections::HashSet;

    #[test]
    fn catalog_holds_full_deck_with_unique_names() {
        assert_eq!(len(), 78);
        let names: HashSet<&str> = cards().iter().map(|card| card.name).collect();
        assert_eq!(names.len(), 78);
    }

    #[test]
    fn every_card_has_both_meanings_and_an_image() {
        for card in cards() {
            assert!(!card.description.is_empty(), "{}", card.name);
            assert!(!card.reversed_description.is_empty(), "{}", card.name);
            assert!(card.image.starts_with("/assets/images/"), "{}", card.name);
        }
    }

    #[test]
    fn find_matches_case_insensitively() {
        let card = find("the high priestess").expect("card should exist");
        assert_eq!(card.name, "The High Priestess");
        assert!(find("The Joker").is_none());
    }
}
