use pocket_tarot_core::catalog;
use pocket_tarot_core::spread::draw_slot;
use pocket_tarot_core::{ReadingType, Spread, SpreadError, SpreadKind};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::collections::HashSet;

#[test]
fn spreads_never_repeat_a_card_name() {
    let mut rng = StdRng::seed_from_u64(7);
    for kind in [SpreadKind::Single, SpreadKind::ThreeCard, SpreadKind::FiveCard] {
        for _ in 0..500 {
            let mut spread = Spread::new(kind);
            spread.draw_all(&mut rng).unwrap();
            let names: HashSet<&str> = spread
                .slots()
                .iter()
                .flatten()
                .map(|drawn| drawn.card.name)
                .collect();
            assert_eq!(names.len(), kind.size());
        }
    }
}

#[test]
fn orientation_is_roughly_fair() {
    let mut rng = StdRng::seed_from_u64(2024);
    let trials = 20_000;
    let reversed = (0..trials)
        .filter(|_| draw_slot([], &mut rng).unwrap().is_reversed)
        .count();
    let ratio = reversed as f64 / trials as f64;
    assert!((0.47..=0.53).contains(&ratio), "reversed ratio {ratio}");
}

#[test]
fn every_catalog_card_can_be_drawn() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut seen = HashSet::new();
    for _ in 0..5_000 {
        seen.insert(draw_slot([], &mut rng).unwrap().card.name);
    }
    assert_eq!(seen.len(), catalog::len());
}

#[test]
fn full_deck_cannot_be_drawn_from() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut drawn = Vec::new();
    for _ in 0..catalog::len() {
        let card = draw_slot(drawn.iter(), &mut rng).unwrap();
        drawn.push(card);
    }
    assert_eq!(
        draw_slot(drawn.iter(), &mut rng).unwrap_err(),
        SpreadError::DeckExhausted
    );
}

#[test]
fn completed_spread_snapshot_matches_drawn_cards() {
    let mut rng = StdRng::seed_from_u64(11);
    let mut spread = Spread::new(SpreadKind::FiveCard);
    assert!(matches!(
        spread.to_draft(""),
        Err(SpreadError::Incomplete { revealed: 0, size: 5 })
    ));

    spread.deal_face_down(&mut rng).unwrap();
    assert_eq!(spread.revealed_count(), 0);
    let dealt: Vec<&str> = spread
        .slots()
        .iter()
        .flatten()
        .map(|drawn| drawn.card.name)
        .collect();

    spread.draw_all(&mut rng).unwrap();
    let draft = spread.to_draft("Pentacles everywhere").unwrap();
    assert_eq!(draft.reading_type, ReadingType::FiveCard);
    assert_eq!(draft.notes, "Pentacles everywhere");
    assert_eq!(draft.cards.len(), 5);

    for (entry_card, (slot, name)) in draft
        .cards
        .iter()
        .zip(spread.slots().iter().flatten().zip(dealt))
    {
        assert_eq!(slot.card.name, name);
        assert_eq!(entry_card.title, slot.title());
        assert_eq!(entry_card.image, slot.card.image);
        assert_eq!(entry_card.description.as_deref(), Some(slot.meaning()));
        if slot.is_reversed {
            assert_eq!(entry_card.title, format!("{name} Reversed"));
            assert_eq!(slot.meaning(), slot.card.reversed_description);
        }
    }
}

#[test]
fn redrawing_a_revealed_slot_keeps_the_card() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut spread = Spread::new(SpreadKind::ThreeCard);
    let first = *spread.draw(1, &mut rng).unwrap();
    spread.draw(0, &mut rng).unwrap();
    let again = *spread.draw(1, &mut rng).unwrap();

    assert_eq!(first, again);
    assert_eq!(spread.active_index(), Some(1));
    assert_eq!(
        spread.draw(3, &mut rng).unwrap_err(),
        SpreadError::SlotOutOfRange { index: 3, size: 3 }
    );

    spread.reset();
    assert_eq!(spread.revealed_count(), 0);
    assert!(spread.active().is_none());
}
