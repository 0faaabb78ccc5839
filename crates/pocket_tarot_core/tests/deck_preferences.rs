use pocket_tarot_core::db::open_db_in_memory;
use pocket_tarot_core::{CardBack, DeckError, DeckService, SqlitePreferenceRepository};

#[test]
fn card_back_defaults_to_classic() {
    let conn = open_db_in_memory().unwrap();
    let deck = DeckService::new(SqlitePreferenceRepository::try_new(&conn).unwrap());

    assert_eq!(deck.card_back().unwrap(), CardBack::Classic);
    assert_eq!(
        deck.available_backs().unwrap(),
        vec![CardBack::Classic, CardBack::Alternate]
    );
}

#[test]
fn selection_persists_across_service_instances() {
    let conn = open_db_in_memory().unwrap();
    {
        let deck = DeckService::new(SqlitePreferenceRepository::try_new(&conn).unwrap());
        deck.set_card_back(CardBack::Alternate).unwrap();
    }

    let deck = DeckService::new(SqlitePreferenceRepository::try_new(&conn).unwrap());
    let back = deck.card_back().unwrap();
    assert_eq!(back, CardBack::Alternate);
    assert_eq!(back.image(), "/assets/images/back-two.png");
}

#[test]
fn custom_image_is_selected_and_cleared_back_to_classic() {
    let conn = open_db_in_memory().unwrap();
    let deck = DeckService::new(SqlitePreferenceRepository::try_new(&conn).unwrap());

    let custom = deck.set_custom_image("  file:///backs/stars.png ").unwrap();
    assert_eq!(custom, CardBack::Custom("file:///backs/stars.png".to_string()));
    assert_eq!(custom.image(), "file:///backs/stars.png");
    assert_eq!(deck.available_backs().unwrap().len(), 3);

    assert_eq!(deck.clear_custom_image().unwrap(), CardBack::Classic);
    assert_eq!(deck.custom_image().unwrap(), None);
}

#[test]
fn clearing_unselected_custom_image_keeps_selection() {
    let conn = open_db_in_memory().unwrap();
    let deck = DeckService::new(SqlitePreferenceRepository::try_new(&conn).unwrap());
    deck.set_custom_image("file:///backs/stars.png").unwrap();
    deck.set_card_back(CardBack::Alternate).unwrap();

    assert_eq!(deck.clear_custom_image().unwrap(), CardBack::Alternate);
}

#[test]
fn invalid_selections_are_rejected() {
    let conn = open_db_in_memory().unwrap();
    let deck = DeckService::new(SqlitePreferenceRepository::try_new(&conn).unwrap());

    assert!(matches!(
        deck.set_custom_image("   "),
        Err(DeckError::EmptyCustomImage)
    ));
    assert!(matches!(
        CardBack::parse_builtin("sparkly"),
        Err(DeckError::UnknownCardBack(_))
    ));
    assert_eq!(CardBack::parse_builtin(" Classic ").unwrap(), CardBack::Classic);
    assert_eq!(deck.card_back().unwrap(), CardBack::Classic);
}

#[test]
fn unreadable_stored_value_falls_back_to_classic() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO preferences (key, value) VALUES ('deck.card_back', 'holographic');",
        [],
    )
    .unwrap();
    let deck = DeckService::new(SqlitePreferenceRepository::try_new(&conn).unwrap());

    assert_eq!(deck.card_back().unwrap(), CardBack::Classic);
}
