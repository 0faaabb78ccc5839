use pocket_tarot_core::db::{open_db, open_db_in_memory};
use pocket_tarot_core::{
    AccessState, AddEntryOutcome, EntryDraft, EntryId, EntryStore, JournalError, JournalService,
    PaymentOutcome, PaymentService, ReadingType, Spread, SpreadKind, SqliteEntryStore,
    UserProfile,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use rusqlite::{params, Connection};
use std::sync::{Arc, Barrier};
use std::thread;

const USER: &str = "user-seer";
const OTHER_USER: &str = "user-other";

fn draft(kind: SpreadKind, seed: u64) -> EntryDraft {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut spread = Spread::new(kind);
    spread.draw_all(&mut rng).unwrap();
    spread.to_draft(format!("reading {seed}")).unwrap()
}

fn saved_id(outcome: AddEntryOutcome) -> EntryId {
    match outcome {
        AddEntryOutcome::Saved { entry, .. } => entry.id,
        AddEntryOutcome::QuotaExceeded { profile } => {
            panic!("add unexpectedly refused at count {}", profile.entry_count)
        }
    }
}

fn stored_entry_count(conn: &Connection, user_id: &str) -> i64 {
    conn.query_row(
        "SELECT COUNT(*) FROM journal_entries WHERE user_id = ?1;",
        [user_id],
        |row| row.get(0),
    )
    .unwrap()
}

#[test]
fn first_sign_in_creates_free_profile_once() {
    let mut conn = open_db_in_memory().unwrap();
    let store = SqliteEntryStore::try_new(&mut conn).unwrap();
    let mut journal = JournalService::new(store);

    let created = journal.ensure_profile(USER, "seer@example.com").unwrap();
    assert_eq!(created, UserProfile::new(USER, "seer@example.com"));
    assert_eq!(created.access_state(), AccessState::Free);

    journal.add_entry(USER, draft(SpreadKind::Single, 1)).unwrap();
    let again = journal.ensure_profile(USER, "seer@example.com").unwrap();
    assert_eq!(again.entry_count, 1);
}

#[test]
fn quota_locks_after_three_entries_and_refuses_fourth() {
    let mut conn = open_db_in_memory().unwrap();
    {
        let store = SqliteEntryStore::try_new(&mut conn).unwrap();
        let mut journal = JournalService::new(store);
        journal.ensure_profile(USER, "seer@example.com").unwrap();

        for seed in 0..3 {
            let outcome = journal
                .add_entry(USER, draft(SpreadKind::ThreeCard, seed))
                .unwrap();
            assert!(outcome.is_saved());
            assert_eq!(outcome.profile().entry_count, seed as u32 + 1);
        }
        assert_eq!(journal.access_state(USER).unwrap(), AccessState::Locked);

        let refused = journal
            .add_entry(USER, draft(SpreadKind::ThreeCard, 99))
            .unwrap();
        match refused {
            AddEntryOutcome::QuotaExceeded { profile } => assert_eq!(profile.entry_count, 3),
            other => panic!("expected refusal, got {other:?}"),
        }
    }
    assert_eq!(stored_entry_count(&conn, USER), 3);
}

#[test]
fn delete_from_locked_returns_to_free_and_allows_add() {
    let mut conn = open_db_in_memory().unwrap();
    let store = SqliteEntryStore::try_new(&mut conn).unwrap();
    let mut journal = JournalService::new(store);
    journal.ensure_profile(USER, "").unwrap();

    let ids: Vec<EntryId> = (0..3)
        .map(|seed| saved_id(journal.add_entry(USER, draft(SpreadKind::Single, seed)).unwrap()))
        .collect();
    assert_eq!(journal.access_state(USER).unwrap(), AccessState::Locked);
    assert!(!journal
        .add_entry(USER, draft(SpreadKind::Single, 10))
        .unwrap()
        .is_saved());

    let after_delete = journal.delete_entry(USER, ids[0]).unwrap();
    assert_eq!(after_delete.entry_count, 2);
    assert_eq!(after_delete.access_state(), AccessState::Free);

    let readd = journal
        .add_entry(USER, draft(SpreadKind::Single, 11))
        .unwrap();
    assert!(readd.is_saved());
    assert_eq!(readd.profile().entry_count, 3);
    assert_eq!(readd.profile().access_state(), AccessState::Locked);
}

#[test]
fn confirm_payment_unlocks_regardless_of_count_and_is_idempotent() {
    let mut conn = open_db_in_memory().unwrap();
    let store = SqliteEntryStore::try_new(&mut conn).unwrap();
    let mut journal = JournalService::new(store);
    journal.ensure_profile(USER, "").unwrap();
    for seed in 0..3 {
        journal.add_entry(USER, draft(SpreadKind::FiveCard, seed)).unwrap();
    }
    assert_eq!(journal.access_state(USER).unwrap(), AccessState::Locked);

    let first = journal.confirm_payment(USER).unwrap();
    let second = journal.confirm_payment(USER).unwrap();
    assert_eq!(first, second);
    assert_eq!(first.access_state(), AccessState::Unlimited);

    for seed in 10..14 {
        assert!(journal
            .add_entry(USER, draft(SpreadKind::FiveCard, seed))
            .unwrap()
            .is_saved());
    }
    let profile = journal.profile(USER).unwrap();
    assert_eq!(profile.entry_count, 7);
    assert_eq!(profile.access_state(), AccessState::Unlimited);
}

#[test]
fn update_notes_changes_only_notes() {
    let mut conn = open_db_in_memory().unwrap();
    let store = SqliteEntryStore::try_new(&mut conn).unwrap();
    let mut journal = JournalService::new(store);
    journal.ensure_profile(USER, "").unwrap();
    let ids: Vec<EntryId> = (0..3)
        .map(|seed| saved_id(journal.add_entry(USER, draft(SpreadKind::ThreeCard, seed)).unwrap()))
        .collect();
    let before = journal.profile(USER).unwrap();
    let original = journal.get_entry(USER, ids[1]).unwrap();

    let updated = journal
        .update_entry_notes(USER, ids[1], "The Tower again.")
        .unwrap();
    assert_eq!(updated.notes, "The Tower again.");
    assert_eq!(updated.cards, original.cards);
    assert_eq!(updated.timestamp, original.timestamp);

    let reloaded = journal.get_entry(USER, ids[1]).unwrap();
    assert_eq!(reloaded.notes, "The Tower again.");
    assert_eq!(journal.profile(USER).unwrap(), before);
    assert_eq!(before.access_state(), AccessState::Locked);
}

#[test]
fn other_users_cannot_touch_an_entry() {
    let mut conn = open_db_in_memory().unwrap();
    let store = SqliteEntryStore::try_new(&mut conn).unwrap();
    let mut journal = JournalService::new(store);
    journal.ensure_profile(USER, "").unwrap();
    journal.ensure_profile(OTHER_USER, "").unwrap();
    let entry_id = saved_id(journal.add_entry(USER, draft(SpreadKind::Single, 4)).unwrap());

    let delete_err = journal.delete_entry(OTHER_USER, entry_id).unwrap_err();
    assert!(matches!(delete_err, JournalError::NotOwner(id) if id == entry_id));
    let update_err = journal
        .update_entry_notes(OTHER_USER, entry_id, "mine now")
        .unwrap_err();
    assert!(matches!(update_err, JournalError::NotOwner(_)));
    assert!(matches!(
        journal.get_entry(OTHER_USER, entry_id),
        Err(JournalError::NotOwner(_))
    ));

    assert_eq!(journal.profile(USER).unwrap().entry_count, 1);
    assert_eq!(journal.profile(OTHER_USER).unwrap().entry_count, 0);
}

#[test]
fn missing_entry_and_missing_profile_are_reported() {
    let mut conn = open_db_in_memory().unwrap();
    let store = SqliteEntryStore::try_new(&mut conn).unwrap();
    let mut journal = JournalService::new(store);

    let err = journal
        .add_entry(USER, draft(SpreadKind::Single, 1))
        .unwrap_err();
    assert!(matches!(err, JournalError::ProfileMissing(ref user) if user == USER));

    journal.ensure_profile(USER, "").unwrap();
    let unknown = uuid::Uuid::new_v4();
    let err = journal.delete_entry(USER, unknown).unwrap_err();
    assert!(matches!(err, JournalError::EntryNotFound(id) if id == unknown));
}

#[test]
fn empty_draft_is_rejected_without_mutation() {
    let mut conn = open_db_in_memory().unwrap();
    let store = SqliteEntryStore::try_new(&mut conn).unwrap();
    let mut journal = JournalService::new(store);
    journal.ensure_profile(USER, "").unwrap();

    let empty = EntryDraft {
        reading_type: ReadingType::CardOfDay,
        cards: Vec::new(),
        notes: String::new(),
    };
    assert!(matches!(
        journal.add_entry(USER, empty),
        Err(JournalError::InvalidDraft(_))
    ));
    assert_eq!(journal.profile(USER).unwrap().entry_count, 0);
}

#[test]
fn full_quota_scenario_from_new_user() {
    let mut conn = open_db_in_memory().unwrap();
    let store = SqliteEntryStore::try_new(&mut conn).unwrap();
    let mut journal = JournalService::new(store);

    let profile = journal.ensure_profile(USER, "seer@example.com").unwrap();
    assert_eq!((profile.entry_count, profile.has_unlimited_access), (0, false));

    let mut ids = Vec::new();
    for seed in 0..3 {
        ids.push(saved_id(
            journal.add_entry(USER, draft(SpreadKind::Single, seed)).unwrap(),
        ));
    }
    assert_eq!(journal.access_state(USER).unwrap(), AccessState::Locked);
    assert!(!journal
        .add_entry(USER, draft(SpreadKind::Single, 3))
        .unwrap()
        .is_saved());

    let profile = journal.delete_entry(USER, ids[2]).unwrap();
    assert_eq!(profile.access_state(), AccessState::Free);
    assert_eq!(profile.entry_count, 2);

    let outcome = journal.add_entry(USER, draft(SpreadKind::Single, 4)).unwrap();
    assert!(outcome.is_saved());
    assert_eq!(outcome.profile().entry_count, 3);
    assert_eq!(outcome.profile().access_state(), AccessState::Locked);
}

#[test]
fn revoked_unlimited_user_above_quota_is_locked() {
    let mut conn = open_db_in_memory().unwrap();
    {
        let store = SqliteEntryStore::try_new(&mut conn).unwrap();
        let mut journal = JournalService::new(store);
        journal.ensure_profile(USER, "").unwrap();
        journal.confirm_payment(USER).unwrap();
        for seed in 0..5 {
            journal.add_entry(USER, draft(SpreadKind::ThreeCard, seed)).unwrap();
        }
    }
    conn.execute(
        "UPDATE users SET has_unlimited_access = 0 WHERE user_id = ?1;",
        params![USER],
    )
    .unwrap();

    let store = SqliteEntryStore::try_new(&mut conn).unwrap();
    let mut journal = JournalService::new(store);
    let profile = journal.profile(USER).unwrap();
    assert_eq!(profile.entry_count, 5);
    assert_eq!(profile.access_state(), AccessState::Locked);
    assert!(!journal
        .add_entry(USER, draft(SpreadKind::ThreeCard, 42))
        .unwrap()
        .is_saved());
}

#[test]
fn store_guard_refuses_append_when_counter_is_already_at_quota() {
    let mut conn = open_db_in_memory().unwrap();
    SqliteEntryStore::try_new(&mut conn)
        .unwrap()
        .create_profile_if_absent(&UserProfile::new(USER, ""))
        .unwrap();
    conn.execute(
        "UPDATE users SET entry_count = 3 WHERE user_id = ?1;",
        params![USER],
    )
    .unwrap();

    let mut store = SqliteEntryStore::try_new(&mut conn).unwrap();

    // Bypasses the controller pre-check, as a racing add would.
    let entry = pocket_tarot_core::JournalEntry::from_draft(draft(SpreadKind::Single, 1), USER, 1);
    let outcome = store.append_entry(&entry, 3).unwrap();
    assert!(matches!(
        outcome,
        pocket_tarot_core::AppendOutcome::QuotaExceeded(ref profile) if profile.entry_count == 3
    ));
    assert!(store.get_entry(entry.id).unwrap().is_none());
}

#[test]
fn concurrent_adds_on_shared_file_never_exceed_quota() {
    const WRITERS: usize = 8;
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("journal.sqlite3");
    {
        let mut conn = open_db(&db_path).unwrap();
        let store = SqliteEntryStore::try_new(&mut conn).unwrap();
        let mut journal = JournalService::new(store);
        journal.ensure_profile(USER, "").unwrap();
        for seed in 0..2 {
            saved_id(journal.add_entry(USER, draft(SpreadKind::Single, seed)).unwrap());
        }
    }

    let barrier = Arc::new(Barrier::new(WRITERS));
    let writers: Vec<_> = (0..WRITERS)
        .map(|index| {
            let barrier = Arc::clone(&barrier);
            let db_path = db_path.clone();
            thread::spawn(move || {
                let mut conn = open_db(&db_path).unwrap();
                let store = SqliteEntryStore::try_new(&mut conn).unwrap();
                let mut journal = JournalService::new(store);
                let reading = draft(SpreadKind::ThreeCard, 100 + index as u64);
                barrier.wait();
                journal.add_entry(USER, reading).unwrap().is_saved()
            })
        })
        .collect();
    let saved = writers
        .into_iter()
        .map(|writer| writer.join().unwrap())
        .filter(|saved| *saved)
        .count();

    assert_eq!(saved, 1);
    let conn = open_db(&db_path).unwrap();
    assert_eq!(stored_entry_count(&conn, USER), 3);
    let counter: i64 = conn
        .query_row(
            "SELECT entry_count FROM users WHERE user_id = ?1;",
            params![USER],
            |row| row.get(0),
        )
        .unwrap();
    assert_eq!(counter, 3);
}

#[test]
fn payment_callbacks_only_unlock_on_success() {
    let mut conn = open_db_in_memory().unwrap();
    let store = SqliteEntryStore::try_new(&mut conn).unwrap();
    let mut journal = JournalService::new(store);
    journal.ensure_profile(USER, "").unwrap();
    for seed in 0..3 {
        journal.add_entry(USER, draft(SpreadKind::Single, seed)).unwrap();
    }
    let mut payments = PaymentService::new(journal);

    let failed = payments
        .handle(
            USER,
            PaymentOutcome::Failed {
                reason: "card declined".to_string(),
            },
        )
        .unwrap();
    assert!(!failed.unlocked);
    assert!(failed.message.contains("card declined"));
    let cancelled = payments.handle(USER, PaymentOutcome::Cancelled).unwrap();
    assert!(!cancelled.unlocked);
    assert_eq!(
        payments.journal().access_state(USER).unwrap(),
        AccessState::Locked
    );

    let receipt = payments
        .handle(
            USER,
            PaymentOutcome::Succeeded {
                reference: "order-1".to_string(),
            },
        )
        .unwrap();
    assert!(receipt.unlocked);
    assert_eq!(
        receipt.profile.map(|profile| profile.access_state()),
        Some(AccessState::Unlimited)
    );

    let mut journal = payments.into_journal();
    assert!(journal
        .add_entry(USER, draft(SpreadKind::Single, 8))
        .unwrap()
        .is_saved());
}

#[test]
fn payment_for_unknown_user_reports_access_update_failure() {
    let mut conn = open_db_in_memory().unwrap();
    let store = SqliteEntryStore::try_new(&mut conn).unwrap();
    let mut payments = PaymentService::new(JournalService::new(store));

    let err = payments
        .handle(
            "ghost",
            PaymentOutcome::Succeeded {
                reference: "order-2".to_string(),
            },
        )
        .unwrap_err();
    assert_eq!(err.reference, "order-2");
    assert!(err.user_message().contains("Payment was successful"));
    assert!(matches!(err.source, JournalError::ProfileMissing(_)));
}
