use flip7_core::game::session::Session;
use flip7_core::game::snapshot::SessionSnapshot;
use flip7_core::model::card::CardKind;
use flip7_core::model::history::DeckAction;

#[test]
fn round_trip_preserves_every_field() {
    let mut session = Session::new();
    assert!(session.play_card(CardKind::Freeze));
    assert!(session.draw_to_hand(CardKind::Seven));
    assert!(session.draw_to_hand(CardKind::Seven));
    session.set_sort_preference(false);

    let json = SessionSnapshot::to_json(&session).unwrap();
    let restored = SessionSnapshot::from_json(&json).restore();

    assert_eq!(restored.deck(), session.deck());
    assert_eq!(restored.hand().cards(), session.hand().cards());
    assert!(!restored.sort_preference());

    let restored_log: Vec<_> = restored.history().entries().copied().collect();
    let original_log: Vec<_> = session.history().entries().copied().collect();
    assert_eq!(restored_log, original_log);
}

#[test]
fn partial_deck_maps_treat_missing_kinds_as_exhausted() {
    let payload = r#"{
        "deck": { "7": 3, "x2": 1 },
        "hand": [],
        "sortByProbability": true,
        "history": []
    }"#;
    let session = SessionSnapshot::from_json(payload).restore();

    assert_eq!(session.deck().remaining(CardKind::Seven), 3);
    assert_eq!(session.deck().remaining(CardKind::TimesTwo), 1);
    assert_eq!(session.deck().remaining(CardKind::Twelve), 0);
    assert_eq!(session.total_remaining(), 4);
}

#[test]
fn unknown_deck_labels_invalidate_only_the_deck() {
    let payload = r#"{
        "deck": { "joker": 3 },
        "hand": ["7", "x2"],
        "sortByProbability": false,
        "history": []
    }"#;
    let session = SessionSnapshot::from_json(payload).restore();

    assert_eq!(session.total_remaining(), 94);
    assert_eq!(
        session.hand().cards(),
        &[CardKind::Seven, CardKind::TimesTwo]
    );
    assert!(!session.sort_preference());
}

#[test]
fn negative_deck_counts_invalidate_only_the_deck() {
    let payload = r#"{
        "deck": { "7": -2 },
        "hand": ["5"],
        "sortByProbability": true,
        "history": []
    }"#;
    let session = SessionSnapshot::from_json(payload).restore();

    assert_eq!(session.total_remaining(), 94);
    assert_eq!(session.hand().cards(), &[CardKind::Five]);
}

#[test]
fn unknown_hand_labels_invalidate_only_the_hand() {
    let payload = r#"{
        "deck": { "7": 3 },
        "hand": ["13"],
        "sortByProbability": true,
        "history": []
    }"#;
    let session = SessionSnapshot::from_json(payload).restore();

    assert_eq!(session.total_remaining(), 3);
    assert!(session.hand().is_empty());
}

#[test]
fn unknown_history_actions_invalidate_only_the_history() {
    let payload = r#"{
        "deck": { "7": 3 },
        "hand": ["5"],
        "sortByProbability": true,
        "history": [ { "action": "discarded", "card": "7" } ]
    }"#;
    let session = SessionSnapshot::from_json(payload).restore();

    assert!(session.history().is_empty());
    assert_eq!(session.hand().cards(), &[CardKind::Five]);
    assert_eq!(session.total_remaining(), 3);
}

#[test]
fn history_order_survives_the_trip() {
    let payload = r#"{
        "deck": { "7": 3 },
        "hand": ["7"],
        "sortByProbability": true,
        "history": [
            { "action": "drawn", "card": "7" },
            { "action": "played", "card": "freeze" }
        ]
    }"#;
    let session = SessionSnapshot::from_json(payload).restore();

    let latest = session.history().latest().copied().unwrap();
    assert_eq!(latest.action, DeckAction::Drawn);
    assert_eq!(latest.card, CardKind::Seven);
    assert_eq!(session.history().len(), 2);

    // Undo pops the drawn seven, not the older played freeze.
    let mut session = session;
    assert!(session.undo());
    assert_eq!(session.deck().remaining(CardKind::Seven), 4);
    assert!(session.hand().is_empty());
}

#[test]
fn non_boolean_sort_preferences_fall_back_to_true() {
    let payload = r#"{
        "deck": { "7": 3 },
        "hand": [],
        "sortByProbability": "yes",
        "history": []
    }"#;
    let session = SessionSnapshot::from_json(payload).restore();

    assert!(session.sort_preference());
    assert_eq!(session.total_remaining(), 3);
}

#[test]
fn garbage_payloads_restore_a_fresh_session() {
    for payload in ["", "definitely not json", "[1, 2, 3]", "null", "42"] {
        let session = SessionSnapshot::from_json(payload).restore();
        assert_eq!(session.total_remaining(), 94, "payload {payload:?}");
        assert!(session.hand().is_empty());
        assert!(session.history().is_empty());
        assert!(session.sort_preference());
    }
}
