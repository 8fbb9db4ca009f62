//! Unit tests for event types, status flow and participant ordering.

use std::collections::HashMap;

use alliance_server::roster::events::{
    effective_max_players, next_position, renumber, EventStatus, EventType,
};
use uuid::Uuid;

#[test]
fn type_caps_match_the_game() {
    assert_eq!(EventType::ArkOfOsiris.default_max_players(), Some(30));
    assert_eq!(EventType::SunsetCanyon.default_max_players(), Some(5));
    assert_eq!(EventType::Kvk.default_max_players(), None);
    assert_eq!(EventType::GoldenKingdom.default_max_players(), None);
}

#[test]
fn explicit_cap_beats_type_default() {
    assert_eq!(
        effective_max_players(EventType::ArkOfOsiris, Some(25)),
        Some(25)
    );
    assert_eq!(effective_max_players(EventType::ArkOfOsiris, None), Some(30));
    assert_eq!(effective_max_players(EventType::Mge, None), None);
}

#[test]
fn stored_forms_roundtrip() {
    for event_type in EventType::ALL {
        assert_eq!(EventType::parse(event_type.as_str()), Some(event_type));
    }
    assert_eq!(EventType::parse("ARK_OF_OSIRIS"), Some(EventType::ArkOfOsiris));
    assert!(EventType::parse("SIEGE_NIGHT").is_none());

    for status in [
        EventStatus::Upcoming,
        EventStatus::Active,
        EventStatus::Completed,
    ] {
        assert_eq!(EventStatus::parse(status.as_str()), Some(status));
    }
    assert!(EventStatus::parse("CANCELLED").is_none());
}

#[test]
fn status_only_moves_forward() {
    use EventStatus::*;

    assert!(Upcoming.can_advance_to(Active));
    assert!(Upcoming.can_advance_to(Completed));
    assert!(Active.can_advance_to(Completed));
    // Re-asserting the current status is allowed.
    assert!(Active.can_advance_to(Active));

    assert!(!Active.can_advance_to(Upcoming));
    assert!(!Completed.can_advance_to(Active));
    assert!(!Completed.can_advance_to(Upcoming));
}

#[test]
fn first_participant_lands_at_position_zero() {
    assert_eq!(next_position(None), 0);
    assert_eq!(next_position(Some(7)), 8);
}

#[test]
fn reorder_assigns_dense_zero_based_positions() {
    let (a, b, c) = (Uuid::new_v4(), Uuid::new_v4(), Uuid::new_v4());

    let assigned: Vec<(Uuid, i32)> = renumber(&[c, a, b]).collect();
    assert_eq!(assigned, vec![(c, 0), (a, 1), (b, 2)]);
}

#[test]
fn reorder_converges_after_interrupted_rewrite() {
    let ids: Vec<Uuid> = (0..3).map(|_| Uuid::new_v4()).collect();
    let mut stored: HashMap<Uuid, i32> = renumber(&ids).collect();

    // A [C, A, B] reorder that dies after its first write leaves the
    // ordering gapped and non-dense.
    let permuted = vec![ids[2], ids[0], ids[1]];
    for (id, position) in renumber(&permuted).take(1) {
        stored.insert(id, position);
    }
    let mut partial: Vec<i32> = stored.values().copied().collect();
    partial.sort_unstable();
    assert_ne!(partial, vec![0, 1, 2]);

    // A later full rewrite repairs it.
    for (id, position) in renumber(&permuted) {
        stored.insert(id, position);
    }
    let mut repaired: Vec<i32> = stored.values().copied().collect();
    repaired.sort_unstable();
    assert_eq!(repaired, vec![0, 1, 2]);
    assert_eq!(stored[&permuted[0]], 0);
    assert_eq!(stored[&permuted[1]], 1);
    assert_eq!(stored[&permuted[2]], 2);
}
