//! Unit tests for equipment-set numbering and enhancements.

use alliance_server::gear::GearSlot;
use alliance_server::roster::equipment::{
    decode_enhancements, default_set_name, encode_enhancements, next_set_number, Enhancement,
    EnhancementPatch, Enhancements, SET_CAP,
};

#[test]
fn first_set_is_number_one() {
    assert_eq!(next_set_number(&[]), Some(1));
}

#[test]
fn deleted_set_numbers_are_refilled_before_appending() {
    // Deleting set 3 from {1,2,3,4} and adding again yields 3, not 5.
    assert_eq!(next_set_number(&[1, 2, 4]), Some(3));
    assert_eq!(next_set_number(&[2, 3]), Some(1));
    assert_eq!(next_set_number(&[1, 2, 3]), Some(4));
}

#[test]
fn seven_sets_exhaust_the_numbering() {
    let full: Vec<i32> = (1..=SET_CAP as i32).collect();
    assert_eq!(next_set_number(&full), None);
}

#[test]
fn patch_merges_without_clobbering_other_fields() {
    let mut enhancement = Enhancement {
        crit: false,
        attunement: 3,
    };
    enhancement.apply(EnhancementPatch {
        crit: Some(true),
        attunement: None,
    });

    assert!(enhancement.crit);
    assert_eq!(enhancement.attunement, 3);
}

#[test]
fn attunement_is_clamped_to_rank_five() {
    let mut enhancement = Enhancement::default();
    enhancement.apply(EnhancementPatch {
        crit: None,
        attunement: Some(9),
    });

    assert_eq!(enhancement.attunement, Enhancement::MAX_ATTUNEMENT);
}

#[test]
fn blob_roundtrip_is_keyed_by_slot_name() {
    let mut map = Enhancements::new();
    map.insert(
        GearSlot::Weapon,
        Enhancement {
            crit: true,
            attunement: 2,
        },
    );

    let encoded = encode_enhancements(&map);
    assert!(encoded.contains("\"weapon\""));
    assert_eq!(decode_enhancements(Some(&encoded)), map);
}

#[test]
fn missing_or_garbled_blob_reads_as_unenhanced() {
    assert!(decode_enhancements(None).is_empty());
    assert!(decode_enhancements(Some("not json")).is_empty());
    assert!(decode_enhancements(Some("")).is_empty());
}

#[test]
fn partial_blob_defaults_absent_fields() {
    let map = decode_enhancements(Some(r#"{"boots":{"crit":true}}"#));
    let boots = map[&GearSlot::Boots];

    assert!(boots.crit);
    assert_eq!(boots.attunement, 0);
}

#[test]
fn unnamed_sets_fall_back_to_positional_default() {
    assert_eq!(default_set_name(1), "Set 1");
    assert_eq!(default_set_name(7), "Set 7");
}
