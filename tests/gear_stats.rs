//! Unit tests for the set stat aggregator.

use alliance_server::gear::stats::aggregate;
use alliance_server::gear::{StatType, TroopType};

#[test]
fn empty_loadout_aggregates_to_nothing() {
    let total = aggregate([None; 8]);
    assert!(total.is_empty());
}

#[test]
fn unknown_ids_contribute_nothing() {
    let total = aggregate([Some("mystery_blade"), Some(""), None]);
    assert!(total.is_empty());
}

#[test]
fn helmet_and_weapon_sum_per_stat() {
    // War helm 5/8/4 plus infantry sword 9/3.
    let total = aggregate([Some("helm_inf_leg"), Some("weapon_inf_epic")]);

    let infantry = &total[&TroopType::Infantry];
    assert_eq!(infantry[&StatType::Attack], 14);
    assert_eq!(infantry[&StatType::Defense], 11);
    assert_eq!(infantry[&StatType::Health], 4);
    assert!(!total.contains_key(&TroopType::Cavalry));
}

#[test]
fn aggregation_is_order_independent() {
    let forward = aggregate([
        Some("helm_inf_leg"),
        Some("chest_cav_leg"),
        Some("weapon_arc_epic"),
        Some("acc_siege_leg"),
    ]);
    let backward = aggregate([
        Some("acc_siege_leg"),
        Some("weapon_arc_epic"),
        Some("chest_cav_leg"),
        Some("helm_inf_leg"),
    ]);

    assert_eq!(forward, backward);
}

#[test]
fn result_never_holds_zero_values_or_empty_troop_maps() {
    let total = aggregate([
        Some("helm_inf_leg"),
        Some("chest_inf_epic"),
        Some("weapon_inf_epic"),
        Some("gloves_cav_leg"),
        Some("legs_arc_epic"),
        Some("boots_inf_leg"),
        Some("acc_siege_epic"),
        Some("bogus"),
    ]);

    assert!(!total.is_empty());
    for (_, stats) in &total {
        assert!(!stats.is_empty());
        for (_, value) in stats {
            assert!(*value > 0);
        }
    }
    // Archer's Pants carry no attack bonus; the key stays absent rather
    // than showing a zero.
    let archer = &total[&TroopType::Archer];
    assert!(!archer.contains_key(&StatType::Attack));
}

#[test]
fn duplicate_accessories_count_twice() {
    let total = aggregate([Some("acc_inf_leg"), Some("acc_inf_leg")]);
    assert_eq!(total[&TroopType::Infantry][&StatType::Attack], 12);
}

#[test]
fn each_troop_type_aggregates_separately() {
    let total = aggregate([Some("helm_inf_leg"), Some("weapon_cav_epic")]);

    assert_eq!(total[&TroopType::Infantry][&StatType::Defense], 8);
    assert_eq!(total[&TroopType::Cavalry][&StatType::Attack], 10);
    assert!(!total.contains_key(&TroopType::Siege));
}
