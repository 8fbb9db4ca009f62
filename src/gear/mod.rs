//! Gear domain: slots, troop/stat classification and the static catalog.

pub mod catalog;
pub mod stats;

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// The eight fixed loadout slots.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum GearSlot {
    Helmet,
    Chest,
    Weapon,
    Gloves,
    Legs,
    Boots,
    Accessory1,
    Accessory2,
}

impl GearSlot {
    pub const ALL: [GearSlot; 8] = [
        GearSlot::Helmet,
        GearSlot::Chest,
        GearSlot::Weapon,
        GearSlot::Gloves,
        GearSlot::Legs,
        GearSlot::Boots,
        GearSlot::Accessory1,
        GearSlot::Accessory2,
    ];

    /// Canonical key, also the column name on `equipment_sets`.
    pub fn as_str(self) -> &'static str {
        match self {
            GearSlot::Helmet => "helmet",
            GearSlot::Chest => "chest",
            GearSlot::Weapon => "weapon",
            GearSlot::Gloves => "gloves",
            GearSlot::Legs => "legs",
            GearSlot::Boots => "boots",
            GearSlot::Accessory1 => "accessory1",
            GearSlot::Accessory2 => "accessory2",
        }
    }

    pub fn parse(s: &str) -> Option<GearSlot> {
        GearSlot::ALL.into_iter().find(|slot| slot.as_str() == s)
    }
}

/// Troop classes a gear bonus can apply to.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum TroopType {
    Infantry,
    Cavalry,
    Archer,
    Siege,
}

/// Bonus categories carried by gear.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum StatType {
    Attack,
    Defense,
    Health,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Uncommon,
    Rare,
    Epic,
    Legendary,
}

/// Summed percentage bonuses, troop type → stat → value.
///
/// Never contains an empty inner map or a zero value.
pub type GearStats = BTreeMap<TroopType, BTreeMap<StatType, u32>>;
