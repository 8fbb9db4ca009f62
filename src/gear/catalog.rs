//! Static gear catalog.
//!
//! The catalog is game-constant reference data, so it is compiled in rather
//! than loaded from Postgres. A lazily built map serves id look-ups; slot
//! listings iterate the table directly to keep the authoring order.

use crate::gear::{GearSlot, GearStats, Rarity, StatType, TroopType};
use dashmap::DashMap;
use once_cell::sync::Lazy;

use crate::gear::GearSlot::*;
use crate::gear::Rarity::{Epic, Legendary};
use crate::gear::StatType::*;
use crate::gear::TroopType::*;

/// One catalog entry.
#[derive(Debug, Clone, Copy)]
pub struct GearDef {
    pub id: &'static str,
    pub name: &'static str,
    pub slot: GearSlot,
    pub rarity: Rarity,
    /// Percentage bonuses, one triple per (troop, stat).
    pub bonuses: &'static [(TroopType, StatType, u32)],
}

impl GearDef {
    /// Bonuses as a nested map, zero values skipped.
    pub fn stats(&self) -> GearStats {
        let mut out = GearStats::new();
        for &(troop, stat, value) in self.bonuses {
            if value == 0 {
                continue;
            }
            *out.entry(troop).or_default().entry(stat).or_insert(0) += value;
        }
        out
    }
}

pub const GEAR_TABLE: &[GearDef] = &[
    // Helmets
    GearDef {
        id: "helm_inf_leg",
        name: "Infantry War Helm",
        slot: Helmet,
        rarity: Legendary,
        bonuses: &[(Infantry, Attack, 5), (Infantry, Defense, 8), (Infantry, Health, 4)],
    },
    GearDef {
        id: "helm_inf_epic",
        name: "Infantry Battle Helm",
        slot: Helmet,
        rarity: Epic,
        bonuses: &[(Infantry, Attack, 4), (Infantry, Defense, 6), (Infantry, Health, 3)],
    },
    GearDef {
        id: "helm_cav_leg",
        name: "Cavalry War Helm",
        slot: Helmet,
        rarity: Legendary,
        bonuses: &[(Cavalry, Attack, 6), (Cavalry, Defense, 7), (Cavalry, Health, 4)],
    },
    GearDef {
        id: "helm_cav_epic",
        name: "Cavalry Battle Helm",
        slot: Helmet,
        rarity: Epic,
        bonuses: &[(Cavalry, Attack, 4), (Cavalry, Defense, 5), (Cavalry, Health, 3)],
    },
    GearDef {
        id: "helm_arc_leg",
        name: "Archer War Helm",
        slot: Helmet,
        rarity: Legendary,
        bonuses: &[(Archer, Attack, 7), (Archer, Defense, 5), (Archer, Health, 5)],
    },
    GearDef {
        id: "helm_arc_epic",
        name: "Archer Battle Helm",
        slot: Helmet,
        rarity: Epic,
        bonuses: &[(Archer, Attack, 5), (Archer, Defense, 4), (Archer, Health, 3)],
    },
    // Chest pieces
    GearDef {
        id: "chest_inf_leg",
        name: "Infantry Plate Armor",
        slot: Chest,
        rarity: Legendary,
        bonuses: &[(Infantry, Attack, 4), (Infantry, Defense, 10), (Infantry, Health, 6)],
    },
    GearDef {
        id: "chest_inf_epic",
        name: "Infantry Chain Mail",
        slot: Chest,
        rarity: Epic,
        bonuses: &[(Infantry, Defense, 7), (Infantry, Health, 5)],
    },
    GearDef {
        id: "chest_cav_leg",
        name: "Cavalry Riding Cloak",
        slot: Chest,
        rarity: Legendary,
        bonuses: &[(Cavalry, Attack, 6), (Cavalry, Defense, 8), (Cavalry, Health, 6)],
    },
    GearDef {
        id: "chest_cav_epic",
        name: "Cavalry Light Armor",
        slot: Chest,
        rarity: Epic,
        bonuses: &[(Cavalry, Attack, 4), (Cavalry, Defense, 6), (Cavalry, Health, 4)],
    },
    GearDef {
        id: "chest_arc_leg",
        name: "Archer's Cloak",
        slot: Chest,
        rarity: Legendary,
        bonuses: &[(Archer, Attack, 8), (Archer, Defense, 6), (Archer, Health, 5)],
    },
    GearDef {
        id: "chest_arc_epic",
        name: "Archer's Vest",
        slot: Chest,
        rarity: Epic,
        bonuses: &[(Archer, Attack, 5), (Archer, Defense, 5), (Archer, Health, 4)],
    },
    // Weapons
    GearDef {
        id: "weapon_inf_leg",
        name: "Hammer of the Silent",
        slot: Weapon,
        rarity: Legendary,
        bonuses: &[(Infantry, Attack, 12), (Infantry, Defense, 4), (Infantry, Health, 2)],
    },
    GearDef {
        id: "weapon_inf_epic",
        name: "Infantry Sword",
        slot: Weapon,
        rarity: Epic,
        bonuses: &[(Infantry, Attack, 9), (Infantry, Defense, 3)],
    },
    GearDef {
        id: "weapon_cav_leg",
        name: "Blade of Calamity",
        slot: Weapon,
        rarity: Legendary,
        bonuses: &[(Cavalry, Attack, 13), (Cavalry, Defense, 3), (Cavalry, Health, 2)],
    },
    GearDef {
        id: "weapon_cav_epic",
        name: "Cavalry Lance",
        slot: Weapon,
        rarity: Epic,
        bonuses: &[(Cavalry, Attack, 10), (Cavalry, Defense, 2)],
    },
    GearDef {
        id: "weapon_arc_leg",
        name: "Bow of Precision",
        slot: Weapon,
        rarity: Legendary,
        bonuses: &[(Archer, Attack, 14), (Archer, Defense, 2), (Archer, Health, 2)],
    },
    GearDef {
        id: "weapon_arc_epic",
        name: "Archer's Longbow",
        slot: Weapon,
        rarity: Epic,
        bonuses: &[(Archer, Attack, 10), (Archer, Defense, 2)],
    },
    // Gloves
    GearDef {
        id: "gloves_inf_leg",
        name: "Vanguard Gauntlets",
        slot: Gloves,
        rarity: Legendary,
        bonuses: &[(Infantry, Attack, 6), (Infantry, Defense, 6), (Infantry, Health, 4)],
    },
    GearDef {
        id: "gloves_inf_epic",
        name: "Infantry Gloves",
        slot: Gloves,
        rarity: Epic,
        bonuses: &[(Infantry, Attack, 4), (Infantry, Defense, 4), (Infantry, Health, 3)],
    },
    GearDef {
        id: "gloves_cav_leg",
        name: "Rider's Grips",
        slot: Gloves,
        rarity: Legendary,
        bonuses: &[(Cavalry, Attack, 7), (Cavalry, Defense, 5), (Cavalry, Health, 4)],
    },
    GearDef {
        id: "gloves_cav_epic",
        name: "Cavalry Gloves",
        slot: Gloves,
        rarity: Epic,
        bonuses: &[(Cavalry, Attack, 5), (Cavalry, Defense, 4), (Cavalry, Health, 3)],
    },
    GearDef {
        id: "gloves_arc_leg",
        name: "Eternal Night",
        slot: Gloves,
        rarity: Legendary,
        bonuses: &[(Archer, Attack, 8), (Archer, Defense, 4), (Archer, Health, 4)],
    },
    GearDef {
        id: "gloves_arc_epic",
        name: "Archer's Gloves",
        slot: Gloves,
        rarity: Epic,
        bonuses: &[(Archer, Attack, 6), (Archer, Defense, 3), (Archer, Health, 3)],
    },
    // Legs
    GearDef {
        id: "legs_inf_leg",
        name: "Sentry's Breeches",
        slot: Legs,
        rarity: Legendary,
        bonuses: &[(Infantry, Attack, 3), (Infantry, Defense, 10), (Infantry, Health, 6)],
    },
    GearDef {
        id: "legs_inf_epic",
        name: "Infantry Leggings",
        slot: Legs,
        rarity: Epic,
        bonuses: &[(Infantry, Defense, 7), (Infantry, Health, 4)],
    },
    GearDef {
        id: "legs_cav_leg",
        name: "Rider's Pants",
        slot: Legs,
        rarity: Legendary,
        bonuses: &[(Cavalry, Attack, 4), (Cavalry, Defense, 8), (Cavalry, Health, 6)],
    },
    GearDef {
        id: "legs_cav_epic",
        name: "Cavalry Leggings",
        slot: Legs,
        rarity: Epic,
        bonuses: &[(Cavalry, Defense, 6), (Cavalry, Health, 5)],
    },
    GearDef {
        id: "legs_arc_leg",
        name: "Archer's Greaves",
        slot: Legs,
        rarity: Legendary,
        bonuses: &[(Archer, Attack, 5), (Archer, Defense, 7), (Archer, Health, 6)],
    },
    GearDef {
        id: "legs_arc_epic",
        name: "Archer's Pants",
        slot: Legs,
        rarity: Epic,
        bonuses: &[(Archer, Defense, 5), (Archer, Health, 5)],
    },
    // Boots
    GearDef {
        id: "boots_inf_leg",
        name: "Infantry War Boots",
        slot: Boots,
        rarity: Legendary,
        bonuses: &[(Infantry, Attack, 3), (Infantry, Defense, 6), (Infantry, Health, 8)],
    },
    GearDef {
        id: "boots_inf_epic",
        name: "Infantry Boots",
        slot: Boots,
        rarity: Epic,
        bonuses: &[(Infantry, Defense, 4), (Infantry, Health, 5)],
    },
    GearDef {
        id: "boots_cav_leg",
        name: "Windswept Boots",
        slot: Boots,
        rarity: Legendary,
        bonuses: &[(Cavalry, Attack, 4), (Cavalry, Defense, 6), (Cavalry, Health, 8)],
    },
    GearDef {
        id: "boots_cav_epic",
        name: "Cavalry Boots",
        slot: Boots,
        rarity: Epic,
        bonuses: &[(Cavalry, Defense, 5), (Cavalry, Health, 5)],
    },
    GearDef {
        id: "boots_arc_leg",
        name: "Archer's Swift Boots",
        slot: Boots,
        rarity: Legendary,
        bonuses: &[(Archer, Attack, 5), (Archer, Defense, 5), (Archer, Health, 7)],
    },
    GearDef {
        id: "boots_arc_epic",
        name: "Archer's Boots",
        slot: Boots,
        rarity: Epic,
        bonuses: &[(Archer, Defense, 4), (Archer, Health, 5)],
    },
    // Accessories
    GearDef {
        id: "acc_inf_leg",
        name: "Infantry Horn",
        slot: Accessory1,
        rarity: Legendary,
        bonuses: &[(Infantry, Attack, 6), (Infantry, Defense, 5), (Infantry, Health, 5)],
    },
    GearDef {
        id: "acc_inf_epic",
        name: "Infantry Ring",
        slot: Accessory1,
        rarity: Epic,
        bonuses: &[(Infantry, Attack, 4), (Infantry, Defense, 3), (Infantry, Health, 3)],
    },
    GearDef {
        id: "acc_cav_leg",
        name: "Cavalry Talisman",
        slot: Accessory1,
        rarity: Legendary,
        bonuses: &[(Cavalry, Attack, 7), (Cavalry, Defense, 4), (Cavalry, Health, 5)],
    },
    GearDef {
        id: "acc_cav_epic",
        name: "Cavalry Ring",
        slot: Accessory1,
        rarity: Epic,
        bonuses: &[(Cavalry, Attack, 5), (Cavalry, Defense, 3), (Cavalry, Health, 3)],
    },
    GearDef {
        id: "acc_arc_leg",
        name: "Archer's Amulet",
        slot: Accessory1,
        rarity: Legendary,
        bonuses: &[(Archer, Attack, 8), (Archer, Defense, 3), (Archer, Health, 5)],
    },
    GearDef {
        id: "acc_arc_epic",
        name: "Archer's Ring",
        slot: Accessory1,
        rarity: Epic,
        bonuses: &[(Archer, Attack, 5), (Archer, Defense, 3), (Archer, Health, 3)],
    },
    GearDef {
        id: "acc_siege_leg",
        name: "Siege Engine Core",
        slot: Accessory1,
        rarity: Legendary,
        bonuses: &[(Siege, Attack, 10), (Siege, Defense, 4), (Siege, Health, 4)],
    },
    GearDef {
        id: "acc_siege_epic",
        name: "Siege Ring",
        slot: Accessory1,
        rarity: Epic,
        bonuses: &[(Siege, Attack, 7), (Siege, Defense, 3), (Siege, Health, 3)],
    },
];

/// Global map id → GearDef for O(1) look-ups.
static CATALOG: Lazy<DashMap<&'static str, &'static GearDef>> = Lazy::new(|| {
    let map = DashMap::new();
    for def in GEAR_TABLE {
        map.insert(def.id, def);
    }
    map
});

/// Look up a catalog entry by id. Unknown ids are not an error.
pub fn get_gear(id: &str) -> Option<&'static GearDef> {
    CATALOG.get(id).map(|e| *e.value())
}

/// Catalog entries equippable in `slot`, in authoring order.
///
/// The two accessory slots share one pool, so `accessory2` also accepts
/// gear authored for `accessory1`.
pub fn gear_for_slot(slot: GearSlot) -> Vec<&'static GearDef> {
    GEAR_TABLE
        .iter()
        .filter(|def| {
            def.slot == slot || (slot == GearSlot::Accessory2 && def.slot == GearSlot::Accessory1)
        })
        .collect()
}
