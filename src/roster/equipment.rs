//! Equipment-set rules: numbering, naming and per-slot enhancements.

use crate::gear::GearSlot;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A player owns between 1 and 7 loadouts.
pub const SET_CAP: usize = 7;

/// Per-slot enhancement state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enhancement {
    #[serde(default)]
    pub crit: bool,
    /// Attunement rank, 0–5.
    #[serde(default)]
    pub attunement: u8,
}

impl Enhancement {
    pub const MAX_ATTUNEMENT: u8 = 5;

    /// Merge a partial update, leaving unspecified fields untouched.
    /// Attunement is clamped to the valid rank range.
    pub fn apply(&mut self, patch: EnhancementPatch) {
        if let Some(crit) = patch.crit {
            self.crit = crit;
        }
        if let Some(rank) = patch.attunement {
            self.attunement = rank.min(Self::MAX_ATTUNEMENT);
        }
    }
}

/// Partial enhancement update for one slot.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnhancementPatch {
    pub crit: Option<bool>,
    pub attunement: Option<u8>,
}

/// Enhancement state of a whole set, keyed by slot.
///
/// Persisted as a JSON text column on `equipment_sets`; slots absent from
/// the map are unenhanced.
pub type Enhancements = BTreeMap<GearSlot, Enhancement>;

/// Parse the stored enhancement blob. Missing or malformed text reads as
/// "nothing enhanced" rather than an error.
pub fn decode_enhancements(raw: Option<&str>) -> Enhancements {
    raw.and_then(|s| serde_json::from_str(s).ok())
        .unwrap_or_default()
}

pub fn encode_enhancements(map: &Enhancements) -> String {
    serde_json::to_string(map).unwrap_or_else(|_| "{}".into())
}

/// Lowest unused set number in [1,7], filling gaps left by deletions.
/// `None` once the cap is reached.
pub fn next_set_number(used: &[i32]) -> Option<i32> {
    (1..=SET_CAP as i32).find(|n| !used.contains(n))
}

/// Presentation fallback for unnamed sets.
pub fn default_set_name(set_number: i32) -> String {
    format!("Set {set_number}")
}
