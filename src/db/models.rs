use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use crate::gear::GearSlot;
use crate::roster::equipment::{self, Enhancements};

#[derive(Debug, Clone, FromRow, serde::Serialize)]
pub struct Player {
    pub id: Uuid,
    /// In-game governor id, unique across the roster.
    pub player_id: String,
    pub name: String,
    pub power: i64,
    pub kill_points: i64,
    pub in_alliance: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, FromRow, serde::Serialize)]
pub struct Event {
    pub id: Uuid,
    pub name: String,
    pub event_type: String,
    /// Explicit roster cap; `None` falls back to the type default.
    pub max_players: Option<i32>,
    pub start_date: DateTime<Utc>,
    pub end_date: Option<DateTime<Utc>>,
    pub status: String,
    pub description: Option<String>,
}

#[derive(Debug, Clone, FromRow)]
pub struct EquipmentSet {
    pub id: Uuid,
    pub player_id: Uuid,
    pub set_number: i32,
    pub name: Option<String>,
    pub helmet: Option<String>,
    pub chest: Option<String>,
    pub weapon: Option<String>,
    pub gloves: Option<String>,
    pub legs: Option<String>,
    pub boots: Option<String>,
    pub accessory1: Option<String>,
    pub accessory2: Option<String>,
    /// JSON blob keyed by slot name, see [`Enhancements`].
    pub enhancements: Option<String>,
    pub armament_image_url: Option<String>,
}

impl EquipmentSet {
    pub fn slot(&self, slot: GearSlot) -> Option<&str> {
        let field = match slot {
            GearSlot::Helmet => &self.helmet,
            GearSlot::Chest => &self.chest,
            GearSlot::Weapon => &self.weapon,
            GearSlot::Gloves => &self.gloves,
            GearSlot::Legs => &self.legs,
            GearSlot::Boots => &self.boots,
            GearSlot::Accessory1 => &self.accessory1,
            GearSlot::Accessory2 => &self.accessory2,
        };
        field.as_deref()
    }

    /// Equipped gear ids in slot order.
    pub fn equipped(&self) -> [Option<&str>; 8] {
        GearSlot::ALL.map(|slot| self.slot(slot))
    }

    pub fn enhancements(&self) -> Enhancements {
        equipment::decode_enhancements(self.enhancements.as_deref())
    }

    /// Stored name, or the positional default.
    pub fn display_name(&self) -> String {
        match self.name.as_deref() {
            Some(name) if !name.is_empty() => name.to_owned(),
            _ => equipment::default_set_name(self.set_number),
        }
    }
}

#[derive(Debug, Clone, FromRow, serde::Serialize)]
pub struct EventParticipation {
    pub id: Uuid,
    pub event_id: Uuid,
    pub player_id: Uuid,
    pub participated: bool,
    pub score: Option<i32>,
    /// Display position within the event, 0-based.
    pub position: i32,
    pub notes: Option<String>,
}
