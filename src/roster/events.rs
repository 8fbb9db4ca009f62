//! Event rules: type catalog, status life-cycle and participant ordering.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// In-game event kinds, each with a default roster cap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventType {
    ArkOfOsiris,
    Kvk,
    Mge,
    CeroliCrisis,
    IansBallads,
    SunsetCanyon,
    LostKingdom,
    GoldenKingdom,
}

impl EventType {
    pub const ALL: [EventType; 8] = [
        EventType::ArkOfOsiris,
        EventType::Kvk,
        EventType::Mge,
        EventType::CeroliCrisis,
        EventType::IansBallads,
        EventType::SunsetCanyon,
        EventType::LostKingdom,
        EventType::GoldenKingdom,
    ];

    /// Stored form, matching the serde representation.
    pub fn as_str(self) -> &'static str {
        match self {
            EventType::ArkOfOsiris => "ARK_OF_OSIRIS",
            EventType::Kvk => "KVK",
            EventType::Mge => "MGE",
            EventType::CeroliCrisis => "CEROLI_CRISIS",
            EventType::IansBallads => "IANS_BALLADS",
            EventType::SunsetCanyon => "SUNSET_CANYON",
            EventType::LostKingdom => "LOST_KINGDOM",
            EventType::GoldenKingdom => "GOLDEN_KINGDOM",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EventType::ArkOfOsiris => "Ark of Osiris",
            EventType::Kvk => "Kingdom vs Kingdom",
            EventType::Mge => "Mightiest Governor Event",
            EventType::CeroliCrisis => "Ceroli Crisis",
            EventType::IansBallads => "Ian's Ballads",
            EventType::SunsetCanyon => "Sunset Canyon",
            EventType::LostKingdom => "Lost Kingdom",
            EventType::GoldenKingdom => "Golden Kingdom",
        }
    }

    /// Roster cap imposed by the game, `None` when unlimited.
    pub fn default_max_players(self) -> Option<i32> {
        match self {
            EventType::ArkOfOsiris => Some(30),
            EventType::SunsetCanyon => Some(5),
            _ => None,
        }
    }

    pub fn parse(s: &str) -> Option<EventType> {
        EventType::ALL.into_iter().find(|t| t.as_str() == s)
    }
}

/// Effective roster cap: an explicit per-event override beats the type
/// default.
pub fn effective_max_players(event_type: EventType, override_cap: Option<i32>) -> Option<i32> {
    override_cap.or_else(|| event_type.default_max_players())
}

/// Event life-cycle. Transitions only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EventStatus {
    Upcoming,
    Active,
    Completed,
}

impl EventStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            EventStatus::Upcoming => "UPCOMING",
            EventStatus::Active => "ACTIVE",
            EventStatus::Completed => "COMPLETED",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EventStatus::Upcoming => "Upcoming",
            EventStatus::Active => "Active",
            EventStatus::Completed => "Completed",
        }
    }

    pub fn parse(s: &str) -> Option<EventStatus> {
        match s {
            "UPCOMING" => Some(EventStatus::Upcoming),
            "ACTIVE" => Some(EventStatus::Active),
            "COMPLETED" => Some(EventStatus::Completed),
            _ => None,
        }
    }

    fn rank(self) -> u8 {
        match self {
            EventStatus::Upcoming => 0,
            EventStatus::Active => 1,
            EventStatus::Completed => 2,
        }
    }

    /// Status updates are monotonic: re-asserting the current status is a
    /// no-op, moving backwards is rejected.
    pub fn can_advance_to(self, next: EventStatus) -> bool {
        next.rank() >= self.rank()
    }
}

/// Append position for a new participant given the current maximum.
pub fn next_position(current_max: Option<i32>) -> i32 {
    current_max.map_or(0, |p| p + 1)
}

/// Dense 0-based positions for a full, permuted participation list.
pub fn renumber(ordered_ids: &[Uuid]) -> impl Iterator<Item = (Uuid, i32)> + '_ {
    ordered_ids
        .iter()
        .enumerate()
        .map(|(index, id)| (*id, index as i32))
}
