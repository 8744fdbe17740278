//! Hotel room inventory model

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use shared::RoomStatus;
use surrealdb::RecordId;

pub type RoomId = RecordId;

/// Hotel room
///
/// Only rooms that are both `active` and in `Available` status
/// participate in availability queries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Room {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<RoomId>,

    #[serde(with = "serde_helpers::record_id")]
    pub business_id: RecordId,

    /// Room name or number
    pub name: String,

    /// Guests (adults + children) the room can host
    pub capacity: u32,

    /// Price per night
    pub nightly_rate: f64,

    #[serde(default = "serde_default_true", deserialize_with = "serde_helpers::bool_true")]
    pub active: bool,

    #[serde(default)]
    pub status: RoomStatus,

    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
}

fn serde_default_true() -> bool {
    true
}

impl Room {
    /// Whether this room can appear in availability results at all
    pub fn is_bookable(&self) -> bool {
        self.active && self.status == RoomStatus::Available
    }
}

/// Create room payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomCreate {
    pub name: String,
    pub capacity: u32,
    pub nightly_rate: f64,
}

/// Update room payload (partial merge)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nightly_rate: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<RoomStatus>,
    /// Stamped by the repository on merge
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
}
