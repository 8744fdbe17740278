//! Wire DTOs for availability and reporting views

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One slot in an availability grid
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotAvailability {
    /// Slot start time (HH:MM)
    pub time: String,
    pub available: bool,
}

/// One room in a hotel availability listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoomAvailability {
    pub room_id: String,
    pub name: String,
    pub capacity: u32,
    pub nightly_rate: f64,
    pub available: bool,
}

/// Availability result, shaped by business kind
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum AvailabilityResult {
    Restaurant { slots: Vec<SlotAvailability> },
    Salon { slots: Vec<SlotAvailability> },
    Hotel { rooms: Vec<RoomAvailability> },
}

/// Outcome of a cancellation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CancellationOutcome {
    pub reservation_id: String,
    /// Lead time in whole days between cancellation and the reserved date
    pub days_before: i64,
    /// Matched policy percentage (0 when no rule matched)
    pub refund_percentage: f64,
    pub refund_amount: f64,
    pub refund_issued: bool,
}

/// Aggregated occupancy over a date range (dashboard view)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OccupancySummary {
    pub from: NaiveDate,
    pub to: NaiveDate,
    pub total_reservations: u64,
    /// Sum of party sizes over confirmed reservations
    pub confirmed_party_total: u64,
    /// Revenue over confirmed reservations
    pub revenue: f64,
    /// Confirmed party total divided by capacity over the period, in [0, 1];
    /// 0 when the capacity is unconstrained
    pub fill_rate: f64,
}

/// One cell of the per-date reservation heatmap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeatmapEntry {
    pub date: NaiveDate,
    pub count: u64,
}
