//! Domain enums shared across the platform
//!
//! All per-kind behavior in the engine is selected by pattern match on
//! [`BusinessKind`]; business type is never carried as a free string.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The closed set of supported business types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BusinessKind {
    Hotel,
    Restaurant,
    Salon,
}

impl BusinessKind {
    /// Whether bookings for this kind use discrete time slots
    /// (hotels book date ranges instead)
    pub fn uses_slots(&self) -> bool {
        !matches!(self, Self::Hotel)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Hotel => "hotel",
            Self::Restaurant => "restaurant",
            Self::Salon => "salon",
        }
    }
}

impl fmt::Display for BusinessKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reservation lifecycle status
///
/// A reservation occupies slot/room capacity only while `Pending` or
/// `Confirmed`; every other status frees its capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReservationStatus {
    Pending,
    Confirmed,
    InProgress,
    Completed,
    Cancelled,
    NoShow,
}

impl ReservationStatus {
    /// Whether a reservation in this status counts against capacity
    pub fn occupies_capacity(&self) -> bool {
        matches!(self, Self::Pending | Self::Confirmed)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Confirmed => "confirmed",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Cancelled => "cancelled",
            Self::NoShow => "no_show",
        }
    }
}

impl fmt::Display for ReservationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payment status, tracked independently of the reservation status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Paid,
    Failed,
    Refunded,
}

impl PaymentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Paid => "paid",
            Self::Failed => "failed",
            Self::Refunded => "refunded",
        }
    }
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a booking originated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingSource {
    Website,
    Phone,
    WalkIn,
    Admin,
}

impl Default for BookingSource {
    fn default() -> Self {
        Self::Website
    }
}

/// Who initiated a cancellation
///
/// Customer-initiated cancellations of paid bookings trigger a refund
/// per the business's cancellation policy; business-initiated ones
/// refund in full regardless of lead time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CancelInitiator {
    Customer,
    Business,
}

/// Operational status of a hotel room
///
/// Only `Available` rooms participate in availability queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoomStatus {
    Available,
    Maintenance,
    Cleaning,
}

impl Default for RoomStatus {
    fn default() -> Self {
        Self::Available
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_business_kind_serde() {
        assert_eq!(
            serde_json::to_string(&BusinessKind::Hotel).unwrap(),
            "\"hotel\""
        );
        let kind: BusinessKind = serde_json::from_str("\"restaurant\"").unwrap();
        assert_eq!(kind, BusinessKind::Restaurant);
    }

    #[test]
    fn test_uses_slots() {
        assert!(BusinessKind::Restaurant.uses_slots());
        assert!(BusinessKind::Salon.uses_slots());
        assert!(!BusinessKind::Hotel.uses_slots());
    }

    #[test]
    fn test_occupies_capacity() {
        assert!(ReservationStatus::Pending.occupies_capacity());
        assert!(ReservationStatus::Confirmed.occupies_capacity());
        assert!(!ReservationStatus::Cancelled.occupies_capacity());
        assert!(!ReservationStatus::NoShow.occupies_capacity());
        assert!(!ReservationStatus::Completed.occupies_capacity());
    }

    #[test]
    fn test_status_serde_snake_case() {
        assert_eq!(
            serde_json::to_string(&ReservationStatus::NoShow).unwrap(),
            "\"no_show\""
        );
        let status: ReservationStatus = serde_json::from_str("\"in_progress\"").unwrap();
        assert_eq!(status, ReservationStatus::InProgress);
    }
}
