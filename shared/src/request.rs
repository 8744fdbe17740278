//! Wire DTOs for booking requests
//!
//! These are the payloads the REST layer accepts. Handlers validate them
//! with `validator` before handing them to the engine.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::types::{BookingSource, CancelInitiator};

/// Customer contact details attached to every booking
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CustomerInfo {
    #[validate(length(min = 1, max = 200))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(max = 100))]
    pub phone: Option<String>,
}

/// Slot booking payload (restaurant / salon)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SlotBooking {
    /// Booking date (YYYY-MM-DD)
    pub date: NaiveDate,
    /// Slot start time (HH:MM)
    #[validate(length(min = 5, max = 8))]
    pub time: String,
    #[validate(range(min = 1))]
    pub party_size: u32,
    /// Full-venue (privatisation) booking, priced at the exclusive tariff
    #[serde(default)]
    pub exclusive: bool,
}

/// Stay booking payload (hotel)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct StayBooking {
    /// Check-in date, inclusive
    pub check_in: NaiveDate,
    /// Check-out date, exclusive
    pub check_out: NaiveDate,
    #[validate(range(min = 1))]
    pub guests: u32,
    /// Target room; the stay is priced from this room's nightly rate
    pub room_id: Option<String>,
}

/// Per-kind booking details, selected by the `kind` tag
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum BookingDetails {
    Restaurant(SlotBooking),
    Salon(SlotBooking),
    Hotel(StayBooking),
}

/// Full booking creation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateBookingRequest {
    pub customer: CustomerInfo,
    #[serde(flatten)]
    pub details: BookingDetails,
    #[serde(default)]
    pub source: BookingSource,
    pub notes: Option<String>,
    pub special_requests: Option<String>,
}

/// Cancellation request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CancelBookingRequest {
    pub initiator: CancelInitiator,
    pub reason: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_booking_details_tagged_by_kind() {
        let json = r#"{
            "customer": {"name": "Amina", "email": "amina@example.com", "phone": null},
            "kind": "restaurant",
            "date": "2024-07-01",
            "time": "19:00",
            "party_size": 4
        }"#;
        let req: CreateBookingRequest = serde_json::from_str(json).unwrap();
        match req.details {
            BookingDetails::Restaurant(slot) => {
                assert_eq!(slot.time, "19:00");
                assert_eq!(slot.party_size, 4);
                assert!(!slot.exclusive);
            }
            other => panic!("expected restaurant booking, got {:?}", other),
        }
        assert_eq!(req.source, BookingSource::Website);
    }

    #[test]
    fn test_hotel_booking_details() {
        let json = r#"{
            "customer": {"name": "Youssef", "email": "y@example.com"},
            "kind": "hotel",
            "check_in": "2024-07-01",
            "check_out": "2024-07-05",
            "guests": 2,
            "room_id": "room:101",
            "source": "phone"
        }"#;
        let req: CreateBookingRequest = serde_json::from_str(json).unwrap();
        match req.details {
            BookingDetails::Hotel(stay) => {
                assert_eq!(stay.guests, 2);
                assert_eq!(stay.room_id.as_deref(), Some("room:101"));
            }
            other => panic!("expected hotel booking, got {:?}", other),
        }
        assert_eq!(req.source, BookingSource::Phone);
    }

    #[test]
    fn test_customer_validation() {
        let customer = CustomerInfo {
            name: "".into(),
            email: "not-an-email".into(),
            phone: None,
        };
        assert!(customer.validate().is_err());

        let customer = CustomerInfo {
            name: "Amina".into(),
            email: "amina@example.com".into(),
            phone: None,
        };
        assert!(customer.validate().is_ok());
    }
}
