//! Reservation model
//!
//! One document per booking. Restaurant/salon bookings carry
//! `date`/`time`/`party_size`; hotel bookings carry
//! `check_in`/`check_out`/`guests` and an optional room reference.
//! A reservation occupies capacity only while its status is
//! `pending` or `confirmed`.

use super::serde_helpers;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use shared::request::CustomerInfo;
use shared::{BookingSource, BusinessKind, PaymentStatus, ReservationStatus};
use surrealdb::RecordId;

pub type ReservationId = RecordId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<ReservationId>,

    #[serde(with = "serde_helpers::record_id")]
    pub business_id: RecordId,

    /// Mirrors the business profile's kind at booking time
    pub kind: BusinessKind,

    pub customer: CustomerInfo,

    // ===== Slot bookings (restaurant / salon) =====
    pub date: Option<NaiveDate>,

    /// Slot start time
    pub time: Option<NaiveTime>,

    pub party_size: Option<u32>,

    /// Full-venue (privatisation) booking
    #[serde(default, deserialize_with = "serde_helpers::bool_false")]
    pub exclusive: bool,

    // ===== Stay bookings (hotel) =====
    /// Check-in date, inclusive
    pub check_in: Option<NaiveDate>,

    /// Check-out date, exclusive: a checkout on day X never conflicts
    /// with a check-in on day X
    pub check_out: Option<NaiveDate>,

    pub guests: Option<u32>,

    #[serde(default, with = "serde_helpers::option_record_id")]
    pub room_id: Option<RecordId>,

    // ===== Common =====
    /// Server-computed total, never client-supplied
    pub total_amount: f64,

    pub status: ReservationStatus,

    pub payment_status: PaymentStatus,

    #[serde(default)]
    pub source: BookingSource,

    pub notes: Option<String>,
    pub special_requests: Option<String>,

    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
}

impl Reservation {
    /// The date capacity accounting keys on: booking date for slot
    /// bookings, check-in for stays
    pub fn start_date(&self) -> Option<NaiveDate> {
        match self.kind {
            BusinessKind::Hotel => self.check_in,
            BusinessKind::Restaurant | BusinessKind::Salon => self.date,
        }
    }

    /// Guests this reservation counts against capacity
    pub fn party_total(&self) -> u32 {
        match self.kind {
            BusinessKind::Hotel => self.guests.unwrap_or(0),
            BusinessKind::Restaurant | BusinessKind::Salon => self.party_size.unwrap_or(0),
        }
    }
}

/// Filter for reservation listings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReservationFilter {
    pub status: Option<ReservationStatus>,
    pub date: Option<NaiveDate>,
}

/// Partial update payload for reservation details
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time: Option<NaiveTime>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub party_size: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
    /// Stamped by the repository on merge
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
}
