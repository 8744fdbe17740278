//! Invoice model
//!
//! One invoice per paid reservation, derived from the reservation's
//! computed total at creation time. Immutable once created except
//! through explicit update. A unique index on `reservation_id` backs
//! idempotent creation.

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

pub type InvoiceId = RecordId;

/// One line item on an invoice
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceItem {
    pub description: String,
    pub unit_price: f64,
    pub quantity: u32,
    pub total: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Invoice {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<InvoiceId>,

    #[serde(with = "serde_helpers::record_id")]
    pub reservation_id: RecordId,

    #[serde(with = "serde_helpers::record_id")]
    pub business_id: RecordId,

    /// Human-facing invoice number
    pub number: String,

    pub currency: String,

    pub items: Vec<InvoiceItem>,

    pub total: f64,

    /// Issue time (Unix millis)
    pub issued_at: i64,
}
