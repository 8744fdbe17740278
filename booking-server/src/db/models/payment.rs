//! Payment record model
//!
//! Tracks the payment attached to a reservation, including the external
//! gateway intent reference and, after a refund, the refund reference
//! and refunded amount.

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use shared::PaymentStatus;
use surrealdb::RecordId;

pub type PaymentRecordId = RecordId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentRecord {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<PaymentRecordId>,

    #[serde(with = "serde_helpers::record_id")]
    pub reservation_id: RecordId,

    pub amount: f64,

    pub status: PaymentStatus,

    /// External payment intent reference (gateway-side id)
    pub intent_ref: Option<String>,

    /// Refund reference returned by the gateway, once refunded
    pub refund_ref: Option<String>,

    pub refunded_amount: Option<f64>,

    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
}
