//! Cancellation policy model
//!
//! Each rule says "cancel at least `days_before` days ahead and get
//! `refund_percentage` back". Rules are evaluated in descending
//! `days_before` order; the first rule whose threshold is not above
//! the actual lead time wins. No matching rule means 0% refund.

use super::serde_helpers;
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;

pub type CancellationRuleId = RecordId;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CancellationRule {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<CancellationRuleId>,

    #[serde(with = "serde_helpers::record_id")]
    pub business_id: RecordId,

    /// Minimum lead time, in whole days, for this rule to apply
    pub days_before: i64,

    /// Refund percentage in [0, 100]
    pub refund_percentage: f64,

    pub created_at: Option<i64>,
}

/// Create rule payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CancellationRuleCreate {
    pub days_before: i64,
    pub refund_percentage: f64,
}
