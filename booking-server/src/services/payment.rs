//! Payment gateway abstraction
//!
//! The platform never talks to a processor directly; it goes through
//! the `PaymentGateway` trait so tests and development run against the
//! logging gateway.

use std::sync::Arc;

use async_trait::async_trait;
use surrealdb::RecordId;
use tracing::info;
use uuid::Uuid;

use shared::{AppError, AppResult, ErrorCode, PaymentStatus};

use crate::booking::money;
use crate::db::models::PaymentRecord;
use crate::db::repository::PaymentRepository;

/// Outcome of a gateway charge or refund
#[derive(Debug, Clone)]
pub struct GatewayReceipt {
    /// Gateway-side reference for the operation
    pub reference: String,
}

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Capture a payment for a reservation
    async fn charge(&self, reservation_id: &str, amount: f64) -> AppResult<GatewayReceipt>;

    /// Refund part or all of a captured payment
    async fn refund(&self, intent_ref: &str, amount: f64) -> AppResult<GatewayReceipt>;
}

/// Gateway that records operations in the log and always succeeds.
/// Used in development and tests.
#[derive(Debug, Default)]
pub struct LogGateway;

#[async_trait]
impl PaymentGateway for LogGateway {
    async fn charge(&self, reservation_id: &str, amount: f64) -> AppResult<GatewayReceipt> {
        let reference = format!("pi_{}", Uuid::new_v4().simple());
        info!(reservation_id, amount, reference, "payment captured");
        Ok(GatewayReceipt { reference })
    }

    async fn refund(&self, intent_ref: &str, amount: f64) -> AppResult<GatewayReceipt> {
        let reference = format!("re_{}", Uuid::new_v4().simple());
        info!(intent_ref, amount, reference, "payment refunded");
        Ok(GatewayReceipt { reference })
    }
}

/// Payment orchestration over the gateway and the payment table
pub struct PaymentService {
    gateway: Arc<dyn PaymentGateway>,
    payments: Arc<PaymentRepository>,
}

impl PaymentService {
    pub fn new(gateway: Arc<dyn PaymentGateway>, payments: Arc<PaymentRepository>) -> Self {
        Self { gateway, payments }
    }

    /// Record a pending payment for a newly created reservation
    pub async fn open(&self, reservation_id: RecordId, amount: f64) -> AppResult<PaymentRecord> {
        let record = PaymentRecord {
            id: None,
            reservation_id,
            amount: money::round_amount(amount),
            status: PaymentStatus::Pending,
            intent_ref: None,
            refund_ref: None,
            refunded_amount: None,
            created_at: None,
            updated_at: None,
        };
        Ok(self.payments.create(record).await?)
    }

    /// Capture the payment for a reservation being confirmed
    pub async fn capture(&self, reservation_id: &RecordId) -> AppResult<PaymentRecord> {
        let payment = self
            .payments
            .find_by_reservation(reservation_id)
            .await?
            .ok_or_else(|| {
                AppError::with_message(
                    ErrorCode::PaymentNotFound,
                    format!("No payment for reservation {}", reservation_id),
                )
            })?;

        if payment.status == PaymentStatus::Paid {
            return Ok(payment);
        }

        let receipt = self
            .gateway
            .charge(&payment.reservation_id.to_string(), payment.amount)
            .await
            .map_err(|err| {
                AppError::with_message(
                    ErrorCode::PaymentFailed,
                    format!("Payment capture failed: {}", err.message),
                )
            })?;

        let id = payment
            .id
            .ok_or_else(|| AppError::internal("payment record missing id"))?;
        Ok(self.payments.mark_paid(&id, Some(receipt.reference)).await?)
    }

    /// Refund `amount` of a captured payment. A zero amount skips the
    /// gateway and leaves the record paid.
    pub async fn refund(
        &self,
        reservation_id: &RecordId,
        amount: f64,
    ) -> AppResult<Option<PaymentRecord>> {
        let Some(payment) = self.payments.find_by_reservation(reservation_id).await? else {
            return Ok(None);
        };

        if payment.status == PaymentStatus::Refunded {
            return Err(AppError::with_message(
                ErrorCode::PaymentAlreadyRefunded,
                format!("Payment for {} was already refunded", reservation_id),
            ));
        }
        if payment.status != PaymentStatus::Paid {
            return Ok(Some(payment));
        }
        if amount > payment.amount {
            return Err(AppError::with_message(
                ErrorCode::RefundExceedsAmount,
                format!(
                    "Refund {} exceeds captured amount {}",
                    amount, payment.amount
                ),
            ));
        }
        if amount <= 0.0 {
            return Ok(Some(payment));
        }

        let intent_ref = payment.intent_ref.clone().unwrap_or_default();
        let receipt = self.gateway.refund(&intent_ref, amount).await?;

        let id = payment
            .id
            .ok_or_else(|| AppError::internal("payment record missing id"))?;
        let updated = self
            .payments
            .mark_refunded(&id, amount, Some(receipt.reference))
            .await?;
        Ok(Some(updated))
    }

    pub async fn find(&self, reservation_id: &RecordId) -> AppResult<Option<PaymentRecord>> {
        Ok(self.payments.find_by_reservation(reservation_id).await?)
    }

    /// Drop payment records when a reservation is hard-deleted
    pub async fn purge(&self, reservation_id: &RecordId) -> AppResult<()> {
        self.payments.delete_for(reservation_id).await?;
        Ok(())
    }
}
