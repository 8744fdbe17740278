
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

use shared::PaymentStatus;

use crate::db::models::PaymentRecord;
use crate::utils::time::now_millis;

use super::{BaseRepository, RepoError, RepoResult};

const TABLE: &str = "payment";

pub struct PaymentRepository {
    base: BaseRepository,
}

impl PaymentRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    pub async fn create(&self, mut payment: PaymentRecord) -> RepoResult<PaymentRecord> {
        let now = now_millis();
        payment.id = None;
        payment.created_at = Some(now);
        payment.updated_at = Some(now);
        let created: Option<PaymentRecord> =
            self.base.db().create(TABLE).content(payment).await?;
        created.ok_or_else(|| RepoError::Database("payment insert returned nothing".into()))
    }

    pub async fn find_by_reservation(
        &self,
        reservation_id: &RecordId,
    ) -> RepoResult<Option<PaymentRecord>> {
        let mut result = self
            .base
            .db()
            .query(
                "SELECT * FROM payment \
                 WHERE reservation_id = $reservation \
                 ORDER BY created_at DESC LIMIT 1",
            )
            .bind(("reservation", reservation_id.to_string()))
            .await?;
        let payment: Option<PaymentRecord> = result.take(0)?;
        Ok(payment)
    }

    pub async fn mark_paid(&self, id: &RecordId, intent_ref: Option<String>) -> RepoResult<PaymentRecord> {
        let mut result = self
            .base
            .db()
            .query(
                "UPDATE $payment SET status = $status, intent_ref = $intent_ref, \
                 updated_at = $now RETURN AFTER",
            )
            .bind(("payment", id.clone()))
            .bind(("status", PaymentStatus::Paid))
            .bind(("intent_ref", intent_ref))
            .bind(("now", now_millis()))
            .await?;
        let updated: Option<PaymentRecord> = result.take(0)?;
        updated.ok_or_else(|| RepoError::NotFound(format!("payment {}", id)))
    }

    pub async fn mark_refunded(
        &self,
        id: &RecordId,
        refunded_amount: f64,
        refund_ref: Option<String>,
    ) -> RepoResult<PaymentRecord> {
        let mut result = self
            .base
            .db()
            .query(
                "UPDATE $payment SET status = $status, refunded_amount = $refunded_amount, \
                 refund_ref = $refund_ref, updated_at = $now RETURN AFTER",
            )
            .bind(("payment", id.clone()))
            .bind(("status", PaymentStatus::Refunded))
            .bind(("refunded_amount", refunded_amount))
            .bind(("refund_ref", refund_ref))
            .bind(("now", now_millis()))
            .await?;
        let updated: Option<PaymentRecord> = result.take(0)?;
        updated.ok_or_else(|| RepoError::NotFound(format!("payment {}", id)))
    }

    pub async fn delete_for(&self, reservation_id: &RecordId) -> RepoResult<()> {
        self.base
            .db()
            .query("DELETE payment WHERE reservation_id = $reservation")
            .bind(("reservation", reservation_id.to_string()))
            .await?;
        Ok(())
    }
}
