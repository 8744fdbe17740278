
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

use crate::db::models::Invoice;

use super::{BaseRepository, RepoError, RepoResult};

const TABLE: &str = "invoice";

pub struct InvoiceRepository {
    base: BaseRepository,
}

impl InvoiceRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Insert an invoice. The unique index on `reservation_id` rejects
    /// a second invoice for the same reservation, which callers treat
    /// as "already issued" rather than a failure.
    pub async fn create(&self, mut invoice: Invoice) -> RepoResult<Invoice> {
        invoice.id = None;
        let created: Result<Option<Invoice>, surrealdb::Error> =
            self.base.db().create(TABLE).content(invoice).await;
        match created {
            Ok(Some(invoice)) => Ok(invoice),
            Ok(None) => Err(RepoError::Database("invoice insert returned nothing".into())),
            Err(err) => {
                let message = err.to_string();
                if message.contains("invoice_reservation") || message.contains("already contains") {
                    Err(RepoError::Duplicate("invoice for reservation".into()))
                } else {
                    Err(err.into())
                }
            }
        }
    }

    pub async fn find_by_id(&self, id: &str) -> RepoResult<Invoice> {
        let rid = self.base.parse_id(id, TABLE)?;
        let invoice: Option<Invoice> = self.base.db().select(rid).await?;
        invoice.ok_or_else(|| RepoError::NotFound(format!("invoice {}", id)))
    }

    pub async fn find_by_reservation(
        &self,
        reservation_id: &RecordId,
    ) -> RepoResult<Option<Invoice>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM invoice WHERE reservation_id = $reservation LIMIT 1")
            .bind(("reservation", reservation_id.to_string()))
            .await?;
        let invoice: Option<Invoice> = result.take(0)?;
        Ok(invoice)
    }

    pub async fn find_by_business(&self, business_id: &RecordId) -> RepoResult<Vec<Invoice>> {
        let mut result = self
            .base
            .db()
            .query(
                "SELECT * FROM invoice WHERE business_id = $business ORDER BY issued_at DESC",
            )
            .bind(("business", business_id.to_string()))
            .await?;
        let invoices: Vec<Invoice> = result.take(0)?;
        Ok(invoices)
    }

    /// Remove any invoice tied to a reservation, used when the
    /// reservation itself is deleted.
    pub async fn delete_for(&self, reservation_id: &RecordId) -> RepoResult<()> {
        self.base
            .db()
            .query("DELETE invoice WHERE reservation_id = $reservation")
            .bind(("reservation", reservation_id.to_string()))
            .await?;
        Ok(())
    }
}
