//! Database Module
//!
//! Embedded SurrealDB storage: connection setup, namespace selection,
//! and index definitions.

pub mod models;
pub mod repository;

use shared::AppError;
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, Mem, RocksDb};

const NAMESPACE: &str = "reserva";
const DATABASE: &str = "booking";

/// Database service — owns the embedded SurrealDB handle
#[derive(Clone)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open the RocksDB-backed datastore under the given path
    pub async fn new(db_path: &str) -> Result<Self, AppError> {
        let db: Surreal<Db> = Surreal::new::<RocksDb>(db_path)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;
        Self::prepare(db).await
    }

    /// Open an in-memory datastore (tests)
    pub async fn memory() -> Result<Self, AppError> {
        let db: Surreal<Db> = Surreal::new::<Mem>(())
            .await
            .map_err(|e| AppError::database(format!("Failed to open in-memory database: {e}")))?;
        Self::prepare(db).await
    }

    async fn prepare(db: Surreal<Db>) -> Result<Self, AppError> {
        db.use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        define_indexes(&db).await?;

        tracing::info!("Database connection established (SurrealDB embedded)");
        Ok(Self { db })
    }
}

/// Define lookup indexes at startup (idempotent)
async fn define_indexes(db: &Surreal<Db>) -> Result<(), AppError> {
    db.query(
        r#"
        DEFINE INDEX IF NOT EXISTS reservation_business_date
            ON reservation FIELDS business_id, date;
        DEFINE INDEX IF NOT EXISTS reservation_business_stay
            ON reservation FIELDS business_id, check_in;
        DEFINE INDEX IF NOT EXISTS reservation_room
            ON reservation FIELDS room_id;
        DEFINE INDEX IF NOT EXISTS invoice_reservation
            ON invoice FIELDS reservation_id UNIQUE;
        DEFINE INDEX IF NOT EXISTS payment_reservation
            ON payment FIELDS reservation_id;
        DEFINE INDEX IF NOT EXISTS policy_business
            ON cancellation_rule FIELDS business_id;
        DEFINE INDEX IF NOT EXISTS room_business
            ON room FIELDS business_id;
        "#,
    )
    .await
    .map_err(|e| AppError::database(format!("Failed to define indexes: {e}")))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize, Deserialize)]
    struct Probe {
        label: String,
    }

    #[tokio::test]
    async fn opens_rocksdb_store_and_round_trips_a_record() {
        let dir = tempfile::tempdir().unwrap();
        let service = DbService::new(dir.path().to_str().unwrap()).await.unwrap();

        let created: Option<Probe> = service
            .db
            .create("probe")
            .content(Probe {
                label: "hello".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(created.unwrap().label, "hello");

        let rows: Vec<Probe> = service.db.select("probe").await.unwrap();
        assert_eq!(rows.len(), 1);
    }

    #[tokio::test]
    async fn index_definitions_are_idempotent() {
        let service = DbService::memory().await.unwrap();
        define_indexes(&service.db).await.unwrap();
    }
}
