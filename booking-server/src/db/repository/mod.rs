//! Repository Module
//!
//! CRUD and query access to the SurrealDB tables. Repositories never
//! swallow storage failures: every error propagates to the caller so an
//! availability decision can never under-count occupancy because of a
//! failed read.

// Tenants
pub mod business;
pub mod room;

// Bookings
pub mod reservation;

// Billing
pub mod invoice;
pub mod payment;
pub mod policy;

// Re-exports
pub use business::BusinessRepository;
pub use invoice::InvoiceRepository;
pub use payment::PaymentRepository;
pub use policy::PolicyRepository;
pub use reservation::ReservationRepository;
pub use room::RoomRepository;

use shared::{AppError, ErrorCode};
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Database error: {0}")]
    Database(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::with_message(ErrorCode::NotFound, msg),
            RepoError::Duplicate(msg) => AppError::with_message(ErrorCode::AlreadyExists, msg),
            RepoError::Database(msg) => AppError::database(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

// =============================================================================
// ID Convention: "table:id" strings everywhere outside the database
// =============================================================================
//
// surrealdb::RecordId handles all ids:
//   - parse:       let id: RecordId = "business:abc".parse()?;
//   - construct:   RecordId::from_table_key("business", "abc")
//   - table name:  id.table()
//   - bare key:    id.key().to_string()
//   - CRUD:        db.select(id) / db.delete(id) take RecordId directly

/// Base repository with database reference
#[derive(Clone)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }

    /// Parse a "table:id" string, rejecting malformed ids
    pub fn parse_id(&self, id: &str, what: &str) -> RepoResult<surrealdb::RecordId> {
        id.parse()
            .map_err(|_| RepoError::NotFound(format!("Invalid {} ID format: {}", what, id)))
    }
}
