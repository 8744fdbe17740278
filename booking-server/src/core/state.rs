//! Server state - shared service singletons
//!
//! One `ServerState` is built at startup and cloned into every
//! handler; everything inside is either `Clone`-cheap (the SurrealDB
//! handle) or behind an `Arc`.

use std::sync::Arc;

use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::booking::{
    AvailabilityEngine, CapacityLedger, ReservationLifecycle, SettingsResolver, SlotLocks,
};
use crate::core::Config;
use crate::db::DbService;
use crate::db::repository::{
    BusinessRepository, InvoiceRepository, PaymentRepository, PolicyRepository,
    ReservationRepository, RoomRepository,
};
use crate::services::notification::Notifier;
use crate::services::{InvoiceService, LogGateway, NullNotifier, PaymentService, WebhookNotifier};

#[derive(Clone)]
pub struct ServerState {
    /// Server configuration
    pub config: Config,
    /// Embedded database (SurrealDB)
    pub db: Surreal<Db>,
    /// Business profile loader
    pub settings: Arc<SettingsResolver>,
    /// Slot/room availability decisions
    pub engine: Arc<AvailabilityEngine>,
    /// Occupancy reads
    pub ledger: Arc<CapacityLedger>,
    /// Reservation create/confirm/cancel orchestration
    pub lifecycle: Arc<ReservationLifecycle>,
    /// Invoice issuance and lookups
    pub invoices: Arc<InvoiceService>,
    /// Payment capture and refunds
    pub payments: Arc<PaymentService>,
}

impl ServerState {
    /// Initialize the full service graph on top of an opened database
    pub fn build(config: Config, db: Surreal<Db>) -> Self {
        let businesses = Arc::new(BusinessRepository::new(db.clone()));
        let rooms = Arc::new(RoomRepository::new(db.clone()));
        let reservations = Arc::new(ReservationRepository::new(db.clone()));
        let policies = Arc::new(PolicyRepository::new(db.clone()));
        let invoice_repo = Arc::new(InvoiceRepository::new(db.clone()));
        let payment_repo = Arc::new(PaymentRepository::new(db.clone()));

        let settings = Arc::new(SettingsResolver::new(businesses));
        let ledger = Arc::new(CapacityLedger::new(reservations.clone()));
        let engine = Arc::new(AvailabilityEngine::new(ledger.clone(), rooms));
        let locks = Arc::new(SlotLocks::new());

        let payments = Arc::new(PaymentService::new(Arc::new(LogGateway), payment_repo));
        let invoices = Arc::new(InvoiceService::new(invoice_repo));

        let notifier: Arc<dyn Notifier> = match &config.webhook_url {
            Some(url) => Arc::new(WebhookNotifier::new(url.clone())),
            None => Arc::new(NullNotifier),
        };

        let lifecycle = Arc::new(ReservationLifecycle::new(
            settings.clone(),
            engine.clone(),
            ledger.clone(),
            locks,
            reservations,
            policies,
            payments.clone(),
            invoices.clone(),
            notifier,
        ));

        Self {
            config,
            db,
            settings,
            engine,
            ledger,
            lifecycle,
            invoices,
            payments,
        }
    }

    /// Open the database under the configured work dir and build the
    /// service graph.
    pub async fn initialize(config: &Config) -> Self {
        std::fs::create_dir_all(&config.work_dir)
            .expect("Failed to create work directory");

        let db_service = DbService::new(&config.db_path())
            .await
            .expect("Failed to initialize database");
        Self::build(config.clone(), db_service.db)
    }

    /// State over an in-memory database (tests)
    pub async fn in_memory() -> Self {
        let db_service = DbService::memory()
            .await
            .expect("Failed to initialize in-memory database");
        Self::build(Config::with_overrides("/tmp/reserva-test", 0), db_service.db)
    }
}
