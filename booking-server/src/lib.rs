//! Reserva Booking Server - multi-tenant reservation backend
//!
//! # Architecture overview
//!
//! The server is a thin REST surface over the reservation availability and
//! capacity-allocation engine:
//!
//! - **Engine** (`booking`): slot generation, capacity ledger, availability
//!   decisions, pricing, cancellation policies, and the reservation lifecycle
//! - **Database** (`db`): embedded SurrealDB storage and repositories
//! - **Services** (`services`): invoicing, payment gateway, notifications
//! - **HTTP API** (`api`): axum routers and handlers
//!
//! # Module structure
//!
//! ```text
//! booking-server/src/
//! ├── core/          # configuration, state, server
//! ├── booking/       # availability + lifecycle engine
//! ├── services/      # invoice, payment, notification
//! ├── api/           # HTTP routes and handlers
//! ├── utils/         # logging, time, validation helpers
//! └── db/            # database layer
//! ```

pub mod api;
pub mod booking;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

// Re-export public types
pub use booking::{
    AvailabilityEngine, CapacityLedger, ReservationLifecycle, SettingsResolver, SlotLocks,
};
pub use core::{Config, Server, ServerState};
pub use db::DbService;
pub use utils::{AppError, AppResult};

// Re-export unified error types from shared
pub use shared::{ApiResponse, ErrorCategory, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};
