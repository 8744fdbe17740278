//! Booking engine
//!
//! Pure scheduling logic (slots, overlap, pricing, refund policy) plus
//! the admission path that ties it to storage. The pure parts take
//! settings and reservation snapshots as plain values so they can be
//! tested without a database.

pub mod availability;
pub mod ledger;
pub mod lifecycle;
pub mod locks;
pub mod money;
pub mod policy;
pub mod pricing;
pub mod settings;
pub mod slots;

pub use availability::AvailabilityEngine;
pub use ledger::CapacityLedger;
pub use lifecycle::ReservationLifecycle;
pub use locks::SlotLocks;
pub use settings::SettingsResolver;
