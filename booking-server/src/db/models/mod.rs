//! Database Models

// Serde helpers
pub mod serde_helpers;

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
pub use business::{
    BusinessCreate, BusinessId, BusinessProfile, BusinessSettings, BusinessUpdate,
    CustomTableGroup, DatePeriod, OperatingWindow, TableInventory, Weekday,
};
pub use invoice::{Invoice, InvoiceId, InvoiceItem};
pub use payment::{PaymentRecord, PaymentRecordId};
pub use policy::{CancellationRule, CancellationRuleCreate, CancellationRuleId};
pub use reservation::{Reservation, ReservationFilter, ReservationId, ReservationUpdate};
pub use room::{Room, RoomCreate, RoomId, RoomUpdate};
