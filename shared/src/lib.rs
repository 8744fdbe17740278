//! Shared types for the Reserva booking platform
//!
//! Common types used across crates: error codes and responses,
//! domain enums, and wire DTOs for booking requests and views.

pub mod error;
pub mod request;
pub mod response;
pub mod types;

// Re-exports
pub use axum::{Json, body};
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
pub use types::{
    BookingSource, BusinessKind, CancelInitiator, PaymentStatus, ReservationStatus, RoomStatus,
};
