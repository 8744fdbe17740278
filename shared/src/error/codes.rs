//! Unified error codes for the Reserva platform
//!
//! This module defines all error codes used across the booking server and
//! its clients. Error codes are organized by category:
//! - 0xxx: General errors
//! - 1xxx: Business / settings errors
//! - 2xxx: Scheduling / capacity errors
//! - 3xxx: Reservation lifecycle errors
//! - 4xxx: Billing / payment errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values for efficient serialization
/// and cross-language compatibility (Rust, TypeScript, etc.)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Operation completed successfully
    Success = 0,
    /// Unknown error
    Unknown = 1,
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,
    /// Invalid format
    InvalidFormat = 6,
    /// Required field missing
    RequiredField = 7,
    /// Value out of range
    ValueOutOfRange = 8,

    // ==================== 1xxx: Business / Settings ====================
    /// Business not found
    BusinessNotFound = 1001,
    /// Business is not active (pending approval or rejected)
    BusinessInactive = 1002,
    /// Business settings are incomplete for the requested operation
    SettingsIncomplete = 1003,
    /// Operating window has open >= close
    InvalidOperatingWindow = 1004,
    /// Slot duration not positive or not divisible by 5
    InvalidSlotDuration = 1005,
    /// Per-slot limit exceeds total or theoretical capacity
    SlotLimitExceedsCapacity = 1006,
    /// Room not found
    RoomNotFound = 1101,
    /// Room is inactive or out of service
    RoomNotBookable = 1102,

    // ==================== 2xxx: Scheduling / Capacity ====================
    /// Slot capacity is exhausted
    SlotFull = 2001,
    /// Requested time or stay falls outside the offered windows
    OutOfWindow = 2002,
    /// Room has a conflicting reservation for the requested stay
    RoomUnavailable = 2003,
    /// Party size exceeds the configured maximum
    PartyTooLarge = 2004,

    // ==================== 3xxx: Reservation ====================
    /// Reservation not found
    ReservationNotFound = 3001,
    /// Reservation has already been confirmed
    ReservationAlreadyConfirmed = 3002,
    /// Reservation has already been cancelled
    ReservationAlreadyCancelled = 3003,
    /// Reservation is in a state that cannot be cancelled
    ReservationNotCancellable = 3004,
    /// Check-out must be strictly after check-in
    InvalidStayRange = 3005,

    // ==================== 4xxx: Billing / Payment ====================
    /// Invoice not found
    InvoiceNotFound = 4001,
    /// Invoice already exists for this reservation
    InvoiceAlreadyExists = 4002,
    /// Payment record not found
    PaymentNotFound = 4101,
    /// Payment processing failed
    PaymentFailed = 4102,
    /// Payment has already been refunded
    PaymentAlreadyRefunded = 4103,
    /// Refund amount exceeds the original payment
    RefundExceedsAmount = 4104,
    /// Cancellation policy rule not found
    PolicyNotFound = 4201,
    /// Refund percentage outside [0, 100]
    InvalidRefundPercentage = 4202,

    // ==================== 9xxx: System ====================
    /// Internal server error
    InternalError = 9001,
    /// Database error
    DatabaseError = 9002,
    /// Network error
    NetworkError = 9003,
    /// Operation timeout
    TimeoutError = 9004,
    /// Configuration error
    ConfigError = 9005,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Check if this is a success code
    #[inline]
    pub const fn is_success(&self) -> bool {
        matches!(self, ErrorCode::Success)
    }

    /// Get the developer-facing English message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::Success => "Operation completed successfully",
            ErrorCode::Unknown => "An unknown error occurred",
            ErrorCode::ValidationFailed => "Validation failed",
            ErrorCode::NotFound => "Resource not found",
            ErrorCode::AlreadyExists => "Resource already exists",
            ErrorCode::InvalidRequest => "Invalid request",
            ErrorCode::InvalidFormat => "Invalid format",
            ErrorCode::RequiredField => "Required field is missing",
            ErrorCode::ValueOutOfRange => "Value is out of range",

            // Business / Settings
            ErrorCode::BusinessNotFound => "Business not found",
            ErrorCode::BusinessInactive => "Business is not active",
            ErrorCode::SettingsIncomplete => "Business settings are incomplete",
            ErrorCode::InvalidOperatingWindow => "Operating window must open before it closes",
            ErrorCode::InvalidSlotDuration => {
                "Slot duration must be a positive number divisible by 5"
            }
            ErrorCode::SlotLimitExceedsCapacity => "Per-slot limit cannot exceed capacity",
            ErrorCode::RoomNotFound => "Room not found",
            ErrorCode::RoomNotBookable => "Room is not bookable",

            // Scheduling / Capacity
            ErrorCode::SlotFull => "Slot capacity is exhausted",
            ErrorCode::OutOfWindow => "Requested time falls outside the offered windows",
            ErrorCode::RoomUnavailable => "Room has a conflicting reservation",
            ErrorCode::PartyTooLarge => "Party size exceeds the configured maximum",

            // Reservation
            ErrorCode::ReservationNotFound => "Reservation not found",
            ErrorCode::ReservationAlreadyConfirmed => "Reservation has already been confirmed",
            ErrorCode::ReservationAlreadyCancelled => "Reservation has already been cancelled",
            ErrorCode::ReservationNotCancellable => "Reservation cannot be cancelled",
            ErrorCode::InvalidStayRange => "Check-out must be after check-in",

            // Billing / Payment
            ErrorCode::InvoiceNotFound => "Invoice not found",
            ErrorCode::InvoiceAlreadyExists => "Invoice already exists for this reservation",
            ErrorCode::PaymentNotFound => "Payment record not found",
            ErrorCode::PaymentFailed => "Payment processing failed",
            ErrorCode::PaymentAlreadyRefunded => "Payment has already been refunded",
            ErrorCode::RefundExceedsAmount => "Refund amount exceeds original payment",
            ErrorCode::PolicyNotFound => "Cancellation policy rule not found",
            ErrorCode::InvalidRefundPercentage => "Refund percentage must be between 0 and 100",

            // System
            ErrorCode::InternalError => "Internal server error",
            ErrorCode::DatabaseError => "Database error",
            ErrorCode::NetworkError => "Network error",
            ErrorCode::TimeoutError => "Operation timed out",
            ErrorCode::ConfigError => "Configuration error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            0 => Ok(ErrorCode::Success),
            1 => Ok(ErrorCode::Unknown),
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),
            6 => Ok(ErrorCode::InvalidFormat),
            7 => Ok(ErrorCode::RequiredField),
            8 => Ok(ErrorCode::ValueOutOfRange),

            // Business / Settings
            1001 => Ok(ErrorCode::BusinessNotFound),
            1002 => Ok(ErrorCode::BusinessInactive),
            1003 => Ok(ErrorCode::SettingsIncomplete),
            1004 => Ok(ErrorCode::InvalidOperatingWindow),
            1005 => Ok(ErrorCode::InvalidSlotDuration),
            1006 => Ok(ErrorCode::SlotLimitExceedsCapacity),
            1101 => Ok(ErrorCode::RoomNotFound),
            1102 => Ok(ErrorCode::RoomNotBookable),

            // Scheduling / Capacity
            2001 => Ok(ErrorCode::SlotFull),
            2002 => Ok(ErrorCode::OutOfWindow),
            2003 => Ok(ErrorCode::RoomUnavailable),
            2004 => Ok(ErrorCode::PartyTooLarge),

            // Reservation
            3001 => Ok(ErrorCode::ReservationNotFound),
            3002 => Ok(ErrorCode::ReservationAlreadyConfirmed),
            3003 => Ok(ErrorCode::ReservationAlreadyCancelled),
            3004 => Ok(ErrorCode::ReservationNotCancellable),
            3005 => Ok(ErrorCode::InvalidStayRange),

            // Billing / Payment
            4001 => Ok(ErrorCode::InvoiceNotFound),
            4002 => Ok(ErrorCode::InvoiceAlreadyExists),
            4101 => Ok(ErrorCode::PaymentNotFound),
            4102 => Ok(ErrorCode::PaymentFailed),
            4103 => Ok(ErrorCode::PaymentAlreadyRefunded),
            4104 => Ok(ErrorCode::RefundExceedsAmount),
            4201 => Ok(ErrorCode::PolicyNotFound),
            4202 => Ok(ErrorCode::InvalidRefundPercentage),

            // System
            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),
            9003 => Ok(ErrorCode::NetworkError),
            9004 => Ok(ErrorCode::TimeoutError),
            9005 => Ok(ErrorCode::ConfigError),

            other => Err(InvalidErrorCode(other)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_values() {
        assert_eq!(ErrorCode::Success.code(), 0);
        assert_eq!(ErrorCode::BusinessNotFound.code(), 1001);
        assert_eq!(ErrorCode::SlotFull.code(), 2001);
        assert_eq!(ErrorCode::ReservationNotFound.code(), 3001);
        assert_eq!(ErrorCode::InvoiceAlreadyExists.code(), 4002);
        assert_eq!(ErrorCode::DatabaseError.code(), 9002);
    }

    #[test]
    fn test_round_trip() {
        for code in [
            ErrorCode::Success,
            ErrorCode::ValidationFailed,
            ErrorCode::BusinessNotFound,
            ErrorCode::SlotFull,
            ErrorCode::OutOfWindow,
            ErrorCode::RoomUnavailable,
            ErrorCode::ReservationNotFound,
            ErrorCode::PaymentAlreadyRefunded,
            ErrorCode::InternalError,
        ] {
            let value: u16 = code.into();
            assert_eq!(ErrorCode::try_from(value).unwrap(), code);
        }
    }

    #[test]
    fn test_invalid_code() {
        assert!(ErrorCode::try_from(999).is_err());
        assert!(ErrorCode::try_from(12345).is_err());
    }

    #[test]
    fn test_serde_as_u16() {
        let json = serde_json::to_string(&ErrorCode::SlotFull).unwrap();
        assert_eq!(json, "2001");
        let code: ErrorCode = serde_json::from_str("2002").unwrap();
        assert_eq!(code, ErrorCode::OutOfWindow);
    }
}
