//! Error category classification

use super::codes::ErrorCode;
use serde::{Deserialize, Serialize};

/// Error category classification based on error code ranges
///
/// Categories are determined by the leading digit of the error code:
/// - 0xxx: General errors
/// - 1xxx: Business / settings errors
/// - 2xxx: Scheduling / capacity errors
/// - 3xxx: Reservation lifecycle errors
/// - 4xxx: Billing / payment errors
/// - 9xxx: System errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// General errors (0xxx)
    General,
    /// Business / settings errors (1xxx)
    Business,
    /// Scheduling / capacity errors (2xxx)
    Scheduling,
    /// Reservation lifecycle errors (3xxx)
    Reservation,
    /// Billing / payment errors (4xxx)
    Billing,
    /// System errors (9xxx)
    System,
}

impl ErrorCategory {
    /// Determine category from error code value
    pub fn from_code(code: u16) -> Self {
        match code {
            0..1000 => Self::General,
            1000..2000 => Self::Business,
            2000..3000 => Self::Scheduling,
            3000..4000 => Self::Reservation,
            4000..5000 => Self::Billing,
            _ => Self::System,
        }
    }

    /// Get the string name for this category
    pub fn name(&self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Business => "business",
            Self::Scheduling => "scheduling",
            Self::Reservation => "reservation",
            Self::Billing => "billing",
            Self::System => "system",
        }
    }
}

impl ErrorCode {
    /// Get the category for this error code
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::from_code(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_code() {
        assert_eq!(ErrorCategory::from_code(0), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(8), ErrorCategory::General);
        assert_eq!(ErrorCategory::from_code(999), ErrorCategory::General);

        assert_eq!(ErrorCategory::from_code(1001), ErrorCategory::Business);
        assert_eq!(ErrorCategory::from_code(1102), ErrorCategory::Business);

        assert_eq!(ErrorCategory::from_code(2001), ErrorCategory::Scheduling);
        assert_eq!(ErrorCategory::from_code(3001), ErrorCategory::Reservation);
        assert_eq!(ErrorCategory::from_code(4001), ErrorCategory::Billing);
        assert_eq!(ErrorCategory::from_code(9001), ErrorCategory::System);
        assert_eq!(ErrorCategory::from_code(10000), ErrorCategory::System);
    }

    #[test]
    fn test_error_code_category() {
        assert_eq!(ErrorCode::Success.category(), ErrorCategory::General);
        assert_eq!(
            ErrorCode::BusinessNotFound.category(),
            ErrorCategory::Business
        );
        assert_eq!(ErrorCode::SlotFull.category(), ErrorCategory::Scheduling);
        assert_eq!(
            ErrorCode::ReservationNotFound.category(),
            ErrorCategory::Reservation
        );
        assert_eq!(ErrorCode::PaymentFailed.category(), ErrorCategory::Billing);
        assert_eq!(ErrorCode::DatabaseError.category(), ErrorCategory::System);
    }

    #[test]
    fn test_category_name() {
        assert_eq!(ErrorCategory::Scheduling.name(), "scheduling");
        assert_eq!(ErrorCategory::Billing.name(), "billing");
    }
}
