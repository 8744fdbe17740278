//! Utility module - shared helpers
//!
//! - [`AppError`] / [`AppResult`] - unified error types (from shared)
//! - logging, time parsing, and request validation helpers

pub mod logger;
pub mod time;
pub mod validation;

// Re-export error types from shared so engine code has one import path
pub use shared::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};
