//! Money arithmetic
//!
//! Amounts live as `f64` on the wire and in storage; all intermediate
//! arithmetic goes through `Decimal` and is rounded to two decimal
//! places, half away from zero, at the boundary.

use rust_decimal::prelude::*;
use rust_decimal::Decimal;

/// Round a raw amount to two decimal places, half away from zero
pub fn round_amount(amount: f64) -> f64 {
    Decimal::from_f64(amount)
        .unwrap_or(Decimal::ZERO)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or(0.0)
}

/// `amount × quantity`, rounded
pub fn multiply(amount: f64, quantity: u32) -> f64 {
    let value = Decimal::from_f64(amount).unwrap_or(Decimal::ZERO) * Decimal::from(quantity);
    value
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or(0.0)
}

/// `amount × pct / 100`, rounded
pub fn percentage(amount: f64, pct: f64) -> f64 {
    let value = Decimal::from_f64(amount).unwrap_or(Decimal::ZERO)
        * Decimal::from_f64(pct).unwrap_or(Decimal::ZERO)
        / Decimal::from(100);
    value
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .to_f64()
        .unwrap_or(0.0)
}

/// Equality within a cent, for comparing stored totals
pub fn amounts_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < 0.01
}
