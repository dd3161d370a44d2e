// src/services/calculation.rs
//
// Prices are plain `f64` dollars; results are rounded to cents by scaling by
// 100, rounding half away from zero and scaling back.

use crate::error::AppError;
use crate::models::pricing_profile::{Adjustment, AdjustmentMode, AdjustmentType};

pub const NEGATIVE_PRICE: &str = "Calculated price cannot be negative. Adjustment value is too large.";
pub const PRICE_OUT_OF_RANGE: &str = "Calculated price is out of range";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceChange {
    /// Signed: negative for decreases.
    pub adjustment: f64,
    pub new_price: f64,
}

pub fn round_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

/// Apply one adjustment to `base_price`.
///
/// Rejects (never clamps) a result below zero. A result of exactly zero is allowed.
pub fn compute(base_price: f64, adjustment: &Adjustment) -> Result<PriceChange, AppError> {
    if !base_price.is_finite() {
        return Err(AppError::validation("Base price must be a finite number"));
    }
    if !adjustment.value.is_finite() {
        return Err(AppError::validation("Adjustment value must be a finite number"));
    }

    let magnitude = match adjustment.kind {
        AdjustmentType::Fixed => adjustment.value,
        AdjustmentType::Dynamic => base_price * (adjustment.value / 100.0),
    };
    let signed = match adjustment.mode {
        AdjustmentMode::Increase => magnitude,
        AdjustmentMode::Decrease => -magnitude,
    };
    let new_price = base_price + signed;

    if new_price < 0.0 {
        return Err(AppError::domain(NEGATIVE_PRICE));
    }

    let change = PriceChange {
        adjustment: round_cents(signed),
        new_price: round_cents(new_price),
    };
    // Scaling to cents can overflow long before the raw value does.
    if !(signed.is_finite()
        && new_price.is_finite()
        && change.adjustment.is_finite()
        && change.new_price.is_finite())
    {
        return Err(AppError::validation(PRICE_OUT_OF_RANGE));
    }

    Ok(change)
}
