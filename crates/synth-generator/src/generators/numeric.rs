//! Numeric value generators.

use rand::Rng;
use synth_core::FieldValue;

/// Lower bound used when an integer field declares none.
pub const DEFAULT_INT_MIN: i64 = 0;
/// Upper bound used when an integer field declares none.
pub const DEFAULT_INT_MAX: i64 = 1000;
/// Lower bound used when a float field declares none.
pub const DEFAULT_FLOAT_MIN: f64 = 0.0;
/// Upper bound used when a float field declares none.
pub const DEFAULT_FLOAT_MAX: f64 = 1000.0;

/// Generate a random integer in the given inclusive range.
///
/// Absent bounds fall back to the documented defaults.
pub fn generate_int<R: Rng + ?Sized>(
    rng: &mut R,
    min: Option<f64>,
    max: Option<f64>,
) -> FieldValue {
    let min = min.map(|v| v as i64).unwrap_or(DEFAULT_INT_MIN);
    let max = max.map(|v| v as i64).unwrap_or(DEFAULT_INT_MAX);
    FieldValue::Int(rng.gen_range(min..=max))
}

/// Generate a random float in the given inclusive range, rounded to 2
/// decimal places.
pub fn generate_float<R: Rng + ?Sized>(
    rng: &mut R,
    min: Option<f64>,
    max: Option<f64>,
) -> FieldValue {
    let min = min.unwrap_or(DEFAULT_FLOAT_MIN);
    let max = max.unwrap_or(DEFAULT_FLOAT_MAX);
    let value = rng.gen_range(min..=max);
    FieldValue::Float((value * 100.0).round() / 100.0)
}
