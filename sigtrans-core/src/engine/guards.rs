//! Numeric Guards for the Calculation Pipeline
//!
//! ## Overview
//!
//! The pipeline works in decibels, which means logarithms of voltages,
//! distances and ratios. Those blow up in predictable ways:
//!
//! ```text
//! log10(0)    = -inf      zero voltage or distance
//! log10(-1)   = NaN       negative input
//! 10^(4000/10) = inf      absurd SNR
//! inf - inf   = NaN       propagated infinities
//! ```
//!
//! The guards here catch each of these at the point of computation and swap in
//! a fallback, so the pipeline always completes with finite numbers.
//!
//! ## Policy
//!
//! - Inputs: NaN or infinite → nominal value, then clamp to floor and ceiling
//! - `log10(x ≤ 0)` → `-inf` explicitly (never NaN); the caller then guards
//! - `log2(x ≤ 0)` → 0
//! - Any non-finite intermediate → the fallback documented at its call site

use crate::engine::{CalculationInput, EngineConfig};
use crate::traits::Validatable;

/// Replace NaN or infinite values with a fallback
pub fn safe_number(value: f64, fallback: f64) -> f64 {
    if value.is_valid() {
        value
    } else {
        fallback
    }
}

/// `log10` with an explicit `-inf` for non-positive arguments
pub fn safe_log10(value: f64) -> f64 {
    if value <= 0.0 {
        f64::NEG_INFINITY
    } else {
        libm::log10(value)
    }
}

/// `log2` returning 0 for non-positive arguments
pub fn safe_log2(value: f64) -> f64 {
    if value <= 0.0 {
        0.0
    } else {
        libm::log2(value)
    }
}

/// Replace a non-finite input with `nominal`, then clamp it to `[floor, ceiling]`
///
/// Returns the sanitized value and whether it differs from the input. The
/// floor wins if the bounds cross.
pub fn sanitize(value: f64, nominal: f64, floor: f64, ceiling: f64) -> (f64, bool) {
    let sanitized = safe_number(value, nominal).min(ceiling).max(floor);
    (sanitized, sanitized != value)
}

/// Inputs after step 1 of the pipeline
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SanitizedInput {
    /// Input voltage (V), within the voltage floor and ceiling
    pub input_voltage: f64,
    /// Distance (km), within the distance floor and ceiling
    pub distance_km: f64,
    /// Extra attenuation (dB), non-negative
    pub attenuation_db: f64,
    /// Extra amplification (dB), non-negative
    pub amplification_db: f64,
    /// Ambient noise multiplier, at least 1
    pub ambient_noise: f64,
}

/// Run the input sanitation step
pub fn sanitize_input(input: &CalculationInput<'_>, config: &EngineConfig) -> SanitizedInput {
    let nominal = config.nominal_input;

    let (input_voltage, voltage_adjusted) = sanitize(
        input.input_voltage,
        nominal,
        config.min_input_voltage_v,
        config.max_input_voltage_v,
    );
    let (distance_km, distance_adjusted) = sanitize(
        input.distance_km,
        nominal,
        config.min_distance_km,
        config.max_distance_km,
    );
    let (attenuation_db, attenuation_adjusted) =
        sanitize(input.attenuation_db, nominal, config.min_gain_db, f64::MAX);
    let (amplification_db, amplification_adjusted) =
        sanitize(input.amplification_db, nominal, config.min_gain_db, f64::MAX);
    let (ambient_noise, noise_adjusted) =
        sanitize(input.ambient_noise, nominal, config.min_ambient_noise, f64::MAX);

    if voltage_adjusted || distance_adjusted {
        log_warn!(
            "Inputs clamped (V: {}→{}, d: {}→{})",
            input.input_voltage, input_voltage, input.distance_km, distance_km
        );
    }
    if attenuation_adjusted || amplification_adjusted || noise_adjusted {
        log_warn!(
            "Inputs clamped (att: {}→{}, amp: {}→{}, noise: {}→{})",
            input.attenuation_db, attenuation_db,
            input.amplification_db, amplification_db,
            input.ambient_noise, ambient_noise
        );
    }

    SanitizedInput {
        input_voltage,
        distance_km,
        attenuation_db,
        amplification_db,
        ambient_noise,
    }
}
