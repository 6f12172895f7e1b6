//! Presentation Guard Rails and Impairment Thresholds
//!
//! Guard rails are the ranges an input form enforces before submitting a
//! request. They are not engine invariants: the engine only clamps to the
//! floors in [`physics`](super::physics) and accepts anything above them.

// ===== GUARD RAILS =====

/// Lowest input voltage a form accepts (V).
pub const VOLTAGE_MIN_V: f64 = 0.1;

/// Highest input voltage a form accepts (V).
pub const VOLTAGE_MAX_V: f64 = 100.0;

/// Shortest distance a form accepts (km).
pub const DISTANCE_MIN_KM: f64 = 0.1;

/// Longest distance a form accepts (km).
pub const DISTANCE_MAX_KM: f64 = 100.0;

/// Lowest attenuation or amplification a form accepts (dB).
pub const GAIN_MIN_DB: f64 = 0.0;

/// Highest attenuation or amplification a form accepts (dB).
pub const GAIN_MAX_DB: f64 = 60.0;

/// Lowest ambient noise multiplier a form accepts.
pub const NOISE_MIN: f64 = 1.0;

/// Highest ambient noise multiplier a form accepts.
pub const NOISE_MAX: f64 = 10.0;

// ===== IMPAIRMENT THRESHOLDS =====

/// Ambient noise multiplier above which thermal noise dominates.
pub const THERMAL_NOISE_THRESHOLD: f64 = 10.0;

/// Distance above which attenuation dominates (km).
pub const ATTENUATION_DISTANCE_THRESHOLD_KM: f64 = 100.0;

/// Bandwidth above which intermodulation dominates (MHz).
pub const INTERMODULATION_BANDWIDTH_THRESHOLD_MHZ: f64 = 50.0;
