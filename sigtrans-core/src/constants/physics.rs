//! Physical and Model Constants for the Transmission Engine
//!
//! Every constant the 11-step pipeline uses lives here so the
//! [`EngineConfig`](crate::engine::EngineConfig) defaults can be traced back to
//! a single definition. Names carry their unit as a suffix.

// ===== POWER CONVERSION =====

/// Offset added to the voltage level when converting to input power (dB).
///
/// The model treats `20·log10(V) + 10` as the input power in dBm, so a 1 V
/// source maps to 10 dBm.
pub const POWER_REFERENCE_OFFSET_DB: f64 = 10.0;

/// Multiplier for amplitude (voltage) ratios in decibels.
pub const AMPLITUDE_DB_FACTOR: f64 = 20.0;

/// Multiplier for power ratios in decibels.
pub const POWER_DB_FACTOR: f64 = 10.0;

// ===== FREE-SPACE PROPAGATION =====

/// Carrier frequency used for free-space path loss (MHz).
///
/// The model fixes every unguided medium to the 2.4 GHz ISM band.
pub const CARRIER_FREQUENCY_MHZ: f64 = 2400.0;

/// Constant term subtracted in the free-space path loss approximation (dB).
///
/// `FSPL = 20·log10(d) + 20·log10(f) − 147.55`
///
/// Note: 147.55 is the constant for metres and hertz. The model applies it to
/// kilometres and megahertz unchanged, which makes short-range propagation
/// loss negative.
pub const FREE_SPACE_LOSS_CONSTANT_DB: f64 = 147.55;

// ===== EFFICIENCY MODEL =====

/// Starting efficiency for guided media (%).
pub const GUIDED_BASE_EFFICIENCY_PCT: f64 = 95.0;

/// Starting efficiency for unguided media (%).
pub const UNGUIDED_BASE_EFFICIENCY_PCT: f64 = 70.0;

/// Efficiency never reported below this value (%).
pub const EFFICIENCY_FLOOR_PCT: f64 = 10.0;

/// Efficiency lost per kilometre of distance (%/km).
pub const DISTANCE_PENALTY_PCT_PER_KM: f64 = 2.0;

/// Efficiency lost per unit of ambient noise above 1 (%).
pub const NOISE_PENALTY_PCT_PER_UNIT: f64 = 10.0;

// ===== INPUT SANITATION =====

/// Lowest input voltage the engine computes with (V).
pub const MIN_INPUT_VOLTAGE_V: f64 = 0.1;

/// Shortest distance the engine computes with (km).
pub const MIN_DISTANCE_KM: f64 = 0.1;

/// Highest input voltage the engine computes with (V).
pub const MAX_INPUT_VOLTAGE_V: f64 = 1.0e9;

/// Longest distance the engine computes with (km).
///
/// Keeps `loss_per_km × d` finite; past ~1e307 km the product overflows.
pub const MAX_DISTANCE_KM: f64 = 1.0e9;

/// Lowest extra attenuation or amplification (dB).
pub const MIN_GAIN_DB: f64 = 0.0;

/// Lowest ambient noise multiplier (unitless).
pub const MIN_AMBIENT_NOISE: f64 = 1.0;

/// Replacement for NaN or infinite numeric inputs.
pub const NOMINAL_INPUT_VALUE: f64 = 1.0;

/// Output voltage reported when the power-to-voltage conversion is not finite (V).
pub const OUTPUT_VOLTAGE_FALLBACK_V: f64 = 0.1;
