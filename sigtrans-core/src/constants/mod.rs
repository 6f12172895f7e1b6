//! Constants for the Signal Transmission Engine
//!
//! Centralised numeric values used by the engine, the guard rails and the
//! impairment classifier. Always use these instead of magic numbers; names
//! include their unit.
//!
//! - **Physics**: conversion factors, free-space loss terms, efficiency model
//!   and sanitation floors
//! - **Limits**: presentation-side guard rails and impairment thresholds

/// Conversion factors, propagation terms and sanitation floors.
pub mod physics;

/// Guard rails and impairment thresholds.
pub mod limits;

// Re-export commonly used constants for convenience
pub use physics::{
    CARRIER_FREQUENCY_MHZ, FREE_SPACE_LOSS_CONSTANT_DB,
    EFFICIENCY_FLOOR_PCT, MIN_INPUT_VOLTAGE_V, MIN_DISTANCE_KM,
};

pub use limits::{
    VOLTAGE_MIN_V, VOLTAGE_MAX_V, DISTANCE_MIN_KM, DISTANCE_MAX_KM,
    GAIN_MIN_DB, GAIN_MAX_DB, NOISE_MIN, NOISE_MAX,
};
