//! Shared helpers for engine integration tests
//!
//! - Reference profiles mirroring the documented scenarios
//! - Float assertions with a fixed tolerance
//! - Input builders for sweeps

#![allow(dead_code)]

use sigtrans_core::{
    medium::{MediumEntry, MEDIUM_TABLE},
    CalculationInput, CalculationResult, MediumClass, MediumProfile,
};

/// Tolerance for closed-form comparisons
pub const EPS: f64 = 1e-9;

/// Guided profile used by the reference scenarios
pub const REFERENCE_GUIDED: MediumProfile = MediumProfile {
    name: "Reference Guided",
    class: MediumClass::Guided,
    loss_per_km: 0.5,
    noise_floor_dbm: -90.0,
    bandwidth_mhz: 100.0,
    max_capacity_mbps: 1000.0,
};

/// Unguided counterpart with the same characteristics
pub const REFERENCE_UNGUIDED: MediumProfile = MediumProfile {
    name: "Reference Unguided",
    class: MediumClass::Unguided,
    ..REFERENCE_GUIDED
};

/// Catalog holding both reference profiles
pub const REFERENCE_CATALOG: [MediumEntry; 2] = [
    MediumEntry { id: "ref-guided", profile: REFERENCE_GUIDED },
    MediumEntry { id: "ref-unguided", profile: REFERENCE_UNGUIDED },
];

/// Assert two floats agree within [`EPS`]
pub fn assert_close(actual: f64, expected: f64, what: &str) {
    assert!(
        (actual - expected).abs() < EPS,
        "{what}: expected {expected}, got {actual}"
    );
}

/// Assert every field of a result is finite, naming the first that is not
pub fn assert_all_finite(result: &CalculationResult) {
    for (name, value) in result.fields() {
        assert!(value.is_finite(), "{name} is not finite: {value}");
    }
}

/// Identifiers of every built-in medium
pub fn builtin_ids() -> impl Iterator<Item = &'static str> {
    MEDIUM_TABLE.iter().map(|entry| entry.id)
}

/// Default request at a given distance
pub fn at_distance(medium_id: &str, distance_km: f64) -> CalculationInput<'_> {
    CalculationInput {
        distance_km,
        ..CalculationInput::new(medium_id)
    }
}
