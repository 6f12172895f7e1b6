//! Calculation request

use crate::medium::Medium;

/// Parameters for one calculation
///
/// Values outside the engine's domain are accepted and clamped during the
/// calculation; use [`InputLimits`](crate::limits::InputLimits) to reject
/// them up front instead.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CalculationInput<'a> {
    /// Source voltage (V)
    pub input_voltage: f64,

    /// Link length (km)
    pub distance_km: f64,

    /// Extra attenuator loss (dB)
    pub attenuation_db: f64,

    /// Extra amplifier gain (dB)
    pub amplification_db: f64,

    /// Unitless ambient noise multiplier
    pub ambient_noise: f64,

    /// Key into the medium catalog
    pub medium_id: &'a str,
}

impl<'a> CalculationInput<'a> {
    /// Default parameters over the given medium identifier
    pub fn new(medium_id: &'a str) -> Self {
        Self {
            medium_id,
            ..CalculationInput::default()
        }
    }
}

impl CalculationInput<'static> {
    /// Default parameters over a built-in medium
    pub fn for_medium(medium: Medium) -> Self {
        Self::new(medium.id())
    }
}

impl Default for CalculationInput<'_> {
    fn default() -> Self {
        Self {
            input_voltage: 1.0,
            distance_km: 1.0,
            attenuation_db: 1.0,
            amplification_db: 1.0,
            ambient_noise: 1.0,
            medium_id: "coaxial-cable",
        }
    }
}
