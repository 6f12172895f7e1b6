//! Dominant impairment classification
//!
//! Names the impairment most likely to limit a link, checked in priority
//! order:
//!
//! ```text
//! ambient noise > 10          → Thermal
//! distance > 100 km           → Attenuation
//! medium bandwidth > 50 MHz   → Intermodulation
//! otherwise                   → None
//! ```

use core::fmt;

use crate::constants::limits::{
    ATTENUATION_DISTANCE_THRESHOLD_KM, INTERMODULATION_BANDWIDTH_THRESHOLD_MHZ,
    THERMAL_NOISE_THRESHOLD,
};
use crate::engine::CalculationInput;
use crate::medium::MediumProfile;

/// Impairment that dominates a link
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Impairment {
    /// Nothing stands out
    None,
    /// Ambient/thermal noise
    Thermal,
    /// Distance-driven loss
    Attenuation,
    /// Wideband channel mixing products
    Intermodulation,
}

impl Impairment {
    /// Short human-readable label
    pub const fn label(self) -> &'static str {
        match self {
            Self::None => "-",
            Self::Thermal => "Thermal",
            Self::Attenuation => "Attenuation",
            Self::Intermodulation => "Intermodulation",
        }
    }
}

impl fmt::Display for Impairment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Classify the dominant impairment of a request over a medium
///
/// NaN parameters never exceed a threshold.
pub fn classify_impairment(input: &CalculationInput<'_>, profile: &MediumProfile) -> Impairment {
    if input.ambient_noise > THERMAL_NOISE_THRESHOLD {
        Impairment::Thermal
    } else if input.distance_km > ATTENUATION_DISTANCE_THRESHOLD_KM {
        Impairment::Attenuation
    } else if profile.bandwidth_mhz > INTERMODULATION_BANDWIDTH_THRESHOLD_MHZ {
        Impairment::Intermodulation
    } else {
        Impairment::None
    }
}
