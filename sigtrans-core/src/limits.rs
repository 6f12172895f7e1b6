//! Presentation Guard Rails
//!
//! ## Overview
//!
//! Input forms restrict each parameter to a range before a request is
//! submitted:
//!
//! ```text
//! parameter       min    max    unit
//! -----------------------------------
//! input_voltage   0.1    100    V
//! distance        0.1    100    km
//! attenuation     0       60    dB
//! amplification   0       60    dB
//! ambient_noise   1       10    -
//! ```
//!
//! These ranges are a property of the form, not of the engine. The engine
//! accepts anything and clamps to its own floors; [`InputLimits::validate`]
//! exists for callers that want to reject out-of-range requests instead of
//! letting them through.
//!
//! ## Usage
//!
//! ```rust
//! use sigtrans_core::{limits::InputLimits, CalculationInput, SignalError};
//!
//! let limits = InputLimits::default();
//! let input = CalculationInput { distance_km: 250.0, ..CalculationInput::default() };
//!
//! assert!(matches!(
//!     limits.validate(&input),
//!     Err(SignalError::OutOfRange { field: "distance", .. })
//! ));
//! ```

use crate::constants::limits::{
    DISTANCE_MAX_KM, DISTANCE_MIN_KM, GAIN_MAX_DB, GAIN_MIN_DB, NOISE_MAX, NOISE_MIN,
    VOLTAGE_MAX_V, VOLTAGE_MIN_V,
};
use crate::engine::CalculationInput;
use crate::errors::{SignalError, SignalResult};
use crate::traits::Validatable;

/// Accepted range for one parameter
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ParameterRange {
    /// Lowest accepted value
    pub min: f64,
    /// Highest accepted value
    pub max: f64,
    /// Display unit, empty for unitless values
    pub unit: &'static str,
}

impl ParameterRange {
    /// Create a range, swapping the bounds if given in the wrong order
    pub fn new(min: f64, max: f64, unit: &'static str) -> Self {
        if min > max {
            Self { min: max, max: min, unit }
        } else {
            Self { min, max, unit }
        }
    }

    /// Check a value against the range
    pub fn check(&self, field: &'static str, value: f64) -> SignalResult<()> {
        if !value.is_valid() {
            return Err(SignalError::InvalidValue { field });
        }
        if value < self.min || value > self.max {
            return Err(SignalError::OutOfRange {
                field,
                value,
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    /// Clamp a value into the range; non-finite values go to `min`
    pub fn clamp(&self, value: f64) -> f64 {
        if value.is_valid() {
            value.clamp(self.min, self.max)
        } else {
            self.min
        }
    }
}

/// Guard rails for every numeric parameter
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct InputLimits {
    /// Input voltage range (V)
    pub input_voltage: ParameterRange,
    /// Distance range (km)
    pub distance: ParameterRange,
    /// Attenuation range (dB)
    pub attenuation: ParameterRange,
    /// Amplification range (dB)
    pub amplification: ParameterRange,
    /// Ambient noise range
    pub ambient_noise: ParameterRange,
}

impl Default for InputLimits {
    fn default() -> Self {
        Self {
            input_voltage: ParameterRange::new(VOLTAGE_MIN_V, VOLTAGE_MAX_V, "V"),
            distance: ParameterRange::new(DISTANCE_MIN_KM, DISTANCE_MAX_KM, "km"),
            attenuation: ParameterRange::new(GAIN_MIN_DB, GAIN_MAX_DB, "dB"),
            amplification: ParameterRange::new(GAIN_MIN_DB, GAIN_MAX_DB, "dB"),
            ambient_noise: ParameterRange::new(NOISE_MIN, NOISE_MAX, ""),
        }
    }
}

impl InputLimits {
    /// Ranges keyed by parameter name, in form order
    pub fn constraints(&self) -> [(&'static str, ParameterRange); 5] {
        [
            ("input_voltage", self.input_voltage),
            ("distance", self.distance),
            ("attenuation", self.attenuation),
            ("amplification", self.amplification),
            ("ambient_noise", self.ambient_noise),
        ]
    }

    /// Reject the first parameter outside its range
    ///
    /// The medium identifier is not checked here; the engine reports unknown
    /// media itself.
    pub fn validate(&self, input: &CalculationInput<'_>) -> SignalResult<()> {
        self.input_voltage.check("input_voltage", input.input_voltage)?;
        self.distance.check("distance", input.distance_km)?;
        self.attenuation.check("attenuation", input.attenuation_db)?;
        self.amplification.check("amplification", input.amplification_db)?;
        self.ambient_noise.check("ambient_noise", input.ambient_noise)?;
        Ok(())
    }
}
