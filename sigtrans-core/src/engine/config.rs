//! Engine configuration
//!
//! The defaults reproduce the reference model exactly. Override them only to
//! explore variants (another carrier frequency, a different efficiency model);
//! results are then no longer comparable with the built-in scenarios.

use crate::constants::physics::{
    CARRIER_FREQUENCY_MHZ, DISTANCE_PENALTY_PCT_PER_KM, EFFICIENCY_FLOOR_PCT,
    FREE_SPACE_LOSS_CONSTANT_DB, GUIDED_BASE_EFFICIENCY_PCT, MAX_DISTANCE_KM, MAX_INPUT_VOLTAGE_V,
    MIN_AMBIENT_NOISE,
    MIN_DISTANCE_KM, MIN_GAIN_DB, MIN_INPUT_VOLTAGE_V, NOISE_PENALTY_PCT_PER_UNIT,
    NOMINAL_INPUT_VALUE, OUTPUT_VOLTAGE_FALLBACK_V, POWER_REFERENCE_OFFSET_DB,
    UNGUIDED_BASE_EFFICIENCY_PCT,
};
use crate::medium::MediumClass;

/// Model constants consumed by the calculation pipeline
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineConfig {
    /// Floor for input voltage (V)
    pub min_input_voltage_v: f64,

    /// Ceiling for input voltage (V)
    pub max_input_voltage_v: f64,

    /// Floor for distance (km)
    pub min_distance_km: f64,

    /// Ceiling for distance (km)
    pub max_distance_km: f64,

    /// Floor for attenuation and amplification (dB)
    pub min_gain_db: f64,

    /// Floor for the ambient noise multiplier
    pub min_ambient_noise: f64,

    /// Replacement for NaN or infinite inputs
    pub nominal_input: f64,

    /// Offset from voltage level to input power (dB)
    pub power_reference_offset_db: f64,

    /// Carrier frequency for free-space path loss (MHz)
    pub carrier_frequency_mhz: f64,

    /// Constant subtracted in the free-space path loss formula (dB)
    pub free_space_constant_db: f64,

    /// Starting efficiency for guided media (%)
    pub guided_base_efficiency_pct: f64,

    /// Starting efficiency for unguided media (%)
    pub unguided_base_efficiency_pct: f64,

    /// Lowest efficiency ever reported (%)
    pub efficiency_floor_pct: f64,

    /// Efficiency lost per km (%)
    pub distance_penalty_pct_per_km: f64,

    /// Efficiency lost per unit of ambient noise above 1 (%)
    pub noise_penalty_pct_per_unit: f64,

    /// Output voltage used when the conversion is not finite (V)
    pub output_voltage_fallback_v: f64,
}

impl EngineConfig {
    /// The reference model
    pub const DEFAULT: Self = Self {
        min_input_voltage_v: MIN_INPUT_VOLTAGE_V,
        max_input_voltage_v: MAX_INPUT_VOLTAGE_V,
        min_distance_km: MIN_DISTANCE_KM,
        max_distance_km: MAX_DISTANCE_KM,
        min_gain_db: MIN_GAIN_DB,
        min_ambient_noise: MIN_AMBIENT_NOISE,
        nominal_input: NOMINAL_INPUT_VALUE,
        power_reference_offset_db: POWER_REFERENCE_OFFSET_DB,
        carrier_frequency_mhz: CARRIER_FREQUENCY_MHZ,
        free_space_constant_db: FREE_SPACE_LOSS_CONSTANT_DB,
        guided_base_efficiency_pct: GUIDED_BASE_EFFICIENCY_PCT,
        unguided_base_efficiency_pct: UNGUIDED_BASE_EFFICIENCY_PCT,
        efficiency_floor_pct: EFFICIENCY_FLOOR_PCT,
        distance_penalty_pct_per_km: DISTANCE_PENALTY_PCT_PER_KM,
        noise_penalty_pct_per_unit: NOISE_PENALTY_PCT_PER_UNIT,
        output_voltage_fallback_v: OUTPUT_VOLTAGE_FALLBACK_V,
    };

    /// Use another carrier frequency for unguided media
    ///
    /// Non-positive or non-finite frequencies are ignored.
    pub fn with_carrier_frequency_mhz(mut self, frequency_mhz: f64) -> Self {
        if frequency_mhz.is_finite() && frequency_mhz > 0.0 {
            self.carrier_frequency_mhz = frequency_mhz;
        }
        self
    }

    /// Use other starting efficiencies for guided and unguided media
    pub fn with_base_efficiency(mut self, guided_pct: f64, unguided_pct: f64) -> Self {
        self.guided_base_efficiency_pct = guided_pct;
        self.unguided_base_efficiency_pct = unguided_pct;
        self
    }

    /// Starting efficiency for a medium class
    pub fn base_efficiency_pct(&self, class: MediumClass) -> f64 {
        match class {
            MediumClass::Guided => self.guided_base_efficiency_pct,
            MediumClass::Unguided => self.unguided_base_efficiency_pct,
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
