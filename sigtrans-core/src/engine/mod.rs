//! Signal Transmission Calculation Engine
//!
//! ## Overview
//!
//! The engine maps one [`CalculationInput`] plus one [`MediumProfile`] to a
//! [`CalculationResult`]. It is a pure function: no state survives a call,
//! identical input gives identical output, and every call runs the same fixed
//! sequence of closed-form steps in constant time.
//!
//! ## Pipeline
//!
//! The steps run in this order; each consumes the results of earlier ones.
//!
//! ```text
//!  1. sanitize     NaN/inf → 1.0; V, d in [0.1, 1e9]; att, amp ≥ 0; noise ≥ 1
//!  2. P_in         20·log10(V) + 10                         (dBm)
//!  3. L_medium     loss_per_km × d                          (dB)
//!  4. L_prop       20·log10(d) + 20·log10(f) − 147.55       (dB, unguided only)
//!  5. N            noise_floor − 10·log10(noise)            (dBm)
//!  6. L_total      L_medium + L_prop + att;  G = amp        (dB)
//!  7. P_out        P_in − L_total + G                       (dBm)
//!  8. SNR          P_out − N                                (dB)
//!  9. C            min(B·log2(1 + 10^(SNR/10)), C_max)      (Mbps)
//! 10. η            max(10, base − 2·d − 10·(noise − 1))     (%)
//! 11. V_out, G_f   10^((P_out − 10)/20);  20·log10(V_out/V)
//! ```
//!
//! Note the sign convention in step 5: a larger noise multiplier lowers the
//! numeric noise level, which raises the SNR. The reference model behaves this
//! way and results must match it.
//!
//! ## Numeric Guards
//!
//! Every intermediate goes through [`guards::safe_number`] with a fallback:
//!
//! ```text
//! P_in → 0     L_* → 0     N → noise_floor     P_out → P_in
//! SNR → 0      C → 0       η → floor           V_out → 0.1      G_f → 0
//! ```
//!
//! A non-finite noise floor from a custom catalog falls back to 0 dBm.
//!
//! ## Usage
//!
//! ```rust
//! use sigtrans_core::{compute, CalculationInput};
//!
//! let result = compute(&CalculationInput::default())?;
//! assert_eq!(result.channel_capacity_mbps, 1000.0); // capped by coax
//! # Ok::<(), sigtrans_core::SignalError>(())
//! ```

mod config;
pub mod guards;
mod input;
mod result;

pub use config::EngineConfig;
pub use input::CalculationInput;
pub use result::CalculationResult;

use crate::constants::physics::{AMPLITUDE_DB_FACTOR, POWER_DB_FACTOR};
use crate::errors::SignalResult;
use crate::medium::{MediumClass, MediumProfile, StandardCatalog};
use crate::traits::MediumCatalog;

use guards::{safe_log10, safe_log2, safe_number, sanitize_input};

/// Calculation engine bound to a configuration and a medium catalog
#[derive(Debug, Clone, Copy)]
pub struct Engine<C = StandardCatalog> {
    config: EngineConfig,
    catalog: C,
}

impl Engine<StandardCatalog> {
    /// Reference model over the built-in table
    pub const STANDARD: Self = Self {
        config: EngineConfig::DEFAULT,
        catalog: StandardCatalog,
    };

    /// Engine over the built-in table with custom constants
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            catalog: StandardCatalog,
        }
    }
}

impl Default for Engine<StandardCatalog> {
    fn default() -> Self {
        Self::STANDARD
    }
}

impl<C> Engine<C> {
    /// Engine over a caller-provided catalog
    pub fn with_catalog(config: EngineConfig, catalog: C) -> Self {
        Self { config, catalog }
    }

    /// Active configuration
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Catalog used to resolve identifiers
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Run the pipeline against an already resolved profile
    ///
    /// `input.medium_id` is ignored.
    pub fn evaluate(&self, input: &CalculationInput<'_>, profile: &MediumProfile) -> CalculationResult {
        let config = &self.config;

        // 1. Sanitation
        let inputs = sanitize_input(input, config);
        let voltage = inputs.input_voltage;
        let distance = inputs.distance_km;
        let noise = inputs.ambient_noise;

        // 2. Input power
        let input_power = safe_number(
            AMPLITUDE_DB_FACTOR * safe_log10(voltage) + config.power_reference_offset_db,
            0.0,
        );

        // 3. Medium loss
        let medium_loss = safe_number(profile.loss_per_km * distance, 0.0);

        // 4. Free-space path loss, unguided only
        let propagation_loss = match profile.class {
            MediumClass::Guided => 0.0,
            MediumClass::Unguided => safe_number(
                AMPLITUDE_DB_FACTOR * safe_log10(distance)
                    + AMPLITUDE_DB_FACTOR * safe_log10(config.carrier_frequency_mhz)
                    - config.free_space_constant_db,
                0.0,
            ),
        };

        // 5. Noise level
        let noise_floor = safe_number(profile.noise_floor_dbm, 0.0);
        let total_noise = safe_number(noise_floor - POWER_DB_FACTOR * safe_log10(noise), noise_floor);

        // 6. Losses and gains
        let total_loss = safe_number(medium_loss + propagation_loss + inputs.attenuation_db, 0.0);
        let total_gain = inputs.amplification_db;

        // 7. Output power
        let output_power = safe_number(input_power - total_loss + total_gain, input_power);

        // 8. SNR
        let snr = safe_number(output_power - total_noise, 0.0);

        // 9. Shannon–Hartley, capped by the medium
        let snr_linear = libm::pow(10.0, snr / POWER_DB_FACTOR);
        let raw_capacity = profile.bandwidth_mhz * safe_log2(1.0 + snr_linear);
        let channel_capacity = safe_number(raw_capacity.min(profile.max_capacity_mbps), 0.0);

        // 10. Efficiency
        let distance_penalty = (distance * config.distance_penalty_pct_per_km).max(0.0);
        let noise_penalty = ((noise - 1.0) * config.noise_penalty_pct_per_unit).max(0.0);
        let efficiency = safe_number(
            (config.base_efficiency_pct(profile.class) - distance_penalty - noise_penalty)
                .max(config.efficiency_floor_pct),
            config.efficiency_floor_pct,
        );

        // 11. Output voltage and end-to-end gain
        let output_voltage = safe_number(
            libm::pow(10.0, (output_power - config.power_reference_offset_db) / AMPLITUDE_DB_FACTOR),
            config.output_voltage_fallback_v,
        );
        let final_gain = safe_number(AMPLITUDE_DB_FACTOR * safe_log10(output_voltage / voltage), 0.0);

        log_debug!(
            "{}: P_out={} dBm, SNR={} dB, C={} Mbps, eff={}%",
            profile.name, output_power, snr, channel_capacity, efficiency
        );

        CalculationResult {
            input_voltage: voltage,
            output_voltage,
            input_power_dbm: input_power,
            output_power_dbm: output_power,
            total_loss_db: total_loss,
            medium_loss_db: medium_loss,
            propagation_loss_db: propagation_loss,
            attenuation_loss_db: inputs.attenuation_db,
            amplification_gain_db: total_gain,
            snr_db: snr,
            noise_level_dbm: total_noise,
            channel_capacity_mbps: channel_capacity,
            efficiency_pct: efficiency,
            final_gain_db: final_gain,
            distance_km: distance,
        }
    }
}

impl<C: MediumCatalog> Engine<C> {
    /// Resolve the medium and run the pipeline
    ///
    /// Fails only with [`SignalError::UnknownMedium`](crate::SignalError::UnknownMedium).
    pub fn compute(&self, input: &CalculationInput<'_>) -> SignalResult<CalculationResult> {
        let profile = self.catalog.lookup(input.medium_id)?;
        Ok(self.evaluate(input, profile))
    }
}

/// Compute link metrics with the reference model and the built-in table
pub fn compute(input: &CalculationInput<'_>) -> SignalResult<CalculationResult> {
    Engine::STANDARD.compute(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::SignalError;
    use crate::medium::{Medium, MediumEntry};

    const EPS: f64 = 1e-9;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < EPS,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn reference_link_over_coax() {
        let result = compute(&CalculationInput::default()).unwrap();

        assert_close(result.input_power_dbm, 10.0);
        assert_close(result.medium_loss_db, 0.5);
        assert_close(result.propagation_loss_db, 0.0);
        assert_close(result.total_loss_db, 1.5);
        assert_close(result.output_power_dbm, 9.5);
        assert_close(result.noise_level_dbm, -90.0);
        assert_close(result.snr_db, 99.5);
        assert_eq!(result.channel_capacity_mbps, 1000.0);
        // 95 - 2·1 - 10·0
        assert_close(result.efficiency_pct, 93.0);
        // 10^((9.5 - 10)/20)
        assert_close(result.output_voltage, libm::pow(10.0, -0.025));
        assert_close(result.final_gain_db, -0.5);
    }

    #[test]
    fn zero_distance_and_voltage_are_clamped() {
        let input = CalculationInput {
            input_voltage: 0.0,
            distance_km: 0.0,
            ..CalculationInput::default()
        };
        let result = compute(&input).unwrap();

        assert_close(result.distance_km, 0.1);
        assert_close(result.input_voltage, 0.1);
        assert_close(result.medium_loss_db, 0.05);
        assert_close(result.input_power_dbm, -10.0);
    }

    #[test]
    fn unguided_link_pays_free_space_loss() {
        let input = CalculationInput {
            distance_km: 10.0,
            ..CalculationInput::for_medium(Medium::Wifi)
        };
        let result = compute(&input).unwrap();

        let expected = 20.0 + 20.0 * libm::log10(2400.0) - 147.55;
        assert_close(result.propagation_loss_db, expected);
        assert!(result.propagation_loss_db != 0.0);
        assert_close(result.medium_loss_db, 80.0);
        assert_close(result.total_loss_db, 80.0 + expected + 1.0);
    }

    #[test]
    fn guided_link_has_no_propagation_loss() {
        for medium in [Medium::CoaxialCable, Medium::OpticalFiber, Medium::TwistedPair] {
            let input = CalculationInput {
                distance_km: 50.0,
                ..CalculationInput::for_medium(medium)
            };
            assert_eq!(compute(&input).unwrap().propagation_loss_db, 0.0);
        }
    }

    #[test]
    fn ambient_noise_lowers_noise_level() {
        let input = CalculationInput {
            ambient_noise: 10.0,
            ..CalculationInput::default()
        };
        let result = compute(&input).unwrap();

        // -90 - 10·log10(10)
        assert_close(result.noise_level_dbm, -100.0);
        assert_close(result.snr_db, 109.5);
        // 95 - 2 - 90 → floor
        assert_close(result.efficiency_pct, 10.0);
    }

    #[test]
    fn weak_signal_reports_low_capacity() {
        let input = CalculationInput {
            distance_km: 50.0,
            attenuation_db: 60.0,
            amplification_db: 0.0,
            ..CalculationInput::for_medium(Medium::Radio)
        };
        let result = compute(&input).unwrap();

        assert!(result.snr_db < 0.0);
        assert!(result.channel_capacity_mbps >= 0.0);
        assert!(result.channel_capacity_mbps < Medium::Radio.profile().max_capacity_mbps);
        assert_eq!(result.efficiency_pct, 10.0);
    }

    #[test]
    fn non_finite_inputs_fall_back_to_nominal() {
        let input = CalculationInput {
            input_voltage: f64::NAN,
            distance_km: f64::INFINITY,
            attenuation_db: f64::NEG_INFINITY,
            amplification_db: f64::NAN,
            ambient_noise: f64::NAN,
            medium_id: "coaxial-cable",
        };
        let result = compute(&input).unwrap();

        assert_eq!(result, compute(&CalculationInput::default()).unwrap());
    }

    #[test]
    fn huge_distance_stays_finite() {
        let input = CalculationInput {
            distance_km: 1e9,
            ..CalculationInput::for_medium(Medium::Radio)
        };
        let result = compute(&input).unwrap();

        assert!(result.is_finite());
        // Power underflows to zero volts, so the ratio guard kicks in
        assert_eq!(result.output_voltage, 0.0);
        assert_eq!(result.final_gain_db, 0.0);
        assert_eq!(result.channel_capacity_mbps, 0.0);
    }

    #[test]
    fn huge_voltage_caps_capacity() {
        let input = CalculationInput {
            input_voltage: 1e200,
            ..CalculationInput::default()
        };
        let result = compute(&input).unwrap();

        assert!(result.is_finite());
        assert_eq!(result.channel_capacity_mbps, 1000.0);
    }

    #[test]
    fn unknown_medium_is_reported() {
        let input = CalculationInput::new("smoke-signal");
        assert_eq!(compute(&input), Err(SignalError::UnknownMedium));
    }

    #[test]
    fn custom_catalog_resolves_custom_media() {
        let catalog = [MediumEntry {
            id: "test-line",
            profile: MediumProfile {
                name: "Test Line",
                class: MediumClass::Guided,
                loss_per_km: 2.0,
                noise_floor_dbm: -80.0,
                bandwidth_mhz: 10.0,
                max_capacity_mbps: 20.0,
            },
        }];
        let engine = Engine::with_catalog(EngineConfig::default(), catalog);

        let result = engine.compute(&CalculationInput::new("test-line")).unwrap();
        assert_close(result.medium_loss_db, 2.0);
        assert_eq!(result.channel_capacity_mbps, 20.0);

        assert_eq!(
            engine.compute(&CalculationInput::default()),
            Err(SignalError::UnknownMedium)
        );
    }

    #[test]
    fn distance_past_overflow_is_clamped() {
        let near = compute(&CalculationInput {
            distance_km: 1e307,
            ..CalculationInput::for_medium(Medium::Radio)
        })
        .unwrap();
        let far = compute(&CalculationInput {
            distance_km: 2e307,
            ..CalculationInput::for_medium(Medium::Radio)
        })
        .unwrap();

        assert_eq!(near.distance_km, EngineConfig::DEFAULT.max_distance_km);
        assert_close(far.medium_loss_db, 12.0e9);
        assert!(far.medium_loss_db >= near.medium_loss_db);
        assert!(far.total_loss_db >= near.total_loss_db);
        assert!(far.snr_db <= near.snr_db);
    }

    #[test]
    fn huge_voltage_is_clamped_to_ceiling() {
        let input = CalculationInput {
            input_voltage: f64::MAX,
            ..CalculationInput::default()
        };
        let result = compute(&input).unwrap();

        assert_eq!(result.input_voltage, 1e9);
        // 20·log10(1e9) + 10
        assert_close(result.input_power_dbm, 190.0);
    }

    #[test]
    fn non_finite_noise_floor_in_custom_catalog() {
        let catalog = [MediumEntry {
            id: "broken-line",
            profile: MediumProfile {
                name: "Broken Line",
                class: MediumClass::Unguided,
                loss_per_km: 1.0,
                noise_floor_dbm: f64::INFINITY,
                bandwidth_mhz: 10.0,
                max_capacity_mbps: 20.0,
            },
        }];
        let engine = Engine::with_catalog(EngineConfig::default(), catalog);

        let result = engine.compute(&CalculationInput::new("broken-line")).unwrap();
        assert!(result.is_finite());
        assert_eq!(result.noise_level_dbm, 0.0);

        let mut catalog = catalog;
        catalog[0].profile.noise_floor_dbm = f64::NAN;
        let result = Engine::with_catalog(EngineConfig::default(), catalog)
            .compute(&CalculationInput::new("broken-line"))
            .unwrap();
        assert!(result.is_finite());
    }

    #[test]
    fn carrier_frequency_changes_propagation_loss() {
        let input = CalculationInput::for_medium(Medium::Wifi);
        let reference = compute(&input).unwrap();

        let engine = Engine::new(EngineConfig::default().with_carrier_frequency_mhz(24000.0));
        let shifted = engine.compute(&input).unwrap();

        // Ten times the frequency adds 20 dB
        assert_close(shifted.propagation_loss_db - reference.propagation_loss_db, 20.0);
    }

    #[test]
    fn evaluate_ignores_the_identifier() {
        let input = CalculationInput::new("not-in-any-table");
        let result = Engine::STANDARD.evaluate(&input, Medium::OpticalFiber.profile());
        assert_close(result.medium_loss_db, 0.2);
    }
}
