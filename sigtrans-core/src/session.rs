//! Caller-owned parameter state
//!
//! The engine is a pure function; whoever drives it owns the parameters and
//! decides when to recompute. [`LinkParameters`] is that owner for the common
//! case of an interactive form: one field per input, setters, a reset to the
//! defaults, and an explicit [`evaluate`](LinkParameters::evaluate).
//!
//! ```rust
//! use sigtrans_core::session::LinkParameters;
//! use sigtrans_core::medium::Medium;
//!
//! let mut params = LinkParameters::default();
//! params.set_medium(Medium::OpticalFiber);
//! params.set_distance_km(40.0);
//!
//! let result = params.evaluate();
//! assert_eq!(result.distance_km, 40.0);
//!
//! params.reset();
//! assert_eq!(params.medium(), Medium::CoaxialCable);
//! ```

use crate::assessment::{classify_impairment, Impairment};
use crate::engine::{CalculationInput, CalculationResult, Engine};
use crate::errors::SignalResult;
use crate::medium::Medium;
use crate::traits::MediumCatalog;

/// Parameters of one simulated link
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinkParameters {
    input_voltage: f64,
    distance_km: f64,
    attenuation_db: f64,
    amplification_db: f64,
    ambient_noise: f64,
    medium: Medium,
}

impl Default for LinkParameters {
    fn default() -> Self {
        let input = CalculationInput::default();
        Self {
            input_voltage: input.input_voltage,
            distance_km: input.distance_km,
            attenuation_db: input.attenuation_db,
            amplification_db: input.amplification_db,
            ambient_noise: input.ambient_noise,
            medium: Medium::default(),
        }
    }
}

impl LinkParameters {
    /// Source voltage (V)
    pub fn input_voltage(&self) -> f64 {
        self.input_voltage
    }

    /// Link length (km)
    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    /// Extra attenuation (dB)
    pub fn attenuation_db(&self) -> f64 {
        self.attenuation_db
    }

    /// Extra amplification (dB)
    pub fn amplification_db(&self) -> f64 {
        self.amplification_db
    }

    /// Ambient noise multiplier
    pub fn ambient_noise(&self) -> f64 {
        self.ambient_noise
    }

    /// Selected medium
    pub fn medium(&self) -> Medium {
        self.medium
    }

    /// Set the source voltage (V)
    pub fn set_input_voltage(&mut self, volts: f64) -> &mut Self {
        self.input_voltage = volts;
        self
    }

    /// Set the link length (km)
    pub fn set_distance_km(&mut self, km: f64) -> &mut Self {
        self.distance_km = km;
        self
    }

    /// Set the extra attenuation (dB)
    pub fn set_attenuation_db(&mut self, db: f64) -> &mut Self {
        self.attenuation_db = db;
        self
    }

    /// Set the extra amplification (dB)
    pub fn set_amplification_db(&mut self, db: f64) -> &mut Self {
        self.amplification_db = db;
        self
    }

    /// Set the ambient noise multiplier
    pub fn set_ambient_noise(&mut self, multiplier: f64) -> &mut Self {
        self.ambient_noise = multiplier;
        self
    }

    /// Select a built-in medium
    pub fn set_medium(&mut self, medium: Medium) -> &mut Self {
        self.medium = medium;
        self
    }

    /// Select a medium by identifier
    ///
    /// Unknown identifiers leave the selection unchanged.
    pub fn set_medium_id(&mut self, medium_id: &str) -> SignalResult<&mut Self> {
        self.medium = medium_id.parse()?;
        Ok(self)
    }

    /// Restore every parameter to its default
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Snapshot as a calculation request
    pub fn input(&self) -> CalculationInput<'static> {
        CalculationInput {
            input_voltage: self.input_voltage,
            distance_km: self.distance_km,
            attenuation_db: self.attenuation_db,
            amplification_db: self.amplification_db,
            ambient_noise: self.ambient_noise,
            medium_id: self.medium.id(),
        }
    }

    /// Compute with the reference model
    ///
    /// Infallible: a built-in medium always resolves.
    pub fn evaluate(&self) -> CalculationResult {
        Engine::STANDARD.evaluate(&self.input(), self.medium.profile())
    }

    /// Compute with a caller-provided engine
    pub fn evaluate_with<C: MediumCatalog>(
        &self,
        engine: &Engine<C>,
    ) -> SignalResult<CalculationResult> {
        engine.compute(&self.input())
    }

    /// Dominant impairment of the current parameters
    pub fn impairment(&self) -> Impairment {
        classify_impairment(&self.input(), self.medium.profile())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::{compute, EngineConfig};
    use crate::errors::SignalError;

    #[test]
    fn evaluate_matches_free_function() {
        let mut params = LinkParameters::default();
        params
            .set_input_voltage(5.0)
            .set_distance_km(12.0)
            .set_attenuation_db(3.0)
            .set_amplification_db(6.0)
            .set_ambient_noise(2.0)
            .set_medium(Medium::Wifi);

        assert_eq!(params.evaluate(), compute(&params.input()).unwrap());
    }

    #[test]
    fn unknown_medium_id_keeps_selection() {
        let mut params = LinkParameters::default();
        params.set_medium(Medium::Radio);

        assert!(matches!(params.set_medium_id("laser"), Err(SignalError::UnknownMedium)));
        assert_eq!(params.medium(), Medium::Radio);

        params.set_medium_id("twisted-pair").unwrap();
        assert_eq!(params.medium(), Medium::TwistedPair);
    }

    #[test]
    fn reset_restores_defaults() {
        let mut params = LinkParameters::default();
        params.set_distance_km(80.0).set_medium(Medium::OpticalFiber);
        params.reset();

        assert_eq!(params, LinkParameters::default());
        assert_eq!(params.input(), CalculationInput::default());
    }

    #[test]
    fn setters_do_not_recompute() {
        let mut params = LinkParameters::default();
        let before = params.evaluate();
        params.set_distance_km(30.0);

        // The old result is a value; only an explicit evaluate sees the change
        assert_eq!(before.distance_km, 1.0);
        assert_eq!(params.evaluate().distance_km, 30.0);
    }

    #[test]
    fn evaluate_with_custom_engine() {
        let params = LinkParameters::default();
        let engine = Engine::new(EngineConfig::default().with_base_efficiency(90.0, 60.0));
        let result = params.evaluate_with(&engine).unwrap();
        assert!((result.efficiency_pct - 88.0).abs() < 1e-9);
    }

    #[test]
    fn impairment_tracks_parameters() {
        let mut params = LinkParameters::default();
        params.set_medium(Medium::Radio);
        assert_eq!(params.impairment(), Impairment::None);

        params.set_distance_km(120.0);
        assert_eq!(params.impairment(), Impairment::Attenuation);
    }
}
