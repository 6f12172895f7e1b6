//! Request/response contract
//!
//! Owned, camelCase mirrors of the engine's input and result types.

use serde::{Deserialize, Serialize};

use sigtrans_core::{
    classify_impairment, compute, lookup, CalculationInput, CalculationResult, Impairment,
    InputLimits,
};

use crate::SchemaError;

/// How strictly a request is checked before it reaches the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestPolicy {
    /// Let the engine clamp whatever arrives
    #[default]
    Lenient,
    /// Enforce the presentation guard rails first
    Strict,
}

/// Calculation request as submitted by a form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CalculationRequest {
    /// Source voltage (V)
    pub input_voltage: f64,
    /// Link length (km)
    pub distance: f64,
    /// Extra attenuator loss (dB)
    pub attenuation: f64,
    /// Extra amplifier gain (dB)
    pub amplification: f64,
    /// Ambient noise multiplier
    pub ambient_noise: f64,
    /// Medium identifier
    pub medium_id: String,
}

impl Default for CalculationRequest {
    fn default() -> Self {
        let input = CalculationInput::default();
        Self {
            input_voltage: input.input_voltage,
            distance: input.distance_km,
            attenuation: input.attenuation_db,
            amplification: input.amplification_db,
            ambient_noise: input.ambient_noise,
            medium_id: input.medium_id.to_string(),
        }
    }
}

impl CalculationRequest {
    /// Borrow as an engine input
    pub fn as_input(&self) -> CalculationInput<'_> {
        CalculationInput {
            input_voltage: self.input_voltage,
            distance_km: self.distance,
            attenuation_db: self.attenuation,
            amplification_db: self.amplification,
            ambient_noise: self.ambient_noise,
            medium_id: &self.medium_id,
        }
    }
}

/// Calculation response for a display layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculationResponse {
    pub input_voltage: f64,
    pub output_voltage: f64,
    pub input_power: f64,
    pub output_power: f64,
    pub total_loss: f64,
    pub medium_loss: f64,
    pub propagation_loss: f64,
    pub attenuation_loss: f64,
    pub amplification_gain: f64,
    pub snr: f64,
    pub noise_level: f64,
    pub channel_capacity: f64,
    pub efficiency: f64,
    pub final_gain: f64,
    pub distance: f64,
    pub impairment: Impairment,
}

impl CalculationResponse {
    /// Combine a result with its impairment classification
    pub fn new(result: &CalculationResult, impairment: Impairment) -> Self {
        Self {
            input_voltage: result.input_voltage,
            output_voltage: result.output_voltage,
            input_power: result.input_power_dbm,
            output_power: result.output_power_dbm,
            total_loss: result.total_loss_db,
            medium_loss: result.medium_loss_db,
            propagation_loss: result.propagation_loss_db,
            attenuation_loss: result.attenuation_loss_db,
            amplification_gain: result.amplification_gain_db,
            snr: result.snr_db,
            noise_level: result.noise_level_dbm,
            channel_capacity: result.channel_capacity_mbps,
            efficiency: result.efficiency_pct,
            final_gain: result.final_gain_db,
            distance: result.distance_km,
            impairment,
        }
    }
}

/// Check, compute and classify one request
pub fn evaluate(
    request: &CalculationRequest,
    policy: RequestPolicy,
) -> Result<CalculationResponse, SchemaError> {
    let input = request.as_input();

    if policy == RequestPolicy::Strict {
        InputLimits::default().validate(&input)?;
    }

    let profile = lookup(&request.medium_id)?;
    let result = compute(&input)?;
    let impairment = classify_impairment(&input, profile);

    Ok(CalculationResponse::new(&result, impairment))
}

/// Parse a JSON request, evaluate it and encode the response as JSON
pub fn evaluate_json(request: &str, policy: RequestPolicy) -> Result<String, SchemaError> {
    let request: CalculationRequest =
        serde_json::from_str(request).map_err(|e| SchemaError::Parse(e.to_string()))?;

    let response = evaluate(&request, policy).map_err(|e| {
        log::warn!("Rejected request for medium {:?}: {}", request.medium_id, e);
        e
    })?;

    serde_json::to_string(&response).map_err(|e| SchemaError::Encode(e.to_string()))
}
