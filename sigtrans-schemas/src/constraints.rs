//! Parameter Constraints for Input Forms
//!
//! Exposes the engine's guard rails so a front end can configure sliders and
//! number inputs without hard-coding them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use sigtrans_core::constants::physics::NOMINAL_INPUT_VALUE;
use sigtrans_core::{InputLimits, ParameterRange};

use crate::SchemaError;

/// Range and unit of one request field
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterConstraints {
    /// Lowest accepted value
    pub min: f64,

    /// Highest accepted value
    pub max: f64,

    /// Display unit, empty for unitless values
    pub unit: String,

    /// Value after a form reset
    pub default: f64,
}

impl From<ParameterRange> for ParameterConstraints {
    fn from(range: ParameterRange) -> Self {
        Self {
            min: range.min,
            max: range.max,
            unit: range.unit.to_string(),
            default: NOMINAL_INPUT_VALUE,
        }
    }
}

fn request_field(name: &str) -> &str {
    match name {
        "input_voltage" => "inputVoltage",
        "ambient_noise" => "ambientNoise",
        other => other,
    }
}

/// Constraints keyed by request field name (`inputVoltage`, `distance`, ...)
pub fn parameter_constraints() -> BTreeMap<String, ParameterConstraints> {
    InputLimits::default()
        .constraints()
        .into_iter()
        .map(|(name, range)| (request_field(name).to_string(), range.into()))
        .collect()
}

/// [`parameter_constraints`] as a JSON object
pub fn constraints_json() -> Result<String, SchemaError> {
    serde_json::to_string(&parameter_constraints()).map_err(|e| SchemaError::Encode(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_match_request_fields() {
        let constraints = parameter_constraints();
        let keys: Vec<_> = constraints.keys().map(String::as_str).collect();
        assert_eq!(
            keys,
            ["ambientNoise", "amplification", "attenuation", "distance", "inputVoltage"]
        );
    }

    #[test]
    fn ranges_follow_input_limits() {
        let constraints = parameter_constraints();

        let distance = &constraints["distance"];
        assert_eq!((distance.min, distance.max), (0.1, 100.0));
        assert_eq!(distance.unit, "km");

        let noise = &constraints["ambientNoise"];
        assert_eq!((noise.min, noise.max), (1.0, 10.0));
        assert!(noise.unit.is_empty());
    }

    #[test]
    fn defaults_sit_inside_ranges() {
        for (name, c) in parameter_constraints() {
            assert!(c.min <= c.default && c.default <= c.max, "{name}");
        }
    }

    #[test]
    fn exports_json_object() {
        let json: serde_json::Value = serde_json::from_str(&constraints_json().unwrap()).unwrap();
        assert_eq!(json["attenuation"]["max"], 60.0);
        assert_eq!(json["inputVoltage"]["unit"], "V");
    }
}
