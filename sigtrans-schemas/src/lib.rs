//! JSON Contract for the Signal Transmission Engine
//!
//! ## Overview
//!
//! Presentation layers (forms, charts, dashboards) talk to the engine through
//! one request/response pair and one catalog listing. This crate pins that
//! contract down as JSON so a front end in any language can drive the engine
//! without linking against its Rust types.
//!
//! ## Request
//!
//! ```json
//! {
//!   "inputVoltage": 1.0,
//!   "distance": 10.0,
//!   "attenuation": 1.0,
//!   "amplification": 1.0,
//!   "ambientNoise": 1.0,
//!   "mediumId": "wifi"
//! }
//! ```
//!
//! Every field is optional; missing numbers default to 1.0 and a missing
//! medium to `coaxial-cable`, which is the reset state of an input form.
//!
//! ## Response
//!
//! Every metric of the result in camelCase (`outputVoltage`, `snr`,
//! `channelCapacity`, ...) plus the dominant `impairment`.
//!
//! ## Request Policy
//!
//! - **Lenient**: anything goes, the engine clamps
//! - **Strict**: the guard rails (voltage 0.1–100 V, distance 0.1–100 km,
//!   attenuation/amplification 0–60 dB, noise 1–10) are enforced first
//!
//! ## Usage Example
//!
//! ```rust
//! use sigtrans_schemas::{evaluate_json, RequestPolicy};
//!
//! let response = evaluate_json(r#"{"mediumId": "radio", "distance": 5}"#, RequestPolicy::Strict)?;
//! assert!(response.contains("\"channelCapacity\""));
//! # Ok::<(), sigtrans_schemas::SchemaError>(())
//! ```

use sigtrans_core::SignalError;

pub mod catalog;
pub mod constraints;
pub mod contract;

pub use catalog::{catalog_json, medium_options, MediumOption};
pub use constraints::{constraints_json, parameter_constraints, ParameterConstraints};
pub use contract::{evaluate, evaluate_json, CalculationRequest, CalculationResponse, RequestPolicy};

/// Contract-related errors
#[derive(Debug, thiserror_no_std::Error)]
pub enum SchemaError {
    #[error("Failed to parse request: {0}")]
    Parse(String),

    #[error("Request rejected: {0}")]
    Engine(SignalError),

    #[error("Failed to encode response: {0}")]
    Encode(String),
}

impl From<SignalError> for SchemaError {
    fn from(err: SignalError) -> Self {
        Self::Engine(err)
    }
}
