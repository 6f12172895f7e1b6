//! Error Types for Signal Transmission Calculations
//!
//! ## Design Philosophy
//!
//! The engine has a two-tier failure model:
//!
//! 1. **Reported**: the caller asked for something that does not exist. An
//!    unknown medium identifier aborts the call and no partial result is
//!    produced.
//!
//! 2. **Recovered**: numeric irregularities (zero voltage, zero distance,
//!    infinite logarithms, NaN inputs) never surface as errors. They are
//!    replaced by documented fallbacks inside the pipeline.
//!
//! Range violations against the presentation guard rails are only reported by
//! [`InputLimits::validate`](crate::limits::InputLimits::validate). The engine
//! itself re-clamps and carries on.
//!
//! Errors are small and `Copy`, carry only `&'static str` payloads, and never
//! allocate.
//!
//! ## Error Handling Strategy
//!
//! ```rust
//! use sigtrans_core::{compute, CalculationInput, SignalError};
//!
//! let input = CalculationInput {
//!     medium_id: "carrier-pigeon",
//!     ..CalculationInput::default()
//! };
//!
//! match compute(&input) {
//!     Ok(result) => {
//!         // render_metrics(&result);
//!         let _ = result;
//!     }
//!     Err(SignalError::UnknownMedium) => {
//!         // Surface a user-facing "pick a medium" message
//!     }
//!     Err(_) => {
//!         // Guard-rail errors only come from InputLimits::validate
//!     }
//! }
//! ```

use thiserror_no_std::Error;

/// Result type for engine operations
pub type SignalResult<T> = Result<T, SignalError>;

/// Engine errors - kept small and `Copy`
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum SignalError {
    /// Medium identifier does not key into the profile table
    #[error("Unknown transmission medium")]
    UnknownMedium,

    /// Parameter outside its presentation guard rail
    #[error("{field} = {value} outside range [{min}, {max}]")]
    OutOfRange {
        /// Name of the offending parameter
        field: &'static str,
        /// Value supplied by the caller
        value: f64,
        /// Lower guard rail
        min: f64,
        /// Upper guard rail
        max: f64,
    },

    /// Parameter is NaN or infinite
    #[error("Invalid value for {field}: not a finite number")]
    InvalidValue {
        /// Name of the offending parameter
        field: &'static str,
    },
}

#[cfg(feature = "defmt")]
impl defmt::Format for SignalError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            Self::UnknownMedium =>
                defmt::write!(fmt, "Unknown medium"),
            Self::OutOfRange { field, value, min, max } =>
                defmt::write!(fmt, "{} = {} outside [{}, {}]", field, value, min, max),
            Self::InvalidValue { field } =>
                defmt::write!(fmt, "Invalid {}", field),
        }
    }
}
