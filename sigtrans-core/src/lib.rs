//! Signal transmission calculation engine
//!
//! Derives link-quality metrics (output voltage and power, losses, SNR,
//! Shannon–Hartley capacity, efficiency) from a handful of parameters and a
//! fixed table of medium characteristics.
//!
//! Key properties:
//! - Pure and deterministic: no state survives a call
//! - Constant time: a fixed sequence of closed-form steps, no iteration, no I/O
//! - Never returns NaN or infinity; only an unknown medium is an error
//! - `no_std` capable, no heap allocation
//!
//! ```no_run
//! use sigtrans_core::{compute, CalculationInput};
//!
//! let input = CalculationInput {
//!     distance_km: 10.0,
//!     ..CalculationInput::new("wifi")
//! };
//!
//! match compute(&input) {
//!     Ok(result) => {}, // Render metrics
//!     Err(e) => {},     // Unknown medium
//! }
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]

#[macro_use]
mod logging;

pub mod assessment;
pub mod constants;
pub mod engine;
pub mod errors;
pub mod format;
pub mod limits;
pub mod medium;
pub mod session;
pub mod traits;

// Public API
pub use assessment::{classify_impairment, Impairment};
pub use engine::{compute, CalculationInput, CalculationResult, Engine, EngineConfig};
pub use errors::{SignalError, SignalResult};
pub use limits::{InputLimits, ParameterRange};
pub use medium::{catalog, lookup, CatalogEntry, Medium, MediumClass, MediumProfile};
pub use session::LinkParameters;
pub use traits::MediumCatalog;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
