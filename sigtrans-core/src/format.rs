//! Display formatting for metrics
//!
//! Display layers show every metric with a fixed number of decimals and a
//! placeholder when the value is not a finite number.

use core::fmt;

/// Shown in place of NaN or infinite values
pub const PLACEHOLDER: &str = "N/A";

/// Decimals used unless a metric asks for more or fewer
pub const DEFAULT_DECIMALS: usize = 2;

/// A value rendered at fixed precision
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metric {
    value: f64,
    decimals: usize,
}

impl Metric {
    /// Render `value` with [`DEFAULT_DECIMALS`]
    pub fn new(value: f64) -> Self {
        Self {
            value,
            decimals: DEFAULT_DECIMALS,
        }
    }

    /// Change the number of decimals
    pub fn with_decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.value.is_finite() {
            write!(f, "{:.*}", self.decimals, self.value)
        } else {
            f.pad(PLACEHOLDER)
        }
    }
}
