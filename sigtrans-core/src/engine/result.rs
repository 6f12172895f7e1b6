//! Calculation response

use core::fmt;

use crate::format::Metric;

/// Link metrics produced by one calculation
///
/// Every field is finite. Inputs are echoed back after sanitation, so
/// `input_voltage` and `distance_km` show the values actually used.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CalculationResult {
    /// Sanitized source voltage (V)
    pub input_voltage: f64,
    /// Voltage at the receiver (V)
    pub output_voltage: f64,
    /// Input power (dBm)
    pub input_power_dbm: f64,
    /// Output power (dBm)
    pub output_power_dbm: f64,
    /// Medium + propagation + attenuator loss (dB)
    pub total_loss_db: f64,
    /// Loss along the medium (dB)
    pub medium_loss_db: f64,
    /// Free-space path loss, zero for guided media (dB)
    pub propagation_loss_db: f64,
    /// Extra attenuator loss (dB)
    pub attenuation_loss_db: f64,
    /// Extra amplifier gain (dB)
    pub amplification_gain_db: f64,
    /// Signal-to-noise ratio (dB)
    pub snr_db: f64,
    /// Effective noise level (dBm)
    pub noise_level_dbm: f64,
    /// Shannon–Hartley capacity, capped by the medium (Mbps)
    pub channel_capacity_mbps: f64,
    /// Link efficiency (%)
    pub efficiency_pct: f64,
    /// Output over input voltage (dB)
    pub final_gain_db: f64,
    /// Sanitized link length (km)
    pub distance_km: f64,
}

impl CalculationResult {
    /// Every numeric field, in declaration order
    pub fn fields(&self) -> [(&'static str, f64); 15] {
        [
            ("input_voltage", self.input_voltage),
            ("output_voltage", self.output_voltage),
            ("input_power_dbm", self.input_power_dbm),
            ("output_power_dbm", self.output_power_dbm),
            ("total_loss_db", self.total_loss_db),
            ("medium_loss_db", self.medium_loss_db),
            ("propagation_loss_db", self.propagation_loss_db),
            ("attenuation_loss_db", self.attenuation_loss_db),
            ("amplification_gain_db", self.amplification_gain_db),
            ("snr_db", self.snr_db),
            ("noise_level_dbm", self.noise_level_dbm),
            ("channel_capacity_mbps", self.channel_capacity_mbps),
            ("efficiency_pct", self.efficiency_pct),
            ("final_gain_db", self.final_gain_db),
            ("distance_km", self.distance_km),
        ]
    }

    /// True when no field is NaN or infinite
    pub fn is_finite(&self) -> bool {
        self.fields().iter().all(|(_, value)| value.is_finite())
    }
}

impl fmt::Display for CalculationResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Output voltage:   {} V", Metric::new(self.output_voltage))?;
        writeln!(f, "Total loss:       {} dB", Metric::new(self.total_loss_db))?;
        writeln!(f, "Final gain:       {} dB", Metric::new(self.final_gain_db))?;
        writeln!(f, "Noise level:      {} dBm", Metric::new(self.noise_level_dbm))?;
        writeln!(f, "SNR:              {} dB", Metric::new(self.snr_db))?;
        writeln!(f, "Channel capacity: {} Mbps", Metric::new(self.channel_capacity_mbps))?;
        write!(f, "Efficiency:       {} %", Metric::new(self.efficiency_pct))
    }
}
