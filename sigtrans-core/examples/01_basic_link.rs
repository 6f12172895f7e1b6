//! Basic Link Calculation Example
//!
//! This example demonstrates the simplest use case: computing link metrics
//! for one set of parameters over one medium.
//!
//! ## What You'll Learn
//!
//! - Building a calculation request
//! - Reading the metrics of a result
//! - How the engine clamps out-of-domain inputs
//! - Handling an unknown medium
//!
//! ## Running the Example
//!
//! ```bash
//! cargo run --example 01_basic_link
//! ```

use sigtrans_core::{
    compute,
    format::Metric,
    CalculationInput, SignalError,
};

fn main() {
    println!("Signal Transmission Basic Example");
    println!("=================================\n");

    // 2 V into 5 km of coax with a 3 dB attenuator and a 10 dB amplifier
    let input = CalculationInput {
        input_voltage: 2.0,
        distance_km: 5.0,
        attenuation_db: 3.0,
        amplification_db: 10.0,
        ambient_noise: 1.5,
        medium_id: "coaxial-cable",
    };

    println!("Request:");
    println!("  Medium:        {}", input.medium_id);
    println!("  Input voltage: {} V", input.input_voltage);
    println!("  Distance:      {} km", input.distance_km);
    println!("  Attenuation:   {} dB", input.attenuation_db);
    println!("  Amplification: {} dB", input.amplification_db);
    println!("  Ambient noise: {}x", input.ambient_noise);
    println!();

    match compute(&input) {
        Ok(result) => {
            println!("Result:\n{}\n", result);
            println!("Breakdown:");
            println!("  Input power:      {} dBm", Metric::new(result.input_power_dbm));
            println!("  Medium loss:      {} dB", Metric::new(result.medium_loss_db));
            println!("  Propagation loss: {} dB", Metric::new(result.propagation_loss_db));
            println!("  Output power:     {} dBm", Metric::new(result.output_power_dbm));
        }
        Err(e) => println!("Calculation failed: {}", e),
    }

    // Zero voltage and distance are clamped, not rejected
    println!("\n{}", "=".repeat(60));
    let degenerate = CalculationInput {
        input_voltage: 0.0,
        distance_km: 0.0,
        ..CalculationInput::default()
    };
    if let Ok(result) = compute(&degenerate) {
        println!("Zero inputs clamped to V = {} V, d = {} km", result.input_voltage, result.distance_km);
        println!("Input power: {} dBm", Metric::new(result.input_power_dbm));
    }

    // Unknown media are the only hard failure
    println!("\n{}", "=".repeat(60));
    match compute(&CalculationInput::new("carrier-pigeon")) {
        Ok(_) => println!("Unexpected success"),
        Err(SignalError::UnknownMedium) => println!("carrier-pigeon: unknown medium, no result produced"),
        Err(e) => println!("Unexpected error: {}", e),
    }
}
