//! Medium Comparison Example
//!
//! Runs the same request over every built-in medium and prints a table, the
//! way a selection control would list the catalog.
//!
//! ```bash
//! cargo run --example 02_medium_comparison
//! ```

use sigtrans_core::{
    catalog, classify_impairment, compute, format::Metric, lookup, CalculationInput,
};

fn main() {
    println!("Catalog:");
    for entry in catalog() {
        println!(
            "  {:<14} {:<20} {:<9} {:>5} dB/km {:>6} MHz {:>6} Mbps",
            entry.id, entry.name, entry.class, entry.loss_per_km,
            entry.bandwidth_mhz, entry.max_capacity_mbps,
        );
    }
    println!();

    for distance_km in [1.0, 10.0, 50.0] {
        println!("Distance {} km:", distance_km);
        println!(
            "  {:<14} {:>10} {:>10} {:>10} {:>8}  {}",
            "medium", "loss dB", "SNR dB", "C Mbps", "eff %", "impairment"
        );

        for entry in catalog() {
            let input = CalculationInput {
                distance_km,
                ..CalculationInput::new(entry.id)
            };
            let Ok(result) = compute(&input) else { continue };
            let Ok(profile) = lookup(entry.id) else { continue };

            println!(
                "  {:<14} {:>10} {:>10} {:>10} {:>8}  {}",
                entry.id,
                Metric::new(result.total_loss_db).to_string(),
                Metric::new(result.snr_db).to_string(),
                Metric::new(result.channel_capacity_mbps).to_string(),
                Metric::new(result.efficiency_pct).with_decimals(1).to_string(),
                classify_impairment(&input, profile),
            );
        }
        println!();
    }
}
