//! Parameter Session Example
//!
//! The engine keeps no state. This example plays the role of an interactive
//! form: it owns a `LinkParameters`, applies edits, validates them against the
//! guard rails and recomputes only when asked.
//!
//! ```bash
//! cargo run --example 03_parameter_session
//! ```

use sigtrans_core::{InputLimits, LinkParameters, Medium};

fn main() {
    let limits = InputLimits::default();
    let mut params = LinkParameters::default();

    println!("Initial state:\n{}\n", params.evaluate());

    // A sequence of form edits
    params.set_medium(Medium::Wifi).set_distance_km(2.5).set_amplification_db(12.0);
    println!("WiFi at 2.5 km with +12 dB:\n{}\n", params.evaluate());

    // An edit outside the guard rails is reported but the engine would still cope
    params.set_distance_km(250.0);
    match limits.validate(&params.input()) {
        Ok(()) => println!("Parameters within guard rails"),
        Err(e) => println!("Rejected edit: {}", e),
    }
    println!("Impairment: {}", params.impairment());

    // Selecting by identifier, as a dropdown would
    if let Err(e) = params.set_medium_id("laser-link") {
        println!("Rejected medium: {}", e);
    }

    params.reset();
    println!("\nAfter reset ({}):\n{}", params.medium(), params.evaluate());
}
