//! # Wave Energy Estimator
//!
//! This example drives the estimator the way the interactive page does:
//! it starts a panel at the default slider positions, drags one slider at a
//! time, and prints the refreshed readout after each change. It then sweeps
//! the wave height control across its whole grid using an
//! estimator-to-readout pipeline.
//!
//! ## Running the Example
//!
//! To run this example with Cargo:
//!
//! ```sh
//! cargo run --example wave_energy
//! ```

use hydronix_components::wave::{
    EstimatorPanel, Input, ReadoutFormatter, WaveEnergyEstimator,
    parameters::WaveHeight,
};
use hydronix_core::{Component, parameter::Parameter};
use uom::si::{f64::Length, length::meter};

fn main() {
    let mut panel = EstimatorPanel::new();

    println!("Default sea state");
    println!("-----------------");
    println!("{panel}");
    println!();

    // A few slider drags. Raw values land between detents and get snapped.
    println!("After dragging the sliders");
    println!("--------------------------");
    panel.set_wave_height_si(4.2);
    panel.set_wave_length_si(123.0);
    panel.set_water_density_si(1040.0);
    println!("{panel}");
    println!();

    // Sweep the wave height control across its grid, feeding the estimator
    // straight into the display formatter.
    let pipeline = WaveEnergyEstimator.chain(ReadoutFormatter);

    println!("Power across the wave height range (L = 50 m, ρ = 1025 kg/m³)");
    println!("--------------------------------------------------------------");
    for wave_height in Parameter::<WaveHeight>::grid() {
        let input = Input::default().wave_height(Length::new::<meter>(wave_height.value()));
        let readout = pipeline.call(input).unwrap();
        println!(
            "H = {:>4} m  ->  {:>6} W/m  (T = {:.1} s, {} kWh/m per day)",
            wave_height.value(),
            readout.power,
            readout.wave_period,
            readout.daily_energy,
        );
    }
    println!();

    println!(
        "The estimate is the theoretical power available per metre of wave \
         front. Real installations harvest less; conversion efficiency and \
         local sea conditions reduce the usable yield."
    );
}
