use std::{convert::Infallible, f64::consts::PI};

use hydronix_core::{Component, parameter::ParameterRange};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use uom::fmt::DisplayStyle;
use uom::{
    si::{
        ISQ, Quantity, SI,
        acceleration::meter_per_second_squared,
        f64::{Acceleration, Length, MassDensity, Time},
        length::meter,
        mass_density::kilogram_per_cubic_meter,
        time::second,
    },
    typenum::{N3, P1, Z0},
};

use crate::wave::parameters::{WaterDensity, WaveHeight, WaveLength};

/// Power per metre of wave front (W/m or kg·m/s³).
pub type PowerPerWaveFront = Quantity<ISQ<P1, P1, N3, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Component estimating the theoretical wave energy flux from sea state.
///
/// Uses the deep-water approximation: the wave period follows from the wave
/// length alone, and the power per metre of wave front follows from density,
/// height, and period. The estimator is pure and total over its domain; the
/// input parameters are range-constrained at their source, so `L > 0` always
/// holds and the radicand is never negative.
pub struct WaveEnergyEstimator;

/// Sea-state input to the estimator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Input {
    /// Crest-to-trough wave height.
    #[serde(
        serialize_with = "serialize_length",
        deserialize_with = "deserialize_length"
    )]
    pub wave_height: Length,

    /// Distance between successive crests.
    #[serde(
        serialize_with = "serialize_length",
        deserialize_with = "deserialize_length"
    )]
    pub wave_length: Length,

    /// Seawater density.
    #[serde(
        serialize_with = "serialize_density",
        deserialize_with = "deserialize_density"
    )]
    pub water_density: MassDensity,
}

/// Derived quantities, at full floating-point precision.
///
/// Display rounding lives in [`crate::wave::Readout`]; the estimator never
/// rounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Estimate {
    /// Time for one full wave cycle to pass a fixed point.
    pub wave_period: Time,

    /// Theoretical energy flux per unit length of wave crest.
    pub power: PowerPerWaveFront,

    /// The raw product `power × 24`, the figure the page displays as daily
    /// yield. The 24 is a bare scalar, so the quantity keeps the power
    /// dimension; see [`crate::wave::Readout::daily_energy`] for the unit
    /// labeling caveat.
    pub daily_energy: PowerPerWaveFront,
}

/// Gravitational acceleration used by the estimate (9.81 m/s²).
fn gravity() -> Acceleration {
    Acceleration::new::<meter_per_second_squared>(9.81)
}

impl Input {
    /// Sets the wave height from a `uom::Length`.
    #[must_use]
    pub fn wave_height(mut self, wave_height: Length) -> Self {
        self.wave_height = wave_height;
        self
    }

    /// Sets the wave height in SI units (m).
    #[must_use]
    pub fn wave_height_si(self, wave_height: f64) -> Self {
        self.wave_height(Length::new::<meter>(wave_height))
    }

    /// Sets the wave length from a `uom::Length`.
    #[must_use]
    pub fn wave_length(mut self, wave_length: Length) -> Self {
        self.wave_length = wave_length;
        self
    }

    /// Sets the wave length in SI units (m).
    #[must_use]
    pub fn wave_length_si(self, wave_length: f64) -> Self {
        self.wave_length(Length::new::<meter>(wave_length))
    }

    /// Sets the water density from a `uom::MassDensity`.
    #[must_use]
    pub fn water_density(mut self, water_density: MassDensity) -> Self {
        self.water_density = water_density;
        self
    }

    /// Sets the water density in SI units (kg/m³).
    #[must_use]
    pub fn water_density_si(self, water_density: f64) -> Self {
        self.water_density(MassDensity::new::<kilogram_per_cubic_meter>(water_density))
    }
}

impl Default for Input {
    /// Starts at the sliders' default positions.
    fn default() -> Self {
        Self {
            wave_height: Length::new::<meter>(WaveHeight::DEFAULT),
            wave_length: Length::new::<meter>(WaveLength::DEFAULT),
            water_density: MassDensity::new::<kilogram_per_cubic_meter>(WaterDensity::DEFAULT),
        }
    }
}

impl Estimate {
    /// Wave period in seconds.
    #[must_use]
    pub fn wave_period_si(&self) -> f64 {
        self.wave_period.get::<second>()
    }

    /// Power in watts per metre of wave front.
    ///
    /// [`PowerPerWaveFront`] is a dimension alias with no named `uom` unit,
    /// so this reads the raw base value, which is the coherent SI value
    /// (W/m) by construction.
    #[must_use]
    pub fn power_si(&self) -> f64 {
        self.power.value
    }

    /// Daily yield figure in the page's display units (power × 24).
    ///
    /// Raw base-value access, as in [`Estimate::power_si`].
    #[must_use]
    pub fn daily_energy_si(&self) -> f64 {
        self.daily_energy.value
    }
}

impl Component for WaveEnergyEstimator {
    type Input = Input;
    type Output = Estimate;
    type Error = Infallible;

    /// Computes the period, power, and daily yield from the sea state.
    ///
    /// - `T = sqrt(2πL / g)`
    /// - `P = ρ g² H² T / 64π`
    /// - `daily = P × 24`
    fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        let Input {
            wave_height,
            wave_length,
            water_density,
        } = input;

        let g = gravity();
        let wave_period: Time = (2.0 * PI * wave_length / g).sqrt();
        let power: PowerPerWaveFront =
            water_density * g * g * wave_height * wave_height * wave_period / (64.0 * PI);

        Ok(Estimate {
            wave_period,
            power,
            daily_energy: power * 24.0,
        })
    }
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn serialize_length<S>(length: &Length, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format!(
        "{:?}",
        length.into_format_args(meter, DisplayStyle::Abbreviation)
    ))
}

fn deserialize_length<'de, D>(deserializer: D) -> Result<Length, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    s.parse::<Length>()
        .map_err(|e| serde::de::Error::custom(format!("Failed to parse length: {e}")))
}

#[allow(clippy::trivially_copy_pass_by_ref)]
fn serialize_density<S>(density: &MassDensity, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.serialize_str(&format!(
        "{:?}",
        density.into_format_args(kilogram_per_cubic_meter, DisplayStyle::Abbreviation)
    ))
}

fn deserialize_density<'de, D>(deserializer: D) -> Result<MassDensity, D::Error>
where
    D: Deserializer<'de>,
{
    let s = String::deserialize(deserializer)?;
    s.parse::<MassDensity>()
        .map_err(|e| serde::de::Error::custom(format!("Failed to parse density: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    const G: f64 = 9.81;

    fn estimate(input: Input) -> Estimate {
        match WaveEnergyEstimator.call(input) {
            Ok(estimate) => estimate,
            Err(never) => match never {},
        }
    }

    fn input_si(height: f64, length: f64, density: f64) -> Input {
        Input::default()
            .wave_height_si(height)
            .wave_length_si(length)
            .water_density_si(density)
    }

    #[test]
    fn default_sea_state_period_and_power() {
        let output = estimate(Input::default());

        let expected_period = (2.0 * PI * 50.0 / G).sqrt();
        let expected_power = 1025.0 * G.powi(2) * 2.0_f64.powi(2) * expected_period / (64.0 * PI);

        assert_relative_eq!(output.wave_period_si(), expected_period, max_relative = 1e-12);
        assert_relative_eq!(output.power_si(), expected_power, max_relative = 1e-12);
    }

    #[test]
    fn daily_energy_is_exactly_power_times_24() {
        for (height, length, density) in [
            (2.0, 50.0, 1025.0),
            (0.5, 10.0, 1000.0),
            (10.0, 200.0, 1050.0),
            (3.5, 85.0, 1013.0),
        ] {
            let output = estimate(input_si(height, length, density));
            assert_eq!(output.daily_energy, output.power * 24.0);
        }
    }

    #[test]
    fn power_is_strictly_increasing_in_height() {
        let mut previous = f64::NEG_INFINITY;
        for height in (1..=20).map(|step| f64::from(step) * 0.5) {
            let output = estimate(input_si(height, 50.0, 1025.0));
            assert!(
                output.power_si() > previous,
                "power did not increase at H = {height}"
            );
            previous = output.power_si();
        }
    }

    #[test]
    fn period_and_power_are_strictly_increasing_in_length() {
        let mut previous_period = f64::NEG_INFINITY;
        let mut previous_power = f64::NEG_INFINITY;
        for length in (2..=40).map(|step| f64::from(step) * 5.0) {
            let output = estimate(input_si(2.0, length, 1025.0));
            assert!(
                output.wave_period_si() > previous_period,
                "period did not increase at L = {length}"
            );
            assert!(
                output.power_si() > previous_power,
                "power did not increase at L = {length}"
            );
            previous_period = output.wave_period_si();
            previous_power = output.power_si();
        }
    }

    #[test]
    fn boundary_sea_states_are_finite_and_positive() {
        for input in [input_si(0.5, 10.0, 1000.0), input_si(10.0, 200.0, 1050.0)] {
            let output = estimate(input);
            for value in [
                output.wave_period_si(),
                output.power_si(),
                output.daily_energy_si(),
            ] {
                assert!(value.is_finite());
                assert!(value > 0.0);
            }
        }
    }

    #[test]
    fn identical_inputs_yield_bit_identical_outputs() {
        let input = input_si(3.5, 85.0, 1013.0);

        let first = estimate(input);
        let rerun = estimate(input);

        assert_eq!(first.wave_period_si().to_bits(), rerun.wave_period_si().to_bits());
        assert_eq!(first.power_si().to_bits(), rerun.power_si().to_bits());
        assert_eq!(
            first.daily_energy_si().to_bits(),
            rerun.daily_energy_si().to_bits()
        );
    }

    #[test]
    fn input_serialization_roundtrip() {
        let input = input_si(2.5, 75.0, 1030.0);

        let json = serde_json::to_string(&input).unwrap();
        let deserialized: Input = serde_json::from_str(&json).unwrap();

        assert_relative_eq!(
            deserialized.wave_height.get::<meter>(),
            2.5,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            deserialized.wave_length.get::<meter>(),
            75.0,
            max_relative = 1e-12
        );
        assert_relative_eq!(
            deserialized
                .water_density
                .get::<kilogram_per_cubic_meter>(),
            1030.0,
            max_relative = 1e-12
        );
    }
}
