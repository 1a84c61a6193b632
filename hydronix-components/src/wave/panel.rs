use std::fmt;

use hydronix_core::{
    Component,
    parameter::{Parameter, ParameterRange},
};

use crate::wave::{
    estimator::{Estimate, Input, WaveEnergyEstimator},
    parameters::{WaterDensity, WaveHeight, WaveLength},
    readout::Readout,
};

/// The estimator page's state: three slider parameters and the estimate
/// derived from them.
///
/// The panel keeps its estimate consistent by construction. Every setter
/// recomputes it synchronously by calling [`WaveEnergyEstimator`] before
/// returning, so a read through [`estimate()`] after any set always reflects
/// the new value. There is no deferred work and the recomputation cannot
/// fail.
///
/// Dropping the panel discards all state; nothing is persisted.
///
/// [`estimate()`]: EstimatorPanel::estimate
///
/// # Example
///
/// ```
/// use hydronix_components::wave::EstimatorPanel;
///
/// let mut panel = EstimatorPanel::new();
/// let at_rest = panel.estimate().power_si();
///
/// // A slider drag lands between detents; the panel snaps it.
/// panel.set_wave_height_si(4.2);
/// assert_eq!(panel.wave_height().value(), 4.0);
/// assert!(panel.estimate().power_si() > at_rest);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EstimatorPanel {
    wave_height: Parameter<WaveHeight>,
    wave_length: Parameter<WaveLength>,
    water_density: Parameter<WaterDensity>,
    estimate: Estimate,
}

impl EstimatorPanel {
    /// Creates a panel at the sliders' default positions, with the estimate
    /// already computed.
    #[must_use]
    pub fn new() -> Self {
        let wave_height = Parameter::default();
        let wave_length = Parameter::default();
        let water_density = Parameter::default();

        Self {
            wave_height,
            wave_length,
            water_density,
            estimate: estimate_for(wave_height, wave_length, water_density),
        }
    }

    /// Sets the wave height and synchronously refreshes the estimate.
    pub fn set_wave_height(&mut self, wave_height: Parameter<WaveHeight>) {
        self.wave_height = wave_height;
        self.refresh();
    }

    /// Sets the wave height from a raw slider value in metres, snapping it
    /// to the control's grid.
    pub fn set_wave_height_si(&mut self, metres: f64) {
        self.set_wave_height(Parameter::snap(metres));
    }

    /// Sets the wave length and synchronously refreshes the estimate.
    pub fn set_wave_length(&mut self, wave_length: Parameter<WaveLength>) {
        self.wave_length = wave_length;
        self.refresh();
    }

    /// Sets the wave length from a raw slider value in metres, snapping it
    /// to the control's grid.
    pub fn set_wave_length_si(&mut self, metres: f64) {
        self.set_wave_length(Parameter::snap(metres));
    }

    /// Sets the water density and synchronously refreshes the estimate.
    pub fn set_water_density(&mut self, water_density: Parameter<WaterDensity>) {
        self.water_density = water_density;
        self.refresh();
    }

    /// Sets the water density from a raw slider value in kg/m³, snapping it
    /// to the control's grid.
    pub fn set_water_density_si(&mut self, density: f64) {
        self.set_water_density(Parameter::snap(density));
    }

    /// Current wave height.
    #[must_use]
    pub fn wave_height(&self) -> Parameter<WaveHeight> {
        self.wave_height
    }

    /// Current wave length.
    #[must_use]
    pub fn wave_length(&self) -> Parameter<WaveLength> {
        self.wave_length
    }

    /// Current water density.
    #[must_use]
    pub fn water_density(&self) -> Parameter<WaterDensity> {
        self.water_density
    }

    /// The estimate for the current parameters. Never stale.
    #[must_use]
    pub fn estimate(&self) -> Estimate {
        self.estimate
    }

    /// The estimator input corresponding to the current parameters.
    #[must_use]
    pub fn input(&self) -> Input {
        input_for(self.wave_height, self.wave_length, self.water_density)
    }

    fn refresh(&mut self) {
        self.estimate = match WaveEnergyEstimator.call(self.input()) {
            Ok(estimate) => estimate,
            Err(never) => match never {},
        };
    }
}

impl Default for EstimatorPanel {
    fn default() -> Self {
        Self::new()
    }
}

fn input_for(
    wave_height: Parameter<WaveHeight>,
    wave_length: Parameter<WaveLength>,
    water_density: Parameter<WaterDensity>,
) -> Input {
    Input::default()
        .wave_height_si(wave_height.value())
        .wave_length_si(wave_length.value())
        .water_density_si(water_density.value())
}

fn estimate_for(
    wave_height: Parameter<WaveHeight>,
    wave_length: Parameter<WaveLength>,
    water_density: Parameter<WaterDensity>,
) -> Estimate {
    match WaveEnergyEstimator.call(input_for(wave_height, wave_length, water_density)) {
        Ok(estimate) => estimate,
        Err(never) => match never {},
    }
}

/// Renders the page text: one line per control with its current value and
/// range caption, then the rounded readout.
impl fmt::Display for EstimatorPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        control_line(f, self.wave_height)?;
        control_line(f, self.wave_length)?;
        control_line(f, self.water_density)?;
        writeln!(f)?;
        write!(f, "{}", Readout::from(self.estimate))
    }
}

fn control_line<R: ParameterRange>(
    f: &mut fmt::Formatter<'_>,
    parameter: Parameter<R>,
) -> fmt::Result {
    writeln!(
        f,
        "{0}: {1} {2}  [{3} {2} to {4} {2}]",
        R::LABEL,
        parameter.value(),
        R::UNIT,
        R::MIN,
        R::MAX,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_panel_matches_estimator_at_defaults() {
        let panel = EstimatorPanel::new();

        let direct = match WaveEnergyEstimator.call(Input::default()) {
            Ok(estimate) => estimate,
            Err(never) => match never {},
        };

        assert_eq!(panel.estimate(), direct);
        assert_eq!(panel.wave_height().value(), 2.0);
        assert_eq!(panel.wave_length().value(), 50.0);
        assert_eq!(panel.water_density().value(), 1025.0);
    }

    #[test]
    fn setters_refresh_the_estimate_synchronously() {
        let mut panel = EstimatorPanel::new();
        panel.set_wave_height(Parameter::new(4.0).unwrap());

        let direct = match WaveEnergyEstimator.call(Input::default().wave_height_si(4.0)) {
            Ok(estimate) => estimate,
            Err(never) => match never {},
        };

        assert_eq!(panel.estimate(), direct);
    }

    #[test]
    fn each_setter_is_reflected_in_the_next_read() {
        let mut panel = EstimatorPanel::new();

        panel.set_wave_length_si(100.0);
        let after_length = panel.estimate();

        panel.set_water_density_si(1050.0);
        let after_density = panel.estimate();

        assert!(after_length.wave_period_si() > 0.0);
        assert_ne!(after_length, after_density);
        assert_eq!(panel.wave_length().value(), 100.0);
        assert_eq!(panel.water_density().value(), 1050.0);
    }

    #[test]
    fn si_setters_snap_raw_slider_values() {
        let mut panel = EstimatorPanel::new();

        panel.set_wave_height_si(3.3);
        assert_eq!(panel.wave_height().value(), 3.5);

        panel.set_wave_length_si(-20.0);
        assert_eq!(panel.wave_length().value(), 10.0);

        panel.set_water_density_si(2000.0);
        assert_eq!(panel.water_density().value(), 1050.0);
    }

    #[test]
    fn display_renders_controls_and_readout() {
        let panel = EstimatorPanel::new();
        let text = panel.to_string();

        assert!(text.contains("Wave height (H): 2 m  [0.5 m to 10 m]"));
        assert!(text.contains("Wave length (L): 50 m  [10 m to 200 m]"));
        assert!(text.contains("Water density (ρ): 1025 kg/m³  [1000 kg/m³ to 1050 kg/m³]"));
        assert!(text.contains("Wave period: 5.7 seconds"));
    }
}
