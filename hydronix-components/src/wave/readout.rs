use std::{convert::Infallible, fmt};

use hydronix_core::Component;

use crate::wave::estimator::Estimate;

/// Display-rounded view of an [`Estimate`].
///
/// Rounding here is presentation only; the estimator always returns full
/// floating-point precision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Readout {
    /// Power to the nearest watt per metre of wave front.
    pub power: i64,

    /// Wave period rounded to one decimal second.
    pub wave_period: f64,

    /// Daily yield, `power × 24`, to the nearest integer. Displayed with a
    /// kWh/m label even though a product of watts and hours is watt-hours
    /// per metre; the factor-of-1000 label discrepancy is preserved
    /// deliberately so the rendered numbers match the page.
    pub daily_energy: i64,
}

impl From<Estimate> for Readout {
    #[allow(clippy::cast_possible_truncation)]
    fn from(estimate: Estimate) -> Self {
        Self {
            power: estimate.power_si().round() as i64,
            wave_period: (estimate.wave_period_si() * 10.0).round() / 10.0,
            daily_energy: estimate.daily_energy_si().round() as i64,
        }
    }
}

impl fmt::Display for Readout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Power output: {} watts per metre of wave front",
            self.power
        )?;
        writeln!(f, "Wave period: {:.1} seconds", self.wave_period)?;
        write!(f, "Daily energy: {} kWh/m", self.daily_energy)
    }
}

/// Component that rounds an [`Estimate`] for display, so it can be chained
/// directly after [`WaveEnergyEstimator`](crate::wave::WaveEnergyEstimator).
pub struct ReadoutFormatter;

impl Component for ReadoutFormatter {
    type Input = Estimate;
    type Output = Readout;
    type Error = Infallible;

    fn call(&self, input: Self::Input) -> Result<Self::Output, Self::Error> {
        Ok(input.into())
    }
}
