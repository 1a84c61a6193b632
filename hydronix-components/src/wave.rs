//! Wave energy estimation.
//!
//! The flow mirrors the interactive page this models: three slider-style
//! [`parameters`] feed the pure [`WaveEnergyEstimator`], the
//! [`EstimatorPanel`] keeps its cached [`Estimate`] in sync with every
//! parameter change, and [`ReadoutFormatter`] rounds the result for display.

mod estimator;
mod panel;
pub mod parameters;
mod readout;

pub use estimator::{Estimate, Input, PowerPerWaveFront, WaveEnergyEstimator};
pub use panel::EstimatorPanel;
pub use readout::{Readout, ReadoutFormatter};
