//! The three slider-style controls of the estimator page.
//!
//! Each marker implements [`ParameterRange`] with the exact bounds, step,
//! and default of the corresponding input control, so a
//! [`Parameter`](hydronix_core::parameter::Parameter) carrying one of these
//! markers is valid by construction.

use hydronix_core::parameter::ParameterRange;

/// Crest-to-trough wave height: 0.5–10 m in 0.5 m steps, default 2 m.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaveHeight;

impl ParameterRange for WaveHeight {
    const MIN: f64 = 0.5;
    const MAX: f64 = 10.0;
    const STEP: f64 = 0.5;
    const DEFAULT: f64 = 2.0;
    const LABEL: &'static str = "Wave height (H)";
    const UNIT: &'static str = "m";
}

/// Distance between successive crests: 10–200 m in 5 m steps, default 50 m.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaveLength;

impl ParameterRange for WaveLength {
    const MIN: f64 = 10.0;
    const MAX: f64 = 200.0;
    const STEP: f64 = 5.0;
    const DEFAULT: f64 = 50.0;
    const LABEL: &'static str = "Wave length (L)";
    const UNIT: &'static str = "m";
}

/// Seawater density: 1000–1050 kg/m³ in 1 kg/m³ steps, default 1025 kg/m³.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaterDensity;

impl ParameterRange for WaterDensity {
    const MIN: f64 = 1000.0;
    const MAX: f64 = 1050.0;
    const STEP: f64 = 1.0;
    const DEFAULT: f64 = 1025.0;
    const LABEL: &'static str = "Water density (ρ)";
    const UNIT: &'static str = "kg/m³";
}
