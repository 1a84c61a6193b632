//! Range-and-step-constrained scalar parameters.
//!
//! A [`Parameter<R>`] wraps an `f64` that is guaranteed to lie within the
//! inclusive range of its marker type `R` and to sit on the step grid
//! anchored at the range minimum. The guarantee is established at
//! construction and never revalidated downstream: code that consumes a
//! `Parameter` can trust the value the way it would trust a range-limited,
//! stepped input control.
//!
//! Two constructors are provided:
//!
//! - [`Parameter::new`] validates and fails on out-of-range, off-grid, or
//!   NaN inputs.
//! - [`Parameter::snap`] is total over floats: it clamps to the range and
//!   rounds to the nearest grid point, which is exactly what a slider does
//!   when dragged past its ends or between its detents.

use std::marker::PhantomData;

use thiserror::Error;

/// Relative tolerance, as a fraction of the step size, used when checking
/// grid alignment in [`Parameter::new`]. Absorbs representation error in
/// inputs like `2.0` on a `0.5` grid.
const GRID_TOLERANCE: f64 = 1e-9;

/// Compile-time description of a slider-style control.
///
/// Implement this on a zero-sized marker type to describe one adjustable
/// parameter: its bounds, its step grid, its starting value, and the text a
/// display surface uses to label it.
///
/// The constants must satisfy `MIN < MAX`, `STEP > 0`, and both `DEFAULT`
/// and `MAX` must lie on the grid `MIN + k·STEP`.
pub trait ParameterRange {
    /// Inclusive lower bound.
    const MIN: f64;

    /// Inclusive upper bound.
    const MAX: f64;

    /// Grid spacing; admissible values are `MIN + k·STEP`.
    const STEP: f64;

    /// The value a freshly created control holds.
    const DEFAULT: f64;

    /// Human-readable name used by display surfaces.
    const LABEL: &'static str;

    /// Unit abbreviation used by display surfaces.
    const UNIT: &'static str;
}

/// An error returned when [`Parameter::new`] rejects a value.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ParameterError {
    #[error("value {value} is below the minimum of {min}")]
    BelowMinimum { value: f64, min: f64 },
    #[error("value {value} is above the maximum of {max}")]
    AboveMaximum { value: f64, max: f64 },
    #[error("value {value} does not sit on the {step} step grid")]
    OffStep { value: f64, step: f64 },
    #[error("value is not a number")]
    NotANumber,
}

/// A scalar value constrained to the range and step grid of `R`.
///
/// # Example
///
/// ```
/// use hydronix_core::parameter::{Parameter, ParameterError, ParameterRange};
///
/// #[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// struct Volume;
///
/// impl ParameterRange for Volume {
///     const MIN: f64 = 0.0;
///     const MAX: f64 = 100.0;
///     const STEP: f64 = 5.0;
///     const DEFAULT: f64 = 50.0;
///     const LABEL: &'static str = "Volume";
///     const UNIT: &'static str = "%";
/// }
///
/// let v = Parameter::<Volume>::new(25.0).unwrap();
/// assert_eq!(v.value(), 25.0);
///
/// // Off-grid and out-of-range values are rejected...
/// assert_eq!(
///     Parameter::<Volume>::new(26.0),
///     Err(ParameterError::OffStep { value: 26.0, step: 5.0 })
/// );
///
/// // ...while `snap` lands them on the control's grid.
/// assert_eq!(Parameter::<Volume>::snap(26.0).value(), 25.0);
/// assert_eq!(Parameter::<Volume>::snap(130.0).value(), 100.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Parameter<R: ParameterRange> {
    value: f64,
    _range: PhantomData<R>,
}

impl<R: ParameterRange> Parameter<R> {
    /// Constructs a parameter, validating range and grid alignment.
    ///
    /// Values within a small tolerance of a grid point are accepted and
    /// normalized onto the grid.
    ///
    /// # Errors
    ///
    /// - [`ParameterError::NotANumber`] if the value is NaN.
    /// - [`ParameterError::BelowMinimum`] / [`ParameterError::AboveMaximum`]
    ///   if the value lies outside `[MIN, MAX]`.
    /// - [`ParameterError::OffStep`] if the value is between grid points.
    pub fn new(value: f64) -> Result<Self, ParameterError> {
        if value.is_nan() {
            return Err(ParameterError::NotANumber);
        }
        if value < R::MIN {
            return Err(ParameterError::BelowMinimum {
                value,
                min: R::MIN,
            });
        }
        if value > R::MAX {
            return Err(ParameterError::AboveMaximum {
                value,
                max: R::MAX,
            });
        }

        let offset = (value - R::MIN) / R::STEP;
        let nearest = offset.round();
        if (offset - nearest).abs() > GRID_TOLERANCE {
            return Err(ParameterError::OffStep {
                value,
                step: R::STEP,
            });
        }

        Ok(Self::at_grid_point(nearest))
    }

    /// Constructs a parameter by clamping to the range and rounding to the
    /// nearest grid point, the way a slider control quantizes a drag.
    ///
    /// Total over all floats; NaN falls back to the default.
    #[must_use]
    pub fn snap(value: f64) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        let clamped = value.clamp(R::MIN, R::MAX);
        Self::at_grid_point(((clamped - R::MIN) / R::STEP).round())
    }

    /// Returns the inner value.
    #[must_use]
    pub fn value(self) -> f64 {
        self.value
    }

    /// Iterates every admissible value, from `MIN` to `MAX` inclusive.
    pub fn grid() -> impl Iterator<Item = Self> {
        let last = ((R::MAX - R::MIN) / R::STEP).round() as u32;
        (0..=last).map(|index| Self::at_grid_point(f64::from(index)))
    }

    fn at_grid_point(index: f64) -> Self {
        Self {
            value: (R::MIN + index * R::STEP).min(R::MAX),
            _range: PhantomData,
        }
    }
}

impl<R: ParameterRange> Default for Parameter<R> {
    /// Returns the range's default value.
    fn default() -> Self {
        Self {
            value: R::DEFAULT,
            _range: PhantomData,
        }
    }
}

impl<R: ParameterRange> From<Parameter<R>> for f64 {
    fn from(parameter: Parameter<R>) -> f64 {
        parameter.value()
    }
}
