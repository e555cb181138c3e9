//! Shared configuration for Newton-Gregory runners.
//!
//! Provides [`CommonCfg`] with the dataset, the formula [`Direction`] and the
//! two tolerances used while validating the sample grid. Shared by
//! [`crate::interpolation::gregory::GregoryCfg`] and
//! [`crate::interpolation::sweep::SweepCfg`].
//!
//! [`CommonCfg`] — universal fields
//! - `x`             : x values provided, strictly increasing and evenly spaced
//! - `y`             : y values provided
//! - `direction`     : forward or backward formula
//! - `x_min_spacing` : minimum allowed spacing between adjacent `x`
//! - `spacing_tol`   : relative tolerance of the uniform-spacing check
//!
//! [`CommonCfg::new`] initializes configuration with empty `&[f64]`s.


use crate::interpolation::algorithms::Direction;
use crate::interpolation::errors::InterpolationError;

pub const DEFAULT_X_TOL: f64 = 1e-12;
pub const DEFAULT_SPACING_TOL: f64 = 1e-9;


/// One `(x, y)` observation.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct SamplePoint {
    pub x: f64,
    pub y: f64,
}

impl SamplePoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for SamplePoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Splits points into the `(x, y)` columns consumed by the configs.
pub fn split_points(points: &[SamplePoint]) -> (Vec<f64>, Vec<f64>) {
    points.iter().map(|p| (p.x, p.y)).unzip()
}


#[derive(Debug, Copy, Clone)]
pub struct CommonCfg<'a> {
    pub(crate) x            : &'a [f64],
    pub(crate) y            : &'a [f64],
    pub(crate) direction    : Direction,
    pub(crate) x_min_spacing: f64,
    pub(crate) spacing_tol  : f64,
}

impl<'a> CommonCfg<'a> {
    pub fn new() -> Self {
        Self {
            x            : &[],
            y            : &[],
            direction    : Direction::Forward,
            x_min_spacing: DEFAULT_X_TOL,
            spacing_tol  : DEFAULT_SPACING_TOL,
        }
    }

    /// Checks the complete dataset and returns the step `h = x[1] - x[0]`.
    ///
    /// # Errors
    /// - [`InterpolationError::EmptyInput`] if `x` or `y` was never set
    /// - [`InterpolationError::UnequalLength`]
    /// - [`InterpolationError::InsufficientPoints`] for fewer than 2 points
    /// - [`InterpolationError::NonUniformSpacing`] from [`uniform_step`]
    pub fn validate(&self) -> Result<f64, InterpolationError> {
        let x = self.x;
        let y = self.y;

        if x.is_empty() || y.is_empty() {
            return Err(InterpolationError::EmptyInput);
        }
        if x.len() != y.len() {
            return Err(InterpolationError::UnequalLength { x_len: x.len(), y_len: y.len() });
        }
        if x.len() < 2 {
            return Err(InterpolationError::InsufficientPoints { got: x.len() });
        }
        uniform_step(x, self.spacing_tol)
    }

    // getters
    pub fn x(&self) -> &'a [f64] { self.x }
    pub fn y(&self) -> &'a [f64] { self.y }
    pub fn direction(&self) -> Direction { self.direction }
    pub fn x_min_spacing(&self) -> f64 { self.x_min_spacing }
    pub fn spacing_tol(&self) -> f64 { self.spacing_tol }

    // setters
    pub(crate) fn with_x(&mut self, v: &'a [f64]) { self.x = v; }
    pub(crate) fn with_y(&mut self, v: &'a [f64]) { self.y = v; }
    pub(crate) fn with_direction(&mut self, v: Direction) { self.direction = v; }
    pub(crate) fn with_x_min_spacing(&mut self, v: f64) { self.x_min_spacing = v; }
    pub(crate) fn with_spacing_tol(&mut self, v: f64) { self.spacing_tol = v; }
}


/// Returns the common step of `x`, or the first step that disagrees with it.
///
/// Every step `x[i+1] - x[i]` must satisfy `|dx - h| <= slack` with
/// `h = x[1] - x[0]` and
///
/// ```text
/// slack = spacing_tol * |h| + 4 * EPSILON * max|x|
/// ```
///
/// The second term absorbs the rounding of x-values far from zero. A
/// `spacing_tol` of `0.0` demands exact equality and drops it.
///
/// # Errors
/// - [`InterpolationError::InsufficientPoints`] for fewer than 2 values
/// - [`InterpolationError::NonUniformSpacing`] at the first offending step
pub fn uniform_step(x: &[f64], spacing_tol: f64) -> Result<f64, InterpolationError> {
    if x.len() < 2 {
        return Err(InterpolationError::InsufficientPoints { got: x.len() });
    }

    let h     = x[1] - x[0];
    let slack = if spacing_tol > 0.0 {
        let x_abs_max = x.iter().fold(0.0_f64, |m, v| m.max(v.abs()));
        spacing_tol * h.abs() + 4.0 * f64::EPSILON * x_abs_max
    } else {
        0.0
    };

    for (i, w) in x.windows(2).enumerate().skip(1) {
        let dx = w[1] - w[0];
        if (dx - h).abs() > slack {
            return Err(InterpolationError::NonUniformSpacing {
                idx: i,
                expected: h,
                got: dx
            });
        }
    }

    Ok(h)
}


pub(crate) fn non_finite_idx(xs: &[f64]) -> Option<usize> {
    xs.iter().position(|x| !x.is_finite())
}

macro_rules! impl_common_cfg {
    ($cfg:ty) => {
        impl<'a> $cfg {
            pub fn set_x(
                mut self,
                v: &'a [f64],
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::errors::InterpolationError;

                if v.is_empty() {
                    return Err(InterpolationError::EmptyInput);
                }
                if let Some(idx) = $crate::interpolation::config::non_finite_idx(v) {
                    return Err(InterpolationError::NonFiniteVec { idx });
                }
                if v.len() < 2 {
                    return Err(InterpolationError::InsufficientPoints { got: v.len() });
                }
                for i in 1..v.len() {
                    if (v[i] - v[i - 1]).abs() < self.common.x_min_spacing {
                        return Err(InterpolationError::DuplicateX {
                            x1: v[i - 1],
                            x2: v[i],
                        });
                    }
                    if v[i] <= v[i - 1] {
                        return Err(InterpolationError::NonIncreasingX);
                    }
                }

                // length agreement check
                // symmetric with set_y
                let y_len = self.common.y.len();
                if y_len != 0 && y_len != v.len() {
                    return Err(InterpolationError::UnequalLength { x_len: v.len(), y_len });
                }

                self.common.with_x(v);
                Ok(self)
            }

            pub fn set_y(
                mut self,
                v: &'a [f64],
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::errors::InterpolationError;

                if v.is_empty() {
                    return Err(InterpolationError::EmptyInput);
                }
                if let Some(idx) = $crate::interpolation::config::non_finite_idx(v) {
                    return Err(InterpolationError::NonFiniteVec { idx });
                }

                let x_len = self.common.x.len();
                let y_len = v.len();
                if x_len != 0 && y_len != x_len {
                    return Err(InterpolationError::UnequalLength { x_len, y_len });
                }

                self.common.with_y(v);
                Ok(self)
            }

            pub fn set_direction(
                mut self,
                v: $crate::interpolation::algorithms::Direction,
            ) -> Self {
                self.common.with_direction(v);
                self
            }

            pub fn set_x_tol(
                mut self,
                v: f64,
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::errors::InterpolationError;

                if !v.is_finite() || v <= 0.0 {
                    return Err(InterpolationError::InvalidXTol { got: v });
                }

                self.common.with_x_min_spacing(v);
                Ok(self)
            }

            pub fn set_spacing_tol(
                mut self,
                v: f64,
            ) -> Result<Self, $crate::interpolation::errors::InterpolationError> {
                use $crate::interpolation::errors::InterpolationError;

                if !v.is_finite() || v < 0.0 {
                    return Err(InterpolationError::InvalidSpacingTol { got: v });
                }

                self.common.with_spacing_tol(v);
                Ok(self)
            }

            pub fn common(&self) -> &$crate::interpolation::config::CommonCfg<'a> {
                &self.common
            }
        }
    };
}
pub(crate) use impl_common_cfg;
