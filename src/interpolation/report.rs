//! Defines the struct returned by all Newton-Gregory runners.
//!
//! Defines the [`InterpolationReport`] struct returned by
//! [`crate::interpolation::gregory::interpolate`] and
//! [`crate::interpolation::sweep::sweep`].
//!
//! This report summarizes key metadata about the interpolation process,
//! including the formula used, the step and anchor of the sample grid,
//! the difference table and the results of evaluating the polynomial.

use crate::interpolation::algorithms::Direction;
use crate::interpolation::table::DifferenceTable;

/// Summary of an interpolation run.
///
/// [`InterpolationReport`]
/// - `algorithm_name` : formula used (e.g. `"newton_gregory_forward"`)
/// - `n_provided`     : number of input data points `(x, y)`
/// - `n_evaluated`    : number of points at which interpolation was performed
/// - `step`           : uniform spacing `h` of the input x-values
/// - `anchor`         : x-value `p` is measured from (`x[0]` or `x[N-1]`)
/// - `x_eval`         : evaluation points, in request order
/// - `evaluated`      : interpolated values at each evaluation point
/// - `table`          : forward-difference table of the input y-values
#[derive(Debug, Clone)]
pub struct InterpolationReport {
    pub algorithm_name: &'static str,
    pub n_provided: usize,
    pub n_evaluated: usize,
    pub step: f64,
    pub anchor: f64,
    pub x_eval: Vec<f64>,
    pub evaluated: Vec<f64>,
    pub table: DifferenceTable,
}

impl InterpolationReport {
    pub fn new(
        direction: Direction,
        step: f64,
        anchor: f64,
        table: DifferenceTable,
        n_evaluated: usize,
    ) -> Self {
        Self {
            algorithm_name: direction.algorithm_name(),
            n_provided: table.n_points(),
            n_evaluated,
            step,
            anchor,
            x_eval: Vec::with_capacity(n_evaluated),
            evaluated: Vec::with_capacity(n_evaluated),
            table,
        }
    }

    /// Iterates `(x, f(x))` pairs.
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.x_eval.iter().copied().zip(self.evaluated.iter().copied())
    }
}
