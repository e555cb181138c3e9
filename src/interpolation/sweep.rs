//! Plotting sweep
//!
//! Samples the interpolating polynomial on an evenly spaced grid spanning
//! the data's x-range, `DEFAULT_SAMPLES` points by default. The table is
//! built once and shared by every sample.
//!
//! With the `parallel` feature the samples are evaluated on the rayon
//! thread pool. Each sample is independent so the output is identical.


use crate::interpolation::config::{impl_common_cfg, CommonCfg};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::gregory::NewtonGregory;
use crate::interpolation::report::InterpolationReport;

pub const DEFAULT_SAMPLES: usize = 200;


/// `n` evenly spaced values over `[start, end]`, both ends included.
///
/// The last value is exactly `end`. `n = 1` yields `[start]`, `n = 0`
/// yields nothing.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            let mut v: Vec<f64> = (0..n).map(|i| start + i as f64 * step).collect();
            v[n - 1] = end;
            v
        }
    }
}


/// Sweep configuration
///
/// # Fields
/// - `common`  : [`CommonCfg`]
/// - `samples` : number of curve points, [`DEFAULT_SAMPLES`] by default
#[derive(Debug, Clone, Copy)]
pub struct SweepCfg<'a> {
    common : CommonCfg<'a>,
    samples: usize,
}
impl<'a> SweepCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new(), samples: DEFAULT_SAMPLES }
    }

    pub fn set_samples(mut self, v: usize) -> Result<Self, InterpolationError> {
        if v < 2 {
            return Err(InterpolationError::InvalidSamples { got: v });
        }
        self.samples = v;
        Ok(self)
    }

    pub fn samples(&self) -> usize { self.samples }
}
impl_common_cfg!(SweepCfg<'a>);


impl NewtonGregory {
    /// Curve `(xs, ys)` of `samples` points over `[x[0], x[N-1]]`.
    pub fn curve(&self, samples: usize) -> (Vec<f64>, Vec<f64>) {
        let (lo, hi) = self.x_range();
        let xs = linspace(lo, hi, samples);
        let ys = evaluate_all(self, &xs);
        (xs, ys)
    }
}


#[cfg(feature = "parallel")]
fn evaluate_all(model: &NewtonGregory, xs: &[f64]) -> Vec<f64> {
    use rayon::prelude::*;

    xs.par_iter().map(|&xq| model.value_at(xq)).collect()
}

#[cfg(not(feature = "parallel"))]
fn evaluate_all(model: &NewtonGregory, xs: &[f64]) -> Vec<f64> {
    xs.iter().map(|&xq| model.value_at(xq)).collect()
}


/// Evaluates the polynomial over the plotting grid.
///
/// # Returns
/// [`InterpolationReport`] whose `x_eval` is the grid and `evaluated` the
/// curve, `n_evaluated == cfg.samples()`.
///
/// # Errors
/// Same as [`crate::interpolation::gregory::interpolate`].
pub fn sweep(cfg: SweepCfg) -> Result<InterpolationReport, InterpolationError> {
    let model    = NewtonGregory::from_common(&cfg.common)?;
    let (xs, ys) = model.curve(cfg.samples);

    let mut report = model.into_report(xs.len());
    report.x_eval    = xs;
    report.evaluated = ys;

    Ok(report)
}
