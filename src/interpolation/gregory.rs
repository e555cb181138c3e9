//! Newton-Gregory Interpolation
//!
//! Implements the forward and backward
//! [Newton-Gregory formulas](https://en.wikipedia.org/wiki/Newton_polynomial#Newton_forward_divided_difference_formula)
//! over equally spaced samples with step `h`.
//!
//! With `p = (x - anchor) / h`:
//!
//! ```text
//! forward  (anchor x[0])   : P(x) = y[0]   + Σ p(p-1)...(p-i+1) / i! * Δⁱy[0]
//! backward (anchor x[N-1]) : P(x) = y[N-1] + Σ p(p+1)...(p+i-1) / i! * Δⁱy[N-1-i]
//! ```
//!
//! Both formulas describe the same unique polynomial of degree `N - 1`
//! through the samples, so they agree up to rounding.


use crate::interpolation::algorithms::Direction;
use crate::interpolation::config::{impl_common_cfg, split_points, CommonCfg, SamplePoint};
use crate::interpolation::errors::InterpolationError;
use crate::interpolation::report::InterpolationReport;
use crate::interpolation::table::DifferenceTable;
use crate::interpolation::traits::Interpolator;


/// Newton-Gregory interpolation configuration
///
/// # Fields
/// - `common` : [`CommonCfg`]
/// - `x_eval` : x values to evaluate
///
/// # Construction
/// - Use [`GregoryCfg::new`] then optional setters.
///
/// # Defaults
/// - [`Direction::Forward`]
/// - Minimum allowed `x` spacing [`crate::interpolation::config::DEFAULT_X_TOL`]
/// - Uniform spacing tolerance [`crate::interpolation::config::DEFAULT_SPACING_TOL`]
#[derive(Debug, Clone, Copy)]
pub struct GregoryCfg<'a> {
    common: CommonCfg<'a>,
    x_eval: &'a [f64],
}
impl<'a> GregoryCfg<'a> {
    pub fn new() -> Self {
        Self { common: CommonCfg::new(), x_eval: &[] }
    }

    pub fn set_x_eval(
        mut self,
        v: &'a [f64],
    ) -> Result<Self, InterpolationError> {
        if let Some(idx) = crate::interpolation::config::non_finite_idx(v) {
            return Err(InterpolationError::NonFiniteVec { idx });
        }

        self.x_eval = v;
        Ok(self)
    }

    pub fn x_eval(&self) -> &'a [f64] { self.x_eval }
}
impl_common_cfg!(GregoryCfg<'a>);


/// Evaluates the Newton-Gregory polynomial of `table` at `target_x`.
///
/// `x_values` are the sample abscissae the table was built from and `h`
/// their uniform step. Nothing is checked here: the caller guarantees
/// `h != 0`, uniform spacing and `table.n_points() == x_values.len() >= 2`.
pub fn evaluate(
    table    : &DifferenceTable,
    x_values : &[f64],
    h        : f64,
    target_x : f64,
    direction: Direction,
) -> f64 {
    debug_assert!(h != 0.0);
    debug_assert_eq!(table.n_points(), x_values.len());

    let anchor = x_values[direction.anchor_index(x_values.len())];
    match direction {
        Direction::Forward  => forward(table, anchor, h, target_x),
        Direction::Backward => backward(table, anchor, h, target_x),
    }
}


#[inline]
fn forward(table: &DifferenceTable, x0: f64, h: f64, xq: f64) -> f64 {
    let p = (xq - x0) / h;

    let mut diffs  = table.leading();
    let mut result = diffs.next().unwrap_or(0.0);
    let mut p_term = 1.0;
    let mut fact   = 1.0;

    for (i, delta) in (1..).zip(diffs) {
        let fi = i as f64;
        p_term *= p - fi + 1.0;
        fact   *= fi;
        result += p_term * delta / fact;
    }

    result
}


#[inline]
fn backward(table: &DifferenceTable, xn: f64, h: f64, xq: f64) -> f64 {
    let p = (xq - xn) / h;

    let mut diffs  = table.trailing();
    let mut result = diffs.next().unwrap_or(0.0);
    let mut p_term = 1.0;
    let mut fact   = 1.0;

    for (i, delta) in (1..).zip(diffs) {
        let fi = i as f64;
        p_term *= p + fi - 1.0;
        fact   *= fi;
        result += p_term * delta / fact;
    }

    result
}


/// Validated dataset with its difference table built once.
///
/// Every evaluation reuses the same table; switching formulas with
/// [`NewtonGregory::with_direction`] does not rebuild it either.
#[derive(Debug, Clone)]
pub struct NewtonGregory {
    table    : DifferenceTable,
    x_first  : f64,
    x_last   : f64,
    step     : f64,
    direction: Direction,
}

impl NewtonGregory {
    /// Validates `(x, y)` with default tolerances and builds the table.
    ///
    /// # Errors
    /// Any [`InterpolationError`] raised by the [`GregoryCfg`] setters or by
    /// [`CommonCfg::validate`], notably
    /// [`InterpolationError::NonUniformSpacing`] and
    /// [`InterpolationError::InsufficientPoints`].
    pub fn new(x: &[f64], y: &[f64], direction: Direction) -> Result<Self, InterpolationError> {
        let cfg = GregoryCfg::new()
            .set_x(x)?
            .set_y(y)?
            .set_direction(direction);

        Self::from_common(cfg.common())
    }

    /// Same as [`NewtonGregory::new`] for `(x, y)` pairs.
    pub fn from_points(
        points: &[SamplePoint],
        direction: Direction,
    ) -> Result<Self, InterpolationError> {
        let (x, y) = split_points(points);
        Self::new(&x, &y, direction)
    }

    pub(crate) fn from_common(common: &CommonCfg) -> Result<Self, InterpolationError> {
        let step = common.validate()?;
        let x    = common.x();

        Ok(Self {
            table    : DifferenceTable::build(common.y()),
            x_first  : x[0],
            x_last   : x[x.len() - 1],
            step,
            direction: common.direction(),
        })
    }

    /// Polynomial value at `xq`; any real `xq` is accepted, including
    /// points outside the sample range.
    pub fn value_at(&self, xq: f64) -> f64 {
        match self.direction {
            Direction::Forward  => forward(&self.table, self.x_first, self.step, xq),
            Direction::Backward => backward(&self.table, self.x_last, self.step, xq),
        }
    }

    pub fn with_direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    // getters
    pub fn table(&self) -> &DifferenceTable { &self.table }
    pub fn step(&self) -> f64 { self.step }
    pub fn direction(&self) -> Direction { self.direction }
    pub fn x_range(&self) -> (f64, f64) { (self.x_first, self.x_last) }

    pub fn anchor(&self) -> f64 {
        match self.direction {
            Direction::Forward  => self.x_first,
            Direction::Backward => self.x_last,
        }
    }

    pub(crate) fn into_report(self, n_evaluated: usize) -> InterpolationReport {
        let anchor = self.anchor();
        InterpolationReport::new(self.direction, self.step, anchor, self.table, n_evaluated)
    }
}

impl Interpolator for NewtonGregory {
    fn eval(&self, x: f64) -> Result<f64, InterpolationError> {
        if !x.is_finite() {
            return Err(InterpolationError::NonFiniteTarget { got: x });
        }
        Ok(self.value_at(x))
    }
}


/// Performs Newton-Gregory interpolation.
///
/// # Behavior
/// - Validates the dataset and derives `h = x[1] - x[0]`.
/// - Builds the difference table once.
/// - Evaluates the forward or backward formula at each point of
///   `cfg.x_eval()`. Points outside `[x[0], x[N-1]]` are extrapolated.
///
/// # Returns
/// [`InterpolationReport`] containing
/// - `algorithm_name` : `"newton_gregory_forward"` or `"newton_gregory_backward"`
/// - `n_provided`     : number of (x, y) data points
/// - `n_evaluated`    : number of evaluation points
/// - `step`, `anchor` : grid step and the anchor x-value
/// - `x_eval`         : evaluation points
/// - `evaluated`      : interpolated values at each evaluation point
/// - `table`          : the difference table
///
/// # Errors
/// - [`InterpolationError::EmptyInput`] if `x` or `y` was never set.
/// - [`InterpolationError::NonUniformSpacing`] if the x steps differ.
pub fn interpolate(cfg: GregoryCfg) -> Result<InterpolationReport, InterpolationError> {
    let evals = cfg.x_eval;
    let model = NewtonGregory::from_common(&cfg.common)?;

    let evaluated: Vec<f64> = evals.iter().map(|&xq| model.value_at(xq)).collect();

    let mut report = model.into_report(evals.len());
    report.x_eval.extend_from_slice(evals);
    report.evaluated = evaluated;

    Ok(report)
}
