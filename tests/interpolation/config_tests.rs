use gregory::interpolation::algorithms::Direction;
use gregory::interpolation::config::{
    split_points, uniform_step, SamplePoint, DEFAULT_SPACING_TOL, DEFAULT_X_TOL,
};
use gregory::interpolation::errors::InterpolationError;
use gregory::interpolation::gregory::{interpolate, GregoryCfg};

type GregoryResult = Result<(), InterpolationError>;

#[test]
fn defaults() {
    let cfg = GregoryCfg::new();
    let common = cfg.common();

    assert!(common.x().is_empty());
    assert!(common.y().is_empty());
    assert_eq!(common.direction(), Direction::Forward);
    assert_eq!(common.x_min_spacing(), DEFAULT_X_TOL);
    assert_eq!(common.spacing_tol(), DEFAULT_SPACING_TOL);
    assert!(cfg.x_eval().is_empty());
}

#[test]
fn validate_returns_step() -> GregoryResult {
    let cfg = GregoryCfg::new()
        .set_x(&[1.0, 1.25, 1.5, 1.75])?
        .set_y(&[0.0, 0.0, 0.0, 0.0])?;

    assert_eq!(cfg.common().validate()?, 0.25);
    Ok(())
}

#[test]
fn decimal_steps_pass_default_tolerance() -> GregoryResult {
    let x = [0.1, 0.2, 0.3, 0.4, 0.5];
    let y = [1.0, 2.0, 3.0, 4.0, 5.0];

    let cfg = GregoryCfg::new()
        .set_x(&x)?
        .set_y(&y)?
        .set_x_eval(&[0.25])?;

    let rep = interpolate(cfg)?;
    assert!((rep.evaluated[0] - 2.5).abs() < 1e-9);
    Ok(())
}

#[test]
fn zero_spacing_tol_requires_exact_steps() {
    let x = [0.1, 0.2, 0.3];
    let err = uniform_step(&x, 0.0).unwrap_err();
    assert!(matches!(err, InterpolationError::NonUniformSpacing { idx: 1, .. }));

    assert_eq!(uniform_step(&[0.0, 0.5, 1.0], 0.0).unwrap(), 0.5);
}

#[test]
fn looser_spacing_tol_accepts_jitter() -> GregoryResult {
    let x = [0.0, 1.0, 2.001, 3.0];
    let y = [0.0, 1.0, 2.0, 3.0];

    let strict = GregoryCfg::new().set_x(&x)?.set_y(&y)?;
    assert!(matches!(
        strict.common().validate().unwrap_err(),
        InterpolationError::NonUniformSpacing { idx: 1, .. }
    ));

    let loose = strict.set_spacing_tol(1e-2)?;
    assert_eq!(loose.common().validate()?, 1.0);
    Ok(())
}

#[test]
fn unequal_length_error() {
    let x = [0.0, 1.0, 2.0];
    let y = [0.0, 1.0];
    let cfg = GregoryCfg::new().set_x(&x).unwrap();
    let err = cfg.set_y(&y).unwrap_err();
    assert!(matches!(err, InterpolationError::UnequalLength { x_len: 3, y_len: 2 }));
}

#[test]
fn unequal_length_error_y_first() {
    let x = [0.0, 1.0, 2.0];
    let y = [0.0, 1.0];
    let cfg = GregoryCfg::new().set_y(&y).unwrap();
    let err = cfg.set_x(&x).unwrap_err();
    assert!(matches!(err, InterpolationError::UnequalLength { x_len: 3, y_len: 2 }));
}

#[test]
fn non_increasing_x_error() {
    let x = [2.0, 1.0, 0.0];
    let err = GregoryCfg::new().set_x(&x).unwrap_err();
    assert!(matches!(err, InterpolationError::NonIncreasingX));
}

#[test]
fn near_duplicate_x_error() {
    let x = [0.0, 1e-13, 1.0];
    let err = GregoryCfg::new().set_x(&x).unwrap_err();
    assert!(matches!(err, InterpolationError::DuplicateX { .. }));
}

#[test]
fn insufficient_points_error() {
    let err = GregoryCfg::new().set_x(&[1.0]).unwrap_err();
    assert!(matches!(err, InterpolationError::InsufficientPoints { got: 1 }));
}

#[test]
fn empty_input_error() {
    let err = GregoryCfg::new().set_y(&[]).unwrap_err();
    assert!(matches!(err, InterpolationError::EmptyInput));
}

#[test]
fn non_finite_errors() {
    let err = GregoryCfg::new().set_x(&[0.0, f64::NAN, 2.0]).unwrap_err();
    assert!(matches!(err, InterpolationError::NonFiniteVec { idx: 1 }));

    let err = GregoryCfg::new().set_y(&[0.0, 1.0, f64::INFINITY]).unwrap_err();
    assert!(matches!(err, InterpolationError::NonFiniteVec { idx: 2 }));

    let err = GregoryCfg::new().set_x_eval(&[f64::NEG_INFINITY]).unwrap_err();
    assert!(matches!(err, InterpolationError::NonFiniteVec { idx: 0 }));
}

#[test]
fn invalid_tolerances() {
    let err = GregoryCfg::new().set_x_tol(0.0).unwrap_err();
    assert!(matches!(err, InterpolationError::InvalidXTol { got } if got == 0.0));

    let err = GregoryCfg::new().set_spacing_tol(-1.0).unwrap_err();
    assert!(matches!(err, InterpolationError::InvalidSpacingTol { got } if got == -1.0));

    let err = GregoryCfg::new().set_spacing_tol(f64::NAN).unwrap_err();
    assert!(matches!(err, InterpolationError::InvalidSpacingTol { .. }));
}

#[test]
fn sample_points_split() {
    let points = [SamplePoint::new(0.0, 1.0), SamplePoint::from((0.5, -2.0))];
    let (x, y) = split_points(&points);
    assert_eq!(x, vec![0.0, 0.5]);
    assert_eq!(y, vec![1.0, -2.0]);
}

#[test]
fn error_messages() {
    let err = InterpolationError::NonUniformSpacing { idx: 2, expected: 1.0, got: 1.5 };
    assert_eq!(
        err.to_string(),
        "non-uniform spacing at index 2: expected step 1, got 1.5"
    );
    assert_eq!(
        InterpolationError::InsufficientPoints { got: 1 }.to_string(),
        "insufficient points: got 1, need at least 2"
    );
}

#[test]
fn uniform_step_too_few_values() {
    let err = uniform_step(&[1.0], DEFAULT_SPACING_TOL).unwrap_err();
    assert!(matches!(err, InterpolationError::InsufficientPoints { got: 1 }));

    let err = uniform_step(&[], DEFAULT_SPACING_TOL).unwrap_err();
    assert!(matches!(err, InterpolationError::InsufficientPoints { got: 0 }));
}

#[test]
fn large_offset_grid_passes_default_tolerance() -> GregoryResult {
    let x: Vec<f64> = (0..5).map(|i| 1e8 + 0.1 * i as f64).collect();
    let h = uniform_step(&x, DEFAULT_SPACING_TOL)?;
    assert!((h - 0.1).abs() < 1e-7);

    let err = uniform_step(&[1e8, 1e8 + 1.0, 1e8 + 2.5], DEFAULT_SPACING_TOL).unwrap_err();
    assert!(matches!(err, InterpolationError::NonUniformSpacing { idx: 1, .. }));
    Ok(())
}
