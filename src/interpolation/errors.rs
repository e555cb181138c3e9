//! Interpolation error types.  
//! 
//! ┌ input shape     : empty, unequal length, too few points  
//! ├ input values    : non-finite entries, duplicate or decreasing x  
//! ├ uniform spacing : consecutive x steps disagree with `h = x[1] - x[0]`  
//! └ configuration   : invalid tolerances, sample counts, targets  

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InterpolationError {
    #[error("unequal length: x has {x_len} elements, y has {y_len}")]
    UnequalLength { x_len: usize, y_len: usize },

    #[error("non-finite value in input vector at index {idx}")]
    NonFiniteVec { idx: usize },

    #[error("empty input vector(s)")]
    EmptyInput,

    #[error("insufficient points: got {got}, need at least 2")]
    InsufficientPoints { got: usize },

    #[error("duplicate x-values detected: {x1} and {x2}")]
    DuplicateX { x1: f64, x2: f64 },

    #[error("x-values must be strictly increasing")]
    NonIncreasingX,

    #[error("non-uniform spacing at index {idx}: expected step {expected}, got {got}")]
    NonUniformSpacing { idx: usize, expected: f64, got: f64 },

    #[error("invalid x_tol {got} must be finite and > 0")]
    InvalidXTol { got: f64 }, 

    #[error("invalid spacing_tol {got} must be finite and >= 0")]
    InvalidSpacingTol { got: f64 },

    #[error("invalid sample count {got}, need at least 2")]
    InvalidSamples { got: usize },

    #[error("evaluation target {got} is not finite")]
    NonFiniteTarget { got: f64 },
}
