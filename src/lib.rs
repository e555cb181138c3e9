//! Newton-Gregory interpolation over equally spaced samples.
//!
//! See [`interpolation`] for the finite-difference table, the forward and
//! backward evaluators and the plotting sweep.

pub mod interpolation;
