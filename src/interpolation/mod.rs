pub mod algorithms;
pub mod config;
pub mod errors;
pub mod report;
pub mod traits;
pub use traits::Interpolator;

pub mod table;
pub mod gregory;
pub mod sweep;

pub use algorithms::Direction;
pub use config::SamplePoint;
pub use gregory::{evaluate, interpolate, GregoryCfg, NewtonGregory};
pub use sweep::{sweep, SweepCfg};
pub use table::{build_difference_table, DifferenceTable};
