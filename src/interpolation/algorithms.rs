//! Defines the Newton-Gregory formula variants 
//!
//! Provides the [`Direction`] enum, which selects the anchor point and the
//! factorial product used by the evaluator. 

/// Newton-Gregory formula variants.
/// - [`Direction::Forward`]  anchored at `x[0]`, falling factorial `p(p-1)...(p-i+1)`
/// - [`Direction::Backward`] anchored at `x[N-1]`, rising factorial `p(p+1)...(p+i-1)`
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Forward,
    Backward, 
}

impl Direction {
    pub const fn algorithm_name(self) -> &'static str {
        match self {
            Direction::Forward  => "newton_gregory_forward",
            Direction::Backward => "newton_gregory_backward",
        }
    }

    /// Index of the anchor sample in a dataset of `n` points.
    pub const fn anchor_index(self, n: usize) -> usize {
        match self {
            Direction::Forward  => 0,
            Direction::Backward => n - 1,
        }
    }
}
impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.algorithm_name())
    }
}
