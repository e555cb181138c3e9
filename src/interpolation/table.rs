//! Finite-Difference Table
//!
//! Builds the table of successive
//! [forward differences](https://en.wikipedia.org/wiki/Finite_difference)
//! of equally spaced samples.
//!
//! ```text
//! level 0 : y[0]     y[1]     y[2]     y[3]
//! level 1 :   Δy[0]    Δy[1]    Δy[2]
//! level 2 :     Δ²y[0]   Δ²y[1]
//! level 3 :       Δ³y[0]
//! ```
//!
//! Level `k` holds `N - k` entries; entry `i` is
//! `level[k-1][i+1] - level[k-1][i]`. The forward formula reads the first
//! entry of every level, the backward formula the last one.


use std::fmt;


/// Immutable table of forward differences.
///
/// Built from `N` values it holds exactly `N` levels, level `k` having
/// `N - k` entries. Level 0 is a copy of the input.
#[derive(Debug, Clone, PartialEq)]
pub struct DifferenceTable {
    levels: Vec<Vec<f64>>,
}

impl DifferenceTable {
    /// Builds the table from `y`, copying it into level 0.
    pub fn build(y: &[f64]) -> Self {
        let n = y.len();
        let mut levels: Vec<Vec<f64>> = Vec::with_capacity(n);
        if n == 0 {
            return Self { levels };
        }

        levels.push(y.to_vec());
        for k in 1..n {
            let next = levels[k - 1]
                .windows(2)
                .map(|w| w[1] - w[0])
                .collect();
            levels.push(next);
        }

        Self { levels }
    }

    /// All levels, level 0 first.
    pub fn levels(&self) -> &[Vec<f64>] { &self.levels }

    /// Differences of order `k`.
    ///
    /// # Panics
    /// If `k >= self.n_levels()`.
    pub fn level(&self, k: usize) -> &[f64] { &self.levels[k] }

    pub fn n_levels(&self) -> usize { self.levels.len() }

    /// Number of samples the table was built from.
    pub fn n_points(&self) -> usize { self.levels.len() }

    pub fn is_empty(&self) -> bool { self.levels.is_empty() }

    /// First entry of every level: `y[0], Δy[0], Δ²y[0], ...`
    pub fn leading(&self) -> impl Iterator<Item = f64> + '_ {
        self.levels.iter().map(|level| level[0])
    }

    /// Last entry of every level: `y[N-1], Δy[N-2], Δ²y[N-3], ...`
    pub fn trailing(&self) -> impl Iterator<Item = f64> + '_ {
        self.levels.iter().map(|level| level[level.len() - 1])
    }

    /// Entry `i` of every level that has one, level 0 first.
    ///
    /// Row `i` has `N - i` values; rows past the end are empty.
    pub fn row(&self, i: usize) -> Vec<f64> {
        self.levels
            .iter()
            .map_while(|level| level.get(i).copied())
            .collect()
    }
}


/// Builds the forward-difference table of `y_values`.
pub fn build_difference_table(y_values: &[f64]) -> DifferenceTable {
    DifferenceTable::build(y_values)
}


impl fmt::Display for DifferenceTable {
    /// One line per sample index, columns `i | y | Δy | Δ²y | ...`
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = self.n_levels();

        write!(f, "{:>4}", "i")?;
        for k in 0..n {
            let head = match k {
                0 => "y".to_string(),
                1 => "Δy".to_string(),
                _ => format!("Δ^{k}y"),
            };
            write!(f, " {head:>14}")?;
        }
        writeln!(f)?;

        for i in 0..n {
            write!(f, "{i:>4}")?;
            for value in self.row(i) {
                write!(f, " {value:>14.6}")?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}
