//! Counts proper 3-colorings of an m x n grid, modulo 1e9+7.
//!
//! A coloring is proper when no two cells sharing an edge have the same
//! color. Three engines compute the same count with different complexity
//! profiles, all built on one state model: a column of cell colors packed
//! into a base-3 integer ([`ColumnMask`]), plus a compatibility relation
//! between masks of adjacent columns.
//!
//! * [`LinearEngine`] - column-by-column DP, `O(n * 3^m)`.
//! * [`MatrixPowerEngine`] - transition-matrix exponentiation,
//!   `O(K^3 * log n)` with `K = 3 * 2^(m-1)`.
//! * [`SlidingWindowEngine`] - cell-by-cell DP over a window of the last
//!   m cells, `O(m * n * 2^m)` time and `O(2^m)` space.
//!
//! [`count_colorings`] picks an engine from the magnitudes of m and n;
//! [`count_colorings_with`] lets the caller force one.

use thiserror::Error;

/// Base-3 column mask encoding and digit operations.
pub mod mask;

/// Enumeration of internally valid column masks.
pub mod enumerate;

/// Compatibility relation between masks of adjacent columns.
pub mod adjacency;

/// Dense square matrices over the integers modulo [`MODULUS`].
pub mod matrix;

/// The engine contract and the three counting engines.
pub mod engine;

/// The shared contract implemented by all three engines.
pub use crate::engine::CountingEngine;
/// Column-by-column propagation engine.
pub use crate::engine::linear::LinearEngine;
/// Matrix-exponentiation engine.
pub use crate::engine::matrix_power::MatrixPowerEngine;
/// Cell-by-cell sliding-window engine.
pub use crate::engine::sliding::SlidingWindowEngine;
/// Base-3 encoding of one column of cell colors.
pub use crate::mask::ColumnMask;

/// The prime modulus applied to every count.
pub const MODULUS: u64 = 1_000_000_007;

/// Errors produced while counting grid colorings.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridColoringError {
    /// One of the grid dimensions was zero; the grid needs at least one
    /// cell in each dimension.
    #[error("grid dimensions must be at least 1x1 (got {m}x{n})")]
    InvalidDimensions {
        /// Requested number of rows.
        m: u64,
        /// Requested number of columns.
        n: u64,
    },
    /// The shorter grid dimension exceeds the bound under which mask
    /// arithmetic (`3^m`) fits in a `u64`.
    #[error("shorter grid dimension {0} exceeds the supported maximum of {max}", max = engine::MAX_COLUMN_HEIGHT)]
    GridTooTall(u64),
    /// A structural invariant of the mask or transition model failed.
    /// This indicates a bug in the library, not bad input.
    #[error("internal invariant violated: {0}")]
    InvariantViolation(String),
}

/// Selects which counting engine runs for a given grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    /// Column-by-column propagation; best when `3^m` is small.
    Linear,
    /// Transition-matrix exponentiation; best when `3^m` is small and n
    /// is very large.
    MatrixPower,
    /// Cell-by-cell sliding window; best when `3^m` is intractable but
    /// `2^m` is not.
    SlidingWindow,
}

impl Strategy {
    /// Picks an engine from the magnitudes of the dimensions.
    ///
    /// After normalizing `m <= n`: a tall column forces the sliding
    /// window (per-column state blows up as `3^m`, the window only as
    /// `2^m`); a very long grid with a small state space favors the
    /// logarithmic-in-n matrix power; everything else runs the plain
    /// linear propagation.
    pub fn select(m: u64, n: u64) -> Self {
        let (m, n) = if m > n { (n, m) } else { (m, n) };
        if m > 12 {
            Self::SlidingWindow
        } else if m <= 6 && n > 4096 {
            Self::MatrixPower
        } else {
            Self::Linear
        }
    }

    fn engine(self) -> Box<dyn CountingEngine> {
        match self {
            Self::Linear => Box::new(LinearEngine),
            Self::MatrixPower => Box::new(MatrixPowerEngine),
            Self::SlidingWindow => Box::new(SlidingWindowEngine),
        }
    }
}

/// Counts proper 3-colorings of an `m x n` grid modulo [`MODULUS`],
/// choosing an engine via [`Strategy::select`].
///
/// # Errors
///
/// Returns [`GridColoringError::InvalidDimensions`] when either
/// dimension is zero, and [`GridColoringError::GridTooTall`] when the
/// shorter dimension exceeds [`engine::MAX_COLUMN_HEIGHT`].
pub fn count_colorings(m: u64, n: u64) -> Result<u64, GridColoringError> {
    count_colorings_with(m, n, Strategy::select(m, n))
}

/// Counts proper 3-colorings of an `m x n` grid modulo [`MODULUS`]
/// using the requested engine.
///
/// All strategies return the same count; they differ only in cost.
///
/// # Errors
///
/// As [`count_colorings`].
pub fn count_colorings_with(
    m: u64,
    n: u64,
    strategy: Strategy,
) -> Result<u64, GridColoringError> {
    strategy.engine().count(m, n)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn select_prefers_sliding_window_for_tall_grids() {
        assert_eq!(Strategy::select(20, 30), Strategy::SlidingWindow);
        // Normalization makes the orientation irrelevant.
        assert_eq!(Strategy::select(30, 20), Strategy::SlidingWindow);
    }

    #[test]
    fn select_prefers_matrix_power_for_very_long_grids() {
        assert_eq!(Strategy::select(4, 1_000_000), Strategy::MatrixPower);
        assert_eq!(Strategy::select(1_000_000, 4), Strategy::MatrixPower);
    }

    #[test]
    fn select_defaults_to_linear() {
        assert_eq!(Strategy::select(1, 1), Strategy::Linear);
        assert_eq!(Strategy::select(5, 200), Strategy::Linear);
    }

    #[test]
    fn zero_dimension_is_rejected() {
        assert_eq!(
            count_colorings(0, 5),
            Err(GridColoringError::InvalidDimensions { m: 0, n: 5 })
        );
        assert_eq!(
            count_colorings(5, 0),
            Err(GridColoringError::InvalidDimensions { m: 5, n: 0 })
        );
    }
}
