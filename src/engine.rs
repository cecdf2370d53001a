//! The counting-engine contract and shared dimension handling.
//!
//! Every engine answers the same question for the same inputs; they
//! differ only in how cost scales with the grid's dimensions.

use crate::GridColoringError;

/// Column-by-column propagation engine.
pub mod linear;
/// Transition-matrix exponentiation engine.
pub mod matrix_power;
/// Cell-by-cell sliding-window engine.
pub mod sliding;

/// Largest supported value of the shorter (normalized) grid dimension.
///
/// Mask arithmetic needs `3^m` to fit in a `u64`; practical time and
/// memory limits bite far earlier.
pub const MAX_COLUMN_HEIGHT: u64 = 32;

/// A strategy for counting proper 3-colorings of an m x n grid.
pub trait CountingEngine {
    /// Counts proper 3-colorings of an `m x n` grid modulo
    /// [`crate::MODULUS`].
    ///
    /// # Errors
    ///
    /// Returns [`GridColoringError::InvalidDimensions`] when either
    /// dimension is zero, [`GridColoringError::GridTooTall`] when the
    /// shorter dimension exceeds [`MAX_COLUMN_HEIGHT`], and
    /// [`GridColoringError::InvariantViolation`] when a structural
    /// self-check fails.
    fn count(&self, m: u64, n: u64) -> Result<u64, GridColoringError>;
}

/// Validates the dimensions and orients the grid so the DP state spans
/// the shorter dimension (`m <= n`); the count is invariant under
/// transposition.
pub(crate) fn normalize(m: u64, n: u64) -> Result<(u32, u64), GridColoringError> {
    if m == 0 || n == 0 {
        return Err(GridColoringError::InvalidDimensions { m, n });
    }
    let (short, long) = if m > n { (n, m) } else { (m, n) };
    if short > MAX_COLUMN_HEIGHT {
        return Err(GridColoringError::GridTooTall(short));
    }
    Ok((short as u32, long))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_orients_the_shorter_dimension_first() {
        assert_eq!(normalize(7, 3), Ok((3, 7)));
        assert_eq!(normalize(3, 7), Ok((3, 7)));
        assert_eq!(normalize(4, 4), Ok((4, 4)));
    }

    #[test]
    fn normalize_rejects_zero_dimensions() {
        assert_eq!(
            normalize(0, 0),
            Err(GridColoringError::InvalidDimensions { m: 0, n: 0 })
        );
        assert_eq!(
            normalize(3, 0),
            Err(GridColoringError::InvalidDimensions { m: 3, n: 0 })
        );
    }

    #[test]
    fn normalize_rejects_overly_tall_columns() {
        assert_eq!(
            normalize(MAX_COLUMN_HEIGHT + 1, MAX_COLUMN_HEIGHT + 2),
            Err(GridColoringError::GridTooTall(MAX_COLUMN_HEIGHT + 1))
        );
        // Only the shorter dimension is bounded.
        assert!(normalize(2, MAX_COLUMN_HEIGHT + 100).is_ok());
    }
}
