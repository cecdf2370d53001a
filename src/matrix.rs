//! Dense square matrices over the integers modulo [`MODULUS`].
//!
//! A small standalone utility: the matrix engine raises the column
//! transition matrix to a large power by repeated squaring, but nothing
//! here knows about masks or grids.

use crate::MODULUS;

/// A square matrix with entries reduced modulo [`MODULUS`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModMatrix {
    size: usize,
    /// Row-major entries, `data[row * size + column]`.
    data: Vec<u64>,
}

impl ModMatrix {
    /// The all-zero matrix of the given size.
    pub fn zero(size: usize) -> Self {
        Self {
            size,
            data: vec![0; size * size],
        }
    }

    /// The identity matrix of the given size.
    pub fn identity(size: usize) -> Self {
        let mut matrix = Self::zero(size);
        for i in 0..size {
            matrix.data[i * size + i] = 1;
        }
        matrix
    }

    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    /// Entry at (`row`, `column`).
    ///
    /// # Panics
    ///
    /// Panics when either index is out of bounds.
    pub fn get(&self, row: usize, column: usize) -> u64 {
        assert!(row < self.size && column < self.size, "index out of bounds");
        self.data[row * self.size + column]
    }

    /// Sets the entry at (`row`, `column`), reducing it modulo
    /// [`MODULUS`].
    ///
    /// # Panics
    ///
    /// Panics when either index is out of bounds.
    pub fn set(&mut self, row: usize, column: usize, value: u64) {
        assert!(row < self.size && column < self.size, "index out of bounds");
        self.data[row * self.size + column] = value % MODULUS;
    }

    /// Modular matrix product `self * rhs`.
    ///
    /// Each multiply-accumulate runs through `u128` and reduces
    /// immediately, so entries never leave `[0, MODULUS)`.
    ///
    /// # Panics
    ///
    /// Panics when the operands differ in size.
    pub fn mul(&self, rhs: &Self) -> Self {
        assert_eq!(self.size, rhs.size, "size mismatch in matrix product");
        let size = self.size;
        let modulus = u128::from(MODULUS);
        let mut product = Self::zero(size);
        for row in 0..size {
            for column in 0..size {
                let mut entry: u128 = 0;
                for k in 0..size {
                    let term = u128::from(self.data[row * size + k])
                        * u128::from(rhs.data[k * size + column]);
                    entry = (entry + term % modulus) % modulus;
                }
                product.data[row * size + column] = entry as u64;
            }
        }
        product
    }

    /// Raises the matrix to the given power by repeated squaring,
    /// consuming one bit of the exponent (low to high) per round.
    pub fn pow(&self, mut exponent: u64) -> Self {
        let mut result = Self::identity(self.size);
        let mut square = self.clone();
        while exponent > 0 {
            if exponent % 2 == 1 {
                result = result.mul(&square);
            }
            square = square.mul(&square);
            exponent /= 2;
        }
        result
    }

    /// Sum of every entry modulo [`MODULUS`].
    pub fn sum_entries(&self) -> u64 {
        self.data
            .iter()
            .fold(0, |total, &entry| (total + entry) % MODULUS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fibonacci_step() -> ModMatrix {
        let mut matrix = ModMatrix::zero(2);
        matrix.set(0, 0, 1);
        matrix.set(0, 1, 1);
        matrix.set(1, 0, 1);
        matrix
    }

    #[test]
    fn zeroth_power_is_identity() {
        let matrix = fibonacci_step();
        assert_eq!(matrix.pow(0), ModMatrix::identity(2));
    }

    #[test]
    fn first_power_is_the_matrix_itself() {
        let matrix = fibonacci_step();
        assert_eq!(matrix.pow(1), matrix);
    }

    #[test]
    fn powers_compose_additively() {
        let matrix = fibonacci_step();
        assert_eq!(matrix.pow(2).mul(&matrix.pow(3)), matrix.pow(5));
        assert_eq!(matrix.pow(7).mul(&matrix.pow(4)), matrix.pow(11));
    }

    #[test]
    fn fibonacci_power_has_known_entries() {
        // [[1,1],[1,0]]^10 = [[F11, F10], [F10, F9]].
        let power = fibonacci_step().pow(10);
        assert_eq!(power.get(0, 0), 89);
        assert_eq!(power.get(0, 1), 55);
        assert_eq!(power.get(1, 0), 55);
        assert_eq!(power.get(1, 1), 34);
    }

    #[test]
    fn identity_multiplication_is_neutral() {
        let matrix = fibonacci_step();
        let identity = ModMatrix::identity(2);
        assert_eq!(identity.mul(&matrix), matrix);
        assert_eq!(matrix.mul(&identity), matrix);
    }

    #[test]
    fn set_reduces_modulo() {
        let mut matrix = ModMatrix::zero(1);
        matrix.set(0, 0, MODULUS + 5);
        assert_eq!(matrix.get(0, 0), 5);
    }

    #[test]
    fn product_entries_stay_reduced() {
        let mut matrix = ModMatrix::zero(2);
        for row in 0..2 {
            for column in 0..2 {
                matrix.set(row, column, MODULUS - 1);
            }
        }
        let product = matrix.mul(&matrix);
        for row in 0..2 {
            for column in 0..2 {
                assert!(product.get(row, column) < MODULUS);
            }
        }
    }

    #[test]
    fn sum_entries_wraps() {
        let mut matrix = ModMatrix::zero(2);
        matrix.set(0, 0, MODULUS - 1);
        matrix.set(1, 1, 3);
        assert_eq!(matrix.sum_entries(), 2);
    }
}
