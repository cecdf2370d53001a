//! Base-3 integer encoding of a run of cell colors.
//!
//! A [`ColumnMask`] packs m cell colors (each in `0..3`) into the base-3
//! digits of a single integer. The column engines read it as one grid
//! column, most significant digit at the top; the sliding-window engine
//! reads the same encoding as the last m cells in raster order, most
//! significant digit being the most recently colored cell.

/// Number of colors a cell can take.
pub const NUM_COLORS: u64 = 3;

/// Place value of the most significant digit of an m-digit mask.
///
/// The top color of a mask is `mask / basis`; prepending a color
/// multiplies it by this value. Requires `m >= 1`.
pub fn basis(m: u32) -> u64 {
    NUM_COLORS.pow(m - 1)
}

/// One column (or window) of cell colors, packed in base 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct ColumnMask(pub u64);

impl ColumnMask {
    /// The mask with no digits set; seed value for digit-by-digit
    /// construction and for the empty sliding window.
    pub const EMPTY: Self = Self(0);

    /// Color of the least significant cell (the column bottom, or the
    /// oldest cell in a sliding window).
    pub fn bottom(self) -> u64 {
        self.0 % NUM_COLORS
    }

    /// Color of the most significant cell (the column top, or the
    /// newest cell in a sliding window), given the mask's basis.
    pub fn top(self, basis: u64) -> u64 {
        self.0 / basis
    }

    /// Color at `position`, counting from the least significant cell.
    pub fn digit(self, position: u32) -> u64 {
        self.0 / NUM_COLORS.pow(position) % NUM_COLORS
    }

    /// Drops the least significant cell, shifts the rest one place
    /// down, and inserts `color` as the new most significant cell.
    ///
    /// This one operation drives enumeration, transition building, and
    /// the sliding window: it is "extend the colored region by one cell,
    /// forgetting the cell that just left the window".
    pub fn shift_prepend(self, color: u64, basis: u64) -> Self {
        Self(color * basis + self.0 / NUM_COLORS)
    }

    /// True when no two vertically adjacent cells of an m-cell column
    /// share a color.
    pub fn is_valid_column(self, m: u32) -> bool {
        (0..m.saturating_sub(1)).all(|i| self.digit(i) != self.digit(i + 1))
    }
}
