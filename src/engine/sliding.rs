//! Cell-by-cell dynamic programming over a sliding window.

use std::collections::HashMap;

use log::debug;

use crate::engine::{normalize, CountingEngine};
use crate::mask::{basis, ColumnMask, NUM_COLORS};
use crate::{GridColoringError, MODULUS};

/// Counts colorings one cell at a time, in raster order with row length
/// m (the shorter dimension), keeping as state the colors of the last m
/// cells.
///
/// `O(m * n * 2^m)` time, `O(2^m)` space. Never materializes the `3^m`
/// column universe, so it stays viable when the other engines' state
/// space is already intractable.
#[derive(Debug, Clone, Copy, Default)]
pub struct SlidingWindowEngine;

impl CountingEngine for SlidingWindowEngine {
    fn count(&self, m: u64, n: u64) -> Result<u64, GridColoringError> {
        let (m, n) = normalize(m, n)?;
        let top = basis(m);
        let width = u64::from(m);

        let mut dp: HashMap<ColumnMask, u64> = HashMap::from([(ColumnMask::EMPTY, 1)]);
        debug!("coloring {} cells one at a time (window size {m})", width * n);
        for cell in 0..width * n {
            let row = cell / width;
            let column = (cell % width) as u32;
            debug_assert_eq!(
                dp.len() as u64,
                window_population(m, row, column),
                "unexpected window-state count before cell ({row}, {column})"
            );
            let mut next: HashMap<ColumnMask, u64> = HashMap::with_capacity(dp.len() * 2);
            for (&mask, &count) in &dp {
                // The cell colored m steps ago sits at the bottom of
                // the window and is this cell's vertical neighbor; the
                // cell colored last sits at the top and is its
                // horizontal neighbor.
                let up = (row > 0).then_some(mask.bottom());
                let left = (column > 0).then_some(mask.top(top));
                for color in 0..NUM_COLORS {
                    if up == Some(color) || left == Some(color) {
                        continue;
                    }
                    let entry = next.entry(mask.shift_prepend(color, top)).or_insert(0);
                    *entry = (*entry + count) % MODULUS;
                }
            }
            dp = next;
        }
        Ok(dp.values().fold(0, |total, &count| (total + count) % MODULUS))
    }
}

/// Number of distinct window states just before coloring cell
/// (`row`, `column`): 1 at the origin, `3 * 2^(c-1)` while the window
/// is still filling along the first row, `3 * 2^(m-1)` whenever the
/// window aligns with a row boundary, and `9 * 2^(m-2)` when it
/// straddles two rows.
fn window_population(m: u32, row: u64, column: u32) -> u64 {
    match (row, column) {
        (0, 0) => 1,
        (0, column) => 3 * (1u64 << (column - 1)),
        (_, 0) => 3 * (1u64 << (m - 1)),
        // Straddling case requires m >= 2; with m == 1 every cell
        // starts a row, so this arm is unreachable there.
        _ => 9 * (1u64 << (m - 2)),
    }
}
