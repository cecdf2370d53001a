//! Enumeration of internally valid column masks.
//!
//! A column coloring is valid when no two vertically adjacent cells
//! share a color. Masks are built by backtracking from the top of the
//! column downward, pruning any color equal to the digit fixed just
//! above. The same backtracking core also builds the adjacent-column
//! relation (see [`crate::adjacency`]) by constraining each row against
//! a fixed partner mask.

use log::debug;

use crate::mask::{basis, ColumnMask, NUM_COLORS};
use crate::GridColoringError;

/// Number of internally valid masks for an m-cell column: `3 * 2^(m-1)`
/// (3 choices for the top cell, 2 for every cell below it).
pub fn expected_mask_count(m: u32) -> u64 {
    3 * (1u64 << (m - 1))
}

/// Collects every completion of `partial` into a full column mask whose
/// vertically adjacent digits differ, optionally also differing
/// digit-for-digit from a fixed `partner` mask.
///
/// `place` is the place value of the digit being chosen; it starts at
/// the column's basis (`top`) and shrinks by a factor of 3 per fixed
/// digit, so the column fills from the top down.
pub(crate) fn backtrack(
    partner: Option<ColumnMask>,
    partial: ColumnMask,
    place: u64,
    top: u64,
    out: &mut Vec<ColumnMask>,
) {
    if place == 0 {
        out.push(partial);
        return;
    }
    for color in 0..NUM_COLORS {
        // Vertical constraint: differ from the digit fixed just above.
        if place != top && partial.0 / (place * NUM_COLORS) % NUM_COLORS == color {
            continue;
        }
        // Horizontal constraint: differ from the partner's digit in
        // this row.
        if partner.is_some_and(|p| p.0 / place % NUM_COLORS == color) {
            continue;
        }
        backtrack(
            partner,
            ColumnMask(partial.0 + color * place),
            place / NUM_COLORS,
            top,
            out,
        );
    }
}

/// Enumerates every valid coloring of one m-cell column.
///
/// # Errors
///
/// Returns [`GridColoringError::InvariantViolation`] when the
/// enumerated set does not contain exactly `3 * 2^(m-1)` masks.
pub fn valid_masks(m: u32) -> Result<Vec<ColumnMask>, GridColoringError> {
    let top = basis(m);
    let mut masks = Vec::with_capacity(expected_mask_count(m) as usize);
    backtrack(None, ColumnMask::EMPTY, top, top, &mut masks);
    let expected = expected_mask_count(m);
    if masks.len() as u64 != expected {
        return Err(GridColoringError::InvariantViolation(format!(
            "enumerated {} column masks for m = {m}, expected {expected}",
            masks.len()
        )));
    }
    debug!("enumerated {} valid column masks for m = {m}", masks.len());
    Ok(masks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    // Independent enumeration strategy: start from the empty mask and,
    // row by row, shift-prepend every color that differs from the digit
    // placed in the previous round.
    fn rewrite_masks(m: u32) -> HashSet<ColumnMask> {
        let top = basis(m);
        let mut masks = HashSet::from([ColumnMask::EMPTY]);
        for row in 0..m {
            let mut next = HashSet::new();
            for &mask in &masks {
                for color in 0..NUM_COLORS {
                    if row > 0 && mask.top(top) == color {
                        continue;
                    }
                    next.insert(mask.shift_prepend(color, top));
                }
            }
            masks = next;
        }
        masks
    }

    #[test]
    fn mask_count_matches_closed_form() {
        for m in 1..=8 {
            let masks = valid_masks(m).unwrap();
            assert_eq!(masks.len() as u64, expected_mask_count(m), "m = {m}");
        }
    }

    #[test]
    fn masks_are_distinct_and_internally_valid() {
        for m in 1..=6 {
            let masks = valid_masks(m).unwrap();
            let unique: HashSet<_> = masks.iter().copied().collect();
            assert_eq!(unique.len(), masks.len(), "duplicates for m = {m}");
            for mask in masks {
                assert!(mask.is_valid_column(m), "invalid mask {mask:?} for m = {m}");
            }
        }
    }

    #[test]
    fn backtracking_agrees_with_set_rewriting() {
        for m in 1..=7 {
            let backtracked: HashSet<_> = valid_masks(m).unwrap().into_iter().collect();
            assert_eq!(backtracked, rewrite_masks(m), "m = {m}");
        }
    }

    #[test]
    fn single_cell_column_has_three_masks() {
        let masks = valid_masks(1).unwrap();
        let unique: HashSet<_> = masks.into_iter().collect();
        assert_eq!(
            unique,
            HashSet::from([ColumnMask(0), ColumnMask(1), ColumnMask(2)])
        );
    }
}
