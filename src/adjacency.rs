//! Compatibility between the colorings of two adjacent columns.
//!
//! Two column masks may occupy neighboring columns when no row holds
//! the same color in both. Successor lists are built by the same
//! backtracking as mask enumeration, with each row additionally
//! excluded from matching the partner column's digit. The relation
//! depends only on m, so it is built once per count and reused across
//! every column step.

use std::collections::HashMap;

use log::debug;

use crate::enumerate::backtrack;
use crate::mask::{basis, ColumnMask};
use crate::GridColoringError;

/// Per-mask successor lists: `successors[mask]` holds every valid mask
/// that may appear in the column directly after `mask`.
pub type AdjacencyMap = HashMap<ColumnMask, Vec<ColumnMask>>;

/// Total number of ordered compatible column pairs: `2 * 3^m` (3 * 2
/// joint choices for the top row, then 3 joint choices per row below).
pub fn expected_transition_count(m: u32) -> u64 {
    2 * 3u64.pow(m)
}

/// Builds the successor list of every valid mask.
///
/// # Errors
///
/// Returns [`GridColoringError::InvariantViolation`] when the summed
/// successor-list sizes differ from `2 * 3^m`.
pub fn build_adjacency(m: u32, masks: &[ColumnMask]) -> Result<AdjacencyMap, GridColoringError> {
    let top = basis(m);
    let mut adjacency = AdjacencyMap::with_capacity(masks.len());
    let mut total = 0u64;
    for &mask in masks {
        let mut successors = Vec::new();
        backtrack(Some(mask), ColumnMask::EMPTY, top, top, &mut successors);
        total += successors.len() as u64;
        adjacency.insert(mask, successors);
    }
    let expected = expected_transition_count(m);
    if total != expected {
        return Err(GridColoringError::InvariantViolation(format!(
            "adjacency relation for m = {m} has {total} pairs, expected {expected}"
        )));
    }
    debug!("built adjacency relation for m = {m}: {total} compatible pairs");
    Ok(adjacency)
}
