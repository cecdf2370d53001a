//! Column-by-column propagation of mask counts.

use std::collections::HashMap;

use log::debug;

use crate::adjacency::build_adjacency;
use crate::engine::{normalize, CountingEngine};
use crate::enumerate::{expected_mask_count, valid_masks};
use crate::mask::ColumnMask;
use crate::{GridColoringError, MODULUS};

/// Counts colorings by advancing a per-mask count distribution one
/// column at a time through the adjacency relation.
///
/// `O(n * 3^m)` time (the relation holds `2 * 3^m` edges), `O(3^m)`
/// space. The workhorse when `3^m` is tractable and n is moderate.
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearEngine;

impl CountingEngine for LinearEngine {
    fn count(&self, m: u64, n: u64) -> Result<u64, GridColoringError> {
        let (m, n) = normalize(m, n)?;
        let masks = valid_masks(m)?;
        let adjacency = build_adjacency(m, &masks)?;

        // One column colored: every valid mask reached exactly once.
        let mut dp: HashMap<ColumnMask, u64> = masks.iter().map(|&mask| (mask, 1)).collect();
        debug!("propagating counts across {n} columns (m = {m})");
        for column in 1..n {
            debug_assert_eq!(
                dp.len() as u64,
                expected_mask_count(m),
                "distribution lost masks before column {column}"
            );
            let mut next: HashMap<ColumnMask, u64> = HashMap::with_capacity(dp.len());
            for (mask, &count) in &dp {
                for &successor in &adjacency[mask] {
                    let entry = next.entry(successor).or_insert(0);
                    *entry = (*entry + count) % MODULUS;
                }
            }
            dp = next;
        }
        Ok(dp.values().fold(0, |total, &count| (total + count) % MODULUS))
    }
}
