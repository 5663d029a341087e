//! Per-cell store counting.

use conmap_core::{GeoBounds, StorePoint};

/// Count the store points falling inside `bounds`, inclusive on all four
/// edges. A point exactly on a shared edge between two adjacent cells counts
/// in both — an accepted double-count that only affects display weighting.
///
/// Linear scan, O(points) per cell. At metropolitan scale (low thousands of
/// cells and points) the O(cells x points) total is fine; no spatial index.
#[must_use]
pub fn count_stores_in_cell(bounds: &GeoBounds, stores: &[StorePoint]) -> usize {
    stores
        .iter()
        .filter(|s| bounds.contains(s.lat, s.lng))
        .count()
}
