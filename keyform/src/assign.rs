// Copyright 2026 the Keyform Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Turning clusters into dense row/column numbers.

use alloc::vec;
use alloc::vec::Vec;

use crate::cluster::{ClusterStrategy, build_clusters};
use crate::geometry::resolve_all;
use crate::key::{LogicalPos, PhysicalKey};
use crate::thresholds::Thresholds;

/// Result of a conversion.
#[derive(Clone, Debug, PartialEq)]
pub struct LogicalLayout {
    /// Logical position of every key.
    ///
    /// From [`compute_logical`] these follow input order. From
    /// [`physical_to_logical`] they follow the reordered slice.
    pub positions: Vec<LogicalPos>,
    /// Strategy used to cluster the keys.
    pub strategy: ClusterStrategy,
    /// Number of grid rows, including reserved empty rows.
    pub rows: u32,
    /// Number of grid columns, including reserved empty columns.
    pub cols: u32,
}

/// Number clusters along one axis.
///
/// Each group is placed at the mean of `coord` over its members. Groups are
/// ordered by that mean (equal means keep their order in `groups`) and
/// numbered from 0. When two consecutive means are at least
/// [`Thresholds::gap_distance`] apart, one number is skipped to leave an
/// empty grid line.
///
/// Returns the number of each group, indexed like `groups`. Groups must not
/// be empty.
pub fn assign_axis<F>(groups: &[Vec<usize>], coord: F, thresholds: &Thresholds) -> Vec<u32>
where
    F: Fn(usize) -> f64,
{
    let means: Vec<f64> = groups
        .iter()
        .map(|members| {
            debug_assert!(!members.is_empty(), "cluster invariant violated: empty group");
            members.iter().map(|&i| coord(i)).sum::<f64>() / members.len() as f64
        })
        .collect();

    let mut order: Vec<usize> = (0..groups.len()).collect();
    order.sort_by(|&a, &b| means[a].total_cmp(&means[b]));

    let gap = thresholds.gap_distance();
    let mut numbers = vec![0_u32; groups.len()];
    let mut next = 0_u32;
    let mut previous: Option<f64> = None;
    for group in order {
        let mean = means[group];
        if previous.is_some_and(|p| mean - p >= gap) {
            next += 1;
        }
        numbers[group] = next;
        next += 1;
        previous = Some(mean);
    }
    numbers
}

/// Compute logical positions with the default [`Thresholds`].
///
/// Nothing is written back; see [`compute_logical_with`].
pub fn compute_logical<K: PhysicalKey>(keys: &[K]) -> LogicalLayout {
    compute_logical_with(keys, &Thresholds::default())
}

/// Compute the logical position of every key without modifying the keys.
///
/// `positions[i]` belongs to `keys[i]`. Existing row/column values on the
/// keys are never read, so repeated calls on the same geometry agree.
pub fn compute_logical_with<K: PhysicalKey>(keys: &[K], thresholds: &Thresholds) -> LogicalLayout {
    thresholds.debug_validate();
    let geometry = resolve_all(keys);
    let mut clusters = build_clusters(keys, &geometry, thresholds);

    let col_groups = clusters.columns.groups();
    let row_groups = clusters.rows.groups();
    let col_numbers = assign_axis(&col_groups, |i| geometry[i].center.x, thresholds);
    let row_numbers = assign_axis(&row_groups, |i| geometry[i].center.y, thresholds);

    let mut positions = vec![LogicalPos::default(); keys.len()];
    for (members, &col) in col_groups.iter().zip(&col_numbers) {
        for &i in members {
            positions[i].col = col;
        }
    }
    for (members, &row) in row_groups.iter().zip(&row_numbers) {
        for &i in members {
            positions[i].row = row;
        }
    }

    let layout = LogicalLayout {
        positions,
        strategy: clusters.strategy,
        rows: extent(&row_numbers),
        cols: extent(&col_numbers),
    };
    #[cfg(feature = "tracing")]
    tracing::debug!(
        keys = keys.len(),
        strategy = ?layout.strategy,
        rows = layout.rows,
        cols = layout.cols,
        "computed logical layout"
    );
    layout
}

/// Convert a physical layout in place with the default [`Thresholds`].
///
/// See [`physical_to_logical_with`].
pub fn physical_to_logical<K: PhysicalKey>(keys: &mut [K]) -> LogicalLayout {
    physical_to_logical_with(keys, &Thresholds::default())
}

/// Convert a physical layout in place.
///
/// Every key receives its logical row and column through
/// [`PhysicalKey::set_logical`], then the slice is stably sorted by
/// `(row, col)`. An empty slice is left untouched.
pub fn physical_to_logical_with<K: PhysicalKey>(
    keys: &mut [K],
    thresholds: &Thresholds,
) -> LogicalLayout {
    let mut layout = compute_logical_with(keys, thresholds);
    for (key, &pos) in keys.iter_mut().zip(&layout.positions) {
        key.set_logical(pos);
    }

    let mut order: Vec<usize> = (0..keys.len()).collect();
    order.sort_by_key(|&i| layout.positions[i]);
    layout.positions = order.iter().map(|&i| layout.positions[i]).collect();
    permute(keys, order);
    layout
}

fn extent(numbers: &[u32]) -> u32 {
    numbers.iter().max().map_or(0, |&m| m + 1)
}

/// Rearrange `items` so that position `k` holds what was at `order[k]`.
///
/// `order` must be a permutation of `0..items.len()`.
fn permute<T>(items: &mut [T], mut order: Vec<usize>) {
    debug_assert_eq!(items.len(), order.len(), "order must cover every item");
    for start in 0..order.len() {
        let mut slot = start;
        loop {
            let source = order[slot];
            // Mark as placed.
            order[slot] = slot;
            if source == start {
                break;
            }
            items.swap(slot, source);
            slot = source;
        }
    }
}
