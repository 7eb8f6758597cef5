// Copyright 2026 the Keyform Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Grouping keys into row and column clusters.
//!
//! Two strategies exist and one is picked for the whole layout:
//!
//! - [`ClusterStrategy::StandardGrid`] for layouts where every key sits on
//!   whole-unit coordinates without meaningful rotation. Keys are bucketed
//!   by grid line directly.
//! - [`ClusterStrategy::Neighbor`] for everything else (staggered, split or
//!   rotated layouts). Trusted neighbor edges seed the clusters.

use hashbrown::HashMap;
use keyform_union_find::UnionFind;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::geometry::{Direction, KeyGeometry};
use crate::key::PhysicalKey;
use crate::neighbors::{NeighborSlots, find_neighbors, is_trusted};
use crate::thresholds::Thresholds;

/// How clusters were built for a layout.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ClusterStrategy {
    /// Whole-unit, unrotated layout; clusters come straight from positions.
    StandardGrid,
    /// Clusters come from bidirectional neighbor edges.
    Neighbor,
}

/// Row and column partitions of a layout.
#[derive(Clone, Debug)]
pub struct Clusters {
    /// Which strategy produced the partitions.
    pub strategy: ClusterStrategy,
    /// Keys sharing a set share a column.
    pub columns: UnionFind,
    /// Keys sharing a set share a row.
    pub rows: UnionFind,
}

/// Pick the clustering strategy for a whole layout.
///
/// The standard grid is used only when every key has whole-number `x`/`y`
/// and both of its local axes are axis-aligned.
pub fn choose_strategy<K: PhysicalKey>(
    keys: &[K],
    geometry: &[KeyGeometry],
    thresholds: &Thresholds,
) -> ClusterStrategy {
    let standard = keys.iter().zip(geometry).all(|(key, geom)| {
        is_whole(key.x())
            && is_whole(key.y())
            && geom.is_axis_aligned(thresholds.axis_aligned_threshold)
    });
    if standard {
        ClusterStrategy::StandardGrid
    } else {
        ClusterStrategy::Neighbor
    }
}

/// Partition `keys` into column and row clusters.
///
/// `geometry[i]` must be the resolved geometry of `keys[i]`.
pub fn build_clusters<K: PhysicalKey>(
    keys: &[K],
    geometry: &[KeyGeometry],
    thresholds: &Thresholds,
) -> Clusters {
    debug_assert_eq!(
        keys.len(),
        geometry.len(),
        "every key needs resolved geometry"
    );
    let strategy = choose_strategy(keys, geometry, thresholds);
    let (columns, rows) = match strategy {
        ClusterStrategy::StandardGrid => standard_grid(keys, geometry, thresholds),
        ClusterStrategy::Neighbor => {
            let table = find_neighbors(geometry, thresholds);
            neighbor_based(&table, geometry, thresholds)
        }
    };
    Clusters {
        strategy,
        columns,
        rows,
    }
}

fn is_whole(v: f64) -> bool {
    v.floor() == v
}

/// Grid line a key is bucketed into along one axis.
///
/// Keys up to `large_key_threshold` use their origin; larger keys (spacebars,
/// tall enter keys) use the line under their visual center.
#[allow(
    clippy::cast_possible_truncation,
    reason = "Grid lines of a keyboard layout are small whole numbers."
)]
fn grid_line(origin: f64, extent: f64, center: f64, thresholds: &Thresholds) -> i64 {
    if extent <= thresholds.large_key_threshold {
        origin as i64
    } else {
        center.floor() as i64
    }
}

fn standard_grid<K: PhysicalKey>(
    keys: &[K],
    geometry: &[KeyGeometry],
    thresholds: &Thresholds,
) -> (UnionFind, UnionFind) {
    let mut columns = UnionFind::new(keys.len());
    let mut rows = UnionFind::new(keys.len());
    // Grid line -> first key seen on it.
    let mut first_col: HashMap<i64, usize> = HashMap::new();
    let mut first_row: HashMap<i64, usize> = HashMap::new();

    for (i, (key, geom)) in keys.iter().zip(geometry).enumerate() {
        let col = grid_line(key.x(), key.w(), geom.center.x, thresholds);
        let row = grid_line(key.y(), key.h(), geom.center.y, thresholds);
        columns.union(*first_col.entry(col).or_insert(i), i);
        rows.union(*first_row.entry(row).or_insert(i), i);
    }
    (columns, rows)
}

fn neighbor_based(
    table: &[NeighborSlots],
    geometry: &[KeyGeometry],
    thresholds: &Thresholds,
) -> (UnionFind, UnionFind) {
    let mut columns = UnionFind::new(geometry.len());
    let mut rows = UnionFind::new(geometry.len());
    #[cfg(feature = "tracing")]
    let mut trusted = 0_usize;

    for from in 0..geometry.len() {
        for dir in Direction::ALL {
            if !is_trusted(table, from, dir) {
                continue;
            }
            let Some(to) = table[from].index(dir) else {
                continue;
            };
            #[cfg(feature = "tracing")]
            {
                trusted += 1;
            }
            if !stacked(&geometry[from], &geometry[to], dir, thresholds) {
                continue;
            }
            if dir.is_horizontal() {
                rows.union(from, to);
            } else {
                columns.union(from, to);
            }
        }
    }

    #[cfg(feature = "tracing")]
    tracing::debug!(
        keys = geometry.len(),
        trusted_edges = trusted,
        columns = columns.set_count(),
        rows = rows.set_count(),
        "built neighbor clusters"
    );
    (columns, rows)
}

/// Whether two keys joined by a trusted edge share a row (horizontal `dir`)
/// or column (vertical `dir`).
///
/// Two axis-aligned keys must also have their centers within
/// `alignment_threshold` across the edge. Once either key is rotated past
/// the axis threshold the edge alone decides.
fn stacked(a: &KeyGeometry, b: &KeyGeometry, dir: Direction, thresholds: &Thresholds) -> bool {
    let limit = thresholds.axis_aligned_threshold;
    if dir.is_horizontal() {
        if a.is_horizontal_aligned(limit) && b.is_horizontal_aligned(limit) {
            (a.center.y - b.center.y).abs() <= thresholds.alignment_threshold
        } else {
            true
        }
    } else if a.is_vertical_aligned(limit) && b.is_vertical_aligned(limit) {
        (a.center.x - b.center.x).abs() <= thresholds.alignment_threshold
    } else {
        true
    }
}
