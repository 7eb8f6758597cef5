// Copyright 2026 the Keyform Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Directional nearest-neighbor search ("ray casting") between keys.

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;

use crate::geometry::{Direction, KeyGeometry};
use crate::thresholds::Thresholds;

/// The best candidate found in one direction.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Neighbor {
    /// Index of the neighboring key in the input slice.
    pub index: usize,
    /// Ranking score; lower is better.
    pub score: f64,
}

/// Up to one neighbor per [`Direction`] for a single key.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct NeighborSlots {
    slots: [Option<Neighbor>; 4],
}

impl NeighborSlots {
    /// The neighbor found in `dir`, if any.
    #[inline]
    pub fn get(&self, dir: Direction) -> Option<Neighbor> {
        self.slots[dir.slot()]
    }

    /// Index of the neighbor found in `dir`, if any.
    #[inline]
    pub fn index(&self, dir: Direction) -> Option<usize> {
        self.get(dir).map(|n| n.index)
    }

    #[inline]
    fn set(&mut self, dir: Direction, neighbor: Option<Neighbor>) {
        self.slots[dir.slot()] = neighbor;
    }
}

/// Find the best neighbor of every key in each of its four local directions.
///
/// This is an all-pairs scan, quadratic in the number of keys, which is fine
/// for keyboards (tens to a few hundred keys).
pub fn find_neighbors(geometry: &[KeyGeometry], thresholds: &Thresholds) -> Vec<NeighborSlots> {
    (0..geometry.len())
        .map(|source| {
            let mut slots = NeighborSlots::default();
            for dir in Direction::ALL {
                slots.set(dir, best_in_direction(geometry, source, dir, thresholds));
            }
            slots
        })
        .collect()
}

/// Score a single candidate seen from `from` along `dir`.
///
/// Returns `None` when the candidate is a duplicate position, lies behind or
/// too close, or is too far off-axis.
pub fn score_candidate(
    from: &KeyGeometry,
    to: &KeyGeometry,
    dir: Direction,
    thresholds: &Thresholds,
) -> Option<f64> {
    let delta = to.center - from.center;
    if delta.length() < thresholds.min_distance {
        return None;
    }
    let axis = dir.vector(from);
    let forward = delta.dot(axis);
    if forward < thresholds.min_forward {
        return None;
    }
    // `axis` is a unit vector, so the cross product is the sideways distance.
    let perpendicular = axis.cross(delta).abs();
    if perpendicular / forward > thresholds.max_alignment_ratio {
        return None;
    }
    Some(perpendicular + forward * thresholds.forward_weight)
}

fn best_in_direction(
    geometry: &[KeyGeometry],
    source: usize,
    dir: Direction,
    thresholds: &Thresholds,
) -> Option<Neighbor> {
    let from = &geometry[source];
    let mut best: Option<Neighbor> = None;
    for (index, to) in geometry.iter().enumerate() {
        if index == source {
            continue;
        }
        let Some(score) = score_candidate(from, to, dir, thresholds) else {
            continue;
        };
        // Strict comparison keeps the earliest of equally good candidates.
        if best.is_none_or(|b| score < b.score) {
            best = Some(Neighbor { index, score });
        }
    }
    best
}

/// Whether the edge `from --dir--> table[from][dir]` can seed a cluster.
///
/// The target must point back at `from` in the opposite direction, and must
/// not also claim `from` in the same direction. The second case only happens
/// when the two keys are rotated very differently and their local frames
/// disagree about which way is which.
pub fn is_trusted(table: &[NeighborSlots], from: usize, dir: Direction) -> bool {
    let Some(to) = table[from].index(dir) else {
        return false;
    };
    let back = table[to].index(dir.opposite()) == Some(from);
    let conflict = table[to].index(dir) == Some(from);
    back && !conflict
}
