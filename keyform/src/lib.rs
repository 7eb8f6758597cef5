// Copyright 2026 the Keyform Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyform: physical keyboard layouts to logical row/column grids.
//!
//! Layout editors place keys at continuous positions, with sizes and
//! rotations. Keymap and matrix descriptions address keys by row and column.
//! This crate bridges the two:
//!
//! 1. **Geometry** ([`KeyGeometry`]): every key's rotated center and local
//!    right/down axes.
//! 2. **Neighbors** ([`find_neighbors`]): for each key and each of its four
//!    local directions, the best candidate ahead, scored by sideways offset
//!    plus a fraction of the forward distance.
//! 3. **Clusters** ([`build_clusters`]): keys are grouped into columns and
//!    rows with a [`UnionFind`], either straight from whole-unit positions
//!    ([`ClusterStrategy::StandardGrid`]) or from bidirectional neighbor
//!    edges ([`ClusterStrategy::Neighbor`]).
//! 4. **Numbering** ([`assign_axis`]): clusters are ordered by their mean
//!    position and numbered from 0, skipping one number wherever a wide
//!    physical gap separates two clusters.
//!
//! All heuristics are tunable through [`Thresholds`].
//!
//! ## Example
//!
//! ```rust
//! use keyform::{Key, physical_to_logical};
//!
//! let mut keys = vec![
//!     Key::new(0.0, 1.0),
//!     Key::new(0.0, 0.0),
//!     Key::new(1.0, 0.0),
//! ];
//! let layout = physical_to_logical(&mut keys);
//!
//! // Keys are now sorted by (row, col).
//! let rc: Vec<_> = keys.iter().map(|k| (k.row, k.col)).collect();
//! assert_eq!(rc, [(0, 0), (0, 1), (1, 0)]);
//! assert_eq!((layout.rows, layout.cols), (2, 2));
//! ```
//!
//! Your own key type works too once it implements [`PhysicalKey`]. Use
//! [`compute_logical`] to get positions without touching the keys.
//!
//! The conversion only reads geometry, never previously assigned rows or
//! columns, so running it again on the same layout gives the same result.
//!
//! ### Float semantics
//!
//! Geometry is expected to be finite. NaN or infinite values are not
//! checked for and give unspecified groupings.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: `no_std` float math through `libm` (via `kurbo`).
//! - `serde`: `Serialize`/`Deserialize` for [`Key`], [`LogicalPos`],
//!   [`Thresholds`] and [`ClusterStrategy`].
//! - `tracing`: `debug!` events describing each conversion.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod assign;
mod cluster;
mod geometry;
mod key;
mod neighbors;
mod thresholds;

pub use assign::{
    LogicalLayout, assign_axis, compute_logical, compute_logical_with, physical_to_logical,
    physical_to_logical_with,
};
pub use cluster::{ClusterStrategy, Clusters, build_clusters, choose_strategy};
pub use geometry::{Direction, KeyGeometry, resolve_all};
pub use key::{Key, LogicalPos, PhysicalKey};
pub use keyform_union_find::UnionFind;
pub use neighbors::{Neighbor, NeighborSlots, find_neighbors, is_trusted, score_candidate};
pub use thresholds::{
    DEFAULT_ALIGNMENT_THRESHOLD, DEFAULT_AXIS_ALIGNED_THRESHOLD, DEFAULT_FORWARD_WEIGHT,
    DEFAULT_GAP_THRESHOLD, DEFAULT_KEY_PITCH, DEFAULT_LARGE_KEY_THRESHOLD,
    DEFAULT_MAX_ALIGNMENT_RATIO, DEFAULT_MIN_DISTANCE, DEFAULT_MIN_FORWARD, Thresholds,
};
