// Copyright 2026 the Keyform Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tunable constants for the physical to logical conversion.

/// Default for [`Thresholds::gap_threshold`].
pub const DEFAULT_GAP_THRESHOLD: f64 = 1.5;
/// Default for [`Thresholds::key_pitch`].
pub const DEFAULT_KEY_PITCH: f64 = 1.0;
/// Default for [`Thresholds::min_distance`].
pub const DEFAULT_MIN_DISTANCE: f64 = 0.001;
/// Default for [`Thresholds::min_forward`].
pub const DEFAULT_MIN_FORWARD: f64 = 0.1;
/// Default for [`Thresholds::max_alignment_ratio`] (roughly `tan(60°)`).
pub const DEFAULT_MAX_ALIGNMENT_RATIO: f64 = 1.73;
/// Default for [`Thresholds::forward_weight`].
pub const DEFAULT_FORWARD_WEIGHT: f64 = 0.3;
/// Default for [`Thresholds::alignment_threshold`].
pub const DEFAULT_ALIGNMENT_THRESHOLD: f64 = 0.5;
/// Default for [`Thresholds::axis_aligned_threshold`] (roughly `cos(30°)`).
pub const DEFAULT_AXIS_ALIGNED_THRESHOLD: f64 = 0.87;
/// Default for [`Thresholds::large_key_threshold`].
pub const DEFAULT_LARGE_KEY_THRESHOLD: f64 = 2.0;

/// Heuristic parameters, all in layout units unless noted.
///
/// Use struct update syntax to tweak a single value:
///
/// ```rust
/// use keyform::Thresholds;
///
/// let loose = Thresholds {
///     gap_threshold: 1.0,
///     ..Thresholds::default()
/// };
/// assert_eq!(loose.gap_distance(), 2.0);
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Thresholds {
    /// Extra spacing, beyond one [`key_pitch`][Self::key_pitch], between two
    /// consecutive clusters that reserves an empty grid line.
    pub gap_threshold: f64,
    /// Nominal distance between the centers of two adjacent keys.
    pub key_pitch: f64,
    /// Centers closer than this are duplicates, never neighbors.
    pub min_distance: f64,
    /// Minimum distance a candidate must lie ahead along the search direction.
    pub min_forward: f64,
    /// Maximum ratio of sideways to forward distance for a neighbor candidate.
    pub max_alignment_ratio: f64,
    /// Weight of the forward distance in the neighbor score.
    pub forward_weight: f64,
    /// Maximum center offset across the axis for two axis-aligned keys to
    /// share a row or column.
    pub alignment_threshold: f64,
    /// A local axis whose matching component exceeds this (a cosine) counts
    /// as axis-aligned.
    pub axis_aligned_threshold: f64,
    /// Keys larger than this along an axis are bucketed by their center on
    /// the standard grid instead of their origin.
    pub large_key_threshold: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            gap_threshold: DEFAULT_GAP_THRESHOLD,
            key_pitch: DEFAULT_KEY_PITCH,
            min_distance: DEFAULT_MIN_DISTANCE,
            min_forward: DEFAULT_MIN_FORWARD,
            max_alignment_ratio: DEFAULT_MAX_ALIGNMENT_RATIO,
            forward_weight: DEFAULT_FORWARD_WEIGHT,
            alignment_threshold: DEFAULT_ALIGNMENT_THRESHOLD,
            axis_aligned_threshold: DEFAULT_AXIS_ALIGNED_THRESHOLD,
            large_key_threshold: DEFAULT_LARGE_KEY_THRESHOLD,
        }
    }
}

impl Thresholds {
    /// Distance between two consecutive cluster means at or above which an
    /// empty grid line is reserved.
    #[inline]
    pub fn gap_distance(&self) -> f64 {
        self.key_pitch + self.gap_threshold
    }

    pub(crate) fn debug_validate(&self) {
        debug_assert!(self.key_pitch > 0.0, "key_pitch must be strictly positive");
        debug_assert!(
            self.gap_threshold >= 0.0,
            "gap_threshold must be non-negative"
        );
        debug_assert!(
            self.min_distance >= 0.0 && self.min_forward >= 0.0,
            "distance tolerances must be non-negative"
        );
        debug_assert!(
            self.max_alignment_ratio >= 0.0,
            "max_alignment_ratio must be non-negative"
        );
        debug_assert!(
            (0.0..=1.0).contains(&self.axis_aligned_threshold),
            "axis_aligned_threshold is a cosine and must be in 0..=1"
        );
    }
}
