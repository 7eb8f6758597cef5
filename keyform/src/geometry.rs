// Copyright 2026 the Keyform Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resolved key geometry: rotated center and local axes.

use alloc::vec::Vec;

#[cfg(not(feature = "std"))]
use kurbo::common::FloatFuncs as _;
use kurbo::{Affine, Point, Vec2};

use crate::key::PhysicalKey;

/// A search direction in a key's own rotated frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Along the key's local right axis.
    Right,
    /// Against the key's local right axis.
    Left,
    /// Along the key's local down axis.
    Down,
    /// Against the key's local down axis.
    Up,
}

impl Direction {
    /// All four directions, in slot order.
    pub const ALL: [Self; 4] = [Self::Right, Self::Left, Self::Down, Self::Up];

    /// The direction pointing the other way.
    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Right => Self::Left,
            Self::Left => Self::Right,
            Self::Down => Self::Up,
            Self::Up => Self::Down,
        }
    }

    /// Whether this direction runs along a row (left/right).
    #[inline]
    pub const fn is_horizontal(self) -> bool {
        matches!(self, Self::Right | Self::Left)
    }

    /// Unit vector for this direction in the frame of `geom`.
    #[inline]
    pub fn vector(self, geom: &KeyGeometry) -> Vec2 {
        match self {
            Self::Right => geom.right,
            Self::Left => -geom.right,
            Self::Down => geom.down,
            Self::Up => -geom.down,
        }
    }

    pub(crate) const fn slot(self) -> usize {
        match self {
            Self::Right => 0,
            Self::Left => 1,
            Self::Down => 2,
            Self::Up => 3,
        }
    }
}

/// Where a key sits in the physical plane once its rotation is applied.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct KeyGeometry {
    /// Rotated center point.
    pub center: Point,
    /// Unit vector of the key's local right axis, `(cos r, sin r)`.
    pub right: Vec2,
    /// Unit vector of the key's local down axis, `(-sin r, cos r)`.
    pub down: Vec2,
}

impl KeyGeometry {
    /// Resolve the geometry of a single key.
    ///
    /// The unrotated center `(x + w/2, y + h/2)` is rotated by `r` degrees
    /// around `(rx, ry)`, which defaults to `(x, y)` when absent.
    pub fn resolve<K: PhysicalKey + ?Sized>(key: &K) -> Self {
        let origin = Point::new(key.rx().unwrap_or(key.x()), key.ry().unwrap_or(key.y()));
        let local_center = Point::new(key.x() + key.w() / 2.0, key.y() + key.h() / 2.0);
        let theta = key.r().to_radians();
        let right = Vec2::from_angle(theta);
        Self {
            center: Affine::rotate_about(theta, origin) * local_center,
            right,
            down: Vec2::new(-right.y, right.x),
        }
    }

    /// Whether the local right axis is close enough to horizontal.
    #[inline]
    pub fn is_horizontal_aligned(&self, threshold: f64) -> bool {
        self.right.x.abs() > threshold
    }

    /// Whether the local down axis is close enough to vertical.
    #[inline]
    pub fn is_vertical_aligned(&self, threshold: f64) -> bool {
        self.down.y.abs() > threshold
    }

    /// Whether both local axes are close to the layout axes.
    #[inline]
    pub fn is_axis_aligned(&self, threshold: f64) -> bool {
        self.is_horizontal_aligned(threshold) && self.is_vertical_aligned(threshold)
    }
}

/// Resolve every key of a layout, preserving order.
pub fn resolve_all<K: PhysicalKey>(keys: &[K]) -> Vec<KeyGeometry> {
    keys.iter().map(KeyGeometry::resolve).collect()
}
