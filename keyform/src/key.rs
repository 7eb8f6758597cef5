// Copyright 2026 the Keyform Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Key records: the physical input and the logical output.

/// A logical grid address.
///
/// Ordered by `row`, then `col`, which is the order keys end up in after
/// [`physical_to_logical`][crate::physical_to_logical].
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogicalPos {
    /// Row index, starting at 0 for the top-most row.
    pub row: u32,
    /// Column index, starting at 0 for the left-most column.
    pub col: u32,
}

impl LogicalPos {
    /// Create a position from a row and a column.
    #[inline]
    pub const fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }
}

/// Access to a caller-owned key record.
///
/// Implement this for your own key type to convert it in place. All lengths
/// are in layout units (1U is the pitch of one standard key) and the rotation
/// is in degrees, clockwise in a y-down coordinate system.
///
/// Values are expected to be finite. NaN or infinite geometry is outside the
/// domain of the conversion and produces unspecified (but memory-safe)
/// results.
pub trait PhysicalKey {
    /// Left edge of the unrotated key.
    fn x(&self) -> f64;
    /// Top edge of the unrotated key.
    fn y(&self) -> f64;
    /// Width of the key.
    fn w(&self) -> f64;
    /// Height of the key.
    fn h(&self) -> f64;
    /// Rotation in degrees.
    fn r(&self) -> f64;
    /// Horizontal rotation origin, if one was given.
    ///
    /// `Some(0.0)` is a real origin; only `None` falls back to [`x`][Self::x].
    fn rx(&self) -> Option<f64>;
    /// Vertical rotation origin, if one was given.
    ///
    /// `Some(0.0)` is a real origin; only `None` falls back to [`y`][Self::y].
    fn ry(&self) -> Option<f64>;
    /// Store the computed logical position.
    fn set_logical(&mut self, pos: LogicalPos);
}

/// A plain key record.
///
/// ```rust
/// use keyform::Key;
///
/// // A 2.25U wide key, rotated 15 degrees around the point (4, 4).
/// let key = Key::new(3.0, 2.0)
///     .with_size(2.25, 1.0)
///     .with_rotation(15.0)
///     .with_origin(4.0, 4.0);
/// assert_eq!(key.rx, Some(4.0));
/// ```
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Key {
    /// Left edge of the unrotated key.
    pub x: f64,
    /// Top edge of the unrotated key.
    pub y: f64,
    /// Width.
    pub w: f64,
    /// Height.
    pub h: f64,
    /// Rotation in degrees.
    pub r: f64,
    /// Horizontal rotation origin; `None` means "use `x`".
    pub rx: Option<f64>,
    /// Vertical rotation origin; `None` means "use `y`".
    pub ry: Option<f64>,
    /// Logical row, overwritten by the conversion.
    pub row: u32,
    /// Logical column, overwritten by the conversion.
    pub col: u32,
}

impl Default for Key {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            w: 1.0,
            h: 1.0,
            r: 0.0,
            rx: None,
            ry: None,
            row: 0,
            col: 0,
        }
    }
}

impl Key {
    /// A 1U, unrotated key with its top-left corner at `(x, y)`.
    pub fn new(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            ..Self::default()
        }
    }

    /// Set the width and height.
    #[must_use]
    pub fn with_size(mut self, w: f64, h: f64) -> Self {
        self.w = w;
        self.h = h;
        self
    }

    /// Set the rotation in degrees.
    #[must_use]
    pub fn with_rotation(mut self, r: f64) -> Self {
        self.r = r;
        self
    }

    /// Set an explicit rotation origin.
    #[must_use]
    pub fn with_origin(mut self, rx: f64, ry: f64) -> Self {
        self.rx = Some(rx);
        self.ry = Some(ry);
        self
    }

    /// The logical position currently stored on this key.
    pub fn logical(&self) -> LogicalPos {
        LogicalPos::new(self.row, self.col)
    }
}

impl PhysicalKey for Key {
    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }

    fn w(&self) -> f64 {
        self.w
    }

    fn h(&self) -> f64 {
        self.h
    }

    fn r(&self) -> f64 {
        self.r
    }

    fn rx(&self) -> Option<f64> {
        self.rx
    }

    fn ry(&self) -> Option<f64> {
        self.ry
    }

    fn set_logical(&mut self, pos: LogicalPos) {
        self.row = pos.row;
        self.col = pos.col;
    }
}
