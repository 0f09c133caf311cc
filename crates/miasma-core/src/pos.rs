//! The [`GridPos`] cell coordinate type.

use std::fmt;

/// An integer cell coordinate on the influence grid.
///
/// Coordinates are signed so that out-of-range positions (including
/// negative ones) can be represented, reported in errors, and rejected
/// explicitly rather than wrapping silently. Valid positions lie in
/// `[0, width) × [0, height)` for the grid they address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GridPos {
    /// Column index.
    pub x: i32,
    /// Row index.
    pub y: i32,
}

impl GridPos {
    /// Create a coordinate from column and row indices.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for GridPos {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}
