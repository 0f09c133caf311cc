//! 8-connected neighbor model with per-neighbor distances.

use miasma_core::GridPos;
use smallvec::SmallVec;

/// Distance weight for the four cardinal neighbors.
pub const ORTHOGONAL_DISTANCE: f32 = 1.0;

/// Distance weight for the four diagonal neighbors.
pub const DIAGONAL_DISTANCE: f32 = std::f32::consts::SQRT_2;

/// All 8 offsets with their distance: W, E, S, N, then the diagonals.
const OFFSETS_8: [(i32, i32, f32); 8] = [
    (-1, 0, ORTHOGONAL_DISTANCE),
    (1, 0, ORTHOGONAL_DISTANCE),
    (0, -1, ORTHOGONAL_DISTANCE),
    (0, 1, ORTHOGONAL_DISTANCE),
    (-1, -1, DIAGONAL_DISTANCE),
    (1, 1, DIAGONAL_DISTANCE),
    (-1, 1, DIAGONAL_DISTANCE),
    (1, -1, DIAGONAL_DISTANCE),
];

/// A neighboring cell together with its distance weight.
///
/// Distance feeds the exponential attenuation in the diffusion pass:
/// cardinal neighbors count as 1.0, diagonal as √2.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Neighbor {
    /// The neighbor's coordinate.
    pub pos: GridPos,
    /// Distance weight from the cell this neighbor was produced for.
    pub distance: f32,
}

impl Neighbor {
    /// Create a neighbor descriptor with the default distance of 1.0.
    pub const fn new(pos: GridPos) -> Self {
        Self { pos, distance: 1.0 }
    }

    /// Create a neighbor descriptor with an explicit distance.
    pub const fn with_distance(pos: GridPos, distance: f32) -> Self {
        Self { pos, distance }
    }
}

/// Compute the existing 8-connected neighbors of `pos` within a
/// `width × height` grid.
///
/// Each of the up-to-8 entries is included only if it lies inside
/// `[0, width) × [0, height)`. Cells on an edge have 5 neighbors,
/// corners have 3; there is no wraparound and no neighbor is synthesized
/// at the boundary. The order of entries is unspecified — the diffusion
/// aggregation is order-independent by construction.
pub fn neighbours(pos: GridPos, width: u32, height: u32) -> SmallVec<[Neighbor; 8]> {
    let w = width as i32;
    let h = height as i32;
    let mut result = SmallVec::new();
    for (dx, dy, distance) in OFFSETS_8 {
        let nx = pos.x + dx;
        let ny = pos.y + dy;
        if nx >= 0 && nx < w && ny >= 0 && ny < h {
            result.push(Neighbor::with_distance(GridPos::new(nx, ny), distance));
        }
    }
    result
}
