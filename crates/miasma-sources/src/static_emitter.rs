//! A source fixed at one cell.

use miasma_core::{GridPos, InfluenceSource};

/// An influence source that never moves and never changes value.
///
/// Suited to stationary emitters: objectives, hazards, beacons.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StaticEmitter {
    pos: GridPos,
    value: f32,
}

impl StaticEmitter {
    /// Create an emitter pinned at `pos` emitting `value`.
    pub const fn new(pos: GridPos, value: f32) -> Self {
        Self { pos, value }
    }
}

impl InfluenceSource for StaticEmitter {
    fn grid_position(&self) -> GridPos {
        self.pos
    }

    fn value(&self) -> f32 {
        self.value
    }
}
