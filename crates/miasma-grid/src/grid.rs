//! Double-buffered scalar field storage.
//!
//! [`InfluenceGrid`] owns two same-shaped flat buffers that alternate
//! between "front" (committed, readable) and "back" (staging, written by
//! the diffusion pass) roles. The lifecycle per tick is:
//!
//! 1. Direct writes via [`InfluenceGrid::set_influence`] land in both
//!    buffers immediately.
//! 2. [`InfluenceGrid::begin_tick`] hands out the front buffer as a
//!    stable snapshot and the back buffer as the staging target.
//! 3. [`InfluenceGrid::publish`] swaps the buffers — a pointer swap, not
//!    an O(n) copy — making the staged values the committed field.

use miasma_core::{FieldRead, GridError, GridPos};

/// Buffers handed out for one tick's diffusion pass.
///
/// `snapshot` is the committed field at the start of the tick; `staging`
/// is where every cell's new value must be written before
/// [`InfluenceGrid::publish`]. The diffusion pass fills `staging`
/// completely, so stale staging content from two ticks ago is never
/// observable.
pub struct TickBuffers<'a> {
    /// The committed field state, stable for the whole tick.
    pub snapshot: &'a [f32],
    /// Write target for the tick's new values.
    pub staging: &'a mut [f32],
}

/// A fixed-size 2D scalar field with ping-pong double buffering.
///
/// Dimensions are set at construction and never change. Storage is a flat
/// row-major `Vec<f32>` (`index = y * width + x`) with a bounds-checked
/// accessor; both bounds are enforced, negative coordinates included.
#[derive(Clone, Debug)]
pub struct InfluenceGrid {
    width: u32,
    height: u32,
    front: Vec<f32>,
    back: Vec<f32>,
}

impl InfluenceGrid {
    /// Maximum cells per axis: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: u32 = i32::MAX as u32;

    /// Create a zero-filled grid of `width × height` cells.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if either dimension is 0, or
    /// `Err(GridError::DimensionTooLarge)` if either exceeds
    /// [`MAX_DIM`](Self::MAX_DIM).
    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid);
        }
        if width > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "width",
                value: width,
                max: Self::MAX_DIM,
            });
        }
        if height > Self::MAX_DIM {
            return Err(GridError::DimensionTooLarge {
                name: "height",
                value: height,
                max: Self::MAX_DIM,
            });
        }
        let cells = width as usize * height as usize;
        Ok(Self {
            width,
            height,
            front: vec![0.0; cells],
            back: vec![0.0; cells],
        })
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.front.len()
    }

    /// Whether `pos` lies inside the grid.
    pub fn contains(&self, pos: GridPos) -> bool {
        pos.x >= 0 && (pos.x as u32) < self.width && pos.y >= 0 && (pos.y as u32) < self.height
    }

    /// Resolve `pos` to its flat row-major index, validating both bounds.
    pub fn index_of(&self, pos: GridPos) -> Result<usize, GridError> {
        if self.contains(pos) {
            Ok(pos.y as usize * self.width as usize + pos.x as usize)
        } else {
            Err(GridError::OutOfBounds {
                pos,
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Write `value` into both buffers at `pos`, bypassing diffusion.
    ///
    /// This is the direct-injection path: the write is visible to readers
    /// immediately and to the next diffusion pass as part of its snapshot.
    /// It is itself subject to erasure by the next tick unless re-applied.
    pub fn set_influence(&mut self, pos: GridPos, value: f32) -> Result<(), GridError> {
        let idx = self.index_of(pos)?;
        self.front[idx] = value;
        self.back[idx] = value;
        Ok(())
    }

    /// Borrow the snapshot and staging buffers for one tick.
    ///
    /// The snapshot stays stable while the staging buffer is filled; the
    /// split borrow makes aliasing impossible. Call
    /// [`publish`](Self::publish) afterwards to commit.
    pub fn begin_tick(&mut self) -> TickBuffers<'_> {
        TickBuffers {
            snapshot: &self.front,
            staging: &mut self.back,
        }
    }

    /// Commit the staged values: swap the buffers.
    pub fn publish(&mut self) {
        std::mem::swap(&mut self.front, &mut self.back);
    }

    /// The committed field as a flat row-major slice.
    ///
    /// Intended for bulk readers (e.g. a renderer uploading the whole
    /// field); per-cell access goes through [`FieldRead::value`].
    pub fn as_slice(&self) -> &[f32] {
        &self.front
    }
}

impl FieldRead for InfluenceGrid {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn value(&self, pos: GridPos) -> Result<f32, GridError> {
        let idx = self.index_of(pos)?;
        Ok(self.front[idx])
    }
}
