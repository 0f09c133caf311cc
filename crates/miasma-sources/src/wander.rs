//! A deterministic randomly-roaming source.

use std::sync::{Arc, Mutex, PoisonError};

use miasma_core::{GridError, GridPos, InfluenceSource};
use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;

#[derive(Debug)]
struct WanderState {
    pos: GridPos,
    rng: ChaCha8Rng,
}

/// An influence source that takes one random 8-connected step per
/// [`wander`](WanderingEmitter::wander) call, clamped to the grid.
///
/// The walk is driven by a seeded ChaCha8 RNG: two emitters built with
/// the same seed and bounds trace identical paths, keeping soak tests
/// and demos replayable. The caller decides when to wander — typically
/// once between ticks, mirroring how a game would move an agent.
///
/// Cloneable like [`SharedEmitter`](crate::SharedEmitter): register one
/// clone, keep another to drive the walk.
#[derive(Clone, Debug)]
pub struct WanderingEmitter {
    state: Arc<Mutex<WanderState>>,
    value: f32,
    width: u32,
    height: u32,
}

impl WanderingEmitter {
    /// Create an emitter wandering within a `width × height` grid,
    /// starting at a seed-determined cell.
    ///
    /// Fails with [`GridError::EmptyGrid`] if either bound is 0, or
    /// [`GridError::DimensionTooLarge`] past `i32::MAX`.
    pub fn new(width: u32, height: u32, value: f32, seed: u64) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::EmptyGrid);
        }
        let max = i32::MAX as u32;
        if width > max {
            return Err(GridError::DimensionTooLarge {
                name: "width",
                value: width,
                max,
            });
        }
        if height > max {
            return Err(GridError::DimensionTooLarge {
                name: "height",
                value: height,
                max,
            });
        }
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let pos = GridPos::new(
            (rng.next_u32() % width) as i32,
            (rng.next_u32() % height) as i32,
        );
        Ok(Self {
            state: Arc::new(Mutex::new(WanderState { pos, rng })),
            value,
            width,
            height,
        })
    }

    /// Take one random step (any of the 8 directions, or staying put),
    /// clamped to the grid bounds. Returns the new position.
    pub fn wander(&self) -> GridPos {
        let mut state = self.lock();
        let dx = (state.rng.next_u32() % 3) as i32 - 1;
        let dy = (state.rng.next_u32() % 3) as i32 - 1;
        let pos = GridPos::new(
            (state.pos.x + dx).clamp(0, self.width as i32 - 1),
            (state.pos.y + dy).clamp(0, self.height as i32 - 1),
        );
        state.pos = pos;
        pos
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, WanderState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl InfluenceSource for WanderingEmitter {
    fn grid_position(&self) -> GridPos {
        self.lock().pos
    }

    fn value(&self) -> f32 {
        self.value
    }
}
