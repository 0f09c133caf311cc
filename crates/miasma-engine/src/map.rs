//! The influence map: field state, sources, and the tick loop.

use miasma_core::{
    FieldRead, GridError, GridPos, InfluenceSource, PropagateError, SourceId, TuningError,
};
use miasma_grid::{neighbours, InfluenceGrid};

use crate::registry::SourceRegistry;
use crate::tuning::Tuning;

/// A 2D influence map advanced one discrete step per [`propagate`] call.
///
/// Owns the double-buffered grid, the source registry, and the tuning
/// parameters. Single-threaded and cooperative: each tick runs to
/// completion as one unit; reads and direct writes are expected to
/// happen between ticks. If multiple threads share a map, the caller
/// serializes access with its own lock — the engine carries none.
///
/// [`propagate`]: InfluenceMap::propagate
///
/// # Example
///
/// ```
/// use miasma_core::FieldRead;
/// use miasma_engine::{InfluenceMap, Tuning};
/// use miasma_sources::StaticEmitter;
///
/// let mut map = InfluenceMap::new(3, 3, Tuning::new(0.0, 0.5).unwrap()).unwrap();
/// map.register(Box::new(StaticEmitter::new((1, 1).into(), 1.0)));
/// map.propagate().unwrap();
/// assert_eq!(map.value((1, 1).into()).unwrap(), 1.0);
/// assert_eq!(map.value((0, 0).into()).unwrap(), 0.5);
/// ```
pub struct InfluenceMap {
    grid: InfluenceGrid,
    registry: SourceRegistry,
    tuning: Tuning,
    ticks: u64,
    /// Per-tick injection scratch, reused across ticks.
    injected: Vec<(SourceId, GridPos, f32)>,
}

impl InfluenceMap {
    /// Create a map with a zeroed `width × height` field.
    ///
    /// Fails with [`GridError::EmptyGrid`] or
    /// [`GridError::DimensionTooLarge`] for invalid dimensions.
    pub fn new(width: u32, height: u32, tuning: Tuning) -> Result<Self, GridError> {
        Ok(Self {
            grid: InfluenceGrid::new(width, height)?,
            registry: SourceRegistry::new(),
            tuning,
            ticks: 0,
            injected: Vec::new(),
        })
    }

    /// Grid width in cells.
    pub fn width(&self) -> u32 {
        self.grid.width()
    }

    /// Grid height in cells.
    pub fn height(&self) -> u32 {
        self.grid.height()
    }

    /// The committed value at `pos`. No side effect.
    pub fn value(&self, pos: GridPos) -> Result<f32, GridError> {
        self.grid.value(pos)
    }

    /// The committed field as a flat row-major slice (`index = y * width + x`).
    pub fn as_slice(&self) -> &[f32] {
        self.grid.as_slice()
    }

    /// Write `value` at `pos` immediately, bypassing diffusion.
    ///
    /// The out-of-band injection path (e.g. a user-driven event). The
    /// write participates in the next tick's snapshot but is erased by
    /// the following diffusion pass unless re-applied each tick.
    pub fn set_influence(&mut self, pos: GridPos, value: f32) -> Result<(), GridError> {
        self.grid.set_influence(pos, value)
    }

    /// Register a source; it is queried once per tick from now on.
    pub fn register(&mut self, source: Box<dyn InfluenceSource>) -> SourceId {
        self.registry.register(source)
    }

    /// Remove a source by the handle returned from [`register`](Self::register).
    pub fn unregister(&mut self, id: SourceId) -> bool {
        self.registry.unregister(id)
    }

    /// Number of registered sources.
    pub fn source_count(&self) -> usize {
        self.registry.len()
    }

    /// Number of completed ticks.
    pub fn tick_count(&self) -> u64 {
        self.ticks
    }

    /// Current tuning parameters.
    pub fn tuning(&self) -> Tuning {
        self.tuning
    }

    /// Replace both tuning parameters at once.
    pub fn set_tuning(&mut self, tuning: Tuning) {
        self.tuning = tuning;
    }

    /// Spatial attenuation rate.
    pub fn decay(&self) -> f32 {
        self.tuning.decay()
    }

    /// Adoption rate toward the computed extreme.
    pub fn momentum(&self) -> f32 {
        self.tuning.momentum()
    }

    /// Replace the decay value, validating it.
    pub fn set_decay(&mut self, decay: f32) -> Result<(), TuningError> {
        self.tuning.set_decay(decay)
    }

    /// Replace the momentum value, validating it.
    pub fn set_momentum(&mut self, momentum: f32) -> Result<(), TuningError> {
        self.tuning.set_momentum(momentum)
    }

    /// Advance the simulation by one discrete step.
    ///
    /// Three phases, strictly in order:
    ///
    /// 1. **Injection** — every registered source's `(position, value)` is
    ///    read once and written into both buffers, so this tick's diffusion
    ///    sees fresh source values as neighbor inputs, never stale ones.
    ///    Positions are validated up front: on failure the tick returns
    ///    [`PropagateError::SourceOutOfBounds`] with the field untouched.
    /// 2. **Diffusion** — each cell's new value is computed from the
    ///    stable snapshot: neighbors are attenuated by
    ///    `exp(-decay * distance)`, the extreme with the larger magnitude
    ///    wins (sign follows the winner, zero-seeded so an uninfluenced
    ///    cell pulls toward zero), and the cell interpolates from its
    ///    previous value toward that extreme by `momentum`. Source cells
    ///    are then re-asserted so each reads back exactly its injected
    ///    value; with several sources on one cell the last registered
    ///    wins, in both the snapshot write and the re-assert.
    /// 3. **Commit** — buffer swap; the staged field becomes readable and
    ///    is the snapshot for the next tick.
    pub fn propagate(&mut self) -> Result<(), PropagateError> {
        // Phase 1: injection. Validate before mutating anything.
        self.injected.clear();
        for (id, source) in self.registry.iter() {
            let pos = source.grid_position();
            if !self.grid.contains(pos) {
                return Err(PropagateError::SourceOutOfBounds { id, pos });
            }
            self.injected.push((id, pos, source.value()));
        }
        for i in 0..self.injected.len() {
            let (id, pos, value) = self.injected[i];
            self.grid
                .set_influence(pos, value)
                .map_err(|_| PropagateError::SourceOutOfBounds { id, pos })?;
        }

        // Phase 2: diffusion, reading only the snapshot.
        let width = self.grid.width();
        let height = self.grid.height();
        let w = width as usize;
        let decay = self.tuning.decay();
        let momentum = self.tuning.momentum();

        let bufs = self.grid.begin_tick();
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                let i = y as usize * w + x as usize;
                let mut max_inf = 0.0f32;
                let mut min_inf = 0.0f32;
                for nb in neighbours(GridPos::new(x, y), width, height) {
                    let ni = nb.pos.y as usize * w + nb.pos.x as usize;
                    let inf = bufs.snapshot[ni] * (-decay * nb.distance).exp();
                    max_inf = max_inf.max(inf);
                    min_inf = min_inf.min(inf);
                }
                let extreme = if min_inf.abs() > max_inf {
                    min_inf
                } else {
                    max_inf
                };
                let prev = bufs.snapshot[i];
                bufs.staging[i] = prev + momentum * (extreme - prev);
            }
        }

        // A source's cell always reads back its injected value this tick.
        for &(_, pos, value) in &self.injected {
            bufs.staging[pos.y as usize * w + pos.x as usize] = value;
        }

        // Phase 3: commit.
        self.grid.publish();
        self.ticks += 1;
        Ok(())
    }
}

impl FieldRead for InfluenceMap {
    fn width(&self) -> u32 {
        self.grid.width()
    }

    fn height(&self) -> u32 {
        self.grid.height()
    }

    fn value(&self, pos: GridPos) -> Result<f32, GridError> {
        self.grid.value(pos)
    }
}
