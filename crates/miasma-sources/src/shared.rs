//! A movable source driven from outside the engine.

use std::sync::{Arc, Mutex, PoisonError};

use miasma_core::{GridPos, InfluenceSource};

#[derive(Debug)]
struct EmitterState {
    pos: GridPos,
    value: f32,
}

/// A cloneable influence source handle with interior mutability.
///
/// One clone is registered with the engine; the owning subsystem keeps
/// another and moves or revalues the emitter between ticks. The engine
/// reads the state once per tick during injection.
///
/// ```
/// use miasma_core::{GridPos, InfluenceSource};
/// use miasma_sources::SharedEmitter;
///
/// let emitter = SharedEmitter::new(GridPos::new(0, 0), 1.0);
/// let registered: Box<dyn InfluenceSource> = Box::new(emitter.clone());
/// emitter.set_position(GridPos::new(3, 1));
/// assert_eq!(registered.grid_position(), GridPos::new(3, 1));
/// ```
#[derive(Clone, Debug)]
pub struct SharedEmitter {
    state: Arc<Mutex<EmitterState>>,
}

impl SharedEmitter {
    /// Create an emitter at `pos` emitting `value`.
    pub fn new(pos: GridPos, value: f32) -> Self {
        Self {
            state: Arc::new(Mutex::new(EmitterState { pos, value })),
        }
    }

    /// Move the emitter; takes effect at the next tick's injection.
    pub fn set_position(&self, pos: GridPos) {
        self.lock().pos = pos;
    }

    /// Change the emitted value.
    pub fn set_value(&self, value: f32) {
        self.lock().value = value;
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, EmitterState> {
        // State is a plain position/value pair; a panicked writer cannot
        // leave it torn, so poisoning is recovered rather than propagated.
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl InfluenceSource for SharedEmitter {
    fn grid_position(&self) -> GridPos {
        self.lock().pos
    }

    fn value(&self) -> f32 {
        self.lock().value
    }
}
