//! Test utilities and mock types for Miasma development.
//!
//! Provides [`MockSource`], a movable, revaluable [`InfluenceSource`]
//! for constructing test scenarios without pulling in the reference
//! source implementations.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use std::sync::{Arc, Mutex};

use miasma_core::{GridPos, InfluenceSource};

/// A mock influence source with settable position and value.
///
/// Construct with [`MockSource::shared`], register the returned `Arc`
/// (the blanket `InfluenceSource for Arc<T>` impl makes it registrable
/// directly), and keep a clone to steer the source between ticks.
pub struct MockSource {
    pos: Mutex<GridPos>,
    value: Mutex<f32>,
}

impl MockSource {
    /// Create a shared mock source at `(x, y)` emitting `value`.
    pub fn shared(x: i32, y: i32, value: f32) -> Arc<Self> {
        Arc::new(Self {
            pos: Mutex::new(GridPos::new(x, y)),
            value: Mutex::new(value),
        })
    }

    /// Move the source; takes effect at the next tick's injection.
    pub fn set_position(&self, pos: GridPos) {
        *self.pos.lock().unwrap() = pos;
    }

    /// Change the emitted value.
    pub fn set_value(&self, value: f32) {
        *self.value.lock().unwrap() = value;
    }
}

impl InfluenceSource for MockSource {
    fn grid_position(&self) -> GridPos {
        *self.pos.lock().unwrap()
    }

    fn value(&self) -> f32 {
        *self.value.lock().unwrap()
    }
}
