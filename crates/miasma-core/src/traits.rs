//! Capability traits: influence emission and read-only field access.

use std::sync::Arc;

use crate::error::GridError;
use crate::pos::GridPos;

/// An external entity that injects a value at its current grid cell.
///
/// The engine queries `grid_position()` and `value()` once per tick and
/// never mutates the source. The position is expected to change between
/// ticks — sources represent moving agents; that is the normal case, not
/// an edge case. Positions must lie inside the grid the source is
/// registered with, or the tick fails.
///
/// Sources are registered by value (`Box<dyn InfluenceSource>`). A caller
/// that needs to keep driving a source after registration registers an
/// `Arc` of it and mutates through interior mutability:
///
/// ```
/// use std::sync::{Arc, Mutex};
/// use miasma_core::{GridPos, InfluenceSource};
///
/// struct Agent {
///     pos: Mutex<GridPos>,
/// }
///
/// impl InfluenceSource for Agent {
///     fn grid_position(&self) -> GridPos {
///         *self.pos.lock().unwrap()
///     }
///     fn value(&self) -> f32 {
///         1.0
///     }
/// }
///
/// let agent = Arc::new(Agent { pos: Mutex::new(GridPos::new(2, 3)) });
/// let registered: Box<dyn InfluenceSource> = Box::new(Arc::clone(&agent));
/// *agent.pos.lock().unwrap() = GridPos::new(2, 4); // moves next tick
/// assert_eq!(registered.grid_position(), GridPos::new(2, 4));
/// ```
pub trait InfluenceSource: Send + 'static {
    /// The cell this source currently occupies.
    fn grid_position(&self) -> GridPos;

    /// The scalar value this source emits at its cell.
    fn value(&self) -> f32;
}

impl<T> InfluenceSource for Arc<T>
where
    T: InfluenceSource + Sync + ?Sized,
{
    fn grid_position(&self) -> GridPos {
        (**self).grid_position()
    }

    fn value(&self) -> f32 {
        (**self).value()
    }
}

/// Read-only access to a scalar field over a grid.
///
/// This is the seam between the engine and external readers such as a
/// renderer: a reader only needs dimensions and per-cell values, never
/// the buffers behind them. Safe to call any number of times between
/// ticks.
pub trait FieldRead {
    /// Grid width in cells. Fixed for the lifetime of the field.
    fn width(&self) -> u32;

    /// Grid height in cells. Fixed for the lifetime of the field.
    fn height(&self) -> u32;

    /// The committed value at `pos`.
    ///
    /// Returns `Err(GridError::OutOfBounds)` for any coordinate outside
    /// `[0, width) × [0, height)`, in either direction.
    fn value(&self, pos: GridPos) -> Result<f32, GridError>;
}
