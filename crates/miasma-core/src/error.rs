//! Error types for the Miasma influence-map engine.
//!
//! Organized by subsystem: grid access, tuning-parameter validation, and
//! tick execution. All failures are caller errors — there is no I/O and no
//! retryable condition anywhere in the engine.

use std::error::Error;
use std::fmt;

use crate::id::SourceId;
use crate::pos::GridPos;

/// Errors from grid construction or cell access.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A coordinate is outside `[0, width) × [0, height)`.
    ///
    /// Both bounds are enforced, negative coordinates included.
    OutOfBounds {
        /// The offending coordinate.
        pos: GridPos,
        /// Grid width at the time of the access.
        width: u32,
        /// Grid height at the time of the access.
        height: u32,
    },
    /// Attempted to construct a grid with a zero dimension.
    EmptyGrid,
    /// A grid dimension exceeds the maximum addressable size.
    DimensionTooLarge {
        /// Which dimension (`"width"` or `"height"`).
        name: &'static str,
        /// The rejected value.
        value: u32,
        /// The maximum allowed value.
        max: u32,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfBounds { pos, width, height } => {
                write!(f, "coordinate {pos} out of bounds for {width}x{height} grid")
            }
            Self::EmptyGrid => write!(f, "grid must have at least one cell per dimension"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} {value} exceeds maximum dimension {max}")
            }
        }
    }
}

impl Error for GridError {}

/// Errors from tuning-parameter validation.
///
/// Tuning values are validated at the boundary (constructors and setters),
/// so the diffusion pass itself never sees an out-of-domain value and
/// performs no clamping.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TuningError {
    /// Decay must be finite and `>= 0`.
    InvalidDecay {
        /// The rejected value.
        value: f32,
    },
    /// Momentum must lie in `[0, 1]`.
    InvalidMomentum {
        /// The rejected value.
        value: f32,
    },
}

impl fmt::Display for TuningError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidDecay { value } => {
                write!(f, "decay must be finite and >= 0, got {value}")
            }
            Self::InvalidMomentum { value } => {
                write!(f, "momentum must lie in [0, 1], got {value}")
            }
        }
    }
}

impl Error for TuningError {}

/// Errors from tick execution.
///
/// `propagate()` validates every source position before mutating any
/// buffer, so a failed tick leaves the field exactly as it was.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PropagateError {
    /// A registered source reported a position outside the grid.
    SourceOutOfBounds {
        /// Handle of the offending source.
        id: SourceId,
        /// The out-of-bounds position it reported.
        pos: GridPos,
    },
}

impl fmt::Display for PropagateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SourceOutOfBounds { id, pos } => {
                write!(f, "source {id} reported out-of-bounds position {pos}")
            }
        }
    }
}

impl Error for PropagateError {}
