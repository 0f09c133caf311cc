//! Miasma: an influence-map engine for game AI.
//!
//! A 2D scalar field over a grid that diffuses values emitted by moving
//! point sources, with exponential distance decay and temporal momentum.
//! Game AI reads the committed field to reason about spatial threat and
//! opportunity; the engine itself makes no decisions.
//!
//! This is the top-level facade crate re-exporting the public API from
//! the Miasma sub-crates. For most users, adding `miasma` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use miasma::prelude::*;
//! use miasma::sources::SharedEmitter;
//!
//! // A 16×16 field, moderate decay, quick adoption.
//! let tuning = Tuning::new(0.3, 0.8).unwrap();
//! let mut map = InfluenceMap::new(16, 16, tuning).unwrap();
//!
//! // Register a moving emitter and keep a handle to steer it.
//! let agent = SharedEmitter::new(GridPos::new(4, 4), 1.0);
//! let id = map.register(Box::new(agent.clone()));
//!
//! // The caller owns the cadence: each call is one discrete step.
//! map.propagate().unwrap();
//! agent.set_position(GridPos::new(5, 4));
//! map.propagate().unwrap();
//!
//! assert_eq!(map.value(GridPos::new(5, 4)).unwrap(), 1.0);
//! assert!(map.unregister(id));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the
//! prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `miasma-core` | `GridPos`, `SourceId`, errors, core traits |
//! | [`grid`] | `miasma-grid` | Field storage and the neighbor model |
//! | [`engine`] | `miasma-engine` | `InfluenceMap`, registry, tuning |
//! | [`sources`] | `miasma-sources` | Reference source implementations |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types, traits, and errors (`miasma-core`).
///
/// Contains [`types::GridPos`], [`types::SourceId`], the error enums,
/// and the capability traits ([`types::InfluenceSource`],
/// [`types::FieldRead`]).
pub use miasma_core as types;

/// Field storage and grid topology (`miasma-grid`).
///
/// Provides [`grid::InfluenceGrid`] and the 8-connected
/// [`grid::neighbours`] model with per-neighbor distances.
pub use miasma_grid as grid;

/// The propagation engine (`miasma-engine`).
///
/// [`engine::InfluenceMap`] is the main entry point: it owns the field,
/// the source registry, and the tuning parameters.
pub use miasma_engine as engine;

/// Reference influence sources (`miasma-sources`).
///
/// Includes [`sources::StaticEmitter`], [`sources::SharedEmitter`], and
/// the deterministic [`sources::WanderingEmitter`].
pub use miasma_sources as sources;

/// Common imports for typical Miasma usage.
///
/// ```rust
/// use miasma::prelude::*;
/// ```
pub mod prelude {
    pub use miasma_core::{
        FieldRead, GridError, GridPos, InfluenceSource, PropagateError, SourceId, TuningError,
    };
    pub use miasma_engine::{InfluenceMap, SourceRegistry, Tuning};
    pub use miasma_grid::{neighbours, InfluenceGrid, Neighbor};
}
