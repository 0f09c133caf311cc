//! The Miasma propagation engine.
//!
//! [`InfluenceMap`] wires together the double-buffered grid, the source
//! registry, and the tuning parameters into a deterministic tick:
//! inject source values, diffuse from the stable snapshot, commit via
//! buffer swap. The engine has no notion of elapsed real time — each
//! [`InfluenceMap::propagate`] call advances the simulation by exactly
//! one discrete step; the caller owns the cadence.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod map;
pub mod registry;
pub mod tuning;

pub use map::InfluenceMap;
pub use registry::SourceRegistry;
pub use tuning::Tuning;
