//! Reference [`InfluenceSource`](miasma_core::InfluenceSource)
//! implementations for the Miasma engine.
//!
//! Three sources cover the common cases:
//!
//! - [`StaticEmitter`]: a fixed cell and value (beacons, hazards).
//! - [`SharedEmitter`]: a cloneable handle whose position and value an
//!   owning subsystem updates between ticks (the moving-agent case).
//! - [`WanderingEmitter`]: a deterministic seeded random walk, useful
//!   for demos and soak tests.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod shared;
pub mod static_emitter;
pub mod wander;

pub use shared::SharedEmitter;
pub use static_emitter::StaticEmitter;
pub use wander::WanderingEmitter;
