//! Field storage and grid topology for the Miasma influence-map engine.
//!
//! Two pieces live here:
//!
//! - [`InfluenceGrid`]: a double-buffered flat scalar field with
//!   bounds-checked access and a ping-pong commit.
//! - [`neighbours`]: the 8-connected neighbor model with per-neighbor
//!   distances (1.0 orthogonal, √2 diagonal) and no wraparound.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod grid;
pub mod neighbors;

pub use grid::{InfluenceGrid, TickBuffers};
pub use neighbors::{neighbours, Neighbor, DIAGONAL_DISTANCE, ORTHOGONAL_DISTANCE};
