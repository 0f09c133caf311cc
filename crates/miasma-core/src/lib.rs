//! Core types and traits for the Miasma influence-map engine.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the fundamental abstractions used throughout the Miasma workspace:
//! the grid coordinate type, source handles, error types, and the two
//! capability traits through which external code participates in the
//! simulation ([`InfluenceSource`]) or observes it ([`FieldRead`]).

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod pos;
pub mod traits;

pub use error::{GridError, PropagateError, TuningError};
pub use id::SourceId;
pub use pos::GridPos;
pub use traits::{FieldRead, InfluenceSource};
