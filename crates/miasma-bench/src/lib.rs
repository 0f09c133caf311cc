//! Benchmark profiles for the Miasma influence-map engine.
//!
//! Provides pre-built maps for benchmarking:
//!
//! - [`reference_map`]: 100×100 grid (10K cells) with four wandering sources
//! - [`stress_map`]: 316×316 grid (~100K cells) with sixteen wandering sources

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use miasma_engine::{InfluenceMap, Tuning};
use miasma_sources::WanderingEmitter;

/// Build a reference profile: 100×100 grid with 4 seeded wandering sources.
pub fn reference_map(seed: u64) -> InfluenceMap {
    build(100, 100, 4, seed)
}

/// Build a stress profile: 316×316 grid with 16 seeded wandering sources.
pub fn stress_map(seed: u64) -> InfluenceMap {
    build(316, 316, 16, seed)
}

fn build(width: u32, height: u32, sources: u64, seed: u64) -> InfluenceMap {
    // Parameters are validated constants; construction cannot fail.
    let tuning = Tuning::new(0.3, 0.8).unwrap();
    let mut map = InfluenceMap::new(width, height, tuning).unwrap();
    for i in 0..sources {
        let emitter = WanderingEmitter::new(width, height, 1.0, seed ^ i).unwrap();
        map.register(Box::new(emitter));
    }
    map
}
