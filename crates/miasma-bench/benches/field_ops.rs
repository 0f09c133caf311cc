//! Criterion micro-benchmarks for the grid topology and tick loop.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use miasma_bench::{reference_map, stress_map};
use miasma_core::GridPos;
use miasma_grid::neighbours;

/// Benchmark: neighbours() over all 10K cells of a 100×100 grid.
fn bench_neighbours_10k(c: &mut Criterion) {
    c.bench_function("neighbours_10k", |b| {
        b.iter(|| {
            for y in 0..100i32 {
                for x in 0..100i32 {
                    let n = neighbours(GridPos::new(x, y), 100, 100);
                    black_box(&n);
                }
            }
        });
    });
}

/// Benchmark: one full tick on the 100×100 reference profile.
fn bench_propagate_reference(c: &mut Criterion) {
    let mut map = reference_map(42);
    c.bench_function("propagate_100x100", |b| {
        b.iter(|| {
            map.propagate().unwrap();
            black_box(map.tick_count());
        });
    });
}

/// Benchmark: one full tick on the ~100K-cell stress profile.
fn bench_propagate_stress(c: &mut Criterion) {
    let mut map = stress_map(42);
    c.bench_function("propagate_316x316", |b| {
        b.iter(|| {
            map.propagate().unwrap();
            black_box(map.tick_count());
        });
    });
}

criterion_group!(
    benches,
    bench_neighbours_10k,
    bench_propagate_reference,
    bench_propagate_stress
);
criterion_main!(benches);
