//! Concrete numeric scenarios for the propagation algorithm.
//!
//! These pin the exact update rule: zero-seeded extreme aggregation,
//! magnitude tie-break, exponential distance decay, and momentum
//! interpolation, walked through on small grids by hand.

use miasma_core::GridPos;
use miasma_engine::{InfluenceMap, Tuning};
use miasma_test_utils::MockSource;

fn p(x: i32, y: i32) -> GridPos {
    GridPos::new(x, y)
}

const EPS: f32 = 1e-6;

/// 3×3 grid, decay 0, momentum 0.5, one source of 1.0 at the center.
///
/// Tick 1: center pinned at 1.0, every neighbour 0 + 0.5·(1 − 0) = 0.5.
/// Tick 2: center still 1.0; each ring cell 0.5 + 0.5·(1 − 0.5) = 0.75
/// (the center, at 1.0 in the snapshot, is the dominant extreme for all
/// eight ring cells of a 3×3 grid).
#[test]
fn three_by_three_two_tick_walkthrough() {
    let mut map = InfluenceMap::new(3, 3, Tuning::new(0.0, 0.5).unwrap()).unwrap();
    let src = MockSource::shared(1, 1, 1.0);
    map.register(Box::new(src));

    map.propagate().unwrap();
    assert!((map.value(p(1, 1)).unwrap() - 1.0).abs() < EPS);
    for y in 0..3 {
        for x in 0..3 {
            if (x, y) != (1, 1) {
                let v = map.value(p(x, y)).unwrap();
                assert!((v - 0.5).abs() < EPS, "tick 1 cell ({x},{y}) = {v}");
            }
        }
    }

    map.propagate().unwrap();
    assert!((map.value(p(1, 1)).unwrap() - 1.0).abs() < EPS);
    for y in 0..3 {
        for x in 0..3 {
            if (x, y) != (1, 1) {
                let v = map.value(p(x, y)).unwrap();
                assert!((v - 0.75).abs() < EPS, "tick 2 cell ({x},{y}) = {v}");
            }
        }
    }
}

/// Momentum 1, decay 0: one tick floods every cell adjacent to the source
/// with exactly the source value, and the source cell itself holds it.
#[test]
fn full_adoption_law() {
    let mut map = InfluenceMap::new(5, 5, Tuning::new(0.0, 1.0).unwrap()).unwrap();
    map.register(Box::new(MockSource::shared(2, 2, 0.8)));
    map.propagate().unwrap();

    assert!((map.value(p(2, 2)).unwrap() - 0.8).abs() < EPS);
    for y in 1..=3 {
        for x in 1..=3 {
            let v = map.value(p(x, y)).unwrap();
            assert!((v - 0.8).abs() < EPS, "adjacent cell ({x},{y}) = {v}");
        }
    }
    // Cells two steps out saw only zero neighbours this tick.
    assert_eq!(map.value(p(0, 0)).unwrap(), 0.0);
    assert_eq!(map.value(p(4, 2)).unwrap(), 0.0);
}

/// A −0.5 neighbour beats a +0.3 neighbour: magnitude wins, sign follows.
#[test]
fn magnitude_tie_break_prefers_larger_magnitude() {
    let mut map = InfluenceMap::new(3, 1, Tuning::new(0.0, 1.0).unwrap()).unwrap();
    map.set_influence(p(0, 0), 0.3).unwrap();
    map.set_influence(p(2, 0), -0.5).unwrap();
    map.propagate().unwrap();
    assert!((map.value(p(1, 0)).unwrap() - (-0.5)).abs() < EPS);
}

/// Symmetric case: +0.5 vs −0.3 picks the positive extreme.
#[test]
fn magnitude_tie_break_positive_winner() {
    let mut map = InfluenceMap::new(3, 1, Tuning::new(0.0, 1.0).unwrap()).unwrap();
    map.set_influence(p(0, 0), -0.3).unwrap();
    map.set_influence(p(2, 0), 0.5).unwrap();
    map.propagate().unwrap();
    assert!((map.value(p(1, 0)).unwrap() - 0.5).abs() < EPS);
}

/// The extreme aggregation is zero-seeded: a cell whose neighbours are
/// all negative never invents a positive influence, and vice versa a
/// cell with no influenced neighbours pulls toward zero, not toward the
/// least-negative neighbour.
#[test]
fn extremes_are_zero_seeded() {
    let mut map = InfluenceMap::new(3, 1, Tuning::new(0.0, 1.0).unwrap()).unwrap();
    map.set_influence(p(1, 0), -0.4).unwrap();
    map.propagate().unwrap();
    // Both neighbours of (1,0) are 0.0, so both extremes are 0 and the
    // cell adopts 0 — its own −0.4 is not among its inputs.
    assert_eq!(map.value(p(1, 0)).unwrap(), 0.0);
    // Its neighbours, in turn, do see the −0.4.
    assert!((map.value(p(0, 0)).unwrap() - (-0.4)).abs() < EPS);
}

/// Exponential decay: a diagonal neighbour is attenuated by exp(−decay·√2),
/// an orthogonal one by exp(−decay).
#[test]
fn decay_uses_per_neighbour_distance() {
    let decay = 0.7f32;
    let mut map = InfluenceMap::new(3, 3, Tuning::new(decay, 1.0).unwrap()).unwrap();
    map.register(Box::new(MockSource::shared(1, 1, 1.0)));
    map.propagate().unwrap();

    let ortho = map.value(p(1, 0)).unwrap();
    let diag = map.value(p(0, 0)).unwrap();
    assert!((ortho - (-decay).exp()).abs() < EPS, "orthogonal = {ortho}");
    assert!(
        (diag - (-decay * std::f32::consts::SQRT_2).exp()).abs() < EPS,
        "diagonal = {diag}"
    );
    assert!(diag < ortho);
}

/// Increasing decay strictly decreases the diffused magnitude next to a
/// non-zero source.
#[test]
fn decay_monotonicity_at_adjacent_cell() {
    let mut previous = f32::INFINITY;
    for decay in [0.0f32, 0.25, 0.5, 1.0, 2.0] {
        let mut map = InfluenceMap::new(3, 3, Tuning::new(decay, 0.5).unwrap()).unwrap();
        map.register(Box::new(MockSource::shared(1, 1, 1.0)));
        map.propagate().unwrap();
        let v = map.value(p(1, 0)).unwrap();
        assert!(v < previous, "decay {decay}: {v} not < {previous}");
        previous = v;
    }
}

/// A moving source injects at its new cell; the old cell is left to the
/// diffusion dynamics. This is the normal case, not an edge case.
#[test]
fn moving_source_injects_at_current_position() {
    let mut map = InfluenceMap::new(5, 1, Tuning::new(0.0, 1.0).unwrap()).unwrap();
    let src = MockSource::shared(0, 0, 1.0);
    map.register(Box::new(src.clone()));
    map.propagate().unwrap();
    assert_eq!(map.value(p(0, 0)).unwrap(), 1.0);

    src.set_position(p(4, 0));
    map.propagate().unwrap();
    assert_eq!(map.value(p(4, 0)).unwrap(), 1.0);
    // The vacated cell now follows diffusion only.
    assert!((map.value(p(0, 0)).unwrap() - 1.0).abs() < EPS); // neighbour (1,0) was 1.0
}

/// Direct injection survives exactly until the next tick erases it.
#[test]
fn direct_injection_is_transient() {
    let mut map = InfluenceMap::new(5, 5, Tuning::new(0.0, 0.0).unwrap()).unwrap();
    map.set_influence(p(2, 2), 0.9).unwrap();
    assert_eq!(map.value(p(2, 2)).unwrap(), 0.9);
    // Momentum 0 freezes the diffused field, so the write persists.
    map.propagate().unwrap();
    assert_eq!(map.value(p(2, 2)).unwrap(), 0.9);
    // With momentum 1 the next pass recomputes the cell from its
    // still-zero neighbours, erasing the out-of-band write — while the
    // neighbours themselves adopt the 0.9 they saw in the snapshot.
    map.set_momentum(1.0).unwrap();
    map.propagate().unwrap();
    assert_eq!(map.value(p(2, 2)).unwrap(), 0.0);
    assert_eq!(map.value(p(1, 2)).unwrap(), 0.9);
}
