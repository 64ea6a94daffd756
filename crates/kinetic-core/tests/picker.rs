// File: crates/kinetic-core/tests/picker.rs
// Purpose: Validate the kd-tree picker against brute force on random point sets.

use kinetic_core::picker::SpatialIndex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn brute_force(points: &[(f32, f32)], x: f32, y: f32) -> usize {
    let mut best = (f32::INFINITY, usize::MAX);
    for (i, &(px, py)) in points.iter().enumerate() {
        let d2 = (x - px) * (x - px) + (y - py) * (y - py);
        // Strict less-than: first inserted wins on ties.
        if d2 < best.0 {
            best = (d2, i);
        }
    }
    best.1
}

#[test]
fn matches_brute_force_on_random_sets() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for &n in &[1usize, 2, 3, 17, 100, 1000] {
        let points: Vec<(f32, f32)> = (0..n)
            .map(|_| (rng.random_range(0.0f32..800.0), rng.random_range(0.0f32..600.0)))
            .collect();
        let index = SpatialIndex::from_coords(points.iter().copied());
        assert_eq!(index.len(), n);

        for _ in 0..50 {
            let qx = rng.random_range(-50.0f32..850.0);
            let qy = rng.random_range(-50.0f32..650.0);
            let got = index.nearest(qx, qy).expect("non-empty index");
            let want = brute_force(&points, qx, qy);
            let d = |i: usize| {
                let (px, py) = points[i];
                (qx - px) * (qx - px) + (qy - py) * (qy - py)
            };
            // Same point, or an exactly equidistant one with a lower index.
            assert_eq!(
                d(got),
                d(want),
                "kd-tree and brute force disagree on distance (n={n})"
            );
            assert_eq!(got, want, "tie must resolve to first inserted (n={n})");
        }
    }
}

#[test]
fn duplicate_coordinates_resolve_to_first_inserted() {
    let points = vec![(5.0f32, 5.0f32), (5.0, 5.0), (1.0, 1.0), (5.0, 5.0)];
    let index = SpatialIndex::from_coords(points);
    assert_eq!(index.nearest(5.0, 5.0), Some(0));
    assert_eq!(index.nearest(1.2, 0.9), Some(2));
}

#[test]
fn single_point_always_wins() {
    let index = SpatialIndex::from_coords(vec![(400.0f32, 300.0f32)]);
    assert_eq!(index.nearest(0.0, 0.0), Some(0));
    assert_eq!(index.nearest(1e6, -1e6), Some(0));
}

#[test]
fn empty_index_returns_none_without_panicking() {
    let index = SpatialIndex::from_coords(Vec::<(f32, f32)>::new());
    assert!(index.is_empty());
    assert_eq!(index.nearest(10.0, 10.0), None);
}
