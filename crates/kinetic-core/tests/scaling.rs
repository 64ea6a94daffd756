// File: crates/kinetic-core/tests/scaling.rs
// Purpose: Validate scale fitting: nice domains, inverted Y, degenerate input.

use kinetic_core::scale::{LinearScale, Scales};
use kinetic_core::series::Series;
use kinetic_core::types::Margin;

fn close(a: f32, b: f32) {
    assert!((a - b).abs() < 1e-3, "expected {b}, got {a}");
}

#[test]
fn known_corner_mapping() {
    // Niced domains year [2000, 2001] and value [10, 20] over a 100x100
    // surface with no margins: (2000, 10) -> (0, 100), (2001, 20) -> (100, 0).
    let data = vec![Series::from_pairs("A", vec![(2000, 10.0), (2001, 20.0)])];
    let scales = Scales::fit(&data, 100, 100, Margin::new(0, 0, 0, 0));

    assert_eq!(scales.x.domain(), (2000.0, 2001.0));
    assert_eq!(scales.y.domain(), (10.0, 20.0));

    close(scales.x.apply(2000.0), 0.0);
    close(scales.x.apply(2001.0), 100.0);
    close(scales.y.apply(10.0), 100.0);
    close(scales.y.apply(20.0), 0.0);
}

#[test]
fn fit_y_is_monotonically_decreasing() {
    let data = vec![Series::from_pairs(
        "A",
        (0..30).map(|i| (1990 + i, (i as f64) * 3.7 + 1.0)).collect(),
    )];
    let scales = Scales::fit(&data, 800, 600, Margin::default());

    let mut prev = f32::INFINITY;
    for i in 0..30 {
        let px = scales.y.apply((i as f64) * 3.7 + 1.0);
        assert!(px < prev, "larger value must draw higher (smaller pixel y)");
        prev = px;
    }
}

#[test]
fn degenerate_value_range_maps_to_range_midpoint() {
    let data = vec![
        Series::from_pairs("A", vec![(2000, 5.0), (2001, 5.0)]),
        Series::from_pairs("B", vec![(2000, 5.0)]),
    ];
    let scales = Scales::fit(&data, 100, 100, Margin::new(0, 0, 0, 0));

    // Y domain collapses to [5, 5]; everything lands mid-range, no NaN.
    close(scales.y.apply(5.0), 50.0);
    close(scales.y.apply(0.0), 50.0);
    close(scales.y.apply(1e9), 50.0);
}

#[test]
fn all_missing_dataset_degrades_to_flat_scales() {
    let data = vec![Series::new(
        "empty",
        vec![
            kinetic_core::Sample::missing(2000),
            kinetic_core::Sample::missing(2001),
        ],
    )];
    let scales = Scales::fit(&data, 100, 100, Margin::new(0, 0, 0, 0));
    let px = scales.y.apply(123.0);
    assert!(px.is_finite());
    let px = scales.x.apply(2000.0);
    assert!(px.is_finite());
}

#[test]
fn nice_expands_to_round_endpoints() {
    let s = LinearScale::new((0.13, 9.87), (0.0, 100.0)).nice(10);
    assert_eq!(s.domain(), (0.0, 10.0));

    // Fractional steps stay exact (no drift below the original endpoints).
    let s = LinearScale::new((2000.0, 2001.0), (0.0, 100.0)).nice(10);
    assert_eq!(s.domain(), (2000.0, 2001.0));
}

#[test]
fn invert_round_trips_through_apply() {
    let s = LinearScale::new((1960.0, 2019.0), (70.0, 780.0));
    for year in [1960.0, 1987.5, 2019.0] {
        let px = s.apply(year);
        assert!((s.invert(px) - year).abs() < 1e-3);
    }
}

#[test]
fn ticks_cover_the_domain_with_round_steps() {
    let s = LinearScale::new((0.0, 10.0), (0.0, 100.0));
    let ticks = s.ticks(10);
    assert_eq!(ticks.first().copied(), Some(0.0));
    assert_eq!(ticks.last().copied(), Some(10.0));
    assert_eq!(ticks.len(), 11);

    let s = LinearScale::new((3.0, 3.0), (0.0, 100.0));
    assert_eq!(s.ticks(10), vec![3.0]);
}
