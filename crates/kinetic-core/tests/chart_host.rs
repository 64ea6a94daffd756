// File: crates/kinetic-core/tests/chart_host.rs
// Purpose: Validate the interactive host: picking, isolation toggling, and
// previous/next bookkeeping for transitions.

use kinetic_core::chart::{AnimatedChart, ChartOptions};
use kinetic_core::series::Series;
use kinetic_core::snapshot::SnapshotKind;

fn dataset() -> Vec<Series> {
    vec![
        Series::from_pairs("archery", vec![(2000, 10.0), (2010, 20.0)]),
        Series::from_pairs("baking", vec![(2000, 60.0), (2010, 80.0)]),
        Series::from_pairs("chess", vec![(2000, 35.0), (2010, 45.0)]),
    ]
}

#[test]
fn pick_returns_the_nearest_sample() {
    let chart = AnimatedChart::new(dataset(), ChartOptions::default());
    let scales = chart.scales();
    let x = scales.x.apply(2000.0);
    let y = scales.y.apply(60.0);

    let p = chart.pick(x + 2.0, y - 2.0).expect("non-empty chart");
    assert_eq!(p.category, "baking");
    assert_eq!(p.year, 2000);
    assert_eq!(p.value, 60.0);
}

#[test]
fn toggle_isolates_and_restores() {
    let mut chart = AnimatedChart::new(dataset(), ChartOptions::default());
    let (x, y) = {
        let scales = chart.scales();
        (scales.x.apply(2010.0), scales.y.apply(45.0))
    };

    chart.toggle_isolated(x, y);
    assert_eq!(chart.isolated(), Some("chess"));
    let snapshot = chart.line_snapshot();
    assert_eq!(snapshot.data.len(), 1);
    assert!(snapshot.data.contains_key("chess"));

    // A second click anywhere returns to the full dataset.
    chart.toggle_isolated(0.0, 0.0);
    assert_eq!(chart.isolated(), None);
    assert_eq!(chart.line_snapshot().data.len(), 3);
}

#[test]
fn isolation_rebuilds_the_picker() {
    let mut chart = AnimatedChart::new(dataset(), ChartOptions::default());
    chart.set_isolated(Some("archery".to_string()));

    // Wherever we pick, only the isolated category can win.
    for (x, y) in [(0.0, 0.0), (400.0, 300.0), (790.0, 10.0)] {
        let p = chart.pick(x, y).expect("isolated scope still has points");
        assert_eq!(p.category, "archery");
    }
}

#[test]
fn transitions_record_the_displayed_snapshot() {
    let mut chart = AnimatedChart::new(dataset(), ChartOptions::default());

    let (prev1, next1) = chart.transition_lines();
    assert!(prev1.is_empty(), "nothing was displayed before the first frame");
    assert_eq!(next1.data.len(), 3);

    chart.set_isolated(Some("baking".to_string()));
    let (prev2, next2) = chart.transition_lines();
    assert_eq!(prev2.data.len(), 3, "previous is the last displayed snapshot");
    assert_eq!(next2.data.len(), 1);
}

#[test]
fn pointer_cross_section_and_clear() {
    let mut chart = AnimatedChart::new(dataset(), ChartOptions::default());
    let (prev, next) = chart.transition_points(2010);
    assert!(prev.is_empty());
    assert_eq!(next.kind, SnapshotKind::CrossSection);
    // One point per category at the hovered year.
    assert!(next.data.values().all(|v| v.len() == 1));
    assert!(next.data.values().all(|v| v[0].year == 2010));

    let (prev, next) = chart.clear_points();
    assert!(!prev.is_empty());
    assert!(next.is_empty());
}

#[test]
fn colors_survive_isolation() {
    let mut chart = AnimatedChart::new(dataset(), ChartOptions::default());
    let full = chart.line_snapshot();
    let color_before = full.data["archery"][0].color;

    chart.set_isolated(Some("archery".to_string()));
    let isolated = chart.line_snapshot();
    let color_after = isolated.data["archery"][0].color;
    assert_eq!(color_before, color_after, "colormap domain is the full dataset");
}
