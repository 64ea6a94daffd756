// File: crates/kinetic-core/tests/render_rgba.rs
// Purpose: Validate RGBA rendering buffer shape and tolerance for empty snapshots.

use kinetic_core::render::{CanvasRenderer, RenderOptions};
use kinetic_core::scale::Scales;
use kinetic_core::series::{max_value, Series};
use kinetic_core::snapshot::{Snapshot, SnapshotKind};
use kinetic_core::types::Margin;

fn sample_data() -> Vec<Series> {
    vec![
        Series::from_pairs("archery", vec![(2000, 10.0), (2005, 25.0), (2010, 18.0)]),
        Series::from_pairs("baking", vec![(2000, 40.0), (2005, 35.0), (2010, 52.0)]),
    ]
}

fn opts() -> RenderOptions {
    let mut o = RenderOptions::default();
    o.draw_labels = false; // avoid font variance
    o
}

#[test]
fn render_rgba8_buffer() {
    let data = sample_data();
    let scales = Scales::fit(&data, 800, 600, Margin::default());
    let global_max = max_value(&data).unwrap();
    let lines = Snapshot::series(&data, &scales, global_max);

    let renderer = CanvasRenderer::new(opts());
    let (px, w, h, stride) = renderer
        .render_to_rgba8(Some(&scales), Some(&lines), None)
        .expect("rgba render");
    assert_eq!(w as usize * h as usize * 4, px.len());
    assert_eq!(stride, (w as usize) * 4);

    // Background alpha in top-left pixel (RGBA)
    assert_eq!(px[3], 255);
}

#[test]
fn empty_snapshot_renders_without_drawing() {
    let renderer = CanvasRenderer::new(opts());
    let lines = Snapshot::empty(SnapshotKind::Series);
    let points = Snapshot::empty(SnapshotKind::CrossSection);
    let (px, ..) = renderer
        .render_to_rgba8(None, Some(&lines), Some(&points))
        .expect("empty render");
    assert!(!px.is_empty());
}

#[test]
fn cross_section_with_empty_leading_category_renders() {
    let data = vec![
        // No sample for 2005: this category's cross-section slot is empty.
        Series::from_pairs("aa-empty", vec![(2000, 3.0)]),
        Series::from_pairs("bb-full", vec![(2000, 5.0), (2005, 9.0)]),
    ];
    let scales = Scales::fit(&data, 800, 600, Margin::default());
    let global_max = max_value(&data).unwrap();
    let points = Snapshot::cross_section(&data, 2005, &scales, global_max);

    // The cursor guide skips the empty leading category.
    let cursor = points.cursor_x().expect("cursor x from first non-empty");
    assert_eq!(cursor, points.data["bb-full"][0].x);

    let renderer = CanvasRenderer::new(opts());
    renderer
        .render_to_rgba8(Some(&scales), None, Some(&points))
        .expect("cross-section render");
}

#[test]
fn scales_add_tick_marks_to_the_axes() {
    let data = sample_data();
    let scales = Scales::fit(&data, 800, 600, Margin::default());
    let lines = Snapshot::series(&data, &scales, max_value(&data).unwrap());
    let renderer = CanvasRenderer::new(opts());

    let (with_ticks, _, _, stride) = renderer
        .render_to_rgba8(Some(&scales), Some(&lines), None)
        .expect("render with scales");
    let (without_ticks, ..) = renderer
        .render_to_rgba8(None, Some(&lines), None)
        .expect("render without scales");
    assert_ne!(with_ticks, without_ticks, "tick marks must be painted");

    // First x tick sits at the domain start (x = 70); its mark extends below
    // the bottom axis (y = 530), where nothing else draws.
    let at = |buf: &[u8], x: usize, y: usize| {
        let i = y * stride + x * 4;
        (buf[i], buf[i + 1], buf[i + 2])
    };
    let background = at(&with_ticks, 5, 5);
    assert_ne!(at(&with_ticks, 70, 533), background);
    assert_eq!(at(&without_ticks, 70, 533), background);
}

#[test]
fn series_snapshot_has_no_cursor() {
    let data = sample_data();
    let scales = Scales::fit(&data, 800, 600, Margin::default());
    let lines = Snapshot::series(&data, &scales, max_value(&data).unwrap());
    assert_eq!(lines.cursor_x(), None);
}
