// File: crates/kinetic-core/src/color.rs
// Summary: Deterministic series coloring via a cyclic sinebow colormap.

use skia_safe as skia;

use crate::series::Series;

/// Evaluate the sinebow colormap at `t` in [0, 1]. Cyclic rainbow; the same
/// `t` always yields the same color.
pub fn sinebow(t: f64) -> skia::Color {
    use std::f64::consts::PI;
    let t = (0.5 - t) * PI;
    let r = 255.0 * t.sin().powi(2);
    let g = 255.0 * (t + PI / 3.0).sin().powi(2);
    let b = 255.0 * (t + 2.0 * PI / 3.0).sin().powi(2);
    skia::Color::from_argb(255, r.round() as u8, g.round() as u8, b.round() as u8)
}

/// Representative color for one series: the colormap over `[0, global_max]`
/// evaluated at the mean of the series' present values. Pure; an all-missing
/// series or an empty domain lands at the colormap origin.
pub fn color_for(series: &Series, global_max: f64) -> skia::Color {
    let mean = series.mean_value().unwrap_or(0.0);
    let t = if global_max > 0.0 {
        (mean / global_max).clamp(0.0, 1.0)
    } else {
        0.0
    };
    sinebow(t)
}

/// CSS-style `#rrggbb` form, used by the SVG output.
pub fn to_hex(color: skia::Color) -> String {
    format!("#{:02x}{:02x}{:02x}", color.r(), color.g(), color.b())
}
