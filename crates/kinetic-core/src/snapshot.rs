// File: crates/kinetic-core/src/snapshot.rs
// Summary: Scaled, colored point sets keyed by category: the unit handed to the
// interpolator and the renderer.

use std::collections::BTreeMap;

use skia_safe as skia;

use crate::color::color_for;
use crate::scale::Scales;
use crate::series::Series;

/// One sample mapped into pixel space. Derived data; never mutated after
/// creation, recomputed whenever the scales or the dataset scope change.
#[derive(Clone, Debug)]
pub struct ScaledPoint {
    pub x: f32,
    pub y: f32,
    pub year: i32,
    pub value: f64,
    pub category: String,
    pub color: skia::Color,
}

/// Whether a snapshot holds full series polylines or a single-year
/// cross-section. Explicit tag instead of sniffing point counts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SnapshotKind {
    Series,
    CrossSection,
}

/// Category key -> ordered scaled points. BTreeMap keeps iteration (and thus
/// draw order) deterministic.
#[derive(Clone, Debug)]
pub struct Snapshot {
    pub kind: SnapshotKind,
    pub data: BTreeMap<String, Vec<ScaledPoint>>,
}

impl Snapshot {
    pub fn empty(kind: SnapshotKind) -> Self {
        Self { kind, data: BTreeMap::new() }
    }

    /// Full-series snapshot: every present sample of every category, scaled
    /// and colored against `global_max`.
    pub fn series(data: &[Series], scales: &Scales, global_max: f64) -> Self {
        let mut out = BTreeMap::new();
        for s in data {
            out.insert(s.category.clone(), scale_series(s, scales, global_max));
        }
        Self { kind: SnapshotKind::Series, data: out }
    }

    /// Single-year cross-section: per category, only the samples for `year`
    /// (usually one point, possibly none). Colors stay those of the whole
    /// series so a category keeps its identity across snapshot kinds.
    pub fn cross_section(data: &[Series], year: i32, scales: &Scales, global_max: f64) -> Self {
        let mut out = BTreeMap::new();
        for s in data {
            let color = color_for(s, global_max);
            let points = s
                .present()
                .filter(|&(y, _)| y == year)
                .map(|(y, v)| scale_point(s, y, v, scales, color))
                .collect();
            out.insert(s.category.clone(), points);
        }
        Self { kind: SnapshotKind::CrossSection, data: out }
    }

    pub fn is_empty(&self) -> bool {
        self.data.values().all(|v| v.is_empty())
    }

    /// Shared x of a cross-section, for the vertical cursor guide. Skips
    /// empty leading categories; `None` for series snapshots.
    pub fn cursor_x(&self) -> Option<f32> {
        if self.kind != SnapshotKind::CrossSection {
            return None;
        }
        self.data
            .values()
            .find_map(|points| points.first().map(|p| p.x))
    }
}

/// Flatten a dataset into one scaled point list (dataset order), the input
/// for the spatial index. Insertion order is the picker's tie-break order.
pub fn flatten(data: &[Series], scales: &Scales, global_max: f64) -> Vec<ScaledPoint> {
    let mut out = Vec::new();
    for s in data {
        out.extend(scale_series(s, scales, global_max));
    }
    out
}

fn scale_series(series: &Series, scales: &Scales, global_max: f64) -> Vec<ScaledPoint> {
    let color = color_for(series, global_max);
    series
        .present()
        .map(|(y, v)| scale_point(series, y, v, scales, color))
        .collect()
}

fn scale_point(
    series: &Series,
    year: i32,
    value: f64,
    scales: &Scales,
    color: skia::Color,
) -> ScaledPoint {
    ScaledPoint {
        x: scales.x.apply(year as f64),
        y: scales.y.apply(value),
        year,
        value,
        category: series.category.clone(),
        color,
    }
}
