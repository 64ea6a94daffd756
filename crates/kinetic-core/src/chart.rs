// File: crates/kinetic-core/src/chart.rs
// Summary: Interactive chart host: owns the dataset and isolation filter, derives
// scales/picker/snapshots, and hands (previous, next) pairs to the interpolator.

use crate::picker::SpatialIndex;
use crate::scale::Scales;
use crate::series::{max_value, Series};
use crate::snapshot::{flatten, ScaledPoint, Snapshot, SnapshotKind};
use crate::types::{Margin, HEIGHT, WIDTH};

#[derive(Clone, Copy, Debug)]
pub struct ChartOptions {
    pub width: i32,
    pub height: i32,
    pub margin: Margin,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self { width: WIDTH, height: HEIGHT, margin: Margin::default() }
    }
}

/// Host-side state machine behind pointer interaction. Scales, flattened
/// points and the picker are derived together and rebuilt as one whenever the
/// scope changes; the displayed snapshots persist so each new target frame
/// can animate away from what is currently on screen.
pub struct AnimatedChart {
    data: Vec<Series>,
    opts: ChartOptions,
    isolated: Option<String>,
    // Colormap domain end stays fixed to the full dataset so a category keeps
    // its color while isolated.
    global_max: f64,
    scales: Scales,
    flattened: Vec<ScaledPoint>,
    picker: SpatialIndex,
    displayed_lines: Snapshot,
    displayed_points: Snapshot,
}

impl AnimatedChart {
    pub fn new(data: Vec<Series>, opts: ChartOptions) -> Self {
        let global_max = max_value(&data).unwrap_or(0.0);
        let mut chart = Self {
            data,
            opts,
            isolated: None,
            global_max,
            scales: Scales::fit(&[], opts.width, opts.height, opts.margin),
            flattened: Vec::new(),
            picker: SpatialIndex::default(),
            displayed_lines: Snapshot::empty(SnapshotKind::Series),
            displayed_points: Snapshot::empty(SnapshotKind::CrossSection),
        };
        chart.rebuild();
        chart
    }

    fn scoped(&self) -> Vec<Series> {
        match &self.isolated {
            None => self.data.clone(),
            Some(cat) => self
                .data
                .iter()
                .filter(|s| &s.category == cat)
                .cloned()
                .collect(),
        }
    }

    fn rebuild(&mut self) {
        let scoped = self.scoped();
        self.scales = Scales::fit(&scoped, self.opts.width, self.opts.height, self.opts.margin);
        self.flattened = flatten(&scoped, &self.scales, self.global_max);
        self.picker = SpatialIndex::build(&self.flattened);
    }

    pub fn scales(&self) -> &Scales { &self.scales }
    pub fn options(&self) -> ChartOptions { self.opts }
    pub fn isolated(&self) -> Option<&str> { self.isolated.as_deref() }

    /// Restrict the chart to one category (or back to all). Derived state is
    /// rebuilt; pickers held from before this call are stale by contract.
    pub fn set_isolated(&mut self, category: Option<String>) {
        if self.isolated != category {
            self.isolated = category;
            self.rebuild();
        }
    }

    /// The data point nearest to a pixel position, or `None` while the scope
    /// holds no points at all.
    pub fn pick(&self, x: f32, y: f32) -> Option<&ScaledPoint> {
        self.picker.nearest(x, y).map(|i| &self.flattened[i])
    }

    /// Click behavior from the source pages: a click while isolated always
    /// returns to the full dataset, otherwise it isolates the category under
    /// the pointer.
    pub fn toggle_isolated(&mut self, x: f32, y: f32) {
        if self.isolated.is_some() {
            self.set_isolated(None);
        } else {
            let picked = self.pick(x, y).map(|p| p.category.clone());
            if picked.is_some() {
                self.set_isolated(picked);
            }
        }
    }

    pub fn line_snapshot(&self) -> Snapshot {
        Snapshot::series(&self.scoped(), &self.scales, self.global_max)
    }

    pub fn cross_section(&self, year: i32) -> Snapshot {
        Snapshot::cross_section(&self.scoped(), year, &self.scales, self.global_max)
    }

    /// Next line transition: returns (previous, next) for the interpolator and
    /// records `next` as the displayed snapshot.
    pub fn transition_lines(&mut self) -> (Snapshot, Snapshot) {
        let next = self.line_snapshot();
        let previous = std::mem::replace(&mut self.displayed_lines, next.clone());
        (previous, next)
    }

    /// Next cross-section transition for `year`; same previous/next handling
    /// as `transition_lines`.
    pub fn transition_points(&mut self, year: i32) -> (Snapshot, Snapshot) {
        let next = self.cross_section(year);
        let previous = std::mem::replace(&mut self.displayed_points, next.clone());
        (previous, next)
    }

    /// Pointer left the chart: animate the markers out to an empty frame.
    pub fn clear_points(&mut self) -> (Snapshot, Snapshot) {
        let next = Snapshot::empty(SnapshotKind::CrossSection);
        let previous = std::mem::replace(&mut self.displayed_points, next.clone());
        (previous, next)
    }
}
