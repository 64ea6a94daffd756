// File: crates/kinetic-core/src/series.rs
// Summary: Raw dataset model: one time series of (year, value) samples per category.
// Notes:
// - Years within a series are assumed strictly increasing; this is not enforced.
// - Missing observations are `None` and are filtered out before scaling.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Sample {
    pub year: i32,
    pub value: Option<f64>,
}

impl Sample {
    pub const fn new(year: i32, value: f64) -> Self {
        Self { year, value: Some(value) }
    }

    pub const fn missing(year: i32) -> Self {
        Self { year, value: None }
    }
}

#[derive(Clone, Debug)]
pub struct Series {
    pub category: String,
    pub values: Vec<Sample>,
}

impl Series {
    pub fn new(category: impl Into<String>, values: Vec<Sample>) -> Self {
        Self { category: category.into(), values }
    }

    pub fn from_pairs(category: impl Into<String>, pairs: Vec<(i32, f64)>) -> Self {
        let values = pairs.into_iter().map(|(y, v)| Sample::new(y, v)).collect();
        Self::new(category, values)
    }

    /// Iterate samples that carry a value, dropping missing observations.
    pub fn present(&self) -> impl Iterator<Item = (i32, f64)> + '_ {
        self.values.iter().filter_map(|s| s.value.map(|v| (s.year, v)))
    }

    /// Arithmetic mean of present values; `None` when every sample is missing.
    pub fn mean_value(&self) -> Option<f64> {
        let mut sum = 0.0;
        let mut n = 0usize;
        for (_, v) in self.present() {
            sum += v;
            n += 1;
        }
        if n == 0 { None } else { Some(sum / n as f64) }
    }
}

/// Min/max observed value across all series; `None` when no value is present.
pub fn value_extent(data: &[Series]) -> Option<(f64, f64)> {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;
    let mut any = false;
    for s in data {
        for (_, v) in s.present() {
            lo = lo.min(v);
            hi = hi.max(v);
            any = true;
        }
    }
    if any { Some((lo, hi)) } else { None }
}

/// Min/max observed year across all series; `None` for an all-missing dataset.
pub fn year_extent(data: &[Series]) -> Option<(i32, i32)> {
    let mut lo = i32::MAX;
    let mut hi = i32::MIN;
    let mut any = false;
    for s in data {
        for (y, _) in s.present() {
            lo = lo.min(y);
            hi = hi.max(y);
            any = true;
        }
    }
    if any { Some((lo, hi)) } else { None }
}

/// Largest observed value across all series, used as the colormap domain end.
pub fn max_value(data: &[Series]) -> Option<f64> {
    value_extent(data).map(|(_, hi)| hi)
}
