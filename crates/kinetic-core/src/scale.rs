// File: crates/kinetic-core/src/scale.rs
// Summary: Linear domain->pixel scales with "nice" domain rounding and tick generation.
// Notes:
// - Scales are plain value objects, rebuilt whenever the dataset in scope changes,
//   and passed by reference into the renderer and picker. No hidden caches.

use crate::series::{value_extent, year_extent, Series};
use crate::types::Margin;

/// Linear map from a fixed `[d0, d1]` domain to a fixed `[r0, r1]` pixel range.
/// The range may be inverted (r0 > r1), as it is for the Y axis.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    d0: f64,
    d1: f64,
    r0: f64,
    r1: f64,
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { d0: domain.0, d1: domain.1, r0: range.0, r1: range.1 }
    }

    pub fn domain(&self) -> (f64, f64) { (self.d0, self.d1) }
    pub fn range(&self) -> (f64, f64) { (self.r0, self.r1) }

    /// Extend the domain endpoints outward to tick-friendly round numbers.
    /// A degenerate domain is left untouched.
    pub fn nice(mut self, count: usize) -> Self {
        let inc = tick_increment(self.d0, self.d1, count.max(1));
        if inc > 0.0 {
            self.d0 = (self.d0 / inc).floor() * inc;
            self.d1 = (self.d1 / inc).ceil() * inc;
        } else if inc < 0.0 {
            // Fractional step, expressed as a negative reciprocal so endpoint
            // rounding stays exact (multiply instead of divide).
            self.d0 = (self.d0 * inc).ceil() / inc;
            self.d1 = (self.d1 * inc).floor() / inc;
        }
        self
    }

    /// Map a domain value to pixels. A degenerate domain maps everything to
    /// the range midpoint, so an all-equal dataset still renders flat instead
    /// of dividing by zero.
    #[inline]
    pub fn apply(&self, v: f64) -> f32 {
        let span = self.d1 - self.d0;
        if span.abs() < f64::EPSILON {
            return ((self.r0 + self.r1) * 0.5) as f32;
        }
        (self.r0 + (v - self.d0) / span * (self.r1 - self.r0)) as f32
    }

    /// Map pixels back to the domain (midpoint of a degenerate domain).
    #[inline]
    pub fn invert(&self, px: f32) -> f64 {
        let rspan = self.r1 - self.r0;
        if rspan.abs() < f64::EPSILON {
            return (self.d0 + self.d1) * 0.5;
        }
        self.d0 + (px as f64 - self.r0) / rspan * (self.d1 - self.d0)
    }

    /// Round tick values covering the domain, for axis/grid rendering.
    pub fn ticks(&self, count: usize) -> Vec<f64> {
        let inc = tick_increment(self.d0, self.d1, count.max(1));
        if inc == 0.0 {
            return vec![self.d0];
        }
        let mut out = Vec::new();
        if inc > 0.0 {
            let i0 = (self.d0 / inc).ceil() as i64;
            let i1 = (self.d1 / inc).floor() as i64;
            for i in i0..=i1 {
                out.push(i as f64 * inc);
            }
        } else {
            let r = -inc;
            let i0 = (self.d0 * r).ceil() as i64;
            let i1 = (self.d1 * r).floor() as i64;
            for i in i0..=i1 {
                out.push(i as f64 / r);
            }
        }
        out
    }
}

/// Tick increment over `[start, stop]` targeting `count` ticks: powers of ten
/// times 1, 2 or 5. Steps below one are returned as a negative reciprocal
/// (-1/step) so callers can round exactly. Zero means a degenerate span.
fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    let raw = (stop - start) / count as f64;
    if !(raw > 0.0) {
        return 0.0;
    }
    let power = raw.log10().floor();
    let err = raw / 10f64.powf(power);
    // Thresholds at sqrt(50), sqrt(10), sqrt(2).
    let factor = if err >= 7.071 {
        10.0
    } else if err >= 3.162 {
        5.0
    } else if err >= 1.414 {
        2.0
    } else {
        1.0
    };
    if power >= 0.0 {
        factor * 10f64.powf(power)
    } else {
        -(10f64.powf(-power)) / factor
    }
}

/// The x (year -> pixel) and y (value -> pixel, inverted) scale pair for one
/// dataset in scope. Rebuild whenever the scope (e.g. category isolation)
/// changes.
#[derive(Clone, Copy, Debug)]
pub struct Scales {
    pub x: LinearScale,
    pub y: LinearScale,
}

impl Scales {
    pub fn fit(data: &[Series], width: i32, height: i32, margin: Margin) -> Self {
        let (x0, x1) = year_extent(data)
            .map(|(a, b)| (a as f64, b as f64))
            .unwrap_or((0.0, 0.0));
        let (y0, y1) = value_extent(data).unwrap_or((0.0, 0.0));

        let x = LinearScale::new(
            (x0, x1),
            (margin.left as f64, (width - margin.right as i32) as f64),
        )
        .nice(10);
        // Larger values draw higher: the pixel range is inverted.
        let y = LinearScale::new(
            (y0, y1),
            ((height - margin.bottom as i32) as f64, margin.top as f64),
        )
        .nice(10);
        Self { x, y }
    }
}
