// File: crates/kinetic-core/src/interp.rs
// Summary: Frame interpolation between a previous and next snapshot over t in [0, 1].

use std::collections::BTreeMap;

use crate::snapshot::{ScaledPoint, Snapshot};

/// What to do with a category present in `next` but absent in `previous`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum MissingKeyPolicy {
    /// Render the new category at its final position for every t (no animated
    /// entrance). Default.
    #[default]
    SnapIn,
    /// Omit the new category until t reaches 1.
    SkipMissing,
    /// Render at the final position with alpha scaled by t.
    FadeIn,
}

/// Blends two keyed snapshots. Guarantees `at(0)` matches `previous` and
/// `at(1)` matches `next` element-wise on shared keys; categories absent from
/// `next` are dropped. When point counts differ, the shared prefix animates
/// and the excess of the longer side is withheld until t reaches 1.
#[derive(Clone, Debug)]
pub struct FrameInterpolator {
    previous: Snapshot,
    next: Snapshot,
    policy: MissingKeyPolicy,
}

impl FrameInterpolator {
    pub fn new(previous: Snapshot, next: Snapshot) -> Self {
        Self::with_policy(previous, next, MissingKeyPolicy::default())
    }

    pub fn with_policy(previous: Snapshot, next: Snapshot, policy: MissingKeyPolicy) -> Self {
        Self { previous, next, policy }
    }

    pub fn at(&self, t: f64) -> Snapshot {
        let t = t.clamp(0.0, 1.0);
        if t >= 1.0 {
            return self.next.clone();
        }

        let mut out = BTreeMap::new();
        for (key, next_points) in &self.next.data {
            match self.previous.data.get(key) {
                None => match self.policy {
                    MissingKeyPolicy::SnapIn => {
                        out.insert(key.clone(), next_points.clone());
                    }
                    MissingKeyPolicy::SkipMissing => {}
                    MissingKeyPolicy::FadeIn => {
                        let alpha = (t * 255.0).round() as u8;
                        let points = next_points
                            .iter()
                            .map(|p| ScaledPoint {
                                color: p.color.with_a(alpha),
                                ..p.clone()
                            })
                            .collect();
                        out.insert(key.clone(), points);
                    }
                },
                Some(prev_points) => {
                    let shared = prev_points.len().min(next_points.len());
                    let points: Vec<ScaledPoint> = next_points
                        .iter()
                        .take(shared)
                        .zip(prev_points)
                        .map(|(n, p)| ScaledPoint {
                            x: lerp(p.x, n.x, t),
                            y: lerp(p.y, n.y, t),
                            // Identity fields ride along from the target frame.
                            ..n.clone()
                        })
                        .collect();
                    out.insert(key.clone(), points);
                }
            }
        }
        Snapshot { kind: self.next.kind, data: out }
    }
}

#[inline]
fn lerp(a: f32, b: f32, t: f64) -> f32 {
    a + ((b - a) as f64 * t) as f32
}
