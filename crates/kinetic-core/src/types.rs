// File: crates/kinetic-core/src/types.rs
// Summary: Shared types and constants (surface size, margins, stroke metrics, timing).

/// Default surface width in pixels.
pub const WIDTH: i32 = 800;
/// Default surface height in pixels.
pub const HEIGHT: i32 = 600;

/// Stroke width for series polylines.
pub const LINE_WIDTH: f32 = 2.0;
/// Fill radius for cross-section markers.
pub const POINT_RADIUS: f32 = 3.0;

/// Default transition duration in milliseconds.
pub const DURATION_MS: u64 = 100;
/// Tick spacing for sleep-driven animation loops (~60 fps).
pub const FRAME_INTERVAL_MS: u64 = 16;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Margin {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Margin {
    /// Create new margins (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal margin (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical margin (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Margin {
    fn default() -> Self {
        Self::new(70, 20, 20, 70)
    }
}
