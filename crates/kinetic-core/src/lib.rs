// File: crates/kinetic-core/src/lib.rs
// Summary: Core library entry point; exports the animated chart pipeline API.

pub mod bridge;
pub mod chart;
pub mod color;
pub mod error;
pub mod interp;
pub mod picker;
pub mod render;
pub mod scale;
pub mod series;
pub mod snapshot;
pub mod svg;
pub mod theme;
pub mod timer;
pub mod types;

pub use bridge::{ChartCanvas, OffscreenCanvas, RenderWorker, WorkerMessage};
pub use chart::{AnimatedChart, ChartOptions};
pub use error::ChartError;
pub use interp::{FrameInterpolator, MissingKeyPolicy};
pub use picker::SpatialIndex;
pub use render::{CanvasRenderer, RenderOptions};
pub use scale::{LinearScale, Scales};
pub use series::{Sample, Series};
pub use snapshot::{ScaledPoint, Snapshot, SnapshotKind};
pub use theme::Theme;
pub use timer::{AnimationTimer, Frame, TimerState};
pub use types::Margin;
