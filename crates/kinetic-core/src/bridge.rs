// File: crates/kinetic-core/src/bridge.rs
// Summary: Cross-context bridge: move canvas ownership to a dedicated render
// thread and relay snapshots/pointer events to it over an mpsc channel.
// Notes:
// - `ChartCanvas::transfer_control` consumes the host-side surface, so code
//   that transferred a canvas cannot draw to it anymore (enforced by move
//   semantics, not convention).
// - Messages are fire-and-forget and delivered in send order; sends after the
//   worker terminated are silent no-ops.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

use skia_safe as skia;

use crate::error::ChartError;
use crate::interp::FrameInterpolator;
use crate::picker::SpatialIndex;
use crate::render::{CanvasRenderer, RenderOptions};
use crate::scale::Scales;
use crate::series::{max_value, Series};
use crate::snapshot::{flatten, ScaledPoint, Snapshot, SnapshotKind};
use crate::timer::AnimationTimer;
use crate::types::FRAME_INTERVAL_MS;

/// Host-owned drawing surface. Exists so that handing rendering to a worker
/// is a one-shot ownership transfer rather than a shared reference.
pub struct ChartCanvas {
    width: i32,
    height: i32,
    surface: skia::Surface,
}

impl ChartCanvas {
    pub fn new(width: i32, height: i32) -> Result<Self, ChartError> {
        let surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or(ChartError::Surface { width, height })?;
        Ok(Self { width, height, surface })
    }

    pub fn width(&self) -> i32 { self.width }
    pub fn height(&self) -> i32 { self.height }

    pub fn canvas(&mut self) -> &skia::Canvas {
        self.surface.canvas()
    }

    /// Give up drawing rights. The returned token is all that crosses the
    /// thread boundary; the worker creates its own raster surface from it.
    pub fn transfer_control(self) -> OffscreenCanvas {
        OffscreenCanvas { width: self.width, height: self.height }
    }
}

/// Capability token produced by `ChartCanvas::transfer_control`.
#[derive(Clone, Copy, Debug)]
pub struct OffscreenCanvas {
    pub width: i32,
    pub height: i32,
}

/// Everything the host can relay to the render thread.
pub enum WorkerMessage {
    Attach(OffscreenCanvas),
    Lines { previous: Snapshot, next: Snapshot },
    Points { previous: Snapshot, next: Snapshot },
    Pointer { x: f32, y: f32 },
}

/// Handle to the render thread. Dropping it (or calling `terminate`) closes
/// the channel, joins the thread, and abandons any in-flight animation.
pub struct RenderWorker {
    tx: Option<Sender<WorkerMessage>>,
    join: Option<JoinHandle<()>>,
    frames: Arc<AtomicUsize>,
}

impl RenderWorker {
    /// Start the worker with its own copy of the dataset so it can resolve
    /// pointer positions into cross-section transitions on its side.
    pub fn spawn(data: Vec<Series>, opts: RenderOptions, duration_ms: u64) -> Self {
        let (tx, rx) = mpsc::channel();
        let frames = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&frames);
        let join = std::thread::spawn(move || worker_loop(rx, data, opts, duration_ms, counter));
        Self { tx: Some(tx), join: Some(join), frames }
    }

    /// Fire-and-forget. Ordering is FIFO per sender; there is no delivery
    /// latency bound and no processed acknowledgement. After `terminate`
    /// this is a no-op.
    pub fn send(&self, msg: WorkerMessage) {
        if let Some(tx) = &self.tx {
            let _ = tx.send(msg);
        }
    }

    /// Diagnostic only: frames the worker has painted so far.
    pub fn frames_drawn(&self) -> usize {
        self.frames.load(Ordering::Relaxed)
    }

    pub fn terminate(&mut self) {
        self.tx.take();
        if let Some(join) = self.join.take() {
            let _ = join.join();
        }
    }
}

impl Drop for RenderWorker {
    fn drop(&mut self) {
        self.terminate();
    }
}

enum DrawMode {
    Lines,
    Points,
}

struct Transition {
    timer: AnimationTimer,
    interp: FrameInterpolator,
    mode: DrawMode,
}

fn worker_loop(
    rx: Receiver<WorkerMessage>,
    data: Vec<Series>,
    opts: RenderOptions,
    duration_ms: u64,
    frames: Arc<AtomicUsize>,
) {
    let renderer = CanvasRenderer::new(opts);
    let global_max = max_value(&data).unwrap_or(0.0);
    let scales = Scales::fit(
        &data,
        renderer.opts.width,
        renderer.opts.height,
        renderer.opts.margin,
    );
    let flattened: Vec<ScaledPoint> = flatten(&data, &scales, global_max);
    let picker = SpatialIndex::build(&flattened);

    // The surface lives entirely on this thread.
    let mut surface: Option<skia::Surface> = None;
    let mut active: Option<Transition> = None;
    let mut last_points = Snapshot::empty(SnapshotKind::CrossSection);

    loop {
        let msg = if active.is_some() {
            match rx.recv_timeout(Duration::from_millis(FRAME_INTERVAL_MS)) {
                Ok(m) => Some(m),
                Err(RecvTimeoutError::Timeout) => None,
                Err(RecvTimeoutError::Disconnected) => break,
            }
        } else {
            match rx.recv() {
                Ok(m) => Some(m),
                Err(_) => break,
            }
        };

        if let Some(msg) = msg {
            match msg {
                WorkerMessage::Attach(token) => {
                    match skia::surfaces::raster_n32_premul((token.width, token.height)) {
                        Some(s) => surface = Some(s),
                        None => {
                            eprintln!(
                                "render worker: surface creation failed ({}x{})",
                                token.width, token.height
                            );
                        }
                    }
                }
                WorkerMessage::Lines { previous, next } => {
                    if surface.is_some() {
                        active = Some(Transition {
                            timer: AnimationTimer::start(duration_ms),
                            interp: FrameInterpolator::new(previous, next),
                            mode: DrawMode::Lines,
                        });
                    }
                }
                WorkerMessage::Points { previous, next } => {
                    if surface.is_some() {
                        last_points = next.clone();
                        active = Some(Transition {
                            timer: AnimationTimer::start(duration_ms),
                            interp: FrameInterpolator::new(previous, next),
                            mode: DrawMode::Points,
                        });
                    }
                }
                WorkerMessage::Pointer { x, y } => {
                    if surface.is_some() {
                        if let Some(i) = picker.nearest(x, y) {
                            let year = flattened[i].year;
                            let next = Snapshot::cross_section(&data, year, &scales, global_max);
                            let previous = std::mem::replace(&mut last_points, next.clone());
                            active = Some(Transition {
                                timer: AnimationTimer::start(duration_ms),
                                interp: FrameInterpolator::new(previous, next),
                                mode: DrawMode::Points,
                            });
                        }
                    }
                }
            }
        }

        let mut finished = false;
        if let (Some(surface), Some(tr)) = (surface.as_mut(), active.as_mut()) {
            match tr.timer.tick() {
                Some(frame) => {
                    let snapshot = tr.interp.at(frame.progress);
                    let canvas = surface.canvas();
                    renderer.clear(canvas);
                    match tr.mode {
                        DrawMode::Lines => renderer.draw_lines(canvas, &snapshot),
                        DrawMode::Points => renderer.draw_points(canvas, &snapshot),
                    }
                    frames.fetch_add(1, Ordering::Relaxed);
                    finished = !tr.timer.is_running();
                }
                None => finished = true,
            }
        }
        if finished {
            active = None;
        }
    }
}
