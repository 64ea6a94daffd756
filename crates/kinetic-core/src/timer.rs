// File: crates/kinetic-core/src/timer.rs
// Summary: Scheduler-agnostic animation state machine (Idle -> Running -> Stopped)
// plus a blocking sleep-driven loop for hosts without their own tick source.

use std::ops::ControlFlow;
use std::time::{Duration, Instant};

use crate::types::FRAME_INTERVAL_MS;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimerState {
    Idle,
    Running,
    Stopped,
}

/// One animation tick: wall-clock elapsed time and the derived progress
/// fraction, already clamped to [0, 1].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Frame {
    pub elapsed_ms: u64,
    pub progress: f64,
}

/// Transient per-transition timer. Once Stopped it never resumes; a new
/// transition gets a fresh instance. The tick whose elapsed time reaches the
/// duration is emitted exactly once, with progress 1.0, so the final frame is
/// always rendered; `stop()` pre-empts without that terminal tick.
#[derive(Clone, Debug)]
pub struct AnimationTimer {
    duration_ms: u64,
    state: TimerState,
    started: Option<Instant>,
}

impl AnimationTimer {
    pub fn new(duration_ms: u64) -> Self {
        Self { duration_ms, state: TimerState::Idle, started: None }
    }

    /// Construct and start in one step.
    pub fn start(duration_ms: u64) -> Self {
        let mut t = Self::new(duration_ms);
        t.begin();
        t
    }

    pub fn state(&self) -> TimerState { self.state }
    pub fn is_running(&self) -> bool { self.state == TimerState::Running }

    pub fn begin(&mut self) {
        self.begin_at(Instant::now());
    }

    pub fn begin_at(&mut self, now: Instant) {
        if self.state == TimerState::Idle {
            self.started = Some(now);
            self.state = TimerState::Running;
        }
    }

    pub fn tick(&mut self) -> Option<Frame> {
        self.tick_at(Instant::now())
    }

    /// Advance using an explicit clock reading. Returns `None` when Idle or
    /// Stopped (including every call after the terminal frame).
    pub fn tick_at(&mut self, now: Instant) -> Option<Frame> {
        if self.state != TimerState::Running {
            return None;
        }
        let started = self.started?;
        let elapsed_ms = now.saturating_duration_since(started).as_millis() as u64;
        if self.duration_ms == 0 || elapsed_ms >= self.duration_ms {
            self.state = TimerState::Stopped;
            return Some(Frame { elapsed_ms, progress: 1.0 });
        }
        Some(Frame {
            elapsed_ms,
            progress: elapsed_ms as f64 / self.duration_ms as f64,
        })
    }

    /// Pre-empt the animation. No further ticks, terminal or otherwise.
    pub fn stop(&mut self) {
        self.state = TimerState::Stopped;
    }
}

/// Drive a fresh timer on the current thread, sleeping `interval` between
/// ticks. The callback sees every frame including the terminal one and can
/// pre-empt by returning `ControlFlow::Break`.
pub fn run_blocking<F>(duration_ms: u64, interval: Duration, mut on_frame: F)
where
    F: FnMut(Frame) -> ControlFlow<()>,
{
    let mut timer = AnimationTimer::start(duration_ms);
    while let Some(frame) = timer.tick() {
        let finished = !timer.is_running();
        if on_frame(frame).is_break() {
            timer.stop();
            break;
        }
        if finished {
            break;
        }
        std::thread::sleep(interval);
    }
}

/// `run_blocking` with the default ~60 fps interval.
pub fn run_default<F>(duration_ms: u64, on_frame: F)
where
    F: FnMut(Frame) -> ControlFlow<()>,
{
    run_blocking(duration_ms, Duration::from_millis(FRAME_INTERVAL_MS), on_frame)
}
