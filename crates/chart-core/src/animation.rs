// File: crates/chart-core/src/animation.rs
// Summary: Cancelable reveal ticker driven by a host display-refresh scheduler.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use tracing::{debug, trace};

use crate::types::REVEAL_DURATION;

/// Opaque id of a requested frame callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub u64);

/// Host display-refresh hook. The host calls back into the chart's
/// `on_frame` once per requested frame that was not cancelled.
pub trait FrameScheduler {
    fn request_frame(&mut self) -> FrameHandle;
    fn cancel_frame(&mut self, handle: FrameHandle);
}

/// Scheduler that only records requests; the owner pumps frames itself.
/// Used by headless rendering and tests.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    next_id: u64,
    pending: Vec<FrameHandle>,
    cancelled: usize,
}

impl ManualScheduler {
    pub fn new() -> Self { Self::default() }

    /// Frames requested and not yet delivered or cancelled.
    pub fn pending(&self) -> &[FrameHandle] { &self.pending }

    /// Total number of cancellations seen.
    pub fn cancelled(&self) -> usize { self.cancelled }

    /// Take every pending frame, as if the display refreshed once.
    pub fn drain(&mut self) -> Vec<FrameHandle> { std::mem::take(&mut self.pending) }
}

impl FrameScheduler for ManualScheduler {
    fn request_frame(&mut self) -> FrameHandle {
        self.next_id += 1;
        let h = FrameHandle(self.next_id);
        self.pending.push(h);
        h
    }

    fn cancel_frame(&mut self, handle: FrameHandle) {
        let before = self.pending.len();
        self.pending.retain(|h| *h != handle);
        if self.pending.len() != before {
            self.cancelled += 1;
        }
    }
}

// Lets a caller keep a handle on a scheduler the ticker owns.
impl<S: FrameScheduler> FrameScheduler for Rc<RefCell<S>> {
    fn request_frame(&mut self) -> FrameHandle { self.borrow_mut().request_frame() }
    fn cancel_frame(&mut self, handle: FrameHandle) { self.borrow_mut().cancel_frame(handle) }
}

/// Advances a progress scalar from 0 to 1 over `duration`, one scheduler frame at a time.
///
/// At most one frame is pending at any moment; restarting or dropping the
/// ticker cancels it first.
pub struct RevealTicker {
    scheduler: Box<dyn FrameScheduler>,
    duration: Duration,
    started_at: Option<Instant>,
    pending: Option<FrameHandle>,
    progress: f64,
    runs: u64,
}

impl RevealTicker {
    pub fn new(scheduler: Box<dyn FrameScheduler>) -> Self {
        Self::with_duration(scheduler, REVEAL_DURATION)
    }

    pub fn with_duration(scheduler: Box<dyn FrameScheduler>, duration: Duration) -> Self {
        Self { scheduler, duration, started_at: None, pending: None, progress: 1.0, runs: 0 }
    }

    /// Restart from zero, cancelling whatever frame the previous run had queued.
    pub fn start(&mut self, now: Instant) {
        self.cancel_pending();
        self.progress = 0.0;
        self.started_at = Some(now);
        self.runs += 1;
        self.pending = Some(self.scheduler.request_frame());
        debug!(run = self.runs, duration_ms = self.duration.as_millis() as u64, "reveal started");
    }

    /// Frame callback: sample elapsed time and queue the next frame while unfinished.
    pub fn on_frame(&mut self, now: Instant) -> f64 {
        let Some(start) = self.started_at else { return self.progress };
        self.pending = None;
        let p = if self.duration.is_zero() {
            1.0
        } else {
            (now.saturating_duration_since(start).as_secs_f64() / self.duration.as_secs_f64()).clamp(0.0, 1.0)
        };
        self.progress = self.progress.max(p);
        trace!(progress = self.progress, "reveal frame");
        if self.progress < 1.0 {
            self.pending = Some(self.scheduler.request_frame());
        } else {
            self.started_at = None;
        }
        self.progress
    }

    /// Stop the current run; progress stays where it was.
    pub fn cancel(&mut self) {
        if self.cancel_pending() {
            debug!(run = self.runs, progress = self.progress, "reveal cancelled");
        }
        self.started_at = None;
    }

    fn cancel_pending(&mut self) -> bool {
        match self.pending.take() {
            Some(h) => {
                self.scheduler.cancel_frame(h);
                true
            }
            None => false,
        }
    }

    pub fn progress(&self) -> f64 { self.progress }
    pub fn is_running(&self) -> bool { self.started_at.is_some() }
    pub fn is_complete(&self) -> bool { self.progress >= 1.0 }
    pub fn pending_frame(&self) -> Option<FrameHandle> { self.pending }
    /// Number of times `start` has been called.
    pub fn runs(&self) -> u64 { self.runs }
}

impl Drop for RevealTicker {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}

/// Points revealed at `progress`: `ceil(n * progress)`, at least one so the path has a start.
pub fn visible_count(n: usize, progress: f64) -> usize {
    if n == 0 { return 0; }
    ((n as f64 * progress.clamp(0.0, 1.0)).ceil() as usize).clamp(1, n)
}
