// File: crates/chart-core/src/interaction.rs
// Summary: Pointer hit-testing and the active/hover focus state machine.

use crate::format::Readout;
use crate::scale::{IndexScale, ScaleTransform};
use crate::series::Sample;

/// Pointer input in surface-local pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerEvent {
    Start { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    End,
}

impl PointerEvent {
    pub fn x(&self) -> Option<f64> {
        match *self {
            PointerEvent::Start { x, .. } | PointerEvent::Move { x, .. } => Some(x),
            PointerEvent::End => None,
        }
    }
}

/// Nearest sample index under `x`, or `None` when the pointer is further than
/// half the point spacing plus `tolerance` from that sample.
pub fn hit_test(x: f64, scale: &IndexScale, tolerance: f64) -> Option<usize> {
    if scale.count == 0 || !x.is_finite() { return None; }
    let last = (scale.count - 1) as f64;
    let index = scale.from_px(x).round().clamp(0.0, last) as usize;
    let reach = scale.spacing() / 2.0 + tolerance;
    ((x - scale.index_to_px(index)).abs() <= reach).then_some(index)
}

/// Which sample is selected (persisted) and which is under a dragging finger (transient).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct FocusState {
    pub active: usize,
    pub hover: Option<usize>,
}

impl FocusState {
    /// Selection on the newest sample, no hover.
    pub fn reset(&mut self, len: usize) {
        self.active = len.saturating_sub(1);
        self.hover = None;
    }

    /// Pull the active index back into a sequence of `len` samples.
    /// Returns true when it had to move.
    pub fn clamp(&mut self, len: usize) -> bool {
        let last = len.saturating_sub(1);
        if self.hover.is_some_and(|h| h > last) {
            self.hover = None;
        }
        if self.active > last {
            self.active = last;
            return true;
        }
        false
    }

    /// Apply one pointer event given its hit-test result.
    /// Returns the newly selected index when a press landed on a sample.
    pub fn apply(&mut self, event: PointerEvent, hit: Option<usize>) -> Option<usize> {
        match (event, hit) {
            (PointerEvent::Start { .. }, Some(i)) => {
                self.active = i;
                self.hover = Some(i);
                Some(i)
            }
            (PointerEvent::Move { .. }, Some(i)) => {
                self.hover = Some(i);
                None
            }
            _ => {
                self.hover = None;
                None
            }
        }
    }

    /// Hover index worth drawing: only when it differs from the selection.
    pub fn visible_hover(&self) -> Option<usize> {
        self.hover.filter(|&h| h != self.active)
    }
}

/// Payload delivered to the focus-change callback.
#[derive(Clone, Debug, PartialEq)]
pub struct FocusEvent {
    pub index: usize,
    pub sample: Sample,
    pub readout: Readout,
}

impl FocusEvent {
    pub fn new(index: usize, sample: Sample) -> Self {
        Self { index, sample, readout: Readout::new(sample.timestamp, sample.value) }
    }
}
