// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (sizes, paddings, interaction and animation tuning).

use std::time::Duration;

/// Default surface width in pixels (phone-width card minus margins).
pub const WIDTH: f64 = 320.0;
/// Default surface height in pixels.
pub const HEIGHT: f64 = 200.0;

/// Control-point offset as a fraction of the neighbour distance.
pub const SMOOTHING: f64 = 0.2;
/// Fraction of the data range added above and below the series.
pub const VALUE_PADDING: f64 = 0.2;
/// Margin used when a flat series sits exactly at zero.
pub const ZERO_FLAT_MARGIN: f64 = 1.0;
/// Number of horizontal gridlines / value labels.
pub const VALUE_TICKS: usize = 5;
/// Extra pixels accepted around a point when hit-testing.
pub const HIT_TOLERANCE: f64 = 5.0;
/// Duration of the progressive reveal.
pub const REVEAL_DURATION: Duration = Duration::from_millis(800);
/// Text shown instead of the chart when fewer than two samples exist.
pub const PLACEHOLDER_TEXT: &str = "Not enough data";

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Insets {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl Insets {
    /// Create new insets; negative inputs are clamped to zero.
    pub fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self { left: left.max(0.0), right: right.max(0.0), top: top.max(0.0), bottom: bottom.max(0.0) }
    }
    /// Total horizontal inset (left + right).
    pub fn hsum(&self) -> f64 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub fn vsum(&self) -> f64 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(48.0, 16.0, 16.0, 28.0)
    }
}
