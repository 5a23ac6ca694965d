// File: crates/chart-core/src/axis.rs
// Summary: Value gridline ticks and date label ticks.

use std::collections::HashSet;

use crate::format::compact_value;
use crate::scale::{IndexScale, ScaleTransform, ValueScale};
use crate::series::Series;
use crate::types::VALUE_TICKS;

/// `steps` evenly spaced values from `start` to `end`, both inclusive.
pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let last = steps as f64 - 1.0;
    (0..steps)
        .map(|i| {
            let t = i as f64 / last;
            (1.0 - t) * start + t * end
        })
        .collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct ValueTick {
    pub value: f64,
    pub y: f64,
    pub label: String,
}

/// Five ticks spanning the full padded scale, top and bottom included.
pub fn value_ticks(scale: &ValueScale) -> Vec<ValueTick> {
    linspace(scale.vmin, scale.vmax, VALUE_TICKS)
        .into_iter()
        .map(|value| ValueTick { value, y: scale.to_px(value), label: compact_value(value) })
        .collect()
}

/// How date labels are written, chosen from the series length.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DateLabelFormat {
    /// `Jan` (more than 90 samples)
    Month,
    /// `17` (8..=90 samples)
    DayOfMonth,
    /// `Mon` (a week or less)
    Weekday,
}

impl DateLabelFormat {
    pub fn for_len(n: usize) -> Self {
        if n > 90 {
            Self::Month
        } else if n > 7 {
            Self::DayOfMonth
        } else {
            Self::Weekday
        }
    }

    pub fn pattern(self) -> &'static str {
        match self {
            Self::Month => "%b",
            Self::DayOfMonth => "%-d",
            Self::Weekday => "%a",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct DateTick {
    pub index: usize,
    pub x: f64,
    pub label: String,
}

/// Upper bound on date labels for a series of `n` samples.
pub fn max_date_ticks(n: usize) -> usize {
    if n > 30 { 6 } else { 5 }
}

/// Sample indices that get a date label: every `ceil(n / max)` starting at 0.
/// The last sample is included when the final regular tick leaves more than
/// half a stride uncovered; at the cap it takes the last regular slot.
pub fn date_tick_indices(n: usize) -> Vec<usize> {
    if n == 0 { return Vec::new(); }
    let max = max_date_ticks(n);
    let stride = n.div_ceil(max).max(1);
    let mut out: Vec<usize> = (0..n).step_by(stride).collect();
    let last_regular = out.last().copied().unwrap_or(0);
    let gap = (n - 1 - last_regular) as f64;
    if gap > stride as f64 / 2.0 {
        if out.len() < max {
            out.push(n - 1);
        } else if let Some(last) = out.last_mut() {
            *last = n - 1;
        }
    }
    out
}

/// Labelled date ticks. A tick is dropped when its sample shares a calendar
/// day with an earlier tick or its label repeats the previous kept label.
pub fn date_ticks(series: &Series, x: &IndexScale) -> Vec<DateTick> {
    let fmt = DateLabelFormat::for_len(series.len()).pattern();
    let mut seen = HashSet::new();
    let mut ticks: Vec<DateTick> = Vec::new();
    for index in date_tick_indices(series.len()) {
        let Some(sample) = series.get(index) else { continue };
        if !seen.insert(sample.date()) {
            continue;
        }
        let label = sample.timestamp.format(fmt).to_string();
        if ticks.last().is_some_and(|prev| prev.label == label) {
            continue;
        }
        ticks.push(DateTick { index, x: x.index_to_px(index), label });
    }
    ticks
}
