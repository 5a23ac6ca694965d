// File: crates/chart-core/src/series.rs
// Summary: Time-series samples (timestamp, value) fed to the chart.
// Notes:
// - Samples are expected in ascending timestamp order; the series never sorts them.

use chrono::{Days, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{ChartError, Result};

/// One observation of the series, e.g. a daily net-worth snapshot.
///
/// Deserializes from `timestamp` (or `date`) and `value` fields; the
/// timestamp may be a full `2024-03-01T09:30:00` or a bare `2024-03-01`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    #[serde(alias = "date", deserialize_with = "timestamp_or_date")]
    pub timestamp: NaiveDateTime,
    pub value: f64,
}

fn timestamp_or_date<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<NaiveDateTime, D::Error> {
    let raw = String::deserialize(d)?;
    let raw = raw.trim();
    raw.parse::<NaiveDateTime>()
        .or_else(|_| raw.parse::<NaiveDate>().map(|date| date.and_time(NaiveTime::MIN)))
        .map_err(|e| serde::de::Error::custom(format!("invalid timestamp '{raw}': {e}")))
}

impl Sample {
    pub fn new(timestamp: NaiveDateTime, value: f64) -> Self {
        Self { timestamp, value }
    }

    /// Sample stamped at midnight of `date`.
    pub fn on_date(date: NaiveDate, value: f64) -> Self {
        Self { timestamp: date.and_time(NaiveTime::MIN), value }
    }

    pub fn date(&self) -> NaiveDate { self.timestamp.date() }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Series {
    samples: Vec<Sample>,
}

impl Series {
    /// Build a series, rejecting NaN/infinite values which would poison the scales.
    pub fn new(samples: Vec<Sample>) -> Result<Self> {
        if let Some((index, s)) = samples.iter().enumerate().find(|(_, s)| !s.value.is_finite()) {
            return Err(ChartError::NonFiniteValue { index, value: s.value });
        }
        Ok(Self { samples })
    }

    /// One sample per calendar day starting at `start`.
    pub fn from_daily_values(start: NaiveDate, values: &[f64]) -> Result<Self> {
        let samples = values
            .iter()
            .enumerate()
            .map(|(i, &v)| {
                let date = start.checked_add_days(Days::new(i as u64)).unwrap_or(NaiveDate::MAX);
                Sample::on_date(date, v)
            })
            .collect();
        Self::new(samples)
    }

    pub fn empty() -> Self { Self::default() }

    pub fn samples(&self) -> &[Sample] { &self.samples }
    pub fn len(&self) -> usize { self.samples.len() }
    pub fn is_empty(&self) -> bool { self.samples.is_empty() }
    pub fn get(&self, index: usize) -> Option<&Sample> { self.samples.get(index) }

    /// Index of the newest sample, if any.
    pub fn last_index(&self) -> Option<usize> { self.samples.len().checked_sub(1) }

    /// A line needs at least two points.
    pub fn has_enough_data(&self) -> bool { self.samples.len() >= 2 }

    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|s| s.value)
    }

    /// (min, max) over all values, `None` for an empty series.
    pub fn value_range(&self) -> Option<(f64, f64)> {
        let mut it = self.values();
        let first = it.next()?;
        Some(it.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v))))
    }
}
