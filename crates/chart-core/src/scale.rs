// File: crates/chart-core/src/scale.rs
// Summary: Index (X) and value (Y) scale transforms derived from the series and plot rectangle.

use crate::geometry::{Point, RectF};
use crate::series::Series;
use crate::types::{VALUE_PADDING, ZERO_FLAT_MARGIN};

/// Forward/inverse mapping between data space and pixels on one axis.
pub trait ScaleTransform {
    fn to_px(&self, v: f64) -> f64;
    fn from_px(&self, px: f64) -> f64;
}

/// Horizontal scale: sample index 0 sits on the left plot edge, index n-1 on the right.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndexScale {
    pub left_px: f64,
    pub right_px: f64,
    pub count: usize,
}

impl IndexScale {
    pub fn new(left_px: f64, right_px: f64, count: usize) -> Self {
        Self { left_px, right_px, count }
    }

    /// Pixel distance between neighbouring samples; zero when fewer than two exist.
    pub fn spacing(&self) -> f64 {
        if self.count < 2 { return 0.0; }
        (self.right_px - self.left_px) / (self.count - 1) as f64
    }

    #[inline]
    pub fn index_to_px(&self, index: usize) -> f64 {
        self.to_px(index as f64)
    }
}

impl ScaleTransform for IndexScale {
    #[inline]
    fn to_px(&self, i: f64) -> f64 {
        if self.count < 2 { return self.left_px; }
        // two-sided lerp so both edges come out exact
        let t = i / (self.count - 1) as f64;
        (1.0 - t) * self.left_px + t * self.right_px
    }

    /// Fractional index under `px`; callers round and bounds-check.
    #[inline]
    fn from_px(&self, px: f64) -> f64 {
        let width = self.right_px - self.left_px;
        if self.count < 2 || width <= 0.0 { return 0.0; }
        (px - self.left_px) / width * (self.count - 1) as f64
    }
}

/// Vertical value scale mapping [vmin, vmax] to [bottom, top] pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ValueScale {
    pub top_px: f64,
    pub bottom_px: f64,
    pub vmin: f64,
    pub vmax: f64,
}

impl ValueScale {
    /// Linear scale over an explicit range; a collapsed range is widened to one unit.
    pub fn new_linear(top_px: f64, bottom_px: f64, vmin: f64, vmax: f64) -> Self {
        let mut s = Self { top_px, bottom_px, vmin, vmax };
        if s.vmax == s.vmin { s.vmax = s.vmin + 1.0; }
        s
    }

    /// Scale over the data range padded by 20% on each side.
    ///
    /// A flat series gets 20% of its magnitude as margin (or a fixed margin
    /// at zero) so the line sits in the middle of the plot. Bounds saturate at
    /// the largest finite `f64`.
    pub fn padded(top_px: f64, bottom_px: f64, data_min: f64, data_max: f64) -> Self {
        let margin = if data_max == data_min {
            if data_max == 0.0 { ZERO_FLAT_MARGIN } else { data_max.abs() * VALUE_PADDING }
        } else {
            // half-width stays finite even when max - min would overflow
            (data_max / 2.0 - data_min / 2.0) * (2.0 * VALUE_PADDING)
        };
        let vmin = (data_min - margin).max(f64::MIN);
        let vmax = (data_max + margin).min(f64::MAX);
        Self::new_linear(top_px, bottom_px, vmin, vmax)
    }

    /// Width of the value range; may be infinite for ranges wider than `f64::MAX`.
    pub fn span(&self) -> f64 { self.vmax - self.vmin }

    /// Position of `v` within [vmin, vmax] as 0..1, computed on halves so it stays finite.
    #[inline]
    fn fraction(&self, v: f64) -> f64 {
        (v / 2.0 - self.vmin / 2.0) / (self.vmax / 2.0 - self.vmin / 2.0)
    }
}

impl ScaleTransform for ValueScale {
    #[inline]
    fn to_px(&self, v: f64) -> f64 {
        self.bottom_px - self.fraction(v) * (self.bottom_px - self.top_px)
    }

    #[inline]
    fn from_px(&self, py: f64) -> f64 {
        let h = self.bottom_px - self.top_px;
        if h == 0.0 { return self.vmin; }
        let t = (self.bottom_px - py) / h;
        (1.0 - t) * self.vmin + t * self.vmax
    }
}

/// Both scales for one series/plot combination. Rebuilt whenever either changes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ChartScales {
    pub x: IndexScale,
    pub y: ValueScale,
}

impl ChartScales {
    /// `None` when the series is empty.
    pub fn for_series(series: &Series, plot: RectF) -> Option<Self> {
        let (lo, hi) = series.value_range()?;
        Some(Self {
            x: IndexScale::new(plot.left, plot.right, series.len()),
            y: ValueScale::padded(plot.top, plot.bottom, lo, hi),
        })
    }

    /// Pixel positions of every sample, in series order.
    pub fn project(&self, series: &Series) -> Vec<Point> {
        series
            .samples()
            .iter()
            .enumerate()
            .map(|(i, s)| Point::new(self.x.index_to_px(i), self.y.to_px(s.value)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn padded_range_uses_twenty_percent() {
        let s = ValueScale::padded(0.0, 100.0, 50.0, 150.0);
        assert_eq!((s.vmin, s.vmax), (30.0, 170.0));
    }

    #[test]
    fn flat_series_margins() {
        let s = ValueScale::padded(0.0, 100.0, 100.0, 100.0);
        assert_eq!((s.vmin, s.vmax), (80.0, 120.0));
        let z = ValueScale::padded(0.0, 100.0, 0.0, 0.0);
        assert_eq!((z.vmin, z.vmax), (-1.0, 1.0));
        let neg = ValueScale::padded(0.0, 100.0, -50.0, -50.0);
        assert_eq!((neg.vmin, neg.vmax), (-60.0, -40.0));
    }

    #[test]
    fn extreme_values_keep_finite_geometry() {
        let s = ValueScale::padded(0.0, 100.0, -1e308, 1e308);
        assert!(s.vmin.is_finite() && s.vmax.is_finite());
        assert!(s.vmin < -1e308 && s.vmax > 1e308);
        for v in [-1e308, 0.0, 1e308] {
            let px = s.to_px(v);
            assert!(px.is_finite() && (0.0..=100.0).contains(&px), "v={v} px={px}");
        }
        assert!((s.to_px(0.0) - 50.0).abs() < 1e-9);
        assert!(s.from_px(50.0).abs() < 1e300);

        let flat = ValueScale::padded(0.0, 100.0, f64::MAX, f64::MAX);
        assert_eq!(flat.vmax, f64::MAX);
        assert!(flat.to_px(f64::MAX).is_finite());
    }

    #[test]
    fn collapsed_range_forced_to_unit() {
        let s = ValueScale::new_linear(0.0, 10.0, 5.0, 5.0);
        assert_eq!(s.span(), 1.0);
        assert!(s.to_px(5.0).is_finite());
    }

    #[test]
    fn value_round_trip() {
        let s = ValueScale::new_linear(10.0, 110.0, 0.0, 50.0);
        assert_eq!(s.to_px(50.0), 10.0);
        assert_eq!(s.to_px(0.0), 110.0);
        assert!((s.from_px(60.0) - 25.0).abs() < 1e-9);
    }

    #[test]
    fn index_scale_edges_and_inverse() {
        let x = IndexScale::new(20.0, 220.0, 5);
        assert_eq!(x.index_to_px(0), 20.0);
        assert_eq!(x.index_to_px(4), 220.0);
        assert_eq!(x.spacing(), 50.0);
        assert_eq!(x.from_px(120.0), 2.0);
    }

    #[test]
    fn degenerate_index_scale() {
        let x = IndexScale::new(20.0, 220.0, 1);
        assert_eq!(x.spacing(), 0.0);
        assert_eq!(x.to_px(0.0), 20.0);
        assert_eq!(x.from_px(100.0), 0.0);
    }
}
