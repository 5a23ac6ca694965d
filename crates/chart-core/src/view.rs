// File: crates/chart-core/src/view.rs
// Viewport geometry: surface size plus insets, and the inner plotting rectangle derived from them.

use crate::error::{ChartError, Result};
use crate::geometry::RectF;
use crate::types::{Insets, HEIGHT, WIDTH};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
    pub insets: Insets,
}

impl Viewport {
    pub fn new(width: f64, height: f64, insets: Insets) -> Result<Self> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(width) || !valid(height) {
            return Err(ChartError::InvalidSurface { width, height });
        }
        Ok(Self { width, height, insets })
    }

    /// Area inside the insets. Collapses to zero size rather than inverting
    /// when the insets exceed the surface.
    pub fn plot_rect(&self) -> RectF {
        let w = (self.width - self.insets.hsum()).max(0.0);
        let h = (self.height - self.insets.vsum()).max(0.0);
        RectF::from_ltwh(self.insets.left, self.insets.top, w, h)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self { width: WIDTH, height: HEIGHT, insets: Insets::default() }
    }
}
