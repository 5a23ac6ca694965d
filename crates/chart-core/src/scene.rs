// File: crates/chart-core/src/scene.rs
// Summary: Backend-neutral draw list produced by the chart, ordered back to front.

use crate::geometry::{Point, RectF};
use crate::spline::PathData;
use crate::theme::Rgba;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TextAnchor {
    Start,
    Middle,
    End,
}

/// Vertical gradient used under the curve.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearGradient {
    pub from: Point,
    pub to: Point,
    pub start: Rgba,
    pub end: Rgba,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Layer {
    GridLine { from: Point, to: Point, color: Rgba },
    ValueLabel { at: Point, text: String, color: Rgba, anchor: TextAnchor },
    DateLabel { at: Point, text: String, color: Rgba, anchor: TextAnchor },
    AreaFill { path: PathData, gradient: LinearGradient, clip: RectF },
    Stroke { path: PathData, color: Rgba, width: f64, clip: RectF },
    GuideLine { from: Point, to: Point, color: Rgba, width: f64 },
    Marker { center: Point, outer_radius: f64, inner_radius: f64, outer: Rgba, inner: Rgba },
    HoverMarker { center: Point, radius: f64, color: Rgba },
}

impl Layer {
    /// Short tag, handy for asserting layer order.
    pub fn kind(&self) -> &'static str {
        match self {
            Layer::GridLine { .. } => "grid",
            Layer::ValueLabel { .. } => "value-label",
            Layer::DateLabel { .. } => "date-label",
            Layer::AreaFill { .. } => "area",
            Layer::Stroke { .. } => "stroke",
            Layer::GuideLine { .. } => "guide",
            Layer::Marker { .. } => "marker",
            Layer::HoverMarker { .. } => "hover",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub width: f64,
    pub height: f64,
    pub background: Rgba,
    pub layers: Vec<Layer>,
}

impl Scene {
    pub fn count(&self, kind: &str) -> usize {
        self.layers.iter().filter(|l| l.kind() == kind).count()
    }
}

/// Text drawn in place of the chart when there is too little data.
#[derive(Clone, Debug, PartialEq)]
pub struct Placeholder {
    pub width: f64,
    pub height: f64,
    pub background: Rgba,
    pub message: String,
    pub color: Rgba,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Frame {
    Placeholder(Placeholder),
    Chart(Scene),
}

impl Frame {
    pub fn is_placeholder(&self) -> bool { matches!(self, Frame::Placeholder(_)) }

    pub fn scene(&self) -> Option<&Scene> {
        match self {
            Frame::Chart(s) => Some(s),
            Frame::Placeholder(_) => None,
        }
    }

    pub fn size(&self) -> (f64, f64) {
        match self {
            Frame::Chart(s) => (s.width, s.height),
            Frame::Placeholder(p) => (p.width, p.height),
        }
    }

    pub fn background(&self) -> Rgba {
        match self {
            Frame::Chart(s) => s.background,
            Frame::Placeholder(p) => p.background,
        }
    }
}
