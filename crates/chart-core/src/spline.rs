// File: crates/chart-core/src/spline.rs
// Summary: Cardinal-spline smoothing of plotted points into cubic Bézier path data.

use std::f64::consts::PI;
use std::fmt;

use crate::geometry::Point;
use crate::types::SMOOTHING;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    CurveTo { c1: Point, c2: Point, to: Point },
    Close,
}

/// Backend-neutral vector path; `Display` renders SVG path syntax.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PathData {
    commands: Vec<PathCommand>,
}

impl PathData {
    pub fn new() -> Self { Self::default() }
    pub fn commands(&self) -> &[PathCommand] { &self.commands }
    pub fn is_empty(&self) -> bool { self.commands.is_empty() }

    pub fn move_to(&mut self, p: Point) { self.commands.push(PathCommand::MoveTo(p)); }
    pub fn line_to(&mut self, p: Point) { self.commands.push(PathCommand::LineTo(p)); }
    pub fn curve_to(&mut self, c1: Point, c2: Point, to: Point) {
        self.commands.push(PathCommand::CurveTo { c1, c2, to });
    }
    pub fn close(&mut self) { self.commands.push(PathCommand::Close); }

    pub fn curve_count(&self) -> usize {
        self.commands.iter().filter(|c| matches!(c, PathCommand::CurveTo { .. })).count()
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cmd) in self.commands.iter().enumerate() {
            if i > 0 { f.write_str(" ")?; }
            match cmd {
                PathCommand::MoveTo(p) => write!(f, "M {:.2},{:.2}", p.x, p.y)?,
                PathCommand::LineTo(p) => write!(f, "L {:.2},{:.2}", p.x, p.y)?,
                PathCommand::CurveTo { c1, c2, to } => write!(
                    f,
                    "C {:.2},{:.2} {:.2},{:.2} {:.2},{:.2}",
                    c1.x, c1.y, c2.x, c2.y, to.x, to.y
                )?,
                PathCommand::Close => f.write_str("Z")?,
            }
        }
        Ok(())
    }
}

/// Bézier handle for `current`, offset along the previous→next direction by
/// `SMOOTHING` times that distance. `reverse` flips it for a segment's trailing handle.
pub fn control_point(current: Point, previous: Option<Point>, next: Option<Point>, reverse: bool) -> Point {
    let p = previous.unwrap_or(current);
    let n = next.unwrap_or(current);
    let angle = p.angle_to(n) + if reverse { PI } else { 0.0 };
    let length = p.distance(n) * SMOOTHING;
    Point::new(current.x + angle.cos() * length, current.y + angle.sin() * length)
}

/// Smooth curve through `points`: one move-to then one cubic per consecutive pair.
pub fn smooth_path(points: &[Point]) -> PathData {
    let mut path = PathData::new();
    let Some(&first) = points.first() else { return path };
    path.move_to(first);
    for i in 1..points.len() {
        let p1 = points[i - 1];
        let p2 = points[i];
        let p0 = if i >= 2 { Some(points[i - 2]) } else { None };
        let p3 = points.get(i + 1).copied();
        let c1 = control_point(p1, p0, Some(p2), false);
        let c2 = control_point(p2, Some(p1), p3, true);
        path.curve_to(c1, c2, p2);
    }
    path
}

/// Smoothed line closed straight down to `baseline_y` for the gradient fill.
pub fn area_path(points: &[Point], baseline_y: f64) -> PathData {
    if points.len() < 2 { return PathData::new(); }
    let mut path = smooth_path(points);
    let first = points[0];
    let last = points[points.len() - 1];
    path.line_to(Point::new(last.x, baseline_y));
    path.line_to(Point::new(first.x, baseline_y));
    path.close();
    path
}
