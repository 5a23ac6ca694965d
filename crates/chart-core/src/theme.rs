// File: crates/chart-core/src/theme.rs
// Summary: Dark/Light theming for chart colors, independent of any drawing backend.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self { Self { r, g, b, a: 255 } }
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self { Self { r, g, b, a } }
    pub const fn with_alpha(self, a: u8) -> Self { Self { a, ..self } }

    /// Alpha as a 0..=1 opacity.
    pub fn opacity(&self) -> f64 { self.a as f64 / 255.0 }
}

/// `#rrggbb`; opacity is written separately by callers that need it.
impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: Rgba,
    pub grid: Rgba,
    pub label: Rgba,
    pub stroke: Rgba,
    pub fill_top: Rgba,
    pub fill_bottom: Rgba,
    pub guide: Rgba,
    pub marker_outer: Rgba,
    pub marker_inner: Rgba,
    pub hover: Rgba,
}

impl Theme {
    pub fn dark() -> Self {
        let primary = Rgba::rgb(59, 130, 246);
        Self {
            name: "dark",
            background: Rgba::rgb(0x1a, 0x1a, 0x1a),
            grid: Rgba::rgb(0x2e, 0x2e, 0x33),
            label: Rgba::rgb(170, 170, 170),
            stroke: primary,
            fill_top: primary.with_alpha(102),
            fill_bottom: primary.with_alpha(0),
            guide: Rgba::rgba(255, 255, 255, 64),
            marker_outer: primary.with_alpha(64),
            marker_inner: primary,
            hover: Rgba::rgb(255, 255, 255),
        }
    }

    pub fn light() -> Self {
        let primary = Rgba::rgb(37, 99, 235);
        Self {
            name: "light",
            background: Rgba::rgb(250, 250, 252),
            grid: Rgba::rgb(230, 230, 235),
            label: Rgba::rgb(100, 100, 110),
            stroke: primary,
            fill_top: primary.with_alpha(80),
            fill_bottom: primary.with_alpha(0),
            guide: Rgba::rgba(20, 20, 30, 64),
            marker_outer: primary.with_alpha(64),
            marker_inner: primary,
            hover: Rgba::rgb(20, 20, 30),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::dark() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::dark(), Theme::light()]
}

/// Find a theme by its `name`, falling back to dark.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::dark)
}
