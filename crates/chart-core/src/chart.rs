// File: crates/chart-core/src/chart.rs
// Summary: SmoothLineChart state (series, focus, reveal ticker) and scene assembly.

use std::time::{Duration, Instant};

use tracing::debug;

use crate::animation::{visible_count, FrameScheduler, RevealTicker};
use crate::axis::{date_ticks, value_ticks, DateTick, ValueTick};
use crate::error::Result;
use crate::geometry::{Point, RectF};
use crate::interaction::{hit_test, FocusEvent, FocusState, PointerEvent};
use crate::scale::ChartScales;
use crate::scene::{Frame, Layer, LinearGradient, Placeholder, Scene, TextAnchor};
use crate::series::Series;
use crate::spline::{area_path, smooth_path};
use crate::theme::Theme;
use crate::types::{Insets, HIT_TOLERANCE, PLACEHOLDER_TEXT, REVEAL_DURATION};
use crate::view::Viewport;

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub viewport: Viewport,
    pub theme: Theme,
    pub reveal_duration: Duration,
    pub hit_tolerance: f64,
    pub stroke_width: f64,
    pub guide_width: f64,
    pub marker_outer_radius: f64,
    pub marker_inner_radius: f64,
    pub hover_radius: f64,
    pub label_size: f64,
    pub placeholder: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            theme: Theme::dark(),
            reveal_duration: REVEAL_DURATION,
            hit_tolerance: HIT_TOLERANCE,
            stroke_width: 3.0,
            guide_width: 1.0,
            marker_outer_radius: 10.0,
            marker_inner_radius: 5.0,
            hover_radius: 4.0,
            label_size: 11.0,
            placeholder: PLACEHOLDER_TEXT.to_string(),
        }
    }
}

/// Everything derived from the series and viewport; recomputed on demand.
#[derive(Clone, Debug, PartialEq)]
pub struct ChartLayout {
    pub plot: RectF,
    pub scales: ChartScales,
    pub points: Vec<Point>,
    pub value_ticks: Vec<ValueTick>,
    pub date_ticks: Vec<DateTick>,
}

impl ChartLayout {
    /// `None` below two samples: there is no line to lay out.
    pub fn compute(series: &Series, viewport: &Viewport) -> Option<Self> {
        if !series.has_enough_data() { return None; }
        let plot = viewport.plot_rect();
        let scales = ChartScales::for_series(series, plot)?;
        Some(Self {
            plot,
            points: scales.project(series),
            value_ticks: value_ticks(&scales.y),
            date_ticks: date_ticks(series, &scales.x),
            scales,
        })
    }
}

pub type FocusCallback = Box<dyn FnMut(&FocusEvent)>;

/// Animated, tappable smooth line/area chart over one series.
pub struct SmoothLineChart {
    options: RenderOptions,
    series: Series,
    focus: FocusState,
    ticker: RevealTicker,
    on_focus: Option<FocusCallback>,
}

impl SmoothLineChart {
    pub fn new(options: RenderOptions, scheduler: Box<dyn FrameScheduler>) -> Self {
        let ticker = RevealTicker::with_duration(scheduler, options.reveal_duration);
        Self { options, series: Series::empty(), focus: FocusState::default(), ticker, on_focus: None }
    }

    /// Called with the sample under a tap, and with the clamped last sample
    /// when a shorter series invalidates the selection.
    pub fn on_focus_change(&mut self, callback: impl FnMut(&FocusEvent) + 'static) {
        self.on_focus = Some(Box::new(callback));
    }

    /// Replace the data. A changed series restarts the reveal and moves the
    /// selection to the newest sample; an identical one is ignored.
    pub fn set_samples(&mut self, series: Series, now: Instant) {
        if series == self.series { return; }
        let len = series.len();
        let mut clamped = self.focus;
        let out_of_range = len > 0 && clamped.clamp(len);
        self.series = series;
        self.focus.reset(len);
        debug!(samples = len, active = self.focus.active, "series replaced");

        if out_of_range {
            debug!(index = self.focus.active, "active selection clamped");
            self.emit(self.focus.active);
        }
        if self.series.has_enough_data() {
            self.ticker.start(now);
        } else {
            self.ticker.cancel();
        }
    }

    pub fn resize(&mut self, width: f64, height: f64) -> Result<()> {
        self.options.viewport = Viewport::new(width, height, self.options.viewport.insets)?;
        Ok(())
    }

    pub fn set_insets(&mut self, insets: Insets) {
        self.options.viewport.insets = insets;
    }

    /// Host frame callback; returns the reveal progress after this tick.
    pub fn on_frame(&mut self, now: Instant) -> f64 {
        self.ticker.on_frame(now)
    }

    /// Stop any queued frame, e.g. when the host surface goes away.
    pub fn cancel_animation(&mut self) {
        self.ticker.cancel();
    }

    /// Route one pointer event. Returns the index selected by a press, if any.
    pub fn handle_pointer(&mut self, event: PointerEvent) -> Option<usize> {
        let hit = match (event.x(), self.layout()) {
            (Some(x), Some(layout)) => hit_test(x, &layout.scales.x, self.options.hit_tolerance),
            _ => None,
        };
        let selected = self.focus.apply(event, hit)?;
        debug!(index = selected, "sample selected");
        self.emit(selected);
        Some(selected)
    }

    fn emit(&mut self, index: usize) {
        let Some(sample) = self.series.get(index).copied() else { return };
        if let Some(cb) = self.on_focus.as_mut() {
            cb(&FocusEvent::new(index, sample));
        }
    }

    pub fn series(&self) -> &Series { &self.series }
    pub fn focus(&self) -> FocusState { self.focus }
    pub fn options(&self) -> &RenderOptions { &self.options }
    pub fn progress(&self) -> f64 { self.ticker.progress() }
    pub fn is_animating(&self) -> bool { self.ticker.is_running() }

    pub fn layout(&self) -> Option<ChartLayout> {
        ChartLayout::compute(&self.series, &self.options.viewport)
    }

    /// Build the current frame: placeholder text, or the layered chart at the
    /// current reveal progress and focus.
    pub fn render(&self) -> Frame {
        let vp = &self.options.viewport;
        let theme = &self.options.theme;
        let Some(layout) = self.layout() else {
            return Frame::Placeholder(Placeholder {
                width: vp.width,
                height: vp.height,
                background: theme.background,
                message: self.options.placeholder.clone(),
                color: theme.label,
            });
        };
        let plot = layout.plot;
        let mut layers = Vec::new();

        for tick in &layout.value_ticks {
            layers.push(Layer::GridLine {
                from: Point::new(plot.left, tick.y),
                to: Point::new(plot.right, tick.y),
                color: theme.grid,
            });
            layers.push(Layer::ValueLabel {
                at: Point::new(plot.left - 6.0, tick.y + self.options.label_size * 0.35),
                text: tick.label.clone(),
                color: theme.label,
                anchor: TextAnchor::End,
            });
        }
        for tick in &layout.date_ticks {
            layers.push(Layer::DateLabel {
                at: Point::new(tick.x, plot.bottom + self.options.label_size + 6.0),
                text: tick.label.clone(),
                color: theme.label,
                anchor: TextAnchor::Middle,
            });
        }

        let shown = visible_count(layout.points.len(), self.progress());
        let prefix = &layout.points[..shown];
        if prefix.len() >= 2 {
            layers.push(Layer::AreaFill {
                path: area_path(prefix, plot.bottom),
                gradient: LinearGradient {
                    from: Point::new(plot.left, plot.top),
                    to: Point::new(plot.left, plot.bottom),
                    start: theme.fill_top,
                    end: theme.fill_bottom,
                },
                clip: plot,
            });
            layers.push(Layer::Stroke {
                path: smooth_path(prefix),
                color: theme.stroke,
                width: self.options.stroke_width,
                clip: plot,
            });
        }

        if self.ticker.is_complete() {
            if let Some(&p) = layout.points.get(self.focus.active) {
                layers.push(Layer::GuideLine {
                    from: Point::new(p.x, plot.top),
                    to: Point::new(p.x, plot.bottom),
                    color: theme.guide,
                    width: self.options.guide_width,
                });
                layers.push(Layer::Marker {
                    center: p,
                    outer_radius: self.options.marker_outer_radius,
                    inner_radius: self.options.marker_inner_radius,
                    outer: theme.marker_outer,
                    inner: theme.marker_inner,
                });
            }
        }
        if let Some(&p) = self.focus.visible_hover().and_then(|h| layout.points.get(h)) {
            layers.push(Layer::HoverMarker { center: p, radius: self.options.hover_radius, color: theme.hover });
        }

        Frame::Chart(Scene { width: vp.width, height: vp.height, background: theme.background, layers })
    }

    /// Write the current frame as a standalone SVG document.
    pub fn render_to_svg(&self, output_svg_path: impl AsRef<std::path::Path>) -> Result<()> {
        let doc = crate::svg::frame_to_svg(&self.render(), self.options.label_size);
        if let Some(parent) = output_svg_path.as_ref().parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(output_svg_path, doc)?;
        Ok(())
    }
}
