// File: crates/chart-core/tests/scenarios.rs
// Purpose: End-to-end chart behaviour: taps, shrinking series, flat data, reveal and layer order.

use std::cell::RefCell;
use std::rc::Rc;
use std::time::{Duration, Instant};

use balance_chart_core::scene::Layer;
use balance_chart_core::spline::PathData;
use balance_chart_core::{
    FocusEvent, Frame, ManualScheduler, PointerEvent, RenderOptions, Sample, Series, SmoothLineChart,
};
use chrono::NaiveDate;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 3, d).unwrap()
}

fn daily(values: &[f64]) -> Series {
    Series::from_daily_values(day(1), values).unwrap()
}

struct Harness {
    chart: SmoothLineChart,
    sched: Rc<RefCell<ManualScheduler>>,
    events: Rc<RefCell<Vec<FocusEvent>>>,
    t0: Instant,
}

impl Harness {
    fn new() -> Self {
        let sched = Rc::new(RefCell::new(ManualScheduler::new()));
        let mut chart = SmoothLineChart::new(RenderOptions::default(), Box::new(sched.clone()));
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = events.clone();
        chart.on_focus_change(move |e| sink.borrow_mut().push(e.clone()));
        Self { chart, sched, events, t0: Instant::now() }
    }

    /// Deliver frames until the reveal settles.
    fn finish_reveal(&mut self) {
        let mut t = self.t0;
        while !self.sched.borrow().pending().is_empty() {
            self.sched.borrow_mut().drain();
            t += Duration::from_millis(16);
            self.chart.on_frame(t);
        }
    }

    fn stroke(&self) -> PathData {
        let frame = self.chart.render();
        let scene = frame.scene().expect("chart frame");
        scene
            .layers
            .iter()
            .find_map(|l| match l {
                Layer::Stroke { path, .. } => Some(path.clone()),
                _ => None,
            })
            .expect("stroke layer")
    }
}

#[test]
fn tap_on_second_day_selects_it_and_release_clears_hover() {
    let mut h = Harness::new();
    h.chart.set_samples(daily(&[100.0, 150.0, 90.0]), h.t0);
    h.finish_reveal();

    let layout = h.chart.layout().unwrap();
    let x1 = layout.points[1].x;
    assert_eq!(h.chart.handle_pointer(PointerEvent::Start { x: x1, y: 10.0 }), Some(1));
    {
        let events = h.events.borrow();
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].index, 1);
        assert_eq!(events[0].sample, Sample::on_date(day(2), 150.0));
        assert_eq!(events[0].readout.label, "Rp 150");
    }

    // drag onto day 3: hover only, no callback
    h.chart.handle_pointer(PointerEvent::Move { x: layout.points[2].x, y: 10.0 });
    assert_eq!(h.chart.focus().hover, Some(2));
    assert_eq!(h.events.borrow().len(), 1);
    assert_eq!(h.chart.render().scene().unwrap().count("hover"), 1);

    h.chart.handle_pointer(PointerEvent::End);
    assert_eq!(h.chart.focus().active, 1);
    assert_eq!(h.chart.focus().hover, None);
    assert_eq!(h.chart.render().scene().unwrap().count("hover"), 0);
}

#[test]
fn tap_far_outside_plot_is_ignored() {
    let mut h = Harness::new();
    h.chart.set_samples(daily(&[100.0, 150.0, 90.0]), h.t0);
    assert_eq!(h.chart.handle_pointer(PointerEvent::Start { x: -500.0, y: 0.0 }), None);
    assert_eq!(h.chart.focus().active, 2);
    assert!(h.events.borrow().is_empty());
}

#[test]
fn flat_series_gets_even_gridlines_from_80_to_120() {
    let mut h = Harness::new();
    h.chart.set_samples(daily(&[100.0, 100.0, 100.0]), h.t0);
    let layout = h.chart.layout().unwrap();
    assert_eq!((layout.scales.y.vmin, layout.scales.y.vmax), (80.0, 120.0));

    let values: Vec<f64> = layout.value_ticks.iter().map(|t| t.value).collect();
    assert_eq!(values, vec![80.0, 90.0, 100.0, 110.0, 120.0]);
    let labels: Vec<&str> = layout.value_ticks.iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, vec!["80", "90", "100", "110", "120"]);

    let ys: Vec<f64> = layout.value_ticks.iter().map(|t| t.y).collect();
    let gap = ys[0] - ys[1];
    assert!(gap > 0.0 && gap.is_finite());
    for w in ys.windows(2) {
        assert!(((w[0] - w[1]) - gap).abs() < 1e-9);
    }
    assert_eq!(h.chart.render().scene().unwrap().count("grid"), 5);
}

#[test]
fn shrinking_series_clamps_selection_and_notifies() {
    let mut h = Harness::new();
    let ten: Vec<f64> = (0..10).map(|i| 100.0 + i as f64).collect();
    h.chart.set_samples(daily(&ten), h.t0);
    assert_eq!(h.chart.focus().active, 9);
    assert!(h.events.borrow().is_empty());

    h.chart.set_samples(daily(&ten[..5]), h.t0 + Duration::from_millis(100));
    assert_eq!(h.chart.focus().active, 4);
    let events = h.events.borrow();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].index, 4);
    assert_eq!(events[0].sample.value, 104.0);
}

#[test]
fn too_little_data_renders_placeholder() {
    let mut h = Harness::new();
    assert!(h.chart.render().is_placeholder());
    h.chart.set_samples(daily(&[42.0]), h.t0);
    match h.chart.render() {
        Frame::Placeholder(p) => assert_eq!(p.message, "Not enough data"),
        Frame::Chart(_) => panic!("single sample must not draw a chart"),
    }
    assert!(h.chart.layout().is_none());
    assert!(!h.chart.is_animating());
    assert_eq!(h.chart.handle_pointer(PointerEvent::Start { x: 100.0, y: 0.0 }), None);
}

#[test]
fn full_path_has_one_curve_per_segment() {
    let mut h = Harness::new();
    let values = [5.0, 9.0, 3.0, 8.0, 8.0, 12.0, 1.0];
    h.chart.set_samples(daily(&values), h.t0);
    h.finish_reveal();
    let first = h.chart.layout().unwrap().points[0];
    let path = h.stroke();
    assert_eq!(path.curve_count(), values.len() - 1);
    assert!(path.to_string().starts_with(&format!("M {:.2},{:.2} C", first.x, first.y)));
}

#[test]
fn reveal_draws_prefix_and_hides_markers_until_done() {
    let mut h = Harness::new();
    let values: Vec<f64> = (0..10).map(|i| (i * i) as f64).collect();
    h.chart.set_samples(daily(&values), h.t0);
    assert_eq!(h.chart.progress(), 0.0);

    h.sched.borrow_mut().drain();
    let p = h.chart.on_frame(h.t0 + Duration::from_millis(400));
    assert!((p - 0.5).abs() < 1e-9);
    assert_eq!(h.stroke().curve_count(), 4);
    let scene = h.chart.render();
    assert_eq!(scene.scene().unwrap().count("marker"), 0);
    assert_eq!(scene.scene().unwrap().count("guide"), 0);

    h.finish_reveal();
    assert_eq!(h.chart.progress(), 1.0);
    assert_eq!(h.stroke().curve_count(), 9);
    assert_eq!(h.chart.render().scene().unwrap().count("marker"), 1);
}

#[test]
fn new_series_restarts_reveal_once_and_cancels_old_frame() {
    let mut h = Harness::new();
    h.chart.set_samples(daily(&[1.0, 2.0, 3.0]), h.t0);
    h.sched.borrow_mut().drain();
    h.chart.on_frame(h.t0 + Duration::from_millis(200));
    assert!(h.chart.progress() > 0.0);

    h.chart.set_samples(daily(&[1.0, 2.0, 4.0]), h.t0 + Duration::from_millis(250));
    assert_eq!(h.chart.progress(), 0.0);
    assert_eq!(h.sched.borrow().pending().len(), 1);
    assert_eq!(h.sched.borrow().cancelled(), 1);

    // identical data is not a change
    h.finish_reveal();
    h.chart.set_samples(daily(&[1.0, 2.0, 4.0]), h.t0 + Duration::from_secs(5));
    assert_eq!(h.chart.progress(), 1.0);
    assert!(h.sched.borrow().pending().is_empty());
}

#[test]
fn layers_are_ordered_back_to_front() {
    let mut h = Harness::new();
    h.chart.set_samples(daily(&[10.0, 30.0, 20.0, 40.0]), h.t0);
    h.finish_reveal();
    let x0 = h.chart.layout().unwrap().points[0].x;
    h.chart.handle_pointer(PointerEvent::Move { x: x0, y: 0.0 });

    let frame = h.chart.render();
    let kinds: Vec<&str> = frame.scene().unwrap().layers.iter().map(|l| l.kind()).collect();
    let pos = |k: &str| kinds.iter().rposition(|x| *x == k).unwrap();
    let first = |k: &str| kinds.iter().position(|x| *x == k).unwrap();
    assert!(pos("value-label") < first("date-label"));
    assert!(pos("date-label") < first("area"));
    assert!(first("area") < first("stroke"));
    assert!(first("stroke") < first("guide"));
    assert!(first("guide") < first("marker"));
    assert!(first("marker") < first("hover"));
    assert_eq!(kinds.last(), Some(&"hover"));
}

#[test]
fn dropping_chart_cancels_pending_frame() {
    let sched = Rc::new(RefCell::new(ManualScheduler::new()));
    {
        let mut chart = SmoothLineChart::new(RenderOptions::default(), Box::new(sched.clone()));
        chart.set_samples(daily(&[1.0, 2.0]), Instant::now());
        assert_eq!(sched.borrow().pending().len(), 1);
    }
    assert!(sched.borrow().pending().is_empty());
}

#[test]
fn extreme_balances_still_lay_out_finite_points() {
    let mut h = Harness::new();
    h.chart.set_samples(daily(&[-1e308, 1e308, f64::MAX]), h.t0);
    h.finish_reveal();
    let layout = h.chart.layout().unwrap();
    assert!(layout.scales.y.vmin.is_finite() && layout.scales.y.vmax.is_finite());
    for p in &layout.points {
        assert!(p.x.is_finite() && p.y.is_finite(), "{p:?}");
    }
    for t in &layout.value_ticks {
        assert!(t.value.is_finite() && t.y.is_finite(), "{t:?}");
    }
    assert!(!h.stroke().to_string().contains("NaN"));
}
