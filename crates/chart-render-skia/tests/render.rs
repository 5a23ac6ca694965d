// File: crates/chart-render-skia/tests/render.rs
// Purpose: Rasterize placeholder and chart frames; check PNG output and a few pixels.

use std::time::{Duration, Instant};

use balance_chart_core::{Frame, ManualScheduler, RenderOptions, Series, SmoothLineChart};
use balance_chart_skia::SkiaRenderer;
use chrono::NaiveDate;

fn chart_frame() -> Frame {
    let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    let series = Series::from_daily_values(start, &[100.0, 150.0, 90.0, 130.0, 160.0]).unwrap();
    let mut chart = SmoothLineChart::new(RenderOptions::default(), Box::new(ManualScheduler::new()));
    let t0 = Instant::now();
    chart.set_samples(series, t0);
    chart.on_frame(t0 + Duration::from_secs(1));
    chart.render()
}

#[test]
fn chart_png_has_header_and_size() {
    let frame = chart_frame();
    let bytes = SkiaRenderer::default().render_to_png_bytes(&frame).expect("render bytes");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
    let img = image::load_from_memory(&bytes).expect("decode png").to_rgba8();
    assert_eq!((img.width(), img.height()), (320, 200));
}

#[test]
fn placeholder_rasterizes_background() {
    let chart = SmoothLineChart::new(RenderOptions::default(), Box::new(ManualScheduler::new()));
    let frame = chart.render();
    assert!(frame.is_placeholder());
    let (px, w, h) = SkiaRenderer::default().render_to_rgba8(&frame).expect("rgba render");
    assert_eq!(px.len(), (w * h * 4) as usize);
    // top-left corner is plain background
    let bg = frame.background();
    assert_eq!(&px[..4], &[bg.r, bg.g, bg.b, 255]);
}

#[test]
fn png_written_to_disk() {
    let out = std::path::PathBuf::from(env!("CARGO_TARGET_TMPDIR")).join("png_out/chart.png");
    SkiaRenderer::default().render_to_png(&chart_frame(), &out).expect("write png");
    assert!(std::fs::metadata(&out).expect("output exists").len() > 0);
}
