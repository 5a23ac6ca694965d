// File: crates/demo/src/main.rs
// Summary: Demo loads (or synthesizes) a daily net-worth series, replays the reveal and a tap,
// and writes each stage as SVG and PNG.

use std::cell::RefCell;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use balance_chart_core::{
    theme, ManualScheduler, PointerEvent, RenderOptions, Sample, Series, SmoothLineChart, Viewport,
};
use balance_chart_skia::SkiaRenderer;
use chrono::{Days, Local};
use clap::Parser;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Sum of the sample account balances shown on the welcome dashboard.
const MOCK_NET_WORTH: f64 = 253_768_501.0;
/// Simulated display refresh interval.
const FRAME: Duration = Duration::from_millis(16);

#[derive(Parser, Debug)]
#[command(name = "balance-chart-demo", about = "Render the smooth balance chart to SVG/PNG frames")]
struct Args {
    /// CSV with `date,value` (or `timestamp,value`) columns. Synthesized data is used when omitted.
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Number of days to synthesize when no CSV is given.
    #[arg(long, default_value_t = 31)]
    days: usize,

    #[arg(long, default_value_t = 320.0)]
    width: f64,

    #[arg(long, default_value_t = 200.0)]
    height: f64,

    /// Theme preset name (dark, light).
    #[arg(long, default_value = "dark")]
    theme: String,

    /// Sample index to tap after the reveal finishes.
    #[arg(long)]
    tap_index: Option<usize>,

    #[arg(long, default_value = "target/out")]
    out_dir: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let series = match &args.csv {
        Some(path) => load_csv(path).with_context(|| format!("failed to load CSV '{}'", path.display()))?,
        None => synthesize(args.days)?,
    };
    info!(samples = series.len(), "series ready");
    if !series.has_enough_data() {
        warn!("fewer than two samples; only the placeholder will be drawn");
    }

    let options = RenderOptions {
        viewport: Viewport::new(args.width, args.height, Default::default())?,
        theme: theme::find(&args.theme),
        ..RenderOptions::default()
    };
    let label_size = options.label_size as f32;
    let sched = Rc::new(RefCell::new(ManualScheduler::new()));
    let mut chart = SmoothLineChart::new(options, Box::new(sched.clone()));
    chart.on_focus_change(|e| {
        info!(index = e.index, value = e.sample.value, amount = %e.readout.label, date = %e.readout.date_label, "focus changed");
    });

    let renderer = SkiaRenderer::new(label_size);
    let write = |chart: &SmoothLineChart, name: &str| -> Result<()> {
        let svg = args.out_dir.join(format!("{name}.svg"));
        chart.render_to_svg(&svg)?;
        renderer.render_to_png(&chart.render(), svg.with_extension("png"))?;
        info!(path = %svg.display(), "wrote frame");
        Ok(())
    };

    // Drive the reveal the way a display would, snapshotting halfway through.
    let t0 = Instant::now();
    chart.set_samples(series, t0);
    let mut now = t0;
    let mut halfway_written = false;
    while !sched.borrow().pending().is_empty() {
        sched.borrow_mut().drain();
        now += FRAME;
        let progress = chart.on_frame(now);
        if !halfway_written && progress >= 0.5 {
            write(&chart, "balance_reveal")?;
            halfway_written = true;
        }
    }
    write(&chart, "balance_final")?;

    if let Some(index) = args.tap_index {
        let layout = chart.layout().context("tap requested but the chart has no data")?;
        let point = layout.points.get(index).with_context(|| format!("tap index {index} out of range"))?;
        chart.handle_pointer(PointerEvent::Start { x: point.x, y: point.y });
        chart.handle_pointer(PointerEvent::End);
        write(&chart, "balance_selected")?;
    }
    Ok(())
}

fn load_csv(path: &Path) -> Result<Series> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("opening {}", path.display()))?;
    let mut samples = Vec::new();
    for (i, rec) in rdr.deserialize::<Sample>().enumerate() {
        samples.push(rec.with_context(|| format!("row {}", i + 1))?);
    }
    Ok(Series::new(samples)?)
}

/// Daily series ending today that wobbles a few percent around the mock net worth.
fn synthesize(days: usize) -> Result<Series> {
    let today = Local::now().date_naive();
    let start = today
        .checked_sub_days(Days::new(days.saturating_sub(1) as u64))
        .context("day count reaches before the calendar start")?;
    let values: Vec<f64> = (0..days)
        .map(|i| {
            let t = i as f64;
            MOCK_NET_WORTH * (1.0 + 0.03 * (t * 0.7).sin() + 0.015 * (t * 1.9).cos() + 0.001 * t)
        })
        .collect();
    Ok(Series::from_daily_values(start, &values)?)
}
