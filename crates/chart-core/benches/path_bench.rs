use balance_chart_core::chart::ChartLayout;
use balance_chart_core::spline::{area_path, smooth_path};
use balance_chart_core::{Series, Viewport};
use chrono::NaiveDate;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

fn gen_series(n: usize) -> Series {
    // simple waveform with drift
    let values: Vec<f64> = (0..n).map(|i| (i as f64 * 0.1).sin() * 1.0e6 + 250.0e6 + i as f64 * 1.0e3).collect();
    let start = NaiveDate::from_ymd_opt(2020, 1, 1).unwrap();
    Series::from_daily_values(start, &values).unwrap()
}

fn bench_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("smooth_path");
    let vp = Viewport::default();
    for &n in &[31usize, 365, 1_825] {
        let layout = ChartLayout::compute(&gen_series(n), &vp).unwrap();
        group.bench_with_input(BenchmarkId::from_parameter(format!("n{n}")), &layout, |b, l| {
            b.iter(|| {
                let line = smooth_path(black_box(&l.points));
                let area = area_path(black_box(&l.points), l.plot.bottom);
                black_box((line.to_string(), area.curve_count()))
            });
        });
    }
    group.finish();
}

fn bench_layout(c: &mut Criterion) {
    let series = gen_series(365);
    let vp = Viewport::default();
    c.bench_function("layout_n365", |b| b.iter(|| ChartLayout::compute(black_box(&series), &vp)));
}

criterion_group!(benches, bench_paths, bench_layout);
criterion_main!(benches);
