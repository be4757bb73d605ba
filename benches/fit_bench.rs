use bezier_fit::data::{SampleConfig, generate_sample};
use bezier_fit::domain::Point;
use bezier_fit::fit::{BezierSpline, BezierSplineCurveFitter, CurveFitter, fit_bezier, fit_bezier_batch, fit_bezier_searched};
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn build_input(count: usize) -> Vec<Point> {
    let config = SampleConfig {
        count,
        seed: 7,
        x_max: 100.0,
        cycles: 12.0,
        ..SampleConfig::default()
    };
    generate_sample(&config).expect("valid sample config")
}

fn bench_fitters(c: &mut Criterion) {
    let mut group = c.benchmark_group("fit_250_samples");

    for &count in &[16usize, 256, 4096] {
        let input = build_input(count);

        group.bench_with_input(BenchmarkId::new("segment_cursor", count), &input, |b, pts| {
            b.iter(|| black_box(fit_bezier(black_box(pts), 250)))
        });

        group.bench_with_input(BenchmarkId::new("binary_search", count), &input, |b, pts| {
            b.iter(|| black_box(fit_bezier_searched(black_box(pts), 250)))
        });

        let mut fitter = BezierSplineCurveFitter::<BezierSpline>::new(250);
        group.bench_with_input(BenchmarkId::new("spline_state", count), &input, |b, pts| {
            b.iter(|| black_box(fitter.fit_curve(black_box(pts))))
        });
    }

    group.finish();
}

fn bench_batch(c: &mut Criterion) {
    let curves: Vec<Vec<Point>> = (0..64).map(|_| build_input(512)).collect();

    c.bench_function("batch_64x512", |b| {
        b.iter(|| black_box(fit_bezier_batch(black_box(&curves), 250)))
    });
}

criterion_group!(benches, bench_fitters, bench_batch);
criterion_main!(benches);
