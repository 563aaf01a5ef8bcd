//! Benchmarks for the frame pipeline.
//!
//! Run with: cargo bench --bench render_pipeline

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use mandelbrot_zoom::{
    Complex, MandelbrotConfig, build_palette, escape_iteration, render, render_parallel,
};

const SEAHORSE: Complex = Complex::new(-0.743643887037151, 0.13182590420533);

fn bench_palette(c: &mut Criterion) {
    let config = MandelbrotConfig::default();

    c.bench_function("palette/default_100", |b| {
        b.iter(|| black_box(build_palette(black_box(100), &config.control_points)))
    });
}

fn bench_escape(c: &mut Criterion) {
    let mut group = c.benchmark_group("escape");

    // inside the set, so every call runs to the cap
    group.bench_function("origin_256", |b| {
        b.iter(|| black_box(escape_iteration(black_box(0.0), black_box(0.0), 256)))
    });

    group.bench_function("seahorse_256", |b| {
        b.iter(|| black_box(escape_iteration(black_box(SEAHORSE.real), black_box(SEAHORSE.imag), 256)))
    });

    group.finish();
}

fn bench_render(c: &mut Criterion) {
    let palette = MandelbrotConfig::default().build_palette();
    let mut group = c.benchmark_group("render");

    for &(width, height) in &[(160usize, 120usize), (320, 240)] {
        let label = format!("{}x{}", width, height);

        group.bench_with_input(BenchmarkId::new("serial", &label), &(width, height), |b, &(w, h)| {
            b.iter(|| black_box(render(SEAHORSE, 0.01, w, h, 256, &palette)))
        });

        group.bench_with_input(
            BenchmarkId::new("parallel", &label),
            &(width, height),
            |b, &(w, h)| b.iter(|| black_box(render_parallel(SEAHORSE, 0.01, w, h, 256, &palette))),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_palette, bench_escape, bench_render);
criterion_main!(benches);
