use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

use fractal_toolkit::{
    Complex, generate_barnsley_fern_seeded, generate_julia, generate_koch_curve,
    generate_mandelbrot, generate_sierpinski_triangle,
};

fn bench_escape_time(c: &mut Criterion) {
    let mut group = c.benchmark_group("escape_time");
    group.sample_size(10);

    for size in [200, 800] {
        group.bench_with_input(BenchmarkId::new("mandelbrot", size), &size, |b, &size| {
            b.iter(|| generate_mandelbrot(black_box(size), size, -2.0, 2.0, -2.0, 2.0, 100))
        });
        group.bench_with_input(BenchmarkId::new("julia", size), &size, |b, &size| {
            b.iter(|| {
                generate_julia(
                    black_box(size),
                    size,
                    -2.0,
                    2.0,
                    -2.0,
                    2.0,
                    100,
                    Complex::new(-0.7, 0.27015),
                )
            })
        });
    }

    group.finish();
}

fn bench_geometric(c: &mut Criterion) {
    let mut group = c.benchmark_group("geometric");
    group.sample_size(10);

    group.bench_function("koch_depth_8", |b| b.iter(|| generate_koch_curve(black_box(8))));
    group.bench_function("fern_100", |b| {
        b.iter(|| generate_barnsley_fern_seeded(black_box(100), 7))
    });
    group.bench_function("sierpinski_depth_6", |b| {
        b.iter(|| generate_sierpinski_triangle(black_box(6)))
    });

    group.finish();
}

criterion_group!(benches, bench_escape_time, bench_geometric);
criterion_main!(benches);
