#![allow(missing_docs)]

use brisk_noise::PerlinNoise;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use std::hint::black_box;

const GRID: usize = 64;

fn grid() -> impl Iterator<Item = (f32, f32)> {
    (0..GRID).flat_map(|y| (0..GRID).map(move |x| (x as f32 * 0.173, y as f32 * 0.173)))
}

// ── Single octave ───────────────────────────────────────────────────────────

fn bench_single_octave(c: &mut Criterion) {
    let noise = PerlinNoise::with_seed(0);

    let mut group = c.benchmark_group("perlin_single_octave");
    group.throughput(criterion::Throughput::Elements((GRID * GRID) as u64));
    group.bench_function("1d", |b| {
        b.iter(|| grid().map(|(x, _)| noise.noise_1d(black_box(x))).sum::<f32>());
    });
    group.bench_function("2d", |b| {
        b.iter(|| grid().map(|(x, y)| noise.noise_2d(black_box(x), y)).sum::<f32>());
    });
    group.bench_function("3d", |b| {
        b.iter(|| grid().map(|(x, y)| noise.noise_3d(black_box(x), y, 0.5)).sum::<f32>());
    });
    group.bench_function("4d", |b| {
        b.iter(|| grid().map(|(x, y)| noise.noise_4d(black_box(x), y, 0.5, 1.5)).sum::<f32>());
    });
    group.finish();
}

// ── Fractal ─────────────────────────────────────────────────────────────────

fn bench_fractal_octaves(c: &mut Criterion) {
    let mut group = c.benchmark_group("perlin_fractal_3d");
    for octaves in [1, 4, 8] {
        let mut noise = PerlinNoise::with_seed(0);
        noise.set_octaves(octaves);
        group.bench_with_input(BenchmarkId::from_parameter(octaves), &noise, |b, noise| {
            b.iter(|| grid().map(|(x, y)| noise.fractal_3d(black_box(x), y, 0.5)).sum::<f32>());
        });
    }
    group.finish();
}

fn bench_reseed(c: &mut Criterion) {
    let mut noise = PerlinNoise::with_seed(0);
    let mut seed = 0;
    c.bench_function("perlin_reseed", |b| {
        b.iter(|| {
            seed += 1;
            noise.reseed(black_box(seed));
        });
    });
}

criterion_group!(benches, bench_single_octave, bench_fractal_octaves, bench_reseed);
criterion_main!(benches);
