//! Polynomial fit benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Window sizes (8 to 128 samples)
//! - Polynomial degrees (constant to quintic)
//! - The cofactor inverse by matrix order
//! - Rolling prediction with self-feeding and observed windows
//! - Sensor scenarios (humidity drift, soil-moisture drying curve)
//!
//! Run with: `cargo bench`

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use rand::prelude::*;
use rand_distr::{Normal, Uniform};
use std::hint::black_box;
use wlsfit_rs::prelude::*;
use wlsfit_rs::{PolynomialDegree, cofactor_inverse};

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Generate a humidity-like reading: slow linear drift plus Gaussian noise.
fn generate_humidity_data(size: usize, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise_dist = Normal::new(0.0, 0.3).unwrap();

    let t: Vec<f64> = (0..size).map(|i| i as f64).collect();
    let y: Vec<f64> = t
        .iter()
        .map(|&ti| 55.0 + 0.05 * ti + noise_dist.sample(&mut rng))
        .collect();
    (t, y)
}

/// Generate a soil-moisture drying curve with occasional watering spikes.
fn generate_soil_data(size: usize, seed: u64) -> (Vec<f64>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(seed);
    let noise_dist = Normal::new(0.0, 0.5).unwrap();
    let spike_dist = Uniform::new(5.0, 15.0).unwrap();

    let t: Vec<f64> = (0..size).map(|i| i as f64 / size as f64).collect();
    let mut y: Vec<f64> = t
        .iter()
        .map(|&ti| 80.0 - 30.0 * ti + 10.0 * ti * ti + noise_dist.sample(&mut rng))
        .collect();

    for _ in 0..size / 16 {
        let idx = rng.random_range(0..size);
        y[idx] += spike_dist.sample(&mut rng);
    }
    (t, y)
}

/// Generate a well-conditioned symmetric positive definite matrix.
fn generate_spd_matrix(order: usize, seed: u64) -> Matrix<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    let dist = Uniform::new(-1.0, 1.0).unwrap();

    let mut data = vec![0.0; order * order];
    for i in 0..order {
        for j in 0..=i {
            let v = dist.sample(&mut rng);
            data[i * order + j] = v;
            data[j * order + i] = v;
        }
        data[i * order + i] += order as f64;
    }
    Matrix::from_row_slice(order, order, &data).unwrap()
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_window_size(c: &mut Criterion) {
    let mut group = c.benchmark_group("window_size");
    group.sample_size(100);

    for size in [8, 16, 32, 64, 128] {
        group.throughput(Throughput::Elements(size as u64));

        let (t, y) = generate_humidity_data(size, 42);
        let model = PolyFit::new().degree(Linear).adapter(Batch).build().unwrap();

        group.bench_with_input(BenchmarkId::new("batch_linear", size), &size, |b, _| {
            b.iter(|| model.fit(black_box(&t), black_box(&y)).unwrap())
        });
    }
    group.finish();
}

fn bench_degree(c: &mut Criterion) {
    let mut group = c.benchmark_group("degree");
    group.sample_size(100);

    let (t, y) = generate_soil_data(32, 7);
    for degree in 0..=PolynomialDegree::MAX {
        let degree = PolynomialDegree::from_value(degree).unwrap();
        let model = PolyFit::new().degree(degree).adapter(Batch).build().unwrap();

        group.bench_with_input(
            BenchmarkId::new("batch", degree.value()),
            &degree,
            |b, _| b.iter(|| model.fit(black_box(&t), black_box(&y)).unwrap()),
        );
    }
    group.finish();
}

fn bench_inverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("cofactor_inverse");
    group.sample_size(100);

    for order in [2, 3, 4, 5, 6, 7, 8] {
        let a = generate_spd_matrix(order, 11);
        group.bench_with_input(BenchmarkId::new("order", order), &order, |b, _| {
            b.iter(|| cofactor_inverse(black_box(&a)).unwrap())
        });
    }
    group.finish();
}

fn bench_rolling(c: &mut Criterion) {
    let mut group = c.benchmark_group("rolling");
    group.sample_size(50);

    let (_, y) = generate_humidity_data(256, 3);
    let t0: u64 = 1_700_000_000_000;

    for (name, mode) in [("self_feeding", SelfFeeding), ("observed", Observed)] {
        group.throughput(Throughput::Elements(y.len() as u64));
        group.bench_function(name, |b| {
            b.iter(|| {
                let mut predictor = PolyFit::new()
                    .degree(Quadratic)
                    .window_capacity(16)
                    .time_scale(1000.0)
                    .feed_mode(mode)
                    .adapter(Online)
                    .build()
                    .unwrap();
                let mut last = 0.0;
                for (i, &v) in y.iter().enumerate() {
                    let now = t0 + 60_000 * i as u64;
                    predictor.add_sample(now, v).unwrap();
                    if predictor.window_size() >= 3 {
                        last = predictor.predict(now + 300_000, now).unwrap();
                    }
                }
                black_box(last)
            })
        });
    }
    group.finish();
}

fn bench_weighting(c: &mut Criterion) {
    let mut group = c.benchmark_group("weighting");
    group.sample_size(100);

    let (_, y) = generate_soil_data(64, 5);
    for (name, weighting) in [
        ("uniform", WindowWeighting::Uniform),
        ("decay_8", WindowWeighting::ExponentialDecay { half_life: 8.0 }),
    ] {
        let mut predictor = PolyFit::new()
            .window_capacity(64)
            .window_weighting(weighting)
            .feed_mode(Observed)
            .adapter(Online)
            .build()
            .unwrap();
        for (i, &v) in y.iter().enumerate() {
            predictor.add_sample(i as u64, v).unwrap();
        }

        group.bench_function(name, |b| {
            b.iter(|| predictor.predict(black_box(70), 64).unwrap())
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_window_size,
    bench_degree,
    bench_inverse,
    bench_rolling,
    bench_weighting,
);
criterion_main!(benches);
