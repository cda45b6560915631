//! Benchmarks for the bare voice kernel (phasor + warp + sine + fold).

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use warpfold::dsp::oscillator::Voice;

use crate::BLOCK_SIZES;

pub fn bench_oscillator(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/oscillator");
    let sample_rate = 48_000.0;

    for &size in BLOCK_SIZES {
        let mut buffer = vec![0.0f64; size];

        // Plain sine - warp and fold both take their early exits
        let mut voice = Voice::new();
        group.bench_with_input(BenchmarkId::new("sine", size), &size, |b, _| {
            b.iter(|| {
                voice.render(black_box(&mut buffer), 440.0, sample_rate, 0.0, 0.0);
            })
        });

        // Warped - one powf per sample
        let mut voice = Voice::new();
        group.bench_with_input(BenchmarkId::new("warped", size), &size, |b, _| {
            b.iter(|| {
                voice.render(black_box(&mut buffer), 440.0, sample_rate, 0.7, 0.0);
            })
        });

        // Warped and fully folded - powf plus rem_euclid
        let mut voice = Voice::new();
        group.bench_with_input(BenchmarkId::new("warped_folded", size), &size, |b, _| {
            b.iter(|| {
                voice.render(black_box(&mut buffer), 440.0, sample_rate, 0.7, 1.0);
            })
        });
    }

    group.finish();
}
