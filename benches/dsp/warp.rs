//! Benchmarks for phase warping.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use warpfold::dsp::warp::warp_phase;

use crate::BLOCK_SIZES;

pub fn bench_warp(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/warp");

    for &size in BLOCK_SIZES {
        let phases: Vec<f64> = (0..size).map(|i| i as f64 / size as f64).collect();
        let mut output = vec![0.0f64; size];

        for &(name, warp) in &[("identity", 0.0), ("positive", 0.8), ("negative", -0.8)] {
            group.bench_with_input(BenchmarkId::new(name, size), &size, |b, _| {
                b.iter(|| {
                    for (out, &phase) in output.iter_mut().zip(&phases) {
                        *out = warp_phase(black_box(phase), black_box(warp));
                    }
                })
            });
        }
    }

    group.finish();
}
