//! Benchmarks for wave folding: closed form against the reflect loop.
//!
//! The loop's cost grows with how far the input overshoots the threshold, so
//! it is measured at the two ends of the fold range.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use warpfold::dsp::fold::{self, drive, threshold};

use crate::BLOCK_SIZES;

pub fn bench_fold(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/fold");

    for &size in BLOCK_SIZES {
        // One sine cycle per block
        let input: Vec<f64> = (0..size)
            .map(|i| (std::f64::consts::TAU * i as f64 / size as f64).sin())
            .collect();
        let mut buffer = input.clone();

        for &amount in &[0.25, 1.0] {
            let label = format!("closed_form/{amount}");
            group.bench_with_input(BenchmarkId::new(label, size), &size, |b, _| {
                b.iter(|| {
                    buffer.copy_from_slice(&input);
                    fold::fold_buffer(black_box(&mut buffer), black_box(amount));
                })
            });

            let t = threshold(amount);
            let gain = drive(amount);
            let label = format!("reflect_loop/{amount}");
            group.bench_with_input(BenchmarkId::new(label, size), &size, |b, _| {
                b.iter(|| {
                    for (out, &x) in buffer.iter_mut().zip(&input) {
                        *out = fold::reflect_fold_bounded(black_box(x * gain), t, 10_000);
                    }
                })
            });
        }
    }

    group.finish();
}
