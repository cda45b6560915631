//! Benchmarks for `WarpFoldOsc::process_block`.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use warpfold::{BlockInputs, Bindings, WarpFoldOsc};

use crate::BLOCK_SIZES;

pub fn bench_oscillator_blocks(c: &mut Criterion) {
    let mut group = c.benchmark_group("scenarios/oscillator");
    let sample_rate = 48_000.0;

    for &size in BLOCK_SIZES {
        let mut output = vec![0.0f64; size];

        // === SCALAR ONLY ===
        // Every parameter comes from the control handle
        let mut osc = WarpFoldOsc::new();
        osc.configure(sample_rate, Bindings::scalar())
            .expect("valid sample rate");
        osc.set_frequency(110.0);
        osc.set_fold(0.6);
        osc.set_warp(-0.3);

        group.bench_with_input(BenchmarkId::new("scalar", size), &size, |b, _| {
            b.iter(|| {
                osc.process_block(black_box(&BlockInputs::default()), black_box(&mut output));
            })
        });

        // === FULLY MODULATED ===
        // Every parameter follows an audio-rate signal
        let frequency: Vec<f64> = (0..size).map(|i| 110.0 + i as f64).collect();
        let fold: Vec<f64> = (0..size).map(|i| i as f64 / size as f64).collect();
        let warp: Vec<f64> = (0..size).map(|i| 1.0 - 2.0 * i as f64 / size as f64).collect();

        let mut osc = WarpFoldOsc::new();
        osc.configure(sample_rate, Bindings::from_connections(true, true, true))
            .expect("valid sample rate");
        let inputs = BlockInputs::default()
            .with_frequency(&frequency)
            .with_fold(&fold)
            .with_warp(&warp);

        group.bench_with_input(BenchmarkId::new("modulated", size), &size, |b, _| {
            b.iter(|| {
                osc.process_block(black_box(&inputs), black_box(&mut output));
            })
        });
    }

    group.finish();
}
