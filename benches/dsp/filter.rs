//! Benchmarks for the DC blocker.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion};
use warpfold::dsp::filter::DcBlocker;

use crate::BLOCK_SIZES;

pub fn bench_filter(c: &mut Criterion) {
    let mut group = c.benchmark_group("dsp/filter");

    for &size in BLOCK_SIZES {
        // Offset ramp so the blocker has something to remove
        let input: Vec<f64> = (0..size)
            .map(|i| (i as f64 / size as f64) * 2.0 - 0.5)
            .collect();
        let mut buffer = input.clone();

        let mut dc = DcBlocker::new(DcBlocker::coefficient(35.0, 48_000.0));
        group.bench_with_input(BenchmarkId::new("dc_blocker", size), &size, |b, _| {
            b.iter(|| {
                buffer.copy_from_slice(&input);
                dc.render(black_box(&mut buffer));
            })
        });
    }

    group.finish();
}
