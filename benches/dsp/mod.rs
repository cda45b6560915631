//! Benchmarks for low-level DSP primitives.

mod filter;
mod fold;
mod oscillator;
mod warp;

pub use filter::bench_filter;
pub use fold::bench_fold;
pub use oscillator::bench_oscillator;
pub use warp::bench_warp;
