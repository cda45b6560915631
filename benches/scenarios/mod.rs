//! Full block-driver benchmarks.
//!
//! These run `WarpFoldOsc::process_block` the way a host callback would,
//! with scalar-only and signal-bound parameter sets.

mod oscillator;

pub use oscillator::bench_oscillator_blocks;
