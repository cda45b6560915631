//! Progressive wave folding
//!
//! Folding adds harmonics by reflecting the waveform back on itself whenever
//! it crosses a threshold. The "fold" parameter controls both how hard the
//! signal is pushed and how low the reflecting threshold sits.
//!
//! # How Folding Works
//!
//! A folder is a transfer function with a triangular shape:
//!
//! ```text
//!   out
//!    t ┤    ╱╲      ╱╲
//!      │   ╱  ╲    ╱  ╲
//!    0 ┼──╱────╲──╱────╲──→ in
//!      │ ╱      ╲╱      ╲
//!   -t ┤╱
//!      -t  t   3t   5t
//! ```
//!
//! Inside `[-t, t]` the signal passes through untouched. Past `t` it heads
//! back down, past `-t` back up, forever. Every reflection turns one peak of
//! the input into two peaks of the output, which is where the bright,
//! metallic harmonics come from.
//!
//! # Progressive Threshold
//!
//! One control moves two things at once:
//!
//!   threshold = 1 - 0.99 × fold      (1.0 → 0.01)
//!   drive     = 1 + 4 × fold         (1.0 → 5.0)
//!
//!   fold 0.0  = threshold 1.0, drive 1: the sine passes through bit-for-bit
//!   fold 0.5  = threshold 0.505, drive 3: a few reflections per cycle
//!   fold 1.0  = threshold 0.01, drive 5: ~250 reflections per half cycle
//!
//! # Closed Form vs Reflect Loop
//!
//! The textbook folder reflects in a loop until the value lands in range:
//!
//! ```text
//! while x > t || x < -t {
//!     x = if x > t { 2t - x } else { -2t - x };
//! }
//! ```
//!
//! The loop count grows with |x| / t. At fold = 1 that is hundreds of
//! iterations per sample, and with a tiny threshold it is unbounded. The
//! triangle wave above has period 4t, so the same answer comes from one
//! modulo:
//!
//! ```text
//! m      = (x + t) mod 4t          in [0, 4t)
//! folded = t - |m - 2t|
//! ```
//!
//! Constant time, no loop, no matter how small `t` gets.

/// Lowest threshold the folder will reflect against.
pub const MIN_THRESHOLD: f64 = 1e-6;

/// Reflecting threshold for a fold amount in `[0, 1]`.
#[inline]
pub fn threshold(fold_amount: f64) -> f64 {
    (1.0 - 0.99 * fold_amount).max(MIN_THRESHOLD)
}

/// Input gain applied before folding for a fold amount in `[0, 1]`.
#[inline]
pub fn drive(fold_amount: f64) -> f64 {
    1.0 + 4.0 * fold_amount
}

/// Fold `value` into `[-threshold, threshold]` by triangular reflection.
///
/// Values already in range are returned unchanged. Non-finite input folds to
/// silence.
#[inline]
pub fn fold(value: f64, threshold: f64) -> f64 {
    let t = threshold.max(MIN_THRESHOLD);

    if !value.is_finite() {
        return 0.0;
    }
    if value.abs() <= t {
        return value;
    }

    let m = (value + t).rem_euclid(4.0 * t);
    (t - (m - 2.0 * t).abs()).clamp(-t, t)
}

/// Scale a sample into fold space and fold it with the progressive threshold.
///
/// `fold_amount = 0` is an exact passthrough.
#[inline]
pub fn progressive_fold(sample: f64, fold_amount: f64) -> f64 {
    fold(sample * drive(fold_amount), threshold(fold_amount))
}

/// Iterative reflect loop with an iteration cap.
///
/// Kept as a reference for the closed form and for benchmarks; never used on
/// the audio path. Returns the partially reflected value if the cap is hit.
pub fn reflect_fold_bounded(value: f64, threshold: f64, max_iterations: usize) -> f64 {
    let t = threshold.max(MIN_THRESHOLD);
    let mut x = value;
    let mut iterations = 0;

    while (x > t || x < -t) && iterations < max_iterations {
        if x > t {
            x = 2.0 * t - x;
        } else {
            x = -2.0 * t - x;
        }
        iterations += 1;
    }

    x
}

/// Apply progressive folding to an entire buffer in place.
pub fn fold_buffer(buffer: &mut [f64], fold_amount: f64) {
    for sample in buffer.iter_mut() {
        *sample = progressive_fold(*sample, fold_amount);
    }
}
