//! Low-level DSP primitives used by the block driver.
//!
//! These components are allocation-free and realtime-safe, and none of them
//! know about parameter binding or threads. They stay focused on the
//! signal-processing math so `synth::oscillator` can layer the control
//! plumbing on top.

/// DC blocking high-pass and denormal flushing.
pub mod filter;
/// Progressive triangular wave folding.
pub mod fold;
/// Phasor + warp + fold kernel.
pub mod oscillator;
/// Wrapping phase accumulator.
pub mod phasor;
/// One-pole parameter smoothing.
pub mod smoother;
/// Power-curve phase warping.
pub mod warp;

pub use filter::DcBlocker;
pub use oscillator::Voice;
pub use phasor::Phasor;
pub use smoother::Smoother;
