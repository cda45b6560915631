use std::f64::consts::TAU;

use super::fold::progressive_fold;
use super::phasor::Phasor;
use super::warp::warp_phase;

/*
Warp-Fold Voice
===============

The voice is the per-sample kernel without any of the control plumbing:

    phase ──► warp_phase ──► sin(2π·) ──► progressive_fold ──► out
      ▲
      └── advance by frequency / sample_rate

The sample at index n is computed from the phase BEFORE the advance, so a
fresh voice always starts at sin(0) = 0.

Nothing in here smooths parameters or removes DC. The block driver in
`synth::oscillator` wraps a Voice with smoothing channels and a DC blocker.
*/

/// Warped sine read at `phase`.
#[inline]
pub fn warped_sine(phase: f64, warp: f64) -> f64 {
    (TAU * warp_phase(phase, warp)).sin()
}

/// Full waveshaping chain for one phase value.
#[inline]
pub fn shape(phase: f64, warp: f64, fold: f64) -> f64 {
    progressive_fold(warped_sine(phase, warp), fold)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct Voice {
    phasor: Phasor,
}

impl Voice {
    pub fn new() -> Self {
        Self {
            phasor: Phasor::new(),
        }
    }

    #[inline]
    pub fn phase(&self) -> f64 {
        self.phasor.phase()
    }

    /// Produce one sample and advance the phase by `increment` cycles.
    #[inline]
    pub fn next_sample(&mut self, increment: f64, warp: f64, fold: f64) -> f64 {
        let out = shape(self.phasor.phase(), warp, fold);
        self.phasor.advance(increment);
        out
    }

    /// Fill `buffer` at a fixed frequency and shape.
    pub fn render(
        &mut self,
        buffer: &mut [f64],
        frequency: f64,
        sample_rate: f64,
        warp: f64,
        fold: f64,
    ) {
        let increment = frequency / sample_rate;
        for sample in buffer.iter_mut() {
            *sample = self.next_sample(increment, warp, fold);
        }
    }

    pub fn reset(&mut self) {
        self.phasor.reset();
    }
}
