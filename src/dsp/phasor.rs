//! Wrapping phase accumulator.

/*
Phase Accumulation
==================

Every periodic oscillator is driven by a phase ramp. Each sample the phase
moves forward by

    increment = frequency / sample_rate

and wraps back into [0, 1) when it leaves the cycle.

Why rem_euclid and not "if phase >= 1 { phase -= 1 }"
-----------------------------------------------------

The conditional subtraction only handles increments in [0, 1):

  - Negative frequency moves the phase backwards. The phase goes below 0 and
    a ">= 1" check never fires.
  - A frequency above the sample rate gives an increment above 1. One
    subtraction leaves the phase still outside the cycle.

Euclidean remainder handles both: the result is always in [0, 1) for any
finite input, whatever its sign or size.

One floating point wrinkle: for a tiny negative input such as -1e-20 the
exact result 1 - 1e-20 rounds to 1.0. That value is folded back to 0.0.
*/

/// Wrap any real number into `[0, 1)`. Non-finite input wraps to 0.
#[inline]
pub fn wrap_phase(x: f64) -> f64 {
    let wrapped = x.rem_euclid(1.0);
    if wrapped >= 1.0 || !wrapped.is_finite() {
        0.0
    } else {
        wrapped
    }
}

/// Phase accumulator in `[0, 1)`. Always running; there is no paused state.
#[derive(Debug, Clone, Copy, Default)]
pub struct Phasor {
    phase: f64,
}

impl Phasor {
    pub fn new() -> Self {
        Self { phase: 0.0 }
    }

    /// Current phase.
    #[inline]
    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Advance by `increment` cycles (frequency / sample rate).
    #[inline]
    pub fn advance(&mut self, increment: f64) {
        self.phase = wrap_phase(self.phase + increment);
    }

    /// Jump back to the start of the cycle.
    pub fn reset(&mut self) {
        self.phase = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wrap_basic() {
        assert_eq!(wrap_phase(0.25), 0.25);
        assert_eq!(wrap_phase(1.25), 0.25);
        assert_eq!(wrap_phase(-0.25), 0.75);
        assert_eq!(wrap_phase(3.0), 0.0);
    }

    #[test]
    fn test_wrap_tiny_negative_stays_below_one() {
        let wrapped = wrap_phase(-1e-20);
        assert!((0.0..1.0).contains(&wrapped));
    }

    #[test]
    fn test_wrap_non_finite() {
        assert_eq!(wrap_phase(f64::NAN), 0.0);
        assert_eq!(wrap_phase(f64::INFINITY), 0.0);
    }

    #[test]
    fn test_periodicity() {
        for &n in &[4_usize, 64, 100, 441] {
            let mut phasor = Phasor::new();
            phasor.advance(0.3);
            let start = phasor.phase();
            let increment = 1.0 / n as f64;
            for _ in 0..n {
                phasor.advance(increment);
            }
            let diff = (phasor.phase() - start).abs();
            let diff = diff.min(1.0 - diff);
            assert!(diff < 1e-9, "n={n} drift={diff}");
        }
    }

    #[test]
    fn test_negative_frequency_sweeps_backwards() {
        let mut phasor = Phasor::new();
        phasor.advance(-0.1);
        assert!((phasor.phase() - 0.9).abs() < 1e-12);
        phasor.advance(-0.1);
        assert!((phasor.phase() - 0.8).abs() < 1e-12);
    }

    #[test]
    fn test_increment_above_one() {
        let mut phasor = Phasor::new();
        phasor.advance(2.75);
        assert!((phasor.phase() - 0.75).abs() < 1e-12);
        phasor.advance(-7.5);
        assert!((phasor.phase() - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_reset() {
        let mut phasor = Phasor::new();
        phasor.advance(0.4);
        phasor.reset();
        assert_eq!(phasor.phase(), 0.0);
    }
}
