use std::f64::consts::TAU;

/*
DC Blocking
===========

Wave folding and phase warping both produce waveforms whose positive and
negative halves no longer cancel. The average of one cycle drifts away from
zero, and that offset (DC) wastes headroom and thumps when the oscillator
starts or stops.

A DC blocker is the smallest possible high-pass filter: one zero at DC and
one pole just inside the unit circle.

    y[n] = x[n] - x[n-1] + a·y[n-1]

| a       | corner at 44.1 kHz | behaviour                         |
| ------- | ------------------ | --------------------------------- |
| 0.99    | ~70 Hz             | fast settling, thins the low end  |
| 0.995   | ~35 Hz             | default                           |
| 0.999   | ~7 Hz              | transparent, slow to settle       |

The pole is derived from a corner frequency so the response stays the same
at every sample rate:

    a = exp(-2π · cutoff / sample_rate)

Denormals
---------

When the input goes silent the feedback term decays toward zero forever and
eventually lands in the subnormal range, where many CPUs slow down by orders
of magnitude. flush_denormal() snaps those tails to a clean zero.
*/

/// Magnitudes below this are treated as zero by [`flush_denormal`].
pub const DENORMAL_THRESHOLD: f64 = 1e-30;

/// Replace a vanishingly small value with exact zero.
#[inline]
pub fn flush_denormal(value: f64) -> f64 {
    if value.abs() < DENORMAL_THRESHOLD {
        0.0
    } else {
        value
    }
}

/// First-order DC blocking high-pass.
#[derive(Debug, Clone, Copy)]
pub struct DcBlocker {
    x1: f64, // previous input
    y1: f64, // previous output
    coeff: f64,
}

impl Default for DcBlocker {
    fn default() -> Self {
        Self::new(0.995)
    }
}

impl DcBlocker {
    pub fn new(coeff: f64) -> Self {
        Self {
            x1: 0.0,
            y1: 0.0,
            coeff: coeff.clamp(0.0, 1.0 - f64::EPSILON),
        }
    }

    /// Pole radius for a corner frequency at a given sample rate.
    pub fn coefficient(cutoff_hz: f64, sample_rate: f64) -> f64 {
        (-TAU * cutoff_hz / sample_rate)
            .exp()
            .clamp(0.0, 1.0 - f64::EPSILON)
    }

    /// Recompute the pole. Filter memory is kept so a running signal does not
    /// click.
    pub fn set_cutoff(&mut self, cutoff_hz: f64, sample_rate: f64) {
        self.coeff = Self::coefficient(cutoff_hz, sample_rate);
    }

    #[inline]
    pub fn coeff(&self) -> f64 {
        self.coeff
    }

    #[inline]
    pub fn process(&mut self, sample: f64) -> f64 {
        let y = sample - self.x1 + self.coeff * self.y1;
        self.x1 = sample;
        self.y1 = y;
        y
    }

    pub fn render(&mut self, buffer: &mut [f64]) {
        for sample in buffer.iter_mut() {
            *sample = self.process(*sample);
        }
    }

    pub fn flush_denormals(&mut self) {
        self.x1 = flush_denormal(self.x1);
        self.y1 = flush_denormal(self.y1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mean(buffer: &[f64]) -> f64 {
        buffer.iter().sum::<f64>() / buffer.len() as f64
    }

    #[test]
    fn test_default_cutoff_pole() {
        let a = DcBlocker::coefficient(35.0, 44_100.0);
        assert!((a - 0.995).abs() < 1e-3, "a = {a}");
    }

    #[test]
    fn test_removes_constant_offset() {
        let mut dc = DcBlocker::new(DcBlocker::coefficient(35.0, 48_000.0));
        let mut buffer = vec![0.5; 48_000];
        dc.render(&mut buffer);

        // First sample passes, then decays to nothing
        assert_eq!(buffer[0], 0.5);
        assert!(buffer[47_999].abs() < 1e-6);
    }

    #[test]
    fn test_passes_audio_band() {
        let sr = 48_000.0;
        let mut dc = DcBlocker::new(DcBlocker::coefficient(35.0, sr));
        let mut buffer: Vec<f64> = (0..48_000)
            .map(|n| (TAU * 1_000.0 * n as f64 / sr).sin() + 0.3)
            .collect();
        dc.render(&mut buffer);

        let tail = &buffer[24_000..];
        let peak = tail.iter().fold(0.0f64, |acc, &x| acc.max(x.abs()));
        assert!(peak > 0.98 && peak < 1.02, "peak = {peak}");
        assert!(mean(tail).abs() < 1e-3);
    }

    #[test]
    fn test_set_cutoff_keeps_state() {
        let mut dc = DcBlocker::default();
        dc.process(1.0);
        let before = dc.process(1.0);
        dc.set_cutoff(20.0, 96_000.0);
        let after = dc.process(1.0);
        // Still decaying from the same state, no jump back to the input
        assert!(after < before);
        assert!(after > 0.0);
    }

    #[test]
    fn test_flush_denormal() {
        assert_eq!(flush_denormal(1e-35), 0.0);
        assert_eq!(flush_denormal(-1e-35), 0.0);
        assert_eq!(flush_denormal(0.25), 0.25);

        let mut dc = DcBlocker::default();
        dc.process(1e-200);
        dc.process(1e-300);
        dc.flush_denormals();
        assert_eq!(dc.process(0.0), 0.0);
    }
}
