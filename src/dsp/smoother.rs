//! One-pole parameter smoothing.
//!
//! Every control value the oscillator reads goes through a [`Smoother`] so
//! that a jump in the target turns into an exponential glide instead of a
//! step. The glide time depends on where the target comes from: discrete
//! scalar updates get a slow coefficient, continuous signals a fast one.
//!
//! ```text
//! value += k × (target - value)
//! k      = 1 - exp(-1 / (time × sample_rate))
//! ```
//!
//! After `time` seconds the value has covered ~63% of the distance to the
//! target. With `time = 0` the coefficient is 1 and the value snaps.

use super::filter::flush_denormal;

/// Coefficient for a smoothing time in seconds at a given sample rate.
///
/// Non-positive or non-finite times return 1 (no smoothing). The result is
/// always in `(0, 1]`.
pub fn coefficient(time_secs: f64, sample_rate: f64) -> f64 {
    let valid_time = time_secs.is_finite() && time_secs > 0.0;
    let valid_rate = sample_rate.is_finite() && sample_rate > 0.0;
    if !valid_time || !valid_rate {
        return 1.0;
    }
    let k = 1.0 - (-1.0 / (time_secs * sample_rate)).exp();
    k.clamp(f64::EPSILON, 1.0)
}

#[derive(Debug, Clone, Copy)]
pub struct Smoother {
    value: f64,
    coeff: f64,
}

impl Default for Smoother {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl Smoother {
    /// Start at `initial` with no smoothing until a coefficient is set.
    pub fn new(initial: f64) -> Self {
        Self {
            value: initial,
            coeff: 1.0,
        }
    }

    /// Move one step toward `target` and return the new value.
    #[inline]
    pub fn next(&mut self, target: f64) -> f64 {
        self.value += self.coeff * (target - self.value);
        self.value
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[inline]
    pub fn coeff(&self) -> f64 {
        self.coeff
    }

    /// Replace the coefficient. Leaves the current value alone.
    pub fn set_coeff(&mut self, coeff: f64) {
        self.coeff = coeff.clamp(f64::EPSILON, 1.0);
    }

    pub fn flush_denormals(&mut self) {
        self.value = flush_denormal(self.value);
    }
}
