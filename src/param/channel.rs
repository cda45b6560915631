use super::{Binding, Param};
use crate::config::OscDescriptor;
use crate::dsp::smoother::{coefficient, Smoother};

/// Smoothing state for one parameter.
///
/// The coefficient follows the source the channel reads in the current
/// block: scalar targets glide slowly across discrete jumps, signal targets
/// are tracked closely. A signal-bound channel that falls back to its scalar
/// for a block uses the scalar coefficient for that block. The smoothed value
/// persists across blocks and reconfiguration.
#[derive(Debug, Clone, Copy)]
pub struct ParamChannel {
    param: Param,
    smoother: Smoother,
    scalar_coeff: f64,
    signal_coeff: f64,
}

impl ParamChannel {
    pub fn new(param: Param) -> Self {
        Self {
            param,
            smoother: Smoother::new(param.default_value()),
            scalar_coeff: 1.0,
            signal_coeff: 1.0,
        }
    }

    /// Compute both coefficients at `sample_rate` and start on the one for
    /// `binding`.
    pub fn configure(&mut self, binding: Binding, descriptor: &OscDescriptor, sample_rate: f64) {
        self.scalar_coeff = coefficient(descriptor.scalar_smoothing_secs, sample_rate);
        self.signal_coeff = coefficient(descriptor.signal_smoothing_secs, sample_rate);
        self.prepare(binding == Binding::Signal);
    }

    /// Select the coefficient for the source this block reads.
    #[inline]
    pub fn prepare(&mut self, reads_signal: bool) {
        let coeff = if reads_signal {
            self.signal_coeff
        } else {
            self.scalar_coeff
        };
        self.smoother.set_coeff(coeff);
    }

    /// Sanitize `target` and take one smoothing step toward it.
    #[inline]
    pub fn next(&mut self, target: f64) -> f64 {
        self.smoother.next(self.param.sanitize(target))
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.smoother.value()
    }

    #[inline]
    pub fn coeff(&self) -> f64 {
        self.smoother.coeff()
    }

    pub fn flush_denormals(&mut self) {
        self.smoother.flush_denormals();
    }
}
