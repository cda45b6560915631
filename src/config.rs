//! Immutable oscillator configuration.
//!
//! One `OscDescriptor` can be shared read-only (behind an `Arc`) by any number
//! of oscillator instances. Everything an instance mutates lives in the
//! instance itself.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Default smoothing time for scalar-bound parameters (seconds).
pub const DEFAULT_SCALAR_SMOOTHING_SECS: f64 = 0.020;
/// Default smoothing time for signal-bound parameters (seconds).
pub const DEFAULT_SIGNAL_SMOOTHING_SECS: f64 = 0.002;
/// Default DC blocker corner frequency (Hz). Gives a pole near 0.995 at 44.1 kHz.
pub const DEFAULT_DC_CUTOFF_HZ: f64 = 35.0;

/// Static tuning shared by oscillator instances.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OscDescriptor {
    /// Smoothing time used while a parameter follows discrete scalar updates.
    pub scalar_smoothing_secs: f64,
    /// Smoothing time used while a parameter follows a continuous signal.
    pub signal_smoothing_secs: f64,
    /// Corner frequency of the always-on DC blocker.
    pub dc_cutoff_hz: f64,
}

impl Default for OscDescriptor {
    fn default() -> Self {
        Self {
            scalar_smoothing_secs: DEFAULT_SCALAR_SMOOTHING_SECS,
            signal_smoothing_secs: DEFAULT_SIGNAL_SMOOTHING_SECS,
            dc_cutoff_hz: DEFAULT_DC_CUTOFF_HZ,
        }
    }
}

impl OscDescriptor {
    pub fn with_scalar_smoothing(mut self, secs: f64) -> Self {
        self.scalar_smoothing_secs = secs;
        self
    }

    pub fn with_signal_smoothing(mut self, secs: f64) -> Self {
        self.signal_smoothing_secs = secs;
        self
    }

    pub fn with_dc_cutoff(mut self, hz: f64) -> Self {
        self.dc_cutoff_hz = hz;
        self
    }

    /// Reject descriptors that would produce a degenerate filter.
    ///
    /// Smoothing times may be zero (no smoothing, k = 1) but not negative.
    /// The DC cutoff must be strictly positive.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let fields = [
            ("scalar_smoothing_secs", self.scalar_smoothing_secs, true),
            ("signal_smoothing_secs", self.signal_smoothing_secs, true),
            ("dc_cutoff_hz", self.dc_cutoff_hz, false),
        ];

        for (field, value, zero_ok) in fields {
            let in_range = if zero_ok { value >= 0.0 } else { value > 0.0 };
            if !value.is_finite() || !in_range {
                return Err(ConfigError::InvalidDescriptor { field, value });
            }
        }

        Ok(())
    }
}

/// Validate a host-provided sample rate.
pub fn validate_sample_rate(sample_rate: f64) -> Result<f64, ConfigError> {
    if sample_rate.is_finite() && sample_rate > 0.0 {
        Ok(sample_rate)
    } else {
        Err(ConfigError::InvalidSampleRate(sample_rate))
    }
}
