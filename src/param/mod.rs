//! Parameter channels and how they are fed.
//!
//! Each of the three controls (frequency, fold, warp) is fed either by a
//! continuous signal slice or by the last scalar the control thread wrote.
//! Which one is decided by [`Bindings`] at configuration time; the block
//! driver turns that choice into a concrete [`ParamInput`] type once per block.

/// Per-channel smoothing state.
pub mod channel;
/// Per-sample accessors for signal and scalar sources.
pub mod input;
/// Atomic cells shared with the control thread.
pub mod shared;

pub use channel::ParamChannel;
pub use input::{ParamInput, ScalarInput, SignalInput};
pub use shared::{ControlHandle, ScalarCell, SharedParams};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Largest frequency magnitude (Hz) a channel stores.
///
/// Any two values in `[-MAX_FREQUENCY, MAX_FREQUENCY]` differ by a finite
/// amount, so the smoother's `target - value` cannot overflow.
pub const MAX_FREQUENCY: f64 = f64::MAX / 4.0;

#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Param {
    Frequency,
    Fold,
    Warp,
}

impl Param {
    /// Bring an arbitrary value into this parameter's legal range.
    #[inline]
    pub fn sanitize(self, value: f64) -> f64 {
        match self {
            Param::Frequency => sanitize_frequency(value),
            Param::Fold => sanitize_fold(value),
            Param::Warp => sanitize_warp(value),
        }
    }

    /// Neutral starting value.
    pub fn default_value(self) -> f64 {
        0.0
    }
}

/// NaN becomes 0; infinities and values near `f64::MAX` are clamped into
/// `[-MAX_FREQUENCY, MAX_FREQUENCY]`. Ordinary finite values pass unchanged.
#[inline]
pub fn sanitize_frequency(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(-MAX_FREQUENCY, MAX_FREQUENCY)
    }
}

/// NaN becomes 0; everything else is clamped into `[0, 1]`.
#[inline]
pub fn sanitize_fold(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// NaN becomes 0; everything else is clamped into `[-1, 1]`.
#[inline]
pub fn sanitize_warp(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(-1.0, 1.0)
    }
}

/// Where a channel reads its target from.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Binding {
    /// Last scalar written through the control handle.
    #[default]
    Scalar,
    /// Continuous per-sample input slice.
    Signal,
}

impl Binding {
    pub fn from_connected(connected: bool) -> Self {
        if connected {
            Binding::Signal
        } else {
            Binding::Scalar
        }
    }

    /// Pick the signal slice for this block, if this channel should use one.
    ///
    /// A signal-bound channel whose slice is missing or shorter than the block
    /// falls back to its scalar for this block only, smoothed at the scalar
    /// rate.
    #[inline]
    pub fn select(self, input: Option<&[f64]>, frames: usize) -> Option<&[f64]> {
        match (self, input) {
            (Binding::Signal, Some(signal)) if signal.len() >= frames => Some(&signal[..frames]),
            _ => None,
        }
    }
}

/// Binding of all three channels.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Bindings {
    pub frequency: Binding,
    pub fold: Binding,
    pub warp: Binding,
}

impl Bindings {
    /// Every channel reads its scalar.
    pub fn scalar() -> Self {
        Self::default()
    }

    /// Build from the host's "has a continuous source" flags.
    pub fn from_connections(frequency: bool, fold: bool, warp: bool) -> Self {
        Self {
            frequency: Binding::from_connected(frequency),
            fold: Binding::from_connected(fold),
            warp: Binding::from_connected(warp),
        }
    }

    pub fn get(&self, param: Param) -> Binding {
        match param {
            Param::Frequency => self.frequency,
            Param::Fold => self.fold,
            Param::Warp => self.warp,
        }
    }

    pub fn with(mut self, param: Param, binding: Binding) -> Self {
        match param {
            Param::Frequency => self.frequency = binding,
            Param::Fold => self.fold = binding,
            Param::Warp => self.warp = binding,
        }
        self
    }
}
