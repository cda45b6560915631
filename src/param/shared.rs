use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;

use super::Param;
use crate::synth::message::ParamEvent;

/// An `f64` that can be written from one thread and read from another
/// without locking. Loads never observe a torn value.
#[derive(Debug, Default)]
pub struct ScalarCell(AtomicU64);

impl ScalarCell {
    pub fn new(value: f64) -> Self {
        Self(AtomicU64::new(value.to_bits()))
    }

    #[inline]
    pub fn load(&self) -> f64 {
        f64::from_bits(self.0.load(Ordering::Relaxed))
    }

    #[inline]
    pub fn store(&self, value: f64) {
        self.0.store(value.to_bits(), Ordering::Relaxed);
    }
}

/// Scalar targets and the deferred reset flag of one oscillator.
#[derive(Debug)]
pub struct SharedParams {
    frequency: ScalarCell,
    fold: ScalarCell,
    warp: ScalarCell,
    reset_requested: AtomicBool,
}

impl Default for SharedParams {
    fn default() -> Self {
        Self {
            frequency: ScalarCell::new(Param::Frequency.default_value()),
            fold: ScalarCell::new(Param::Fold.default_value()),
            warp: ScalarCell::new(Param::Warp.default_value()),
            reset_requested: AtomicBool::new(false),
        }
    }
}

impl SharedParams {
    #[inline]
    pub fn cell(&self, param: Param) -> &ScalarCell {
        match param {
            Param::Frequency => &self.frequency,
            Param::Fold => &self.fold,
            Param::Warp => &self.warp,
        }
    }

    /// Clamp and store a scalar target.
    pub fn set(&self, param: Param, value: f64) {
        self.cell(param).store(param.sanitize(value));
    }

    pub fn get(&self, param: Param) -> f64 {
        self.cell(param).load()
    }

    pub fn request_reset(&self) {
        self.reset_requested.store(true, Ordering::Release);
    }

    /// Consume a pending reset request.
    #[inline]
    pub fn take_reset(&self) -> bool {
        self.reset_requested.swap(false, Ordering::Acquire)
    }
}

/// Control-thread handle to one oscillator's scalar targets.
///
/// Cloning is cheap. Every method is wait-free and safe to call while the
/// audio thread is inside `process_block`.
#[derive(Debug, Clone)]
pub struct ControlHandle {
    shared: Arc<SharedParams>,
}

impl ControlHandle {
    pub(crate) fn new(shared: Arc<SharedParams>) -> Self {
        Self { shared }
    }

    pub fn set_scalar(&self, param: Param, value: f64) {
        self.shared.set(param, value);
    }

    pub fn set_frequency(&self, hz: f64) {
        self.set_scalar(Param::Frequency, hz);
    }

    pub fn set_fold(&self, fold: f64) {
        self.set_scalar(Param::Fold, fold);
    }

    pub fn set_warp(&self, warp: f64) {
        self.set_scalar(Param::Warp, warp);
    }

    /// Request a phase reset at the start of the next block.
    pub fn reset(&self) {
        self.shared.request_reset();
    }

    /// Apply an event immediately.
    pub fn send(&self, event: ParamEvent) {
        match event {
            ParamEvent::Scalar { param, value } => self.set_scalar(param, value),
            ParamEvent::Reset => self.reset(),
        }
    }

    /// Last stored scalar target (already clamped).
    pub fn scalar(&self, param: Param) -> f64 {
        self.shared.get(param)
    }
}
