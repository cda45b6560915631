//! Block driver: one warp-fold oscillator instance.
//!
//! ```text
//!   control thread                      audio thread
//!   ──────────────                      ────────────
//!   ControlHandle ──► SharedParams ──►  process_block
//!     set_fold()       (atomic cells)     │ take reset flag
//!     reset()                             │ flush denormals
//!                                         │ pick loop body for bindings
//!                                         ▼
//!                      per sample: read ─► smooth ─► Voice ─► DC blocker ─► out
//! ```
//!
//! Everything the audio thread touches is allocated in the constructor.
//! `process_block` never allocates, locks or logs.

use std::sync::Arc;

use crate::config::{validate_sample_rate, OscDescriptor};
use crate::dsp::filter::DcBlocker;
use crate::dsp::oscillator::Voice;
use crate::error::ConfigError;
use crate::param::{
    Bindings, ControlHandle, Param, ParamChannel, ParamInput, ScalarInput, SharedParams,
    SignalInput,
};
use crate::synth::message::{EventReceiver, ParamEvent};
use crate::MAX_BLOCK_SIZE;

/// Optional continuous inputs for one block.
///
/// A slice is only read if the matching channel is signal-bound and the slice
/// covers the whole output block.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlockInputs<'a> {
    pub frequency: Option<&'a [f64]>,
    pub fold: Option<&'a [f64]>,
    pub warp: Option<&'a [f64]>,
}

impl<'a> BlockInputs<'a> {
    pub fn with_frequency(mut self, signal: &'a [f64]) -> Self {
        self.frequency = Some(signal);
        self
    }

    pub fn with_fold(mut self, signal: &'a [f64]) -> Self {
        self.fold = Some(signal);
        self
    }

    pub fn with_warp(mut self, signal: &'a [f64]) -> Self {
        self.warp = Some(signal);
        self
    }
}

/// State the sample loop mutates.
#[derive(Debug, Clone)]
struct OscCore {
    voice: Voice,
    frequency: ParamChannel,
    fold: ParamChannel,
    warp: ParamChannel,
    dc: DcBlocker,
}

impl OscCore {
    fn new() -> Self {
        Self {
            voice: Voice::new(),
            frequency: ParamChannel::new(Param::Frequency),
            fold: ParamChannel::new(Param::Fold),
            warp: ParamChannel::new(Param::Warp),
            dc: DcBlocker::default(),
        }
    }

    fn channel(&self, param: Param) -> &ParamChannel {
        match param {
            Param::Frequency => &self.frequency,
            Param::Fold => &self.fold,
            Param::Warp => &self.warp,
        }
    }

    fn flush_denormals(&mut self) {
        self.frequency.flush_denormals();
        self.fold.flush_denormals();
        self.warp.flush_denormals();
        self.dc.flush_denormals();
    }

    #[inline]
    fn render<F, D, W>(
        &mut self,
        frequency: F,
        fold: D,
        warp: W,
        inv_sample_rate: f64,
        out: &mut [f64],
    ) where
        F: ParamInput,
        D: ParamInput,
        W: ParamInput,
    {
        for (i, sample) in out.iter_mut().enumerate() {
            let hz = self.frequency.next(frequency.at(i));
            let fold_amount = self.fold.next(fold.at(i));
            let warp_amount = self.warp.next(warp.at(i));

            let shaped = self
                .voice
                .next_sample(hz * inv_sample_rate, warp_amount, fold_amount);
            *sample = self.dc.process(shaped);
        }
    }
}

/// Phase-warping, wave-folding sine oscillator.
#[derive(Debug)]
pub struct WarpFoldOsc {
    descriptor: Arc<OscDescriptor>,
    shared: Arc<SharedParams>,
    sample_rate: Option<f64>,
    bindings: Bindings,
    core: OscCore,
}

impl Default for WarpFoldOsc {
    fn default() -> Self {
        Self::new()
    }
}

impl WarpFoldOsc {
    /// Unconfigured oscillator with the default descriptor. Renders silence
    /// until [`configure`](Self::configure) succeeds.
    pub fn new() -> Self {
        Self::from_parts(Arc::new(OscDescriptor::default()))
    }

    /// Share one validated descriptor between instances.
    pub fn with_descriptor(descriptor: Arc<OscDescriptor>) -> Result<Self, ConfigError> {
        if let Err(err) = descriptor.validate() {
            log::warn!("rejecting oscillator descriptor: {err}");
            return Err(err);
        }
        Ok(Self::from_parts(descriptor))
    }

    fn from_parts(descriptor: Arc<OscDescriptor>) -> Self {
        Self {
            descriptor,
            shared: Arc::new(SharedParams::default()),
            sample_rate: None,
            bindings: Bindings::default(),
            core: OscCore::new(),
        }
    }

    /// Set the sample rate and channel bindings.
    ///
    /// Recomputes every coefficient. Phase, smoothed values and scalar targets
    /// carry over, so reconfiguring a running oscillator does not click. On
    /// error the previous configuration stays in place.
    pub fn configure(&mut self, sample_rate: f64, bindings: Bindings) -> Result<(), ConfigError> {
        let sample_rate = match validate_sample_rate(sample_rate) {
            Ok(sr) => sr,
            Err(err) => {
                log::warn!("configure failed, keeping previous configuration: {err}");
                return Err(err);
            }
        };

        let descriptor = &*self.descriptor;
        let core = &mut self.core;
        core.frequency.configure(bindings.frequency, descriptor, sample_rate);
        core.fold.configure(bindings.fold, descriptor, sample_rate);
        core.warp.configure(bindings.warp, descriptor, sample_rate);
        core.dc.set_cutoff(descriptor.dc_cutoff_hz, sample_rate);

        self.sample_rate = Some(sample_rate);
        self.bindings = bindings;

        log::info!(
            "oscillator configured: {sample_rate} Hz, bindings {:?}, dc pole {:.5}",
            bindings,
            self.core.dc.coeff()
        );
        Ok(())
    }

    /// Handle for the control thread.
    pub fn control_handle(&self) -> ControlHandle {
        ControlHandle::new(Arc::clone(&self.shared))
    }

    /// Store a scalar target. The smoothed value glides toward it.
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

    /// Request a phase reset. Takes effect at the start of the next block.
    pub fn reset(&self) {
        self.shared.request_reset();
    }

    /// Apply every queued event. Call between blocks on the audio thread.
    pub fn drain_events<R: EventReceiver>(&mut self, rx: &mut R) -> usize {
        let mut applied = 0;
        while let Some(event) = rx.pop() {
            match event {
                ParamEvent::Scalar { param, value } => self.shared.set(param, value),
                ParamEvent::Reset => self.shared.request_reset(),
            }
            applied += 1;
        }
        applied
    }

    /// Render one block into `out`. The output length defines the block.
    pub fn process_block(&mut self, inputs: &BlockInputs<'_>, out: &mut [f64]) {
        let Some(sample_rate) = self.sample_rate else {
            out.fill(0.0);
            return;
        };

        if self.shared.take_reset() {
            self.core.voice.reset();
        }
        self.core.flush_denormals();

        let frames = out.len();
        let inv_sample_rate = 1.0 / sample_rate;
        let shared = &*self.shared;
        let core = &mut self.core;

        let frequency = self.bindings.frequency.select(inputs.frequency, frames);
        let fold = self.bindings.fold.select(inputs.fold, frames);
        let warp = self.bindings.warp.select(inputs.warp, frames);

        core.frequency.prepare(frequency.is_some());
        core.fold.prepare(fold.is_some());
        core.warp.prepare(warp.is_some());

        let scalar_frequency = ScalarInput(shared.cell(Param::Frequency));
        let scalar_fold = ScalarInput(shared.cell(Param::Fold));
        let scalar_warp = ScalarInput(shared.cell(Param::Warp));

        match (frequency, fold, warp) {
            (None, None, None) => {
                core.render(scalar_frequency, scalar_fold, scalar_warp, inv_sample_rate, out)
            }
            (Some(f), None, None) => {
                core.render(SignalInput(f), scalar_fold, scalar_warp, inv_sample_rate, out)
            }
            (None, Some(d), None) => {
                core.render(scalar_frequency, SignalInput(d), scalar_warp, inv_sample_rate, out)
            }
            (None, None, Some(w)) => {
                core.render(scalar_frequency, scalar_fold, SignalInput(w), inv_sample_rate, out)
            }
            (Some(f), Some(d), None) => {
                core.render(SignalInput(f), SignalInput(d), scalar_warp, inv_sample_rate, out)
            }
            (Some(f), None, Some(w)) => {
                core.render(SignalInput(f), scalar_fold, SignalInput(w), inv_sample_rate, out)
            }
            (None, Some(d), Some(w)) => {
                core.render(scalar_frequency, SignalInput(d), SignalInput(w), inv_sample_rate, out)
            }
            (Some(f), Some(d), Some(w)) => {
                core.render(SignalInput(f), SignalInput(d), SignalInput(w), inv_sample_rate, out)
            }
        }
    }

    pub fn phase(&self) -> f64 {
        self.core.voice.phase()
    }

    /// Current smoothed value of a channel.
    pub fn smoothed(&self, param: Param) -> f64 {
        self.core.channel(param).value()
    }

    /// Current scalar target of a channel.
    pub fn scalar(&self, param: Param) -> f64 {
        self.shared.get(param)
    }

    /// Per-sample smoothing coefficient a channel used in the last block.
    pub fn smoothing_coeff(&self, param: Param) -> f64 {
        self.core.channel(param).coeff()
    }

    pub fn bindings(&self) -> Bindings {
        self.bindings
    }

    pub fn sample_rate(&self) -> Option<f64> {
        self.sample_rate
    }

    pub fn descriptor(&self) -> &Arc<OscDescriptor> {
        &self.descriptor
    }
}

/// Render `frames` samples in blocks of at most `block_size`.
///
/// Input slices are indexed by absolute frame. A slice that ends early stops
/// feeding its channel from the first block it cannot cover.
pub fn render_offline(
    osc: &mut WarpFoldOsc,
    inputs: &BlockInputs<'_>,
    frames: usize,
    block_size: usize,
) -> Vec<f64> {
    let block_size = block_size.clamp(1, MAX_BLOCK_SIZE);
    let mut output = vec![0.0; frames];

    let mut start = 0;
    while start < frames {
        let end = (start + block_size).min(frames);
        let block = BlockInputs {
            frequency: inputs.frequency.and_then(|s| s.get(start..end)),
            fold: inputs.fold.and_then(|s| s.get(start..end)),
            warp: inputs.warp.and_then(|s| s.get(start..end)),
        };
        osc.process_block(&block, &mut output[start..end]);
        start = end;
    }

    output
}
