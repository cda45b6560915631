pub mod config;
pub mod dsp;
pub mod error;
pub mod param; // Parameter binding, smoothing channels, cross-thread control
pub mod synth; // Block driver and host-facing control messages

pub use config::OscDescriptor;
pub use error::ConfigError;
pub use param::{Binding, Bindings, ControlHandle, Param};
pub use synth::message::ParamEvent;
pub use synth::oscillator::{render_offline, BlockInputs, WarpFoldOsc};

/// Largest block `render_offline` and the demo binary render in one pass.
pub const MAX_BLOCK_SIZE: usize = 2048;
