// Purpose: the block driver and the messages that steer it
// This layer sits above the dsp primitives and owns all per-instance state

pub mod message;
pub mod oscillator;
