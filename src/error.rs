//! Control-path error types.
//!
//! Nothing in here is produced by the real-time path: block processing never
//! fails, it degrades to a safe signal instead.

use thiserror::Error;

/// Errors raised while (re)configuring an oscillator.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Sample rate was zero, negative, NaN or infinite.
    #[error("sample rate must be positive and finite, got {0}")]
    InvalidSampleRate(f64),

    /// A descriptor field is outside its valid range.
    #[error("invalid descriptor field `{field}`: {value}")]
    InvalidDescriptor {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
}
