//! Error types for color operations.
//!
//! Out-of-range values are not errors: they are reported through
//! [`RangeReport`](crate::RangeReport) and the edit still goes through.
//! Everything here means the edit was rejected and nothing was published.

use thiserror::Error;
use tint_core::Model;

/// Color operation error.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ColorError {
    /// An edited channel is NaN or infinite.
    #[error("invalid numeric input: {model}.{channel} = {value}")]
    InvalidNumericInput {
        /// Edited representation.
        model: Model,
        /// Offending channel name.
        channel: &'static str,
        /// Offending value.
        value: f64,
    },

    /// A conversion step produced a non-finite value from finite input.
    #[error("conversion produced a non-finite value at step {step}")]
    NonFiniteResult {
        /// Conversion step, e.g. `lab_to_xyz`.
        step: &'static str,
    },

    /// Hex color string could not be parsed.
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),

    /// Channel name does not belong to the representation.
    #[error("unknown channel {channel:?} for {model}")]
    UnknownChannel {
        /// Representation the lookup was made on.
        model: Model,
        /// Requested channel name.
        channel: String,
    },
}

/// Result type for color operations.
pub type ColorResult<T> = Result<T, ColorError>;
