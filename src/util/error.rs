//! Error types for digitmatch.
//!
//! Every variant is an input-contract violation: none of them is transient,
//! so callers report the message and abort the classification attempt.

use thiserror::Error;

/// Result alias for digitmatch operations.
pub type DigitMatchResult<T> = std::result::Result<T, DigitMatchError>;

/// Errors that can occur while loading or classifying a cell.
#[derive(Debug, Error, PartialEq)]
pub enum DigitMatchError {
    /// A cell dimension lies outside the range the segmentation stage
    /// guarantees.
    #[error("invalid cell {name}: {value} (accepted {min}..={max})")]
    InvalidDimension {
        name: &'static str,
        value: usize,
        min: usize,
        max: usize,
    },
    /// The pixel payload does not hold exactly `width * height` bytes.
    #[error("pixel buffer holds {got} bytes, expected {expected} for a {width}x{height} cell")]
    SizeMismatch {
        expected: usize,
        got: usize,
        width: usize,
        height: usize,
    },
    /// A supplied acceptance threshold lies outside [0.05, 1.0].
    #[error("threshold {index} out of range: {value} (accepted 0.05..=1.0)")]
    ThresholdOutOfRange { index: usize, value: f64 },
    /// The cell input or report sink could not be acquired.
    #[error("cannot acquire {context}: {reason}")]
    ResourceUnavailable {
        context: &'static str,
        reason: String,
    },
}
