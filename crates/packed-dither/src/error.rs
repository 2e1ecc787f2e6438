//! Unified error type for the packed-dither crate.
//!
//! Every failure in the crate is a precondition violation: the caller
//! handed in a size, buffer or channel layout the pipeline cannot process.
//! Nothing is retried and no output is produced on failure.

use std::fmt;

use crate::format::PackedFormat;

/// Error type for all fallible operations in the crate.
///
/// # Example
///
/// ```
/// use packed_dither::{QuantizeError, ThresholdMap};
///
/// let err = ThresholdMap::new(3).unwrap_err();
/// assert_eq!(err, QuantizeError::UnsupportedMatrixSize { order: 3 });
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuantizeError {
    /// Threshold map requested for an order other than 4 or 8
    UnsupportedMatrixSize {
        /// Requested matrix order
        order: usize,
    },
    /// Buffer length disagrees with width x height x channels
    BufferLengthMismatch {
        /// Length implied by the image geometry
        expected: usize,
        /// Length actually supplied
        actual: usize,
    },
    /// Source image has neither 3 nor 4 channels
    UnsupportedChannelCount {
        /// Channel count reported by the source
        channels: usize,
    },
    /// Packed buffer is tagged with a different format than requested
    FormatMismatch {
        /// Format the operation expects
        expected: PackedFormat,
        /// Format the buffer carries
        actual: PackedFormat,
    },
}

impl fmt::Display for QuantizeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QuantizeError::UnsupportedMatrixSize { order } => {
                write!(
                    f,
                    "unsupported threshold map order {} (expected 4 or 8)",
                    order
                )
            }
            QuantizeError::BufferLengthMismatch { expected, actual } => {
                write!(
                    f,
                    "buffer length mismatch: expected {} elements, got {}",
                    expected, actual
                )
            }
            QuantizeError::UnsupportedChannelCount { channels } => {
                write!(
                    f,
                    "unsupported channel count {} (expected 3 or 4)",
                    channels
                )
            }
            QuantizeError::FormatMismatch { expected, actual } => {
                write!(
                    f,
                    "packed format mismatch: expected {}, got {}",
                    expected, actual
                )
            }
        }
    }
}

impl std::error::Error for QuantizeError {}
