//! packed-dither: dithered quantization to 16-bit packed pixel formats
//!
//! This library reduces true-color RGBA8888 pixels to RGB565 or RGBA4444
//! while hiding the resulting banding with dithering noise, then expands
//! the packed words back to RGBA8888 so the loss can be inspected.
//!
//! # Quick Start
//!
//! The [`Quantizer`] builder is the primary entry point:
//!
//! ```
//! use packed_dither::{DitherAlgorithm, PixelBuffer, Quantizer};
//!
//! let pixels = vec![128u8; 2 * 2 * 4];
//! let source = PixelBuffer::new(pixels, 2, 2, 4).unwrap();
//!
//! let result = Quantizer::new()
//!     .algorithm(DitherAlgorithm::InterleavedGradient)
//!     .run(&source)
//!     .unwrap();
//!
//! assert_eq!(result.packed().words().len(), 4);
//! assert_eq!(result.preview().data().len(), 16);
//! ```
//!
//! # Pipeline
//!
//! ```text
//! RGB8 / RGBA8 source
//!     |
//!     v
//! RGBA8888                 (alpha = 255 for RGB input)
//!     |
//!     v
//! [Dither]                 (noise scaled to the target step, saturating)
//!     |
//!     v
//! RGB565 / RGBA4444        (truncate to top bits, pack)
//!     |
//!     v
//! RGBA8888 preview         (rounded expansion)
//! ```
//!
//! # Why Noise Before Truncation
//!
//! Truncating 8-bit channels to 4, 5 or 6 bits maps every run of 16, 8 or
//! 4 input values to one output value, so smooth gradients turn into
//! visible steps. Adding up to half a quantization step of noise per pixel
//! before truncating makes neighboring pixels land on different sides of
//! each step in proportion to where the true value lies between them. The
//! eye averages the pattern and the step edges disappear.
//!
//! Interleaved gradient noise is the default: it is cheap, has no visible
//! tiling and, with the green channel inverted, avoids colored grain on
//! greys. Bayer ordered dithering is available for its regular,
//! print-like pattern.

pub mod buffer;
pub mod dither;
pub mod error;
pub mod format;
pub mod noise;
pub mod pipeline;


pub use buffer::{Channels, PackedBuffer, PixelBuffer, RgbaBuffer};
pub use dither::{dither, DitherAlgorithm, DitherMode};
pub use error::QuantizeError;
pub use format::PackedFormat;
pub use noise::{gradient_noise, ThresholdMap};
pub use pipeline::{QuantizedImage, Quantizer, Stage};
