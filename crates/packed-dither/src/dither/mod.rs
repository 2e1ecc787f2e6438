//! Noise dithering ahead of packed-format quantization.
//!
//! The dither engine adds spatially structured noise to an RGBA8888
//! buffer so that the truncating pack in [`crate::format`] stops producing
//! bands. It never quantizes by itself: the output is still RGBA8888.
//!
//! # Algorithms
//!
//! - **Interleaved gradient noise** (default): one hash value per pixel,
//!   scaled to the quantization step of the target format, with the
//!   green channel inverted to decorrelate it from red and blue
//! - **Bayer 4x4 / 8x8**: ordered dithering with a tiled threshold map;
//!   all four channels share the threshold, which gives the cross-hatch
//!   pattern
//! - **None**: pass-through, for comparing against plain truncation
//!
//! Every algorithm is exposed as a pure per-pixel function and as a pure
//! buffer function returning a new [`RgbaBuffer`].

mod interleaved;
mod mode;
mod ordered;

pub use interleaved::{interleaved_gradient, interleaved_gradient_pixel, noise_offsets};
pub use mode::{DitherAlgorithm, DitherMode};
pub use ordered::{ordered, ordered_pixel};

use crate::buffer::RgbaBuffer;
use crate::error::QuantizeError;
use crate::noise::ThresholdMap;

/// Saturating add of a signed noise value to a channel byte.
#[inline]
pub(crate) fn add_noise(value: u8, noise: i8) -> u8 {
    (value as i16 + noise as i16).clamp(0, 255) as u8
}

/// Dither a buffer according to `mode`, returning a new buffer.
///
/// # Example
///
/// ```
/// use packed_dither::{dither, DitherAlgorithm, DitherMode, PackedFormat, RgbaBuffer};
///
/// let image = RgbaBuffer::from_fn(4, 4, |_, _| [128, 128, 128, 255]);
/// let mode = DitherMode::new(DitherAlgorithm::InterleavedGradient, PackedFormat::Rgba4444);
/// let dithered = dither(&image, mode).unwrap();
/// assert_eq!(dithered.width(), 4);
/// ```
pub fn dither(image: &RgbaBuffer, mode: DitherMode) -> Result<RgbaBuffer, QuantizeError> {
    match mode.algorithm {
        DitherAlgorithm::None => Ok(image.clone()),
        DitherAlgorithm::InterleavedGradient => Ok(interleaved_gradient(image, mode.format)),
        DitherAlgorithm::Bayer4 => Ok(ordered(image, ThresholdMap::shared(4)?)),
        DitherAlgorithm::Bayer8 => Ok(ordered(image, ThresholdMap::shared(8)?)),
    }
}
