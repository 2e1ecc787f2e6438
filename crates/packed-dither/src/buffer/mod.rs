//! Pixel buffer types.
//!
//! Three validated, row-major buffer types carry image data between the
//! pipeline stages:
//!
//! - [`PixelBuffer`]: source pixels, 3 (RGB) or 4 (RGBA) 8-bit channels
//! - [`RgbaBuffer`]: normalized RGBA8888 pixels, the working format of the
//!   dither engine and codec
//! - [`PackedBuffer`]: one 16-bit word per pixel in a [`PackedFormat`]
//!
//! Constructors check `len == width * height * channels`, so every
//! downstream transform can rely on the geometry.
//!
//! [`PackedFormat`]: crate::format::PackedFormat

mod packed;
mod pixel;

pub use packed::PackedBuffer;
pub use pixel::{Channels, PixelBuffer, RgbaBuffer};

use crate::error::QuantizeError;

/// Check that `actual` equals `width * height * per_pixel`.
pub(crate) fn check_len(
    actual: usize,
    width: u32,
    height: u32,
    per_pixel: usize,
) -> Result<(), QuantizeError> {
    let expected = (width as usize)
        .saturating_mul(height as usize)
        .saturating_mul(per_pixel);
    if actual != expected {
        return Err(QuantizeError::BufferLengthMismatch { expected, actual });
    }
    Ok(())
}
