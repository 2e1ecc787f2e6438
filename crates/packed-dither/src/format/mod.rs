//! Bit-exact conversion between RGBA8888 and packed 16-bit formats.
//!
//! # Packing
//!
//! Encoding truncates each 8-bit channel to its top bits (right shift);
//! no rounding happens on the way down. Dithering noise added beforehand
//! is what turns that truncation into an unbiased quantizer.
//!
//! # Expansion
//!
//! Decoding maps an n-bit component `c` with maximum `m = 2^n - 1` to
//! `(c * 255 + m / 2) / m` in integer arithmetic: nearest-value expansion,
//! not bit replication or plain shifting. Expanding and re-packing returns
//! the original component exactly.
//!
//! | Format   | Layout (MSB → LSB)            | Alpha            |
//! |----------|-------------------------------|------------------|
//! | RGB565   | R 15-11, G 10-5, B 4-0        | dropped / 255    |
//! | RGBA4444 | R 15-12, G 11-8, B 7-4, A 3-0 | 4 bits           |

mod rgb565;
mod rgba4444;

use std::fmt;

pub use rgb565::{pack_rgb565, rgb565_to_rgba8888, rgba8888_to_rgb565, unpack_rgb565};
pub use rgba4444::{pack_rgba4444, rgba4444_to_rgba8888, rgba8888_to_rgba4444, unpack_rgba4444};

use crate::buffer::{PackedBuffer, RgbaBuffer};
use crate::error::QuantizeError;

/// Packed 16-bit pixel format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackedFormat {
    /// 5 bits red, 6 bits green, 5 bits blue, no alpha
    Rgb565,
    /// 4 bits each of red, green, blue and alpha
    Rgba4444,
}

impl PackedFormat {
    /// Bits per channel as `[r, g, b, a]`; alpha is 0 when not stored.
    pub fn channel_bits(self) -> [u32; 4] {
        match self {
            PackedFormat::Rgb565 => [5, 6, 5, 0],
            PackedFormat::Rgba4444 => [4, 4, 4, 4],
        }
    }

    /// Quantization step of each channel in 8-bit units, `256 >> bits`.
    ///
    /// Alpha reports 0 for formats that do not store it.
    pub fn quantization_steps(self) -> [u8; 4] {
        self.channel_bits()
            .map(|bits| if bits == 0 { 0 } else { (256u32 >> bits) as u8 })
    }

    /// Whether the format stores alpha.
    #[inline]
    pub fn has_alpha(self) -> bool {
        matches!(self, PackedFormat::Rgba4444)
    }
}

impl fmt::Display for PackedFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PackedFormat::Rgb565 => write!(f, "RGB565"),
            PackedFormat::Rgba4444 => write!(f, "RGBA4444"),
        }
    }
}

/// Expand an n-bit component to 8 bits with rounding.
///
/// `max` is the largest representable component (`2^n - 1`).
#[inline]
pub(crate) fn expand_channel(component: u32, max: u32) -> u8 {
    ((component * 255 + max / 2) / max) as u8
}

/// Pack an RGBA8888 buffer into the given format.
pub fn encode(image: &RgbaBuffer, format: PackedFormat) -> Result<PackedBuffer, QuantizeError> {
    let (width, height) = (image.width(), image.height());
    let mut words = vec![0u16; width as usize * height as usize];
    match format {
        PackedFormat::Rgb565 => rgba8888_to_rgb565(image.data(), &mut words, width, height)?,
        PackedFormat::Rgba4444 => rgba8888_to_rgba4444(image.data(), &mut words, width, height)?,
    }
    PackedBuffer::new(words, width, height, format)
}

/// Expand a packed buffer back to RGBA8888.
pub fn decode(packed: &PackedBuffer) -> Result<RgbaBuffer, QuantizeError> {
    let (width, height) = (packed.width(), packed.height());
    let mut data = vec![0u8; width as usize * height as usize * 4];
    match packed.format() {
        PackedFormat::Rgb565 => rgb565_to_rgba8888(packed.words(), &mut data, width, height)?,
        PackedFormat::Rgba4444 => rgba4444_to_rgba8888(packed.words(), &mut data, width, height)?,
    }
    RgbaBuffer::new(data, width, height)
}

/// Expand a packed buffer, insisting on a specific format.
///
/// # Errors
///
/// [`QuantizeError::FormatMismatch`] if the buffer carries another format.
pub fn decode_as(packed: &PackedBuffer, format: PackedFormat) -> Result<RgbaBuffer, QuantizeError> {
    if packed.format() != format {
        return Err(QuantizeError::FormatMismatch {
            expected: format,
            actual: packed.format(),
        });
    }
    decode(packed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quantization_steps() {
        assert_eq!(PackedFormat::Rgb565.quantization_steps(), [8, 4, 8, 0]);
        assert_eq!(PackedFormat::Rgba4444.quantization_steps(), [16, 16, 16, 16]);
    }

    #[test]
    fn test_expand_channel_endpoints() {
        for max in [15, 31, 63] {
            assert_eq!(expand_channel(0, max), 0);
            assert_eq!(expand_channel(max, max), 255);
        }
        // (16 * 255 + 15) / 31 = 132
        assert_eq!(expand_channel(16, 31), 132);
        // (8 * 255 + 7) / 15 = 136
        assert_eq!(expand_channel(8, 15), 136);
    }

    #[test]
    fn test_expand_then_pack_is_identity() {
        for (bits, max) in [(4u32, 15u32), (5, 31), (6, 63)] {
            for c in 0..=max {
                let expanded = expand_channel(c, max);
                assert_eq!(
                    (expanded >> (8 - bits)) as u32,
                    c,
                    "{}-bit component {} expanded to {}",
                    bits,
                    c,
                    expanded
                );
            }
        }
    }

    #[test]
    fn test_encode_decode_buffers() {
        let image = RgbaBuffer::from_fn(4, 3, |x, y| [(x * 60) as u8, (y * 100) as u8, 200, 77]);
        for format in [PackedFormat::Rgb565, PackedFormat::Rgba4444] {
            let packed = encode(&image, format).unwrap();
            assert_eq!(packed.format(), format);
            assert_eq!(packed.words().len(), 12);
            let decoded = decode(&packed).unwrap();
            assert_eq!(decoded.width(), 4);
            assert_eq!(decoded.height(), 3);
            // Second pass is lossless: decoded values are representable.
            let again = decode(&encode(&decoded, format).unwrap()).unwrap();
            assert_eq!(again, decoded);
        }
    }

    #[test]
    fn test_decode_as_rejects_other_format() {
        let packed = PackedBuffer::new(vec![0; 1], 1, 1, PackedFormat::Rgb565).unwrap();
        assert_eq!(
            decode_as(&packed, PackedFormat::Rgba4444),
            Err(QuantizeError::FormatMismatch {
                expected: PackedFormat::Rgba4444,
                actual: PackedFormat::Rgb565,
            })
        );
        assert!(decode_as(&packed, PackedFormat::Rgb565).is_ok());
    }

    #[test]
    fn test_display() {
        assert_eq!(PackedFormat::Rgb565.to_string(), "RGB565");
        assert_eq!(PackedFormat::Rgba4444.to_string(), "RGBA4444");
    }
}
