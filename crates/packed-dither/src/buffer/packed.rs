//! Packed 16-bit-per-pixel buffers.

use super::check_len;
use crate::error::QuantizeError;
use crate::format::PackedFormat;

/// One 16-bit word per pixel, row-major, tagged with its bit layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackedBuffer {
    words: Vec<u16>,
    width: u32,
    height: u32,
    format: PackedFormat,
}

impl PackedBuffer {
    /// Wrap packed words.
    ///
    /// # Errors
    ///
    /// [`QuantizeError::BufferLengthMismatch`] if `words.len()` is not
    /// `width * height`.
    pub fn new(
        words: Vec<u16>,
        width: u32,
        height: u32,
        format: PackedFormat,
    ) -> Result<Self, QuantizeError> {
        check_len(words.len(), width, height, 1)?;
        Ok(Self {
            words,
            width,
            height,
            format,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn format(&self) -> PackedFormat {
        self.format
    }

    #[inline]
    pub fn words(&self) -> &[u16] {
        &self.words
    }

    /// Serialize as little-endian bytes, two per pixel.
    pub fn to_le_bytes(&self) -> Vec<u8> {
        self.words.iter().flat_map(|w| w.to_le_bytes()).collect()
    }
}
