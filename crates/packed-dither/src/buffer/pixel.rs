//! 8-bit-per-channel pixel buffers.

use super::check_len;
use crate::error::QuantizeError;

/// Channel layout of a source buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channels {
    /// Red, green, blue
    Rgb,
    /// Red, green, blue, alpha
    Rgba,
}

impl Channels {
    /// Layout for a raw channel count.
    ///
    /// # Errors
    ///
    /// [`QuantizeError::UnsupportedChannelCount`] for anything but 3 or 4.
    pub fn from_count(channels: usize) -> Result<Self, QuantizeError> {
        match channels {
            3 => Ok(Channels::Rgb),
            4 => Ok(Channels::Rgba),
            _ => Err(QuantizeError::UnsupportedChannelCount { channels }),
        }
    }

    /// Bytes per pixel.
    #[inline]
    pub fn count(self) -> usize {
        match self {
            Channels::Rgb => 3,
            Channels::Rgba => 4,
        }
    }
}

/// A source image: RGB8 or RGBA8, row-major.
///
/// # Example
///
/// ```
/// use packed_dither::{Channels, PixelBuffer};
///
/// let image = PixelBuffer::new(vec![255, 0, 0], 1, 1, 3).unwrap();
/// assert_eq!(image.channels(), Channels::Rgb);
///
/// let rgba = image.to_rgba();
/// assert_eq!(rgba.pixel(0, 0), [255, 0, 0, 255]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    data: Vec<u8>,
    width: u32,
    height: u32,
    channels: Channels,
}

impl PixelBuffer {
    /// Wrap raw pixel bytes.
    ///
    /// # Errors
    ///
    /// - [`QuantizeError::UnsupportedChannelCount`] if `channels` is not 3 or 4
    /// - [`QuantizeError::BufferLengthMismatch`] if `data.len()` is not
    ///   `width * height * channels`
    pub fn new(
        data: Vec<u8>,
        width: u32,
        height: u32,
        channels: usize,
    ) -> Result<Self, QuantizeError> {
        let channels = Channels::from_count(channels)?;
        check_len(data.len(), width, height, channels.count())?;
        Ok(Self {
            data,
            width,
            height,
            channels,
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
    pub fn channels(&self) -> Channels {
        self.channels
    }

    #[inline]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Normalize to RGBA8888.
    ///
    /// RGB pixels gain an opaque alpha of 255; RGBA data is copied as is.
    pub fn to_rgba(&self) -> RgbaBuffer {
        let data = match self.channels {
            Channels::Rgba => self.data.clone(),
            Channels::Rgb => {
                let mut out = Vec::with_capacity(self.data.len() / 3 * 4);
                for px in self.data.chunks_exact(3) {
                    out.extend_from_slice(&[px[0], px[1], px[2], 255]);
                }
                out
            }
        };
        RgbaBuffer {
            data,
            width: self.width,
            height: self.height,
        }
    }
}

/// Normalized RGBA8888 pixels, row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RgbaBuffer {
    data: Vec<u8>,
    width: u32,
    height: u32,
}

impl RgbaBuffer {
    /// Wrap raw RGBA8888 bytes.
    ///
    /// # Errors
    ///
    /// [`QuantizeError::BufferLengthMismatch`] if `data.len()` is not
    /// `width * height * 4`.
    pub fn new(data: Vec<u8>, width: u32, height: u32) -> Result<Self, QuantizeError> {
        check_len(data.len(), width, height, 4)?;
        Ok(Self {
            data,
            width,
            height,
        })
    }

    /// Build a buffer by evaluating `f(x, y)` for every pixel.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> [u8; 4]) -> Self {
        let mut data = Vec::with_capacity(width as usize * height as usize * 4);
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&f(x, y));
            }
        }
        Self {
            data,
            width,
            height,
        }
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
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }

    /// Pixel at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinates are outside the image.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        assert!(x < self.width && y < self.height, "pixel out of bounds");
        let i = (y as usize * self.width as usize + x as usize) * 4;
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    /// Apply a per-pixel transform `f(pixel, x, y)`, producing a new buffer.
    pub fn map_pixels(&self, mut f: impl FnMut([u8; 4], u32, u32) -> [u8; 4]) -> Self {
        let width = self.width as usize;
        let mut data = Vec::with_capacity(self.data.len());
        for (i, px) in self.data.chunks_exact(4).enumerate() {
            let x = (i % width) as u32;
            let y = (i / width) as u32;
            data.extend_from_slice(&f([px[0], px[1], px[2], px[3]], x, y));
        }
        Self {
            data,
            width: self.width,
            height: self.height,
        }
    }
}
