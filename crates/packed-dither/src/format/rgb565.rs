//! RGB565 packing and expansion.

use super::expand_channel;
use crate::buffer::check_len;
use crate::error::QuantizeError;

/// Pack one RGBA8888 pixel; alpha is discarded.
#[inline]
pub fn pack_rgb565(px: [u8; 4]) -> u16 {
    let r = ((px[0] >> 3) as u16 & 0x1f) << 11;
    let g = ((px[1] >> 2) as u16 & 0x3f) << 5;
    let b = (px[2] >> 3) as u16 & 0x1f;
    r | g | b
}

/// Expand one RGB565 word; alpha is always 255.
#[inline]
pub fn unpack_rgb565(c: u16) -> [u8; 4] {
    let r5 = (c as u32 >> 11) & 0x1f;
    let g6 = (c as u32 >> 5) & 0x3f;
    let b5 = c as u32 & 0x1f;
    [
        expand_channel(r5, 31),
        expand_channel(g6, 63),
        expand_channel(b5, 31),
        255,
    ]
}

/// Pack `width * height` RGBA8888 pixels from `src` into `dst`.
///
/// # Errors
///
/// [`QuantizeError::BufferLengthMismatch`] if either slice disagrees with
/// the geometry. Nothing is written in that case.
pub fn rgba8888_to_rgb565(
    src: &[u8],
    dst: &mut [u16],
    width: u32,
    height: u32,
) -> Result<(), QuantizeError> {
    check_len(src.len(), width, height, 4)?;
    check_len(dst.len(), width, height, 1)?;
    for (px, out) in src.chunks_exact(4).zip(dst.iter_mut()) {
        *out = pack_rgb565([px[0], px[1], px[2], px[3]]);
    }
    Ok(())
}

/// Expand `width * height` RGB565 words from `src` into RGBA8888 `dst`.
///
/// # Errors
///
/// [`QuantizeError::BufferLengthMismatch`] if either slice disagrees with
/// the geometry. Nothing is written in that case.
pub fn rgb565_to_rgba8888(
    src: &[u16],
    dst: &mut [u8],
    width: u32,
    height: u32,
) -> Result<(), QuantizeError> {
    check_len(src.len(), width, height, 1)?;
    check_len(dst.len(), width, height, 4)?;
    for (&c, out) in src.iter().zip(dst.chunks_exact_mut(4)) {
        out.copy_from_slice(&unpack_rgb565(c));
    }
    Ok(())
}
