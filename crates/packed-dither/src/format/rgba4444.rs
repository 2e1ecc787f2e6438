//! RGBA4444 packing and expansion.

use super::expand_channel;
use crate::buffer::check_len;
use crate::error::QuantizeError;

/// Pack one RGBA8888 pixel into four nibbles.
#[inline]
pub fn pack_rgba4444(px: [u8; 4]) -> u16 {
    let r = ((px[0] >> 4) as u16) << 12;
    let g = ((px[1] >> 4) as u16) << 8;
    let b = ((px[2] >> 4) as u16) << 4;
    let a = (px[3] >> 4) as u16;
    r | g | b | a
}

/// Expand one RGBA4444 word.
#[inline]
pub fn unpack_rgba4444(c: u16) -> [u8; 4] {
    let c = c as u32;
    [
        expand_channel((c >> 12) & 0xf, 15),
        expand_channel((c >> 8) & 0xf, 15),
        expand_channel((c >> 4) & 0xf, 15),
        expand_channel(c & 0xf, 15),
    ]
}

/// Pack `width * height` RGBA8888 pixels from `src` into `dst`.
///
/// # Errors
///
/// [`QuantizeError::BufferLengthMismatch`] if either slice disagrees with
/// the geometry. Nothing is written in that case.
pub fn rgba8888_to_rgba4444(
    src: &[u8],
    dst: &mut [u16],
    width: u32,
    height: u32,
) -> Result<(), QuantizeError> {
    check_len(src.len(), width, height, 4)?;
    check_len(dst.len(), width, height, 1)?;
    for (px, out) in src.chunks_exact(4).zip(dst.iter_mut()) {
        *out = pack_rgba4444([px[0], px[1], px[2], px[3]]);
    }
    Ok(())
}

/// Expand `width * height` RGBA4444 words from `src` into RGBA8888 `dst`.
///
/// # Errors
///
/// [`QuantizeError::BufferLengthMismatch`] if either slice disagrees with
/// the geometry. Nothing is written in that case.
pub fn rgba4444_to_rgba8888(
    src: &[u16],
    dst: &mut [u8],
    width: u32,
    height: u32,
) -> Result<(), QuantizeError> {
    check_len(src.len(), width, height, 1)?;
    check_len(dst.len(), width, height, 4)?;
    for (&c, out) in src.iter().zip(dst.chunks_exact_mut(4)) {
        out.copy_from_slice(&unpack_rgba4444(c));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pack_nibble_order() {
        assert_eq!(pack_rgba4444([0xF0, 0xA0, 0x50, 0x10]), 0xFA51);
        assert_eq!(pack_rgba4444([0x0F, 0x0F, 0x0F, 0x0F]), 0x0000);
        assert_eq!(pack_rgba4444([255, 255, 255, 255]), 0xFFFF);
    }

    #[test]
    fn test_unpack_nibbles() {
        assert_eq!(unpack_rgba4444(0xF000), [255, 0, 0, 0]);
        assert_eq!(unpack_rgba4444(0x000F), [0, 0, 0, 255]);
        // 4-bit expansion is exact multiples of 17
        assert_eq!(unpack_rgba4444(0x8421), [136, 68, 34, 17]);
    }

    #[test]
    fn test_round_trip_error_bound() {
        for v in 0..=255u8 {
            let out = unpack_rgba4444(pack_rgba4444([v, v, v, v]));
            for c in out {
                let err = (c as i16 - v as i16).abs();
                assert!(err < 16, "{} -> {} (error {})", v, c, err);
            }
        }
    }

    #[test]
    fn test_buffer_conversion() {
        let src = [0x12, 0x34, 0x56, 0x78, 0xFF, 0xEE, 0xDD, 0xCC];
        let mut packed = [0u16; 2];
        rgba8888_to_rgba4444(&src, &mut packed, 1, 2).unwrap();
        assert_eq!(packed, [0x1357, 0xFEDC]);

        let mut rgba = [0u8; 8];
        rgba4444_to_rgba8888(&packed, &mut rgba, 1, 2).unwrap();
        assert_eq!(rgba, [17, 51, 85, 119, 255, 238, 221, 204]);
    }

    #[test]
    fn test_length_mismatch() {
        let mut dst = [0u16; 3];
        assert_eq!(
            rgba8888_to_rgba4444(&[0u8; 16], &mut dst, 2, 2),
            Err(QuantizeError::BufferLengthMismatch {
                expected: 4,
                actual: 3
            })
        );
        let mut out = [0u8; 16];
        assert!(rgba4444_to_rgba8888(&[0u16; 5], &mut out, 2, 2).is_err());
    }
}
