//! Interleaved gradient noise dithering.
//!
//! One noise value `rnd` in `[0, 1)` per pixel, turned into a signed byte
//! offset of one quantization step of the target format:
//!
//! | Target   | R             | G                   | B             | A             |
//! |----------|---------------|---------------------|---------------|---------------|
//! | RGBA4444 | `rnd*16 - 8`  | `(1-rnd)*16 - 8`    | `rnd*16 - 8`  | `rnd*16 - 8`  |
//! | RGB565   | `rnd*8 - 4`   | `(1-rnd)*4 - 2`     | `rnd*8 - 4`   | untouched     |
//!
//! The inverted green term follows Mikkel Gjøl's banding shadertoy: it
//! decorrelates the green noise from red and blue. It is intentional.
//! Offsets truncate toward zero when converted to integers.

use super::add_noise;
use crate::buffer::RgbaBuffer;
use crate::format::PackedFormat;
use crate::noise::gradient_noise;

/// Signed per-channel offsets `[r, g, b, a]` for noise value `rnd`.
#[inline]
pub fn noise_offsets(rnd: f32, format: PackedFormat) -> [i8; 4] {
    let [step_r, step_g, step_b, step_a] = format.quantization_steps();
    let offset = |t: f32, step: u8| -> i8 {
        if step == 0 {
            return 0;
        }
        let bias = (step / 2) as f32;
        (t * step as f32 - bias) as i8
    };
    [
        offset(rnd, step_r),
        offset(1.0 - rnd, step_g),
        offset(rnd, step_b),
        offset(rnd, step_a),
    ]
}

/// Dither one pixel at `(x, y)` for the given target format.
#[inline]
pub fn interleaved_gradient_pixel(px: [u8; 4], x: u32, y: u32, format: PackedFormat) -> [u8; 4] {
    let noise = noise_offsets(gradient_noise(x, y), format);
    [
        add_noise(px[0], noise[0]),
        add_noise(px[1], noise[1]),
        add_noise(px[2], noise[2]),
        add_noise(px[3], noise[3]),
    ]
}

/// Dither a buffer with interleaved gradient noise for `format`.
pub fn interleaved_gradient(image: &RgbaBuffer, format: PackedFormat) -> RgbaBuffer {
    image.map_pixels(|px, x, y| interleaved_gradient_pixel(px, x, y, format))
}
