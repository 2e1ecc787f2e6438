//! Ordered (Bayer) dithering.
//!
//! Each channel moves by `step * m`, where `m` is the centered threshold
//! at the pixel and `step = 255 / n` for a matrix of order `n`. The same
//! `m` is applied to R, G, B and A.

use crate::buffer::RgbaBuffer;
use crate::noise::ThresholdMap;

/// Dither one pixel with threshold `m` and amplitude `step`.
///
/// Every channel becomes `clamp(round(v + step * m), 0, 255)`.
#[inline]
pub fn ordered_pixel(px: [u8; 4], m: f32, step: f32) -> [u8; 4] {
    px.map(|v| (v as f32 + step * m).clamp(0.0, 255.0).round() as u8)
}

/// Ordered-dither a buffer with the given threshold map.
pub fn ordered(image: &RgbaBuffer, map: &ThresholdMap) -> RgbaBuffer {
    let step = 255.0f32 / map.order() as f32;
    image.map_pixels(|px, x, y| ordered_pixel(px, map.threshold_at(x, y), step))
}
