//! Interleaved gradient noise.
//!
//! From "Next Generation Post Processing in Call of Duty: Advanced Warfare"
//! (Jimenez, SIGGRAPH 2014). The hash constants are part of the output
//! contract: reference images are only reproduced bit-for-bit with these
//! exact `f32` values and truncating fractional parts.

/// Hash constants `[c1, c2, c3]`.
const MAGIC: [f32; 3] = [0.06711056, 0.00583715, 52.9829189];

/// Fractional part by truncation toward zero.
#[inline]
fn fract(v: f32) -> f32 {
    v - (v as i32) as f32
}

/// Interleaved gradient noise at pixel `(x, y)`.
///
/// Computes `frac(c3 * frac(x * c1 + y * c2))` in single precision.
/// The result lies in `[0, 1)` and depends only on the coordinates.
///
/// # Example
///
/// ```
/// use packed_dither::gradient_noise;
///
/// assert_eq!(gradient_noise(0, 0), 0.0);
/// let v = gradient_noise(17, 42);
/// assert!((0.0..1.0).contains(&v));
/// assert_eq!(v.to_bits(), gradient_noise(17, 42).to_bits());
/// ```
#[inline]
pub fn gradient_noise(x: u32, y: u32) -> f32 {
    let u = x as f32;
    let v = y as f32;
    fract(MAGIC[2] * fract(u * MAGIC[0] + v * MAGIC[1]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_is_zero() {
        assert_eq!(gradient_noise(0, 0), 0.0);
    }

    #[test]
    fn test_range() {
        for y in 0..128 {
            for x in 0..128 {
                let v = gradient_noise(x, y);
                assert!(
                    (0.0..1.0).contains(&v),
                    "noise at ({}, {}) out of range: {}",
                    x,
                    y,
                    v
                );
            }
        }
    }

    #[test]
    fn test_range_large_coordinates() {
        for &(x, y) in &[(65_535, 65_535), (1 << 20, 3), (u32::MAX, u32::MAX)] {
            let v = gradient_noise(x, y);
            assert!((0.0..1.0).contains(&v), "({}, {}) -> {}", x, y, v);
        }
    }

    #[test]
    fn test_deterministic_bits() {
        for y in 0..32 {
            for x in 0..32 {
                assert_eq!(
                    gradient_noise(x, y).to_bits(),
                    gradient_noise(x, y).to_bits()
                );
            }
        }
    }

    #[test]
    fn test_reference_bits() {
        // Bit patterns of the reference single-precision output
        let cases: [(u32, u32, u32); 5] = [
            (1, 0, 0x3f0e_433c),
            (0, 1, 0x3e9e_5889),
            (7, 3, 0x3f51_5b60),
            (17, 42, 0x3ee8_3380),
            (96, 60, 0x3be8_c000),
        ];
        for (x, y, bits) in cases {
            assert_eq!(
                gradient_noise(x, y).to_bits(),
                bits,
                "noise at ({}, {}) = {}",
                x,
                y,
                gradient_noise(x, y)
            );
        }
    }

    #[test]
    fn test_neighbors_differ() {
        // Not a constant field: horizontal neighbors decorrelate.
        let row: Vec<f32> = (0..16).map(|x| gradient_noise(x, 5)).collect();
        let distinct = row
            .windows(2)
            .filter(|w| (w[0] - w[1]).abs() > 1e-3)
            .count();
        assert!(distinct >= 12, "too few distinct neighbors: {}", distinct);
    }

    #[test]
    fn test_fract_truncates() {
        assert_eq!(fract(2.75), 0.75);
        assert_eq!(fract(0.0), 0.0);
        assert_eq!(fract(-1.25), -0.25);
    }
}
