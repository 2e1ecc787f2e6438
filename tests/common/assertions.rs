//! Assertion helpers for tests.

/// Assert every channel of every pixel is within `tolerance` of `expected`.
pub fn assert_pixels_near(pixels: &[u8], expected: [u8; 4], tolerance: i16) {
    for (i, px) in pixels.chunks_exact(4).enumerate() {
        for c in 0..4 {
            let diff = (px[c] as i16 - expected[c] as i16).abs();
            assert!(
                diff <= tolerance,
                "pixel {} channel {}: got {}, expected {} +/- {}",
                i,
                c,
                px[c],
                expected[c],
                tolerance
            );
        }
    }
}

/// Assert every red value is representable in 5 bits after rounded expansion.
pub fn assert_rgb565_levels(pixels: &[u8]) {
    for px in pixels.chunks_exact(4) {
        let r5 = (px[0] >> 3) as u32;
        assert_eq!(
            px[0] as u32,
            (r5 * 255 + 15) / 31,
            "red {} is not an RGB565 level",
            px[0]
        );
        assert_eq!(px[3], 255, "RGB565 preview must be opaque");
    }
}
