//! dither16 - dithered RGB565 / RGBA4444 previews
//!
//! Loads a true-color PNG, quantizes it to a packed 16-bit format with
//! dithering and writes the expanded result back out as PNG.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
