//! Pipeline driver: normalize, dither, pack, expand.
//!
//! [`Quantizer`] runs the core stages on a loaded [`PixelBuffer`] and
//! returns a [`QuantizedImage`] holding both the packed words and the
//! expanded RGBA8888 preview of what the packed format really shows.
//!
//! ```text
//! Loaded ─► Normalized ─► Dithered ─► Quantized ─► Expanded ─► Saved
//! ```
//!
//! Transitions are one-way. `Loaded` and `Saved` belong to the caller's
//! image I/O; the quantizer reports the four stages in between.
//!
//! [`PixelBuffer`]: crate::buffer::PixelBuffer

mod quantizer;

pub use quantizer::{QuantizedImage, Quantizer};

use std::fmt;

/// Pipeline state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Stage {
    /// Source pixels decoded (3 or 4 channels)
    Loaded,
    /// Converted to RGBA8888
    Normalized,
    /// Noise applied
    Dithered,
    /// Packed to 16 bits per pixel
    Quantized,
    /// Expanded back to RGBA8888
    Expanded,
    /// Preview persisted
    Saved,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Loaded => "loaded",
            Stage::Normalized => "normalized",
            Stage::Dithered => "dithered",
            Stage::Quantized => "quantized",
            Stage::Expanded => "expanded",
            Stage::Saved => "saved",
        };
        f.write_str(name)
    }
}
