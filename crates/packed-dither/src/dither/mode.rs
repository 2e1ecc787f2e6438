//! Dither mode selection.

use std::fmt;
use std::str::FromStr;

use crate::format::PackedFormat;

/// Dithering algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DitherAlgorithm {
    /// No noise; plain truncating quantization.
    None,
    /// Ordered dithering with the 4x4 Bayer matrix.
    Bayer4,
    /// Ordered dithering with the 8x8 Bayer matrix.
    Bayer8,
    /// Interleaved gradient noise scaled to the target format.
    #[default]
    InterleavedGradient,
}

impl fmt::Display for DitherAlgorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DitherAlgorithm::None => "none",
            DitherAlgorithm::Bayer4 => "bayer4",
            DitherAlgorithm::Bayer8 => "bayer8",
            DitherAlgorithm::InterleavedGradient => "ign",
        };
        f.write_str(name)
    }
}

impl FromStr for DitherAlgorithm {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(DitherAlgorithm::None),
            "bayer4" => Ok(DitherAlgorithm::Bayer4),
            "bayer8" | "bayer" => Ok(DitherAlgorithm::Bayer8),
            "auto" | "ign" | "interleaved-gradient" => Ok(DitherAlgorithm::InterleavedGradient),
            _ => Err(format!("unknown dither algorithm '{}'", s)),
        }
    }
}

/// An algorithm paired with the packed format it prepares for.
///
/// The format sets the noise amplitude for interleaved gradient noise and
/// which channels receive it; ordered dithering scales by matrix order
/// only.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DitherMode {
    pub algorithm: DitherAlgorithm,
    pub format: PackedFormat,
}

impl DitherMode {
    #[inline]
    pub fn new(algorithm: DitherAlgorithm, format: PackedFormat) -> Self {
        Self { algorithm, format }
    }
}

impl fmt::Display for DitherMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.algorithm, self.format)
    }
}
