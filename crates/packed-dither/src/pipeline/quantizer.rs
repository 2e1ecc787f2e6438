//! Quantizer builder -- the primary entry point of the crate.

use super::Stage;
use crate::buffer::{Channels, PackedBuffer, PixelBuffer, RgbaBuffer};
use crate::dither::{dither, DitherAlgorithm, DitherMode};
use crate::error::QuantizeError;
use crate::format::{self, PackedFormat};

/// Quantizes true-color images to a packed 16-bit format with dithering.
///
/// # Defaults
///
/// - Algorithm: interleaved gradient noise
/// - Format: chosen from the source, RGBA4444 for 4-channel input and
///   RGB565 for 3-channel input
///
/// Configuration methods consume and return `self`; [`run`](Self::run)
/// takes `&self`, so one quantizer can process many images.
///
/// # Example
///
/// ```
/// use packed_dither::{PackedFormat, PixelBuffer, Quantizer};
///
/// let source = PixelBuffer::new(vec![255, 0, 0], 1, 1, 3).unwrap();
/// let result = Quantizer::new().run(&source).unwrap();
///
/// assert_eq!(result.mode().format, PackedFormat::Rgb565);
/// let px = result.preview().pixel(0, 0);
/// assert_eq!(px[3], 255);
/// assert!(px[0] >= 247);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Quantizer {
    algorithm: DitherAlgorithm,
    format: Option<PackedFormat>,
}

impl Quantizer {
    /// Create a quantizer with default settings.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the dithering algorithm.
    #[inline]
    pub fn algorithm(mut self, algorithm: DitherAlgorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Force a packed format; `None` selects it from the source channels.
    #[inline]
    pub fn format(mut self, format: Option<PackedFormat>) -> Self {
        self.format = format;
        self
    }

    /// Mode used for a source with the given channel layout.
    pub fn mode_for(&self, channels: Channels) -> DitherMode {
        let format = self.format.unwrap_or(match channels {
            Channels::Rgba => PackedFormat::Rgba4444,
            Channels::Rgb => PackedFormat::Rgb565,
        });
        DitherMode::new(self.algorithm, format)
    }

    /// Run normalize → dither → pack → expand.
    pub fn run(&self, source: &PixelBuffer) -> Result<QuantizedImage, QuantizeError> {
        self.run_observed(source, |_| {})
    }

    /// Like [`run`](Self::run), calling `observe` after each completed stage.
    pub fn run_observed(
        &self,
        source: &PixelBuffer,
        mut observe: impl FnMut(Stage),
    ) -> Result<QuantizedImage, QuantizeError> {
        let mode = self.mode_for(source.channels());

        let normalized = source.to_rgba();
        observe(Stage::Normalized);

        let dithered = dither(&normalized, mode)?;
        observe(Stage::Dithered);

        let packed = format::encode(&dithered, mode.format)?;
        observe(Stage::Quantized);

        let preview = format::decode(&packed)?;
        observe(Stage::Expanded);

        Ok(QuantizedImage {
            mode,
            packed,
            preview,
        })
    }
}

/// Result of a quantizer run.
#[derive(Debug, Clone)]
pub struct QuantizedImage {
    mode: DitherMode,
    packed: PackedBuffer,
    preview: RgbaBuffer,
}

impl QuantizedImage {
    /// Mode the image was processed with.
    #[inline]
    pub fn mode(&self) -> DitherMode {
        self.mode
    }

    /// Packed 16-bit words.
    #[inline]
    pub fn packed(&self) -> &PackedBuffer {
        &self.packed
    }

    /// Packed words expanded back to RGBA8888.
    #[inline]
    pub fn preview(&self) -> &RgbaBuffer {
        &self.preview
    }

    /// Take the preview buffer.
    #[inline]
    pub fn into_preview(self) -> RgbaBuffer {
        self.preview
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auto_format_selection() {
        let quantizer = Quantizer::new();
        assert_eq!(
            quantizer.mode_for(Channels::Rgba).format,
            PackedFormat::Rgba4444
        );
        assert_eq!(quantizer.mode_for(Channels::Rgb).format, PackedFormat::Rgb565);
        assert_eq!(
            quantizer.mode_for(Channels::Rgb).algorithm,
            DitherAlgorithm::InterleavedGradient
        );
    }

    #[test]
    fn test_forced_format() {
        let quantizer = Quantizer::new().format(Some(PackedFormat::Rgba4444));
        assert_eq!(
            quantizer.mode_for(Channels::Rgb).format,
            PackedFormat::Rgba4444
        );
    }

    #[test]
    fn test_stages_reported_in_order() {
        let source = PixelBuffer::new(vec![10; 2 * 2 * 4], 2, 2, 4).unwrap();
        let mut seen = Vec::new();
        Quantizer::new()
            .run_observed(&source, |stage| seen.push(stage))
            .unwrap();
        assert_eq!(
            seen,
            vec![
                Stage::Normalized,
                Stage::Dithered,
                Stage::Quantized,
                Stage::Expanded
            ]
        );
    }

    #[test]
    fn test_preview_matches_packed() {
        let source = PixelBuffer::new((0..48).map(|i| (i * 5) as u8).collect(), 4, 3, 4).unwrap();
        let result = Quantizer::new().run(&source).unwrap();
        let decoded = format::decode(result.packed()).unwrap();
        assert_eq!(&decoded, result.preview());
        assert_eq!(result.packed().words().len(), 12);
    }

    #[test]
    fn test_quantizer_reusable() {
        let source = PixelBuffer::new(vec![90; 5 * 5 * 3], 5, 5, 3).unwrap();
        let quantizer = Quantizer::new().algorithm(DitherAlgorithm::Bayer4);
        let a = quantizer.run(&source).unwrap();
        let b = quantizer.run(&source).unwrap();
        assert_eq!(a.packed(), b.packed());
    }

    #[test]
    fn test_forced_rgb565_drops_alpha() {
        let source = PixelBuffer::new(vec![200, 100, 50, 0], 1, 1, 4).unwrap();
        let result = Quantizer::new()
            .format(Some(PackedFormat::Rgb565))
            .run(&source)
            .unwrap();
        assert_eq!(result.preview().pixel(0, 0)[3], 255);
    }
}
