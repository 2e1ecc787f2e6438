//! PNG loading and saving.
//!
//! Loading normalizes every PNG to 8 bits per sample: palette and
//! low-bit-depth images are expanded, 16-bit samples are stripped. The
//! resulting channel count is handed to [`PixelBuffer`], which accepts only
//! RGB and RGBA.

use crate::error::AppError;
use packed_dither::{PixelBuffer, RgbaBuffer};
use std::fs::File;
use std::io::{BufReader, Cursor};
use std::path::Path;

/// Decode a PNG file into a source pixel buffer.
pub fn load_png(path: &Path) -> Result<PixelBuffer, AppError> {
    let load_err = |reason: String| AppError::ImageLoad {
        path: path.to_path_buf(),
        reason,
    };

    let file = File::open(path).map_err(|e| load_err(e.to_string()))?;
    let mut decoder = png::Decoder::new(BufReader::new(file));
    decoder.set_transformations(png::Transformations::EXPAND | png::Transformations::STRIP_16);
    let mut reader = decoder.read_info().map_err(|e| load_err(e.to_string()))?;

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| load_err(e.to_string()))?;
    buf.truncate(info.buffer_size());

    let channels = info.color_type.samples();
    tracing::debug!(
        path = %path.display(),
        width = info.width,
        height = info.height,
        channels,
        "Decoded PNG"
    );

    Ok(PixelBuffer::new(buf, info.width, info.height, channels)?)
}

/// Encode an RGBA8888 buffer as a PNG in memory.
pub fn encode_png(image: &RgbaBuffer) -> Result<Vec<u8>, AppError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, image.width(), image.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        let mut writer = encoder
            .write_header()
            .map_err(|e| AppError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(image.data())
            .map_err(|e| AppError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}
