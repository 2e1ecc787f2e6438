//! Test fixtures: small PNG images written to temporary directories.

use std::fs::File;
use std::path::{Path, PathBuf};

/// Write an 8-bit PNG with the given color type.
pub fn write_png(path: &Path, color: png::ColorType, width: u32, height: u32, data: &[u8]) {
    let file = File::create(path).expect("create fixture");
    let mut encoder = png::Encoder::new(file, width, height);
    encoder.set_color(color);
    encoder.set_depth(png::BitDepth::Eight);
    let mut writer = encoder.write_header().expect("png header");
    writer.write_image_data(data).expect("png data");
}

/// 2x2 RGBA image, every pixel (128, 128, 128, 255).
pub fn grey_rgba_2x2(dir: &Path) -> PathBuf {
    let path = dir.join("grey.png");
    write_png(
        &path,
        png::ColorType::Rgba,
        2,
        2,
        &[128, 128, 128, 255].repeat(4),
    );
    path
}

/// 1x1 RGB image, pure red.
pub fn red_rgb_1x1(dir: &Path) -> PathBuf {
    let path = dir.join("red.png");
    write_png(&path, png::ColorType::Rgb, 1, 1, &[255, 0, 0]);
    path
}

/// Horizontal RGB gradient, 0..=255 across `width` pixels.
pub fn gradient_rgb(dir: &Path, width: u32, height: u32) -> PathBuf {
    let path = dir.join("gradient.png");
    let mut data = Vec::with_capacity((width * height * 3) as usize);
    for _ in 0..height {
        for x in 0..width {
            let v = (x * 255 / (width - 1)) as u8;
            data.extend_from_slice(&[v, v, v]);
        }
    }
    write_png(&path, png::ColorType::Rgb, width, height, &data);
    path
}

/// 2x2 grayscale image (one channel, unsupported by the pipeline).
pub fn grey_luma(dir: &Path) -> PathBuf {
    let path = dir.join("luma.png");
    write_png(&path, png::ColorType::Grayscale, 2, 2, &[0, 85, 170, 255]);
    path
}

/// Decode an RGBA PNG into (width, height, pixels).
pub fn read_rgba(path: &Path) -> (u32, u32, Vec<u8>) {
    let decoder = png::Decoder::new(File::open(path).expect("open output"));
    let mut reader = decoder.read_info().expect("png info");
    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut buf).expect("png frame");
    assert_eq!(info.color_type, png::ColorType::Rgba, "output must be RGBA");
    assert_eq!(info.bit_depth, png::BitDepth::Eight, "output must be 8-bit");
    buf.truncate(info.buffer_size());
    (info.width, info.height, buf)
}
