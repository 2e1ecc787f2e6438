use packed_dither::QuantizeError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Failed to load '{}': {reason}", .path.display())]
    ImageLoad { path: PathBuf, reason: String },

    #[error("Failed to write '{}': {reason}", .path.display())]
    ImageWrite { path: PathBuf, reason: String },

    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Quantize error: {0}")]
    Quantize(#[from] QuantizeError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
