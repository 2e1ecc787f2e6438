pub mod converter;

pub use converter::{default_output_path, with_suffix, ConvertReport, Converter, PREVIEW_SUFFIX};
