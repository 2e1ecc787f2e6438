use crate::error::AppError;
use crate::rendering::{encode_png, load_png};
use packed_dither::{DitherMode, Quantizer, Stage};
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Suffix appended to the input file name for the default preview path
pub const PREVIEW_SUFFIX: &str = ".dither.png";

/// Default preview path: the full input name with [`PREVIEW_SUFFIX`] appended.
///
/// `photo.png` becomes `photo.png.dither.png`.
pub fn default_output_path(input: &Path) -> PathBuf {
    with_suffix(input, PREVIEW_SUFFIX)
}

/// Append `suffix` to the final component of `path`.
pub fn with_suffix(path: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}

/// Summary of a finished conversion
#[derive(Debug, Clone, PartialEq)]
pub struct ConvertReport {
    pub output: PathBuf,
    pub packed_output: Option<PathBuf>,
    pub width: u32,
    pub height: u32,
    pub mode: DitherMode,
}

/// One image through the whole pipeline: load, quantize, save.
///
/// Walks the stages `Loaded → Normalized → Dithered → Quantized → Expanded
/// → Saved` exactly once. Any failure aborts the job and leaves no output
/// behind: both payloads are encoded in memory first, and the packed file is
/// removed again if the preview cannot be written.
#[derive(Debug, Clone)]
pub struct Converter {
    quantizer: Quantizer,
    output: Option<PathBuf>,
    packed_output: Option<PathBuf>,
}

impl Converter {
    pub fn new(quantizer: Quantizer) -> Self {
        Self {
            quantizer,
            output: None,
            packed_output: None,
        }
    }

    /// Override the preview path (default: [`default_output_path`])
    pub fn output(mut self, path: Option<PathBuf>) -> Self {
        self.output = path;
        self
    }

    /// Also write the packed 16-bit words (little-endian) to this path
    pub fn packed_output(mut self, path: Option<PathBuf>) -> Self {
        self.packed_output = path;
        self
    }

    pub fn run(&self, input: &Path) -> Result<ConvertReport, AppError> {
        let source = load_png(input)?;
        tracing::debug!(stage = %Stage::Loaded, input = %input.display());

        let result = self
            .quantizer
            .run_observed(&source, |stage| tracing::debug!(stage = %stage))?;

        let output = self
            .output
            .clone()
            .unwrap_or_else(|| default_output_path(input));

        // Encode everything before touching the filesystem
        let preview = encode_png(result.preview())?;
        let packed = self
            .packed_output
            .as_ref()
            .map(|path| (path, result.packed().to_le_bytes()));

        if let Some((packed_path, bytes)) = &packed {
            write_file(packed_path, bytes)?;
            tracing::debug!(path = %packed_path.display(), "Wrote packed words");
        }
        if let Err(e) = write_file(&output, &preview) {
            if let Some((packed_path, _)) = &packed {
                let _ = std::fs::remove_file(packed_path);
            }
            return Err(e);
        }
        tracing::debug!(stage = %Stage::Saved, output = %output.display());

        tracing::info!(
            input = %input.display(),
            output = %output.display(),
            width = source.width(),
            height = source.height(),
            mode = %result.mode(),
            "Converted image"
        );

        Ok(ConvertReport {
            output,
            packed_output: self.packed_output.clone(),
            width: source.width(),
            height: source.height(),
            mode: result.mode(),
        })
    }
}

fn write_file(path: &Path, bytes: &[u8]) -> Result<(), AppError> {
    std::fs::write(path, bytes).map_err(|e| AppError::ImageWrite {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_output_keeps_extension() {
        assert_eq!(
            default_output_path(Path::new("/tmp/photo.png")),
            PathBuf::from("/tmp/photo.png.dither.png")
        );
        assert_eq!(
            default_output_path(Path::new("image")),
            PathBuf::from("image.dither.png")
        );
    }

    #[test]
    fn test_with_suffix() {
        assert_eq!(
            with_suffix(Path::new("a/b.png"), ".565"),
            PathBuf::from("a/b.png.565")
        );
    }

    #[test]
    fn test_missing_input_fails_without_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("missing.png");
        let err = Converter::new(Quantizer::new()).run(&input).unwrap_err();
        assert!(matches!(err, AppError::ImageLoad { .. }));
        assert!(!default_output_path(&input).exists());
    }
}
