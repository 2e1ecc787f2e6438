use crate::error::AppError;
use packed_dither::{DitherAlgorithm, PackedFormat};
use serde::Deserialize;
use std::path::Path;

/// Target format choice as written on the command line or in settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FormatChoice {
    /// RGBA4444 for RGBA sources, RGB565 for RGB sources
    #[default]
    Auto,
    Rgb565,
    Rgba4444,
}

impl FormatChoice {
    /// Concrete format, or `None` to pick from the source channels.
    pub fn resolve(self) -> Option<PackedFormat> {
        match self {
            FormatChoice::Auto => None,
            FormatChoice::Rgb565 => Some(PackedFormat::Rgb565),
            FormatChoice::Rgba4444 => Some(PackedFormat::Rgba4444),
        }
    }
}

/// Optional settings loaded from a YAML file
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Dithering algorithm name ("ign", "bayer4", "bayer8", "none")
    #[serde(default)]
    pub algorithm: Option<String>,

    /// Target format
    #[serde(default)]
    pub format: Option<FormatChoice>,

    /// When set, also write packed words to `<input><suffix>`
    #[serde(default)]
    pub packed_suffix: Option<String>,
}

impl Settings {
    /// Parse settings from YAML text
    pub fn from_yaml(content: &str) -> Result<Self, AppError> {
        let settings: Self =
            serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))?;
        // Validate eagerly so a typo fails before any image is touched
        settings.algorithm()?;
        Ok(settings)
    }

    /// Load settings from a YAML file
    pub fn load(path: &Path) -> Result<Self, AppError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            AppError::Config(format!("cannot read '{}': {}", path.display(), e))
        })?;
        let settings = Self::from_yaml(&content)?;
        tracing::debug!(path = %path.display(), ?settings, "Loaded settings");
        Ok(settings)
    }

    /// Parsed algorithm, if one is configured
    pub fn algorithm(&self) -> Result<Option<DitherAlgorithm>, AppError> {
        self.algorithm
            .as_deref()
            .map(|name| name.parse::<DitherAlgorithm>().map_err(AppError::Config))
            .transpose()
    }
}
