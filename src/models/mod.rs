pub mod settings;

pub use settings::{FormatChoice, Settings};
