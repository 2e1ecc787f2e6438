use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dither16::models::{FormatChoice, Settings};
use dither16::services::{with_suffix, Converter};
use packed_dither::{DitherAlgorithm, Quantizer, ThresholdMap};

#[derive(Parser)]
#[command(name = "dither16")]
#[command(about = "Preview a PNG quantized to RGB565 / RGBA4444 with dithering")]
struct Cli {
    /// Input PNG (RGB or RGBA)
    #[arg(required_unless_present = "print_matrix")]
    input: Option<PathBuf>,

    /// Dithering algorithm: auto, ign, bayer4, bayer8 or none [default: auto]
    #[arg(short, long)]
    algorithm: Option<DitherAlgorithm>,

    /// Target packed format [default: auto]
    #[arg(short, long, value_enum)]
    format: Option<FormatChoice>,

    /// Preview PNG path [default: <INPUT>.dither.png]
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Also write the packed 16-bit words (little-endian) to this path
    #[arg(long)]
    packed: Option<PathBuf>,

    /// YAML settings file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Print the centered Bayer threshold map of this order (4 or 8) and exit
    #[arg(long, value_name = "ORDER")]
    print_matrix: Option<usize>,
}

fn main() -> anyhow::Result<()> {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // Usage errors exit with 1, help and version with 0
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            std::process::exit(code);
        }
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dither16=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Some(order) = cli.print_matrix {
        let map = ThresholdMap::new(order)?;
        print!("{}", map);
        return Ok(());
    }

    run_convert_command(cli)
}

/// Quantize one image and write the preview (and optionally packed words)
fn run_convert_command(cli: Cli) -> anyhow::Result<()> {
    let Some(input) = cli.input else {
        anyhow::bail!("You must supply an image path");
    };

    let settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };

    // Command-line flags win over the settings file
    let algorithm = match cli.algorithm {
        Some(algorithm) => algorithm,
        None => settings.algorithm()?.unwrap_or_default(),
    };
    let format = cli.format.or(settings.format).unwrap_or_default();
    if let (Some(flag), Some(suffix)) = (&cli.packed, &settings.packed_suffix) {
        tracing::warn!(
            packed = %flag.display(),
            packed_suffix = %suffix,
            "--packed overrides packed_suffix from the settings file"
        );
    }
    let packed = cli.packed.or_else(|| {
        settings
            .packed_suffix
            .as_deref()
            .map(|suffix| with_suffix(&input, suffix))
    });

    let quantizer = Quantizer::new()
        .algorithm(algorithm)
        .format(format.resolve());
    let report = Converter::new(quantizer)
        .output(cli.output)
        .packed_output(packed)
        .run(&input)?;

    println!("Wrote '{}'", report.output.display());
    if let Some(packed) = &report.packed_output {
        println!("Wrote '{}'", packed.display());
    }
    Ok(())
}
