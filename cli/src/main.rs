//! Heartcode CLI - heart-styled QR code generation.

mod presets;

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use heartcode_core::Color;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use presets::{Overrides, Preset};

#[derive(Parser)]
#[command(name = "heartcode")]
#[command(about = "Generate heart-styled QR code images", long_about = None)]
struct Cli {
    /// URL or text to encode
    url: String,

    /// Presets to render (defaults to all of them)
    #[arg(short, long, value_enum)]
    preset: Vec<Preset>,

    /// Directory the images are written to
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Heart fill color for masked presets (hex like '#FF1493' or a name)
    #[arg(long, value_parser = parse_color)]
    fill: Option<Color>,

    /// Background color (hex or name)
    #[arg(long, value_parser = parse_color)]
    background: Option<Color>,

    /// Edge length in pixels of the styled square
    #[arg(long)]
    size: Option<u32>,

    /// Border width in pixels around masked presets
    #[arg(long)]
    border: Option<u32>,
}

fn parse_color(s: &str) -> Result<Color, String> {
    s.parse::<Color>().map_err(|e| e.to_string())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env()
                .add_directive("heartcode=info".parse()?)
                .add_directive("heartcode_core=info".parse()?),
        )
        .init();

    let cli = Cli::parse();

    let selected = if cli.preset.is_empty() {
        Preset::all().to_vec()
    } else {
        cli.preset.clone()
    };

    std::fs::create_dir_all(&cli.out_dir)
        .with_context(|| format!("creating output directory {}", cli.out_dir.display()))?;
    debug!(out_dir = %cli.out_dir.display(), presets = selected.len(), "Starting render");

    let overrides = Overrides {
        fill: cli.fill,
        background: cli.background,
        size: cli.size,
        border: cli.border,
    };

    for preset in selected {
        let path = cli.out_dir.join(preset.filename());
        preset
            .generate(&cli.url, &path, &overrides)
            .with_context(|| format!("rendering preset '{preset}'"))?;
        println!("{preset} -> {}", path.display());
    }

    Ok(())
}
