//! # Prism studio
//!
//! Renders the demo scene through the software rasterizer and writes a PNG.
//!
//! ```bash
//! prism-studio --output scene.png --angle 250 --edge linear
//! prism-studio --texture photo.png --derivatives coarse --log debug
//! ```

mod scene;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};

use prism_engine::coords::Viewport;
use prism_engine::logging::{init_logging, LoggingConfig};
use prism_engine::paint::Rgba;
use prism_engine::raster::{DerivativeMode, Texture2d};
use prism_engine::render::validate_all;
use prism_engine::shade::EdgePreset;

use scene::{Scene, SceneOptions};

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum EdgeArg {
    Raw,
    Linear,
    None,
}

impl EdgeArg {
    fn preset(self) -> Option<EdgePreset> {
        match self {
            EdgeArg::Raw => Some(EdgePreset::RawDepth),
            EdgeArg::Linear => Some(EdgePreset::LinearDepth),
            EdgeArg::None => None,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
enum DerivativesArg {
    Fine,
    Coarse,
}

impl From<DerivativesArg> for DerivativeMode {
    fn from(value: DerivativesArg) -> Self {
        match value {
            DerivativesArg::Fine => DerivativeMode::Fine,
            DerivativesArg::Coarse => DerivativeMode::Coarse,
        }
    }
}

/// Prism studio - offline renderer for the shading demo scene
#[derive(Parser, Debug)]
#[command(name = "prism-studio")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Output PNG path
    #[arg(short, long, value_name = "FILE", default_value = "prism.png")]
    output: PathBuf,

    /// Image width in pixels
    #[arg(long, default_value = "640")]
    width: u32,

    /// Image height in pixels
    #[arg(long, default_value = "480")]
    height: u32,

    /// Camera orbit angle in degrees
    #[arg(long, default_value = "250", allow_negative_numbers = true)]
    angle: f32,

    /// Depth edge preset for the post pass
    #[arg(long, value_enum, default_value = "raw")]
    edge: EdgeArg,

    /// How quads share derivatives
    #[arg(long, value_enum, default_value = "fine")]
    derivatives: DerivativesArg,

    /// Texture for the quad (defaults to a checkerboard)
    #[arg(long, value_name = "FILE")]
    texture: Option<PathBuf>,

    /// Log filter, overrides RUST_LOG (e.g. "debug", "prism_engine=trace")
    #[arg(long, value_name = "FILTER")]
    log: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(match &cli.log {
        Some(filter) => LoggingConfig::with_filter(filter.clone()),
        None => LoggingConfig::default(),
    });

    validate_all().context("built-in shaders failed validation")?;
    log::info!("shaders validated");

    let texture = match &cli.texture {
        Some(path) => load_texture(path)?,
        None => Scene::checkerboard()?,
    };
    let scene = Scene::new(texture);

    let options = SceneOptions {
        viewport: Viewport::validated(cli.width, cli.height)?,
        angle: cli.angle,
        edge: cli.edge.preset(),
        derivatives: cli.derivatives.into(),
    };
    let frame = scene.render(&options)?;

    image::save_buffer(
        &cli.output,
        &frame.to_rgba8(),
        cli.width,
        cli.height,
        image::ExtendedColorType::Rgba8,
    )
    .with_context(|| format!("writing {}", cli.output.display()))?;

    log::info!("wrote {}x{} to {}", cli.width, cli.height, cli.output.display());
    Ok(())
}

fn load_texture(path: &Path) -> Result<prism_engine::raster::ColorTexture> {
    let image = image::open(path)
        .with_context(|| format!("reading texture {}", path.display()))?
        .to_rgba8();
    let (width, height) = image.dimensions();
    let texels = image.pixels().map(|p| Rgba::from_rgba8(p.0)).collect();
    Ok(Texture2d::new(width, height, texels)?)
}
