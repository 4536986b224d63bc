//! Lumen CLI - render a built-in sphere scene to an image file.

use anyhow::{Context, Result};
use clap::Parser;
use lumen_renderer::{luminance, render, save, RenderConfig, ScenePreset};
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "lumen", version)]
#[command(about = "Monte Carlo path tracer for sphere scenes", long_about = None)]
struct Cli {
    /// Samples per pixel. Missing or invalid values fall back to 1; rounded
    /// down to a multiple of 4 with a minimum of 4
    #[arg(allow_negative_numbers = true)]
    samples: Option<String>,

    /// Image width in pixels
    #[arg(long, default_value_t = 1024)]
    width: u32,

    /// Image height in pixels
    #[arg(long, default_value_t = 768)]
    height: u32,

    /// Output file (.ppm writes ASCII P3; other extensions such as .png go
    /// through the image encoder)
    #[arg(short, long, default_value = "image.ppm")]
    output: PathBuf,

    /// Built-in scene to render (classic, lantern)
    #[arg(long, default_value_t = ScenePreset::Classic)]
    scene: ScenePreset,

    /// Base seed for the per-row random streams
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Worker threads (defaults to one per core)
    #[arg(long)]
    threads: Option<usize>,
}

/// Sample density from the positional argument, never failing.
fn parse_density(arg: Option<&str>) -> u32 {
    const DEFAULT_DENSITY: u32 = 1;
    match arg {
        None => DEFAULT_DENSITY,
        Some(raw) => raw.trim().parse::<u32>().unwrap_or_else(|_| {
            log::debug!("Ignoring sample count '{}', using {}", raw, DEFAULT_DENSITY);
            DEFAULT_DENSITY
        }),
    }
}

impl Cli {
    fn render_config(&self) -> RenderConfig {
        RenderConfig {
            seed: self.seed,
            ..RenderConfig::default()
        }
        .with_resolution(self.width, self.height)
        .with_density(parse_density(self.samples.as_deref()))
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();

    if let Some(threads) = cli.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(threads)
            .build_global()
            .context("Failed to configure the render thread pool")?;
    }

    let (scene, camera) = cli
        .scene
        .build()
        .with_context(|| format!("Failed to build scene '{}'", cli.scene))?;
    let config = cli.render_config();

    let start = Instant::now();
    let image = render(&scene, &camera, &config).context("Render failed")?;
    let mean = image.pixels.iter().map(|c| luminance(*c)).sum::<f64>() / image.pixels.len() as f64;
    log::info!(
        "Rendered {}x{} in {:.2?} (mean luminance {:.4})",
        image.width,
        image.height,
        start.elapsed(),
        mean
    );

    save(&image, &cli.output)
        .with_context(|| format!("Failed to write {}", cli.output.display()))?;

    Ok(())
}
