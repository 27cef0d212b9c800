//! `prism` - render a scene to an image file.

mod cli;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use prism_core::{Preset, Scene, SceneDescription};
use prism_renderer::{render_parallel, RenderConfig};

use crate::cli::Args;

/// Load the scene to render and the output path it suggests.
fn load(args: &Args) -> Result<(Scene, PathBuf)> {
    match &args.scene {
        Some(path) => {
            let description = SceneDescription::load(path)
                .with_context(|| format!("Failed to read scene {}", path.display()))?;
            let scene = description
                .build()
                .with_context(|| format!("Invalid scene {}", path.display()))?;
            let output = description
                .output
                .map(PathBuf::from)
                .unwrap_or_else(|| path.with_extension("ppm"));
            Ok((scene, output))
        }
        None => {
            let preset = Preset::from(args.preset);
            let scene = preset.build().context("Failed to build preset scene")?;
            Ok((scene, PathBuf::from(format!("{preset}.ppm"))))
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.into())
        .init();

    log::info!("Starting Prism");

    let (mut scene, suggested_output) = load(&args)?;
    if let (Some(width), Some(height)) = (args.width, args.height) {
        scene.set_resolution(width, height)?;
    }
    let output = args.output.clone().unwrap_or(suggested_output);

    let config = RenderConfig {
        max_depth: args.max_depth,
        ..Default::default()
    };

    log::info!(
        "Scene: {} objects, {} lights, {}x{}",
        scene.objects.len(),
        scene.lights.len(),
        scene.width(),
        scene.height()
    );

    let image = render_parallel(&scene, &config, args.processes).context("Render failed")?;
    image
        .save(&output)
        .with_context(|| format!("Failed to write {}", output.display()))?;

    Ok(())
}
