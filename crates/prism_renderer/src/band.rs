//! Parallel rendering over row bands.
//!
//! Divides the image into contiguous bands of rows that are rendered
//! independently on a rayon pool, then reassembled by row index.

use std::io::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Instant;

use prism_core::Scene;
use prism_math::Color;
use rayon::prelude::*;

use crate::renderer::{render_pixel, RayStats, RenderConfig};
use crate::{Camera, Image, RenderResult};

/// A contiguous range of image rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Band {
    /// First row of the band
    pub y: u32,
    /// Number of rows in the band
    pub height: u32,
    /// Index of this band, top to bottom
    pub index: usize,
}

impl Band {
    /// Create a new band.
    pub fn new(y: u32, height: u32, index: usize) -> Self {
        Self { y, height, index }
    }

    /// Rows covered by this band.
    pub fn rows(&self) -> std::ops::Range<u32> {
        self.y..self.y + self.height
    }
}

/// Resolve a requested worker count, where 0 means one per hardware thread.
pub fn resolve_workers(requested: usize) -> usize {
    if requested == 0 {
        num_cpus::get().max(1)
    } else {
        requested
    }
}

/// Split `height` rows into at most `count` contiguous bands of nearly
/// equal size, ordered top to bottom.
pub fn generate_bands(height: u32, count: usize) -> Vec<Band> {
    let count = (count.max(1) as u64).min(height as u64);
    let height = height as u64;

    (0..count)
        .map(|i| {
            let start = i * height / count;
            let end = (i + 1) * height / count;
            Band::new(start as u32, (end - start) as u32, i as usize)
        })
        .collect()
}

/// Result of rendering a band.
#[derive(Debug, Clone)]
pub struct BandResult {
    /// The band that was rendered
    pub band: Band,
    /// Pixel colors in row-major order
    pub pixels: Vec<Color>,
    pub stats: RayStats,
}

/// Render a single band of rows.
pub fn render_band(
    band: &Band,
    camera: &Camera,
    scene: &Scene,
    config: &RenderConfig,
) -> RenderResult<BandResult> {
    let mut pixels = Vec::with_capacity(band.height as usize * camera.image_width as usize);
    let mut stats = RayStats::default();

    for y in band.rows() {
        render_row(camera, scene, y, config, &mut pixels, &mut stats)?;
    }

    log::debug!(
        "Band {} (rows {}..{}) done: {} rays",
        band.index,
        band.y,
        band.y + band.height,
        stats.total()
    );

    Ok(BandResult {
        band: *band,
        pixels,
        stats,
    })
}

fn render_row(
    camera: &Camera,
    scene: &Scene,
    y: u32,
    config: &RenderConfig,
    pixels: &mut Vec<Color>,
    stats: &mut RayStats,
) -> RenderResult<()> {
    for x in 0..camera.image_width {
        pixels.push(render_pixel(camera, scene, x, y, config, stats)?);
    }
    Ok(())
}

/// Render a band as one worker of a parallel render.
///
/// `failed` holds the lowest band index that has failed so far. Bands
/// below it run to completion. A band above it stops between rows and
/// returns `None`.
fn render_band_shared(
    band: &Band,
    camera: &Camera,
    scene: &Scene,
    config: &RenderConfig,
    failed: &AtomicUsize,
) -> RenderResult<Option<BandResult>> {
    let mut pixels = Vec::with_capacity(band.height as usize * camera.image_width as usize);
    let mut stats = RayStats::default();

    for y in band.rows() {
        if failed.load(Ordering::Relaxed) < band.index {
            log::debug!("Band {} abandoned at row {}", band.index, y);
            return Ok(None);
        }
        if let Err(err) = render_row(camera, scene, y, config, &mut pixels, &mut stats) {
            failed.fetch_min(band.index, Ordering::Relaxed);
            return Err(err);
        }
    }

    Ok(Some(BandResult {
        band: *band,
        pixels,
        stats,
    }))
}

/// Render the scene with `workers` threads (0 = hardware concurrency).
///
/// The output is identical to [`crate::render`]. If any pixel fails the
/// whole render fails with the same error [`crate::render`] would report,
/// the first failing pixel in row order, and no partial image is returned.
pub fn render_parallel(scene: &Scene, config: &RenderConfig, workers: usize) -> RenderResult<Image> {
    let start = Instant::now();
    let workers = resolve_workers(workers);
    let camera = Camera::new(scene);
    let bands = generate_bands(scene.height(), workers);

    log::info!(
        "Rendering {}x{} with {} workers ({} bands)",
        scene.width(),
        scene.height(),
        workers,
        bands.len()
    );

    let pool = rayon::ThreadPoolBuilder::new().num_threads(workers).build()?;
    let failed = AtomicUsize::new(usize::MAX);
    let results: Vec<RenderResult<Option<BandResult>>> = pool.install(|| {
        bands
            .par_iter()
            .map(|band| render_band_shared(band, &camera, scene, config, &failed))
            .collect()
    });

    // Collection keeps band order, independent of completion order. Every
    // abandoned band sits after a failed one, so the first error wins.
    let mut image = Image::new(scene.width(), scene.height());
    let mut stats = RayStats::default();
    for result in results {
        let Some(result) = result? else {
            continue;
        };
        image.set_rows(result.band.y, &result.pixels)?;
        stats += result.stats;
    }

    log::info!(
        "Rendered in {:?} ({} rays: {} primary, {} shadow, {} reflection)",
        start.elapsed(),
        stats.total(),
        stats.primary,
        stats.shadow,
        stats.reflection
    );

    Ok(image)
}

/// Render in parallel and stream the result as a P3 pixel map into `sink`.
pub fn render_to_writer<W: Write>(
    scene: &Scene,
    config: &RenderConfig,
    workers: usize,
    sink: &mut W,
) -> RenderResult<()> {
    let image = render_parallel(scene, config, workers)?;
    image.write_ppm(sink)?;
    sink.flush()?;
    Ok(())
}
