//! Core path tracing renderer.
//!
//! Implements the image integrator:
//! - 2x2 stratified sub-pixel grid with tent-filtered jitter
//! - per sub-cell averaging and clamping before the 2x2 average
//! - rows rendered in parallel with rayon, each with its own RNG stream

use crate::progress::{CancelToken, Progress};
use crate::sampling::{row_rng, tent_jitter};
use crate::{Camera, Color, PathTracer, RenderError, RenderResult, Scene, Viewport};
use lumen_math::Interval;
use rand::RngCore;
use rayon::prelude::*;
use std::time::Instant;

/// Render configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Path samples per sub-pixel cell (4 cells per pixel)
    pub samples_per_subpixel: u32,
    /// Base seed mixed into every row's RNG seed
    pub seed: u64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 1024,
            height: 768,
            samples_per_subpixel: 1,
            seed: 0,
        }
    }
}

impl RenderConfig {
    /// Per sub-cell sample count for a requested sample density.
    ///
    /// Sampling is already stratified over 4 sub-cells, so the density is
    /// divided by 4, never going below 1.
    pub fn samples_for_density(density: u32) -> u32 {
        (density / 4).max(1)
    }

    /// Set the sample density (total paths per pixel, rounded down to a
    /// multiple of 4, at least 4).
    pub fn with_density(mut self, density: u32) -> Self {
        self.samples_per_subpixel = Self::samples_for_density(density);
        self
    }

    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Paths traced per pixel, saturating at `u32::MAX`.
    pub fn samples_per_pixel(&self) -> u32 {
        self.samples_per_subpixel.max(1).saturating_mul(4)
    }
}

/// Linear radiance image, stored top row first.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl ImageBuffer {
    /// Create a new image buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    /// Get the pixel at (x, y), `y = 0` being the top row.
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    /// Set the pixel at (x, y), `y = 0` being the top row.
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[y as usize * self.width as usize + x as usize] = color;
    }

}

/// Render a single pixel.
///
/// `y` counts from the bottom of the image. Each of the 4 sub-cells
/// averages `samples` paths, is clamped to [0, 1] per channel, and
/// contributes a quarter of the pixel.
pub fn render_pixel(
    viewport: &Viewport,
    tracer: &mut PathTracer<'_>,
    x: u32,
    y: u32,
    samples: u32,
    rng: &mut dyn RngCore,
) -> Color {
    let samples = samples.max(1);
    let inv_samples = 1.0 / f64::from(samples);
    let mut pixel_color = Color::ZERO;

    for sy in 0..2 {
        for sx in 0..2 {
            let mut cell = Color::ZERO;
            for _ in 0..samples {
                let dx = tent_jitter(rng);
                let dy = tent_jitter(rng);
                let ray = viewport.primary_ray(x, y, sx, sy, dx, dy);
                cell += tracer.radiance(&ray, rng) * inv_samples;
            }
            pixel_color += clamp_unit(cell) * 0.25;
        }
    }

    pixel_color
}

/// Clamp every channel to [0, 1].
#[inline]
pub fn clamp_unit(color: Color) -> Color {
    Color::new(
        Interval::UNIT.clamp(color.x),
        Interval::UNIT.clamp(color.y),
        Interval::UNIT.clamp(color.z),
    )
}

/// Render camera row `y` (0 = bottom) into `row`.
///
/// The row's RNG is created here and dropped when the row is done, so the
/// result depends only on the scene, camera, config and `y`.
pub fn render_row(
    viewport: &Viewport,
    scene: &Scene,
    config: &RenderConfig,
    y: u32,
    row: &mut [Color],
) {
    let mut rng = row_rng(config.seed, y);
    let mut tracer = PathTracer::new(scene);
    for (x, pixel) in row.iter_mut().enumerate() {
        *pixel = render_pixel(
            viewport,
            &mut tracer,
            x as u32,
            y,
            config.samples_per_subpixel,
            &mut rng,
        );
    }
}

/// Render the entire scene, printing progress to stderr.
pub fn render(scene: &Scene, camera: &Camera, config: &RenderConfig) -> RenderResult<ImageBuffer> {
    render_cancellable(scene, camera, config, &CancelToken::new())
}

/// Like [`render`], stopping early once `cancel` is triggered.
pub fn render_cancellable(
    scene: &Scene,
    camera: &Camera,
    config: &RenderConfig,
    cancel: &CancelToken,
) -> RenderResult<ImageBuffer> {
    let progress = Progress::new(config.height as usize, config.samples_per_pixel());
    let image = render_with(scene, camera, config, &progress, cancel);
    // Close the status line before anything else is logged
    progress.finish();
    if let Err(RenderError::Cancelled { rows_done }) = &image {
        log::warn!("Render cancelled after {} of {} rows", rows_done, config.height);
    }
    image
}

/// Render the entire scene in parallel over rows.
///
/// `cancel` is checked once at the start of each row; a cancelled render
/// returns `RenderError::Cancelled` and no image.
pub fn render_with(
    scene: &Scene,
    camera: &Camera,
    config: &RenderConfig,
    progress: &Progress,
    cancel: &CancelToken,
) -> RenderResult<ImageBuffer> {
    if config.width == 0 || config.height == 0 {
        return Err(RenderError::EmptyImage {
            width: config.width,
            height: config.height,
        });
    }

    log::info!(
        "Rendering {}x{} @ {} spp on {} threads",
        config.width,
        config.height,
        config.samples_per_pixel(),
        rayon::current_num_threads()
    );
    let start = Instant::now();

    let viewport = camera.viewport(config.width, config.height);
    let mut image = ImageBuffer::new(config.width, config.height);
    let height = config.height;

    // Buffer rows are top first, camera rows count from the bottom
    let outcome = image
        .pixels
        .par_chunks_mut(config.width as usize)
        .enumerate()
        .try_for_each(|(row_index, row)| {
            if cancel.is_cancelled() {
                return Err(());
            }
            let y = height - 1 - row_index as u32;
            render_row(&viewport, scene, config, y, row);
            progress.row_finished();
            Ok(())
        });

    if outcome.is_err() {
        return Err(RenderError::Cancelled {
            rows_done: progress.rows_done(),
        });
    }

    log::debug!("Rows finished in {:?}", start.elapsed());
    Ok(image)
}
