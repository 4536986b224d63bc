//! Lumen renderer - CPU path tracing for sphere scenes.
//!
//! A Monte Carlo path tracer that estimates the radiance reaching each
//! pixel by sampling light paths among diffuse, mirror and glass spheres.
//!
//! # Example
//!
//! ```no_run
//! use lumen_renderer::{render, save, RenderConfig, ScenePreset};
//!
//! let (scene, camera) = ScenePreset::Classic.build()?;
//! let config = RenderConfig::default().with_density(16);
//! let image = render(&scene, &camera, &config)?;
//! save(&image, "image.ppm")?;
//! # Ok::<(), lumen_renderer::RenderError>(())
//! ```

mod camera;
mod encode;
mod error;
mod material;
mod presets;
mod progress;
mod radiance;
mod renderer;
mod sampling;
mod scene;
mod sphere;

pub use camera::{Camera, Viewport};
pub use encode::{linear_to_srgb, luminance, save, to_rgb, to_rgb_image, write_ppm};
pub use error::{RenderError, RenderResult, SceneError};
pub use material::{
    cosine_hemisphere, refract, Color, Material, Refraction, IOR_GLASS, IOR_OUTSIDE,
};
pub use presets::ScenePreset;
pub use progress::{CancelToken, Progress};
pub use radiance::{radiance, russian_roulette, PathTracer, ROULETTE_DEPTH, SPLIT_DEPTH};
pub use renderer::{
    clamp_unit, render, render_cancellable, render_pixel, render_row, render_with, ImageBuffer,
    RenderConfig,
};
pub use sampling::{gen_f64, row_rng, tent, tent_jitter};
pub use scene::{Hit, Scene};
pub use sphere::{Sphere, HIT_EPSILON};

/// Re-export math types from lumen_math
pub use lumen_math::{Interval, Ray, Vec3};
