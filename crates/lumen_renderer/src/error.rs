//! Error types for scene construction and rendering.

use thiserror::Error;

/// Errors that can occur while building a scene.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SceneError {
    #[error("Sphere {index} has invalid radius {radius} (must be finite and positive)")]
    InvalidRadius { index: usize, radius: f64 },

    #[error("Sphere {index} has a non-finite {field}")]
    NonFinite { index: usize, field: &'static str },
}

/// Errors that can occur during rendering or image output.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Scene error: {0}")]
    Scene(#[from] SceneError),

    #[error("Cannot render an empty image ({width}x{height})")]
    EmptyImage { width: u32, height: u32 },

    #[error("Render cancelled after {rows_done} rows")]
    Cancelled { rows_done: usize },
}

/// Result type for rendering operations.
pub type RenderResult<T> = Result<T, RenderError>;
