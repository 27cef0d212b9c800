//! Prism Renderer - Whitted-style CPU ray tracing.
//!
//! Renders a [`prism_core::Scene`] with ambient, diffuse, specular and
//! mirror-reflection lighting, either on the calling thread or split into
//! row bands across a rayon pool.

mod band;
mod camera;
mod error;
mod image_buffer;
mod renderer;

pub use band::{
    generate_bands, render_band, render_parallel, render_to_writer, resolve_workers, Band,
    BandResult,
};
pub use camera::Camera;
pub use error::{RenderError, RenderResult};
pub use image_buffer::{Image, ImageError};
pub use renderer::{ray_color, render, render_pixel, RayStats, RenderConfig};

/// Re-export the scene and math types renderers work with
pub use prism_core::Scene;
pub use prism_math::Color;
