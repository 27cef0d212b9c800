//! Prism Core - scene model for the Prism ray tracer.
//!
//! This crate provides:
//!
//! - **Primitives**: `Sphere`, `Triangle` and the `Primitive` sum type
//! - **Materials**: `Solid` and procedural `Checkered` surfaces
//! - **Scene**: camera, objects, point lights and output resolution
//! - **Scene descriptions**: JSON scene files and built-in presets
//!
//! # Example
//!
//! ```ignore
//! use prism_core::load_scene;
//!
//! let scene = load_scene("scenes/two_balls.json")?;
//! println!("Loaded {} objects, {} lights", scene.objects.len(), scene.lights.len());
//! ```

pub mod description;
mod error;
mod light;
pub mod material;
pub mod presets;
mod primitive;
mod scene;

// Re-export commonly used types
pub use description::{load_scene, SceneDescription};
pub use error::{SceneError, SceneResult};
pub use light::Light;
pub use material::{Finish, Material};
pub use presets::Preset;
pub use primitive::{Hit, Primitive, Sphere, Triangle};
pub use scene::Scene;
