use prism_math::ColorError;
use thiserror::Error;

/// Errors that can occur while building or loading a scene.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Scene description error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Color error: {0}")]
    Color(#[from] ColorError),

    #[error("Invalid resolution {width}x{height}: both dimensions must be non-zero")]
    InvalidResolution { width: u32, height: u32 },

    #[error("Invalid sphere radius {0}: must be positive")]
    InvalidRadius(f64),

    #[error("Unknown preset scene: {0}")]
    UnknownPreset(String),
}

pub type SceneResult<T> = Result<T, SceneError>;
