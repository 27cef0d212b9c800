use thiserror::Error;

use crate::image_buffer::ImageError;

/// Errors that abort a render.
#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Image error: {0}")]
    Image(#[from] ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    #[error("Pixel ({x}, {y}) produced a non-finite color")]
    NonFinite { x: u32, y: u32 },
}

pub type RenderResult<T> = Result<T, RenderError>;
