//! Rasterization error types

use thiserror::Error;

use super::policy::ImageFormat;
use crate::document::{DocumentError, Rect};

/// Failure to convert a pixel buffer into encoded bytes
#[derive(Debug, Error)]
pub enum EncodeError {
    #[error("Failed to encode {format} image: {source}")]
    Image {
        format: ImageFormat,
        #[source]
        source: image::ImageError,
    },

    #[error("Encoder produced no {0} data")]
    Empty(ImageFormat),
}

/// Failure anywhere between content bounds and encoded bytes
#[derive(Debug, Error)]
pub enum RasterError {
    #[error("Invalid content bounds: {0:?}")]
    InvalidBounds(Rect),

    #[error("Invalid render scale: {0}")]
    InvalidScale(f32),

    #[error("Render target of {width}x{height} pixels exceeds the {max} pixel limit")]
    TargetTooLarge { width: f32, height: f32, max: u32 },

    #[error("Backend buffer holds {actual} bytes, expected {expected}")]
    BufferMismatch { expected: usize, actual: usize },

    #[error("Failed to draw page: {0}")]
    Draw(#[source] DocumentError),

    #[error(transparent)]
    Encode(#[from] EncodeError),
}

impl From<RasterError> for DocumentError {
    fn from(err: RasterError) -> Self {
        match err {
            RasterError::Draw(inner) => inner,
            other => DocumentError::RenderError(other.to_string()),
        }
    }
}
