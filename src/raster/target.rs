//! Render target
//!
//! An RGBA pixel buffer owned by one render, together with the transform
//! that maps PDF user space onto it.

use image::{Rgba, RgbaImage};

use super::error::RasterError;
use super::policy::MIN_SCALE;
use super::transform::Matrix;
use crate::document::Rect;

/// Largest width or height of a render target, in pixels
pub const MAX_TARGET_DIMENSION: u32 = 16_384;

const BACKGROUND: Rgba<u8> = Rgba([255, 255, 255, 255]);

pub struct RenderTarget {
    image: RgbaImage,
    ctm: Matrix,
    bounds: Rect,
    scale: f32,
}

impl RenderTarget {
    /// Allocate a white target covering `bounds` at `scale` pixels per unit
    pub fn new(bounds: Rect, scale: f32) -> Result<Self, RasterError> {
        if !bounds.is_valid() {
            return Err(RasterError::InvalidBounds(bounds));
        }
        if !scale.is_finite() || scale <= 0.0 {
            return Err(RasterError::InvalidScale(scale));
        }

        let width = bounds.width * scale;
        let height = bounds.height * scale;
        if width.round() > MAX_TARGET_DIMENSION as f32
            || height.round() > MAX_TARGET_DIMENSION as f32
        {
            return Err(RasterError::TargetTooLarge {
                width,
                height,
                max: MAX_TARGET_DIMENSION,
            });
        }

        let pixel_width = (width.round() as u32).max(1);
        let pixel_height = (height.round() as u32).max(1);

        Ok(Self {
            image: RgbaImage::from_pixel(pixel_width, pixel_height, BACKGROUND),
            ctm: Matrix::page_to_image(bounds, scale),
            bounds,
            scale,
        })
    }

    /// Largest scale not above `scale` at which `bounds` fits the dimension limit
    ///
    /// Never goes below [`MIN_SCALE`]; bounds too large even at that scale
    /// are left to [`RenderTarget::new`] to reject.
    pub fn fit_scale(bounds: Rect, scale: f32) -> f32 {
        let longest = bounds.width.max(bounds.height);
        if !longest.is_finite() || longest <= 0.0 {
            return scale;
        }

        let limit = MAX_TARGET_DIMENSION as f32 / longest;
        if scale > limit {
            limit.max(MIN_SCALE)
        } else {
            scale
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// User space to pixel transform
    pub fn ctm(&self) -> Matrix {
        self.ctm
    }

    /// Content bounds this target was sized from
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Fill a user-space rectangle, compositing `color` over the buffer
    pub fn fill_rect(&mut self, rect: Rect, color: [u8; 4]) {
        if !rect.is_valid() || color[3] == 0 {
            return;
        }

        let device = self.ctm.transform_rect(rect);
        let (x0, x1) = pixel_span(device.x, device.right(), self.width());
        let (y0, y1) = pixel_span(device.y, device.top(), self.height());

        for y in y0..y1 {
            for x in x0..x1 {
                let pixel = self.image.get_pixel_mut(x, y);
                *pixel = blend(*pixel, color);
            }
        }
    }

    /// Replace the buffer with pixels rendered by a backend
    ///
    /// `samples` is row-major with `channels` bytes per pixel: 1 (gray),
    /// 3 (RGB) or 4 (RGBA). Dimensions must match the target.
    pub fn blit_samples(&mut self, samples: &[u8], channels: usize) -> Result<(), RasterError> {
        let pixels = self.width() as usize * self.height() as usize;
        let expected = pixels * channels;
        if !matches!(channels, 1 | 3 | 4) || samples.len() < expected {
            return Err(RasterError::BufferMismatch {
                expected,
                actual: samples.len(),
            });
        }

        for (pixel, chunk) in self
            .image
            .pixels_mut()
            .zip(samples.chunks_exact(channels))
        {
            *pixel = match channels {
                1 => Rgba([chunk[0], chunk[0], chunk[0], 255]),
                3 => Rgba([chunk[0], chunk[1], chunk[2], 255]),
                _ => blend(BACKGROUND, [chunk[0], chunk[1], chunk[2], chunk[3]]),
            };
        }

        Ok(())
    }

    pub fn image(&self) -> &RgbaImage {
        &self.image
    }

    pub fn into_image(self) -> RgbaImage {
        self.image
    }
}

/// Pixel columns (or rows) covered by the device span `[start, end)`
fn pixel_span(start: f32, end: f32, limit: u32) -> (u32, u32) {
    let clamp = |v: f32| v.round().clamp(0.0, limit as f32) as u32;
    (clamp(start), clamp(end))
}

/// Source-over compositing of a straight-alpha color onto an opaque pixel
fn blend(dst: Rgba<u8>, src: [u8; 4]) -> Rgba<u8> {
    let alpha = src[3] as u32;
    if alpha == 255 {
        return Rgba(src);
    }

    let mix = |s: u8, d: u8| ((s as u32 * alpha + d as u32 * (255 - alpha) + 127) / 255) as u8;
    Rgba([
        mix(src[0], dst[0]),
        mix(src[1], dst[1]),
        mix(src[2], dst[2]),
        255,
    ])
}
