//! Page rasterizer
//!
//! Turns one page into encoded image bytes:
//!
//! 1. read the page's content bounds
//! 2. allocate a [`RenderTarget`] of `bounds * scale` pixels, lowering the
//!    scale when the target would exceed [`MAX_TARGET_DIMENSION`]
//! 3. install the user-space to image-space transform (origin moved to the
//!    top-left corner of the bounds, y flipped, scaled)
//! 4. let the page draw itself
//! 5. encode with the policy's format and quality
//!
//! Resolution and format are a [`RenderPolicy`], not separate code paths.

mod encode;
mod error;
mod policy;
mod target;
mod transform;

pub use encode::{encode, CodecEncoder, EncodedImage, PixelEncoder};
pub use error::{EncodeError, RasterError};
pub use policy::{ImageFormat, Quality, RenderPolicy, MAX_SCALE, MIN_SCALE};
pub use target::{RenderTarget, MAX_TARGET_DIMENSION};
pub use transform::Matrix;

use crate::document::{Page, Rect};

/// Result of rasterizing one page
#[derive(Debug, Clone)]
pub struct Rasterized {
    pub image: EncodedImage,
    /// Content bounds the image was rendered from
    pub bounds: Rect,
    /// Scale actually used, at most the requested one
    pub scale: f32,
}

/// Draw `page` into a fresh target at `scale`
///
/// Oversized pages are drawn at the largest scale that fits
/// [`MAX_TARGET_DIMENSION`]; see [`RenderTarget::scale`].
pub fn render_page(page: &dyn Page, scale: f32) -> Result<RenderTarget, RasterError> {
    let bounds = page.content_bounds();
    let fitted = RenderTarget::fit_scale(bounds, scale);
    if fitted != scale {
        tracing::debug!(
            "Scale {} exceeds the {} pixel limit for {:?}, using {}",
            scale,
            MAX_TARGET_DIMENSION,
            bounds,
            fitted
        );
    }

    let mut target = RenderTarget::new(bounds, fitted)?;

    tracing::debug!(
        "Rendering page bounds {:?} into {}x{} target (scale {})",
        bounds,
        target.width(),
        target.height(),
        fitted
    );

    page.draw(&mut target).map_err(RasterError::Draw)?;
    Ok(target)
}

/// Render and encode `page` according to `policy` with the `image` codecs
pub fn rasterize(page: &dyn Page, policy: &RenderPolicy) -> Result<Rasterized, RasterError> {
    rasterize_with(page, policy, &CodecEncoder)
}

/// Render `page` according to `policy` and encode it with `encoder`
pub fn rasterize_with(
    page: &dyn Page,
    policy: &RenderPolicy,
    encoder: &dyn PixelEncoder,
) -> Result<Rasterized, RasterError> {
    let target = render_page(page, policy.scale)?;
    let bounds = target.bounds();
    let scale = target.scale();
    let image = encoder.encode(target.image(), policy.format, policy.quality)?;

    tracing::debug!(
        "Encoded {} image: {} bytes",
        image.format,
        image.bytes.len()
    );

    Ok(Rasterized {
        image,
        bounds,
        scale,
    })
}
