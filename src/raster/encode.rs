//! Image encoding
//!
//! Converts a finished render target into compressed bytes. There is no
//! fallback: if the chosen encoder fails the render fails.

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::codecs::webp::WebPEncoder;
use image::{ExtendedColorType, ImageEncoder, Rgb, RgbImage, RgbaImage};

use super::error::EncodeError;
use super::policy::{ImageFormat, Quality};

/// Encoded image bytes plus what they contain
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    pub bytes: Vec<u8>,
    pub format: ImageFormat,
    /// Pixel dimensions of the encoded buffer
    pub width: u32,
    pub height: u32,
}

impl EncodedImage {
    pub fn content_type(&self) -> &'static str {
        self.format.content_type()
    }
}

/// Converts a finished pixel buffer into encoded bytes
pub trait PixelEncoder: Send + Sync {
    fn encode(
        &self,
        image: &RgbaImage,
        format: ImageFormat,
        quality: Quality,
    ) -> Result<EncodedImage, EncodeError>;
}

/// [`PixelEncoder`] backed by the `image` crate codecs
#[derive(Debug, Clone, Copy, Default)]
pub struct CodecEncoder;

impl PixelEncoder for CodecEncoder {
    fn encode(
        &self,
        image: &RgbaImage,
        format: ImageFormat,
        quality: Quality,
    ) -> Result<EncodedImage, EncodeError> {
        encode(image, format, quality)
    }
}

/// Encode an RGBA buffer
///
/// `quality` only applies to lossy formats.
pub fn encode(
    image: &RgbaImage,
    format: ImageFormat,
    quality: Quality,
) -> Result<EncodedImage, EncodeError> {
    let (width, height) = image.dimensions();
    let mut bytes = Vec::new();

    let result = match format {
        ImageFormat::Jpeg => {
            // JPEG has no alpha channel
            let rgb = RgbImage::from_fn(width, height, |x, y| {
                let p = image.get_pixel(x, y);
                Rgb([p[0], p[1], p[2]])
            });
            JpegEncoder::new_with_quality(&mut bytes, quality.value()).write_image(
                rgb.as_raw(),
                width,
                height,
                ExtendedColorType::Rgb8,
            )
        }
        ImageFormat::Png => PngEncoder::new(&mut bytes).write_image(
            image.as_raw(),
            width,
            height,
            ExtendedColorType::Rgba8,
        ),
        ImageFormat::Webp => WebPEncoder::new_lossless(&mut bytes).write_image(
            image.as_raw(),
            width,
            height,
            ExtendedColorType::Rgba8,
        ),
    };

    result.map_err(|source| EncodeError::Image { format, source })?;

    if bytes.is_empty() {
        return Err(EncodeError::Empty(format));
    }

    Ok(EncodedImage {
        bytes,
        format,
        width,
        height,
    })
}
