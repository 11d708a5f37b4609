//! Resolution and encoding policy

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Smallest accepted render scale
pub const MIN_SCALE: f32 = 0.1;

/// Largest accepted render scale
pub const MAX_SCALE: f32 = 8.0;

/// Output image encoding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    /// Lossy, honours [`Quality`]
    #[default]
    Jpeg,
    /// Lossless
    Png,
    /// Lossless
    Webp,
}

impl ImageFormat {
    pub fn content_type(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "image/jpeg",
            ImageFormat::Png => "image/png",
            ImageFormat::Webp => "image/webp",
        }
    }

    pub fn extension(&self) -> &'static str {
        match self {
            ImageFormat::Jpeg => "jpg",
            ImageFormat::Png => "png",
            ImageFormat::Webp => "webp",
        }
    }

    pub fn is_lossy(&self) -> bool {
        matches!(self, ImageFormat::Jpeg)
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ImageFormat::Jpeg => "jpeg",
            ImageFormat::Png => "png",
            ImageFormat::Webp => "webp",
        };
        f.write_str(name)
    }
}

impl FromStr for ImageFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "jpeg" | "jpg" => Ok(ImageFormat::Jpeg),
            "png" => Ok(ImageFormat::Png),
            "webp" => Ok(ImageFormat::Webp),
            other => Err(format!("unknown image format: {}", other)),
        }
    }
}

/// Lossy encoding quality, 1..=100
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Quality(u8);

impl Quality {
    pub const MAX: Quality = Quality(100);

    /// Quality on the 0..=100 scale, clamped to the encoder's 1..=100 domain
    pub fn new(value: u8) -> Self {
        Self(value.clamp(1, 100))
    }

    /// Quality on the 0.0..=1.0 scale
    pub fn from_fraction(fraction: f32) -> Self {
        if !fraction.is_finite() {
            return Self::MAX;
        }
        Self::new((fraction.clamp(0.0, 1.0) * 100.0).round() as u8)
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl Default for Quality {
    fn default() -> Self {
        Self::MAX
    }
}

impl FromStr for Quality {
    type Err = String;

    /// Accepts either `0.0..=1.0` (with a decimal point) or `0..=100`
    ///
    /// Values outside those ranges are rejected rather than clamped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.contains('.') {
            let fraction: f32 = s
                .parse()
                .map_err(|e| format!("invalid quality {:?}: {}", s, e))?;
            if !(0.0..=1.0).contains(&fraction) {
                return Err(format!("quality {:?} is outside 0.0..=1.0", s));
            }
            Ok(Self::from_fraction(fraction))
        } else {
            let value: u32 = s
                .parse()
                .map_err(|e| format!("invalid quality {:?}: {}", s, e))?;
            if value > 100 {
                return Err(format!("quality {} is outside 0..=100", value));
            }
            Ok(Self::new(value as u8))
        }
    }
}

/// How a page is rasterized and encoded
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderPolicy {
    /// Device pixels per PDF unit
    pub scale: f32,
    pub format: ImageFormat,
    /// Ignored by lossless formats
    pub quality: Quality,
}

impl RenderPolicy {
    pub fn new(scale: f32, format: ImageFormat, quality: Quality) -> Self {
        Self {
            scale: normalize_scale(scale),
            format,
            quality,
        }
    }

    /// One pixel per PDF unit, JPEG at maximum quality
    pub fn unscaled_max_jpeg() -> Self {
        Self::new(1.0, ImageFormat::Jpeg, Quality::MAX)
    }

    /// Device-scaled, high quality JPEG
    pub fn scaled_jpeg(scale: f32) -> Self {
        Self::new(scale, ImageFormat::Jpeg, Quality::new(90))
    }

    /// Device-scaled PNG
    pub fn scaled_png(scale: f32) -> Self {
        Self::new(scale, ImageFormat::Png, Quality::MAX)
    }
}

impl Default for RenderPolicy {
    fn default() -> Self {
        Self::unscaled_max_jpeg()
    }
}

fn normalize_scale(scale: f32) -> f32 {
    if scale.is_finite() {
        scale.clamp(MIN_SCALE, MAX_SCALE)
    } else {
        1.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_parsing() {
        assert_eq!("JPG".parse::<ImageFormat>().unwrap(), ImageFormat::Jpeg);
        assert_eq!("png".parse::<ImageFormat>().unwrap(), ImageFormat::Png);
        assert_eq!("webp".parse::<ImageFormat>().unwrap(), ImageFormat::Webp);
        assert!("gif".parse::<ImageFormat>().is_err());
    }

    #[test]
    fn test_format_extensions() {
        assert_eq!(ImageFormat::Jpeg.extension(), "jpg");
        assert_eq!(ImageFormat::Png.content_type(), "image/png");
        assert!(ImageFormat::Jpeg.is_lossy());
        assert!(!ImageFormat::Webp.is_lossy());
    }

    #[test]
    fn test_quality_scales() {
        assert_eq!(Quality::from_fraction(1.0), Quality::MAX);
        assert_eq!(Quality::from_fraction(0.85).value(), 85);
        assert_eq!(Quality::from_fraction(0.0).value(), 1);
        assert_eq!(Quality::new(0).value(), 1);
        assert_eq!("0.5".parse::<Quality>().unwrap().value(), 50);
        assert_eq!("75".parse::<Quality>().unwrap().value(), 75);
        assert_eq!("100".parse::<Quality>().unwrap(), Quality::MAX);
        assert_eq!("1.0".parse::<Quality>().unwrap(), Quality::MAX);
    }

    #[test]
    fn test_out_of_range_quality_is_rejected() {
        for input in ["101", "250", "256", "70000", "-5", "1.5", "-0.1", "high"] {
            assert!(
                input.parse::<Quality>().is_err(),
                "expected {:?} to be rejected",
                input
            );
        }
    }

    #[test]
    fn test_policy_presets() {
        let unscaled = RenderPolicy::unscaled_max_jpeg();
        assert_eq!(unscaled.scale, 1.0);
        assert_eq!(unscaled.quality, Quality::MAX);

        let png = RenderPolicy::scaled_png(3.0);
        assert_eq!(png.format, ImageFormat::Png);
        assert_eq!(png.scale, 3.0);

        assert_eq!(RenderPolicy::default(), unscaled);
    }

    #[test]
    fn test_scale_is_clamped() {
        assert_eq!(RenderPolicy::scaled_jpeg(100.0).scale, MAX_SCALE);
        assert_eq!(RenderPolicy::scaled_jpeg(0.0).scale, MIN_SCALE);
        assert_eq!(RenderPolicy::scaled_jpeg(f32::NAN).scale, 1.0);
    }
}
