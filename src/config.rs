//! Configuration management for the thumbnail server

use std::env;

use pdf_thumbnail::raster::{ImageFormat, Quality, RenderPolicy};
use pdf_thumbnail::storage::OutputLocation;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub server: ServerConfig,
    pub thumbnails: ThumbnailConfig,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ThumbnailConfig {
    /// Where thumbnails are written
    pub output: OutputLocation,
    /// Scale, format and quality of every render
    pub policy: RenderPolicy,
}

#[derive(Debug, Error)]
#[error("Invalid value for {var}: {message}")]
pub struct ConfigError {
    pub var: &'static str,
    pub message: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
            },
            thumbnails: ThumbnailConfig {
                output: OutputLocation::Cache,
                policy: RenderPolicy::default(),
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unset keys keep their defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Config::default();

        let port = match lookup("SERVER_PORT") {
            Some(port) => port.parse().map_err(|e| ConfigError {
                var: "SERVER_PORT",
                message: format!("{}", e),
            })?,
            None => defaults.server.port,
        };

        let output = match lookup("THUMBNAIL_OUTPUT") {
            Some(output) => output.parse().map_err(|message| ConfigError {
                var: "THUMBNAIL_OUTPUT",
                message,
            })?,
            None => defaults.thumbnails.output,
        };

        let scale = match lookup("THUMBNAIL_SCALE") {
            Some(scale) => scale.parse::<f32>().map_err(|e| ConfigError {
                var: "THUMBNAIL_SCALE",
                message: format!("{}", e),
            })?,
            None => defaults.thumbnails.policy.scale,
        };

        let format = match lookup("THUMBNAIL_FORMAT") {
            Some(format) => format.parse::<ImageFormat>().map_err(|message| ConfigError {
                var: "THUMBNAIL_FORMAT",
                message,
            })?,
            None => defaults.thumbnails.policy.format,
        };

        let quality = match lookup("THUMBNAIL_QUALITY") {
            Some(quality) => quality.parse::<Quality>().map_err(|message| ConfigError {
                var: "THUMBNAIL_QUALITY",
                message,
            })?,
            None => defaults.thumbnails.policy.quality,
        };

        Ok(Config {
            server: ServerConfig {
                host: lookup("SERVER_HOST").unwrap_or(defaults.server.host),
                port,
            },
            thumbnails: ThumbnailConfig {
                output,
                policy: RenderPolicy::new(scale, format, quality),
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::path::PathBuf;

    fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = Config::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.thumbnails.policy, RenderPolicy::unscaled_max_jpeg());
    }

    #[test]
    fn test_reads_all_keys() {
        let config = Config::from_lookup(lookup(&[
            ("SERVER_HOST", "127.0.0.1"),
            ("SERVER_PORT", "8080"),
            ("THUMBNAIL_OUTPUT", "/srv/thumbs"),
            ("THUMBNAIL_SCALE", "2"),
            ("THUMBNAIL_FORMAT", "png"),
            ("THUMBNAIL_QUALITY", "0.8"),
        ]))
        .unwrap();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 8080);
        assert_eq!(
            config.thumbnails.output,
            OutputLocation::Fixed(PathBuf::from("/srv/thumbs"))
        );
        assert_eq!(config.thumbnails.policy.scale, 2.0);
        assert_eq!(config.thumbnails.policy.format, ImageFormat::Png);
        assert_eq!(config.thumbnails.policy.quality.value(), 80);
    }

    #[test]
    fn test_invalid_values_name_the_variable() {
        let err = Config::from_lookup(lookup(&[("THUMBNAIL_FORMAT", "gif")])).unwrap_err();
        assert_eq!(err.var, "THUMBNAIL_FORMAT");

        let err = Config::from_lookup(lookup(&[("SERVER_PORT", "http")])).unwrap_err();
        assert_eq!(err.var, "SERVER_PORT");
    }
}
