//! Output location and file writing
//!
//! Thumbnails go to a writable directory chosen by configuration: the
//! platform cache directory (volatile), the platform data directory
//! (durable) or a fixed path. Files are written through a temporary file in
//! the same directory and only become visible under their final name once
//! complete; an existing file is never replaced.

use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Component, Path, PathBuf};
use std::str::FromStr;

/// Subdirectory created under the platform cache/data directories
pub const APP_DIR_NAME: &str = "pdf-thumbnail";

/// Provides the directory thumbnails are written to
pub trait OutputDirectory: Send + Sync {
    /// Absolute path of an existing, writable directory
    fn resolve(&self) -> io::Result<PathBuf>;
}

/// Configured output directory policy
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OutputLocation {
    /// Platform cache directory, may be purged by the OS
    #[default]
    Cache,
    /// Platform application data directory
    Data,
    /// Explicit directory
    Fixed(PathBuf),
}

impl OutputLocation {
    fn directory(&self) -> io::Result<PathBuf> {
        let dir = match self {
            OutputLocation::Cache => dirs::cache_dir().map(|d| d.join(APP_DIR_NAME)),
            OutputLocation::Data => dirs::data_dir().map(|d| d.join(APP_DIR_NAME)),
            OutputLocation::Fixed(path) => Some(path.clone()),
        };

        dir.ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("no platform directory available for {} output", self),
            )
        })
    }
}

impl OutputDirectory for OutputLocation {
    fn resolve(&self) -> io::Result<PathBuf> {
        let dir = self.directory()?;
        fs::create_dir_all(&dir)?;
        fs::canonicalize(&dir)
    }
}

impl fmt::Display for OutputLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputLocation::Cache => f.write_str("cache"),
            OutputLocation::Data => f.write_str("data"),
            OutputLocation::Fixed(path) => write!(f, "{}", path.display()),
        }
    }
}

impl FromStr for OutputLocation {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "" => Err("output location must not be empty".to_string()),
            "cache" => Ok(OutputLocation::Cache),
            "data" => Ok(OutputLocation::Data),
            path => Ok(OutputLocation::Fixed(PathBuf::from(path))),
        }
    }
}

/// Write `bytes` to `dir/name`, failing if that file already exists
///
/// On any error the temporary file is removed and nothing is left under
/// `name`.
pub fn write_new_file(dir: &Path, name: &str, bytes: &[u8]) -> io::Result<PathBuf> {
    let target = dir.join(name);

    let mut temp = tempfile::Builder::new()
        .prefix(".thumbnail-")
        .suffix(".partial")
        .tempfile_in(dir)?;
    temp.write_all(bytes)?;
    temp.as_file().sync_all()?;

    temp.persist_noclobber(&target).map_err(|e| e.error)?;
    Ok(target)
}

/// `file://` URI for an absolute path, each segment percent-encoded
pub fn file_uri(path: &Path) -> String {
    let segments: Vec<String> = path
        .components()
        .filter_map(|component| match component {
            Component::Normal(segment) => {
                Some(urlencoding::encode(&segment.to_string_lossy()).into_owned())
            }
            _ => None,
        })
        .collect();

    format!("file:///{}", segments.join("/"))
}
