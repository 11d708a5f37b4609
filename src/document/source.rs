//! Source locators
//!
//! Callers identify a document either by a filesystem path or by a
//! `file://` URI. Anything else fails to resolve.

use std::fmt;
use std::path::{Path, PathBuf};

use super::error::{DocumentError, Result};

const FILE_SCHEME: &str = "file://";

/// A resolvable locator for a PDF document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceReference {
    /// Locator exactly as the caller supplied it
    original: String,
    /// Local filesystem path it resolves to
    path: PathBuf,
}

impl SourceReference {
    /// Parse a caller-supplied locator
    pub fn parse(locator: &str) -> Result<Self> {
        if locator.is_empty() {
            return Err(DocumentError::NotFound("empty source locator".to_string()));
        }

        let path = if let Some(rest) = locator.strip_prefix(FILE_SCHEME) {
            let rest = rest.strip_prefix("localhost").unwrap_or(rest);
            if !rest.starts_with('/') {
                return Err(DocumentError::NotFound(format!(
                    "File {} not found: file URI must carry an absolute path",
                    locator
                )));
            }
            let decoded = urlencoding::decode(rest).map_err(|e| {
                DocumentError::NotFound(format!("File {} not found: {}", locator, e))
            })?;
            PathBuf::from(decoded.into_owned())
        } else if locator.contains("://") {
            return Err(DocumentError::NotFound(format!(
                "File {} not found: unsupported URI scheme",
                locator
            )));
        } else {
            PathBuf::from(locator)
        };

        Ok(Self {
            original: locator.to_string(),
            path,
        })
    }

    /// Locator as supplied by the caller
    pub fn as_str(&self) -> &str {
        &self.original
    }

    /// Filesystem path the locator points at
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for SourceReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.original)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_path() {
        let source = SourceReference::parse("/docs/report.pdf").unwrap();
        assert_eq!(source.path(), Path::new("/docs/report.pdf"));
        assert_eq!(source.as_str(), "/docs/report.pdf");
    }

    #[test]
    fn test_file_uri_is_decoded() {
        let source = SourceReference::parse("file:///tmp/My%20Docs/a.pdf").unwrap();
        assert_eq!(source.path(), Path::new("/tmp/My Docs/a.pdf"));
        assert_eq!(source.to_string(), "file:///tmp/My%20Docs/a.pdf");
    }

    #[test]
    fn test_file_uri_with_localhost() {
        let source = SourceReference::parse("file://localhost/tmp/a.pdf").unwrap();
        assert_eq!(source.path(), Path::new("/tmp/a.pdf"));
    }

    #[test]
    fn test_rejected_locators() {
        for locator in ["", "https://example.com/a.pdf", "file://relative/a.pdf"] {
            assert!(
                matches!(
                    SourceReference::parse(locator),
                    Err(DocumentError::NotFound(_))
                ),
                "expected {:?} to be rejected",
                locator
            );
        }
    }
}
