//! Thumbnail request errors
//!
//! Every failure is classified by the step it came from and keeps its
//! underlying cause reachable through `std::error::Error::source`.

use std::io;

use serde::Serialize;
use thiserror::Error;

use crate::document::DocumentError;
use crate::raster::EncodeError;

/// Boxed underlying cause
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum ThumbnailError {
    /// Source locator does not resolve to a readable document
    #[error("File {locator} not found")]
    SourceNotFound {
        locator: String,
        #[source]
        cause: DocumentError,
    },

    /// Page index is negative or not below the page count
    #[error("Page number {index} is invalid, file has {page_count} pages")]
    PageOutOfRange { index: i64, page_count: usize },

    /// Page could not be drawn (bad bounds, backend failure, worker panic)
    #[error("Cannot render page {index}: {cause}")]
    RenderFailed {
        index: i64,
        #[source]
        cause: BoxError,
    },

    /// Pixel buffer could not be encoded
    #[error("Cannot encode page {index}: {cause}")]
    EncodingFailed {
        index: i64,
        #[source]
        cause: EncodeError,
    },

    /// Encoded bytes could not be persisted
    #[error("Cannot write image data to {target}: {cause}")]
    WriteFailed {
        target: String,
        #[source]
        cause: io::Error,
    },
}

/// Error classification exposed to callers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    SourceNotFound,
    PageOutOfRange,
    RenderFailed,
    EncodingFailed,
    WriteFailed,
}

impl ThumbnailError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ThumbnailError::SourceNotFound { .. } => ErrorKind::SourceNotFound,
            ThumbnailError::PageOutOfRange { .. } => ErrorKind::PageOutOfRange,
            ThumbnailError::RenderFailed { .. } => ErrorKind::RenderFailed,
            ThumbnailError::EncodingFailed { .. } => ErrorKind::EncodingFailed,
            ThumbnailError::WriteFailed { .. } => ErrorKind::WriteFailed,
        }
    }

    /// Host-facing rejection code
    pub fn code(&self) -> &'static str {
        match self.kind() {
            ErrorKind::SourceNotFound => "FILE_NOT_FOUND",
            ErrorKind::PageOutOfRange => "INVALID_PAGE",
            ErrorKind::RenderFailed | ErrorKind::EncodingFailed | ErrorKind::WriteFailed => {
                "INTERNAL_ERROR"
            }
        }
    }

    /// Whether repeating the same request may succeed
    ///
    /// Only writes interrupted by transient I/O conditions qualify.
    pub fn is_retryable(&self) -> bool {
        match self {
            ThumbnailError::WriteFailed { cause, .. } => matches!(
                cause.kind(),
                io::ErrorKind::Interrupted | io::ErrorKind::WouldBlock | io::ErrorKind::TimedOut
            ),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_codes() {
        let not_found = ThumbnailError::SourceNotFound {
            locator: "/a.pdf".into(),
            cause: DocumentError::NotFound("/a.pdf".into()),
        };
        assert_eq!(not_found.code(), "FILE_NOT_FOUND");
        assert_eq!(not_found.to_string(), "File /a.pdf not found");
        assert!(not_found.source().is_some());

        let out_of_range = ThumbnailError::PageOutOfRange {
            index: 5,
            page_count: 3,
        };
        assert_eq!(out_of_range.code(), "INVALID_PAGE");
        assert_eq!(
            out_of_range.to_string(),
            "Page number 5 is invalid, file has 3 pages"
        );
    }

    #[test]
    fn test_write_failure_keeps_cause() {
        let err = ThumbnailError::WriteFailed {
            target: "/thumbs/a.jpg".into(),
            cause: io::Error::new(io::ErrorKind::PermissionDenied, "read-only volume"),
        };
        assert_eq!(err.kind(), ErrorKind::WriteFailed);
        assert_eq!(err.code(), "INTERNAL_ERROR");
        assert!(!err.is_retryable());
        assert!(err.to_string().contains("read-only volume"));
        assert_eq!(err.source().unwrap().to_string(), "read-only volume");
    }

    #[test]
    fn test_transient_write_is_retryable() {
        let err = ThumbnailError::WriteFailed {
            target: "/thumbs/a.jpg".into(),
            cause: io::Error::new(io::ErrorKind::Interrupted, "signal"),
        };
        assert!(err.is_retryable());
    }
}
