//! Document error types

use thiserror::Error;

/// Errors raised by document model implementations
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Source does not resolve to a readable document
    #[error("Document not found: {0}")]
    NotFound(String),

    /// Requested page is outside `0..page_count`
    #[error("Page index {index} is out of range, document has {page_count} pages")]
    PageOutOfRange { index: i64, page_count: usize },

    /// Document or page content is unusable (bad bounds, unsupported data)
    #[error("Invalid content: {0}")]
    InvalidContent(String),

    /// Failed to draw page content
    #[error("Render error: {0}")]
    RenderError(String),

    /// Error reported by the PDF backend
    #[error("Backend error: {0}")]
    Backend(String),
}

/// Result type alias for document operations
pub type Result<T> = std::result::Result<T, DocumentError>;

/// Alias for Result
pub type DocumentResult<T> = Result<T>;

#[cfg(feature = "mupdf")]
impl From<mupdf::Error> for DocumentError {
    fn from(err: mupdf::Error) -> Self {
        DocumentError::Backend(err.to_string())
    }
}
