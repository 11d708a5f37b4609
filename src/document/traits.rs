//! Document traits
//!
//! Backend-agnostic interfaces for resolving documents and drawing pages.

use super::error::Result;
use super::source::SourceReference;
use super::types::Rect;
use crate::raster::RenderTarget;

/// Resolves a source locator into an opened document
///
/// Shared by every request, so implementations must be read-only.
pub trait DocumentResolver: Send + Sync {
    /// Open the document behind `source`, or fail with `DocumentError::NotFound`
    fn resolve(&self, source: &SourceReference) -> Result<Box<dyn Document>>;
}

/// An opened document
pub trait Document {
    /// Number of pages
    fn page_count(&self) -> usize;

    /// Load a page by zero-based index
    ///
    /// Fails with `DocumentError::PageOutOfRange` when `index >= page_count()`.
    fn page(&self, index: usize) -> Result<Box<dyn Page + '_>>;
}

/// One page of a document
pub trait Page {
    /// Visible media area in PDF user space
    fn content_bounds(&self) -> Rect;

    /// Draw the page over its full content bounds
    ///
    /// Content is expressed in PDF user space; `target.ctm()` maps it to pixels.
    fn draw(&self, target: &mut RenderTarget) -> Result<()>;
}
