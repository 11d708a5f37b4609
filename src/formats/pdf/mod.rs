//! PDF format implementation
//!
//! MuPDF-backed document model.
//!
//! - [`PdfResolver`]: opens PDF files from a [`SourceReference`](crate::document::SourceReference)
//! - [`PdfDocument`]: page count and page lookup
//! - [`PdfPage`]: content bounds and drawing into a render target
//!
//! Each request opens its own MuPDF document, so nothing is shared between
//! threads.

mod parser;
mod renderer;

pub use parser::{PdfDocument, PdfResolver};
pub use renderer::PdfPage;
