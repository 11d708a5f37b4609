//! Document model
//!
//! Backend-agnostic view of a document: resolve a source, pick a page by
//! index, read its content bounds and draw it into a render target.
//!
//! # Architecture
//!
//! ```text
//!   SourceReference ──▶ DocumentResolver::resolve ──▶ Box<dyn Document>
//!                                                        │ page(index)
//!                                                        ▼
//!                                      Box<dyn Page> ── content_bounds()
//!                                                   └── draw(&mut RenderTarget)
//! ```
//!
//! Backends:
//!
//! - [`memory`]: filled rectangles held in memory
//! - `formats::pdf`: MuPDF (cargo feature `mupdf`)

mod error;
pub mod memory;
mod source;
mod traits;
mod types;

pub use error::{DocumentError, DocumentResult, Result};
pub use source::SourceReference;
pub use traits::{Document, DocumentResolver, Page};
pub use types::Rect;
