//! Format-specific document implementations
//!
//! Backends for the traits in the `document` module. Each one hands the
//! rasterizer a page that draws in PDF user space through the render
//! target's transform.

#[cfg(feature = "mupdf")]
pub mod pdf;
