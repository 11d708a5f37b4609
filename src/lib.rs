//! PDF Thumbnail Library
//!
//! Renders one page of a PDF document to an image file and reports where
//! it was written and how large the page is. The HTTP host binary lives in
//! main.rs.
//!
//! # Modules
//!
//! - `document`: Document/page model traits and the in-memory backend
//! - `formats`: MuPDF-backed PDF documents (feature `mupdf`)
//! - `raster`: Page rasterizer (transform, render target, encoding policy)
//! - `naming`: Collision-resistant output file names
//! - `storage`: Output directory selection and no-clobber writes
//! - `service`: One request end to end, with classified errors
//!
//! # Usage
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use pdf_thumbnail::formats::pdf::PdfResolver;
//! use pdf_thumbnail::raster::RenderPolicy;
//! use pdf_thumbnail::service::{ThumbnailRequest, ThumbnailService};
//! use pdf_thumbnail::storage::OutputLocation;
//!
//! let service = ThumbnailService::new(
//!     Arc::new(PdfResolver::new()),
//!     Arc::new(OutputLocation::Cache),
//!     RenderPolicy::scaled_png(2.0),
//! );
//! let descriptor = service.generate(ThumbnailRequest::new("/docs/map.pdf", 0)).await?;
//! println!("{} ({}x{})", descriptor.uri, descriptor.width, descriptor.height);
//! ```

pub mod document;
pub mod formats;
pub mod naming;
pub mod raster;
pub mod service;
pub mod storage;
