//! In-memory document model
//!
//! Pages made of filled rectangles in PDF user space. Handy for synthetic
//! content, tests and benchmarks where no PDF file is involved.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use super::error::{DocumentError, Result};
use super::source::SourceReference;
use super::traits::{Document, DocumentResolver, Page};
use super::types::Rect;
use crate::raster::RenderTarget;

/// A filled rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shape {
    pub rect: Rect,
    pub color: [u8; 4],
}

/// Page built from a list of shapes, painted in order
#[derive(Debug, Clone, PartialEq)]
pub struct ShapePage {
    bounds: Rect,
    shapes: Vec<Shape>,
}

impl ShapePage {
    pub fn new(bounds: Rect) -> Self {
        Self {
            bounds,
            shapes: Vec::new(),
        }
    }

    /// Add a filled rectangle (user-space coordinates)
    pub fn with_shape(mut self, rect: Rect, color: [u8; 4]) -> Self {
        self.shapes.push(Shape { rect, color });
        self
    }

    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }
}

impl Page for ShapePage {
    fn content_bounds(&self) -> Rect {
        self.bounds
    }

    fn draw(&self, target: &mut RenderTarget) -> Result<()> {
        for shape in &self.shapes {
            target.fill_rect(shape.rect, shape.color);
        }
        Ok(())
    }
}

/// Document holding its pages in memory
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryDocument {
    pages: Vec<ShapePage>,
}

impl MemoryDocument {
    pub fn new(pages: Vec<ShapePage>) -> Self {
        Self { pages }
    }

    /// Document with `count` blank pages of the given bounds
    pub fn blank(count: usize, bounds: Rect) -> Self {
        Self::new(vec![ShapePage::new(bounds); count])
    }
}

impl Document for MemoryDocument {
    fn page_count(&self) -> usize {
        self.pages.len()
    }

    fn page(&self, index: usize) -> Result<Box<dyn Page + '_>> {
        self.pages
            .get(index)
            .map(|page| Box::new(page.clone()) as Box<dyn Page + '_>)
            .ok_or(DocumentError::PageOutOfRange {
                index: index as i64,
                page_count: self.pages.len(),
            })
    }
}

/// Resolver over a fixed set of in-memory documents keyed by path
#[derive(Debug, Clone, Default)]
pub struct MemoryResolver {
    documents: HashMap<PathBuf, MemoryDocument>,
}

impl MemoryResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a document under `path`
    pub fn with_document<P: AsRef<Path>>(mut self, path: P, document: MemoryDocument) -> Self {
        self.documents.insert(path.as_ref().to_path_buf(), document);
        self
    }
}

impl DocumentResolver for MemoryResolver {
    fn resolve(&self, source: &SourceReference) -> Result<Box<dyn Document>> {
        self.documents
            .get(source.path())
            .cloned()
            .map(|doc| Box::new(doc) as Box<dyn Document>)
            .ok_or_else(|| DocumentError::NotFound(format!("File {} not found", source)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_out_of_range_reports_count() {
        let doc = MemoryDocument::blank(3, Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(doc.page_count(), 3);

        let result = doc.page(5).map(|_| ());
        match result {
            Err(DocumentError::PageOutOfRange { index, page_count }) => {
                assert_eq!(index, 5);
                assert_eq!(page_count, 3);
            }
            other => panic!("expected PageOutOfRange, got {:?}", other),
        }
    }

    #[test]
    fn test_resolver_by_path_and_uri() {
        let resolver = MemoryResolver::new().with_document(
            "/docs/a.pdf",
            MemoryDocument::blank(1, Rect::new(0.0, 0.0, 10.0, 10.0)),
        );

        let by_path = SourceReference::parse("/docs/a.pdf").unwrap();
        assert_eq!(resolver.resolve(&by_path).unwrap().page_count(), 1);

        let by_uri = SourceReference::parse("file:///docs/a.pdf").unwrap();
        assert!(resolver.resolve(&by_uri).is_ok());

        let missing = SourceReference::parse("/docs/b.pdf").unwrap();
        assert!(matches!(
            resolver.resolve(&missing),
            Err(DocumentError::NotFound(_))
        ));
    }

    #[test]
    fn test_page_bounds() {
        let bounds = Rect::new(0.0, 0.0, 200.0, 300.0);
        let doc = MemoryDocument::new(vec![ShapePage::new(bounds)]);
        assert_eq!(doc.page(0).unwrap().content_bounds(), bounds);
    }
}
