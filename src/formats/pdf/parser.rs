//! PDF document loading

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::document::{
    Document, DocumentError, DocumentResolver, DocumentResult, Page, SourceReference,
};

use super::renderer::PdfPage;

/// How far into the file the `%PDF-` header may start
const HEADER_SEARCH_LEN: usize = 1024;

/// Opens PDF files with MuPDF
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfResolver;

impl PdfResolver {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentResolver for PdfResolver {
    fn resolve(&self, source: &SourceReference) -> DocumentResult<Box<dyn Document>> {
        let path = source.path();
        let not_found = |reason: String| {
            DocumentError::NotFound(format!("File {} not found: {}", source, reason))
        };

        if !path.is_file() {
            return Err(not_found("no such file".to_string()));
        }
        if !has_pdf_header(path).map_err(|e| not_found(e.to_string()))? {
            return Err(not_found("not a PDF document".to_string()));
        }

        let path_str = path.to_string_lossy();
        let doc = mupdf::Document::open(&*path_str).map_err(|e| not_found(e.to_string()))?;
        let page_count = doc
            .page_count()
            .map_err(|e| not_found(e.to_string()))?
            .max(0) as usize;

        tracing::debug!("Opened {} ({} pages)", source, page_count);

        Ok(Box::new(PdfDocument { doc, page_count }))
    }
}

/// An opened PDF
pub struct PdfDocument {
    doc: mupdf::Document,
    page_count: usize,
}

impl Document for PdfDocument {
    fn page_count(&self) -> usize {
        self.page_count
    }

    fn page(&self, index: usize) -> DocumentResult<Box<dyn Page + '_>> {
        if index >= self.page_count {
            return Err(DocumentError::PageOutOfRange {
                index: index as i64,
                page_count: self.page_count,
            });
        }

        let page = self.doc.load_page(index as i32)?;
        Ok(Box::new(PdfPage::new(page)?))
    }
}

/// Whether `%PDF-` appears near the start of the file
fn has_pdf_header(path: &Path) -> std::io::Result<bool> {
    let mut head = Vec::with_capacity(HEADER_SEARCH_LEN);
    File::open(path)?
        .take(HEADER_SEARCH_LEN as u64)
        .read_to_end(&mut head)?;

    Ok(head.windows(5).any(|w| w == b"%PDF-"))
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    /// Single-page PDF, `width` x `height`, with a blue square in the
    /// top-left corner of the media box
    pub(crate) fn marker_pdf(width: u32, height: u32) -> Vec<u8> {
        let content = format!("0 0 1 rg 0 {} 50 50 re f\n", height - 50);
        let objects = [
            "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
            "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
            format!(
                "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 {} {}] /Contents 4 0 R /Resources << >> >>",
                width, height
            ),
            format!(
                "<< /Length {} >>\nstream\n{}endstream",
                content.len(),
                content
            ),
        ];

        let mut pdf = b"%PDF-1.4\n".to_vec();
        let mut offsets = Vec::new();
        for (i, body) in objects.iter().enumerate() {
            offsets.push(pdf.len());
            pdf.extend_from_slice(format!("{} 0 obj\n{}\nendobj\n", i + 1, body).as_bytes());
        }

        let xref = pdf.len();
        pdf.extend_from_slice(format!("xref\n0 {}\n", objects.len() + 1).as_bytes());
        pdf.extend_from_slice(b"0000000000 65535 f \n");
        for offset in offsets {
            pdf.extend_from_slice(format!("{:010} 00000 n \n", offset).as_bytes());
        }
        pdf.extend_from_slice(
            format!(
                "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{}\n%%EOF\n",
                objects.len() + 1,
                xref
            )
            .as_bytes(),
        );
        pdf
    }

    fn source(path: &Path) -> SourceReference {
        SourceReference::parse(&path.to_string_lossy()).unwrap()
    }

    #[test]
    fn test_resolve_and_page_lookup() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("marker.pdf");
        fs::write(&path, marker_pdf(200, 300)).unwrap();

        let doc = PdfResolver::new().resolve(&source(&path)).unwrap();
        assert_eq!(doc.page_count(), 1);

        let page = doc.page(0).unwrap();
        let bounds = page.content_bounds();
        assert_eq!((bounds.width, bounds.height), (200.0, 300.0));

        assert!(matches!(
            doc.page(1),
            Err(DocumentError::PageOutOfRange { page_count: 1, .. })
        ));
    }

    #[test]
    fn test_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("missing.pdf");
        assert!(matches!(
            PdfResolver::new().resolve(&source(&path)),
            Err(DocumentError::NotFound(_))
        ));
    }

    #[test]
    fn test_non_pdf_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("notes.pdf");
        fs::write(&path, b"just some text, no header").unwrap();
        assert!(matches!(
            PdfResolver::new().resolve(&source(&path)),
            Err(DocumentError::NotFound(_))
        ));
    }

    #[test]
    fn test_directory_is_not_a_document() {
        let temp_dir = TempDir::new().unwrap();
        assert!(matches!(
            PdfResolver::new().resolve(&source(temp_dir.path())),
            Err(DocumentError::NotFound(_))
        ));
    }
}
