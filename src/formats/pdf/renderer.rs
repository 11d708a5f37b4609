//! PDF page rendering
//!
//! MuPDF already maps PDF user space into its own y-down page space. The
//! render target carries the one transform that matters (user space to
//! image pixels), so drawing first undoes MuPDF's page flip and then applies
//! the target's transform.

use mupdf::{Colorspace, Device, Pixmap};

use crate::document::{DocumentResult, Page, Rect};
use crate::raster::{Matrix, RenderTarget};

pub struct PdfPage {
    page: mupdf::Page,
    /// Page bounds in MuPDF page space
    page_bounds: mupdf::Rect,
}

impl PdfPage {
    pub fn new(page: mupdf::Page) -> DocumentResult<Self> {
        let page_bounds = page.bounds()?;
        Ok(Self { page, page_bounds })
    }

    /// MuPDF page space to user space relative to the media box origin
    fn page_to_user(&self) -> Matrix {
        Matrix::new(
            1.0,
            0.0,
            0.0,
            -1.0,
            -self.page_bounds.x0,
            self.page_bounds.y1,
        )
    }
}

impl Page for PdfPage {
    fn content_bounds(&self) -> Rect {
        let b = &self.page_bounds;
        Rect::new(0.0, 0.0, b.x1 - b.x0, b.y1 - b.y0)
    }

    fn draw(&self, target: &mut RenderTarget) -> DocumentResult<()> {
        let m = self.page_to_user().concat(&target.ctm());
        let matrix = mupdf::Matrix::new(m.a, m.b, m.c, m.d, m.e, m.f);

        // Render to pixmap
        let colorspace = Colorspace::device_rgb();
        let mut pixmap = Pixmap::new_with_w_h(
            &colorspace,
            target.width() as i32,
            target.height() as i32,
            false,
        )?;
        pixmap.clear_with(0xff)?;

        {
            let device = Device::from_pixmap(&pixmap)?;
            self.page.run(&device, &matrix)?;
        }

        target.blit_samples(pixmap.samples(), pixmap.n() as usize)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{DocumentResolver, SourceReference};
    use crate::formats::pdf::parser::tests::marker_pdf;
    use crate::formats::pdf::PdfResolver;
    use crate::raster::{self, RenderPolicy};
    use crate::service::{ThumbnailRequest, ThumbnailService};
    use crate::storage::OutputLocation;
    use image::Rgba;
    use std::fs;
    use std::sync::Arc;
    use tempfile::TempDir;

    fn is_blue(pixel: &Rgba<u8>) -> bool {
        pixel[2] > 200 && pixel[0] < 60 && pixel[1] < 60
    }

    fn is_white(pixel: &Rgba<u8>) -> bool {
        pixel[0] > 200 && pixel[1] > 200 && pixel[2] > 200
    }

    #[test]
    fn test_page_to_user_flips_page_space() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("marker.pdf");
        fs::write(&path, marker_pdf(200, 300)).unwrap();

        let source = SourceReference::parse(&path.to_string_lossy()).unwrap();
        let doc = PdfResolver::new().resolve(&source).unwrap();
        let page = doc.page(0).unwrap();

        let target = raster::render_page(page.as_ref(), 1.0).unwrap();
        let image = target.image();

        assert_eq!((image.width(), image.height()), (200, 300));
        assert!(is_blue(image.get_pixel(10, 10)));
        assert!(is_white(image.get_pixel(10, 290)));
        assert!(is_white(image.get_pixel(190, 10)));
    }

    #[test]
    fn test_service_renders_pdf_marker() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("atlas.pdf");
        fs::write(&path, marker_pdf(200, 300)).unwrap();
        let out = temp_dir.path().join("thumbs");

        let service = ThumbnailService::new(
            Arc::new(PdfResolver::new()),
            Arc::new(OutputLocation::Fixed(out)),
            RenderPolicy::scaled_png(2.0),
        );
        let request = ThumbnailRequest::new(path.to_string_lossy(), 0);
        let descriptor = service
            .generate_with_rng(&request, &mut rand::thread_rng())
            .unwrap();

        assert_eq!((descriptor.width, descriptor.height), (200, 300));

        let decoded = image::open(&descriptor.path).unwrap().to_rgba8();
        assert_eq!((decoded.width(), decoded.height()), (400, 600));
        assert!(is_blue(decoded.get_pixel(20, 20)));
        assert!(is_white(decoded.get_pixel(20, 580)));
        assert!(is_white(decoded.get_pixel(380, 20)));
    }
}
