//! Affine transforms
//!
//! Row-vector convention shared with PDF and MuPDF:
//! `x' = a*x + c*y + e`, `y' = b*x + d*y + f`.

use crate::document::Rect;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix {
    pub a: f32,
    pub b: f32,
    pub c: f32,
    pub d: f32,
    pub e: f32,
    pub f: f32,
}

impl Default for Matrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Matrix {
    pub const IDENTITY: Matrix = Matrix {
        a: 1.0,
        b: 0.0,
        c: 0.0,
        d: 1.0,
        e: 0.0,
        f: 0.0,
    };

    pub fn new(a: f32, b: f32, c: f32, d: f32, e: f32, f: f32) -> Self {
        Self { a, b, c, d, e, f }
    }

    pub fn scale(sx: f32, sy: f32) -> Self {
        Self::new(sx, 0.0, 0.0, sy, 0.0, 0.0)
    }

    pub fn translate(tx: f32, ty: f32) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, tx, ty)
    }

    /// Apply `self`, then `next`
    pub fn concat(&self, next: &Matrix) -> Matrix {
        Matrix {
            a: self.a * next.a + self.b * next.c,
            b: self.a * next.b + self.b * next.d,
            c: self.c * next.a + self.d * next.c,
            d: self.c * next.b + self.d * next.d,
            e: self.e * next.a + self.f * next.c + next.e,
            f: self.e * next.b + self.f * next.d + next.f,
        }
    }

    pub fn transform_point(&self, x: f32, y: f32) -> (f32, f32) {
        (
            self.a * x + self.c * y + self.e,
            self.b * x + self.d * y + self.f,
        )
    }

    /// Bounding box of the transformed rectangle
    pub fn transform_rect(&self, rect: Rect) -> Rect {
        let corners = [
            self.transform_point(rect.x, rect.y),
            self.transform_point(rect.right(), rect.y),
            self.transform_point(rect.x, rect.top()),
            self.transform_point(rect.right(), rect.top()),
        ];

        let (mut x0, mut y0) = corners[0];
        let (mut x1, mut y1) = corners[0];
        for &(x, y) in &corners[1..] {
            x0 = x0.min(x);
            y0 = y0.min(y);
            x1 = x1.max(x);
            y1 = y1.max(y);
        }

        Rect::from_corners(x0, y0, x1, y1)
    }

    /// PDF user space to image space for a page's content bounds
    ///
    /// Moves the top-left corner of `bounds` to the origin, flips the y axis
    /// and scales to device pixels: `(x, y) -> (s(x - x0), s(y0 + h - y))`.
    /// The content bounds land exactly on `[0, s*w] x [0, s*h]`.
    pub fn page_to_image(bounds: Rect, scale: f32) -> Matrix {
        Matrix::translate(-bounds.x, -bounds.top())
            .concat(&Matrix::scale(1.0, -1.0))
            .concat(&Matrix::scale(scale, scale))
    }
}
