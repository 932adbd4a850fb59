//! Drawing primitives onto a [`Surface`].
//!
//! The painter owns no pixels. It runs a rasterizer and forwards each
//! coordinate to the surface, which handles bounds and overwrite.

use crate::surface::Surface;
use crate::types::{Colour, Point, RoundingMode};

use super::{circle_spans, outline_pixels, rasterize_circle, scanline_spans, LinePixels, Span};

/// Writes rasterized geometry to a surface.
pub struct Painter<'a, S: Surface + ?Sized> {
    surface: &'a mut S,
    rounding: RoundingMode,
}

impl<'a, S: Surface + ?Sized> Painter<'a, S> {
    /// Create a painter using the default rounding mode.
    pub fn new(surface: &'a mut S) -> Self {
        Self {
            surface,
            rounding: RoundingMode::default(),
        }
    }

    /// Set the rounding mode used for every float-to-pixel conversion.
    pub fn with_rounding(mut self, rounding: RoundingMode) -> Self {
        self.rounding = rounding;
        self
    }

    /// The rounding mode in use.
    pub fn rounding(&self) -> RoundingMode {
        self.rounding
    }

    /// Plot a single pixel.
    pub fn pixel(&mut self, x: i32, y: i32, colour: Colour) {
        self.surface.put_pixel(x, y, colour);
    }

    /// Draw a DDA line between two points.
    pub fn line(&mut self, from: Point, to: Point, colour: Colour) {
        let pixels = LinePixels::with_rounding(from.x, from.y, to.x, to.y, self.rounding);
        self.plot_all(pixels, colour);
    }

    /// Draw the perimeter of a circle.
    pub fn circle(&mut self, center: Point, radius: u32, colour: Colour) {
        let (cx, cy) = center.to_pixel(self.rounding);
        self.plot_all(rasterize_circle(cx, cy, radius), colour);
    }

    /// Draw a solid disc.
    pub fn fill_circle(&mut self, center: Point, radius: u32, colour: Colour) {
        let (cx, cy) = center.to_pixel(self.rounding);
        self.spans(&circle_spans(cx, cy, radius), colour);
    }

    /// Draw the closed outline of a polygon.
    pub fn polygon(&mut self, vertices: &[Point], colour: Colour) {
        self.plot_all(outline_pixels(vertices, self.rounding), colour);
    }

    /// Draw a filled polygon: the outline pass followed by the scan-line
    /// interior pass.
    ///
    /// Fewer than three vertices draws nothing. The two passes may disagree
    /// by a pixel along slanted edges.
    pub fn fill_polygon(&mut self, vertices: &[Point], colour: Colour) {
        if vertices.len() < 3 {
            return;
        }
        self.polygon(vertices, colour);
        self.spans(&scanline_spans(vertices, self.rounding), colour);
    }

    /// Fill a list of spans, trimmed to the surface bounds if it has any.
    pub fn spans(&mut self, spans: &[Span], colour: Colour) {
        let bounds = self.surface.bounds();
        for span in spans {
            let span = match bounds {
                Some((width, height)) => match span.clip(width, height) {
                    Some(clipped) => clipped,
                    None => continue,
                },
                None => *span,
            };
            self.plot_all(span.pixels(), colour);
        }
    }

    fn plot_all(&mut self, pixels: impl Iterator<Item = (i32, i32)>, colour: Colour) {
        for (x, y) in pixels {
            self.surface.put_pixel(x, y, colour);
        }
    }
}
