//! Incremental rasterizers.
//!
//! Each rasterizer is a pure function of its inputs that yields integer
//! pixel coordinates. Nothing here clips: coordinates may be negative or
//! past any display edge, and the [`Surface`](crate::surface::Surface)
//! decides what to keep. The [`Painter`] trims spans to a bounded surface
//! before walking them.

mod circle;
mod draw;
mod line;
mod polygon;

pub use circle::{circle_spans, rasterize_circle, CirclePoints, OctantSteps, MAX_RADIUS};
pub use draw::Painter;
pub use line::{rasterize_line, LinePixels, MAX_STEPS};
pub use polygon::{outline_pixels, scanline_spans};

/// A horizontal run of pixels on one row, inclusive at both ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub y: i32,
    pub x_start: i32,
    pub x_end: i32,
}

impl Span {
    /// Create a span, ordering the endpoints if needed.
    pub fn new(y: i32, x_start: i32, x_end: i32) -> Self {
        Self {
            y,
            x_start: x_start.min(x_end),
            x_end: x_start.max(x_end),
        }
    }

    /// Number of pixels covered.
    pub fn len(&self) -> usize {
        (self.x_end as i64 - self.x_start as i64) as usize + 1
    }

    /// Spans always cover at least one pixel.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn contains(&self, x: i32, y: i32) -> bool {
        y == self.y && (self.x_start..=self.x_end).contains(&x)
    }

    /// The part of the span inside `[0, width) x [0, height)`.
    pub fn clip(&self, width: u32, height: u32) -> Option<Span> {
        if self.y < 0 || self.y as u32 >= height {
            return None;
        }
        let start = (self.x_start as i64).max(0);
        let end = (self.x_end as i64).min(width as i64 - 1);
        (start <= end).then(|| Span::new(self.y, start as i32, end as i32))
    }

    /// Every pixel of the span, left to right.
    pub fn pixels(&self) -> impl Iterator<Item = (i32, i32)> {
        let y = self.y;
        (self.x_start..=self.x_end).map(move |x| (x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_orders_endpoints() {
        let span = Span::new(3, 7, 2);
        assert_eq!((span.x_start, span.x_end), (2, 7));
        assert_eq!(span.len(), 6);
    }

    #[test]
    fn test_span_pixels() {
        let pixels: Vec<_> = Span::new(-1, 0, 2).pixels().collect();
        assert_eq!(pixels, vec![(0, -1), (1, -1), (2, -1)]);
        assert!(Span::new(4, 4, 4).contains(4, 4));
        assert!(!Span::new(4, 4, 4).contains(4, 5));
    }

    #[test]
    fn test_span_clip() {
        assert_eq!(Span::new(2, -5, 30).clip(10, 5), Some(Span::new(2, 0, 9)));
        assert_eq!(Span::new(2, 3, 4).clip(10, 5), Some(Span::new(2, 3, 4)));
        assert_eq!(Span::new(5, 0, 3).clip(10, 5), None);
        assert_eq!(Span::new(-1, 0, 3).clip(10, 5), None);
        assert_eq!(Span::new(0, 10, 12).clip(10, 5), None);
        assert_eq!(Span::new(0, 0, 3).clip(0, 5), None);
    }

    #[test]
    fn test_span_len_across_whole_row() {
        let span = Span::new(0, i32::MIN, i32::MAX);
        assert_eq!(span.len(), u32::MAX as usize + 1);
    }
}
