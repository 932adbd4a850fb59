//! DDA (digital differential analyzer) line rasterizer.
//!
//! The segment is walked in `steps = max(|dx|, |dy|)` equal increments, so
//! the major axis advances by exactly one pixel per step and the minor axis
//! by a fraction. Positions are accumulated in floating point and rounded at
//! emission time.

use crate::types::RoundingMode;

/// Upper bound on the step count. Longer segments take proportionally
/// larger strides, so consecutive pixels may no longer touch.
pub const MAX_STEPS: u32 = u32::MAX;

/// Lazy sequence of the pixels on a segment, start to end.
///
/// Cloning yields an independent iterator from the same position, so the
/// sequence can be restarted by cloning before consumption.
#[derive(Debug, Clone)]
pub struct LinePixels {
    x: f64,
    y: f64,
    x_inc: f64,
    y_inc: f64,
    remaining: usize,
    rounding: RoundingMode,
}

/// Rasterize the segment `(x1, y1) -> (x2, y2)` with the default rounding.
///
/// For integer endpoints the sequence has `max(|dx|, |dy|) + 1` pixels and
/// starts and ends exactly on the endpoints. A zero-length segment yields a
/// single pixel.
pub fn rasterize_line(x1: f64, y1: f64, x2: f64, y2: f64) -> LinePixels {
    LinePixels::with_rounding(x1, y1, x2, y2, RoundingMode::default())
}

impl LinePixels {
    pub fn with_rounding(x1: f64, y1: f64, x2: f64, y2: f64, rounding: RoundingMode) -> Self {
        let dx = x2 - x1;
        let dy = y2 - y1;

        // Fractional spans round up so the last step lands on the endpoint.
        let steps = dx.abs().max(dy.abs()).ceil();
        let steps = if steps.is_nan() {
            0.0
        } else {
            steps.min(MAX_STEPS as f64)
        };

        let (x_inc, y_inc) = if steps == 0.0 {
            (0.0, 0.0)
        } else {
            (dx / steps, dy / steps)
        };

        Self {
            x: x1,
            y: y1,
            x_inc,
            y_inc,
            remaining: (steps as usize).saturating_add(1),
            rounding,
        }
    }

    /// Number of steps between the endpoints (one less than the pixel count).
    pub fn steps(&self) -> usize {
        self.remaining.saturating_sub(1)
    }
}

impl Iterator for LinePixels {
    type Item = (i32, i32);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }

        let pixel = (self.rounding.round(self.x), self.rounding.round(self.y));
        self.x += self.x_inc;
        self.y += self.y_inc;
        self.remaining -= 1;

        Some(pixel)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for LinePixels {}

impl std::iter::FusedIterator for LinePixels {}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_degenerate_segment_is_one_pixel() {
        let pixels: Vec<_> = rasterize_line(0.0, 0.0, 0.0, 0.0).collect();
        assert_eq!(pixels, vec![(0, 0)]);

        let pixels: Vec<_> = rasterize_line(4.4, -2.6, 4.4, -2.6).collect();
        assert_eq!(pixels, vec![(4, -3)]);
    }

    #[test]
    fn test_shallow_slope() {
        let pixels: Vec<_> = rasterize_line(0.0, 0.0, 5.0, 2.0).collect();
        assert_eq!(pixels, vec![(0, 0), (1, 0), (2, 1), (3, 1), (4, 2), (5, 2)]);
    }

    #[test]
    fn test_steep_slope_steps_along_y() {
        let pixels: Vec<_> = rasterize_line(0.0, 0.0, 2.0, 4.0).collect();
        assert_eq!(pixels, vec![(0, 0), (1, 1), (1, 2), (2, 3), (2, 4)]);
    }

    #[test]
    fn test_tie_rounding_modes() {
        let away: Vec<_> = rasterize_line(0.0, 0.0, 2.0, 1.0).collect();
        assert_eq!(away, vec![(0, 0), (1, 1), (2, 1)]);

        let even: Vec<_> =
            LinePixels::with_rounding(0.0, 0.0, 2.0, 1.0, RoundingMode::HalfToEven).collect();
        assert_eq!(even, vec![(0, 0), (1, 0), (2, 1)]);
    }

    #[test]
    fn test_count_and_endpoints() {
        let segments: [(i32, i32, i32, i32); 7] = [
            (0, 0, 10, 0),
            (0, 0, 0, -7),
            (-3, 4, 9, -2),
            (5, 5, 0, 0),
            (12, -8, -20, 3),
            (1, 1, 2, 2),
            (50, 100, 250, 100),
        ];

        for (x1, y1, x2, y2) in segments {
            let n = (x2 - x1).abs().max((y2 - y1).abs()) as usize;
            let line = rasterize_line(x1 as f64, y1 as f64, x2 as f64, y2 as f64);
            assert_eq!(line.len(), n + 1);

            let pixels: Vec<_> = line.collect();
            assert_eq!(pixels.len(), n + 1);
            assert_eq!(pixels[0], (x1, y1));
            assert_eq!(pixels[n], (x2, y2));
        }
    }

    #[test]
    fn test_major_axis_advances_one_per_step() {
        let pixels: Vec<_> = rasterize_line(-3.0, 4.0, 9.0, -2.0).collect();
        for pair in pixels.windows(2) {
            assert_eq!(pair[1].0 - pair[0].0, 1);
            assert!((pair[1].1 - pair[0].1).abs() <= 1);
        }
    }

    #[test]
    fn test_fractional_endpoints_reach_the_end() {
        let pixels: Vec<_> = rasterize_line(0.2, 0.0, 3.7, 0.0).collect();
        assert_eq!(pixels, vec![(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)]);
    }

    #[test]
    fn test_restartable_by_clone() {
        let line = rasterize_line(0.0, 0.0, 7.0, 3.0);
        let first: Vec<_> = line.clone().collect();
        let second: Vec<_> = line.collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_huge_span_is_capped() {
        let mut line = rasterize_line(0.0, 0.0, 1e20, 0.0);
        assert_eq!(line.steps(), MAX_STEPS as usize);
        assert_eq!(line.next(), Some((0, 0)));
        assert_eq!(line.len(), MAX_STEPS as usize);

        let mut line = rasterize_line(0.0, 0.0, f64::INFINITY, 0.0);
        assert_eq!(line.steps(), MAX_STEPS as usize);
        assert_eq!(line.next(), Some((0, 0)));
    }

    #[test]
    fn test_nan_endpoint_is_one_pixel() {
        assert_eq!(rasterize_line(0.0, 0.0, f64::NAN, f64::NAN).len(), 1);
    }

    #[test]
    fn test_exact_size_tracks_consumption() {
        let mut line = rasterize_line(0.0, 0.0, 3.0, 0.0);
        assert_eq!(line.steps(), 3);
        line.next();
        assert_eq!(line.len(), 3);
        line.by_ref().for_each(drop);
        assert_eq!(line.len(), 0);
        assert_eq!(line.next(), None);
    }
}
