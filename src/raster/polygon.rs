//! Scan-line polygon filling.
//!
//! For every integer row the crossings of all non-horizontal edges are
//! collected, sorted, and filled pairwise (even-odd rule). An edge covers
//! the half-open row range `[min(y1, y2), max(y1, y2))`, so a vertex shared
//! by two edges is counted once.

use crate::types::{edges, Bounds, Point, RoundingMode};

use super::{LinePixels, Span};

/// Interior spans of a closed polygon.
///
/// Fewer than three vertices produce no spans. A trailing unpaired crossing
/// on a row is dropped.
pub fn scanline_spans(vertices: &[Point], rounding: RoundingMode) -> Vec<Span> {
    if vertices.len() < 3 {
        return Vec::new();
    }
    let Some(bounds) = Bounds::of(vertices) else {
        return Vec::new();
    };

    let first_row = bounds.min_y.floor() as i32;
    let last_row = bounds.max_y.ceil() as i32;

    let mut spans = Vec::new();
    let mut crossings: Vec<f64> = Vec::with_capacity(vertices.len());

    for row in first_row..=last_row {
        let y = row as f64;
        crossings.clear();

        for edge in edges(vertices) {
            let (a, b) = (edge.start, edge.end);
            if a.y == b.y {
                continue;
            }
            if a.y.min(b.y) <= y && y < a.y.max(b.y) {
                crossings.push(a.x + (y - a.y) * (b.x - a.x) / (b.y - a.y));
            }
        }

        crossings.sort_by(f64::total_cmp);

        for pair in crossings.chunks_exact(2) {
            spans.push(Span::new(row, rounding.round(pair[0]), rounding.round(pair[1])));
        }
    }

    spans
}

/// Pixels of the closed outline, one DDA segment per edge.
pub fn outline_pixels(
    vertices: &[Point],
    rounding: RoundingMode,
) -> impl Iterator<Item = (i32, i32)> + '_ {
    edges(vertices).flat_map(move |edge| {
        LinePixels::with_rounding(edge.start.x, edge.start.y, edge.end.x, edge.end.y, rounding)
    })
}
