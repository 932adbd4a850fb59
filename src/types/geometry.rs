//! Geometric primitives: segments, circles and polygons.
//!
//! All of these are transient values built per draw call. Transforms
//! produce new point lists rather than mutating them.

use std::f64::consts::PI;

use super::point::Point;

/// A line segment between two points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// A segment whose endpoints coincide.
    pub fn is_degenerate(&self) -> bool {
        self.start == self.end
    }

    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }
}

/// A circle with an integer radius.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Point,
    pub radius: u32,
}

impl Circle {
    pub fn new(center: Point, radius: u32) -> Self {
        Self { center, radius }
    }

    /// Axis-aligned bounds of the circle.
    pub fn bounds(&self) -> Bounds {
        let r = self.radius as f64;
        Bounds {
            min_x: self.center.x - r,
            min_y: self.center.y - r,
            max_x: self.center.x + r,
            max_y: self.center.y + r,
        }
    }
}

/// Axis-aligned bounding box in real coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Bounds of a point set, or `None` when it is empty.
    pub fn of(points: &[Point]) -> Option<Self> {
        let first = points.first()?;
        let init = Bounds {
            min_x: first.x,
            min_y: first.y,
            max_x: first.x,
            max_y: first.y,
        };
        Some(points.iter().skip(1).fold(init, |b, p| Bounds {
            min_x: b.min_x.min(p.x),
            min_y: b.min_y.min(p.y),
            max_x: b.max_x.max(p.x),
            max_y: b.max_y.max(p.y),
        }))
    }

    /// Check whether the box overlaps the pixel area `[0, width) x [0, height)`.
    pub fn intersects_area(&self, width: u32, height: u32) -> bool {
        self.max_x >= 0.0
            && self.max_y >= 0.0
            && self.min_x < width as f64
            && self.min_y < height as f64
    }
}

/// An implicitly closed polygon.
///
/// The last vertex connects back to the first. Convexity is not required and
/// self-intersecting outlines are allowed; the scan-line filler applies the
/// even-odd rule to them.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    pub fn new(vertices: Vec<Point>) -> Self {
        Self { vertices }
    }

    /// A regular polygon centred on `center` with a horizontal bottom edge.
    ///
    /// Fewer than three sides yields an empty polygon.
    pub fn regular(sides: u32, side_length: f64, center: Point) -> Self {
        if sides < 3 {
            return Self::default();
        }

        let n = sides as f64;
        let radius = side_length / (2.0 * (PI / n).sin());
        // Screen coordinates grow downward, so PI/2 points at the bottom.
        let start = PI / 2.0 + PI / n;

        let vertices = (0..sides)
            .map(|k| {
                let angle = start + 2.0 * PI * k as f64 / n;
                Point::new(
                    center.x + radius * angle.cos(),
                    center.y + radius * angle.sin(),
                )
            })
            .collect();

        Self { vertices }
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn into_vertices(self) -> Vec<Point> {
        self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Fewer than three vertices enclose no area.
    pub fn is_degenerate(&self) -> bool {
        self.vertices.len() < 3
    }

    /// Iterate the edges, wrapping the last vertex back to the first.
    pub fn edges(&self) -> impl Iterator<Item = Segment> + '_ {
        edges(&self.vertices)
    }

    pub fn bounds(&self) -> Option<Bounds> {
        Bounds::of(&self.vertices)
    }
}

impl From<Vec<Point>> for Polygon {
    fn from(vertices: Vec<Point>) -> Self {
        Self::new(vertices)
    }
}

/// Consecutive vertex pairs of a closed outline.
pub fn edges(vertices: &[Point]) -> impl Iterator<Item = Segment> + '_ {
    let n = vertices.len();
    (0..n).map(move |i| Segment::new(vertices[i], vertices[(i + 1) % n]))
}
