//! 2D affine transforms over point lists.
//!
//! Every operation is pure: it takes a slice and returns a fresh `Vec`.
//! There is no transform stack; callers compose operations explicitly and
//! in order, passing the pivot each operation needs.

use serde::{Deserialize, Serialize};

use crate::types::Point;

/// Shift every point by `(tx, ty)`.
pub fn translate(points: &[Point], tx: f64, ty: f64) -> Vec<Point> {
    points
        .iter()
        .map(|p| Point::new(p.x + tx, p.y + ty))
        .collect()
}

/// Scale about a pivot. Factors may be zero or negative.
pub fn scale(points: &[Point], sx: f64, sy: f64, pivot_x: f64, pivot_y: f64) -> Vec<Point> {
    points
        .iter()
        .map(|p| {
            Point::new(
                pivot_x + (p.x - pivot_x) * sx,
                pivot_y + (p.y - pivot_y) * sy,
            )
        })
        .collect()
}

/// Rotate by `angle_degrees` about a pivot.
///
/// Uses the standard matrix `[cos -sin; sin cos]`. With screen coordinates
/// (y grows downward) a positive angle turns clockwise on screen.
pub fn rotate(points: &[Point], angle_degrees: f64, pivot_x: f64, pivot_y: f64) -> Vec<Point> {
    let (sin_a, cos_a) = angle_degrees.to_radians().sin_cos();

    points
        .iter()
        .map(|p| {
            let tx = p.x - pivot_x;
            let ty = p.y - pivot_y;
            Point::new(
                tx * cos_a - ty * sin_a + pivot_x,
                tx * sin_a + ty * cos_a + pivot_y,
            )
        })
        .collect()
}

/// Mirror across the horizontal line `y = axis_y`.
pub fn reflect(points: &[Point], axis_y: f64) -> Vec<Point> {
    points
        .iter()
        .map(|p| Point::new(p.x, 2.0 * axis_y - p.y))
        .collect()
}

/// A single transform step, as written in scene files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Transform {
    Translate {
        dx: f64,
        dy: f64,
    },
    Scale {
        sx: f64,
        sy: f64,
        #[serde(default)]
        pivot: Point,
    },
    Rotate {
        degrees: f64,
        #[serde(default)]
        pivot: Point,
    },
    Reflect {
        axis_y: f64,
    },
}

impl Transform {
    /// Apply this step to a point list.
    pub fn apply(&self, points: &[Point]) -> Vec<Point> {
        match *self {
            Transform::Translate { dx, dy } => translate(points, dx, dy),
            Transform::Scale { sx, sy, pivot } => scale(points, sx, sy, pivot.x, pivot.y),
            Transform::Rotate { degrees, pivot } => rotate(points, degrees, pivot.x, pivot.y),
            Transform::Reflect { axis_y } => reflect(points, axis_y),
        }
    }

    /// How much this step stretches lengths, for sizing circles.
    ///
    /// Non-uniform scales use the mean of the absolute factors.
    pub fn length_factor(&self) -> f64 {
        match *self {
            Transform::Scale { sx, sy, .. } => (sx.abs() + sy.abs()) / 2.0,
            _ => 1.0,
        }
    }
}

/// Apply steps left to right: the first listed runs first.
pub fn apply_all(transforms: &[Transform], points: &[Point]) -> Vec<Point> {
    transforms
        .iter()
        .fold(points.to_vec(), |acc, t| t.apply(&acc))
}
