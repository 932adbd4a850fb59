//! Core value types shared by the rasterizers and the scene layer.
//!
//! - `Point` / `RoundingMode` - real coordinates and how they snap to pixels
//! - `Segment`, `Circle`, `Polygon` - transient draw-call geometry
//! - `Colour` - RGBA colour passed through to the surface

mod colour;
mod geometry;
mod point;

pub use colour::Colour;
pub use geometry::{edges, Bounds, Circle, Polygon, Segment};
pub use point::{Point, Quadrant, RoundingMode};
