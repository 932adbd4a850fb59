//! rasterlab - scan conversion of 2D primitives
//!
//! Turns lines, circles and polygons into integer pixel coordinates with
//! the classic incremental algorithms (DDA lines, midpoint circles and
//! scan-line polygon filling), plus the affine transforms used to place
//! them. Pixels land on a [`Surface`]: an in-memory [`PixelSet`], a bounded
//! [`Canvas`] that can be written as PNG, or a [`PngSequence`] for
//! animations.
//!
//! On top of the core sit YAML scene documents, a scene validator and a
//! small animated landscape driven by the `rasterlab` CLI.

pub mod cli;
pub mod discovery;
pub mod error;
pub mod output;
pub mod raster;
pub mod scene;
pub mod surface;
pub mod transform;
pub mod types;
pub mod validation;

pub use discovery::{discover, discover_paths, Discovery, Manifest};
pub use error::{RasterError, Result};
pub use raster::{
    circle_spans, outline_pixels, rasterize_circle, rasterize_line, scanline_spans, CirclePoints,
    LinePixels, Painter, Span,
};
pub use scene::{MiniScene, MiniSceneConfig, SceneDocument, SceneRenderer};
pub use surface::{render_ascii, write_png, Canvas, PixelSet, PngSequence, Surface};
pub use transform::{apply_all, reflect, rotate, scale, translate, Transform};
pub use types::{Bounds, Circle, Colour, Point, Polygon, Quadrant, RoundingMode, Segment};
pub use validation::{validate_scene, Diagnostic, Severity, ValidationResult};
