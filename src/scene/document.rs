//! Scene documents (`*.scene.yaml`).
//!
//! A scene lists primitives in paint order. Later shapes overwrite earlier
//! ones where they overlap.
//!
//! # Example
//!
//! ```yaml
//! name: house
//! canvas:
//!   width: 320
//!   height: 240
//!   background: lightblue
//! shapes:
//!   - kind: polygon
//!     points: [[150, 380], [250, 380], [250, 480], [150, 480]]
//!     colour: saddlebrown
//!     fill: true
//!     transforms:
//!       - op: scale
//!         sx: 0.5
//!         sy: 0.5
//!         pivot: [200, 480]
//!   - kind: circle
//!     center: [40, 40]
//!     radius: 12
//!     colour: yellow
//!     outline: orange
//!     fill: true
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{RasterError, Result};
use crate::surface::Canvas;
use crate::transform::{apply_all, Transform};
use crate::types::{Bounds, Circle, Colour, Point, Polygon, Segment};

/// File suffix recognised when scanning directories.
pub const SCENE_SUFFIX: &str = ".scene.yaml";

/// A parsed scene file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneDocument {
    /// Scene name, used for the output file name.
    pub name: String,

    #[serde(default)]
    pub canvas: CanvasSpec,

    #[serde(default)]
    pub shapes: Vec<ShapeSpec>,
}

/// Output canvas settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CanvasSpec {
    pub width: u32,
    pub height: u32,
    pub background: Colour,
}

impl Default for CanvasSpec {
    fn default() -> Self {
        Self {
            width: 800,
            height: 600,
            background: Colour::WHITE,
        }
    }
}

impl CanvasSpec {
    /// An empty canvas with these settings.
    pub fn to_canvas(&self) -> Canvas {
        Canvas::new(self.width, self.height, self.background)
    }
}

/// The geometry of a shape before transforms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Primitive {
    Line {
        from: Point,
        to: Point,
    },
    Circle {
        center: Point,
        radius: u32,
    },
    Polygon {
        points: Vec<Point>,
    },
    RegularPolygon {
        sides: u32,
        side_length: f64,
        #[serde(default)]
        center: Point,
    },
}

/// One entry in a scene's `shapes` list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeSpec {
    /// Optional label used in diagnostics.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(flatten)]
    pub primitive: Primitive,

    #[serde(default = "default_colour")]
    pub colour: Colour,

    /// Fill circles and polygons instead of outlining them.
    #[serde(default)]
    pub fill: bool,

    /// Perimeter colour drawn over a filled shape.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub outline: Option<Colour>,

    /// Lightness multiplier applied to both colours.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub shade: Option<f32>,

    /// Applied in listed order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub transforms: Vec<Transform>,
}

fn default_colour() -> Colour {
    Colour::BLACK
}

/// Shape geometry with every transform applied.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Line(Segment),
    Circle(Circle),
    Polygon(Polygon),
}

impl Geometry {
    /// Axis-aligned bounds, `None` for an empty polygon.
    pub fn bounds(&self) -> Option<Bounds> {
        match self {
            Geometry::Line(seg) => Bounds::of(&[seg.start, seg.end]),
            Geometry::Circle(circle) => Some(circle.bounds()),
            Geometry::Polygon(poly) => poly.bounds(),
        }
    }
}

impl ShapeSpec {
    /// A label for messages: the name if set, otherwise the kind and index.
    pub fn label(&self, index: usize) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("{} #{}", self.kind(), index + 1),
        }
    }

    pub fn kind(&self) -> &'static str {
        match self.primitive {
            Primitive::Line { .. } => "line",
            Primitive::Circle { .. } => "circle",
            Primitive::Polygon { .. } => "polygon",
            Primitive::RegularPolygon { .. } => "regular_polygon",
        }
    }

    /// Fill and outline colours after shading.
    pub fn colours(&self) -> (Colour, Option<Colour>) {
        match self.shade {
            Some(intensity) => (
                self.colour.shade(intensity),
                self.outline.map(|c| c.shade(intensity)),
            ),
            None => (self.colour, self.outline),
        }
    }

    /// Resolve the primitive and run the transform list over it.
    ///
    /// Circles keep their shape: transforms move the centre and scale steps
    /// stretch the radius.
    pub fn geometry(&self) -> Geometry {
        let transforms = &self.transforms;

        match &self.primitive {
            Primitive::Line { from, to } => {
                let pts = apply_all(transforms, &[*from, *to]);
                Geometry::Line(Segment::new(pts[0], pts[1]))
            }
            Primitive::Circle { center, radius } => {
                let center = apply_all(transforms, &[*center])[0];
                let factor: f64 = transforms.iter().map(Transform::length_factor).product();
                let radius = (*radius as f64 * factor).round() as u32;
                Geometry::Circle(Circle::new(center, radius))
            }
            Primitive::Polygon { points } => {
                Geometry::Polygon(Polygon::new(apply_all(transforms, points)))
            }
            Primitive::RegularPolygon {
                sides,
                side_length,
                center,
            } => {
                let base = Polygon::regular(*sides, *side_length, *center);
                Geometry::Polygon(Polygon::new(apply_all(transforms, base.vertices())))
            }
        }
    }
}

impl SceneDocument {
    /// Load a scene from a YAML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| RasterError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read scene: {}", e),
        })?;

        Self::parse(&content).map_err(|e| match e {
            RasterError::Parse { message, help } => RasterError::Parse {
                message: format!("{}: {}", path.display(), message),
                help,
            },
            other => other,
        })
    }

    /// Parse a scene from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| RasterError::Parse {
            message: format!("Invalid scene: {}", e),
            help: Some("Each shape needs a `kind` of line, circle, polygon or regular_polygon".to_string()),
        })
    }
}

/// Check whether a path looks like a scene file.
pub fn is_scene_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.ends_with(SCENE_SUFFIX))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const HOUSE: &str = r#"
name: house
canvas:
  width: 320
  height: 240
  background: lightblue
shapes:
  - name: body
    kind: polygon
    points: [[150, 380], [250, 380], [250, 480], [150, 480]]
    colour: saddlebrown
    fill: true
    transforms:
      - op: scale
        sx: 0.5
        sy: 0.5
        pivot: [200, 480]
  - kind: circle
    center: [40, 40]
    radius: 12
    colour: yellow
    outline: orange
    fill: true
  - kind: line
    from: [0, 0]
    to: [10, 5]
"#;

    #[test]
    fn test_parse_scene() {
        let doc = SceneDocument::parse(HOUSE).unwrap();

        assert_eq!(doc.name, "house");
        assert_eq!(
            doc.canvas,
            CanvasSpec {
                width: 320,
                height: 240,
                background: Colour::rgb(173, 216, 230),
            }
        );
        assert_eq!(doc.shapes.len(), 3);
        assert_eq!(doc.shapes[0].name.as_deref(), Some("body"));
        assert!(doc.shapes[0].fill);
        assert_eq!(doc.shapes[1].outline, Some(Colour::rgb(255, 165, 0)));
        assert_eq!(doc.shapes[2].colour, Colour::BLACK);
        assert!(!doc.shapes[2].fill);
    }

    #[test]
    fn test_canvas_defaults() {
        let doc = SceneDocument::parse("name: empty").unwrap();
        assert_eq!(doc.canvas, CanvasSpec::default());
        assert!(doc.shapes.is_empty());
    }

    #[test]
    fn test_geometry_applies_transforms() {
        let doc = SceneDocument::parse(HOUSE).unwrap();

        let Geometry::Polygon(body) = doc.shapes[0].geometry() else {
            panic!("expected polygon");
        };
        assert_eq!(
            body.vertices(),
            &[
                Point::new(175.0, 430.0),
                Point::new(225.0, 430.0),
                Point::new(225.0, 480.0),
                Point::new(175.0, 480.0),
            ]
        );
    }

    #[test]
    fn test_circle_radius_follows_scale() {
        let shape = ShapeSpec {
            name: None,
            primitive: Primitive::Circle {
                center: Point::new(10.0, 10.0),
                radius: 8,
            },
            colour: Colour::BLACK,
            fill: false,
            outline: None,
            shade: None,
            transforms: vec![
                Transform::Scale {
                    sx: 1.5,
                    sy: 1.5,
                    pivot: Point::ORIGIN,
                },
                Transform::Translate { dx: 1.0, dy: 0.0 },
            ],
        };

        assert_eq!(
            shape.geometry(),
            Geometry::Circle(Circle::new(Point::new(16.0, 15.0), 12))
        );
    }

    #[test]
    fn test_unknown_kind_is_parse_error() {
        let err = SceneDocument::parse("name: x\nshapes:\n  - kind: star\n").unwrap_err();
        assert!(matches!(err, RasterError::Parse { .. }));
    }

    #[test]
    fn test_bad_colour_is_parse_error() {
        let yaml = "name: x\nshapes:\n  - kind: circle\n    center: [0, 0]\n    radius: 1\n    colour: chartreuse-ish\n";
        assert!(SceneDocument::parse(yaml).is_err());
    }

    #[test]
    fn test_shade_applies_to_both_colours() {
        let mut doc = SceneDocument::parse(HOUSE).unwrap();
        doc.shapes[1].shade = Some(0.0);
        assert_eq!(doc.shapes[1].colours(), (Colour::BLACK, Some(Colour::BLACK)));
    }

    #[test]
    fn test_labels() {
        let doc = SceneDocument::parse(HOUSE).unwrap();
        assert_eq!(doc.shapes[0].label(0), "body");
        assert_eq!(doc.shapes[2].label(2), "line #3");
    }

    #[test]
    fn test_is_scene_file() {
        assert!(is_scene_file(Path::new("art/house.scene.yaml")));
        assert!(!is_scene_file(Path::new("raster.yaml")));
    }
}
