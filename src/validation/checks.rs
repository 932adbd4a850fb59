//! Individual scene checks.
//!
//! Each check takes a `&SceneDocument` and returns a `ValidationResult`.

use std::path::{Component, Path};

use crate::raster::MAX_RADIUS;
use crate::scene::{Geometry, Primitive, SceneDocument};
use crate::transform::Transform;

use super::warning::{Diagnostic, ValidationResult};

/// A zero-width or zero-height canvas cannot be rendered.
pub fn check_canvas_size(doc: &SceneDocument) -> ValidationResult {
    let mut result = ValidationResult::new();
    let canvas = &doc.canvas;

    if canvas.width == 0 || canvas.height == 0 {
        result.push(
            Diagnostic::error(
                "rasterlab::validate::empty-canvas",
                format!(
                    "Scene '{}' has a {}x{} canvas",
                    doc.name, canvas.width, canvas.height
                ),
            )
            .with_help("Set canvas.width and canvas.height to at least 1"),
        );
    }

    result
}

/// The scene name becomes the output file stem, so it must be a single
/// plain path component.
pub fn check_scene_name(doc: &SceneDocument) -> ValidationResult {
    let mut result = ValidationResult::new();
    let name = doc.name.as_str();

    let mut components = Path::new(name).components();
    let plain = matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    );

    let separators = name.contains(|c: char| c == '/' || c == '\\');

    if !plain || separators || name.trim() != name {
        result.push(
            Diagnostic::error(
                "rasterlab::validate::bad-name",
                format!("Scene name '{}' is not a valid file name", name),
            )
            .with_help("Use a name without path separators or '..', such as 'sunset'"),
        );
    }

    result
}

/// Primitives that will draw nothing or almost nothing.
pub fn check_degenerate_shapes(doc: &SceneDocument) -> ValidationResult {
    let mut result = ValidationResult::new();

    for (i, shape) in doc.shapes.iter().enumerate() {
        let label = shape.label(i);

        match &shape.primitive {
            Primitive::Polygon { points } if points.len() < 3 => {
                result.push(
                    Diagnostic::warning(
                        "rasterlab::validate::degenerate-polygon",
                        format!("'{}' has {} vertices", label, points.len()),
                    )
                    .with_help("A polygon needs at least 3 vertices to enclose an area"),
                );
            }
            Primitive::Line { from, to } if from == to => {
                result.push(Diagnostic::warning(
                    "rasterlab::validate::degenerate-line",
                    format!("'{}' starts and ends at {}", label, from),
                ));
            }
            Primitive::Circle { radius: 0, .. } => {
                result.push(
                    Diagnostic::warning(
                        "rasterlab::validate::zero-radius",
                        format!("'{}' has radius 0 and draws a single pixel", label),
                    )
                    .with_help("Give the circle a radius of at least 1"),
                );
            }
            Primitive::RegularPolygon { sides, .. } if *sides < 3 => {
                result.push(
                    Diagnostic::warning(
                        "rasterlab::validate::too-few-sides",
                        format!("'{}' asks for {} sides", label, sides),
                    )
                    .with_help("Regular polygons need at least 3 sides"),
                );
            }
            _ => {}
        }
    }

    result
}

/// Scale steps with a zero factor collapse the shape onto a line or point.
pub fn check_zero_scale(doc: &SceneDocument) -> ValidationResult {
    let mut result = ValidationResult::new();

    for (i, shape) in doc.shapes.iter().enumerate() {
        let collapses = shape
            .transforms
            .iter()
            .any(|t| matches!(t, Transform::Scale { sx, sy, .. } if *sx == 0.0 || *sy == 0.0));

        if collapses {
            result.push(Diagnostic::warning(
                "rasterlab::validate::zero-scale",
                format!("'{}' is scaled by zero", shape.label(i)),
            ));
        }
    }

    result
}

/// Circles whose transformed radius exceeds what the rasterizers draw.
pub fn check_huge_radius(doc: &SceneDocument) -> ValidationResult {
    let mut result = ValidationResult::new();

    for (i, shape) in doc.shapes.iter().enumerate() {
        if let Geometry::Circle(circle) = shape.geometry() {
            if circle.radius > MAX_RADIUS {
                result.push(
                    Diagnostic::warning(
                        "rasterlab::validate::radius-clamped",
                        format!(
                            "'{}' has radius {} and is drawn at radius {}",
                            shape.label(i),
                            circle.radius,
                            MAX_RADIUS
                        ),
                    )
                    .with_help("Reduce the radius or the scale transforms"),
                );
            }
        }
    }

    result
}

/// Shapes whose transformed bounds miss the canvas entirely.
pub fn check_off_canvas(doc: &SceneDocument) -> ValidationResult {
    let mut result = ValidationResult::new();
    let (width, height) = (doc.canvas.width, doc.canvas.height);

    if width == 0 || height == 0 {
        return result;
    }

    for (i, shape) in doc.shapes.iter().enumerate() {
        let Some(bounds) = shape.geometry().bounds() else {
            continue;
        };

        if !bounds.intersects_area(width, height) {
            result.push(
                Diagnostic::warning(
                    "rasterlab::validate::off-canvas",
                    format!(
                        "'{}' lies entirely outside the {}x{} canvas",
                        shape.label(i),
                        width,
                        height
                    ),
                )
                .with_help("Check the shape's coordinates and transforms"),
            );
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(yaml: &str) -> SceneDocument {
        SceneDocument::parse(yaml).unwrap()
    }

    #[test]
    fn test_zero_canvas_is_error() {
        let result = check_canvas_size(&doc("name: x\ncanvas: { width: 0, height: 10 }\n"));
        assert!(result.has_errors());
        assert_eq!(result.codes(), vec!["rasterlab::validate::empty-canvas"]);
    }

    #[test]
    fn test_scene_name_must_be_a_file_name() {
        for good in ["sun", "sun-set_2", "v1.2", "...dots"] {
            let result = check_scene_name(&doc(&format!("name: '{}'\n", good)));
            assert!(result.is_ok(), "{good} rejected");
        }

        for bad in ["../escape", "..", ".", "a/b", "/abs", "a\\b", "", " padded"] {
            let result = check_scene_name(&doc(&format!("name: '{}'\n", bad)));
            assert!(result.has_errors(), "{bad} accepted");
            assert_eq!(result.codes(), vec!["rasterlab::validate::bad-name"]);
        }
    }

    #[test]
    fn test_huge_radius_after_scaling() {
        let result = check_huge_radius(&doc(
            r#"
name: x
shapes:
  - name: direct
    kind: circle
    center: [0, 0]
    radius: 2000000000
  - name: scaled
    kind: circle
    center: [0, 0]
    radius: 1000
    transforms:
      - op: scale
        sx: 5000
        sy: 5000
  - name: fine
    kind: circle
    center: [0, 0]
    radius: 1000
"#,
        ));

        assert_eq!(result.warning_count(), 2);
        assert!(!result.has_errors());
        assert!(result.iter().all(|d| !d.message.contains("fine")));
    }

    #[test]
    fn test_degenerate_shapes() {
        let result = check_degenerate_shapes(&doc(
            r#"
name: x
shapes:
  - kind: polygon
    points: [[0, 0], [4, 4]]
  - kind: line
    from: [2, 2]
    to: [2, 2]
  - kind: circle
    center: [1, 1]
    radius: 0
  - kind: regular_polygon
    sides: 2
    side_length: 5
  - kind: circle
    center: [1, 1]
    radius: 4
"#,
        ));

        assert_eq!(
            result.codes(),
            vec![
                "rasterlab::validate::degenerate-polygon",
                "rasterlab::validate::degenerate-line",
                "rasterlab::validate::zero-radius",
                "rasterlab::validate::too-few-sides",
            ]
        );
        assert!(!result.has_errors());
    }

    #[test]
    fn test_zero_scale() {
        let result = check_zero_scale(&doc(
            r#"
name: x
shapes:
  - kind: line
    from: [0, 0]
    to: [5, 5]
    transforms:
      - op: translate
        dx: 1
        dy: 1
      - op: scale
        sx: 0
        sy: 2
"#,
        ));
        assert_eq!(result.warning_count(), 1);
    }

    #[test]
    fn test_off_canvas_uses_transformed_bounds() {
        let result = check_off_canvas(&doc(
            r#"
name: x
canvas: { width: 50, height: 50 }
shapes:
  - name: inside
    kind: circle
    center: [25, 25]
    radius: 5
  - name: pushed-out
    kind: circle
    center: [25, 25]
    radius: 5
    transforms:
      - op: translate
        dx: 200
        dy: 0
  - name: straddling
    kind: line
    from: [-10, 10]
    to: [10, 10]
"#,
        ));

        assert_eq!(result.warning_count(), 1);
        assert!(result.iter().all(|d| d.message.contains("pushed-out")));
    }
}
