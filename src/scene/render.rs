//! Scene renderer - paints a scene document onto a surface.

use crate::raster::Painter;
use crate::surface::{Canvas, Surface};
use crate::types::RoundingMode;

use super::document::{Geometry, SceneDocument, ShapeSpec};

/// Paints scene documents shape by shape.
#[derive(Debug, Clone, Copy, Default)]
pub struct SceneRenderer {
    rounding: RoundingMode,
}

impl SceneRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the rounding mode for every primitive.
    pub fn with_rounding(mut self, rounding: RoundingMode) -> Self {
        self.rounding = rounding;
        self
    }

    /// Paint every shape of the document onto `surface`, in order.
    pub fn render<S: Surface + ?Sized>(&self, doc: &SceneDocument, surface: &mut S) {
        let mut painter = Painter::new(surface).with_rounding(self.rounding);
        for shape in &doc.shapes {
            draw_shape(&mut painter, shape);
        }
    }

    /// Render onto a fresh canvas sized by the document.
    pub fn render_canvas(&self, doc: &SceneDocument) -> Canvas {
        let mut canvas = doc.canvas.to_canvas();
        self.render(doc, &mut canvas);
        canvas
    }
}

fn draw_shape<S: Surface + ?Sized>(painter: &mut Painter<'_, S>, shape: &ShapeSpec) {
    let (colour, outline) = shape.colours();

    match shape.geometry() {
        Geometry::Line(seg) => painter.line(seg.start, seg.end, colour),

        Geometry::Circle(circle) if shape.fill => {
            painter.fill_circle(circle.center, circle.radius, colour);
            if let Some(rim) = outline {
                painter.circle(circle.center, circle.radius, rim);
            }
        }
        Geometry::Circle(circle) => {
            painter.circle(circle.center, circle.radius, outline.unwrap_or(colour));
        }

        Geometry::Polygon(poly) if shape.fill => {
            painter.fill_polygon(poly.vertices(), colour);
            if let Some(edge) = outline {
                painter.polygon(poly.vertices(), edge);
            }
        }
        Geometry::Polygon(poly) => {
            painter.polygon(poly.vertices(), outline.unwrap_or(colour));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::PixelSet;
    use crate::types::Colour;

    fn parse(yaml: &str) -> SceneDocument {
        SceneDocument::parse(yaml).unwrap()
    }

    #[test]
    fn test_render_filled_rectangle() {
        let doc = parse(
            r#"
name: rect
shapes:
  - kind: polygon
    points: [[0, 0], [10, 0], [10, 10], [0, 10]]
    colour: red
    fill: true
"#,
        );

        let mut pixels = PixelSet::new();
        SceneRenderer::new().render(&doc, &mut pixels);
        assert_eq!(pixels.len(), 121);
    }

    #[test]
    fn test_later_shapes_paint_over_earlier() {
        let doc = parse(
            r#"
name: overlap
canvas: { width: 20, height: 20, background: white }
shapes:
  - kind: circle
    center: [10, 10]
    radius: 6
    colour: yellow
    fill: true
  - kind: line
    from: [0, 10]
    to: [19, 10]
    colour: black
"#,
        );

        let canvas = SceneRenderer::new().render_canvas(&doc);
        assert_eq!(canvas.get(10, 10), Some(Colour::BLACK));
        assert_eq!(canvas.get(10, 12), Some(Colour::rgb(255, 255, 0)));
        assert_eq!(canvas.get(0, 0), Some(Colour::WHITE));
    }

    #[test]
    fn test_outline_over_fill() {
        let doc = parse(
            r#"
name: sun
canvas: { width: 40, height: 40 }
shapes:
  - kind: circle
    center: [20, 20]
    radius: 10
    colour: yellow
    outline: orange
    fill: true
"#,
        );

        let canvas = SceneRenderer::new().render_canvas(&doc);
        assert_eq!(canvas.get(20, 20), Some(Colour::rgb(255, 255, 0)));
        assert_eq!(canvas.get(20, 10), Some(Colour::rgb(255, 165, 0)));
        assert_eq!(canvas.get(30, 20), Some(Colour::rgb(255, 165, 0)));
    }

    #[test]
    fn test_reflected_shape_lands_below_axis() {
        let doc = parse(
            r#"
name: reflection
canvas: { width: 20, height: 20 }
shapes:
  - kind: polygon
    points: [[2, 2], [6, 2], [6, 6], [2, 6]]
    colour: darkgray
    fill: true
    transforms:
      - op: reflect
        axis_y: 8
"#,
        );

        let canvas = SceneRenderer::new().render_canvas(&doc);
        assert_eq!(canvas.get(4, 4), Some(Colour::WHITE));
        assert_eq!(canvas.get(4, 12), Some(Colour::rgb(169, 169, 169)));
    }

    #[test]
    fn test_degenerate_shapes_do_not_panic() {
        let doc = parse(
            r#"
name: degenerate
canvas: { width: 10, height: 10 }
shapes:
  - kind: polygon
    points: [[1, 1], [5, 5]]
    fill: true
  - kind: circle
    center: [3, 3]
    radius: 0
  - kind: regular_polygon
    sides: 2
    side_length: 4
  - kind: line
    from: [7, 7]
    to: [7, 7]
"#,
        );

        let canvas = SceneRenderer::new().render_canvas(&doc);
        assert_eq!(canvas.get(3, 3), Some(Colour::BLACK));
        assert_eq!(canvas.get(7, 7), Some(Colour::BLACK));
        // two-vertex polygon fills nothing
        assert_eq!(canvas.get(3, 4), Some(Colour::WHITE));
    }

    #[test]
    fn test_oversized_disc_fills_canvas() {
        let doc = parse(
            r#"
name: flood
canvas: { width: 16, height: 12, background: white }
shapes:
  - kind: circle
    center: [8, 6]
    radius: 2000000000
    colour: blue
    fill: true
"#,
        );

        let canvas = SceneRenderer::new().render_canvas(&doc);
        assert_eq!(canvas.pixels_written(), 16 * 12);
        assert_eq!(canvas.get(0, 0), Some(Colour::rgb(0, 0, 255)));
        assert_eq!(canvas.get(15, 11), Some(Colour::rgb(0, 0, 255)));
    }
}
