//! Text rendering of a pixel set, for terminals and quick inspection.

use super::PixelSet;

/// Render the `width x height` window at the origin as text.
///
/// Written pixels print as `X`, empty cells as `.`, one space between
/// cells, one line per row.
pub fn render_ascii(pixels: &PixelSet, width: u32, height: u32) -> String {
    (0..height as i32)
        .map(|y| {
            (0..width as i32)
                .map(|x| if pixels.contains(x, y) { "X" } else { "." })
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::raster::rasterize_circle;
    use crate::surface::Surface;
    use crate::types::Colour;
    use insta::assert_snapshot;

    #[test]
    fn test_single_point_screen() {
        let mut pixels = PixelSet::new();
        pixels.put_pixel(3, 2, Colour::BLACK);

        assert_snapshot!(render_ascii(&pixels, 10, 5), @r"
        . . . . . . . . . .
        . . . . . . . . . .
        . . . X . . . . . .
        . . . . . . . . . .
        . . . . . . . . . .
        ");
    }

    #[test]
    fn test_circle_screen() {
        let mut pixels = PixelSet::new();
        for (x, y) in rasterize_circle(3, 3, 3) {
            pixels.put_pixel(x, y, Colour::BLACK);
        }

        assert_snapshot!(render_ascii(&pixels, 7, 7), @r"
        . . X X X . .
        . X . . . X .
        X . . . . . X
        X . . . . . X
        X . . . . . X
        . X . . . X .
        . . X X X . .
        ");
    }

    #[test]
    fn test_empty_window() {
        assert_eq!(render_ascii(&PixelSet::new(), 0, 0), "");
    }
}
