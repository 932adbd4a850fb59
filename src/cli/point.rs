//! `rasterlab point` and `rasterlab screen`.

use std::io::{self, Write};

use clap::Args;

use crate::error::Result;
use crate::surface::{render_ascii, PixelSet, Surface};
use crate::types::{Colour, Point, RoundingMode};

/// Show distance and quadrant for a point
#[derive(Args, Debug)]
pub struct PointArgs {
    #[arg(allow_negative_numbers = true)]
    pub x: f64,
    #[arg(allow_negative_numbers = true)]
    pub y: f64,

    /// Measure distance from this point instead of the origin, as `x,y`
    #[arg(long, allow_hyphen_values = true, default_value = "0,0")]
    pub from: Point,
}

/// Draw a single point on an ASCII screen
#[derive(Args, Debug)]
pub struct ScreenArgs {
    #[arg(allow_negative_numbers = true)]
    pub x: f64,
    #[arg(allow_negative_numbers = true)]
    pub y: f64,

    #[arg(long, default_value = "10")]
    pub width: u32,

    #[arg(long, default_value = "10")]
    pub height: u32,
}

pub fn run_point(args: PointArgs) -> Result<()> {
    describe_point(&args, &mut io::stdout().lock())
}

pub fn run_screen(args: ScreenArgs) -> Result<()> {
    writeln!(io::stdout().lock(), "{}", screen(&args))?;
    Ok(())
}

fn describe_point(args: &PointArgs, out: &mut dyn Write) -> Result<()> {
    let p = Point::new(args.x, args.y);

    writeln!(out, "point:    {}", p)?;
    writeln!(out, "distance: {:.3} from {}", args.from.distance(p), args.from)?;
    writeln!(out, "location: {}", p.quadrant())?;
    Ok(())
}

/// The screen with the point snapped to its pixel. Points off the screen
/// leave it blank.
fn screen(args: &ScreenArgs) -> String {
    let mut pixels = PixelSet::new();
    let (x, y) = Point::new(args.x, args.y).to_pixel(RoundingMode::default());
    pixels.put_pixel(x, y, Colour::BLACK);

    render_ascii(&pixels, args.width, args.height)
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_describe_point() {
        let args = PointArgs {
            x: 3.0,
            y: -4.0,
            from: Point::ORIGIN,
        };
        let mut out = Vec::new();
        describe_point(&args, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "point:    (3, -4)\ndistance: 5.000 from (0, 0)\nlocation: quadrant IV\n"
        );
    }

    #[test]
    fn test_distance_from_other_point() {
        let args = PointArgs {
            x: 4.0,
            y: 4.0,
            from: Point::new(1.0, 0.0),
        };
        let mut out = Vec::new();
        describe_point(&args, &mut out).unwrap();
        assert!(String::from_utf8(out).unwrap().contains("distance: 5.000 from (1, 0)"));
    }

    #[test]
    fn test_screen_rounds_point() {
        let args = ScreenArgs {
            x: 2.5,
            y: 1.4,
            width: 5,
            height: 3,
        };
        assert_snapshot!(screen(&args), @r"
        . . . . .
        . . . X .
        . . . . .
        ");
    }

    #[test]
    fn test_screen_off_screen_point() {
        let args = ScreenArgs {
            x: -1.0,
            y: 0.0,
            width: 2,
            height: 1,
        };
        assert_eq!(screen(&args), ". .");
    }
}
