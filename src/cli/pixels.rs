//! `rasterlab line` and `rasterlab circle`: print rasterized pixels.
//!
//! Output goes to stdout as plain `x y` rows, a JSON array of `[x, y]`
//! pairs, or an ASCII screen.

use std::collections::HashSet;
use std::io::{self, Write};

use clap::Args;

use crate::error::Result;
use crate::raster::{circle_spans, rasterize_circle, LinePixels};
use crate::surface::{render_ascii, PixelSet, Surface};
use crate::types::{Colour, RoundingMode};

/// Output format shared by the pixel commands.
#[derive(Args, Debug, Clone, Default)]
pub struct PixelOutput {
    /// Print a JSON array of [x, y] pairs
    #[arg(long, conflicts_with = "ascii")]
    pub json: bool,

    /// Draw the pixels on an ASCII screen
    #[arg(long)]
    pub ascii: bool,

    /// Screen width for --ascii (default: fits the pixels)
    #[arg(long, requires = "ascii")]
    pub width: Option<u32>,

    /// Screen height for --ascii (default: fits the pixels)
    #[arg(long, requires = "ascii")]
    pub height: Option<u32>,
}

/// Print the pixels of a line segment
#[derive(Args, Debug)]
pub struct LineArgs {
    #[arg(allow_negative_numbers = true)]
    pub x1: f64,
    #[arg(allow_negative_numbers = true)]
    pub y1: f64,
    #[arg(allow_negative_numbers = true)]
    pub x2: f64,
    #[arg(allow_negative_numbers = true)]
    pub y2: f64,

    /// half-away-from-zero or half-to-even
    #[arg(long, default_value = "half-away-from-zero")]
    pub rounding: RoundingMode,

    #[command(flatten)]
    pub output: PixelOutput,
}

/// Print the pixels of a circle
#[derive(Args, Debug)]
pub struct CircleArgs {
    #[arg(allow_negative_numbers = true)]
    pub cx: i32,
    #[arg(allow_negative_numbers = true)]
    pub cy: i32,
    pub radius: u32,

    /// Include the interior, not just the perimeter
    #[arg(long)]
    pub fill: bool,

    #[command(flatten)]
    pub output: PixelOutput,
}

pub fn run_line(args: LineArgs) -> Result<()> {
    let pixels: Vec<_> =
        LinePixels::with_rounding(args.x1, args.y1, args.x2, args.y2, args.rounding).collect();
    emit(&pixels, &args.output, &mut io::stdout().lock())
}

pub fn run_circle(args: CircleArgs) -> Result<()> {
    emit(&circle_pixels(&args), &args.output, &mut io::stdout().lock())
}

/// Perimeter in generation order without repeats, or the filled disc row by row.
fn circle_pixels(args: &CircleArgs) -> Vec<(i32, i32)> {
    if args.fill {
        return circle_spans(args.cx, args.cy, args.radius)
            .iter()
            .flat_map(|span| span.pixels())
            .collect();
    }

    let mut seen = HashSet::new();
    rasterize_circle(args.cx, args.cy, args.radius)
        .filter(|p| seen.insert(*p))
        .collect()
}

fn emit(pixels: &[(i32, i32)], format: &PixelOutput, out: &mut dyn Write) -> Result<()> {
    if format.json {
        serde_json::to_writer(&mut *out, pixels).map_err(io::Error::from)?;
        writeln!(out)?;
    } else if format.ascii {
        let mut set = PixelSet::new();
        for &(x, y) in pixels {
            set.put_pixel(x, y, Colour::BLACK);
        }
        let (fit_w, fit_h) = fit_window(pixels);
        let width = format.width.unwrap_or(fit_w);
        let height = format.height.unwrap_or(fit_h);
        writeln!(out, "{}", render_ascii(&set, width, height))?;
    } else {
        for (x, y) in pixels {
            writeln!(out, "{} {}", x, y)?;
        }
    }

    Ok(())
}

/// Smallest origin-anchored window showing every non-negative pixel.
fn fit_window(pixels: &[(i32, i32)]) -> (u32, u32) {
    pixels.iter().fold((1, 1), |(w, h), &(x, y)| {
        (w.max(x.saturating_add(1).max(0) as u32), h.max(y.saturating_add(1).max(0) as u32))
    })
}
