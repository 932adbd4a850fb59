pub mod completions;
pub mod demo;
pub mod pixels;
pub mod point;
pub mod render;
pub mod validate;

use clap::{Parser, Subcommand};

/// rasterlab - scan-conversion playground for lines, circles and polygons
#[derive(Parser, Debug)]
#[command(name = "rasterlab")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Only print warnings and errors
    #[arg(long, short, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render scene files to PNG
    Render(render::RenderArgs),

    /// Check scene files without rendering
    Validate(validate::ValidateArgs),

    /// Render the animated landscape as a PNG sequence
    Demo(demo::DemoArgs),

    /// Print the pixels of a line segment
    Line(pixels::LineArgs),

    /// Print the pixels of a circle
    Circle(pixels::CircleArgs),

    /// Show distance and quadrant for a point
    Point(point::PointArgs),

    /// Draw a single point on an ASCII screen
    Screen(point::ScreenArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
