use clap::Parser;
use miette::Result;
use rasterlab::cli::{Cli, Commands};
use rasterlab::output::Printer;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let printer = Printer::new().quiet(cli.quiet);

    match cli.command {
        Commands::Render(args) => rasterlab::cli::render::run(args, &printer)?,
        Commands::Validate(args) => rasterlab::cli::validate::run(args, &printer)?,
        Commands::Demo(args) => rasterlab::cli::demo::run(args, &printer)?,
        Commands::Line(args) => rasterlab::cli::pixels::run_line(args)?,
        Commands::Circle(args) => rasterlab::cli::pixels::run_circle(args)?,
        Commands::Point(args) => rasterlab::cli::point::run_point(args)?,
        Commands::Screen(args) => rasterlab::cli::point::run_screen(args)?,
        Commands::Completions(args) => rasterlab::cli::completions::run(args)?,
    }

    Ok(())
}
