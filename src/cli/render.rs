//! Render command implementation.
//!
//! Loads scene files, validates them, and writes one PNG per scene.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;

use crate::discovery::{discover, discover_paths, Discovery};
use crate::error::{RasterError, Result};
use crate::output::{display_path, plural, Printer};
use crate::scene::{SceneDocument, SceneRenderer};
use crate::surface::write_png;
use crate::types::RoundingMode;
use crate::validation::{print_diagnostics, validate_scene};

/// Render scene files to PNG
#[derive(Args, Debug, Default)]
pub struct RenderArgs {
    /// Scene files or directories (default: sources from raster.yaml, or .)
    pub paths: Vec<PathBuf>,

    /// Output directory (default: raster.yaml `output`, or dist)
    #[arg(long, short)]
    pub output: Option<PathBuf>,

    /// Integer upscale for written PNGs
    #[arg(long)]
    pub scale: Option<u32>,

    /// half-away-from-zero or half-to-even
    #[arg(long)]
    pub rounding: Option<RoundingMode>,
}

pub fn run(args: RenderArgs, printer: &Printer) -> Result<()> {
    render_in(Path::new("."), &args, printer).map(|_| ())
}

/// Render relative to a project root, returning the PNGs written.
pub fn render_in(root: &Path, args: &RenderArgs, printer: &Printer) -> Result<Vec<PathBuf>> {
    let discovery = if args.paths.is_empty() {
        discover(root)?
    } else {
        discover_paths(root, &args.paths)?
    };

    if discovery.scenes.is_empty() {
        printer.warning("Warning", "no *.scene.yaml files found");
        return Ok(vec![]);
    }

    let output = resolve_output(root, args, &discovery);
    fs::create_dir_all(&output).map_err(|e| RasterError::Io {
        path: output.clone(),
        message: format!("Failed to create output directory: {}", e),
    })?;

    let scale = args.scale.unwrap_or(discovery.manifest.effective_scale());
    let rounding = args.rounding.unwrap_or(discovery.manifest.rounding);
    let renderer = SceneRenderer::new().with_rounding(rounding);

    let mut written = Vec::new();
    let mut failed = 0;

    for path in &discovery.scenes {
        let doc = SceneDocument::load(path)?;

        let result = validate_scene(&doc);
        if !result.is_ok() {
            printer.warning("Checking", &display_path(path));
            print_diagnostics(&result, printer);
        }
        if result.has_errors() {
            failed += 1;
            continue;
        }

        printer.status(
            "Rendering",
            &format!(
                "{} {}",
                doc.name,
                printer.dim(&format!("({}x{})", doc.canvas.width, doc.canvas.height))
            ),
        );

        let canvas = renderer.render_canvas(&doc);
        let target = output.join(format!("{}.png", doc.name));
        write_png(&canvas, &target, scale)?;
        written.push(target);
    }

    if failed > 0 {
        return Err(RasterError::Validation {
            message: format!("{} failed validation", plural(failed, "scene", "scenes")),
            help: Some("Run `rasterlab validate` for details".to_string()),
        });
    }

    printer.status(
        "Finished",
        &format!(
            "{} to {}",
            plural(written.len(), "scene", "scenes"),
            printer.cyan(&display_path(&output))
        ),
    );

    Ok(written)
}

fn resolve_output(root: &Path, args: &RenderArgs, discovery: &Discovery) -> PathBuf {
    let output = args
        .output
        .clone()
        .unwrap_or_else(|| discovery.manifest.output.clone());

    if output.is_absolute() {
        output
    } else {
        root.join(output)
    }
}
