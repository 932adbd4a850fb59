use std::path::{Path, PathBuf};

use clap::Args;

use crate::discovery::{discover, discover_paths};
use crate::error::{RasterError, Result};
use crate::output::{display_path, plural, Printer};
use crate::scene::SceneDocument;
use crate::validation::{print_diagnostics, validate_scene, ValidationResult};

/// Check scene files without rendering
#[derive(Args, Debug, Default)]
pub struct ValidateArgs {
    /// Scene files or directories (default: sources from raster.yaml, or .)
    pub paths: Vec<PathBuf>,

    /// Treat warnings as errors
    #[arg(long)]
    pub strict: bool,
}

pub fn run(args: ValidateArgs, printer: &Printer) -> Result<()> {
    validate_in(Path::new("."), &args, printer).map(|_| ())
}

/// Validate every scene under `root`, returning the combined result.
pub fn validate_in(root: &Path, args: &ValidateArgs, printer: &Printer) -> Result<ValidationResult> {
    let discovery = if args.paths.is_empty() {
        discover(root)?
    } else {
        discover_paths(root, &args.paths)?
    };

    let mut all = ValidationResult::new();

    for path in &discovery.scenes {
        printer.info("Checking", &display_path(path));
        let result = validate_scene(&SceneDocument::load(path)?);
        if !result.is_ok() {
            print_diagnostics(&result, printer);
        }
        all.merge(result);
    }

    let failed = all.has_errors() || (args.strict && all.has_warnings());
    if failed {
        return Err(RasterError::Validation {
            message: format!(
                "{}, {} across {}",
                plural(all.error_count(), "error", "errors"),
                plural(all.warning_count(), "warning", "warnings"),
                plural(discovery.scenes.len(), "scene", "scenes")
            ),
            help: args
                .strict
                .then(|| "--strict fails on warnings too".to_string()),
        });
    }

    printer.status(
        "Validated",
        &plural(discovery.scenes.len(), "scene", "scenes"),
    );
    Ok(all)
}
