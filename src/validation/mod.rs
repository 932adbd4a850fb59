//! Scene validation.
//!
//! Runs every check against a parsed scene and reports errors and warnings.
//! Used by `rasterlab validate` and, before drawing, by `rasterlab render`.

mod checks;
mod warning;

pub use warning::{Diagnostic, Severity, ValidationResult};

use crate::output::{plural, Printer};
use crate::scene::SceneDocument;

/// Run all checks against one scene.
pub fn validate_scene(doc: &SceneDocument) -> ValidationResult {
    let mut result = ValidationResult::new();

    result.merge(checks::check_scene_name(doc));
    result.merge(checks::check_canvas_size(doc));
    result.merge(checks::check_degenerate_shapes(doc));
    result.merge(checks::check_zero_scale(doc));
    result.merge(checks::check_huge_radius(doc));
    result.merge(checks::check_off_canvas(doc));

    result
}

/// Print each diagnostic, then a one-line summary.
pub fn print_diagnostics(result: &ValidationResult, printer: &Printer) {
    for d in result.iter() {
        let label = printer.severity(&d.severity.to_string(), d.severity == Severity::Error);
        printer.detail(&format!("{}[{}]: {}", label, printer.dim(&d.code), d.message));
        if let Some(help) = &d.help {
            printer.detail(&format!("  help: {}", help));
        }
    }

    let errors = plural(result.error_count(), "error", "errors");
    let warnings = plural(result.warning_count(), "warning", "warnings");

    if result.has_errors() {
        printer.error("Failed", &format!("{}, {}", errors, warnings));
    } else if result.has_warnings() {
        printer.warning("Passed", &format!("with {}", warnings));
    } else {
        printer.status("Passed", "no issues");
    }
}
