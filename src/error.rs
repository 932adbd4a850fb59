use miette::Diagnostic;
use thiserror::Error;

/// Main error type for rasterlab operations.
///
/// The geometry core never fails; these variants cover file I/O, scene
/// parsing, validation and image encoding.
#[derive(Error, Diagnostic, Debug)]
pub enum RasterError {
    #[error("IO error: {0}")]
    #[diagnostic(code(rasterlab::io))]
    IoError(#[from] std::io::Error),

    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(rasterlab::io))]
    Io {
        path: std::path::PathBuf,
        message: String,
    },

    #[error("Parse error: {message}")]
    #[diagnostic(code(rasterlab::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Validation error: {message}")]
    #[diagnostic(code(rasterlab::validate))]
    Validation {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Render error: {message}")]
    #[diagnostic(code(rasterlab::render))]
    Render {
        message: String,
        #[help]
        help: Option<String>,
    },
}

pub type Result<T> = std::result::Result<T, RasterError>;
