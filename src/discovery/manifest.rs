//! Project manifest (`raster.yaml`).
//!
//! Every field is optional. Command-line flags win over manifest values,
//! and manifest values win over the built-in defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{RasterError, Result};
use crate::scene::MiniSceneConfig;
use crate::types::RoundingMode;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Manifest {
    /// Directories or files to scan when no paths are given.
    pub sources: Vec<String>,

    /// Where rendered PNGs go.
    pub output: PathBuf,

    /// Integer upscale applied when writing PNGs.
    pub scale: Option<u32>,

    /// How fractional coordinates snap to pixels.
    pub rounding: RoundingMode,

    /// Frames rendered by `rasterlab demo`.
    pub frames: Option<u32>,

    /// Path substrings or `*suffix` patterns skipped while scanning.
    pub excludes: Vec<String>,

    /// Layout overrides for the demo landscape.
    pub demo: MiniSceneConfig,
}

fn default_output() -> PathBuf {
    PathBuf::from("dist")
}

impl Default for Manifest {
    fn default() -> Self {
        Self {
            sources: vec![],
            output: default_output(),
            scale: None,
            rounding: RoundingMode::default(),
            frames: None,
            excludes: vec![],
            demo: MiniSceneConfig::default(),
        }
    }
}

impl Manifest {
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| RasterError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read manifest: {}", e),
        })?;

        Self::parse(&content)
    }

    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| RasterError::Parse {
            message: format!("Invalid manifest: {}", e),
            help: Some("Check raster.yaml syntax".to_string()),
        })
    }

    /// Whether a scanned path matches one of the exclude patterns.
    pub fn is_excluded(&self, path: &Path) -> bool {
        let path = path.to_string_lossy();

        self.excludes.iter().any(|pattern| match pattern.strip_prefix('*') {
            Some(suffix) => path.ends_with(suffix),
            None => path.contains(pattern.as_str()),
        })
    }

    /// Source paths, defaulting to the current directory.
    pub fn effective_sources(&self) -> Vec<String> {
        if self.sources.is_empty() {
            vec![".".to_string()]
        } else {
            self.sources.clone()
        }
    }

    pub fn effective_scale(&self) -> u32 {
        self.scale.unwrap_or(1).max(1)
    }

    pub fn effective_frames(&self) -> u32 {
        self.frames.unwrap_or(60)
    }
}
