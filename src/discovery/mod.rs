//! Finding scene files and the project manifest.
//!
//! With no explicit paths, [`discover`] reads `raster.yaml` from the project
//! root (if present) and scans its `sources`. With explicit paths,
//! [`discover_paths`] scans only those, still honouring the manifest's
//! excludes.

mod manifest;
mod scanner;

use std::path::{Path, PathBuf};

use crate::error::Result;

pub use manifest::Manifest;
pub use scanner::{scan_directory, scan_sources};

pub const MANIFEST_FILENAME: &str = "raster.yaml";

/// A project root with its manifest and the scenes found under it.
#[derive(Debug)]
pub struct Discovery {
    pub root: PathBuf,
    pub manifest: Manifest,
    pub has_manifest: bool,
    pub scenes: Vec<PathBuf>,
}

/// Load `raster.yaml` from `root`, falling back to defaults.
pub fn load_manifest(root: &Path) -> Result<(Manifest, bool)> {
    let path = root.join(MANIFEST_FILENAME);
    if path.exists() {
        Ok((Manifest::load(&path)?, true))
    } else {
        Ok((Manifest::default(), false))
    }
}

/// Discover scenes under a project root using its manifest's sources.
pub fn discover(root: impl AsRef<Path>) -> Result<Discovery> {
    let root = root.as_ref().to_path_buf();
    let (manifest, has_manifest) = load_manifest(&root)?;
    let scenes = scan_sources(&manifest.effective_sources(), &root, &manifest);

    Ok(Discovery {
        root,
        manifest,
        has_manifest,
        scenes,
    })
}

/// Discover scenes from explicit files or directories.
pub fn discover_paths(root: impl AsRef<Path>, paths: &[PathBuf]) -> Result<Discovery> {
    let root = root.as_ref().to_path_buf();
    let (manifest, has_manifest) = load_manifest(&root)?;

    let mut scenes = Vec::new();
    for path in paths {
        scenes.extend(scan_directory(path, &manifest));
    }

    Ok(Discovery {
        root,
        manifest,
        has_manifest,
        scenes,
    })
}
