//! Walks source paths for `*.scene.yaml` files.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::scene::is_scene_file;

use super::manifest::Manifest;

/// Recursively collect scene files under `root`, sorted by path.
///
/// A file path is returned as-is when it names a scene file. Missing paths
/// yield nothing.
pub fn scan_directory(root: &Path, manifest: &Manifest) -> Vec<PathBuf> {
    if root.is_file() {
        return if is_scene_file(root) {
            vec![root.to_path_buf()]
        } else {
            vec![]
        };
    }

    let mut found: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| is_scene_file(p) && !manifest.is_excluded(p))
        .collect();

    found.sort();
    found
}

/// Scan several sources, resolving relative ones against `base`.
pub fn scan_sources(sources: &[String], base: &Path, manifest: &Manifest) -> Vec<PathBuf> {
    let mut found = Vec::new();

    for source in sources {
        let path = Path::new(source);
        let path = if path.is_absolute() {
            path.to_path_buf()
        } else {
            base.join(path)
        };
        found.extend(scan_directory(&path, manifest));
    }

    found.dedup();
    found
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_scan_finds_nested_scenes() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("a/b")).unwrap();
        fs::write(dir.path().join("top.scene.yaml"), "name: top").unwrap();
        fs::write(dir.path().join("a/b/deep.scene.yaml"), "name: deep").unwrap();
        fs::write(dir.path().join("a/notes.yaml"), "x: 1").unwrap();

        let found = scan_directory(dir.path(), &Manifest::default());
        let names: Vec<_> = found
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect();

        assert_eq!(names, vec!["deep.scene.yaml", "top.scene.yaml"]);
    }

    #[test]
    fn test_scan_respects_excludes() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("drafts")).unwrap();
        fs::write(dir.path().join("keep.scene.yaml"), "name: keep").unwrap();
        fs::write(dir.path().join("drafts/skip.scene.yaml"), "name: skip").unwrap();

        let manifest = Manifest::parse("excludes: [\"drafts\"]").unwrap();
        assert_eq!(scan_directory(dir.path(), &manifest).len(), 1);
    }

    #[test]
    fn test_scan_single_file_and_missing_path() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("one.scene.yaml");
        fs::write(&file, "name: one").unwrap();

        assert_eq!(scan_directory(&file, &Manifest::default()), vec![file]);
        assert!(scan_directory(&dir.path().join("nope"), &Manifest::default()).is_empty());
    }

    #[test]
    fn test_scan_sources_relative_to_base() {
        let dir = tempdir().unwrap();
        fs::create_dir_all(dir.path().join("scenes")).unwrap();
        fs::write(dir.path().join("scenes/a.scene.yaml"), "name: a").unwrap();

        let found = scan_sources(&["scenes".to_string()], dir.path(), &Manifest::default());
        assert_eq!(found.len(), 1);
    }
}
