//! Frame-per-file surface for animation loops.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{RasterError, Result};
use crate::types::Colour;

use super::{write_png, Canvas, Surface};

/// A canvas that writes `frame-NNNN.png` into a directory on every
/// [`present`](Surface::present).
#[derive(Debug)]
pub struct PngSequence {
    canvas: Canvas,
    dir: PathBuf,
    scale: u32,
    frame: usize,
}

impl PngSequence {
    /// Create the sequence, creating `dir` if it does not exist.
    pub fn create(canvas: Canvas, dir: impl Into<PathBuf>, scale: u32) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| RasterError::Io {
            path: dir.clone(),
            message: format!("Failed to create frame directory: {}", e),
        })?;

        Ok(Self {
            canvas,
            dir,
            scale,
            frame: 0,
        })
    }

    /// Number of frames presented so far.
    pub fn frames_written(&self) -> usize {
        self.frame
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    /// Path the given frame index is written to.
    pub fn frame_path(&self, index: usize) -> PathBuf {
        self.dir.join(format!("frame-{:04}.png", index))
    }
}

impl Surface for PngSequence {
    fn put_pixel(&mut self, x: i32, y: i32, colour: Colour) {
        self.canvas.put_pixel(x, y, colour);
    }

    fn clear(&mut self) {
        self.canvas.clear();
    }

    fn bounds(&self) -> Option<(u32, u32)> {
        self.canvas.bounds()
    }

    fn present(&mut self) -> Result<()> {
        write_png(&self.canvas, &self.frame_path(self.frame), self.scale)?;
        self.frame += 1;
        Ok(())
    }
}
