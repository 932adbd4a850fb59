//! Pixel surfaces.
//!
//! A surface is where rasterized pixels end up. The rasterizers never clip,
//! so every surface must accept any `i32` coordinate and silently drop the
//! ones it cannot store.

mod ascii;
mod canvas;
mod png;
mod sequence;

use std::collections::HashMap;

pub use ascii::render_ascii;
pub use canvas::Canvas;
pub use png::{scale_image, write_png};
pub use sequence::PngSequence;

use crate::error::Result;
use crate::types::Colour;

/// Destination for plotted pixels.
pub trait Surface {
    /// Record a pixel. Later writes to the same coordinate win.
    fn put_pixel(&mut self, x: i32, y: i32, colour: Colour);

    /// Forget every pixel written so far.
    fn clear(&mut self);

    /// `(width, height)` when only `[0, width) x [0, height)` is kept.
    fn bounds(&self) -> Option<(u32, u32)> {
        None
    }

    /// Publish the current frame.
    fn present(&mut self) -> Result<()> {
        Ok(())
    }
}

/// Unbounded sparse pixel map with last-write-wins semantics.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PixelSet {
    pixels: HashMap<(i32, i32), Colour>,
}

impl PixelSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Colour written at a position, if any.
    pub fn get(&self, x: i32, y: i32) -> Option<Colour> {
        self.pixels.get(&(x, y)).copied()
    }

    /// Whether anything was written at a position.
    pub fn contains(&self, x: i32, y: i32) -> bool {
        self.pixels.contains_key(&(x, y))
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Iterate `((x, y), colour)` in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = ((i32, i32), Colour)> + '_ {
        self.pixels.iter().map(|(&pos, &colour)| (pos, colour))
    }

    /// Coordinates sorted by row, then column.
    pub fn sorted_coords(&self) -> Vec<(i32, i32)> {
        let mut coords: Vec<_> = self.pixels.keys().copied().collect();
        coords.sort_by_key(|&(x, y)| (y, x));
        coords
    }
}

impl Surface for PixelSet {
    fn put_pixel(&mut self, x: i32, y: i32, colour: Colour) {
        self.pixels.insert((x, y), colour);
    }

    fn clear(&mut self) {
        self.pixels.clear();
    }
}
