//! Bounded canvas with a background colour.

use image::{ImageBuffer, Rgba, RgbaImage};

use super::{PixelSet, Surface};
use crate::types::Colour;

/// A `width x height` surface.
///
/// Writes outside `[0, width) x [0, height)` are ignored. Unwritten pixels
/// read back as the background colour.
#[derive(Debug, Clone)]
pub struct Canvas {
    width: u32,
    height: u32,
    background: Colour,
    pixels: PixelSet,
}

impl Canvas {
    pub fn new(width: u32, height: u32, background: Colour) -> Self {
        Self {
            width,
            height,
            background,
            pixels: PixelSet::new(),
        }
    }

    /// Width in pixels.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the dimensions as (width, height).
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Colour of every pixel not yet written.
    pub fn background(&self) -> Colour {
        self.background
    }

    /// Whether `(x, y)` lies on the canvas.
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as u32) < self.width && (y as u32) < self.height
    }

    /// Colour at a position, or `None` outside the canvas.
    pub fn get(&self, x: i32, y: i32) -> Option<Colour> {
        if !self.in_bounds(x, y) {
            return None;
        }
        Some(self.pixels.get(x, y).unwrap_or(self.background))
    }

    /// Number of distinct pixels written since the last clear.
    pub fn pixels_written(&self) -> usize {
        self.pixels.len()
    }

    /// The written pixels without the background.
    pub fn pixels(&self) -> &PixelSet {
        &self.pixels
    }

    /// Flatten into an RGBA image, background first.
    pub fn to_rgba_image(&self) -> RgbaImage {
        let mut img: RgbaImage =
            ImageBuffer::from_pixel(self.width, self.height, Rgba(self.background.to_rgba()));

        for ((x, y), colour) in self.pixels.iter() {
            img.put_pixel(x as u32, y as u32, Rgba(colour.to_rgba()));
        }

        img
    }
}

impl Surface for Canvas {
    fn put_pixel(&mut self, x: i32, y: i32, colour: Colour) {
        if self.in_bounds(x, y) {
            self.pixels.put_pixel(x, y, colour);
        }
    }

    fn clear(&mut self) {
        self.pixels.clear();
    }

    fn bounds(&self) -> Option<(u32, u32)> {
        Some(self.size())
    }
}
