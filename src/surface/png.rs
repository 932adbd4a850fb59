//! PNG output for canvases.
//!
//! Converts a canvas to a PNG file with optional integer scaling.

use std::path::Path;

use image::{imageops, RgbaImage};

use crate::error::{RasterError, Result};

use super::Canvas;

/// Write a canvas to a PNG file.
///
/// # Arguments
///
/// * `canvas` - The canvas to write
/// * `path` - Output file path
/// * `scale` - Integer scale factor (1 = no scaling, 0 is treated as 1)
pub fn write_png(canvas: &Canvas, path: &Path, scale: u32) -> Result<()> {
    if canvas.width() == 0 || canvas.height() == 0 {
        return Err(RasterError::Render {
            message: format!("Cannot encode a {}x{} canvas", canvas.width(), canvas.height()),
            help: Some("Give the canvas a non-zero width and height".to_string()),
        });
    }

    let img = scale_image(&canvas.to_rgba_image(), scale)?;

    img.save(path).map_err(|e| RasterError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })?;

    Ok(())
}

/// Nearest-neighbour integer upscale, keeping pixels crisp.
///
/// Fails with a render error when the scaled size overflows.
pub fn scale_image(img: &RgbaImage, scale: u32) -> Result<RgbaImage> {
    if scale <= 1 {
        return Ok(img.clone());
    }

    let (width, height) = img.dimensions();
    let scaled = width
        .checked_mul(scale)
        .zip(height.checked_mul(scale))
        .filter(|&(w, h)| {
            (w as usize)
                .checked_mul(h as usize)
                .and_then(|n| n.checked_mul(4))
                .is_some()
        });

    let Some((scaled_width, scaled_height)) = scaled else {
        return Err(RasterError::Render {
            message: format!("Scaling a {}x{} canvas by {} overflows", width, height, scale),
            help: Some("Use a smaller --scale, or lower `scale` in raster.yaml".to_string()),
        });
    };

    Ok(imageops::resize(
        img,
        scaled_width,
        scaled_height,
        imageops::FilterType::Nearest,
    ))
}
