//! Raster export via the `image` crate.

use std::path::Path;

use image::ImageFormat;

use crate::canvas::Canvas;
use crate::error::{AbstroError, Result};

/// Write the canvas raster to `path`.
///
/// The format follows the file extension; anything that is not `.jpg` or
/// `.jpeg` is written as PNG.
pub fn write_raster(canvas: &Canvas, path: &Path) -> Result<()> {
    let format = match path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .as_deref()
    {
        Some("jpg") | Some("jpeg") => ImageFormat::Jpeg,
        _ => ImageFormat::Png,
    };

    canvas
        .pixels()
        .save_with_format(path, format)
        .map_err(|e| AbstroError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to write image: {}", e),
        })
}
