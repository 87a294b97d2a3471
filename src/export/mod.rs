//! Output encoders.
//!
//! A canvas saves to either representation depending on the target file
//! extension: `.svg` replays the vector journal, everything else encodes
//! the raster (PNG unless the extension says JPEG).

mod raster;
mod svg;

use std::path::Path;

use crate::canvas::Canvas;
use crate::error::Result;

pub use svg::svg_document;

/// Save the canvas to `path`, picking the encoder from the extension.
pub fn save(canvas: &Canvas, path: &Path) -> Result<()> {
    let is_svg = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("svg"));

    if is_svg {
        svg::write_svg(canvas, path)
    } else {
        raster::write_raster(canvas, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Colour;
    use tempfile::tempdir;

    #[test]
    fn test_save_dispatches_on_extension() {
        let mut canvas = Canvas::new(40, 40, Some(1), None);
        canvas.add_circle(20.0, 20.0, 8.0, Some(Colour::rgb(50, 60, 70)), None, 1);

        let dir = tempdir().unwrap();

        let svg_path = dir.path().join("a.svg");
        save(&canvas, &svg_path).unwrap();
        let text = std::fs::read_to_string(&svg_path).unwrap();
        assert!(text.contains("<svg"));

        let png_path = dir.path().join("a.png");
        save(&canvas, &png_path).unwrap();
        let bytes = std::fs::read(&png_path).unwrap();
        assert_eq!(&bytes[..4], &[0x89, b'P', b'N', b'G']);
    }

    #[test]
    fn test_svg_extension_case_insensitive() {
        let canvas = Canvas::new(10, 10, Some(1), None);
        let dir = tempdir().unwrap();
        let path = dir.path().join("b.SVG");
        save(&canvas, &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("xmlns"));
    }
}
