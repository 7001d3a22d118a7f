//! Writing renderings to disk

use std::fs;
use std::path::Path;

use image::{DynamicImage, ImageError, RgbaImage};

use crate::render::VectorDocument;
use crate::{Error, Result};

/// Save a raster image, format chosen by extension.
///
/// The alpha channel is dropped first so the file is always opaque RGB.
pub fn save_raster(image: &RgbaImage, path: &Path) -> Result<()> {
    let rgb = DynamicImage::ImageRgba8(image.clone()).to_rgb8();
    rgb.save(path).map_err(|e| match e {
        ImageError::IoError(source) => Error::PersistenceFailed {
            path: path.to_path_buf(),
            source,
        },
        other => Error::Image(other),
    })?;
    tracing::info!("wrote {}", path.display());
    Ok(())
}

/// Save a vector document as SVG markup.
pub fn save_svg(document: &VectorDocument, path: &Path) -> Result<()> {
    fs::write(path, document.to_svg()).map_err(|source| Error::PersistenceFailed {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!("wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroU32;

    use image::Rgba;

    use super::*;
    use crate::render::{render, Color, RenderStyle};
    use crate::symbol::ModuleMatrix;

    #[test]
    fn test_png_is_rgb() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("qr.png");
        let image = RgbaImage::from_pixel(8, 8, Rgba([10, 20, 30, 128]));

        save_raster(&image, &path).unwrap();

        let loaded = image::open(&path).unwrap();
        assert_eq!(loaded.color(), image::ColorType::Rgb8);
        assert_eq!(loaded.to_rgb8().get_pixel(0, 0).0, [10, 20, 30]);
    }

    #[test]
    fn test_svg_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("qr.svg");
        let matrix = ModuleMatrix::from_rows(&[[true, false], [false, true]]).unwrap();
        let doc = render(&matrix, NonZeroU32::new(10).unwrap(), RenderStyle::Square, Color::BLACK, Color::WHITE);

        save_svg(&doc, &path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), doc.to_svg());
    }

    #[test]
    fn test_write_failure_reports_path() {
        let path = Path::new("/nonexistent/dir/qr.svg");
        let doc = render(&ModuleMatrix::empty(), NonZeroU32::new(10).unwrap(), RenderStyle::Square, Color::BLACK, Color::WHITE);
        match save_svg(&doc, path) {
            Err(Error::PersistenceFailed { path: failed, .. }) => assert_eq!(failed, path),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn test_png_write_failure() {
        let image = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255]));
        let result = save_raster(&image, Path::new("/nonexistent/dir/qr.png"));
        assert!(matches!(result, Err(Error::PersistenceFailed { .. })));
    }
}
