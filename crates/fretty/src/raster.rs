//! Writing rendered diagrams to image files.
//!
//! SVG markup is written as text. PNG output is rasterized with `resvg`
//! when the `png` feature is enabled.

use std::{fs, path::Path};

use log::{debug, info};

use crate::FrettyError;

/// Returns `true` if `path` names a PNG file (case-insensitive).
pub fn is_png(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("png"))
}

/// Writes `svg` to `path`, rasterizing it first when `path` ends in `.png`.
///
/// # Errors
///
/// Returns [`FrettyError::Io`] if the file cannot be written, or
/// [`FrettyError::Raster`] if PNG conversion fails.
pub fn write_image(path: &Path, svg: &str) -> Result<(), FrettyError> {
    if is_png(path) {
        let png = rasterize_png(svg)?;
        fs::write(path, png)?;
    } else {
        fs::write(path, svg)?;
    }
    info!(path:? = path; "Image written");
    Ok(())
}

/// Rasterizes standalone SVG markup to PNG bytes.
///
/// The image takes the pixel size of the SVG's `width`/`height`, falling
/// back to its `viewBox`.
#[cfg(feature = "png")]
pub fn rasterize_png(svg: &str) -> Result<Vec<u8>, FrettyError> {
    use resvg::{tiny_skia, usvg};

    let mut options = usvg::Options::default();
    options.fontdb_mut().load_system_fonts();

    let tree = usvg::Tree::from_str(svg, &options)
        .map_err(|err| FrettyError::Raster(format!("failed to parse SVG: {err}")))?;

    let size = tree.size().to_int_size();
    debug!(width = size.width(), height = size.height(); "Rasterizing SVG");

    let mut pixmap = tiny_skia::Pixmap::new(size.width(), size.height())
        .ok_or_else(|| FrettyError::Raster("failed to allocate pixmap".to_string()))?;
    resvg::render(&tree, tiny_skia::Transform::default(), &mut pixmap.as_mut());

    pixmap
        .encode_png()
        .map_err(|err| FrettyError::Raster(format!("failed to encode PNG: {err}")))
}

/// Rasterizes standalone SVG markup to PNG bytes.
///
/// Always fails: this build has no PNG support.
#[cfg(not(feature = "png"))]
pub fn rasterize_png(_svg: &str) -> Result<Vec<u8>, FrettyError> {
    debug!("PNG requested without the `png` feature");
    Err(FrettyError::Raster(
        "PNG output requires the `png` feature".to_string(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_png() {
        assert!(is_png(Path::new("chord.png")));
        assert!(is_png(Path::new("out/Chord.PNG")));
        assert!(!is_png(Path::new("chord.svg")));
        assert!(!is_png(Path::new("png")));
    }

    #[test]
    fn test_write_svg_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chord.svg");

        write_image(&path, "<svg/>").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "<svg/>");
    }

    #[cfg(feature = "png")]
    #[test]
    fn test_rasterize_png_signature() {
        let svg = crate::generate_svg(["C", "-(1)-"], &crate::RenderOptions::default()).unwrap();
        let png = rasterize_png(&svg).unwrap();
        assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
    }

    #[cfg(not(feature = "png"))]
    #[test]
    fn test_png_without_feature_fails() {
        assert!(matches!(rasterize_png("<svg/>"), Err(FrettyError::Raster(_))));
    }
}
