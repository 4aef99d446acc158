/// Photo decoding and letterbox scaling
///
/// Photos are decoded to RGBA and scaled by a single factor so the whole
/// image fits on the render surface. Nothing is cropped.

use image::{imageops::FilterType, RgbaImage};
use std::path::Path;

use crate::error::PhotoError;

/// Size of the render surface, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Surface {
    pub width: u32,
    pub height: u32,
}

impl Surface {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Top-left position that centres an image of the given size.
    /// Uses floor division; negative offsets only occur for oversize images.
    pub fn centre(&self, width: u32, height: u32) -> (i64, i64) {
        (
            (i64::from(self.width) - i64::from(width)).div_euclid(2),
            (i64::from(self.height) - i64::from(height)).div_euclid(2),
        )
    }
}

/// Uniform scale factor `min(sw/iw, sh/ih)` and the resulting size.
///
/// The bounding axis takes the surface size exactly; the other axis is
/// computed in integers and truncated toward zero, so the result never
/// overflows the surface. Both sides are at least one pixel.
pub fn fit_scale(surface: Surface, width: u32, height: u32) -> (f64, u32, u32) {
    let (iw, ih) = (u64::from(width.max(1)), u64::from(height.max(1)));
    let (sw, sh) = (u64::from(surface.width), u64::from(surface.height));

    let (new_width, new_height, scale) = if sw * ih <= sh * iw {
        (sw, ih * sw / iw, sw as f64 / iw as f64)
    } else {
        (iw * sh / ih, sh, sh as f64 / ih as f64)
    };

    (scale, new_width.max(1) as u32, new_height.max(1) as u32)
}

/// Decode the photo at `path` and scale it to fit `surface`
pub fn load_and_scale(path: &Path, surface: Surface) -> Result<RgbaImage, PhotoError> {
    let photo = image::open(path)
        .map_err(|source| PhotoError::Decode {
            path: path.to_path_buf(),
            source,
        })?
        .to_rgba8();

    let (scale, width, height) = fit_scale(surface, photo.width(), photo.height());
    log::debug!(
        "Loaded {} ({}x{}), scale {:.3} -> {}x{}",
        path.display(),
        photo.width(),
        photo.height(),
        scale,
        width,
        height
    );

    if (width, height) == photo.dimensions() {
        return Ok(photo);
    }

    // Bilinear is enough at display size and keeps transition starts quick
    Ok(image::imageops::resize(&photo, width, height, FilterType::Triangle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgb, RgbImage};
    use tempfile::TempDir;

    fn write_photo(dir: &Path, name: &str, width: u32, height: u32) -> std::path::PathBuf {
        let path = dir.join(name);
        RgbImage::from_pixel(width, height, Rgb([200, 30, 30]))
            .save(&path)
            .unwrap();
        path
    }

    #[test]
    fn test_fit_scale_landscape_into_landscape() {
        let (scale, w, h) = fit_scale(Surface::new(800, 600), 1600, 900);
        assert!((scale - 0.5).abs() < 1e-9);
        assert_eq!((w, h), (800, 450));
    }

    #[test]
    fn test_fit_scale_portrait_is_letterboxed() {
        let (_, w, h) = fit_scale(Surface::new(800, 600), 1000, 2000);
        assert_eq!((w, h), (300, 600));
    }

    #[test]
    fn test_fit_scale_upscales_small_images() {
        let (scale, w, h) = fit_scale(Surface::new(800, 600), 200, 100);
        assert!((scale - 4.0).abs() < 1e-9);
        assert_eq!((w, h), (800, 400));
    }

    #[test]
    fn test_centre_offsets() {
        let surface = Surface::new(800, 600);
        assert_eq!(surface.centre(800, 450), (0, 75));
        assert_eq!(surface.centre(301, 600), (249, 0));
    }

    #[test]
    fn test_load_and_scale_fits_inside_surface() {
        let dir = TempDir::new().unwrap();
        let path = write_photo(dir.path(), "big.png", 1234, 777);
        let surface = Surface::new(320, 240);

        let scaled = load_and_scale(&path, surface).unwrap();
        assert!(scaled.width() <= surface.width);
        assert!(scaled.height() <= surface.height);

        let original = 1234.0 / 777.0;
        let result = f64::from(scaled.width()) / f64::from(scaled.height());
        assert!((original - result).abs() < 0.02, "aspect {original} vs {result}");
    }

    #[test]
    fn test_load_and_scale_reports_decode_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.jpg");
        std::fs::write(&path, b"definitely not a jpeg").unwrap();

        let result = load_and_scale(&path, Surface::new(100, 100));
        assert!(matches!(result, Err(PhotoError::Decode { .. })));
    }
}
