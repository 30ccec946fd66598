// imgedit/src/processors/loader.rs
use crate::core::{EditorError, Raster, Result};
use image::{ColorType, DynamicImage, GenericImageView, ImageReader};
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct Loader;

impl Loader {
    pub fn new() -> Self {
        Self
    }

    /// Decodes `path` into a raster; any open or decode failure is an
    /// invalid input file.
    pub fn load(&self, path: &Path) -> Result<Raster> {
        log::debug!("Loading image from: {}", path.display());

        let image = ImageReader::open(path)
            .map_err(image::ImageError::IoError)
            .and_then(|reader| reader.with_guessed_format().map_err(image::ImageError::IoError))
            .and_then(|reader| reader.decode())
            .map_err(|source| EditorError::InvalidInputFile {
                path: path.to_path_buf(),
                source,
            })?;

        let (width, height) = image.dimensions();
        log::info!(
            "Loaded image: {}x{} pixels, format: {:?}",
            width,
            height,
            image.color()
        );

        raster_from_image(image)
    }
}

/// Maps a decoded image onto a 1, 3 or 4 channel 8-bit raster.
///
/// A decoded image with no pixels is rejected as an empty raster.
pub fn raster_from_image(image: DynamicImage) -> Result<Raster> {
    let color = image.color();
    let (width, height) = image.dimensions();

    let (channels, samples) = match image {
        DynamicImage::ImageLuma8(buffer) => (1, buffer.into_raw()),
        DynamicImage::ImageRgb8(buffer) => (3, buffer.into_raw()),
        DynamicImage::ImageRgba8(buffer) => (4, buffer.into_raw()),
        other => {
            log::warn!("Converting {:?} image to 8-bit samples", color);
            match color {
                ColorType::L16 => (1, other.to_luma8().into_raw()),
                _ if color.has_alpha() => (4, other.to_rgba8().into_raw()),
                _ => (3, other.to_rgb8().into_raw()),
            }
        }
    };

    Raster::new(width, height, channels, samples)
}
