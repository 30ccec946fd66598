// imgedit/src/processors/saver.rs
use crate::core::{EditorError, Raster, Result};
use image::{DynamicImage, GrayImage, ImageFormat, RgbImage, RgbaImage};
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct Saver;

impl Saver {
    pub fn new() -> Self {
        Self
    }

    /// Encodes `raster` to `path`, picking the format from the extension.
    pub fn save(&self, raster: &Raster, path: &Path) -> Result<()> {
        let invalid_output = |source| EditorError::InvalidOutputFile {
            path: path.to_path_buf(),
            source,
        };

        let format = ImageFormat::from_path(path).map_err(invalid_output)?;

        log::debug!(
            "Saving {}x{}x{} raster to {} as {:?}",
            raster.width(),
            raster.height(),
            raster.channels(),
            path.display(),
            format
        );

        image_from_raster(raster)?
            .save_with_format(path, format)
            .map_err(invalid_output)?;

        self.log_save_result(path);
        Ok(())
    }

    fn log_save_result(&self, path: &Path) {
        match std::fs::metadata(path) {
            Ok(metadata) => log::info!("Saved image: {} ({} bytes)", path.display(), metadata.len()),
            Err(e) => log::warn!("Saved image but could not stat {}: {}", path.display(), e),
        }
    }
}

/// Wraps the raster samples in the matching `image` buffer type.
pub fn image_from_raster(raster: &Raster) -> Result<DynamicImage> {
    let (width, height) = (raster.width(), raster.height());
    let samples = raster.samples().to_vec();
    let actual = samples.len();

    let image = match raster.channels() {
        1 => GrayImage::from_raw(width, height, samples).map(DynamicImage::ImageLuma8),
        3 => RgbImage::from_raw(width, height, samples).map(DynamicImage::ImageRgb8),
        4 => RgbaImage::from_raw(width, height, samples).map(DynamicImage::ImageRgba8),
        other => return Err(EditorError::UnsupportedChannels(other)),
    };

    image.ok_or(EditorError::SampleCountMismatch {
        expected: raster.pixel_count() * raster.channels() as usize,
        actual,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processors::loader::raster_from_image;

    #[test]
    fn test_image_from_raster_layouts() {
        for channels in [1u8, 3, 4] {
            let raster = Raster::filled(3, 2, channels, 77).unwrap();
            let image = image_from_raster(&raster).unwrap();

            assert_eq!(image.color().channel_count(), channels);
            assert_eq!(raster_from_image(image).unwrap(), raster);
        }
    }

    #[test]
    fn test_two_channel_raster_is_not_encoded() {
        let raster = Raster::from_parts(1, 1, 2, vec![0, 0]);

        let err = image_from_raster(&raster).unwrap_err();
        assert!(matches!(err, EditorError::UnsupportedChannels(2)));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        assert!(Saver::new().save(&raster, &path).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn test_unknown_extension_is_invalid_output() {
        let dir = tempfile::tempdir().unwrap();
        let raster = Raster::filled(1, 1, 1, 0).unwrap();

        let err = Saver::new().save(&raster, &dir.path().join("result")).unwrap_err();
        assert!(matches!(err, EditorError::InvalidOutputFile { .. }));
        assert_eq!(err.to_string(), "Invalid output file name");
    }

    #[test]
    fn test_missing_directory_is_invalid_output() {
        let dir = tempfile::tempdir().unwrap();
        let raster = Raster::filled(1, 1, 3, 0).unwrap();
        let path = dir.path().join("missing").join("out.png");

        let err = Saver::new().save(&raster, &path).unwrap_err();
        assert!(matches!(err, EditorError::InvalidOutputFile { .. }));
        assert!(!path.exists());
    }

    #[test]
    fn test_png_written() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.png");
        let raster = Raster::new(2, 1, 1, vec![3, 250]).unwrap();

        Saver::new().save(&raster, &path).unwrap();

        let decoded = image::open(&path).unwrap();
        assert_eq!(raster_from_image(decoded).unwrap(), raster);
    }
}
