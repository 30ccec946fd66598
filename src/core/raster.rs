// imgedit/src/core/raster.rs
//! In-memory bitmap handed from operator to operator.

use super::{EditorError, Result};

/// Dense 8-bit bitmap, row-major, origin at the top-left corner.
///
/// Samples are laid out as `[row][col][channel]`, so the buffer always holds
/// exactly `width * height * channels` bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Raster {
    width: u32,
    height: u32,
    channels: u8,
    samples: Vec<u8>,
}

impl Raster {
    /// Builds a raster, checking for positive dimensions, the channel count
    /// (1, 3 or 4) and the buffer length.
    pub fn new(width: u32, height: u32, channels: u8, samples: Vec<u8>) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(EditorError::EmptyRaster { width, height });
        }

        if !matches!(channels, 1 | 3 | 4) {
            return Err(EditorError::UnsupportedChannels(channels));
        }

        let expected = width as usize * height as usize * channels as usize;
        if samples.len() != expected {
            return Err(EditorError::SampleCountMismatch {
                expected,
                actual: samples.len(),
            });
        }

        Ok(Self {
            width,
            height,
            channels,
            samples,
        })
    }

    /// Raster where every sample of every pixel is `value`.
    pub fn filled(width: u32, height: u32, channels: u8, value: u8) -> Result<Self> {
        let len = width as usize * height as usize * channels as usize;
        Self::new(width, height, channels, vec![value; len])
    }

    /// Internal constructor for operators that already produce a buffer of
    /// the right shape.
    pub(crate) fn from_parts(width: u32, height: u32, channels: u8, samples: Vec<u8>) -> Self {
        debug_assert_eq!(
            samples.len(),
            width as usize * height as usize * channels as usize,
            "Sample buffer size mismatch"
        );
        Self {
            width,
            height,
            channels,
            samples,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn channels(&self) -> u8 {
        self.channels
    }

    pub fn samples(&self) -> &[u8] {
        &self.samples
    }

    pub fn into_samples(self) -> Vec<u8> {
        self.samples
    }

    /// Whether the last channel is alpha (RGBA layout).
    pub fn has_alpha(&self) -> bool {
        self.channels == 4
    }

    /// Number of colour channels, i.e. channels excluding alpha.
    pub fn color_channels(&self) -> usize {
        if self.has_alpha() {
            3
        } else {
            self.channels as usize
        }
    }

    /// Bytes per row.
    pub fn stride(&self) -> usize {
        self.width as usize * self.channels as usize
    }

    pub fn pixel_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    #[inline]
    pub fn index(&self, row: u32, col: u32, channel: u8) -> usize {
        row as usize * self.stride() + col as usize * self.channels as usize + channel as usize
    }

    /// Sample at `(row, col, channel)`, `None` when out of bounds.
    pub fn get(&self, row: u32, col: u32, channel: u8) -> Option<u8> {
        if row >= self.height || col >= self.width || channel >= self.channels {
            return None;
        }
        Some(self.samples[self.index(row, col, channel)])
    }

    /// All channels of one pixel.
    pub fn pixel(&self, row: u32, col: u32) -> &[u8] {
        let start = self.index(row, col, 0);
        &self.samples[start..start + self.channels as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_raster_creation() {
        let raster = Raster::new(4, 2, 3, vec![0; 24]).unwrap();

        assert_eq!(raster.width(), 4);
        assert_eq!(raster.height(), 2);
        assert_eq!(raster.channels(), 3);
        assert_eq!(raster.stride(), 12);
        assert_eq!(raster.pixel_count(), 8);
        assert!(!raster.has_alpha());
    }

    #[test]
    fn test_raster_rejects_bad_length() {
        let err = Raster::new(2, 2, 1, vec![0; 3]).unwrap_err();
        assert!(matches!(
            err,
            EditorError::SampleCountMismatch {
                expected: 4,
                actual: 3
            }
        ));
    }

    #[test]
    fn test_raster_rejects_zero_dimensions() {
        let err = Raster::new(0, 5, 3, vec![]).unwrap_err();
        assert!(matches!(err, EditorError::EmptyRaster { width: 0, height: 5 }));

        let err = Raster::filled(4, 0, 1, 9).unwrap_err();
        assert!(matches!(err, EditorError::EmptyRaster { width: 4, height: 0 }));
    }

    #[test]
    fn test_raster_rejects_two_channels() {
        let err = Raster::new(1, 1, 2, vec![0; 2]).unwrap_err();
        assert!(matches!(err, EditorError::UnsupportedChannels(2)));
    }

    #[test]
    fn test_indexing_is_row_major() {
        // 2x2 RGBA, each sample encodes its own position
        let samples: Vec<u8> = (0..16).collect();
        let raster = Raster::new(2, 2, 4, samples).unwrap();

        assert_eq!(raster.get(0, 0, 0), Some(0));
        assert_eq!(raster.get(0, 1, 0), Some(4));
        assert_eq!(raster.get(1, 0, 3), Some(11));
        assert_eq!(raster.pixel(1, 1), &[12, 13, 14, 15]);
        assert_eq!(raster.get(2, 0, 0), None);
        assert_eq!(raster.get(0, 0, 4), None);
    }

    #[test]
    fn test_color_channels_excludes_alpha() {
        assert_eq!(Raster::filled(1, 1, 1, 0).unwrap().color_channels(), 1);
        assert_eq!(Raster::filled(1, 1, 3, 0).unwrap().color_channels(), 3);
        assert_eq!(Raster::filled(1, 1, 4, 0).unwrap().color_channels(), 3);
    }
}
