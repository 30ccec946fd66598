// imgedit/src/processors/pointwise.rs
//! Per-pixel and whole-buffer operators.
//!
//! Each function borrows the current raster and returns a new one. The
//! colour formulas run over every channel, alpha included, so inverting an
//! RGBA image also inverts its transparency and brightness changes move
//! alpha by the same offset.

use crate::core::Raster;
use crate::utils::{percent_of_full_scale, truncate_to_u8};

/// Luma weights for R, G and B.
const LUMA_WEIGHTS: [f64; 3] = [0.299, 0.587, 0.114];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrightnessMode {
    Lighten,
    Darken,
}

/// Rotates 90° clockwise: output `(row, col)` is input `(height-1-col, row)`.
pub fn rotate_right(raster: &Raster) -> Raster {
    let (width, height) = (raster.width(), raster.height());
    let channels = raster.channels() as usize;
    let src = raster.samples();
    let mut out = Vec::with_capacity(src.len());

    // Output has `width` rows of `height` pixels
    for row in 0..width {
        for col in 0..height {
            let start = raster.index(height - 1 - col, row, 0);
            out.extend_from_slice(&src[start..start + channels]);
        }
    }

    Raster::from_parts(height, width, raster.channels(), out)
}

/// Horizontal flip: output `(row, col)` is input `(row, width-1-col)`.
pub fn mirror(raster: &Raster) -> Raster {
    let channels = raster.channels() as usize;
    let mut out = Vec::with_capacity(raster.samples().len());

    if raster.stride() > 0 {
        for row in raster.samples().chunks_exact(raster.stride()) {
            for pixel in row.chunks_exact(channels).rev() {
                out.extend_from_slice(pixel);
            }
        }
    }

    Raster::from_parts(raster.width(), raster.height(), raster.channels(), out)
}

/// `255 - v` on every sample, alpha included.
pub fn inverse(raster: &Raster) -> Raster {
    let out = raster.samples().iter().map(|&v| 255 - v).collect();
    Raster::from_parts(raster.width(), raster.height(), raster.channels(), out)
}

/// Single-channel luma image.
///
/// RGB uses `0.299 R + 0.587 G + 0.114 B`. For RGBA the alpha sample is
/// added unweighted on top of that sum. The result is truncated and
/// saturated to 8 bits. A single-channel input is returned unchanged.
pub fn grayscale(raster: &Raster) -> Raster {
    let channels = raster.channels() as usize;
    if channels == 1 {
        return raster.clone();
    }

    let out = raster
        .samples()
        .chunks_exact(channels)
        .map(|pixel| {
            let mut luma = f64::from(pixel[0]) * LUMA_WEIGHTS[0]
                + f64::from(pixel[1]) * LUMA_WEIGHTS[1]
                + f64::from(pixel[2]) * LUMA_WEIGHTS[2];
            if channels == 4 {
                luma += f64::from(pixel[3]);
            }
            truncate_to_u8(luma)
        })
        .collect();

    Raster::from_parts(raster.width(), raster.height(), 1, out)
}

/// Shifts every sample by `255 * percent / 100`, clamped to `[0, 255]`.
///
/// `percent` is expected in `0..=100`; range checks happen before the
/// pipeline runs.
pub fn brightness(raster: &Raster, mode: BrightnessMode, percent: i32) -> Raster {
    let table = brightness_table(mode, percent);
    let out = raster.samples().iter().map(|&v| table[v as usize]).collect();
    Raster::from_parts(raster.width(), raster.height(), raster.channels(), out)
}

/// Maps every possible sample value through the brightness formula.
pub fn brightness_table(mode: BrightnessMode, percent: i32) -> [u8; 256] {
    let delta = match mode {
        BrightnessMode::Lighten => percent_of_full_scale(percent),
        BrightnessMode::Darken => -percent_of_full_scale(percent),
    };

    let mut table = [0u8; 256];
    for (v, slot) in table.iter_mut().enumerate() {
        let v = v as f64;
        *slot = match mode {
            BrightnessMode::Lighten if 255.0 - v < delta => 255,
            BrightnessMode::Darken if v + delta < 0.0 => 0,
            _ => truncate_to_u8(v + delta),
        };
    }
    table
}
