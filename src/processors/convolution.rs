// imgedit/src/processors/convolution.rs
//! Neighbourhood operators built on a single-channel kernel convolution.
//!
//! ## Algorithm
//! 1. The kernel is flipped on both axes (true convolution).
//! 2. The channel is copied into a scratch plane zero-padded by
//!    `size / 2` samples on every side.
//! 3. Each output sample is the sum of products between the kernel and the
//!    padded neighbourhood centred on it.
//! 4. The sum is clamped to `[0, 255]` before it is stored.
//!
//! Output rows are computed in parallel from the immutable scratch plane, so
//! the result is identical to a sequential pass.

use crate::core::Raster;
use crate::utils::clamp_to_u8;
use rayon::prelude::*;

/// Square, odd-sized integer kernel stored row-major.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Kernel {
    size: usize,
    weights: Vec<i32>,
}

impl Kernel {
    /// `None` unless `size` is odd and `weights` holds `size * size` values.
    pub fn new(size: usize, weights: Vec<i32>) -> Option<Self> {
        if size % 2 == 0 || weights.len() != size * size {
            return None;
        }
        Some(Self { size, weights })
    }

    /// ```text
    ///  0 -1  0
    /// -1  5 -1
    ///  0 -1  0
    /// ```
    pub fn sharpen() -> Self {
        Self {
            size: 3,
            weights: vec![0, -1, 0, -1, 5, -1, 0, -1, 0],
        }
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn weights(&self) -> &[i32] {
        &self.weights
    }

    /// Padding needed on each side of a plane.
    pub fn radius(&self) -> usize {
        self.size / 2
    }

    /// Kernel mirrored horizontally and vertically.
    pub fn flipped(&self) -> Self {
        Self {
            size: self.size,
            weights: self.weights.iter().rev().copied().collect(),
        }
    }
}

/// Sharpens every colour channel; alpha is copied through untouched.
pub fn sharpen(raster: &Raster) -> Raster {
    apply_kernel(raster, &Kernel::sharpen())
}

/// Convolves each colour channel of `raster` with `kernel`.
pub fn apply_kernel(raster: &Raster, kernel: &Kernel) -> Raster {
    let mut out = raster.samples().to_vec();
    if raster.pixel_count() == 0 {
        return Raster::from_parts(raster.width(), raster.height(), raster.channels(), out);
    }

    let mut plane = PaddedPlane::new(raster.width() as usize, raster.height() as usize, kernel.radius());
    let flipped = kernel.flipped();

    for channel in 0..raster.color_channels() {
        plane.load(raster, channel);
        plane.convolve_into(&flipped, &mut out, raster.channels() as usize, channel);
    }

    Raster::from_parts(raster.width(), raster.height(), raster.channels(), out)
}

/// Zero-bordered scratch copy of one channel, reused across channels.
struct PaddedPlane {
    width: usize,
    height: usize,
    radius: usize,
    samples: Vec<i32>,
}

impl PaddedPlane {
    fn new(width: usize, height: usize, radius: usize) -> Self {
        let padded_width = width + 2 * radius;
        let padded_height = height + 2 * radius;
        Self {
            width,
            height,
            radius,
            samples: vec![0; padded_width * padded_height],
        }
    }

    fn padded_width(&self) -> usize {
        self.width + 2 * self.radius
    }

    /// Overwrites the interior with `channel`; the border stays zero.
    fn load(&mut self, raster: &Raster, channel: usize) {
        let channels = raster.channels() as usize;
        let padded_width = self.padded_width();

        for (row, src_row) in raster.samples().chunks_exact(raster.stride()).enumerate() {
            let start = (row + self.radius) * padded_width + self.radius;
            let dst_row = &mut self.samples[start..start + self.width];
            for (dst, pixel) in dst_row.iter_mut().zip(src_row.chunks_exact(channels)) {
                *dst = i32::from(pixel[channel]);
            }
        }
    }

    /// Writes the clamped convolution of the loaded channel into the
    /// interleaved `out` buffer at `channel`.
    fn convolve_into(&self, kernel: &Kernel, out: &mut [u8], channels: usize, channel: usize) {
        let padded_width = self.padded_width();
        let size = kernel.size();
        let weights = kernel.weights();
        let samples = &self.samples;

        out.par_chunks_exact_mut(self.width * channels)
            .enumerate()
            .for_each(|(row, out_row)| {
                for col in 0..self.width {
                    let mut sum = 0i32;
                    for ky in 0..size {
                        let base = (row + ky) * padded_width + col;
                        let window = &samples[base..base + size];
                        let taps = &weights[ky * size..(ky + 1) * size];
                        sum += window.iter().zip(taps).map(|(s, w)| s * w).sum::<i32>();
                    }
                    out_row[col * channels + channel] = clamp_to_u8(sum);
                }
            });

        debug_assert_eq!(out.len(), self.width * self.height * channels);
    }
}
