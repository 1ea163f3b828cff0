//! Two-tone banded density encoding (horizon-style quantization).
//!
//! A density value is split into a discrete band level plus the fractional
//! remainder inside that level: the level picks the base color from a small
//! fixed palette and the remainder becomes a sub-band height, approximating a
//! continuous gradient with only a handful of colors.

use crate::error::{Error, Result};
use crate::kde::DensityModel;

/// One grid point of the banded encoding.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    /// Grid position in `[0, 1]`.
    pub x: f32,
    /// Quantized level in `0..bands`.
    pub level: usize,
    /// Fractional position within the level, in `[0, 1]`.
    pub remainder: f32,
}

impl Band {
    /// Split a vertical pixel extent into the remainder segment (bottom)
    /// and the base segment; the two always sum to `extent_px` exactly.
    #[must_use]
    pub fn segment_heights(&self, extent_px: f32) -> (f32, f32) {
        let remainder_px = self.remainder * extent_px;
        (remainder_px, extent_px - remainder_px)
    }
}

/// Quantizing encoder over a density curve.
#[derive(Debug, Clone, Copy)]
pub struct BandEncoder {
    bands: usize,
    grid_step: f32,
}

impl Default for BandEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl BandEncoder {
    /// Create an encoder with the default policy: 5 bands over a 0.001 grid.
    #[must_use]
    pub fn new() -> Self {
        Self { bands: 5, grid_step: 0.001 }
    }

    /// Set the number of quantization levels.
    #[must_use]
    pub fn bands(mut self, bands: usize) -> Self {
        self.bands = bands;
        self
    }

    /// Set the grid step the density curve is sampled at.
    #[must_use]
    pub fn grid_step(mut self, grid_step: f32) -> Self {
        self.grid_step = grid_step;
        self
    }

    /// Encode the model's full density curve.
    ///
    /// The grid spans `[0, 1]` with its last point pinned to 1.0 even when
    /// the step does not divide the interval evenly. Each grid value is
    /// normalized against the curve maximum, then
    /// quantized. The whole grid is recomputed on every call: a new sample
    /// retunes every kernel's bandwidth, so no previous point stays valid.
    /// An empty model (or an all-zero curve) encodes as level 0 with zero
    /// remainder everywhere.
    ///
    /// # Errors
    ///
    /// Returns an error if the band count is zero or the grid step is not
    /// in `(0, 1]`.
    pub fn encode(&self, model: &DensityModel) -> Result<Vec<Band>> {
        if self.bands == 0 {
            return Err(Error::InvalidBandCount);
        }
        if !(self.grid_step > 0.0 && self.grid_step <= 1.0) {
            return Err(Error::InvalidGridStep { step: self.grid_step });
        }

        let xs: Vec<f32> = crate::kde::grid_points(self.grid_step).collect();
        let densities: Vec<f32> = xs.iter().map(|&x| model.density(x)).collect();
        let max = densities.iter().copied().fold(0.0_f32, f32::max);

        Ok(xs
            .iter()
            .zip(&densities)
            .map(|(&x, &d)| {
                if max <= 0.0 {
                    return Band { x, level: 0, remainder: 0.0 };
                }
                let t = (d / max).clamp(0.0, 1.0);
                let scaled = t * self.bands as f32;
                let level = (scaled.floor() as usize).min(self.bands - 1);
                let remainder = (scaled - level as f32).clamp(0.0, 1.0);
                Band { x, level, remainder }
            })
            .collect())
    }
}
