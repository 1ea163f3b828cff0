//! Value-to-pixel scale for layout algorithms.
//!
//! All layout code in this crate works in pixel space but samples live in the
//! unit interval; the caller owns the mapping (it changes on every resize) and
//! passes it into each layout call rather than the crate holding it as state.

use crate::error::{Error, Result};

/// Linear mapping from a data domain to a pixel range.
#[derive(Debug, Clone, Copy)]
pub struct LinearScale {
    domain_min: f32,
    domain_max: f32,
    range_min: f32,
    range_max: f32,
}

impl LinearScale {
    /// Create a new linear scale.
    ///
    /// # Errors
    ///
    /// Returns an error if the domain has zero width.
    pub fn new(domain: (f32, f32), range: (f32, f32)) -> Result<Self> {
        if (domain.0 - domain.1).abs() < f32::EPSILON {
            return Err(Error::ScaleDomain("Domain min and max cannot be equal".to_string()));
        }

        Ok(Self {
            domain_min: domain.0,
            domain_max: domain.1,
            range_min: range.0,
            range_max: range.1,
        })
    }

    /// Create the scale every chart in the original shares: [0,1] to
    /// [0,width] pixels.
    ///
    /// # Errors
    ///
    /// Returns an error if `width` is not positive.
    pub fn unit(width: f32) -> Result<Self> {
        if width <= 0.0 {
            return Err(Error::ScaleDomain(format!("Pixel width must be positive, got {width}")));
        }
        Self::new((0.0, 1.0), (0.0, width))
    }

    /// Transform a domain value to a range value.
    #[must_use]
    pub fn scale(&self, value: f32) -> f32 {
        let t = (value - self.domain_min) / (self.domain_max - self.domain_min);
        self.range_min + t * (self.range_max - self.range_min)
    }

    /// Invert the scale (range to domain).
    #[must_use]
    pub fn invert(&self, value: f32) -> f32 {
        let t = (value - self.range_min) / (self.range_max - self.range_min);
        self.domain_min + t * (self.domain_max - self.domain_min)
    }

    /// Get the domain extent.
    #[must_use]
    pub fn domain(&self) -> (f32, f32) {
        (self.domain_min, self.domain_max)
    }

    /// Get the range extent.
    #[must_use]
    pub fn range(&self) -> (f32, f32) {
        (self.range_min, self.range_max)
    }
}
