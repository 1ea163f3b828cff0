//! Greedy dot-plot packing (Wilkinson-style binning).
//!
//! Sorted samples are swept once, left to right; a sample joins the current
//! stack unless its pixel position sits more than one mark diameter past the
//! stack's representative position, in which case it opens a new stack. The
//! mark radius itself is found by a descending linear search: the largest
//! radius whose tallest stack still fits the available vertical extent wins.

use crate::error::{Error, Result};
use crate::scale::LinearScale;

/// One stack of the dot plot: an online-aggregated cluster of neighbors.
#[derive(Debug, Clone, PartialEq)]
pub struct DotBin {
    /// Running mean of the member values (the stack's representative
    /// position in value space).
    pub mean: f32,
    /// Number of members.
    pub count: usize,
    /// Running sum of the member values.
    pub sum: f32,
}

impl DotBin {
    fn open(value: f32) -> Self {
        Self { mean: value, count: 1, sum: value }
    }

    fn merge(&mut self, value: f32) {
        self.count += 1;
        self.sum += value;
        self.mean += (value - self.mean) / self.count as f32;
    }

    /// Vertical center offsets for the stacked members, bottom to top:
    /// the k-th mark sits `(2k + 1)·radius` above the baseline.
    #[must_use]
    pub fn stack_offsets(&self, radius_px: f32) -> Vec<f32> {
        (0..self.count).map(|k| (2 * k + 1) as f32 * radius_px).collect()
    }

    /// Pixel height of the stack at the given mark radius.
    #[must_use]
    pub fn height(&self, radius_px: f32) -> f32 {
        self.count as f32 * 2.0 * radius_px
    }
}

/// Greedily cluster ascending values into non-overlapping stacks.
///
/// A new stack opens whenever a value's pixel position exceeds the current
/// stack's representative pixel position by more than `2·radius_px`. Single
/// pass, deterministic, O(n). `values` must already be sorted ascending.
#[must_use]
pub fn pack(values: &[f32], radius_px: f32, scale: &LinearScale) -> Vec<DotBin> {
    let mut bins: Vec<DotBin> = Vec::new();
    for &value in values {
        match bins.last_mut() {
            Some(bin) if scale.scale(value) - scale.scale(bin.mean) <= 2.0 * radius_px => {
                bin.merge(value);
            }
            _ => bins.push(DotBin::open(value)),
        }
    }
    bins
}

/// A packed dot plot: the accepted radius and its stacks.
#[derive(Debug, Clone, PartialEq)]
pub struct DotPlotLayout {
    /// Mark radius the search settled on, in pixels.
    pub radius_px: f32,
    /// Stacks left to right.
    pub bins: Vec<DotBin>,
}

impl DotPlotLayout {
    /// Height of the tallest stack, in pixels.
    #[must_use]
    pub fn max_height(&self) -> f32 {
        self.bins.iter().map(|b| b.height(self.radius_px)).fold(0.0, f32::max)
    }
}

/// Radius search policy for the dot plot.
#[derive(Debug, Clone, Copy)]
pub struct DotPlot {
    max_radius_px: f32,
    min_radius_px: f32,
}

impl Default for DotPlot {
    fn default() -> Self {
        Self::new()
    }
}

impl DotPlot {
    /// Create a search with the default radius bounds (15 px down to 3 px).
    #[must_use]
    pub fn new() -> Self {
        Self { max_radius_px: 15.0, min_radius_px: 3.0 }
    }

    /// Set the starting (largest) candidate radius.
    #[must_use]
    pub fn max_radius(mut self, radius_px: f32) -> Self {
        self.max_radius_px = radius_px;
        self
    }

    /// Set the floor radius at which the search gives up and accepts
    /// vertical overflow.
    #[must_use]
    pub fn min_radius(mut self, radius_px: f32) -> Self {
        self.min_radius_px = radius_px;
        self
    }

    /// Pack `values` (sorted ascending) at the largest radius that fits.
    ///
    /// Candidate radii decrease by one pixel from the maximum; the first
    /// whose tallest stack fits `available_height_px` is accepted. If none
    /// fits, the floor radius is returned with its overflowing layout.
    ///
    /// # Errors
    ///
    /// Returns an error if the radius bounds are non-positive or inverted.
    pub fn fit(
        &self,
        values: &[f32],
        available_height_px: f32,
        scale: &LinearScale,
    ) -> Result<DotPlotLayout> {
        if self.min_radius_px <= 0.0 {
            return Err(Error::InvalidRadius { radius: self.min_radius_px });
        }
        if self.max_radius_px < self.min_radius_px {
            return Err(Error::InvalidRadius { radius: self.max_radius_px });
        }

        let mut radius = self.max_radius_px;
        loop {
            let bins = pack(values, radius, scale);
            let tallest =
                bins.iter().map(|b| b.height(radius)).fold(0.0, f32::max);
            if tallest <= available_height_px || radius - 1.0 < self.min_radius_px {
                return Ok(DotPlotLayout { radius_px: radius, bins });
            }
            radius -= 1.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unit_scale() -> LinearScale {
        LinearScale::unit(100.0).expect("valid width")
    }

    #[test]
    fn test_pack_empty() {
        assert!(pack(&[], 5.0, &unit_scale()).is_empty());
    }

    #[test]
    fn test_pack_merges_neighbors() {
        // 0.50 and 0.55 are 5 px apart at width 100: inside one diameter
        let bins = pack(&[0.5, 0.55], 5.0, &unit_scale());
        assert_eq!(bins.len(), 1);
        assert_eq!(bins[0].count, 2);
        assert!((bins[0].mean - 0.525).abs() < 1e-6);
        assert!((bins[0].sum - 1.05).abs() < 1e-6);
    }

    #[test]
    fn test_pack_splits_distant() {
        // 0.1 and 0.9 are 80 px apart: far beyond one diameter
        let bins = pack(&[0.1, 0.9], 5.0, &unit_scale());
        assert_eq!(bins.len(), 2);
        assert_eq!(bins[0].count, 1);
        assert_eq!(bins[1].count, 1);
    }

    #[test]
    fn test_pack_deterministic() {
        let values = [0.1, 0.12, 0.13, 0.5, 0.52, 0.9];
        let a = pack(&values, 4.0, &unit_scale());
        let b = pack(&values, 4.0, &unit_scale());
        assert_eq!(a, b);
    }

    #[test]
    fn test_pack_monotone_in_radius() {
        let values: Vec<f32> = (0..50).map(|i| i as f32 / 50.0).collect();
        let scale = unit_scale();
        let mut previous = 0;
        for step in 0..13 {
            let radius = 15.0 - step as f32;
            let bins = pack(&values, radius, &scale);
            assert!(
                bins.len() >= previous,
                "shrinking the radius must not shrink the bin count"
            );
            previous = bins.len();
        }
    }

    #[test]
    fn test_stack_offsets() {
        let bins = pack(&[0.5, 0.5, 0.5], 5.0, &unit_scale());
        assert_eq!(bins.len(), 1);
        assert_eq!(bins[0].stack_offsets(5.0), vec![5.0, 15.0, 25.0]);
        assert!((bins[0].height(5.0) - 30.0).abs() < 1e-6);
    }

    #[test]
    fn test_fit_accepts_max_when_it_fits() {
        let layout = DotPlot::new()
            .fit(&[0.1, 0.9], 100.0, &unit_scale())
            .expect("valid bounds");
        assert!((layout.radius_px - 15.0).abs() < 1e-6);
    }

    #[test]
    fn test_fit_shrinks_until_it_fits() {
        // ten identical values form one stack of height 20·radius
        let values = [0.5; 10];
        let layout = DotPlot::new()
            .fit(&values, 100.0, &unit_scale())
            .expect("valid bounds");
        assert!((layout.radius_px - 5.0).abs() < 1e-6);
        assert!(layout.max_height() <= 100.0);
    }

    #[test]
    fn test_fit_overflows_at_floor() {
        let values = [0.5; 40];
        let layout = DotPlot::new()
            .fit(&values, 100.0, &unit_scale())
            .expect("valid bounds");
        assert!((layout.radius_px - 3.0).abs() < 1e-6);
        // overflow is accepted rather than erroring
        assert!(layout.max_height() > 100.0);
    }

    #[test]
    fn test_fit_rejects_bad_bounds() {
        assert!(DotPlot::new().min_radius(0.0).fit(&[0.5], 100.0, &unit_scale()).is_err());
        assert!(DotPlot::new()
            .max_radius(2.0)
            .min_radius(5.0)
            .fit(&[0.5], 100.0, &unit_scale())
            .is_err());
    }

    #[test]
    fn test_fit_empty_values() {
        let layout =
            DotPlot::new().fit(&[], 100.0, &unit_scale()).expect("valid bounds");
        assert!(layout.bins.is_empty());
        assert!((layout.radius_px - 15.0).abs() < 1e-6);
    }
}
