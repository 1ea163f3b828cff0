//! The incremental distribution: sample store, density model, and the
//! layout-facing operations the rendering layer calls.

use crate::error::{Error, Result};
use crate::kde::{grid_points, DensityModel, Kernel, SilvermanBandwidth};
use crate::layout::{Band, BandEncoder, DotPlot, DotPlotLayout, Swarm, SwarmPoint};
use crate::samples::SampleSet;
use crate::scale::LinearScale;
use crate::summary::Summary;

/// A growing set of `[0, 1]` observations and every representation derived
/// from it.
///
/// [`Distribution::add_sample`] is the only mutation: it appends the sample,
/// appends one kernel, and retunes the shared bandwidth from the whole set in
/// a single `&mut self` call, so readers can never observe a half-updated
/// model. All other operations are pure reads recomputed from scratch; the
/// crate caches nothing between layout requests.
#[derive(Debug, Clone, Default)]
pub struct Distribution {
    samples: SampleSet,
    model: DensityModel,
    estimator: SilvermanBandwidth,
}

impl Distribution {
    /// Create an empty distribution with the default bandwidth policy.
    #[must_use]
    pub fn new() -> Self {
        Self::with_estimator(SilvermanBandwidth::new())
    }

    /// Create an empty distribution with a custom bandwidth policy.
    #[must_use]
    pub fn with_estimator(estimator: SilvermanBandwidth) -> Self {
        Self { samples: SampleSet::new(), model: DensityModel::new(), estimator }
    }

    /// Absorb one observation, clamping it to `[0, 1]`.
    ///
    /// Recomputes the shared bandwidth over the *entire* updated set, so
    /// every kernel — not just the new one — smooths differently afterward.
    /// Returns the value actually stored.
    pub fn add_sample(&mut self, value: f32) -> f32 {
        let stored = self.samples.push(value);
        let bandwidth = self
            .estimator
            .estimate(&self.samples)
            .unwrap_or(0.0); // unreachable: the set is non-empty after push
        self.model.push(stored, bandwidth);
        stored
    }

    /// Number of samples absorbed so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    /// Whether no samples have been absorbed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// The samples in insertion order (strip-chart order).
    #[must_use]
    pub fn samples(&self) -> &[f32] {
        self.samples.as_slice()
    }

    /// Kernel views in insertion order; all report the shared bandwidth.
    pub fn kernels(&self) -> impl Iterator<Item = Kernel> + '_ {
        self.model.kernels()
    }

    /// Density of the current estimate at `x`. Zero everywhere while empty.
    #[must_use]
    pub fn density(&self, x: f32) -> f32 {
        self.model.density(x)
    }

    /// Sample the density curve over `[0, 1]` at `grid_step` spacing.
    ///
    /// The last grid point is always exactly 1.0; when the step does not
    /// divide 1 evenly the final interval is shorter than the step.
    /// O(n·m) for n kernels and m grid points; the step bounds how fine the
    /// grid may be for large sample counts.
    ///
    /// # Errors
    ///
    /// Returns an error if `grid_step` is not in `(0, 1]`.
    pub fn density_curve(&self, grid_step: f32) -> Result<Vec<(f32, f32)>> {
        if !(grid_step > 0.0 && grid_step <= 1.0) {
            return Err(Error::InvalidGridStep { step: grid_step });
        }
        Ok(grid_points(grid_step)
            .map(|x| (x, self.model.density(x)))
            .collect())
    }

    /// Full statistical snapshot: quartiles, mean, 95% CI, histogram.
    ///
    /// An empty distribution yields [`Summary::empty`], never an error.
    #[must_use]
    pub fn summary(&self) -> Summary {
        Summary::from_samples(&self.samples)
    }

    /// Dot-plot packing of the sorted samples under the given search policy.
    ///
    /// # Errors
    ///
    /// Returns an error if the policy's radius bounds are invalid.
    pub fn dot_plot(
        &self,
        policy: &DotPlot,
        available_height_px: f32,
        scale: &LinearScale,
    ) -> Result<DotPlotLayout> {
        policy.fit(&self.samples.sorted(), available_height_px, scale)
    }

    /// Swarm packing of the samples, one point per sample in insertion order.
    ///
    /// # Errors
    ///
    /// Returns an error if the policy's mark radius is invalid.
    pub fn swarm(
        &self,
        policy: &Swarm,
        scale: &LinearScale,
        baseline_y: f32,
        extent: (f32, f32),
    ) -> Result<Vec<SwarmPoint>> {
        policy.layout(self.samples.as_slice(), scale, baseline_y, extent)
    }

    /// Banded two-tone encoding of the current density curve.
    ///
    /// # Errors
    ///
    /// Returns an error if the encoder's band count or grid step is invalid.
    pub fn bands(&self, encoder: &BandEncoder) -> Result<Vec<Band>> {
        encoder.encode(&self.model)
    }
}
