//! Kernel density estimation with a globally shared bandwidth.
//!
//! One Gaussian kernel is added per sample, and every kernel always smooths
//! with the *current* bandwidth derived from the whole sample set, not the
//! bandwidth that was current when its sample arrived. The bandwidth is
//! therefore stored once on the model and read by every evaluation; an insert
//! updates one field instead of touching every kernel.

use crate::samples::SampleSet;

/// Grid positions over `[0, 1]` at `step` spacing. The last point is pinned
/// to exactly 1.0; when the step does not divide the interval evenly the
/// final gap is shorter than the step.
pub(crate) fn grid_points(step: f32) -> impl Iterator<Item = f32> {
    // the small slack tolerates float error in 1/step for dividing steps
    let steps = ((1.0 / step) - 1e-4).ceil().max(1.0) as usize;
    (0..=steps).map(move |i| if i == steps { 1.0 } else { (i as f32 * step).min(1.0) })
}

/// Gaussian probability density at `x` for the given center and bandwidth.
#[must_use]
pub fn gaussian_pdf(center: f32, bandwidth: f32, x: f32) -> f32 {
    let exp = (-(x - center).powi(2) / (2.0 * bandwidth.powi(2))).exp();
    exp / (bandwidth * (2.0 * std::f32::consts::PI).sqrt())
}

/// Silverman's rule-of-thumb bandwidth selector.
///
/// `bandwidth = (4σ⁵ / 3n)^0.2 / sharpen`. The `sharpen` divisor deliberately
/// roughens the textbook rule so small sample sets do not look over-smoothed;
/// set it to 1.0 for the unmodified rule. A zero-spread set (including n = 1)
/// substitutes `sigma_floor` for σ so the kernel stays a narrow spike rather
/// than degenerating to zero width.
#[derive(Debug, Clone, Copy)]
pub struct SilvermanBandwidth {
    sigma_floor: f32,
    sharpen: f32,
}

impl Default for SilvermanBandwidth {
    fn default() -> Self {
        Self::new()
    }
}

impl SilvermanBandwidth {
    /// Create an estimator with the default policy constants.
    #[must_use]
    pub fn new() -> Self {
        Self { sigma_floor: 0.01, sharpen: 5.0 }
    }

    /// Set the σ substitute used when the sample spread is zero.
    #[must_use]
    pub fn sigma_floor(mut self, sigma_floor: f32) -> Self {
        self.sigma_floor = sigma_floor.max(f32::EPSILON);
        self
    }

    /// Set the divisor applied to the textbook rule (1.0 disables it).
    #[must_use]
    pub fn sharpen(mut self, sharpen: f32) -> Self {
        self.sharpen = sharpen.max(f32::EPSILON);
        self
    }

    /// Estimate a positive bandwidth for the current samples.
    ///
    /// Returns `None` for an empty set, which has no density to smooth.
    #[must_use]
    pub fn estimate(&self, samples: &SampleSet) -> Option<f32> {
        let sigma = samples.std_dev()?;
        let sigma = if sigma == 0.0 { self.sigma_floor } else { sigma };
        let n = samples.len() as f32;
        let silverman = (4.0 * sigma.powi(5) / (3.0 * n)).powf(0.2);
        Some(silverman / self.sharpen)
    }
}

/// One kernel of the density model, as observed from outside.
///
/// The bandwidth reported here is always the model's shared value; two
/// kernels never disagree on it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kernel {
    /// The sample value the kernel is centered on.
    pub center: f32,
    /// The current shared smoothing bandwidth.
    pub bandwidth: f32,
}

impl Kernel {
    /// Density contribution of this kernel at `x`.
    #[must_use]
    pub fn pdf(&self, x: f32) -> f32 {
        gaussian_pdf(self.center, self.bandwidth, x)
    }
}

/// A growing Gaussian mixture over the observed samples.
#[derive(Debug, Clone, Default)]
pub struct DensityModel {
    centers: Vec<f32>,
    bandwidth: f32,
}

impl DensityModel {
    /// Create an empty model.
    #[must_use]
    pub fn new() -> Self {
        Self { centers: Vec::new(), bandwidth: 0.0 }
    }

    /// Append a kernel centered at `center` and adopt the new shared
    /// bandwidth computed over the full sample set.
    ///
    /// Any density values computed before this call are stale afterward:
    /// the bandwidth change perturbs every kernel, not just the new one.
    pub fn push(&mut self, center: f32, bandwidth: f32) {
        self.centers.push(center);
        self.bandwidth = bandwidth;
    }

    /// Number of kernels (equals the number of samples).
    #[must_use]
    pub fn len(&self) -> usize {
        self.centers.len()
    }

    /// Whether the model holds no kernels.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.centers.is_empty()
    }

    /// The shared bandwidth, 0.0 while the model is empty.
    #[must_use]
    pub fn bandwidth(&self) -> f32 {
        self.bandwidth
    }

    /// Total density at `x`: the sum of every kernel's contribution.
    ///
    /// Pure and O(n); an empty model has zero density everywhere.
    #[must_use]
    pub fn density(&self, x: f32) -> f32 {
        if self.centers.is_empty() {
            return 0.0;
        }
        self.centers.iter().map(|&c| gaussian_pdf(c, self.bandwidth, x)).sum()
    }

    /// Kernel views in insertion order, each carrying the shared bandwidth.
    pub fn kernels(&self) -> impl Iterator<Item = Kernel> + '_ {
        let bandwidth = self.bandwidth;
        self.centers.iter().map(move |&center| Kernel { center, bandwidth })
    }
}
