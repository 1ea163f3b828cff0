//! Summary statistics: quartiles, mean, confidence interval, histogram.
//!
//! Everything here is a pure function of the sample set, recomputed whole on
//! demand. Nothing is cached between calls; snapshots are cheap and ephemeral.

use crate::samples::SampleSet;

/// z value for a 95% two-sided normal confidence interval.
const Z_95: f32 = 1.96;

/// The three quartile boundaries of a sample set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quartiles {
    /// First quartile (25th percentile).
    pub q1: f32,
    /// Median (50th percentile).
    pub median: f32,
    /// Third quartile (75th percentile).
    pub q3: f32,
}

impl Quartiles {
    /// Interquartile range (Q3 - Q1).
    #[must_use]
    pub fn iqr(&self) -> f32 {
        self.q3 - self.q1
    }

    /// Whisker fences at `median ± 1.5·IQR`, for box-plot callers.
    #[must_use]
    pub fn fences(&self) -> (f32, f32) {
        let reach = 1.5 * self.iqr();
        (self.median - reach, self.median + reach)
    }
}

/// Equal-width histogram over `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct HistogramBins {
    /// Number of bins, from Sturges' rule.
    pub bin_count: usize,
    /// Width of each bin (`1 / bin_count`).
    pub step: f32,
    /// Per-bin sample counts, left to right.
    pub counts: Vec<usize>,
}

/// A full statistical snapshot of the current sample set.
///
/// An empty set yields a defined neutral snapshot (see [`Summary::empty`])
/// rather than an error, so callers may request layouts before data exists.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Number of samples the snapshot was computed from.
    pub n: usize,
    /// Arithmetic mean; `None` when empty.
    pub mean: Option<f32>,
    /// Quartile boundaries; `None` when empty.
    pub quartiles: Option<Quartiles>,
    /// 95% z confidence interval for the mean; `None` when empty.
    /// Zero-width at n = 1.
    pub ci: Option<(f32, f32)>,
    /// Histogram binning of the samples.
    pub histogram: HistogramBins,
}

impl Summary {
    /// The neutral snapshot for an empty sample set.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            n: 0,
            mean: None,
            quartiles: None,
            ci: None,
            histogram: HistogramBins { bin_count: 1, step: 1.0, counts: vec![0] },
        }
    }

    /// Compute a snapshot from the current samples.
    #[must_use]
    pub fn from_samples(samples: &SampleSet) -> Self {
        let Some(mean) = samples.mean() else {
            return Self::empty();
        };
        let n = samples.len();
        let sorted = samples.sorted();

        let quartiles = Quartiles {
            q1: percentile(&sorted, 25.0),
            median: percentile(&sorted, 50.0),
            q3: percentile(&sorted, 75.0),
        };

        // n = 1 has zero spread, so the interval degenerates to a point.
        let sigma = samples.std_dev().unwrap_or(0.0);
        let reach = Z_95 * sigma / (n as f32).sqrt();
        let ci = (mean - reach, mean + reach);

        Self {
            n,
            mean: Some(mean),
            quartiles: Some(quartiles),
            ci: Some(ci),
            histogram: histogram_bins(samples),
        }
    }
}

/// Sturges' rule: `ceil(log2 n) + 1`, at least 1.
#[must_use]
pub fn bin_estimate(n: usize) -> usize {
    if n == 0 {
        return 1;
    }
    ((n as f32).log2().ceil() as usize + 1).max(1)
}

/// Partition `[0, 1]` into Sturges-many equal bins and count the samples.
///
/// Samples at exactly 1.0 are counted in the last bin.
#[must_use]
pub fn histogram_bins(samples: &SampleSet) -> HistogramBins {
    let bin_count = bin_estimate(samples.len());
    let step = 1.0 / bin_count as f32;

    let mut counts = vec![0_usize; bin_count];
    for &value in samples.as_slice() {
        let bin = ((value / step).floor() as usize).min(bin_count - 1);
        counts[bin] += 1;
    }

    HistogramBins { bin_count, step, counts }
}

/// Percentile by linear interpolation at `k = p(n-1)` over sorted data.
fn percentile(sorted: &[f32], p: f32) -> f32 {
    if sorted.is_empty() {
        return 0.0;
    }
    if sorted.len() == 1 {
        return sorted[0];
    }

    let k = (p / 100.0) * (sorted.len() - 1) as f32;
    let f = k.floor() as usize;
    let c = k.ceil() as usize;

    if f == c || c >= sorted.len() {
        sorted[f.min(sorted.len() - 1)]
    } else {
        let d = k - f as f32;
        sorted[f] * (1.0 - d) + sorted[c] * d
    }
}
