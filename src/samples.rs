//! Append-only sample storage.

/// An ordered, append-only collection of observations in `[0, 1]`.
///
/// Values outside the interval are clamped at insertion rather than rejected.
/// Insertion order is preserved for the lifetime of the set; it carries
/// display meaning (strip-chart order) but no statistical meaning, so
/// order-sensitive consumers take a sorted copy via [`SampleSet::sorted`].
#[derive(Debug, Clone, Default)]
pub struct SampleSet {
    values: Vec<f32>,
}

impl SampleSet {
    /// Create an empty sample set.
    #[must_use]
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Append one observation, clamping it to `[0, 1]`.
    ///
    /// Infinities clamp like any other overshoot; NaN has no order and
    /// stores as 0.0. Returns the value actually stored.
    pub fn push(&mut self, value: f32) -> f32 {
        let stored = if value.is_nan() { 0.0 } else { value.clamp(0.0, 1.0) };
        self.values.push(stored);
        stored
    }

    /// Number of samples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the set is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Samples in insertion order.
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    /// Ascending copy of the samples (the stored order is never disturbed).
    #[must_use]
    pub fn sorted(&self) -> Vec<f32> {
        let mut sorted = self.values.clone();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
        sorted
    }

    /// Arithmetic mean, or `None` when empty.
    #[must_use]
    pub fn mean(&self) -> Option<f32> {
        if self.values.is_empty() {
            return None;
        }
        Some(self.values.iter().sum::<f32>() / self.values.len() as f32)
    }

    /// Sample standard deviation (n-1 denominator), or `None` when empty.
    ///
    /// A single sample has zero spread by definition and reports 0.0.
    #[must_use]
    pub fn std_dev(&self) -> Option<f32> {
        let n = self.values.len();
        if n == 0 {
            return None;
        }
        if n == 1 {
            return Some(0.0);
        }
        let mean = self.values.iter().sum::<f32>() / n as f32;
        let variance =
            self.values.iter().map(|x| (x - mean).powi(2)).sum::<f32>() / (n - 1) as f32;
        Some(variance.sqrt())
    }
}
