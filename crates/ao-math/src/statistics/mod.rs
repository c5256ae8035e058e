//! Basic statistics accumulator.

use ao_core::Real;

/// Incremental statistics accumulator.
///
/// Accumulates samples and computes mean, variance, standard deviation,
/// the standard error of the mean, and count.
#[derive(Debug, Clone)]
pub struct Statistics {
    count: usize,
    sum: Real,
    sum_sq: Real,
}

impl Default for Statistics {
    fn default() -> Self {
        Self::new()
    }
}

impl Statistics {
    /// Create a new empty accumulator.
    pub fn new() -> Self {
        Self {
            count: 0,
            sum: 0.0,
            sum_sq: 0.0,
        }
    }

    /// Add a single sample.
    pub fn add(&mut self, x: Real) {
        self.count += 1;
        self.sum += x;
        self.sum_sq += x * x;
    }

    /// Number of samples.
    pub fn samples(&self) -> usize {
        self.count
    }

    /// Sample mean.  Returns `None` if no samples have been added.
    pub fn mean(&self) -> Option<Real> {
        if self.count == 0 {
            None
        } else {
            Some(self.sum / self.count as Real)
        }
    }

    /// Unbiased (Bessel-corrected) variance.  Returns `None` for fewer than
    /// 2 samples.
    pub fn variance(&self) -> Option<Real> {
        if self.count < 2 {
            return None;
        }
        let n = self.count as Real;
        let m = self.sum / n;
        let s2 = (self.sum_sq / n - m * m).max(0.0);
        Some(s2 * n / (n - 1.0))
    }

    /// Standard deviation.  Returns `None` for fewer than 2 samples.
    pub fn std_dev(&self) -> Option<Real> {
        self.variance().map(|v| v.sqrt())
    }

    /// Standard error of the mean, `σ / √n`.
    pub fn error_estimate(&self) -> Option<Real> {
        self.std_dev().map(|s| s / (self.count as Real).sqrt())
    }
}

impl Extend<Real> for Statistics {
    fn extend<I: IntoIterator<Item = Real>>(&mut self, iter: I) {
        for x in iter {
            self.add(x);
        }
    }
}
