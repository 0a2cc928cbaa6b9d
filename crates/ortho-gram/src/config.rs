//! Run configuration.

use crate::error::GramError;

/// Default iteration cap.
pub const DEFAULT_MAX_ITERATIONS: usize = 150;

/// Default bound on the largest cross inner product.
pub const DEFAULT_CROSS_PRODUCT_THRESHOLD: f64 = 1.0;

/// Default sequence length from which inner products are computed in parallel.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 64;

/// Configuration for an orthogonalization run.
#[derive(Clone, Debug, PartialEq)]
pub struct GramConfig {
    /// Last iteration index that will be attempted (inclusive).
    pub max_iterations: usize,
    /// Condition 2 holds once the largest cross inner product exceeds this.
    pub cross_product_threshold: f64,
    /// Minimum sequence length to enable parallel inner products.
    pub parallel_threshold: usize,
}

impl Default for GramConfig {
    fn default() -> Self {
        Self {
            max_iterations: DEFAULT_MAX_ITERATIONS,
            cross_product_threshold: DEFAULT_CROSS_PRODUCT_THRESHOLD,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl GramConfig {
    /// Sets the iteration cap.
    #[must_use]
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Sets the cross product threshold.
    #[must_use]
    pub fn with_cross_product_threshold(mut self, threshold: f64) -> Self {
        self.cross_product_threshold = threshold;
        self
    }

    /// Sets the parallel threshold.
    #[must_use]
    pub fn with_parallel_threshold(mut self, parallel_threshold: usize) -> Self {
        self.parallel_threshold = parallel_threshold;
        self
    }

    /// Checks the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the threshold is NaN or the parallel threshold is 0.
    pub fn validate(&self) -> Result<(), GramError> {
        if self.cross_product_threshold.is_nan() {
            return Err(GramError::InvalidThreshold(self.cross_product_threshold));
        }
        if self.parallel_threshold == 0 {
            return Err(GramError::InvalidParallelThreshold);
        }
        Ok(())
    }
}
