//! Formal calculus on dense polynomials.
//!
//! Derivatives and integrals act on the coefficient vector directly, so a
//! definite integral is exact up to the rounding of each coefficient
//! division and of the final evaluation.

use crate::dense::Polynomial;

/// Bounds of the interval the inner product integrates over.
pub const UNIT_INTERVAL: (f64, f64) = (0.0, 1.0);

#[allow(clippy::cast_precision_loss)]
impl Polynomial {
    /// Computes the formal derivative.
    ///
    /// The derivative of a constant or of the zero polynomial is zero.
    #[must_use]
    pub fn derive(&self) -> Self {
        let coeffs = self.coeffs();
        if coeffs.len() <= 1 {
            return Self::zero();
        }

        let mut result = Vec::with_capacity(coeffs.len() - 1);
        for (i, c) in coeffs.iter().skip(1).enumerate() {
            result.push(c * (i + 1) as f64);
        }

        Self::new(result)
    }

    /// Computes the indefinite integral with zero constant term.
    #[must_use]
    pub fn integrate(&self) -> Self {
        if self.is_zero() {
            return Self::zero();
        }

        let coeffs = self.coeffs();
        let mut result = Vec::with_capacity(coeffs.len() + 1);
        result.push(0.0);
        for (i, c) in coeffs.iter().enumerate() {
            result.push(c / (i + 1) as f64);
        }

        Self::new(result)
    }

    /// Computes the definite integral over `[from, to]`.
    ///
    /// The antiderivative from [`Polynomial::integrate`] is evaluated at both
    /// bounds; the zero polynomial integrates to `0.0` over any bounds.
    #[must_use]
    pub fn integrate_between(&self, from: f64, to: f64) -> f64 {
        if self.is_zero() {
            return 0.0;
        }

        let antiderivative = self.integrate();
        antiderivative.evaluate_at(to) - antiderivative.evaluate_at(from)
    }

    /// L² inner product on [0, 1]: the integral of `self * other`.
    ///
    /// The product is formed as `self.multiply(other)`; operand order fixes
    /// the summation order of each product coefficient.
    #[must_use]
    pub fn inner_product(&self, other: &Self) -> f64 {
        let (from, to) = UNIT_INTERVAL;
        self.multiply(other).integrate_between(from, to)
    }

    /// L² norm on [0, 1].
    ///
    /// Rounding can drive the self inner product of a nearly-zero polynomial
    /// negative, in which case the result is NaN.
    #[must_use]
    pub fn norm(&self) -> f64 {
        self.inner_product(self).sqrt()
    }
}
