//! Dense univariate polynomials.
//!
//! Coefficients are stored in ascending degree order and kept normalized:
//! the highest stored coefficient is never zero, and the zero polynomial
//! owns no coefficients at all.

use num_traits::{One, Zero};
use std::fmt;
use std::hash::{Hash, Hasher};

/// A dense univariate polynomial with `f64` coefficients.
///
/// Equality is exact: two polynomials are equal iff their normalized
/// coefficient vectors agree bit for bit. Callers that need approximate
/// comparison must apply their own tolerance.
#[derive(Clone, Default)]
pub struct Polynomial {
    /// Coefficients in ascending degree order, without trailing zeros.
    coeffs: Vec<f64>,
}

impl Polynomial {
    /// Creates a new polynomial from coefficients.
    #[must_use]
    pub fn new(mut coeffs: Vec<f64>) -> Self {
        // Normalize: remove trailing zeros (of either sign)
        while coeffs.last().is_some_and(|&c| c == 0.0) {
            coeffs.pop();
        }

        Self { coeffs }
    }

    /// Creates the zero polynomial.
    #[must_use]
    pub fn zero() -> Self {
        Self { coeffs: Vec::new() }
    }

    /// Creates the constant polynomial 1.
    #[must_use]
    pub fn one() -> Self {
        Self { coeffs: vec![1.0] }
    }

    /// Creates a constant polynomial.
    #[must_use]
    pub fn constant(c: f64) -> Self {
        Self::new(vec![c])
    }

    /// Creates the polynomial x.
    #[must_use]
    pub fn x() -> Self {
        Self::new(vec![0.0, 1.0])
    }

    /// Creates the monomial c * x^n.
    #[must_use]
    pub fn monomial(c: f64, n: usize) -> Self {
        let mut coeffs = vec![0.0; n + 1];
        coeffs[n] = c;
        Self::new(coeffs)
    }

    /// Returns the degree, or `None` for the zero polynomial.
    #[must_use]
    pub fn degree(&self) -> Option<usize> {
        self.coeffs.len().checked_sub(1)
    }

    /// Returns true if this is the zero polynomial.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.coeffs.is_empty()
    }

    /// Returns the leading coefficient, or `None` for the zero polynomial.
    #[must_use]
    pub fn leading_coeff(&self) -> Option<f64> {
        self.coeffs.last().copied()
    }

    /// Returns the coefficient of x^i.
    #[must_use]
    pub fn coeff(&self, i: usize) -> f64 {
        self.coeffs.get(i).copied().unwrap_or(0.0)
    }

    /// Returns all coefficients.
    #[must_use]
    pub fn coeffs(&self) -> &[f64] {
        &self.coeffs
    }

    /// Evaluates the polynomial at a point.
    ///
    /// Terms are accumulated in ascending power order, carrying the running
    /// power of `x` alongside the sum. The order of summation is observable
    /// in the last bits of the result, and every inner product in the
    /// workspace goes through here.
    #[must_use]
    pub fn evaluate_at(&self, x: f64) -> f64 {
        let Some((&constant, rest)) = self.coeffs.split_first() else {
            return 0.0;
        };

        let mut value = constant;
        let mut power = x;
        for &c in rest {
            value += c * power;
            power *= x;
        }
        value
    }

    /// Negates a polynomial.
    #[must_use]
    pub fn negate(&self) -> Self {
        Self::new(self.coeffs.iter().map(|c| -c).collect())
    }

    /// Adds two polynomials.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let len = self.coeffs.len().max(other.coeffs.len());
        let mut result = Vec::with_capacity(len);

        for i in 0..len {
            result.push(self.coeff(i) + other.coeff(i));
        }

        Self::new(result)
    }

    /// Subtracts two polynomials.
    #[must_use]
    pub fn subtract(&self, other: &Self) -> Self {
        let len = self.coeffs.len().max(other.coeffs.len());
        let mut result = Vec::with_capacity(len);

        for i in 0..len {
            result.push(self.coeff(i) - other.coeff(i));
        }

        Self::new(result)
    }

    /// Multiplies two polynomials by schoolbook convolution.
    ///
    /// Coefficient k accumulates `self[i] * other[k - i]` for ascending `i`.
    #[must_use]
    pub fn multiply(&self, other: &Self) -> Self {
        if self.is_zero() || other.is_zero() {
            return Self::zero();
        }

        let n = self.coeffs.len();
        let m = other.coeffs.len();
        let mut result = vec![0.0; n + m - 1];

        for (i, a) in self.coeffs.iter().enumerate() {
            for (j, b) in other.coeffs.iter().enumerate() {
                result[i + j] += a * b;
            }
        }

        Self::new(result)
    }

    /// Multiplies by a scalar.
    #[must_use]
    pub fn scale(&self, c: f64) -> Self {
        if c == 0.0 {
            return Self::zero();
        }
        Self::new(self.coeffs.iter().map(|x| x * c).collect())
    }
}

impl PartialEq for Polynomial {
    fn eq(&self, other: &Self) -> bool {
        self.coeffs.len() == other.coeffs.len()
            && self
                .coeffs
                .iter()
                .zip(&other.coeffs)
                .all(|(a, b)| a.to_bits() == b.to_bits())
    }
}

impl Eq for Polynomial {}

impl Hash for Polynomial {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.coeffs.len().hash(state);
        for c in &self.coeffs {
            c.to_bits().hash(state);
        }
    }
}

impl fmt::Debug for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Polynomial").field(&self.coeffs).finish()
    }
}

impl fmt::Display for Polynomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "0");
        }

        let mut terms = Vec::new();
        for (i, &c) in self.coeffs.iter().enumerate() {
            if c == 0.0 {
                continue;
            }

            let term = match (i, c == 1.0) {
                (0, _) => format!("{c}"),
                (1, true) => "x".to_string(),
                (1, false) => format!("{c}*x"),
                (_, true) => format!("x^{i}"),
                (_, false) => format!("{c}*x^{i}"),
            };
            terms.push(term);
        }

        write!(f, "{}", terms.join(" + "))
    }
}

impl From<Vec<f64>> for Polynomial {
    fn from(coeffs: Vec<f64>) -> Self {
        Self::new(coeffs)
    }
}

impl From<&[f64]> for Polynomial {
    fn from(coeffs: &[f64]) -> Self {
        Self::new(coeffs.to_vec())
    }
}

impl Zero for Polynomial {
    fn zero() -> Self {
        Polynomial::zero()
    }

    fn is_zero(&self) -> bool {
        Polynomial::is_zero(self)
    }
}

impl One for Polynomial {
    fn one() -> Self {
        Polynomial::one()
    }
}

impl std::ops::Add for Polynomial {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Polynomial::add(&self, &rhs)
    }
}

impl std::ops::Sub for Polynomial {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Polynomial::subtract(&self, &rhs)
    }
}

impl std::ops::Mul for Polynomial {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self::Output {
        Polynomial::multiply(&self, &rhs)
    }
}

impl std::ops::Mul<f64> for Polynomial {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self::Output {
        Polynomial::scale(&self, rhs)
    }
}

impl std::ops::Neg for Polynomial {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Polynomial::negate(&self)
    }
}
