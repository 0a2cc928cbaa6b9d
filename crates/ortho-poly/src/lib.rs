//! # ortho-poly
//!
//! Dense univariate polynomials over `f64` for the ortho workspace.
//!
//! This crate provides:
//! - A normalized dense representation with a distinguished zero polynomial
//! - Ring arithmetic (addition, negation, schoolbook multiplication, scaling)
//! - Formal calculus: derivative, indefinite and definite integrals
//! - The L² inner product and norm on the unit interval [0, 1]
//!
//! ## Exactness
//!
//! Inner products are computed symbolically: the product polynomial is
//! integrated term by term and the antiderivative is evaluated at the bounds.
//! No quadrature is involved, so floating-point rounding in the coefficient
//! arithmetic is the only source of error.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod calculus;
pub mod dense;

#[cfg(test)]
mod proptests;

pub use calculus::UNIT_INTERVAL;
pub use dense::Polynomial;
