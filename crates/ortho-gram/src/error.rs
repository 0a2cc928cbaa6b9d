//! Errors raised by the orthogonalizer.

use thiserror::Error;

/// Errors that can occur while configuring or running an orthogonalization.
#[derive(Clone, Debug, Error)]
pub enum GramError {
    /// An accepted member of the sequence cannot be projected against
    /// because its self inner product is zero.
    #[error("degenerate basis vector g_{index}: self inner product is {self_product}")]
    DegenerateBasisVector {
        /// Position of the offending member in the sequence.
        index: usize,
        /// Its computed self inner product.
        self_product: f64,
    },

    #[error("cross product threshold must be a number, got {0}")]
    InvalidThreshold(f64),

    #[error("parallel threshold must be at least 1")]
    InvalidParallelThreshold,
}
