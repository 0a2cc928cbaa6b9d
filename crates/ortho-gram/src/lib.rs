//! # ortho-gram
//!
//! Classical Gram–Schmidt over the monomial basis on [0, 1], instrumented to
//! find where floating-point orthogonality breaks down.
//!
//! The orthogonal sequence starts from `g₀ = 1`. Iteration `i` projects the
//! monomial `xⁱ` against every earlier member and records two symptoms of
//! instability:
//!
//! 1. **Norm growth**: `‖gᵢ‖ > ‖gᵢ₋₁‖` once the sequence has three members.
//! 2. **Cross products**: the largest `⟨gⱼ, gᵢ⟩` (j < i) exceeds a threshold.
//!
//! The first iteration at which each symptom appears is reported as `n1` and
//! `n2`; the run halts when both hold in the same iteration.
//!
//! ## Example
//!
//! ```
//! use ortho_gram::{GramConfig, Orthogonalizer, NullReporter};
//!
//! let outcome = Orthogonalizer::new(GramConfig::default())
//!     .and_then(|o| o.run(NullReporter))
//!     .unwrap();
//! assert!(outcome.n1.is_some());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod error;
pub mod gram_schmidt;
pub mod report;

pub use config::GramConfig;
pub use error::GramError;
pub use gram_schmidt::{run, GramOutcome, Orthogonalizer, StepOutcome};
pub use report::{
    CollectedIteration, CollectingReporter, Condition, IterationRecord, LogReporter,
    NullReporter, Reporter, Summary,
};
