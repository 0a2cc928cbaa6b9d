//! # ortho
//!
//! Locates where classical Gram–Schmidt on the monomial basis of L²[0, 1]
//! stops producing orthogonal polynomials in double precision.
//!
//! ## Quick Start
//!
//! ```
//! use ortho::prelude::*;
//!
//! let outcome = Orthogonalizer::new(GramConfig::default())
//!     .and_then(|o| o.run(NullReporter))
//!     .unwrap();
//!
//! // g₁ = x - 1/2
//! assert_eq!(outcome.sequence[1], Polynomial::new(vec![-0.5, 1.0]));
//! println!("{}", outcome.summary());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use ortho_gram as gram;
pub use ortho_poly as poly;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use ortho_gram::{
        CollectingReporter, Condition, GramConfig, GramError, GramOutcome, LogReporter,
        NullReporter, Orthogonalizer, Reporter,
    };
    pub use ortho_poly::Polynomial;
}
