//! Classical Gram–Schmidt on the monomial basis.
//!
//! Every projection at iteration `i` is taken from the original monomial
//! `fᵢ = xⁱ`, never from the partially reduced candidate, and the
//! corrections are accumulated into the candidate in ascending `j`. This is
//! the classical variant, which loses orthogonality faster than the modified
//! one; the iteration at which it does so is what the run measures.

use ortho_poly::Polynomial;
use rayon::prelude::*;

use crate::config::GramConfig;
use crate::error::GramError;
use crate::report::{IterationRecord, NullReporter, Reporter, Summary};

/// Minimum sequence length at which condition 1 is evaluated.
const NORM_GROWTH_MIN_LEN: usize = 3;

/// Result of a single iteration.
#[derive(Clone, Debug)]
pub struct StepOutcome {
    /// Iteration index.
    pub iteration: usize,
    /// The monomial `xⁱ` that was orthogonalized.
    pub basis: Polynomial,
    /// Largest cross inner product of the new member, floored at zero.
    pub max_cross_product: f64,
    /// `‖gᵢ‖ - ‖gᵢ₋₁‖`, when condition 1 was evaluated.
    pub norm_difference: Option<f64>,
    /// Norm growth.
    pub condition1: bool,
    /// Cross product above threshold.
    pub condition2: bool,
}

impl StepOutcome {
    /// Borrows this outcome as a reporter record.
    #[must_use]
    pub fn record<'a>(&'a self, orthogonal: &'a Polynomial) -> IterationRecord<'a> {
        IterationRecord {
            iteration: self.iteration,
            basis: &self.basis,
            orthogonal,
            max_cross_product: self.max_cross_product,
            norm_difference: self.norm_difference,
            condition1: self.condition1,
            condition2: self.condition2,
        }
    }
}

/// Result of a complete run.
#[derive(Clone, Debug)]
pub struct GramOutcome {
    /// First iteration where condition 1 held.
    pub n1: Option<usize>,
    /// First iteration where condition 2 held.
    pub n2: Option<usize>,
    /// The orthogonal sequence `g₀, g₁, …`.
    pub sequence: Vec<Polynomial>,
    /// Number of iterations performed.
    pub iterations: usize,
    /// True if both conditions held in the final iteration; false if the
    /// iteration cap ended the run.
    pub halted: bool,
}

impl GramOutcome {
    /// Condenses the outcome into a [`Summary`].
    #[must_use]
    pub fn summary(&self) -> Summary {
        Summary {
            n1: self.n1,
            n2: self.n2,
            iterations: self.iterations,
            halted: self.halted,
        }
    }
}

/// Drives the orthogonalization and tracks the instability conditions.
#[derive(Clone, Debug)]
pub struct Orthogonalizer {
    config: GramConfig,
    sequence: Vec<Polynomial>,
    max_cross_product: f64,
    n1: Option<usize>,
    n2: Option<usize>,
}

impl Orthogonalizer {
    /// Creates an orthogonalizer seeded with `g₀ = 1`.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn new(config: GramConfig) -> Result<Self, GramError> {
        config.validate()?;

        Ok(Self {
            config,
            sequence: vec![Polynomial::one()],
            max_cross_product: 0.0,
            n1: None,
            n2: None,
        })
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &GramConfig {
        &self.config
    }

    /// Returns the orthogonal sequence produced so far.
    #[must_use]
    pub fn sequence(&self) -> &[Polynomial] {
        &self.sequence
    }

    /// Returns the largest cross inner product of the newest member.
    #[must_use]
    pub fn max_cross_product(&self) -> f64 {
        self.max_cross_product
    }

    /// First iteration where condition 1 held, if any.
    #[must_use]
    pub fn n1(&self) -> Option<usize> {
        self.n1
    }

    /// First iteration where condition 2 held, if any.
    #[must_use]
    pub fn n2(&self) -> Option<usize> {
        self.n2
    }

    /// Performs the next iteration, `i = sequence().len()`.
    ///
    /// # Errors
    ///
    /// Returns [`GramError::DegenerateBasisVector`] if an earlier member has
    /// a zero self inner product.
    pub fn step(&mut self) -> Result<StepOutcome, GramError> {
        let iteration = self.sequence.len();
        let basis = Polynomial::monomial(1.0, iteration);

        let mut candidate = basis.clone();
        for (gj, c) in self.sequence.iter().zip(self.projection_coefficients(&basis)?) {
            candidate = candidate.add(&gj.scale(c));
        }
        self.sequence.push(candidate);

        self.max_cross_product = self.newest_max_cross_product();

        let norms = self.newest_norms();
        let condition1 = norms.is_some_and(|(newest, previous)| newest > previous);
        let norm_difference = norms.map(|(newest, previous)| newest - previous);
        let condition2 = self.max_cross_product > self.config.cross_product_threshold;

        if condition1 && self.n1.is_none() {
            self.n1 = Some(iteration);
        }
        if condition2 && self.n2.is_none() {
            self.n2 = Some(iteration);
        }

        Ok(StepOutcome {
            iteration,
            basis,
            max_cross_product: self.max_cross_product,
            norm_difference,
            condition1,
            condition2,
        })
    }

    /// Runs iterations until both conditions hold together or the cap is
    /// reached, reporting each one.
    ///
    /// # Errors
    ///
    /// Propagates [`GramError::DegenerateBasisVector`] from [`Self::step`].
    pub fn run<R: Reporter>(mut self, mut reporter: R) -> Result<GramOutcome, GramError> {
        log::debug!(
            "Orthogonalizing up to degree {} (cross product threshold {})",
            self.config.max_iterations,
            self.config.cross_product_threshold
        );

        self.max_cross_product = 0.0;
        let mut halted = false;

        while self.sequence.len() <= self.config.max_iterations {
            let step = self.step()?;
            reporter.iteration(&step.record(&self.sequence[step.iteration]));

            if step.condition1 && step.condition2 {
                halted = true;
                break;
            }
        }

        let iterations = self.sequence.len() - 1;
        let outcome = GramOutcome {
            n1: self.n1,
            n2: self.n2,
            sequence: self.sequence,
            iterations,
            halted,
        };
        reporter.finish(&outcome.summary());

        log::debug!(
            "Finished after {} iterations (halted: {})",
            outcome.iterations,
            outcome.halted
        );

        Ok(outcome)
    }

    /// `-⟨fᵢ, gⱼ⟩ / ⟨gⱼ, gⱼ⟩` for every accepted `gⱼ`, in sequence order.
    fn projection_coefficients(&self, basis: &Polynomial) -> Result<Vec<f64>, GramError> {
        let coefficient = |(index, gj): (usize, &Polynomial)| {
            let self_product = gj.inner_product(gj);
            if gj.is_zero() || self_product == 0.0 {
                return Err(GramError::DegenerateBasisVector {
                    index,
                    self_product,
                });
            }
            Ok(-basis.inner_product(gj) / self_product)
        };

        if self.sequence.len() >= self.config.parallel_threshold {
            self.sequence.par_iter().enumerate().map(coefficient).collect()
        } else {
            self.sequence.iter().enumerate().map(coefficient).collect()
        }
    }

    /// max(0, max over j < i of `⟨gⱼ, gᵢ⟩`) for the newest member `gᵢ`.
    fn newest_max_cross_product(&self) -> f64 {
        let Some((newest, earlier)) = self.sequence.split_last() else {
            return 0.0;
        };

        let products: Vec<f64> = if earlier.len() >= self.config.parallel_threshold {
            earlier.par_iter().map(|gj| gj.inner_product(newest)).collect()
        } else {
            earlier.iter().map(|gj| gj.inner_product(newest)).collect()
        };

        // NaN products never replace the running maximum
        products
            .into_iter()
            .fold(0.0, |max, s| if max < s { s } else { max })
    }

    /// `(‖gᵢ‖, ‖gᵢ₋₁‖)` once the sequence has enough members.
    fn newest_norms(&self) -> Option<(f64, f64)> {
        if self.sequence.len() < NORM_GROWTH_MIN_LEN {
            return None;
        }

        let [.., previous, newest] = self.sequence.as_slice() else {
            return None;
        };
        Some((newest.norm(), previous.norm()))
    }
}

/// Runs with the default configuration and no reporting.
///
/// # Errors
///
/// Returns [`GramError::DegenerateBasisVector`] if the sequence degenerates.
pub fn run() -> Result<GramOutcome, GramError> {
    Orthogonalizer::new(GramConfig::default())?.run(NullReporter)
}
