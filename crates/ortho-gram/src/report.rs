//! Progress reporting.
//!
//! The orthogonalizer hands one [`IterationRecord`] per iteration and a final
//! [`Summary`] to a [`Reporter`]. How (or whether) they are rendered is up to
//! the reporter.

use std::fmt;

use ortho_poly::Polynomial;

/// One of the two instability conditions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Condition {
    /// The newest member's norm exceeds its predecessor's.
    NormGrowth,
    /// The largest cross inner product exceeds the threshold.
    CrossProduct,
}

/// What a single iteration produced.
#[derive(Clone, Copy, Debug)]
pub struct IterationRecord<'a> {
    /// Iteration index (equal to the basis degree).
    pub iteration: usize,
    /// The monomial basis vector `xⁱ`.
    pub basis: &'a Polynomial,
    /// The orthogonal polynomial `gᵢ` appended this iteration.
    pub orthogonal: &'a Polynomial,
    /// Largest `⟨gⱼ, gᵢ⟩` over `j < i`, floored at zero.
    pub max_cross_product: f64,
    /// `‖gᵢ‖ - ‖gᵢ₋₁‖`, when condition 1 was evaluated.
    pub norm_difference: Option<f64>,
    /// Whether condition 1 holds.
    pub condition1: bool,
    /// Whether condition 2 holds.
    pub condition2: bool,
}

impl IterationRecord<'_> {
    /// Returns whether the given condition holds in this iteration.
    #[must_use]
    pub fn holds(&self, condition: Condition) -> bool {
        match condition {
            Condition::NormGrowth => self.condition1,
            Condition::CrossProduct => self.condition2,
        }
    }
}

/// Final state of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Summary {
    /// First iteration where condition 1 held.
    pub n1: Option<usize>,
    /// First iteration where condition 2 held.
    pub n2: Option<usize>,
    /// Number of iterations performed.
    pub iterations: usize,
    /// True if the run stopped because both conditions held together.
    pub halted: bool,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "n1: {}, n2: {}",
            DisplayIndex(self.n1),
            DisplayIndex(self.n2)
        )
    }
}

/// Renders an optional iteration index, `unset` when absent.
pub(crate) struct DisplayIndex(pub Option<usize>);

impl fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(index) => write!(f, "{index}"),
            None => write!(f, "unset"),
        }
    }
}

/// A sink for orthogonalization progress.
pub trait Reporter {
    /// Called once per iteration, after the new member has been appended.
    fn iteration(&mut self, record: &IterationRecord<'_>);

    /// Called once when the run ends.
    fn finish(&mut self, summary: &Summary);
}

impl<R: Reporter + ?Sized> Reporter for &mut R {
    fn iteration(&mut self, record: &IterationRecord<'_>) {
        (**self).iteration(record);
    }

    fn finish(&mut self, summary: &Summary) {
        (**self).finish(summary);
    }
}

/// Discards everything.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn iteration(&mut self, _record: &IterationRecord<'_>) {}

    fn finish(&mut self, _summary: &Summary) {}
}

/// Writes progress through the `log` facade.
///
/// Each iteration logs a headline at `info`; the rendered basis vector,
/// orthogonal polynomial and norm difference go to `debug`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LogReporter;

impl Reporter for LogReporter {
    fn iteration(&mut self, record: &IterationRecord<'_>) {
        log::info!(
            "Iteration {}: max cross product {:.5e}, norm growth: {}, cross product: {}",
            record.iteration,
            record.max_cross_product,
            record.condition1,
            record.condition2
        );
        log::debug!("f_{} = {}", record.iteration, record.basis);
        log::debug!("g_{} = {}", record.iteration, record.orthogonal);
        if let Some(difference) = record.norm_difference {
            log::debug!("Norm difference: {difference:.5e}");
        }
    }

    fn finish(&mut self, summary: &Summary) {
        log::info!("n1: {}", DisplayIndex(summary.n1));
        log::info!("n2: {}", DisplayIndex(summary.n2));
        if !summary.halted {
            log::warn!(
                "Stopped at the iteration cap ({}) before both conditions held together",
                summary.iterations
            );
        }
    }
}

/// Owned copy of an [`IterationRecord`].
#[derive(Clone, Debug, PartialEq)]
pub struct CollectedIteration {
    /// Iteration index.
    pub iteration: usize,
    /// The monomial basis vector.
    pub basis: Polynomial,
    /// The orthogonal polynomial.
    pub orthogonal: Polynomial,
    /// Largest cross inner product.
    pub max_cross_product: f64,
    /// Norm difference, when evaluated.
    pub norm_difference: Option<f64>,
    /// Condition 1.
    pub condition1: bool,
    /// Condition 2.
    pub condition2: bool,
}

impl From<&IterationRecord<'_>> for CollectedIteration {
    fn from(record: &IterationRecord<'_>) -> Self {
        Self {
            iteration: record.iteration,
            basis: record.basis.clone(),
            orthogonal: record.orthogonal.clone(),
            max_cross_product: record.max_cross_product,
            norm_difference: record.norm_difference,
            condition1: record.condition1,
            condition2: record.condition2,
        }
    }
}

/// Keeps every record for later inspection.
#[derive(Clone, Debug, Default)]
pub struct CollectingReporter {
    /// Records in iteration order.
    pub iterations: Vec<CollectedIteration>,
    /// The final summary, once the run has finished.
    pub summary: Option<Summary>,
}

impl CollectingReporter {
    /// Creates an empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replays the log and returns the first iteration where `condition` held.
    #[must_use]
    pub fn first_true(&self, condition: Condition) -> Option<usize> {
        self.iterations
            .iter()
            .find(|it| match condition {
                Condition::NormGrowth => it.condition1,
                Condition::CrossProduct => it.condition2,
            })
            .map(|it| it.iteration)
    }
}

impl Reporter for CollectingReporter {
    fn iteration(&mut self, record: &IterationRecord<'_>) {
        self.iterations.push(record.into());
    }

    fn finish(&mut self, summary: &Summary) {
        self.summary = Some(*summary);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record<'a>(basis: &'a Polynomial, g: &'a Polynomial, c1: bool, c2: bool) -> IterationRecord<'a> {
        IterationRecord {
            iteration: basis.degree().unwrap_or(0),
            basis,
            orthogonal: g,
            max_cross_product: 0.0,
            norm_difference: None,
            condition1: c1,
            condition2: c2,
        }
    }

    #[test]
    fn test_collecting_reporter_replay() {
        let f1 = Polynomial::monomial(1.0, 1);
        let f2 = Polynomial::monomial(1.0, 2);
        let f3 = Polynomial::monomial(1.0, 3);
        let g = Polynomial::one();

        let mut collector = CollectingReporter::new();
        collector.iteration(&record(&f1, &g, false, false));
        collector.iteration(&record(&f2, &g, true, false));
        collector.iteration(&record(&f3, &g, true, true));

        assert_eq!(collector.iterations.len(), 3);
        assert_eq!(collector.first_true(Condition::NormGrowth), Some(2));
        assert_eq!(collector.first_true(Condition::CrossProduct), Some(3));
        assert_eq!(collector.iterations[0].basis, f1);
    }

    #[test]
    fn test_forwarding_through_mut_ref() {
        fn finish_with<R: Reporter>(mut reporter: R, summary: &Summary) {
            reporter.finish(summary);
        }

        let mut collector = CollectingReporter::new();
        let summary = Summary {
            n1: Some(4),
            n2: None,
            iterations: 7,
            halted: false,
        };
        finish_with(&mut collector, &summary);
        assert_eq!(collector.summary.map(|s| s.iterations), Some(7));
    }

    #[test]
    fn test_summary_display() {
        let summary = Summary {
            n1: Some(10),
            n2: None,
            iterations: 150,
            halted: false,
        };
        assert_eq!(summary.to_string(), "n1: 10, n2: unset");
    }

    #[test]
    fn test_record_holds() {
        let f = Polynomial::x();
        let g = Polynomial::x();
        let r = record(&f, &g, true, false);
        assert!(r.holds(Condition::NormGrowth));
        assert!(!r.holds(Condition::CrossProduct));
    }
}
