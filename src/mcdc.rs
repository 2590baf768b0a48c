//! Independence pairs for the three conditions of `(a && b) || c`
//!
//! A pair is evidence that one condition independently affects the decision:
//! two evaluated cases whose inputs differ in that condition alone and whose
//! outcomes differ. MC/DC holds for a set of cases when every condition has
//! at least one such pair.
//!
//! # Examples
//!
//! ```
//! use mcdc_decision::{CoverageReport, Driver, Reference};
//!
//! let outcomes = Driver::new(Reference).evaluate();
//! let report = CoverageReport::from_outcomes(&outcomes);
//! assert!(report.is_satisfied());
//! ```

use crate::cases::Condition;
use crate::driver::Outcome;
use std::fmt;

/// Two cases isolating the effect of one condition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndependencePair {
    pub condition: Condition,
    /// The earlier case of the pair
    pub baseline: usize,
    /// The case with `condition` negated
    pub flipped: usize,
}

impl fmt::Display for IndependencePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: Test {} vs Test {}",
            self.condition, self.baseline, self.flipped
        )
    }
}

/// Every independence pair among `outcomes`, in case order
///
/// Pairs are judged on the outcomes actually observed, so a decision that
/// does not implement the expression may lose pairs.
pub fn find_pairs(outcomes: &[Outcome]) -> Vec<IndependencePair> {
    let mut pairs = Vec::new();
    for (i, first) in outcomes.iter().enumerate() {
        for second in &outcomes[i + 1..] {
            if first.actual == second.actual {
                continue;
            }
            if let [condition] = first.case.inputs.differing(&second.case.inputs)[..] {
                pairs.push(IndependencePair {
                    condition,
                    baseline: first.case.number,
                    flipped: second.case.number,
                });
            }
        }
    }
    pairs
}

/// Per-condition MC/DC verdict for a set of outcomes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageReport {
    pairs: Vec<IndependencePair>,
}

impl CoverageReport {
    pub fn from_outcomes(outcomes: &[Outcome]) -> Self {
        CoverageReport {
            pairs: find_pairs(outcomes),
        }
    }

    /// All pairs found
    pub fn pairs(&self) -> &[IndependencePair] {
        &self.pairs
    }

    /// The first pair demonstrating `condition`, if any
    pub fn pair_for(&self, condition: Condition) -> Option<&IndependencePair> {
        self.pairs.iter().find(|pair| pair.condition == condition)
    }

    /// Conditions with no pair
    pub fn uncovered(&self) -> Vec<Condition> {
        Condition::ALL
            .into_iter()
            .filter(|&cond| self.pair_for(cond).is_none())
            .collect()
    }

    pub fn is_satisfied(&self) -> bool {
        self.uncovered().is_empty()
    }
}
