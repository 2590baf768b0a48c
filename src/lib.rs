//! # MC/DC driver for `(a && b) || c`
//!
//! This crate exercises a single three-input boolean decision,
//! `(a && b) || c`, with five input triples chosen to achieve Modified
//! Condition/Decision Coverage (MC/DC), and reports the outcome of each.
//!
//! ## The cases
//!
//! | # | a | b | c | outcome | shows                       |
//! |---|---|---|---|---------|-----------------------------|
//! | 1 | T | T | F | T       | baseline for `a` and `b`    |
//! | 2 | F | T | F | F       | `a` flips vs #1             |
//! | 3 | T | F | F | F       | `b` flips vs #1             |
//! | 4 | F | F | T | T       | baseline for `c`            |
//! | 5 | F | F | F | F       | `c` flips vs #4             |
//!
//! ## Where the decision comes from
//!
//! The driver never looks at how the decision is implemented; it calls a
//! [`Decision`]. The binary links a C implementation compiled from
//! `csrc/decision.c` ([`Linked`]), and the crate carries the same expression
//! in Rust ([`Reference`], [`decision`]). Any `Fn(bool, bool, bool) -> bool`
//! can be driven as well:
//!
//! ```
//! use mcdc_decision::Driver;
//!
//! let mut out = Vec::new();
//! let outcomes = Driver::new(|a: bool, b: bool, c: bool| (a && b) || c).run(&mut out)?;
//!
//! assert!(outcomes.iter().all(|o| o.matches_expected()));
//! assert!(String::from_utf8_lossy(&out).starts_with("Test 1: decision(true, true, false) = 1"));
//! # Ok::<(), mcdc_decision::DriverError>(())
//! ```
//!
//! ## Checking coverage
//!
//! [`CoverageReport`] rebuilds the independence pairs from the evaluated
//! cases:
//!
//! ```
//! use mcdc_decision::{Condition, CoverageReport, Driver, Linked};
//!
//! let report = CoverageReport::from_outcomes(&Driver::new(Linked).evaluate());
//! let pair = report.pair_for(Condition::C).unwrap();
//! assert_eq!((pair.baseline, pair.flipped), (4, 5));
//! ```

// Public modules
pub mod cases;
pub mod decision;
pub mod driver;
pub mod error;
pub mod mcdc;
pub mod sys;

// Re-export high-level public API
pub use cases::{Condition, Inputs, TestCase, MCDC_CASES};
pub use decision::{decision, Backend, Decision, Linked, Reference};
pub use driver::{Driver, Outcome};
pub use error::DriverError;
pub use mcdc::{find_pairs, CoverageReport, IndependencePair};

/// Configuration for a driver run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DriverConfig {
    /// Implementation of the decision to drive
    pub backend: Backend,
    /// Print backend, mismatch count and MC/DC verdict to stderr
    pub summary: bool,
    /// Print the independence pairs after the case lines
    pub show_pairs: bool,
}

impl Default for DriverConfig {
    fn default() -> Self {
        DriverConfig {
            backend: Backend::Linked,
            summary: false,
            show_pairs: false,
        }
    }
}

impl DriverConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// A driver for the configured backend
    pub fn driver(&self) -> Driver<Backend> {
        Driver::new(self.backend)
    }
}
