//! The decision under test and the seam the driver calls it through
//!
//! The driver only relies on the contract `decide(a, b, c) == (a && b) || c`.
//! Where the answer comes from is chosen by a [`Decision`] implementation:
//! the C symbol linked into the binary ([`Linked`]), the in-crate expression
//! ([`Reference`]), or any closure standing in for either.

use crate::sys;
use std::fmt;

/// Evaluate `(a && b) || c`
///
/// # Examples
///
/// ```
/// use mcdc_decision::decision;
///
/// assert!(decision(true, true, false));
/// assert!(!decision(false, true, false));
/// assert!(decision(false, false, true));
/// ```
#[inline]
pub fn decision(a: bool, b: bool, c: bool) -> bool {
    (a && b) || c
}

/// A three-input boolean decision
pub trait Decision {
    /// Evaluate the decision on one input triple
    fn decide(&self, a: bool, b: bool, c: bool) -> bool;
}

/// The decision implemented in Rust by [`decision`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Reference;

impl Decision for Reference {
    fn decide(&self, a: bool, b: bool, c: bool) -> bool {
        decision(a, b, c)
    }
}

/// The decision supplied by the separately compiled C module
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Linked;

impl Decision for Linked {
    fn decide(&self, a: bool, b: bool, c: bool) -> bool {
        // SAFETY: the C function is pure and takes its arguments by value.
        unsafe { sys::decision(a, b, c) }
    }
}

impl<F> Decision for F
where
    F: Fn(bool, bool, bool) -> bool,
{
    fn decide(&self, a: bool, b: bool, c: bool) -> bool {
        self(a, b, c)
    }
}

/// Which implementation of the decision to drive
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Backend {
    /// The C function resolved at link time
    #[default]
    Linked,
    /// The Rust expression in this crate
    Reference,
}

impl Backend {
    /// Short lowercase name, as accepted on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            Backend::Linked => "linked",
            Backend::Reference => "reference",
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Decision for Backend {
    fn decide(&self, a: bool, b: bool, c: bool) -> bool {
        match self {
            Backend::Linked => Linked.decide(a, b, c),
            Backend::Reference => Reference.decide(a, b, c),
        }
    }
}
