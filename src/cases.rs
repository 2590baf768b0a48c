//! Input triples and the fixed MC/DC case table for `(a && b) || c`
//!
//! The five cases in [`MCDC_CASES`] are the whole behaviour of the driver.
//! Case 1 is the shared baseline for the `a` and `b` independence pairs
//! (cases 2 and 3 each flip one of them), and case 4 is the baseline for `c`
//! (case 5 flips it with `a` and `b` both low, so the conjunction cannot mask
//! it).

use std::fmt;

/// One atomic condition of the decision
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Condition {
    /// First operand of the conjunction
    A,
    /// Second operand of the conjunction
    B,
    /// Right-hand side of the disjunction
    C,
}

impl Condition {
    /// All conditions, in operand order
    pub const ALL: [Condition; 3] = [Condition::A, Condition::B, Condition::C];

    /// Variable name as written in the decision
    pub fn name(&self) -> &'static str {
        match self {
            Condition::A => "a",
            Condition::B => "b",
            Condition::C => "c",
        }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// One assignment of the three conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Inputs {
    pub a: bool,
    pub b: bool,
    pub c: bool,
}

impl Inputs {
    pub const fn new(a: bool, b: bool, c: bool) -> Self {
        Inputs { a, b, c }
    }

    /// Value of a single condition
    pub fn get(&self, condition: Condition) -> bool {
        match condition {
            Condition::A => self.a,
            Condition::B => self.b,
            Condition::C => self.c,
        }
    }

    /// Copy with one condition negated
    pub fn flip(&self, condition: Condition) -> Self {
        let mut flipped = *self;
        match condition {
            Condition::A => flipped.a = !flipped.a,
            Condition::B => flipped.b = !flipped.b,
            Condition::C => flipped.c = !flipped.c,
        }
        flipped
    }

    /// Conditions whose values differ between `self` and `other`
    pub fn differing(&self, other: &Inputs) -> Vec<Condition> {
        Condition::ALL
            .into_iter()
            .filter(|&cond| self.get(cond) != other.get(cond))
            .collect()
    }

    /// All eight assignments in binary order, `a` being the most significant bit
    pub fn all() -> impl Iterator<Item = Inputs> {
        (0u8..8).map(|bits| {
            Inputs::new(bits & 0b100 != 0, bits & 0b010 != 0, bits & 0b001 != 0)
        })
    }
}

impl fmt::Display for Inputs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}, {}", self.a, self.b, self.c)
    }
}

/// A numbered input triple with the outcome the decision should produce
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestCase {
    /// 1-based position in the driver's output
    pub number: usize,
    pub inputs: Inputs,
    pub expected: bool,
}

impl TestCase {
    const fn new(number: usize, a: bool, b: bool, c: bool, expected: bool) -> Self {
        TestCase {
            number,
            inputs: Inputs::new(a, b, c),
            expected,
        }
    }
}

/// The cases the driver evaluates, in output order
pub const MCDC_CASES: [TestCase; 5] = [
    TestCase::new(1, true, true, false, true),
    TestCase::new(2, false, true, false, false),
    TestCase::new(3, true, false, false, false),
    TestCase::new(4, false, false, true, true),
    TestCase::new(5, false, false, false, false),
];
