//! The coverage test driver
//!
//! Evaluates a [`Decision`] on the five cases of [`MCDC_CASES`], in table
//! order, and writes one line per case:
//!
//! ```text
//! Test 1: decision(true, true, false) = 1
//! ```
//!
//! Nothing is validated while running. A decision that does not implement
//! `(a && b) || c` only shows up as lines that disagree with the table; use
//! [`Outcome::check`] or [`Driver::verify`] to turn that into a value.

use crate::cases::{Inputs, TestCase, MCDC_CASES};
use crate::decision::Decision;
use crate::error::DriverError;
use std::io::Write;

/// The result of evaluating the decision on one case
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outcome {
    pub case: TestCase,
    pub actual: bool,
}

impl Outcome {
    /// Whether the decision agreed with the case table
    pub fn matches_expected(&self) -> bool {
        self.actual == self.case.expected
    }

    /// Convert a disagreement with the case table into an error
    pub fn check(&self) -> Result<(), DriverError> {
        if self.matches_expected() {
            Ok(())
        } else {
            Err(DriverError::OutcomeMismatch {
                case: self.case.number,
                inputs: self.case.inputs,
                expected: self.case.expected,
                actual: self.actual,
            })
        }
    }

    /// The report line for this outcome, without a trailing newline
    pub fn line(&self) -> String {
        format!(
            "Test {}: decision({}) = {}",
            self.case.number,
            self.case.inputs,
            u8::from(self.actual)
        )
    }
}

/// Runs the fixed MC/DC cases against a decision
#[derive(Debug, Clone)]
pub struct Driver<D> {
    decision: D,
}

impl<D: Decision> Driver<D> {
    pub fn new(decision: D) -> Self {
        Driver { decision }
    }

    /// Borrow the decision being driven
    pub fn decision(&self) -> &D {
        &self.decision
    }

    fn evaluate_case(&self, case: TestCase) -> Outcome {
        let Inputs { a, b, c } = case.inputs;
        Outcome {
            case,
            actual: self.decision.decide(a, b, c),
        }
    }

    /// Evaluate every case without writing anything
    pub fn evaluate(&self) -> Vec<Outcome> {
        MCDC_CASES
            .into_iter()
            .map(|case| self.evaluate_case(case))
            .collect()
    }

    /// Evaluate every case, writing each line before the next call
    ///
    /// Returns the outcomes in invocation order. Only a failing writer
    /// produces an error.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<Vec<Outcome>, DriverError> {
        let mut outcomes = Vec::with_capacity(MCDC_CASES.len());
        for case in MCDC_CASES {
            let outcome = self.evaluate_case(case);
            writeln!(out, "{}", outcome.line())?;
            outcomes.push(outcome);
        }
        out.flush()?;
        Ok(outcomes)
    }

    /// Evaluate every case and fail on the first outcome that disagrees with
    /// the case table
    pub fn verify(&self) -> Result<Vec<Outcome>, DriverError> {
        let outcomes = self.evaluate();
        for outcome in &outcomes {
            outcome.check()?;
        }
        Ok(outcomes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decision::{Linked, Reference};
    use std::cell::RefCell;
    use std::io;

    const EXPECTED_REPORT: &str = "\
Test 1: decision(true, true, false) = 1
Test 2: decision(false, true, false) = 0
Test 3: decision(true, false, false) = 0
Test 4: decision(false, false, true) = 1
Test 5: decision(false, false, false) = 0
";

    #[test]
    fn test_run_writes_five_lines_in_order() {
        let mut out = Vec::new();
        let outcomes = Driver::new(Reference).run(&mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), EXPECTED_REPORT);
        assert_eq!(outcomes.len(), 5);
        assert!(outcomes.iter().all(Outcome::matches_expected));
    }

    #[test]
    fn test_linked_report_matches_reference() {
        let mut linked = Vec::new();
        let mut reference = Vec::new();
        Driver::new(Linked).run(&mut linked).unwrap();
        Driver::new(Reference).run(&mut reference).unwrap();
        assert_eq!(linked, reference);
    }

    #[test]
    fn test_invocation_order() {
        let calls = RefCell::new(Vec::new());
        let recording = |a: bool, b: bool, c: bool| {
            calls.borrow_mut().push(Inputs::new(a, b, c));
            (a && b) || c
        };
        Driver::new(&recording).evaluate();

        let expected: Vec<_> = MCDC_CASES.iter().map(|case| case.inputs).collect();
        assert_eq!(*calls.borrow(), expected);
    }

    #[test]
    fn test_wrong_decision_is_reported_not_raised() {
        // a || c instead of (a && b) || c
        let wrong = |a: bool, _b: bool, c: bool| a || c;
        let driver = Driver::new(wrong);

        let mut out = Vec::new();
        let outcomes = driver.run(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("Test 3: decision(true, false, false) = 1"));
        assert!(!outcomes[2].matches_expected());

        match driver.verify() {
            Err(DriverError::OutcomeMismatch { case, actual, .. }) => {
                assert_eq!(case, 3);
                assert!(actual);
            }
            other => panic!("expected mismatch, got {:?}", other),
        }
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_writer_failure_is_io_error() {
        let result = Driver::new(Reference).run(&mut FailingWriter);
        assert!(matches!(result, Err(DriverError::Io(_))));
    }
}
