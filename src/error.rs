//! Error types for the decision driver
//!
//! Neither variant turns into a failing exit status in the driver binary.
//! They exist so library callers can tell a broken output sink apart from a
//! decision that disagrees with the case table.

use crate::cases::Inputs;
use std::fmt;
use std::io;

/// Errors produced while driving or checking the decision
#[derive(Debug)]
pub enum DriverError {
    /// Writing the report failed
    Io(io::Error),

    /// The decision produced an outcome other than the one in the case table
    OutcomeMismatch {
        /// Case number (1-based)
        case: usize,
        /// The triple that was evaluated
        inputs: Inputs,
        /// The outcome `(a && b) || c` yields
        expected: bool,
        /// The outcome the decision returned
        actual: bool,
    },
}

impl fmt::Display for DriverError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DriverError::Io(e) => write!(f, "Failed to write report: {}", e),
            DriverError::OutcomeMismatch {
                case,
                inputs,
                expected,
                actual,
            } => write!(
                f,
                "Test {}: decision({}) returned {} but (a && b) || c is {}",
                case, inputs, actual, expected
            ),
        }
    }
}

impl std::error::Error for DriverError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DriverError::Io(e) => Some(e),
            DriverError::OutcomeMismatch { .. } => None,
        }
    }
}

impl From<io::Error> for DriverError {
    fn from(err: io::Error) -> Self {
        DriverError::Io(err)
    }
}
