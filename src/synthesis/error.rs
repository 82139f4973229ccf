//! Error types for truth-table synthesis

use std::fmt;
use std::io;
use std::sync::Arc;

/// Errors that can occur when synthesizing a formula from a truth table
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SynthesisError {
    /// The variable list is empty
    NoVariables,
    /// A name in the variable list is not a variable name
    InvalidVariable {
        /// The offending name
        name: Arc<str>,
    },
    /// A variable appears more than once in the variable list
    DuplicateVariable {
        /// The repeated name
        name: Arc<str>,
    },
    /// More variables than models can be enumerated for
    TooManyVariables {
        /// Number of variables given
        count: usize,
    },
    /// The number of values does not match the number of models
    ValueCountMismatch {
        /// Number of models over the variables
        expected: u64,
        /// Number of values supplied
        actual: usize,
    },
}

impl fmt::Display for SynthesisError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SynthesisError::NoVariables => {
                write!(f, "Cannot synthesize a formula over an empty variable list")
            }
            SynthesisError::InvalidVariable { name } => {
                write!(f, "Invalid variable name: {:?}", name)
            }
            SynthesisError::DuplicateVariable { name } => {
                write!(f, "Variable '{}' appears more than once", name)
            }
            SynthesisError::TooManyVariables { count } => {
                write!(f, "Cannot enumerate models over {} variables", count)
            }
            SynthesisError::ValueCountMismatch { expected, actual } => {
                write!(
                    f,
                    "Value count mismatch: expected {} values, got {}",
                    expected, actual
                )
            }
        }
    }
}

impl std::error::Error for SynthesisError {}

impl From<SynthesisError> for io::Error {
    fn from(err: SynthesisError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}
