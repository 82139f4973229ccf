//! Error types for formula evaluation

use std::fmt;
use std::io;
use std::sync::Arc;

/// Errors that can occur when evaluating a formula under a model
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvaluationError {
    /// The model assigns no value to a variable of the formula
    UnassignedVariable {
        /// The variable missing from the model
        variable: Arc<str>,
    },
}

impl fmt::Display for EvaluationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvaluationError::UnassignedVariable { variable } => {
                write!(f, "Model assigns no value to variable '{}'", variable)
            }
        }
    }
}

impl std::error::Error for EvaluationError {}

impl From<EvaluationError> for io::Error {
    fn from(err: EvaluationError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}
