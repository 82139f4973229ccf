//! Crate-level error type
//!
//! Each component reports its own error enum. [`PropositionsError`] wraps all
//! of them, plus I/O errors from truth-table output, so callers that mix
//! several operations can propagate with a single `?`.

use crate::formula::{FormulaParseError, SubstitutionError};
use crate::reduce::ParseOperatorSetError;
use crate::semantics::EvaluationError;
use crate::synthesis::SynthesisError;
use std::fmt;
use std::io;

/// Any error produced by this crate
#[derive(Debug)]
pub enum PropositionsError {
    /// A formula string failed to parse
    Parse(FormulaParseError),
    /// An operator template used a variable outside its placeholders
    Substitution(SubstitutionError),
    /// A model did not cover a formula's variables
    Evaluation(EvaluationError),
    /// A truth table could not be synthesized
    Synthesis(SynthesisError),
    /// An operator set name was not recognised
    UnknownOperatorSet(ParseOperatorSetError),
    /// IO error wrapper
    Io(io::Error),
}

impl fmt::Display for PropositionsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PropositionsError::Parse(err) => write!(f, "{}", err),
            PropositionsError::Substitution(err) => write!(f, "{}", err),
            PropositionsError::Evaluation(err) => write!(f, "{}", err),
            PropositionsError::Synthesis(err) => write!(f, "{}", err),
            PropositionsError::UnknownOperatorSet(err) => write!(f, "{}", err),
            PropositionsError::Io(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for PropositionsError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PropositionsError::Parse(err) => Some(err),
            PropositionsError::Substitution(err) => Some(err),
            PropositionsError::Evaluation(err) => Some(err),
            PropositionsError::Synthesis(err) => Some(err),
            PropositionsError::UnknownOperatorSet(err) => Some(err),
            PropositionsError::Io(err) => Some(err),
        }
    }
}

impl From<FormulaParseError> for PropositionsError {
    fn from(err: FormulaParseError) -> Self {
        PropositionsError::Parse(err)
    }
}

impl From<SubstitutionError> for PropositionsError {
    fn from(err: SubstitutionError) -> Self {
        PropositionsError::Substitution(err)
    }
}

impl From<EvaluationError> for PropositionsError {
    fn from(err: EvaluationError) -> Self {
        PropositionsError::Evaluation(err)
    }
}

impl From<SynthesisError> for PropositionsError {
    fn from(err: SynthesisError) -> Self {
        PropositionsError::Synthesis(err)
    }
}

impl From<ParseOperatorSetError> for PropositionsError {
    fn from(err: ParseOperatorSetError) -> Self {
        PropositionsError::UnknownOperatorSet(err)
    }
}

impl From<io::Error> for PropositionsError {
    fn from(err: io::Error) -> Self {
        PropositionsError::Io(err)
    }
}

// Conversion to io::Error for callers working in io::Result
impl From<PropositionsError> for io::Error {
    fn from(err: PropositionsError) -> Self {
        match err {
            PropositionsError::Io(io_err) => io_err,
            PropositionsError::Parse(err) => err.into(),
            PropositionsError::Substitution(err) => err.into(),
            PropositionsError::Evaluation(err) => err.into(),
            PropositionsError::Synthesis(err) => err.into(),
            PropositionsError::UnknownOperatorSet(err) => err.into(),
        }
    }
}
