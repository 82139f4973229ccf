//! Error types for formula parsing and operator substitution

use super::Operator;
use std::fmt;
use std::io;
use std::sync::Arc;

/// Errors related to formula parsing
///
/// Every variant records the original input and the byte offset at which the
/// parser gave up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormulaParseError {
    /// The input ended where a formula was expected
    UnexpectedEnd {
        /// The original input string
        input: Arc<str>,
        /// Offset where a formula was expected
        position: usize,
    },
    /// A left operand was not followed by a binary operator
    ExpectedBinaryOperator {
        /// The original input string
        input: Arc<str>,
        /// Offset where the operator was expected
        position: usize,
    },
    /// A binary application was not closed with `)`
    ExpectedClosingParenthesis {
        /// The original input string
        input: Arc<str>,
        /// Offset where `)` was expected
        position: usize,
    },
    /// A formula cannot start with this character
    InvalidLeadingCharacter {
        /// The offending character
        character: char,
        /// The original input string
        input: Arc<str>,
        /// Offset of the offending character
        position: usize,
    },
    /// Operators were nested deeper than the parser accepts
    NestingTooDeep {
        /// The original input string
        input: Arc<str>,
        /// Offset of the subformula past the limit
        position: usize,
        /// Largest accepted nesting depth
        limit: usize,
    },
    /// A complete formula was followed by more input
    TrailingInput {
        /// The original input string
        input: Arc<str>,
        /// Offset of the first unconsumed character
        position: usize,
    },
}

impl FormulaParseError {
    /// The input that failed to parse
    pub fn input(&self) -> &str {
        match self {
            FormulaParseError::UnexpectedEnd { input, .. }
            | FormulaParseError::ExpectedBinaryOperator { input, .. }
            | FormulaParseError::ExpectedClosingParenthesis { input, .. }
            | FormulaParseError::InvalidLeadingCharacter { input, .. }
            | FormulaParseError::NestingTooDeep { input, .. }
            | FormulaParseError::TrailingInput { input, .. } => input,
        }
    }

    /// Byte offset in the input where parsing failed
    pub fn position(&self) -> usize {
        match self {
            FormulaParseError::UnexpectedEnd { position, .. }
            | FormulaParseError::ExpectedBinaryOperator { position, .. }
            | FormulaParseError::ExpectedClosingParenthesis { position, .. }
            | FormulaParseError::InvalidLeadingCharacter { position, .. }
            | FormulaParseError::NestingTooDeep { position, .. }
            | FormulaParseError::TrailingInput { position, .. } => *position,
        }
    }
}

impl fmt::Display for FormulaParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            FormulaParseError::UnexpectedEnd { .. } => "unexpected end of input".to_string(),
            FormulaParseError::ExpectedBinaryOperator { .. } => {
                "expected binary operator".to_string()
            }
            FormulaParseError::ExpectedClosingParenthesis { .. } => {
                "expected closing parenthesis".to_string()
            }
            FormulaParseError::InvalidLeadingCharacter { character, .. } => {
                format!("a formula cannot start with {:?}", character)
            }
            FormulaParseError::NestingTooDeep { limit, .. } => {
                format!("operators nested deeper than {}", limit)
            }
            FormulaParseError::TrailingInput { .. } => {
                "unexpected input after formula".to_string()
            }
        };
        write!(
            f,
            "Failed to parse formula at position {}: {}. Input: {:?}",
            self.position(),
            reason,
            self.input()
        )
    }
}

impl std::error::Error for FormulaParseError {}

impl From<FormulaParseError> for io::Error {
    fn from(err: FormulaParseError) -> Self {
        io::Error::new(io::ErrorKind::InvalidData, err)
    }
}

/// Errors raised by [`Formula::substitute_operators`]
///
/// [`Formula::substitute_operators`]: super::Formula::substitute_operators
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubstitutionError {
    /// A replacement template uses a variable other than its placeholders
    ///
    /// Templates for constants and `~` may only use `p`; templates for binary
    /// operators may use `p` and `q`.
    InvalidPlaceholder {
        /// The operator whose template is invalid
        operator: Operator,
        /// The offending variable name
        variable: Arc<str>,
    },
}

impl fmt::Display for SubstitutionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubstitutionError::InvalidPlaceholder { operator, variable } => write!(
                f,
                "Template for operator '{}' uses variable '{}', which is not one of its placeholders",
                operator, variable
            ),
        }
    }
}

impl std::error::Error for SubstitutionError {}

impl From<SubstitutionError> for io::Error {
    fn from(err: SubstitutionError) -> Self {
        io::Error::new(io::ErrorKind::InvalidInput, err)
    }
}
