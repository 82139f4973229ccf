//! Recursive-descent parsers for the infix and Polish notations
//!
//! Both parsers consume a prefix of the input and hand back the offset where
//! the next token starts. A failure carries its reason and offset; the
//! original input is only copied into the error once, at the top level.

use super::error::FormulaParseError;
use super::{BinaryOp, Formula, FormulaAst};
use log::trace;
use std::str::FromStr;
use std::sync::Arc;

/// Deepest operator nesting the parsers accept
///
/// Parsing, rendering and evaluation all recurse once per level, so the
/// limit keeps them within a default thread stack.
pub const MAX_NESTING_DEPTH: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Notation {
    Infix,
    Polish,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FailureKind {
    UnexpectedEnd,
    ExpectedBinaryOperator,
    ExpectedClosingParenthesis,
    InvalidLeadingCharacter(char),
    NestingTooDeep,
    TrailingInput,
}

#[derive(Debug, Clone, Copy)]
struct Failure {
    kind: FailureKind,
    position: usize,
}

impl Failure {
    fn at(kind: FailureKind, position: usize) -> Self {
        Failure { kind, position }
    }

    fn into_error(self, input: &str) -> FormulaParseError {
        let input = Arc::from(input);
        let position = self.position;
        match self.kind {
            FailureKind::UnexpectedEnd => FormulaParseError::UnexpectedEnd { input, position },
            FailureKind::ExpectedBinaryOperator => {
                FormulaParseError::ExpectedBinaryOperator { input, position }
            }
            FailureKind::ExpectedClosingParenthesis => {
                FormulaParseError::ExpectedClosingParenthesis { input, position }
            }
            FailureKind::InvalidLeadingCharacter(character) => {
                FormulaParseError::InvalidLeadingCharacter {
                    character,
                    input,
                    position,
                }
            }
            FailureKind::NestingTooDeep => FormulaParseError::NestingTooDeep {
                input,
                position,
                limit: MAX_NESTING_DEPTH,
            },
            FailureKind::TrailingInput => FormulaParseError::TrailingInput { input, position },
        }
    }
}

type Step = Result<(Formula, usize), Failure>;

struct PrefixParser<'a> {
    input: &'a str,
    notation: Notation,
}

impl<'a> PrefixParser<'a> {
    fn new(input: &'a str, notation: Notation) -> Self {
        PrefixParser { input, notation }
    }

    /// Parse the whole input, rejecting anything left over
    fn parse_complete(&self) -> Result<Formula, FormulaParseError> {
        let outcome = self.parse_prefix(0, 0).and_then(|(formula, end)| {
            if end == self.input.len() {
                Ok(formula)
            } else {
                Err(Failure::at(FailureKind::TrailingInput, end))
            }
        });
        outcome.map_err(|failure| {
            trace!(
                "{:?} parse of {:?} failed: {:?} at {}",
                self.notation,
                self.input,
                failure.kind,
                failure.position
            );
            failure.into_error(self.input)
        })
    }

    /// Consume one formula starting at `pos`, `depth` operators deep
    fn parse_prefix(&self, pos: usize, depth: usize) -> Step {
        if depth > MAX_NESTING_DEPTH {
            return Err(Failure::at(FailureKind::NestingTooDeep, pos));
        }
        let bytes = self.input.as_bytes();
        let Some(&lead) = bytes.get(pos) else {
            return Err(Failure::at(FailureKind::UnexpectedEnd, pos));
        };

        match lead {
            b'T' | b'F' => Ok((Formula::constant(lead == b'T'), pos + 1)),
            b'p'..=b'z' => {
                let digits = bytes[pos + 1..]
                    .iter()
                    .take_while(|b| b.is_ascii_digit())
                    .count();
                let end = pos + 1 + digits;
                let name = Arc::from(&self.input[pos..end]);
                Ok((Formula::from_ast(FormulaAst::Variable(name)), end))
            }
            b'~' => {
                let (inner, end) = self.parse_prefix(pos + 1, depth + 1)?;
                Ok((inner.not(), end))
            }
            b'(' if self.notation == Notation::Infix => {
                self.parse_parenthesized(pos + 1, depth + 1)
            }
            _ if self.notation == Notation::Polish => match self.binary_operator_at(pos) {
                Some((op, after_op)) => {
                    let (first, after_first) = self.parse_prefix(after_op, depth + 1)?;
                    let (second, end) = self.parse_prefix(after_first, depth + 1)?;
                    Ok((Formula::binary(op, first, second), end))
                }
                None => Err(self.invalid_lead(pos)),
            },
            _ => Err(self.invalid_lead(pos)),
        }
    }

    /// Parse `first op second)` after an opening parenthesis
    fn parse_parenthesized(&self, pos: usize, depth: usize) -> Step {
        let (first, after_first) = self.parse_prefix(pos, depth)?;
        let Some((op, after_op)) = self.binary_operator_at(after_first) else {
            return Err(Failure::at(FailureKind::ExpectedBinaryOperator, after_first));
        };
        let (second, after_second) = self.parse_prefix(after_op, depth)?;
        if self.input.as_bytes().get(after_second) != Some(&b')') {
            return Err(Failure::at(
                FailureKind::ExpectedClosingParenthesis,
                after_second,
            ));
        }
        Ok((Formula::binary(op, first, second), after_second + 1))
    }

    /// Match the longest binary operator symbol starting at `pos`
    fn binary_operator_at(&self, pos: usize) -> Option<(BinaryOp, usize)> {
        let remaining = self.input.len().saturating_sub(pos);
        let longest = BinaryOp::MAX_SYMBOL_LEN.min(remaining);
        (1..=longest).rev().find_map(|len| {
            self.input
                .get(pos..pos + len)
                .and_then(BinaryOp::from_symbol)
                .map(|op| (op, pos + len))
        })
    }

    fn invalid_lead(&self, pos: usize) -> Failure {
        // `pos` always sits on a char boundary: only ASCII tokens are consumed.
        let character = self.input[pos..].chars().next().unwrap_or('\0');
        Failure::at(FailureKind::InvalidLeadingCharacter(character), pos)
    }
}

impl Formula {
    /// Parse a formula in fully parenthesized infix notation
    ///
    /// Inputs nesting operators more than [`MAX_NESTING_DEPTH`] levels deep
    /// are rejected with [`FormulaParseError::NestingTooDeep`].
    ///
    /// # Examples
    ///
    /// ```
    /// use propositions::{Formula, FormulaParseError};
    ///
    /// let formula = Formula::parse("((p1<->~q)-&T)").unwrap();
    /// assert_eq!(formula.to_string(), "((p1<->~q)-&T)");
    ///
    /// let err = Formula::parse("(p&q").unwrap_err();
    /// assert!(matches!(err, FormulaParseError::ExpectedClosingParenthesis { position: 4, .. }));
    /// ```
    pub fn parse(input: &str) -> Result<Self, FormulaParseError> {
        PrefixParser::new(input, Notation::Infix).parse_complete()
    }

    /// Check whether `input` is exactly one well-formed infix formula
    ///
    /// ```
    /// use propositions::Formula;
    ///
    /// assert!(Formula::is_formula("~(p->q7)"));
    /// assert!(!Formula::is_formula("(p&q"));
    /// assert!(!Formula::is_formula("p&q"));
    /// ```
    pub fn is_formula(input: &str) -> bool {
        Formula::parse(input).is_ok()
    }

    /// Parse a formula in Polish (prefix) notation
    ///
    /// Binary operator tokens are matched longest-first, so `<->` is read as
    /// one token rather than an error.
    pub fn parse_polish(input: &str) -> Result<Self, FormulaParseError> {
        PrefixParser::new(input, Notation::Polish).parse_complete()
    }
}

impl FromStr for Formula {
    type Err = FormulaParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Formula::parse(s)
    }
}
