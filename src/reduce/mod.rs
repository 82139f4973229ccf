//! Reduction of formulas to restricted operator sets
//!
//! Each reducer returns a formula with the same truth table as its input
//! whose [`Formula::operators`] fall inside a fixed target set:
//!
//! | Reducer              | Operators   |
//! |----------------------|-------------|
//! | [`to_not_and_or`]    | `~ & \|`    |
//! | [`to_not_and`]       | `~ &`       |
//! | [`to_nand`]          | `-&`        |
//! | [`to_implies_not`]   | `-> ~`      |
//! | [`to_implies_false`] | `-> F`      |
//!
//! Reducers are chained: a later stage first reduces to an earlier, larger
//! set and then only needs templates for the operators left in it. Each
//! stage rewrites bottom-up through [`Formula::substitute_operators`].
//!
//! Constants are replaced by closed templates over the variable `p`, so
//! reducing a formula containing `T` or `F` may add `p` to its variables.
//!
//! # Examples
//!
//! ```
//! use propositions::{equivalent, to_nand, BinaryOp, Formula, Operator};
//!
//! # fn main() -> Result<(), propositions::FormulaParseError> {
//! let formula = Formula::parse("(p->q)")?;
//! let reduced = to_nand(&formula);
//!
//! assert!(reduced.operators().iter().all(|op| *op == Operator::Binary(BinaryOp::Nand)));
//! assert!(equivalent(&formula, &reduced));
//! # Ok(())
//! # }
//! ```

mod error;
mod rules;

pub use error::ParseOperatorSetError;

use crate::formula::{BinaryOp, Formula, Operator};
use log::debug;
use rules::Rules;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

fn apply_stage(stage: &str, formula: &Formula, rules: &Rules) -> Formula {
    let reduced = formula.rewrite_operators(rules);
    debug!("{}: {} => {}", stage, formula, reduced);
    reduced
}

/// Reduce to an equivalent formula over `~`, `&` and `|`
pub fn to_not_and_or(formula: &Formula) -> Formula {
    apply_stage("not_and_or", formula, rules::not_and_or())
}

/// Reduce to an equivalent formula over `~` and `&`
pub fn to_not_and(formula: &Formula) -> Formula {
    apply_stage("not_and", &to_not_and_or(formula), rules::not_and())
}

/// Reduce to an equivalent formula over `-&` only
///
/// # Examples
///
/// ```
/// use propositions::{to_nand, Formula};
///
/// # fn main() -> Result<(), propositions::FormulaParseError> {
/// assert_eq!(to_nand(&Formula::parse("~p")?).to_string(), "(p-&p)");
/// # Ok(())
/// # }
/// ```
pub fn to_nand(formula: &Formula) -> Formula {
    apply_stage("nand", &to_not_and(formula), rules::nand())
}

/// Reduce to an equivalent formula over `->` and `~`
pub fn to_implies_not(formula: &Formula) -> Formula {
    apply_stage("implies_not", formula, rules::implies_not())
}

/// Reduce to an equivalent formula over `->` and `F`
///
/// # Examples
///
/// ```
/// use propositions::{to_implies_false, Formula};
///
/// # fn main() -> Result<(), propositions::FormulaParseError> {
/// let reduced = to_implies_false(&Formula::parse("(p&q)")?);
/// assert_eq!(reduced.to_string(), "((p->(q->F))->F)");
/// # Ok(())
/// # }
/// ```
pub fn to_implies_false(formula: &Formula) -> Formula {
    apply_stage(
        "implies_false",
        &to_implies_not(formula),
        rules::implies_false(),
    )
}

/// The five target operator sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorSet {
    /// `~`, `&` and `|`
    NotAndOr,
    /// `~` and `&`
    NotAnd,
    /// `-&`
    Nand,
    /// `->` and `~`
    ImpliesNot,
    /// `->` and `F`
    ImpliesFalse,
}

impl OperatorSet {
    /// Every operator set, largest first
    pub const ALL: [OperatorSet; 5] = [
        OperatorSet::NotAndOr,
        OperatorSet::NotAnd,
        OperatorSet::Nand,
        OperatorSet::ImpliesNot,
        OperatorSet::ImpliesFalse,
    ];

    /// Name used by [`FromStr`] and [`Display`](fmt::Display)
    pub fn name(self) -> &'static str {
        match self {
            OperatorSet::NotAndOr => "not_and_or",
            OperatorSet::NotAnd => "not_and",
            OperatorSet::Nand => "nand",
            OperatorSet::ImpliesNot => "implies_not",
            OperatorSet::ImpliesFalse => "implies_false",
        }
    }

    /// The operators a reduced formula may contain
    pub fn operators(self) -> &'static [Operator] {
        const AND: Operator = Operator::Binary(BinaryOp::And);
        const OR: Operator = Operator::Binary(BinaryOp::Or);
        const NAND: Operator = Operator::Binary(BinaryOp::Nand);
        const IMPLIES: Operator = Operator::Binary(BinaryOp::Implies);
        match self {
            OperatorSet::NotAndOr => &[Operator::Not, AND, OR],
            OperatorSet::NotAnd => &[Operator::Not, AND],
            OperatorSet::Nand => &[NAND],
            OperatorSet::ImpliesNot => &[Operator::Not, IMPLIES],
            OperatorSet::ImpliesFalse => &[Operator::False, IMPLIES],
        }
    }

    /// Check whether every operator of `formula` belongs to this set
    pub fn contains_all(self, formula: &Formula) -> bool {
        formula
            .operators()
            .iter()
            .all(|op| self.operators().contains(op))
    }

    /// Run the matching reducer
    pub fn reduce(self, formula: &Formula) -> Formula {
        match self {
            OperatorSet::NotAndOr => to_not_and_or(formula),
            OperatorSet::NotAnd => to_not_and(formula),
            OperatorSet::Nand => to_nand(formula),
            OperatorSet::ImpliesNot => to_implies_not(formula),
            OperatorSet::ImpliesFalse => to_implies_false(formula),
        }
    }
}

impl fmt::Display for OperatorSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Accepts the set name with or without a `to_` prefix, and `-` for `_`
impl FromStr for OperatorSet {
    type Err = ParseOperatorSetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        let name = normalized.strip_prefix("to_").unwrap_or(&normalized);
        OperatorSet::ALL
            .into_iter()
            .find(|set| set.name() == name)
            .ok_or_else(|| ParseOperatorSetError {
                name: Arc::from(s),
            })
    }
}
