//! Semantics of propositional formulas
//!
//! A [`Model`] assigns truth values to variable names. This module evaluates
//! formulas under models, enumerates every model over a set of variables, and
//! builds the semantic checks and truth tables on top of that enumeration.
//!
//! # Examples
//!
//! ```
//! use propositions::{is_contradiction, is_satisfiable, is_tautology, Formula};
//!
//! # fn main() -> Result<(), propositions::FormulaParseError> {
//! assert!(is_tautology(&Formula::parse("(p|~p)")?));
//! assert!(is_contradiction(&Formula::parse("(p&~p)")?));
//! assert!(is_satisfiable(&Formula::parse("(p->q)")?));
//! # Ok(())
//! # }
//! ```

mod error;
mod eval;
mod models;
mod table;

pub use error::EvaluationError;
pub use eval::{evaluate, is_model, truth_values, try_evaluate};
pub use models::{all_models, AllModels};
pub use table::{print_truth_table, write_truth_table, TruthTable, TruthTableConfig};

pub(crate) use models::MAX_ENUMERABLE_VARIABLES;

use crate::formula::Formula;
use log::debug;
use std::collections::HashMap;
use std::sync::Arc;

/// An assignment of truth values to variable names
pub type Model = HashMap<Arc<str>, bool>;

fn models_of(formula: &Formula) -> AllModels {
    let variables: Vec<Arc<str>> = formula.variables().iter().cloned().collect();
    all_models(&variables)
}

/// Check whether `formula` is true in every model of its variables
pub fn is_tautology(formula: &Formula) -> bool {
    let result = truth_values(formula, models_of(formula)).all(|value| value);
    debug!("{} tautology: {}", formula, result);
    result
}

/// Check whether `formula` is false in every model of its variables
pub fn is_contradiction(formula: &Formula) -> bool {
    !is_satisfiable(formula)
}

/// Check whether `formula` is true in at least one model of its variables
pub fn is_satisfiable(formula: &Formula) -> bool {
    let result = truth_values(formula, models_of(formula)).any(|value| value);
    debug!("{} satisfiable: {}", formula, result);
    result
}

/// Check whether two formulas agree in every model of their joint variables
///
/// # Examples
///
/// ```
/// use propositions::{equivalent, Formula};
///
/// # fn main() -> Result<(), propositions::FormulaParseError> {
/// let a = Formula::parse("(p->q)")?;
/// let b = Formula::parse("(~q->~p)")?;
/// assert!(equivalent(&a, &b));
/// assert!(!equivalent(&a, &Formula::parse("(q->p)")?));
/// # Ok(())
/// # }
/// ```
pub fn equivalent(first: &Formula, second: &Formula) -> bool {
    let variables: Vec<Arc<str>> = first
        .variables()
        .union(second.variables())
        .cloned()
        .collect();
    all_models(&variables).all(|model| evaluate(first, &model) == evaluate(second, &model))
}
