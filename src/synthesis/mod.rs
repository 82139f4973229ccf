//! Synthesis of formulas from truth tables
//!
//! Given an ordered list of variables and one truth value per model, in the
//! order produced by [`all_models`], build a formula whose truth table is
//! exactly those values. [`synthesize`] produces a disjunctive normal form
//! and [`synthesize_cnf`] the conjunctive dual.
//!
//! Each clause is kept as a cube: a map from variable name to the polarity
//! of its literal. Cubes are sorted by variable name, so literals inside a
//! clause come out in a deterministic order regardless of the order of the
//! variable list.
//!
//! # Examples
//!
//! ```
//! use propositions::{all_models, synthesize, truth_values};
//!
//! # fn main() -> Result<(), propositions::SynthesisError> {
//! let values = [false, true, true, false];
//! let formula = synthesize(&["p", "q"], values)?;
//! assert_eq!(formula.to_string(), "((~p&q)|(p&~q))");
//!
//! let table: Vec<bool> = truth_values(&formula, all_models(&["p", "q"])).collect();
//! assert_eq!(table, values);
//! # Ok(())
//! # }
//! ```

mod error;

pub use error::SynthesisError;

use crate::formula::{is_variable, BinaryOp, Formula};
use crate::semantics::{all_models, MAX_ENUMERABLE_VARIABLES};
use log::debug;
use std::collections::{BTreeMap, HashSet};
use std::sync::Arc;

/// A clause: variable name to literal polarity (`true` means unnegated)
type Cube = BTreeMap<Arc<str>, bool>;

/// Which normal form to build
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum NormalForm {
    /// OR of ANDs, one term per true row
    Disjunctive,
    /// AND of ORs, one term per false row
    Conjunctive,
}

impl NormalForm {
    /// Rows with this value contribute a clause
    fn selected_value(self) -> bool {
        matches!(self, NormalForm::Disjunctive)
    }

    /// Connective joining the literals of one clause
    fn inner(self) -> BinaryOp {
        match self {
            NormalForm::Disjunctive => BinaryOp::And,
            NormalForm::Conjunctive => BinaryOp::Or,
        }
    }

    /// Connective joining the clauses
    fn outer(self) -> BinaryOp {
        match self {
            NormalForm::Disjunctive => BinaryOp::Or,
            NormalForm::Conjunctive => BinaryOp::And,
        }
    }
}

/// Build a DNF formula with the given truth table
///
/// `values` holds one entry per model, in [`all_models`] order over
/// `variables`. Each true row contributes a conjunction of literals, and the
/// conjunctions are joined by `|` from left to right. When no row is true the
/// result is `(v&~v)` for the first variable `v`.
///
/// # Errors
///
/// Returns an error if `variables` is empty, contains a non-variable name or
/// a duplicate, or if the number of values is not `2^n`.
pub fn synthesize<S, I>(variables: &[S], values: I) -> Result<Formula, SynthesisError>
where
    S: AsRef<str>,
    I: IntoIterator<Item = bool>,
{
    build(variables, values, NormalForm::Disjunctive)
}

/// Build a CNF formula with the given truth table
///
/// The dual of [`synthesize`]: each false row contributes a disjunction of
/// literals that is false exactly in that row, and the disjunctions are
/// joined by `&`. When no row is false the result is `(v|~v)`.
///
/// # Examples
///
/// ```
/// use propositions::synthesize_cnf;
///
/// # fn main() -> Result<(), propositions::SynthesisError> {
/// let formula = synthesize_cnf(&["p", "q"], [true, true, false, true])?;
/// assert_eq!(formula.to_string(), "(~p|q)");
/// # Ok(())
/// # }
/// ```
pub fn synthesize_cnf<S, I>(variables: &[S], values: I) -> Result<Formula, SynthesisError>
where
    S: AsRef<str>,
    I: IntoIterator<Item = bool>,
{
    build(variables, values, NormalForm::Conjunctive)
}

fn build<S, I>(variables: &[S], values: I, form: NormalForm) -> Result<Formula, SynthesisError>
where
    S: AsRef<str>,
    I: IntoIterator<Item = bool>,
{
    let variables = validate_variables(variables)?;
    let values: Vec<bool> = values.into_iter().collect();
    let expected = 1u64 << variables.len();
    if values.len() as u64 != expected {
        return Err(SynthesisError::ValueCountMismatch {
            expected,
            actual: values.len(),
        });
    }

    let selected = form.selected_value();
    let cubes: Vec<Cube> = all_models(&variables)
        .zip(values)
        .filter(|(_, value)| *value == selected)
        .map(|(model, _)| {
            model
                .into_iter()
                .map(|(name, value)| (name, value == selected))
                .collect()
        })
        .collect();
    debug!(
        "synthesizing {:?} over {} variables from {} cubes",
        form,
        variables.len(),
        cubes.len()
    );

    let clauses = cubes.iter().map(|cube| cube_to_formula(cube, form.inner()));
    match clauses.reduce(|acc, clause| Formula::binary(form.outer(), acc, clause)) {
        Some(formula) => Ok(formula),
        None => {
            let first = Formula::from_name(&variables[0]);
            let negated = first.not();
            Ok(Formula::binary(form.inner(), first, negated))
        }
    }
}

fn validate_variables<S: AsRef<str>>(variables: &[S]) -> Result<Vec<Arc<str>>, SynthesisError> {
    if variables.is_empty() {
        return Err(SynthesisError::NoVariables);
    }
    if variables.len() > MAX_ENUMERABLE_VARIABLES {
        return Err(SynthesisError::TooManyVariables {
            count: variables.len(),
        });
    }
    let mut seen = HashSet::new();
    let mut names = Vec::with_capacity(variables.len());
    for name in variables {
        let name = name.as_ref();
        if !is_variable(name) {
            return Err(SynthesisError::InvalidVariable {
                name: Arc::from(name),
            });
        }
        if !seen.insert(name) {
            return Err(SynthesisError::DuplicateVariable {
                name: Arc::from(name),
            });
        }
        names.push(Arc::from(name));
    }
    Ok(names)
}

fn cube_to_formula(cube: &Cube, op: BinaryOp) -> Formula {
    cube.iter()
        .map(|(name, &polarity)| {
            let literal = Formula::from_name(name);
            if polarity {
                literal
            } else {
                literal.not()
            }
        })
        .reduce(|acc, literal| Formula::binary(op, acc, literal))
        .unwrap_or_else(|| Formula::constant(op == BinaryOp::And))
}
