//! Propositional formulas as immutable expression trees
//!
//! A [`Formula`] is built bottom-up, either by parsing one of the two textual
//! notations or programmatically, and is never mutated afterwards.
//!
//! # Notations
//!
//! The infix notation parenthesizes every binary application, so the grammar
//! is unambiguous:
//!
//! ```text
//! formula  := variable | constant | '~' formula | '(' formula binop formula ')'
//! variable := [p-z] digit*
//! constant := 'T' | 'F'
//! binop    := '&' | '|' | '->' | '+' | '<->' | '-&' | '-|'
//! ```
//!
//! Polish (prefix) notation drops the parentheses entirely: `((p&q)->~r)`
//! becomes `->&pq~r`.
//!
//! # Quick Start
//!
//! ```
//! use propositions::Formula;
//!
//! # fn main() -> Result<(), propositions::FormulaParseError> {
//! let formula = Formula::parse("((p&q)->~r)")?;
//! assert_eq!(formula.polish(), "->&pq~r");
//! assert_eq!(Formula::parse_polish("->&pq~r")?, formula);
//!
//! let vars: Vec<String> = formula.variables().iter().map(|v| v.to_string()).collect();
//! assert_eq!(vars, ["p", "q", "r"]);
//! # Ok(())
//! # }
//! ```
//!
//! # Equality
//!
//! Two formulas are equal iff their canonical infix renderings are equal. The
//! rendering is computed once per node and cached, so comparing and hashing
//! are cheap after the first use.

mod ast;
mod display;
pub mod error;
mod operators;
mod parser;
mod substitution;
mod symbols;

pub use ast::ExprNode;
pub use error::{FormulaParseError, SubstitutionError};
pub use parser::MAX_NESTING_DEPTH;
pub use symbols::{is_binary, is_constant, is_unary, is_variable, BinaryOp, Operator};

pub(crate) use ast::FormulaAst;

use std::collections::BTreeSet;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, OnceLock};

/// An immutable propositional formula
///
/// Cloning is O(1): children are shared through `Arc`, and the cached
/// rendering, variable set and operator set travel with the node.
///
/// # Examples
///
/// ```
/// use propositions::{BinaryOp, Formula};
///
/// let p = Formula::variable("p");
/// let q = Formula::variable("q");
/// let formula = Formula::binary(BinaryOp::Implies, p.and(&q), q.not());
///
/// assert_eq!(formula.to_string(), "((p&q)->~q)");
/// ```
#[derive(Clone)]
pub struct Formula {
    inner: Arc<FormulaInner>,
}

struct FormulaInner {
    ast: FormulaAst,
    repr_cache: OnceLock<Arc<str>>,
    variables_cache: OnceLock<BTreeSet<Arc<str>>>,
    operators_cache: OnceLock<BTreeSet<Operator>>,
}

/// The symbol at the root of a formula
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Root<'a> {
    /// A variable name such as `p` or `q7`
    Variable(&'a str),
    /// A constant, `~`, or a binary connective
    Operator(Operator),
}

impl fmt::Display for Root<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Root::Variable(name) => f.write_str(name),
            Root::Operator(op) => f.write_str(op.symbol()),
        }
    }
}

impl Formula {
    pub(crate) fn from_ast(ast: FormulaAst) -> Self {
        Formula {
            inner: Arc::new(FormulaInner {
                ast,
                repr_cache: OnceLock::new(),
                variables_cache: OnceLock::new(),
                operators_cache: OnceLock::new(),
            }),
        }
    }

    pub(crate) fn ast(&self) -> &FormulaAst {
        &self.inner.ast
    }

    /// Create a variable formula
    ///
    /// # Panics
    ///
    /// Panics if `name` is not a variable name (see [`is_variable`]).
    pub fn variable(name: &str) -> Self {
        assert!(is_variable(name), "{name:?} is not a variable name");
        Formula::from_ast(FormulaAst::Variable(Arc::from(name)))
    }

    /// Variable from a name already known to be valid
    pub(crate) fn from_name(name: &Arc<str>) -> Self {
        Formula::from_ast(FormulaAst::Variable(Arc::clone(name)))
    }

    /// Create the constant `T` or `F`
    pub fn constant(value: bool) -> Self {
        Formula::from_ast(FormulaAst::Constant(value))
    }

    /// Create a binary application of `op`
    pub fn binary(op: BinaryOp, first: Formula, second: Formula) -> Self {
        Formula::from_ast(FormulaAst::Binary(op, first, second))
    }

    /// The root symbol of this formula
    pub fn root(&self) -> Root<'_> {
        match self.ast() {
            FormulaAst::Variable(name) => Root::Variable(name),
            FormulaAst::Constant(value) => Root::Operator(Operator::constant(*value)),
            FormulaAst::Not(_) => Root::Operator(Operator::Not),
            FormulaAst::Binary(op, _, _) => Root::Operator(Operator::Binary(*op)),
        }
    }

    /// The first operand, present iff the root is unary or binary
    pub fn first(&self) -> Option<&Formula> {
        match self.ast() {
            FormulaAst::Not(first) | FormulaAst::Binary(_, first, _) => Some(first),
            FormulaAst::Variable(_) | FormulaAst::Constant(_) => None,
        }
    }

    /// The second operand, present iff the root is binary
    pub fn second(&self) -> Option<&Formula> {
        match self.ast() {
            FormulaAst::Binary(_, _, second) => Some(second),
            _ => None,
        }
    }

    /// The canonical infix rendering, cached after the first call
    pub fn as_str(&self) -> &str {
        self.inner.repr_cache.get_or_init(|| self.render_infix())
    }

    /// All variable names occurring in this formula, sorted
    pub fn variables(&self) -> &BTreeSet<Arc<str>> {
        self.inner.variables_cache.get_or_init(|| match self.ast() {
            FormulaAst::Variable(name) => BTreeSet::from([Arc::clone(name)]),
            FormulaAst::Constant(_) => BTreeSet::new(),
            FormulaAst::Not(inner) => inner.variables().clone(),
            FormulaAst::Binary(_, first, second) => {
                first.variables().union(second.variables()).cloned().collect()
            }
        })
    }

    /// All constants and operators occurring in this formula, sorted
    ///
    /// # Examples
    ///
    /// ```
    /// use propositions::{BinaryOp, Formula, Operator};
    ///
    /// # fn main() -> Result<(), propositions::FormulaParseError> {
    /// let formula = Formula::parse("(~p|T)")?;
    /// let ops: Vec<Operator> = formula.operators().iter().copied().collect();
    /// assert_eq!(ops, [Operator::True, Operator::Not, Operator::Binary(BinaryOp::Or)]);
    /// # Ok(())
    /// # }
    /// ```
    pub fn operators(&self) -> &BTreeSet<Operator> {
        self.inner.operators_cache.get_or_init(|| match self.ast() {
            FormulaAst::Variable(_) => BTreeSet::new(),
            FormulaAst::Constant(value) => BTreeSet::from([Operator::constant(*value)]),
            FormulaAst::Not(inner) => {
                let mut ops = inner.operators().clone();
                ops.insert(Operator::Not);
                ops
            }
            FormulaAst::Binary(op, first, second) => {
                let mut ops: BTreeSet<Operator> =
                    first.operators().union(second.operators()).copied().collect();
                ops.insert(Operator::Binary(*op));
                ops
            }
        })
    }
}

impl PartialEq for Formula {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner) || self.as_str() == other.as_str()
    }
}

impl Eq for Formula {}

impl Hash for Formula {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_str().hash(state);
    }
}

#[cfg(test)]
mod tests;
