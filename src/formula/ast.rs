//! AST representation and tree traversal

use super::{BinaryOp, Formula};
use std::sync::Arc;

/// Node view passed to [`Formula::fold`]
///
/// Operands are replaced by the results already computed for the child
/// subtrees, so a fold is a single bottom-up pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExprNode<'a, T> {
    /// A variable with the given name
    Variable(&'a str),
    /// The constant `T` or `F`
    Constant(bool),
    /// Negation with the result from the operand
    Not(T),
    /// A binary connective with results from both operands
    Binary(BinaryOp, T, T),
}

/// Owned tree structure behind a [`Formula`]
///
/// The variant fixes which operands exist, so a node can never carry a
/// dangling or missing child.
pub(crate) enum FormulaAst {
    Variable(Arc<str>),
    Constant(bool),
    Not(Formula),
    Binary(BinaryOp, Formula, Formula),
}

impl Formula {
    /// Fold the formula tree from the leaves to the root
    ///
    /// `f` is called once per node with an [`ExprNode`] holding the results of
    /// the node's operands.
    ///
    /// # Examples
    ///
    /// Count the binary connectives in a formula:
    ///
    /// ```
    /// use propositions::{ExprNode, Formula};
    ///
    /// # fn main() -> Result<(), propositions::FormulaParseError> {
    /// let formula = Formula::parse("((p&q)|~(r->s))")?;
    /// let binaries = formula.fold(|node| match node {
    ///     ExprNode::Variable(_) | ExprNode::Constant(_) => 0,
    ///     ExprNode::Not(inner) => inner,
    ///     ExprNode::Binary(_, l, r) => l + r + 1,
    /// });
    /// assert_eq!(binaries, 3);
    /// # Ok(())
    /// # }
    /// ```
    pub fn fold<'a, T, F>(&'a self, mut f: F) -> T
    where
        F: FnMut(ExprNode<'a, T>) -> T,
    {
        self.fold_impl(&mut f)
    }

    fn fold_impl<'a, T, F>(&'a self, f: &mut F) -> T
    where
        F: FnMut(ExprNode<'a, T>) -> T,
    {
        match self.ast() {
            FormulaAst::Variable(name) => f(ExprNode::Variable(name)),
            FormulaAst::Constant(value) => f(ExprNode::Constant(*value)),
            FormulaAst::Not(inner) => {
                let inner_result = inner.fold_impl(f);
                f(ExprNode::Not(inner_result))
            }
            FormulaAst::Binary(op, first, second) => {
                let first_result = first.fold_impl(f);
                let second_result = second.fold_impl(f);
                f(ExprNode::Binary(*op, first_result, second_result))
            }
        }
    }

    /// Height of the formula tree; a variable or constant has depth 1
    pub fn depth(&self) -> usize {
        self.fold::<usize, _>(|node| match node {
            ExprNode::Variable(_) | ExprNode::Constant(_) => 1,
            ExprNode::Not(inner) => inner + 1,
            ExprNode::Binary(_, first, second) => first.max(second) + 1,
        })
    }
}
