//! Display, Debug and Polish rendering for formulas

use super::{ExprNode, Formula, FormulaAst};
use std::fmt;
use std::sync::Arc;

impl Formula {
    /// Build the canonical infix string from the children's cached renderings
    pub(super) fn render_infix(&self) -> Arc<str> {
        match self.ast() {
            FormulaAst::Variable(name) => Arc::clone(name),
            FormulaAst::Constant(value) => Arc::from(if *value { "T" } else { "F" }),
            FormulaAst::Not(inner) => Arc::from(format!("~{}", inner.as_str())),
            FormulaAst::Binary(op, first, second) => Arc::from(format!(
                "({}{}{})",
                first.as_str(),
                op.symbol(),
                second.as_str()
            )),
        }
    }

    /// Render the formula in Polish (prefix) notation
    ///
    /// Operators precede their operands and no parentheses or separators are
    /// written. Tokens are self-delimiting, so [`Formula::parse_polish`]
    /// recovers the same formula.
    ///
    /// # Examples
    ///
    /// ```
    /// use propositions::Formula;
    ///
    /// # fn main() -> Result<(), propositions::FormulaParseError> {
    /// let formula = Formula::parse("(~(p1<->q)-|T)")?;
    /// assert_eq!(formula.polish(), "-|~<->p1qT");
    /// # Ok(())
    /// # }
    /// ```
    pub fn polish(&self) -> String {
        self.fold(|node| match node {
            ExprNode::Variable(name) => name.to_string(),
            ExprNode::Constant(value) => String::from(if value { "T" } else { "F" }),
            ExprNode::Not(inner) => format!("~{}", inner),
            ExprNode::Binary(op, first, second) => format!("{}{}{}", op.symbol(), first, second),
        })
    }
}

/// Display formatting writes the canonical, fully parenthesized infix form
///
/// # Examples
///
/// ```
/// use propositions::Formula;
///
/// let p = Formula::variable("p");
/// let q = Formula::variable("q");
/// assert_eq!(format!("{}", p.or(&q.not())), "(p|~q)");
/// ```
impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Debug formatting delegates to `Display`
impl fmt::Debug for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
