//! Variable and operator substitution

use super::error::SubstitutionError;
use super::{Formula, FormulaAst, Operator};
use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Arc;

/// Placeholder bound to the first (or only) operand of a template
const FIRST_PLACEHOLDER: &str = "p";
/// Placeholder bound to the second operand of a binary template
const SECOND_PLACEHOLDER: &str = "q";

impl Formula {
    /// Replace variables by formulas, simultaneously
    ///
    /// Every occurrence of a variable that is a key of `map` is replaced by the
    /// mapped formula verbatim; the inserted formulas are not substituted
    /// again. Other variables and constants are left unchanged, and subtrees
    /// that mention no mapped variable are shared with the original.
    ///
    /// # Examples
    ///
    /// ```
    /// use propositions::Formula;
    /// use std::collections::HashMap;
    ///
    /// # fn main() -> Result<(), propositions::FormulaParseError> {
    /// let formula = Formula::parse("((p->q)&r)")?;
    /// let map = HashMap::from([
    ///     ("p", Formula::parse("q")?),
    ///     ("q", Formula::parse("~p")?),
    /// ]);
    /// assert_eq!(formula.substitute_variables(&map).to_string(), "((q->~p)&r)");
    /// # Ok(())
    /// # }
    /// ```
    pub fn substitute_variables<K>(&self, map: &HashMap<K, Formula>) -> Formula
    where
        K: Borrow<str> + Eq + Hash,
    {
        if self.variables().iter().all(|v| !map.contains_key(&**v)) {
            return self.clone();
        }
        match self.ast() {
            FormulaAst::Variable(name) => map
                .get(&**name)
                .cloned()
                .unwrap_or_else(|| self.clone()),
            FormulaAst::Constant(_) => self.clone(),
            FormulaAst::Not(inner) => inner.substitute_variables(map).not(),
            FormulaAst::Binary(op, first, second) => Formula::binary(
                *op,
                first.substitute_variables(map),
                second.substitute_variables(map),
            ),
        }
    }

    /// Replace operators by formula templates, bottom-up
    ///
    /// Each template is a formula over the placeholder `p` (for constants and
    /// `~`) or `p` and `q` (for binary operators). Operands are rewritten
    /// first; a node whose operator is mapped is then replaced by its template
    /// with the placeholders bound to the rewritten operands. A constant's
    /// template is inserted as is.
    ///
    /// # Errors
    ///
    /// Returns [`SubstitutionError::InvalidPlaceholder`] if a template uses a
    /// variable outside its placeholders. Nothing is rewritten in that case.
    ///
    /// # Examples
    ///
    /// ```
    /// use propositions::{BinaryOp, Formula, Operator};
    /// use std::collections::HashMap;
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let formula = Formula::parse("((p1&p2)&p3)")?;
    /// let map = HashMap::from([(
    ///     Operator::Binary(BinaryOp::And),
    ///     Formula::parse("~(~p|~q)")?,
    /// )]);
    /// let rewritten = formula.substitute_operators(&map)?;
    /// assert_eq!(rewritten.to_string(), "~(~~(~p1|~p2)|~p3)");
    /// # Ok(())
    /// # }
    /// ```
    pub fn substitute_operators(
        &self,
        map: &HashMap<Operator, Formula>,
    ) -> Result<Formula, SubstitutionError> {
        for (operator, template) in map {
            let placeholders: &[&str] = match operator.arity() {
                2 => &[FIRST_PLACEHOLDER, SECOND_PLACEHOLDER],
                _ => &[FIRST_PLACEHOLDER],
            };
            if let Some(variable) = template
                .variables()
                .iter()
                .find(|v| !placeholders.contains(&&***v))
            {
                return Err(SubstitutionError::InvalidPlaceholder {
                    operator: *operator,
                    variable: Arc::clone(variable),
                });
            }
        }
        Ok(self.rewrite_operators(map))
    }

    /// [`Formula::substitute_operators`] for templates already known to be valid
    pub(crate) fn rewrite_operators(&self, map: &HashMap<Operator, Formula>) -> Formula {
        if self.operators().iter().all(|op| !map.contains_key(op)) {
            return self.clone();
        }
        match self.ast() {
            FormulaAst::Variable(_) => self.clone(),
            FormulaAst::Constant(value) => map
                .get(&Operator::constant(*value))
                .cloned()
                .unwrap_or_else(|| self.clone()),
            FormulaAst::Not(inner) => {
                let inner = inner.rewrite_operators(map);
                match map.get(&Operator::Not) {
                    Some(template) => {
                        template.substitute_variables(&HashMap::from([(FIRST_PLACEHOLDER, inner)]))
                    }
                    None => inner.not(),
                }
            }
            FormulaAst::Binary(op, first, second) => {
                let first = first.rewrite_operators(map);
                let second = second.rewrite_operators(map);
                match map.get(&Operator::Binary(*op)) {
                    Some(template) => template.substitute_variables(&HashMap::from([
                        (FIRST_PLACEHOLDER, first),
                        (SECOND_PLACEHOLDER, second),
                    ])),
                    None => Formula::binary(*op, first, second),
                }
            }
        }
    }
}
