//! Connective constructors and operator overloading for formulas

use super::{BinaryOp, Formula, FormulaAst};
use std::ops::{BitAnd, BitOr, BitXor, Not};

// Connective methods
impl Formula {
    /// Negation: `~self`
    pub fn not(&self) -> Formula {
        Formula::from_ast(FormulaAst::Not(self.clone()))
    }

    /// Conjunction: `(self&other)`
    pub fn and(&self, other: &Formula) -> Formula {
        Formula::binary(BinaryOp::And, self.clone(), other.clone())
    }

    /// Disjunction: `(self|other)`
    pub fn or(&self, other: &Formula) -> Formula {
        Formula::binary(BinaryOp::Or, self.clone(), other.clone())
    }

    /// Implication: `(self->other)`
    pub fn implies(&self, other: &Formula) -> Formula {
        Formula::binary(BinaryOp::Implies, self.clone(), other.clone())
    }

    /// Biconditional: `(self<->other)`
    pub fn iff(&self, other: &Formula) -> Formula {
        Formula::binary(BinaryOp::Iff, self.clone(), other.clone())
    }
}

/// Negation for references: `!&p` builds `~p`
///
/// # Examples
///
/// ```
/// use propositions::Formula;
///
/// let p = Formula::variable("p");
/// let q = Formula::variable("q");
/// let formula = &!&p | &q;
/// assert_eq!(formula.to_string(), "(~p|q)");
/// ```
impl Not for &Formula {
    type Output = Formula;

    fn not(self) -> Formula {
        Formula::not(self)
    }
}

/// Negation: `!p` (delegates to the reference version)
impl Not for Formula {
    type Output = Formula;

    fn not(self) -> Formula {
        Formula::not(&self)
    }
}

/// Conjunction for references: `&p & &q` builds `(p&q)`
impl BitAnd for &Formula {
    type Output = Formula;

    fn bitand(self, rhs: &Formula) -> Formula {
        self.and(rhs)
    }
}

/// Conjunction: `p & q`
impl BitAnd for Formula {
    type Output = Formula;

    fn bitand(self, rhs: Formula) -> Formula {
        Formula::binary(BinaryOp::And, self, rhs)
    }
}

/// Disjunction for references: `&p | &q` builds `(p|q)`
impl BitOr for &Formula {
    type Output = Formula;

    fn bitor(self, rhs: &Formula) -> Formula {
        self.or(rhs)
    }
}

/// Disjunction: `p | q`
impl BitOr for Formula {
    type Output = Formula;

    fn bitor(self, rhs: Formula) -> Formula {
        Formula::binary(BinaryOp::Or, self, rhs)
    }
}

/// Exclusive or for references: `&p ^ &q` builds `(p+q)`
impl BitXor for &Formula {
    type Output = Formula;

    fn bitxor(self, rhs: &Formula) -> Formula {
        Formula::binary(BinaryOp::Xor, self.clone(), rhs.clone())
    }
}

/// Exclusive or: `p ^ q`
impl BitXor for Formula {
    type Output = Formula;

    fn bitxor(self, rhs: Formula) -> Formula {
        Formula::binary(BinaryOp::Xor, self, rhs)
    }
}
