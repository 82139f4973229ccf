//! Symbols that may appear at the root of a formula
//!
//! A root is either a variable name or one of the ten fixed operator symbols.
//! The string-level predicates here are total: they accept any input and never
//! panic, which makes them usable for validating user-supplied names.

use std::fmt;

/// Check whether `symbol` is a variable name
///
/// A variable is a letter between `p` and `z` followed by an optional
/// sequence of ASCII digits.
///
/// # Examples
///
/// ```
/// use propositions::is_variable;
///
/// assert!(is_variable("p"));
/// assert!(is_variable("q12"));
/// assert!(!is_variable("a"));
/// assert!(!is_variable("p1x"));
/// assert!(!is_variable(""));
/// ```
pub fn is_variable(symbol: &str) -> bool {
    let mut bytes = symbol.bytes();
    match bytes.next() {
        Some(b'p'..=b'z') => bytes.all(|b| b.is_ascii_digit()),
        _ => false,
    }
}

/// Check whether `symbol` is one of the constants `T` or `F`
pub fn is_constant(symbol: &str) -> bool {
    symbol == "T" || symbol == "F"
}

/// Check whether `symbol` is the unary operator `~`
pub fn is_unary(symbol: &str) -> bool {
    symbol == "~"
}

/// Check whether `symbol` is one of the seven binary operators
pub fn is_binary(symbol: &str) -> bool {
    BinaryOp::from_symbol(symbol).is_some()
}

/// The seven binary connectives
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BinaryOp {
    /// Conjunction, `&`
    And,
    /// Disjunction, `|`
    Or,
    /// Implication, `->`
    Implies,
    /// Exclusive or, `+`
    Xor,
    /// Biconditional, `<->`
    Iff,
    /// Negated conjunction, `-&`
    Nand,
    /// Negated disjunction, `-|`
    Nor,
}

impl BinaryOp {
    /// Every binary operator, in declaration order
    pub const ALL: [BinaryOp; 7] = [
        BinaryOp::And,
        BinaryOp::Or,
        BinaryOp::Implies,
        BinaryOp::Xor,
        BinaryOp::Iff,
        BinaryOp::Nand,
        BinaryOp::Nor,
    ];

    /// Length in bytes of the longest operator symbol
    pub(crate) const MAX_SYMBOL_LEN: usize = 3;

    /// The textual symbol of this operator
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::And => "&",
            BinaryOp::Or => "|",
            BinaryOp::Implies => "->",
            BinaryOp::Xor => "+",
            BinaryOp::Iff => "<->",
            BinaryOp::Nand => "-&",
            BinaryOp::Nor => "-|",
        }
    }

    /// Look up the operator whose symbol is exactly `symbol`
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        BinaryOp::ALL.into_iter().find(|op| op.symbol() == symbol)
    }

    /// Apply the operator's truth function
    pub fn apply(self, first: bool, second: bool) -> bool {
        match self {
            BinaryOp::And => first && second,
            BinaryOp::Or => first || second,
            BinaryOp::Implies => !first || second,
            BinaryOp::Xor => first != second,
            BinaryOp::Iff => first == second,
            BinaryOp::Nand => !(first && second),
            BinaryOp::Nor => !(first || second),
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Any non-variable root symbol: a constant, negation or a binary connective
///
/// This is the element type of [`Formula::operators`] and the key type of the
/// template maps accepted by [`Formula::substitute_operators`].
///
/// [`Formula::operators`]: crate::Formula::operators
/// [`Formula::substitute_operators`]: crate::Formula::substitute_operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Operator {
    /// The constant `T`
    True,
    /// The constant `F`
    False,
    /// Negation, `~`
    Not,
    /// One of the binary connectives
    Binary(BinaryOp),
}

impl Operator {
    /// The operator for the constant `value`
    pub fn constant(value: bool) -> Self {
        if value {
            Operator::True
        } else {
            Operator::False
        }
    }

    /// The textual symbol of this operator
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::True => "T",
            Operator::False => "F",
            Operator::Not => "~",
            Operator::Binary(op) => op.symbol(),
        }
    }

    /// Number of operands: 0 for constants, 1 for `~`, 2 otherwise
    pub fn arity(self) -> usize {
        match self {
            Operator::True | Operator::False => 0,
            Operator::Not => 1,
            Operator::Binary(_) => 2,
        }
    }

    /// Look up the operator whose symbol is exactly `symbol`
    ///
    /// # Examples
    ///
    /// ```
    /// use propositions::{BinaryOp, Operator};
    ///
    /// assert_eq!(Operator::from_symbol("T"), Some(Operator::True));
    /// assert_eq!(Operator::from_symbol("<->"), Some(Operator::Binary(BinaryOp::Iff)));
    /// assert_eq!(Operator::from_symbol("p"), None);
    /// ```
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "T" => Some(Operator::True),
            "F" => Some(Operator::False),
            "~" => Some(Operator::Not),
            _ => BinaryOp::from_symbol(symbol).map(Operator::Binary),
        }
    }
}

impl From<BinaryOp> for Operator {
    fn from(op: BinaryOp) -> Self {
        Operator::Binary(op)
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
