//! # Propositions
//!
//! Syntax and semantics of propositional logic: parsing formulas into
//! immutable trees, evaluating them under models, checking tautologies,
//! printing truth tables, synthesizing formulas from truth tables, and
//! reducing formulas to smaller sets of connectives.
//!
//! ## Overview
//!
//! Formulas use a fully parenthesized infix syntax over variables `p`..`z`
//! (optionally followed by digits), the constants `T` and `F`, negation `~`
//! and seven binary connectives:
//!
//! | Symbol | Connective |
//! |--------|------------|
//! | `&`    | and        |
//! | `\|`   | or         |
//! | `->`   | implies    |
//! | `+`    | xor        |
//! | `<->`  | iff        |
//! | `-&`   | nand       |
//! | `-\|`  | nor        |
//!
//! ## Parsing and Building
//!
//! ```
//! use propositions::Formula;
//!
//! # fn main() -> Result<(), propositions::FormulaParseError> {
//! let parsed = Formula::parse("((p&q)->~r)")?;
//!
//! let p = Formula::variable("p");
//! let q = Formula::variable("q");
//! let r = Formula::variable("r");
//! let built = (&p & &q).implies(&!&r);
//!
//! assert_eq!(parsed, built);
//! assert_eq!(parsed.polish(), "->&pq~r");
//! assert!(!Formula::is_formula("(p&q"));
//! # Ok(())
//! # }
//! ```
//!
//! ## Semantics
//!
//! ```
//! use propositions::{all_models, is_tautology, truth_values, Formula};
//!
//! # fn main() -> Result<(), propositions::FormulaParseError> {
//! let formula = Formula::parse("(p->q)")?;
//! let values: Vec<bool> = truth_values(&formula, all_models(&["p", "q"])).collect();
//! assert_eq!(values, [true, true, false, true]);
//!
//! assert!(is_tautology(&Formula::parse("(p|~p)")?));
//! # Ok(())
//! # }
//! ```
//!
//! ## Synthesis and Reduction
//!
//! ```
//! use propositions::{equivalent, synthesize, OperatorSet};
//!
//! # fn main() -> Result<(), propositions::PropositionsError> {
//! let xor = synthesize(&["p", "q"], [false, true, true, false])?;
//! for set in OperatorSet::ALL {
//!     let reduced = set.reduce(&xor);
//!     assert!(set.contains_all(&reduced));
//!     assert!(equivalent(&xor, &reduced));
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Logging
//!
//! The crate logs through the [`log`] facade: reducer stages and synthesis
//! at `debug`, parse failures and truth-table construction at `trace`. No
//! logger is installed by the library.
//!
//! ## Thread Safety
//!
//! [`Formula`] is `Send + Sync`. Children are shared through `Arc` and the
//! cached rendering and symbol sets are write-once `OnceLock` fields, so a
//! formula can be handed to other threads freely.

// Public modules
pub mod error;
pub mod formula;
pub mod reduce;
pub mod semantics;
pub mod synthesis;

// Re-export high-level public API
pub use error::PropositionsError;
pub use formula::{
    is_binary, is_constant, is_unary, is_variable, BinaryOp, ExprNode, Formula,
    FormulaParseError, Operator, Root, SubstitutionError, MAX_NESTING_DEPTH,
};
pub use reduce::{
    to_implies_false, to_implies_not, to_nand, to_not_and, to_not_and_or, OperatorSet,
    ParseOperatorSetError,
};
pub use semantics::{
    all_models, equivalent, evaluate, is_contradiction, is_model, is_satisfiable, is_tautology,
    print_truth_table, truth_values, try_evaluate, write_truth_table, AllModels,
    EvaluationError, Model, TruthTable, TruthTableConfig,
};
pub use synthesis::{synthesize, synthesize_cnf, SynthesisError};
