//! Evaluation of formulas under a model

use super::error::EvaluationError;
use super::Model;
use crate::formula::{is_variable, Formula, FormulaAst};

/// Check that every key of `model` is a variable name
pub fn is_model(model: &Model) -> bool {
    model.keys().all(|name| is_variable(name))
}

/// Evaluate `formula` under `model`
///
/// Constants evaluate to themselves, variables are looked up in the model and
/// every connective applies its usual truth function. Extra keys in the model
/// are ignored.
///
/// # Panics
///
/// Panics if the model assigns no value to one of the formula's variables.
/// Use [`try_evaluate`] to get an error instead.
///
/// # Examples
///
/// ```
/// use propositions::{evaluate, Formula, Model};
/// use std::sync::Arc;
///
/// # fn main() -> Result<(), propositions::FormulaParseError> {
/// let formula = Formula::parse("(p&q)")?;
/// let model = Model::from([(Arc::from("p"), true), (Arc::from("q"), false)]);
/// assert!(!evaluate(&formula, &model));
/// # Ok(())
/// # }
/// ```
pub fn evaluate(formula: &Formula, model: &Model) -> bool {
    match try_evaluate(formula, model) {
        Ok(value) => value,
        Err(err) => panic!("Cannot evaluate {}: {}", formula, err),
    }
}

/// Evaluate `formula` under `model`, reporting unassigned variables
pub fn try_evaluate(formula: &Formula, model: &Model) -> Result<bool, EvaluationError> {
    match formula.ast() {
        FormulaAst::Constant(value) => Ok(*value),
        FormulaAst::Variable(name) => {
            model
                .get(name)
                .copied()
                .ok_or_else(|| EvaluationError::UnassignedVariable {
                    variable: name.clone(),
                })
        }
        FormulaAst::Not(inner) => Ok(!try_evaluate(inner, model)?),
        FormulaAst::Binary(op, first, second) => {
            let first_value = try_evaluate(first, model)?;
            let second_value = try_evaluate(second, model)?;
            Ok(op.apply(first_value, second_value))
        }
    }
}

/// Evaluate `formula` under each of `models`, lazily and in order
///
/// # Panics
///
/// The returned iterator panics on a model that misses one of the formula's
/// variables, as [`evaluate`] does.
pub fn truth_values<'a, I>(formula: &'a Formula, models: I) -> impl Iterator<Item = bool> + 'a
where
    I: IntoIterator<Item = Model>,
    I::IntoIter: 'a,
{
    models
        .into_iter()
        .map(move |model| evaluate(formula, &model))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn model(pairs: &[(&str, bool)]) -> Model {
        pairs
            .iter()
            .map(|(name, value)| (Arc::from(*name), *value))
            .collect()
    }

    #[test]
    fn test_evaluate_connectives() {
        let m = model(&[("p", true), ("q", false)]);
        let cases = [
            ("(p&q)", false),
            ("(p|q)", true),
            ("(p->q)", false),
            ("(q->p)", true),
            ("(p+q)", true),
            ("(p<->q)", false),
            ("(p-&q)", true),
            ("(p-|q)", false),
            ("~q", true),
            ("T", true),
            ("~T", false),
            ("(F|p)", true),
        ];
        for (text, expected) in cases {
            let formula = Formula::parse(text).unwrap();
            assert_eq!(evaluate(&formula, &m), expected, "{text}");
        }
    }

    #[test]
    fn test_extra_keys_are_ignored() {
        let formula = Formula::parse("~r").unwrap();
        let m = model(&[("p", true), ("r", true), ("z9", false)]);
        assert!(!evaluate(&formula, &m));
    }

    #[test]
    fn test_try_evaluate_reports_missing_variable() {
        let formula = Formula::parse("(p|q)").unwrap();
        let m = model(&[("p", false)]);
        assert_eq!(
            try_evaluate(&formula, &m),
            Err(EvaluationError::UnassignedVariable {
                variable: Arc::from("q")
            })
        );
    }

    #[test]
    #[should_panic(expected = "no value to variable 'q'")]
    fn test_evaluate_panics_on_missing_variable() {
        let formula = Formula::parse("(p|q)").unwrap();
        evaluate(&formula, &model(&[("p", false)]));
    }

    #[test]
    fn test_is_model() {
        assert!(is_model(&model(&[("p", true), ("q12", false)])));
        assert!(is_model(&Model::new()));
        assert!(!is_model(&model(&[("a", true)])));
    }

    #[test]
    fn test_truth_values_preserve_order() {
        let formula = Formula::parse("(p->q)").unwrap();
        let models = vec![
            model(&[("p", true), ("q", false)]),
            model(&[("p", false), ("q", false)]),
            model(&[("p", true), ("q", true)]),
        ];
        let values: Vec<bool> = truth_values(&formula, models).collect();
        assert_eq!(values, vec![false, true, true]);
    }
}
