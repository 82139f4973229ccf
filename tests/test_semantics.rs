//! Integration tests for evaluation, model enumeration and truth tables

use propositions::{
    all_models, evaluate, is_contradiction, is_satisfiable, is_tautology, truth_values,
    try_evaluate, write_truth_table, EvaluationError, Formula, Model, TruthTable,
    TruthTableConfig,
};
use std::collections::HashSet;
use std::fs;
use std::io::Write;
use std::sync::Arc;

fn model(pairs: &[(&str, bool)]) -> Model {
    pairs
        .iter()
        .map(|(name, value)| (Arc::from(*name), *value))
        .collect()
}

#[test]
fn test_concrete_evaluation() {
    let formula = Formula::parse("(p&q)").unwrap();
    assert!(!evaluate(&formula, &model(&[("p", true), ("q", false)])));
    assert!(evaluate(&formula, &model(&[("p", true), ("q", true)])));
}

#[test]
fn test_try_evaluate_missing_variable() {
    let formula = Formula::parse("(p->r)").unwrap();
    let err = try_evaluate(&formula, &model(&[("p", true)])).unwrap_err();
    assert_eq!(
        err,
        EvaluationError::UnassignedVariable {
            variable: Arc::from("r")
        }
    );
    assert!(err.to_string().contains("'r'"));
}

#[test]
fn test_all_models_count_and_distinctness() {
    for n in 0..=5 {
        let vars: Vec<String> = (0..n).map(|i| format!("x{}", i)).collect();
        let models: Vec<Model> = all_models(&vars).collect();
        assert_eq!(models.len(), 1 << n);

        let rows: HashSet<Vec<bool>> = models
            .iter()
            .map(|m| vars.iter().map(|v| m[v.as_str()]).collect())
            .collect();
        assert_eq!(rows.len(), 1 << n);
    }
}

#[test]
fn test_truth_values_follow_model_order() {
    let formula = Formula::parse("(p+q)").unwrap();
    let values: Vec<bool> = truth_values(&formula, all_models(&["p", "q"])).collect();
    assert_eq!(values, [false, true, true, false]);
}

#[test]
fn test_semantic_checks() {
    assert!(is_tautology(&Formula::parse("(p|~p)").unwrap()));
    assert!(!is_satisfiable(&Formula::parse("(p&~p)").unwrap()));
    assert!(is_contradiction(&Formula::parse("~(p->p)").unwrap()));

    let contingent = Formula::parse("((p->q)&r)").unwrap();
    assert!(!is_tautology(&contingent));
    assert!(!is_contradiction(&contingent));
    assert!(is_satisfiable(&contingent));
}

#[test]
fn test_constant_only_formulas() {
    assert!(is_tautology(&Formula::parse("(F->T)").unwrap()));
    assert!(is_contradiction(&Formula::parse("(T-&T)").unwrap()));
}

#[test]
fn test_truth_table_rendering() {
    let table = TruthTable::new(&Formula::parse("~(p10&q)").unwrap());
    let expected = "\
| p10 | q | ~(p10&q) |
|-----|---|----------|
| F   | F | T        |
| F   | T | T        |
| T   | F | T        |
| T   | T | F        |
";
    assert_eq!(table.to_string(), expected);
}

#[test]
fn test_write_truth_table_to_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let formula = Formula::parse("(p<->q)").unwrap();
    write_truth_table(&formula, &TruthTableConfig::binary(), &mut file).unwrap();
    file.flush().unwrap();

    let content = fs::read_to_string(file.path()).unwrap();
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 6);
    assert_eq!(lines[0], "| p | q | (p<->q) |");
    assert_eq!(lines[2], "| 0 | 0 | 1       |");
    assert_eq!(lines[5], "| 1 | 1 | 1       |");
}
