//! Tests for the formula module

use super::*;
use std::collections::HashMap;

fn parse(input: &str) -> Formula {
    Formula::parse(input).unwrap()
}

fn names(formula: &Formula) -> Vec<String> {
    formula.variables().iter().map(|v| v.to_string()).collect()
}

fn symbols(formula: &Formula) -> Vec<&'static str> {
    formula.operators().iter().map(|op| op.symbol()).collect()
}

// ========== Structure ==========

#[test]
fn test_root_and_children() {
    let formula = parse("(~p->q1)");
    assert_eq!(formula.root(), Root::Operator(Operator::Binary(BinaryOp::Implies)));

    let first = formula.first().unwrap();
    assert_eq!(first.root(), Root::Operator(Operator::Not));
    assert_eq!(first.first().unwrap().root(), Root::Variable("p"));
    assert!(first.second().is_none());

    let second = formula.second().unwrap();
    assert_eq!(second.root(), Root::Variable("q1"));
    assert!(second.first().is_none());
}

#[test]
fn test_constants_have_no_children() {
    for text in ["T", "F"] {
        let formula = parse(text);
        assert!(formula.first().is_none());
        assert!(formula.second().is_none());
        assert_eq!(formula.root().to_string(), text);
    }
}

#[test]
fn test_variables_are_sorted_and_deduplicated() {
    let formula = parse("((r|p)&(q->(p+~r)))");
    assert_eq!(names(&formula), vec!["p", "q", "r"]);
    assert!(parse("(T->~F)").variables().is_empty());
}

#[test]
fn test_operators_exclude_variables() {
    let formula = parse("((p-|T)<->~(q-&p))");
    assert_eq!(symbols(&formula), vec!["T", "~", "<->", "-&", "-|"]);
    assert!(parse("p7").operators().is_empty());
}

#[test]
fn test_depth() {
    assert_eq!(parse("p").depth(), 1);
    assert_eq!(parse("~~p").depth(), 3);
    assert_eq!(parse("((p&q)|~r)").depth(), 3);
}

#[test]
#[should_panic(expected = "not a variable name")]
fn test_variable_constructor_rejects_bad_name() {
    let _ = Formula::variable("a");
}

// ========== Equality ==========

#[test]
fn test_structural_equality() {
    let built = Formula::variable("p").and(&Formula::variable("q").not());
    let parsed = parse("(p&~q)");
    assert_eq!(built, parsed);
    assert_ne!(parsed, parse("(~q&p)"));
}

#[test]
fn test_equal_formulas_hash_equal() {
    use std::collections::hash_map::DefaultHasher;
    use std::hash::{Hash, Hasher};

    let hash = |formula: &Formula| {
        let mut hasher = DefaultHasher::new();
        formula.hash(&mut hasher);
        hasher.finish()
    };
    let built = Formula::binary(
        BinaryOp::Iff,
        Formula::constant(true),
        Formula::variable("x"),
    );
    assert_eq!(hash(&built), hash(&parse("(T<->x)")));

    let mut seen = std::collections::HashSet::new();
    seen.insert(built);
    assert!(seen.contains(&parse("(T<->x)")));
}

// ========== Parsing ==========

#[test]
fn test_parse_every_binary_operator() {
    for op in BinaryOp::ALL {
        let text = format!("(p{}q)", op.symbol());
        let formula = parse(&text);
        assert_eq!(formula.root(), Root::Operator(Operator::Binary(op)));
        assert_eq!(formula.to_string(), text);
    }
}

#[test]
fn test_operator_matching_is_longest_first() {
    assert_eq!(
        parse("(p<->q)").root(),
        Root::Operator(Operator::Binary(BinaryOp::Iff))
    );
    assert_eq!(
        parse("(p-|q)").root(),
        Root::Operator(Operator::Binary(BinaryOp::Nor))
    );
    // `<->` is consumed whole, so the stray `-` has to start the right operand.
    let err = Formula::parse("(p<->-q)").unwrap_err();
    assert!(matches!(
        err,
        FormulaParseError::InvalidLeadingCharacter { character: '-', position: 5, .. }
    ));
}

fn failure_kind(err: &FormulaParseError) -> &'static str {
    match err {
        FormulaParseError::UnexpectedEnd { .. } => "end",
        FormulaParseError::ExpectedBinaryOperator { .. } => "operator",
        FormulaParseError::ExpectedClosingParenthesis { .. } => "paren",
        FormulaParseError::InvalidLeadingCharacter { .. } => "lead",
        FormulaParseError::NestingTooDeep { .. } => "depth",
        FormulaParseError::TrailingInput { .. } => "trailing",
    }
}

#[test]
fn test_parse_failures() {
    let cases = [
        ("", "end", 0),
        ("~", "end", 1),
        ("(p", "operator", 2),
        ("(p#q)", "operator", 2),
        ("(p&q", "paren", 4),
        ("(p&q]", "paren", 4),
        ("a", "lead", 0),
        ("(p&(q|))", "lead", 6),
        ("p&q", "trailing", 1),
        ("(p&q))", "trailing", 5),
    ];
    for (input, kind, position) in cases {
        let err = Formula::parse(input).unwrap_err();
        assert_eq!(failure_kind(&err), kind, "{input:?} gave {err:?}");
        assert_eq!(err.position(), position, "{input:?}");
        assert_eq!(err.input(), input);
        assert!(!Formula::is_formula(input));
    }
}

#[test]
fn test_nesting_up_to_the_limit_parses() {
    let text = format!("{}p", "~".repeat(MAX_NESTING_DEPTH));
    let formula = parse(&text);
    assert_eq!(formula.depth(), MAX_NESTING_DEPTH + 1);
    assert_eq!(formula.to_string(), text);
}

#[test]
fn test_deep_nesting_is_an_error_not_a_stack_overflow() {
    let text = format!("{}p", "~".repeat(20_000));
    let err = Formula::parse(&text).unwrap_err();
    assert_eq!(failure_kind(&err), "depth");
    assert_eq!(err.position(), MAX_NESTING_DEPTH + 1);
    assert!(!Formula::is_formula(&text));

    let parens = format!("{}p{}", "(p&".repeat(20_000), ")".repeat(20_000));
    assert!(matches!(
        Formula::parse(&parens),
        Err(FormulaParseError::NestingTooDeep { limit: MAX_NESTING_DEPTH, .. })
    ));
}

#[test]
fn test_deep_polish_nesting_is_an_error() {
    let text = format!("{}{}", "&".repeat(20_000), "p".repeat(20_001));
    let err = Formula::parse_polish(&text).unwrap_err();
    assert_eq!(failure_kind(&err), "depth");
}

#[test]
fn test_parse_rejects_non_ascii_without_panicking() {
    let err = Formula::parse("(p∧q)").unwrap_err();
    assert!(matches!(err, FormulaParseError::ExpectedBinaryOperator { position: 2, .. }));
    let err = Formula::parse("¬p").unwrap_err();
    assert!(matches!(
        err,
        FormulaParseError::InvalidLeadingCharacter { character: '¬', .. }
    ));
}

#[test]
fn test_parse_rejects_whitespace() {
    assert!(!Formula::is_formula("(p & q)"));
    assert!(!Formula::is_formula(" p"));
}

#[test]
fn test_from_str() {
    let formula: Formula = "((p|q)->r)".parse().unwrap();
    assert_eq!(formula, parse("((p|q)->r)"));
}

// ========== Polish notation ==========

#[test]
fn test_polish_rendering() {
    assert_eq!(parse("p").polish(), "p");
    assert_eq!(parse("~~T").polish(), "~~T");
    assert_eq!(parse("((p12&q)<->~r)").polish(), "<->&p12q~r");
}

#[test]
fn test_parse_polish() {
    let formula = Formula::parse_polish("-&|pq->~rF").unwrap();
    assert_eq!(formula.to_string(), "((p|q)-&(~r->F))");
}

#[test]
fn test_parse_polish_failures() {
    assert!(matches!(
        Formula::parse_polish("&p"),
        Err(FormulaParseError::UnexpectedEnd { position: 2, .. })
    ));
    assert!(matches!(
        Formula::parse_polish("(p&q)"),
        Err(FormulaParseError::InvalidLeadingCharacter { character: '(', .. })
    ));
    assert!(matches!(
        Formula::parse_polish("pq"),
        Err(FormulaParseError::TrailingInput { position: 1, .. })
    ));
}

// ========== Substitution ==========

#[test]
fn test_substitute_variables_is_simultaneous() {
    let formula = parse("(p&q)");
    let map = HashMap::from([("p", parse("q")), ("q", parse("p"))]);
    assert_eq!(formula.substitute_variables(&map), parse("(q&p)"));
}

#[test]
fn test_substitute_variables_leaves_constants_and_unmapped() {
    let formula = parse("((T|r)->s)");
    let map = HashMap::from([(String::from("s"), parse("~F"))]);
    assert_eq!(formula.substitute_variables(&map), parse("((T|r)->~F)"));

    let empty: HashMap<&str, Formula> = HashMap::new();
    assert_eq!(formula.substitute_variables(&empty), formula);
}

#[test]
fn test_substitute_operators_composes_nested_rules() {
    let formula = parse("~(p->~T)");
    let map = HashMap::from([
        (Operator::True, parse("(p|~p)")),
        (Operator::Binary(BinaryOp::Implies), parse("(~p|q)")),
        (Operator::Not, parse("(p-&p)")),
    ]);
    let rewritten = formula.substitute_operators(&map).unwrap();
    // Templates are inserted verbatim, so their own `~` survives.
    assert_eq!(
        rewritten.to_string(),
        "((~p|((p|~p)-&(p|~p)))-&(~p|((p|~p)-&(p|~p))))"
    );
    assert_eq!(symbols(&rewritten), vec!["~", "|", "-&"]);
}

#[test]
fn test_substitute_operators_rejects_foreign_placeholders() {
    let formula = parse("~p");
    let map = HashMap::from([(Operator::Not, parse("(p-&q)"))]);
    let err = formula.substitute_operators(&map).unwrap_err();
    assert_eq!(
        err,
        SubstitutionError::InvalidPlaceholder {
            operator: Operator::Not,
            variable: std::sync::Arc::from("q"),
        }
    );

    let map = HashMap::from([(Operator::Binary(BinaryOp::Or), parse("(p&r)"))]);
    assert!(formula.substitute_operators(&map).is_err());
}

// ========== Operator overloading ==========

#[test]
fn test_operator_overloading() {
    let p = Formula::variable("p");
    let q = Formula::variable("q");
    assert_eq!((&p & &q).to_string(), "(p&q)");
    assert_eq!((&p | &!&q).to_string(), "(p|~q)");
    assert_eq!((p.clone() & q.clone()).to_string(), "(p&q)");
    assert_eq!((p.clone() | q.clone()).to_string(), "(p|q)");
    assert_eq!((p.clone() ^ q.clone()).to_string(), "(p+q)");
    assert_eq!((!(p.implies(&q))).to_string(), "~(p->q)");
    assert_eq!(p.iff(&q).to_string(), "(p<->q)");
}

#[test]
fn test_formula_is_send_and_sync() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Formula>();
}
