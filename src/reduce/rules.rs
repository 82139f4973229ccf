//! Rewrite templates for each reduction stage
//!
//! Every template is a closed formula over the placeholders `p` and `q` and
//! uses only the operators allowed by its stage, constants included, since
//! constant templates are inserted without further rewriting.

use crate::formula::{BinaryOp, Formula, Operator};
use std::collections::HashMap;
use std::sync::OnceLock;

/// Template map keyed by the operator it eliminates
pub(super) type Rules = HashMap<Operator, Formula>;

fn placeholders() -> (Formula, Formula) {
    (Formula::variable("p"), Formula::variable("q"))
}

fn binary(op: BinaryOp) -> Operator {
    Operator::Binary(op)
}

/// `{~, &, |}` from any operator
pub(super) fn not_and_or() -> &'static Rules {
    static RULES: OnceLock<Rules> = OnceLock::new();
    RULES.get_or_init(|| {
        let (p, q) = placeholders();
        HashMap::from([
            (Operator::True, p.or(&p.not())),
            (Operator::False, p.and(&p.not())),
            (binary(BinaryOp::Implies), p.not().or(&q)),
            (
                binary(BinaryOp::Xor),
                p.and(&q.not()).or(&p.not().and(&q)),
            ),
            (
                binary(BinaryOp::Iff),
                p.and(&q).or(&p.not().and(&q.not())),
            ),
            (binary(BinaryOp::Nand), p.and(&q).not()),
            (binary(BinaryOp::Nor), p.or(&q).not()),
        ])
    })
}

/// `{~, &}` from `{~, &, |}`
pub(super) fn not_and() -> &'static Rules {
    static RULES: OnceLock<Rules> = OnceLock::new();
    RULES.get_or_init(|| {
        let (p, q) = placeholders();
        HashMap::from([(binary(BinaryOp::Or), p.not().and(&q.not()).not())])
    })
}

/// `{-&}` from `{~, &}`
pub(super) fn nand() -> &'static Rules {
    static RULES: OnceLock<Rules> = OnceLock::new();
    RULES.get_or_init(|| {
        let (p, q) = placeholders();
        let nand = |a: &Formula, b: &Formula| Formula::binary(BinaryOp::Nand, a.clone(), b.clone());
        let p_nand_q = nand(&p, &q);
        HashMap::from([
            (Operator::Not, nand(&p, &p)),
            (binary(BinaryOp::And), nand(&p_nand_q, &p_nand_q)),
        ])
    })
}

/// `{->, ~}` from any operator
pub(super) fn implies_not() -> &'static Rules {
    static RULES: OnceLock<Rules> = OnceLock::new();
    RULES.get_or_init(|| {
        let (p, q) = placeholders();
        let p_implies_p = p.implies(&p);
        // (p+q) is true iff the two implications disagree
        let xor = p.implies(&q).implies(&q.implies(&p).not());
        HashMap::from([
            (Operator::True, p_implies_p.clone()),
            (Operator::False, p_implies_p.not()),
            (binary(BinaryOp::And), p.implies(&q.not()).not()),
            (binary(BinaryOp::Or), p.not().implies(&q)),
            (binary(BinaryOp::Iff), xor.not()),
            (binary(BinaryOp::Xor), xor),
            (binary(BinaryOp::Nand), p.implies(&q.not())),
            (binary(BinaryOp::Nor), p.not().implies(&q).not()),
        ])
    })
}

/// `{->, F}` from `{->, ~}`
pub(super) fn implies_false() -> &'static Rules {
    static RULES: OnceLock<Rules> = OnceLock::new();
    RULES.get_or_init(|| {
        let (p, _) = placeholders();
        HashMap::from([(Operator::Not, p.implies(&Formula::constant(false)))])
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::semantics::equivalent;
    use std::collections::BTreeSet;

    fn check_stage(rules: &Rules, allowed: &[Operator]) {
        let allowed: BTreeSet<Operator> = allowed.iter().copied().collect();
        let (p, q) = placeholders();
        for (operator, template) in rules {
            assert!(
                template.operators().is_subset(&allowed),
                "{operator} template {template} leaves its stage"
            );
            let original = match *operator {
                Operator::True => Formula::constant(true),
                Operator::False => Formula::constant(false),
                Operator::Not => p.not(),
                Operator::Binary(op) => Formula::binary(op, p.clone(), q.clone()),
            };
            assert!(
                equivalent(&original, template),
                "{operator} template {template} is not equivalent to {original}"
            );
        }
    }

    #[test]
    fn test_not_and_or_templates() {
        check_stage(
            not_and_or(),
            &[Operator::Not, binary(BinaryOp::And), binary(BinaryOp::Or)],
        );
    }

    #[test]
    fn test_not_and_templates() {
        check_stage(not_and(), &[Operator::Not, binary(BinaryOp::And)]);
    }

    #[test]
    fn test_nand_templates() {
        check_stage(nand(), &[binary(BinaryOp::Nand)]);
    }

    #[test]
    fn test_implies_not_templates() {
        let rules = implies_not();
        assert_eq!(rules.len(), 8);
        check_stage(rules, &[Operator::Not, binary(BinaryOp::Implies)]);
    }

    #[test]
    fn test_implies_false_templates() {
        check_stage(
            implies_false(),
            &[Operator::False, binary(BinaryOp::Implies)],
        );
    }
}
