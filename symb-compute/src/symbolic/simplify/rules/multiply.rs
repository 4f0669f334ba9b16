//! Simplification of products, by combining like factors.

use crate::primitive::{node_number, num};
use crate::symbolic::{
    simplify::{is_near, is_zero, rules::{chain, do_multiply, Accumulator, Entry}, step::Step},
    step_collector::StepCollector,
};
use symb_parser::parser::{ast::{Binary, Node}, token::op::BinOpKind};

/// Walks a chain of `*` nodes. The value of a numeric leaf is added to the constant bucket, and
/// any other node adds `1` to the exponent of the factor identified by its printed form. Factors
/// are emitted as leaves holding that printed form.
fn collect_factors(node: &Node, factors: &mut Accumulator) {
    match node {
        Node::Binary(Binary { lhs, op: BinOpKind::Mul, rhs }) => {
            collect_factors(lhs, factors);
            collect_factors(rhs, factors);
        },
        _ => match node_number(node) {
            Some(value) => factors.add_constant(value),
            None => factors.add_symbolic(node.to_string(), 1.0),
        },
    }
}

/// Combines like factors.
///
/// `x*x = x^2`
/// `x*y*x = x^2*y`
///
/// Numeric factors are added together rather than multiplied, so `2*3 = 5` and `x*0 = x`. The
/// resulting constant leads the product unless it is `1`. An empty product is `1`.
pub fn combine_like_factors(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    do_multiply(node, |binary| {
        let mut factors = Accumulator::default();
        collect_factors(&binary.lhs, &mut factors);
        collect_factors(&binary.rhs, &mut factors);

        if factors.any_combined() {
            step_collector.push(Step::CombineLikeFactors);
        }

        let mut constant = None;
        let mut rest = Vec::new();
        let mut dropped = false;
        for Entry { key, value, .. } in factors.into_entries() {
            match key.leaf() {
                _ if is_zero(value) => dropped = true,
                None if is_near(value, 1.0) => (),
                None => constant = Some(num(value)),
                Some(leaf) if is_near(value, 1.0) => rest.push(leaf),
                Some(leaf) => rest.push(Node::binary(leaf, BinOpKind::Exp, num(value))),
            }
        }

        if dropped {
            step_collector.push(Step::DropZeroFactor);
        }

        Some(chain(constant.into_iter().chain(rest), BinOpKind::Mul).unwrap_or_else(|| Node::leaf("1")))
    })
}

/// Applies all multiplication rules.
pub fn all(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    combine_like_factors(node, step_collector)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use symb_parser::parser::parse;
    use super::*;

    fn combined(source: &str) -> Option<String> {
        combine_like_factors(&parse(source), &mut ()).map(|node| node.to_string())
    }

    #[test]
    fn only_applies_to_products() {
        assert_eq!(combined("x+y"), None);
        assert_eq!(combined("x/y"), None);
        assert_eq!(combined("7"), None);
    }

    #[test]
    fn constant_leads() {
        assert_eq!(combined("x*3").as_deref(), Some("(3*x)"));
        assert_eq!(combined("x*y*2").as_deref(), Some("((2*x)*y)"));
    }

    #[test]
    fn repeated_factors_become_powers() {
        assert_eq!(combined("x*x*x").as_deref(), Some("(x^3)"));
        assert_eq!(combined("y*(x+1)*(x+1)").as_deref(), Some("(y*((x+1)^2))"));
    }

    #[test]
    fn constants_are_added() {
        assert_eq!(combined("2*x*4").as_deref(), Some("(6*x)"));
        assert_eq!(combined("0.5*0.5").as_deref(), Some("1"));
        assert_eq!(combined("1*1*1").as_deref(), Some("3"));
    }

    #[test]
    fn factors_are_emitted_as_leaves() {
        let node = combine_like_factors(&parse("y*(x+1)*(x+1)"), &mut ()).unwrap();
        assert_eq!(node, Node::binary(
            Node::leaf("y"),
            BinOpKind::Mul,
            Node::binary(Node::leaf("(x+1)"), BinOpKind::Exp, Node::leaf("2")),
        ));
    }

    #[test]
    fn zero_constant_is_dropped() {
        let mut steps = Vec::new();
        let node = combine_like_factors(&parse("y*0"), &mut steps).unwrap();
        assert_eq!(node, Node::leaf("y"));
        assert_eq!(steps, vec![Step::DropZeroFactor]);
    }
}
