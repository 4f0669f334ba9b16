//! Simplification of sums and differences, by combining like terms.

use crate::primitive::{node_number, num};
use crate::symbolic::{
    simplify::{is_near, is_zero, rules::{chain, do_add, Accumulator, Entry}, step::Step},
    step_collector::StepCollector,
};
use symb_parser::parser::{ast::{Binary, Node}, token::op::BinOpKind};

/// Walks a chain of `+` and `-` nodes, adding the contribution of each term, multiplied by the
/// running sign, to the accumulator. A `-` node negates the sign of its right-hand side only.
///
/// - `3` adds `3` to the constant bucket.
/// - `2*x` and `x*2` add `2` to the term `x`.
/// - `x*y` adds `1` to the term `x*y`, and `y*x` adds `1` to the different term `y*x`.
/// - Any other node adds `1` to the term identified by its printed form.
///
/// Contributions of exactly zero are skipped, so they never introduce a term.
fn collect_terms(node: &Node, sign: f64, terms: &mut Accumulator) {
    match node {
        Node::Binary(Binary { lhs, op: BinOpKind::Add, rhs }) => {
            collect_terms(lhs, sign, terms);
            collect_terms(rhs, sign, terms);
        },
        Node::Binary(Binary { lhs, op: BinOpKind::Sub, rhs }) => {
            collect_terms(lhs, sign, terms);
            collect_terms(rhs, -sign, terms);
        },
        Node::Binary(Binary { lhs, op: BinOpKind::Mul, rhs }) => {
            match (node_number(lhs), node_number(rhs)) {
                (Some(coeff), None) if coeff != 0.0 => {
                    terms.add_symbolic(rhs.to_string(), coeff * sign);
                },
                (None, Some(coeff)) if coeff != 0.0 => {
                    terms.add_symbolic(lhs.to_string(), coeff * sign);
                },
                (Some(_), None) | (None, Some(_)) => (),
                _ => terms.add_symbolic(format!("{}*{}", lhs, rhs), sign),
            }
        },
        _ => match node_number(node) {
            Some(value) if value != 0.0 => terms.add_constant(value * sign),
            Some(_) => (),
            None => terms.add_symbolic(node.to_string(), sign),
        },
    }
}

/// Builds the node for a single term with a non-zero coefficient. A symbolic term is emitted as
/// a leaf holding its printed form.
fn term_node(entry: Entry) -> Node {
    let Some(leaf) = entry.key.leaf() else {
        return num(entry.value);
    };

    if is_near(entry.value, 1.0) {
        leaf
    } else if is_near(entry.value, -1.0) {
        Node::binary(Node::leaf("0"), BinOpKind::Sub, leaf)
    } else {
        Node::binary(num(entry.value), BinOpKind::Mul, leaf)
    }
}

/// Combines like terms.
///
/// `x+x = 2*x`
/// `2*x+3*x = 5*x`
/// `x-x = 0`
/// `0+x = x`
///
/// A term whose coefficient is `-1` is written as `0-x`, since there is no unary negation. An
/// empty sum is `0`.
pub fn combine_like_terms(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    do_add(node, |binary| {
        let mut terms = Accumulator::default();
        let rhs_sign = if binary.op == BinOpKind::Sub { -1.0 } else { 1.0 };
        collect_terms(&binary.lhs, 1.0, &mut terms);
        collect_terms(&binary.rhs, rhs_sign, &mut terms);

        if terms.any_combined() {
            step_collector.push(Step::CombineLikeTerms);
        }

        let entries = terms.into_entries();
        let count = entries.len();
        let nodes = entries.into_iter()
            .filter(|entry| !is_zero(entry.value))
            .map(term_node)
            .collect::<Vec<_>>();

        if nodes.len() < count {
            step_collector.push(Step::DropZeroTerm);
        }

        Some(chain(nodes, BinOpKind::Add).unwrap_or_else(|| Node::leaf("0")))
    })
}

/// Applies all addition rules.
pub fn all(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    combine_like_terms(node, step_collector)
}
