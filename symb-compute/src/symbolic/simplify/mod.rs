//! Simplification of expression trees.
//!
//! The tree is simplified bottom-up, in a single pass: both children of an operator node are
//! simplified first, then the node itself is rewritten by the rule for its operator (see
//! [`rules`]) until it no longer changes. Sums and differences are flattened into a list of
//! terms and rebuilt with like terms combined, products are flattened into a list of factors and
//! rebuilt with like factors collected into powers, and a handful of identities are applied to
//! powers. Division is never rewritten.
//!
//! Terms and factors are told apart by their printed form, so `x*y` and `y*x` are different
//! terms. A rebuilt term or factor is a leaf holding that printed form, so the structure under it
//! is gone: `x*y*x` becomes the leaf `(x^2)` times `y`.
//!
//! Recursion depth is proportional to the depth of the tree.
//!
//! ```
//! use symb_compute::symbolic::simplify;
//! use symb_parser::parser::parse;
//!
//! let simplified = simplify(&parse("x+x+x"));
//! assert_eq!(simplified.to_string(), "(3*x)");
//! ```
//!
//! Applying [`simplify`] to its own output returns the same tree.

pub mod rules;
pub mod step;

use crate::symbolic::step_collector::StepCollector;
use step::Step;
use symb_parser::parser::ast::Node;

/// Accumulated values whose magnitude is below this are treated as zero, and two values closer
/// than this are treated as equal.
pub const EPSILON: f64 = 1e-10;

/// Returns true if the value is treated as zero.
pub(crate) fn is_zero(n: f64) -> bool {
    n.abs() < EPSILON
}

/// Returns true if the two values are treated as equal.
pub(crate) fn is_near(a: f64, b: f64) -> bool {
    is_zero(a - b)
}

/// Simplifies the children of the node, then the node itself.
fn inner_simplify(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Node {
    match node {
        Node::Leaf(_) => node.clone(),
        Node::Binary(binary) => {
            let lhs = inner_simplify(&binary.lhs, step_collector);
            let rhs = inner_simplify(&binary.rhs, step_collector);
            let mut node = Node::binary(lhs, binary.op, rhs);

            // a rebuilt factor like `x^2` can print the same as a factor next to it
            while let Some(next) = rules::all(&node, step_collector) {
                if next == node {
                    break;
                }
                node = next;
            }

            node
        },
    }
}

/// Simplifies the given tree, returning a new tree. The input is left untouched.
pub fn simplify(node: &Node) -> Node {
    inner_simplify(node, &mut ())
}

/// Simplifies the given tree, reporting every rewrite to the given [`StepCollector`].
pub fn simplify_with(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Node {
    inner_simplify(node, step_collector)
}

/// Simplifies the given tree, returning the simplified tree along with the rewrites that were
/// performed, in the order they were performed.
pub fn simplify_with_steps(node: &Node) -> (Node, Vec<Step>) {
    let mut steps = Vec::new();
    let simplified = inner_simplify(node, &mut steps);
    (simplified, steps)
}
