//! Symbolic differentiation.
//!
//! The derivative is built by structural recursion over the tree, one rule per operator, then
//! simplified:
//!
//! | Node            | Derivative                                                         |
//! | --------------- | ------------------------------------------------------------------ |
//! | `f + g`         | `f' + g'`                                                          |
//! | `f - g`         | `f' - g'`                                                          |
//! | `x * g`         | `g`, if `g` is not a numeric literal (and symmetrically `f * x`)    |
//! | `f * g`         | `f' * g + f * g'`                                                  |
//! | `x ^ n`         | `n * x^(n - 1)`, if `n` is a numeric literal                       |
//! | `x`             | `1`                                                                |
//! | any other leaf  | `0`                                                                |
//!
//! where `x` is the variable. Every other node, including every quotient, fails with
//! [`DerivativeUnsupported`].
//!
//! ```
//! use symb_compute::symbolic::derivative;
//! use symb_parser::parser::parse;
//!
//! let d = derivative(&parse("x^2"), "x").unwrap();
//! assert_eq!(d.to_string(), "(2*x)");
//! ```

pub mod error;
pub mod step;

use crate::primitive::{is_node_number, node_number, num};
use crate::symbolic::{simplify::simplify, step_collector::StepCollector};
use error::DerivativeUnsupported;
use step::DerivativeStep;
use symb_error::Error;
use symb_parser::parser::{ast::{Binary, Node}, token::op::BinOpKind};

/// Builds the error for a node that cannot be differentiated. `offset` is the position of the
/// node in the printed form of the whole tree.
fn unsupported(node: &Node, offset: usize) -> Error {
    let expr = node.to_string();
    Error::new(vec![offset..offset + expr.len()], DerivativeUnsupported { expr })
}

/// Differentiates the node with respect to `var`, without simplifying the result.
///
/// `offset` is the position of the node in the printed form of the whole tree, and is used to
/// point errors at the offending subexpression.
fn derive(
    node: &Node,
    var: &str,
    offset: usize,
    step_collector: &mut dyn StepCollector<DerivativeStep>,
) -> Result<Node, Error> {
    let Node::Binary(Binary { lhs, op, rhs }) = node else {
        return Ok(if node.is_leaf_token(var) {
            step_collector.push(DerivativeStep::Variable);
            Node::leaf("1")
        } else {
            step_collector.push(DerivativeStep::Constant);
            Node::leaf("0")
        });
    };

    // the printed node is `(lhs op rhs)`
    let lhs_offset = offset + 1;
    let rhs_offset = lhs_offset + lhs.to_string().len() + 1;

    match op {
        BinOpKind::Add | BinOpKind::Sub => {
            step_collector.push(if *op == BinOpKind::Add {
                DerivativeStep::SumRule
            } else {
                DerivativeStep::DifferenceRule
            });
            Ok(Node::binary(
                derive(lhs, var, lhs_offset, step_collector)?,
                *op,
                derive(rhs, var, rhs_offset, step_collector)?,
            ))
        },
        BinOpKind::Mul => {
            if lhs.is_leaf_token(var) && !is_node_number(rhs) {
                step_collector.push(DerivativeStep::ConstantMultiple);
                Ok((**rhs).clone())
            } else if rhs.is_leaf_token(var) && !is_node_number(lhs) {
                step_collector.push(DerivativeStep::ConstantMultiple);
                Ok((**lhs).clone())
            } else {
                step_collector.push(DerivativeStep::ProductRule);
                let d_lhs = derive(lhs, var, lhs_offset, step_collector)?;
                let d_rhs = derive(rhs, var, rhs_offset, step_collector)?;
                Ok(Node::binary(
                    Node::binary(d_lhs, BinOpKind::Mul, (**rhs).clone()),
                    BinOpKind::Add,
                    Node::binary((**lhs).clone(), BinOpKind::Mul, d_rhs),
                ))
            }
        },
        BinOpKind::Exp => match node_number(rhs) {
            Some(n) if lhs.is_leaf_token(var) => {
                step_collector.push(DerivativeStep::PowerRule);
                Ok(Node::binary(
                    num(n),
                    BinOpKind::Mul,
                    Node::binary((**lhs).clone(), BinOpKind::Exp, num(n - 1.0)),
                ))
            },
            _ => Err(unsupported(node, offset)),
        },
        BinOpKind::Div => Err(unsupported(node, offset)),
    }
}

/// Computes the simplified derivative of the tree with respect to the variable `var`.
///
/// Returns [`Err`] with a [`DerivativeUnsupported`] error if the tree contains a node that cannot
/// be differentiated. The span of the error is the position of that node in the printed form of
/// the input tree.
pub fn derivative(node: &Node, var: &str) -> Result<Node, Error> {
    derivative_with(node, var, &mut ())
}

/// Computes the simplified derivative of the tree, reporting every differentiation rule applied
/// to the given [`StepCollector`].
pub fn derivative_with(
    node: &Node,
    var: &str,
    step_collector: &mut dyn StepCollector<DerivativeStep>,
) -> Result<Node, Error> {
    let derived = derive(node, var, 0, step_collector)?;
    Ok(simplify(&derived))
}

/// Computes the simplified derivative of the tree, along with the differentiation rules that were
/// applied, in the order they were applied.
pub fn derivative_with_steps(node: &Node, var: &str) -> Result<(Node, Vec<DerivativeStep>), Error> {
    let mut steps = Vec::new();
    let derived = derivative_with(node, var, &mut steps)?;
    Ok((derived, steps))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use symb_parser::parser::parse;
    use super::*;

    fn derived(source: &str, var: &str) -> String {
        derivative(&parse(source), var).unwrap().to_string()
    }

    /// Differentiates the source with respect to `x`, expecting a failure, and returns the
    /// offending subexpression and its span.
    fn failure(source: &str) -> (String, Vec<std::ops::Range<usize>>) {
        let err = derivative(&parse(source), "x").unwrap_err();
        let kind = err.downcast_ref::<DerivativeUnsupported>().unwrap();
        (kind.expr.clone(), err.spans.clone())
    }

    #[test]
    fn leaves() {
        assert_eq!(derived("x", "x"), "1");
        assert_eq!(derived("y", "x"), "0");
        assert_eq!(derived("5", "x"), "0");
    }

    #[test]
    fn power_rule() {
        assert_eq!(derived("x^2", "x"), "(2*x)");
        assert_eq!(derived("x^3", "x"), "(3*(x^2))");
        assert_eq!(derived("x^0.5", "x"), "(0.5*(x^-0.5))");
    }

    #[test]
    fn sums_and_differences() {
        assert_eq!(derived("x^2+x", "x"), "((2*x)+1)");
        assert_eq!(derived("x^2-x", "x"), "((2*x)+-1)");
        assert_eq!(derived("x+y", "x"), "1");
    }

    #[test]
    fn variable_times_symbol() {
        assert_eq!(derived("x*y", "x"), "y");
        assert_eq!(derived("y*x", "x"), "y");
    }

    #[test]
    fn variable_times_itself() {
        // the other factor is taken as the coefficient, even though it is the variable
        assert_eq!(derived("x*x", "x"), "x");
    }

    #[test]
    fn numeric_coefficient_goes_through_product_rule() {
        // `0*x + 3*1`, where `0*x` simplifies to `x` and `3*1` to `4`
        assert_eq!(derived("3*x", "x"), "(x+4)");
    }

    #[test]
    fn other_variable() {
        assert_eq!(derived("y^2", "y"), "(2*y)");
        assert_eq!(derived("y^2+x", "y"), "(2*y)");
    }

    #[test]
    fn quotient_fails() {
        assert_eq!(failure("x/2"), ("(x/2)".to_string(), vec![0..5]));
    }

    #[test]
    fn nested_failure_points_at_subexpression() {
        // printed as `(x+(y/2))`
        assert_eq!(failure("x+(y/2)"), ("(y/2)".to_string(), vec![3..8]));
    }

    #[test]
    fn unsupported_powers() {
        assert_eq!(failure("2^x").0, "(2^x)");
        assert_eq!(failure("x^y").0, "(x^y)");
        assert_eq!(failure("(x+1)^2").0, "((x+1)^2)");
        assert_eq!(failure("y^2").0, "(y^2)");
    }

    #[test]
    fn steps_are_recorded() {
        let (node, steps) = derivative_with_steps(&parse("x^2+y"), "x").unwrap();
        assert_eq!(node.to_string(), "(2*x)");
        assert_eq!(steps, vec![
            DerivativeStep::SumRule,
            DerivativeStep::PowerRule,
            DerivativeStep::Constant,
        ]);
    }
}
