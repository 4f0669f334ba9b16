//! Printing of expression trees as fully parenthesized infix text.
//!
//! Every operator node is wrapped in its own pair of parentheses, so the printed text contains at
//! most one operator per parenthesis level and parses back into the same tree.

use std::fmt::{Formatter, Result};
use super::{ast::Node, token::op::BinOpKind};

/// Formats a leaf: its token, verbatim.
pub fn fmt_leaf(f: &mut Formatter, token: &str) -> Result {
    write!(f, "{}", token)
}

/// Formats an operator node as `(lhs op rhs)`, with no spaces.
pub fn fmt_binary(f: &mut Formatter, lhs: &Node, op: BinOpKind, rhs: &Node) -> Result {
    write!(f, "({}{}{})", lhs, op, rhs)
}

/// Prints the given tree. An absent tree prints as the empty string.
pub fn print(node: Option<&Node>) -> String {
    node.map(Node::to_string).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn leaf_is_verbatim() {
        assert_eq!(print(Some(&Node::leaf("3.50"))), "3.50");
        assert_eq!(print(Some(&Node::leaf("x y"))), "x y");
    }

    #[test]
    fn nested_binary() {
        let node = Node::binary(
            Node::binary(Node::leaf("x"), BinOpKind::Add, Node::leaf("2")),
            BinOpKind::Mul,
            Node::leaf("3"),
        );
        assert_eq!(print(Some(&node)), "((x+2)*3)");
    }

    #[test]
    fn absent_tree() {
        assert_eq!(print(None), "");
    }
}
