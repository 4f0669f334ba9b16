//! Functions to read numbers out of leaf tokens and to build numeric leaves.
//!
//! All numeric work is done with [`f64`]. A token is a number if it parses as a finite [`f64`];
//! anything else, including `inf` and `NaN`, is treated as a symbol.

use symb_parser::parser::ast::Node;

/// Parses the token as a number. Never fails loudly: a token that is not a number returns
/// [`None`].
pub fn number(token: &str) -> Option<f64> {
    token.trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
}

/// Returns true if the token is a number.
pub fn is_number(token: &str) -> bool {
    number(token).is_some()
}

/// If the node is a leaf holding a number, returns the number.
pub fn node_number(node: &Node) -> Option<f64> {
    node.as_leaf().and_then(number)
}

/// Returns true if the node is a leaf holding a number.
pub fn is_node_number(node: &Node) -> bool {
    node_number(node).is_some()
}

/// Formats a number the way it is stored in a leaf: integral values have no fractional part, and
/// negative zero is written as `0`.
pub fn fmt_number(n: f64) -> String {
    if n == 0.0 {
        String::from("0")
    } else {
        n.to_string()
    }
}

/// Creates a leaf holding the given number.
pub fn num(n: f64) -> Node {
    Node::leaf(fmt_number(n))
}
