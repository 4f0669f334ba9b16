use crate::parser::{ast::node::Node, fmt::fmt_binary, token::op::BinOpKind};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An operator node, such as `x+2`. Both children are always present.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Binary {
    /// The left-hand side of the operation.
    pub lhs: Box<Node>,

    /// The operator.
    pub op: BinOpKind,

    /// The right-hand side of the operation.
    pub rhs: Box<Node>,
}

impl Binary {
    /// Creates a new operator node.
    pub fn new(lhs: Node, op: BinOpKind, rhs: Node) -> Self {
        Self {
            lhs: Box::new(lhs),
            op,
            rhs: Box::new(rhs),
        }
    }
}

impl fmt::Display for Binary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt_binary(f, &self.lhs, self.op, &self.rhs)
    }
}
