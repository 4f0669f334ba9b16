use crate::parser::{ast::binary::Binary, fmt::fmt_leaf, token::op::BinOpKind};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A node of the expression tree.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Node {
    /// A token with no children, such as `2`, `3.14`, or `x`. The token is stored exactly as it
    /// appeared in the source, after trimming.
    Leaf(String),

    /// An operator applied to two children, such as `x+2`.
    Binary(Binary),
}

impl Node {
    /// Creates a leaf holding the given token.
    pub fn leaf(token: impl Into<String>) -> Self {
        Self::Leaf(token.into())
    }

    /// Creates an operator node over the two given children.
    pub fn binary(lhs: Node, op: BinOpKind, rhs: Node) -> Self {
        Self::Binary(Binary::new(lhs, op, rhs))
    }

    /// If the node is a leaf, returns its token.
    pub fn as_leaf(&self) -> Option<&str> {
        match self {
            Self::Leaf(token) => Some(token),
            Self::Binary(_) => None,
        }
    }

    /// If the node is an operator node, returns a reference to it.
    pub fn as_binary(&self) -> Option<&Binary> {
        match self {
            Self::Binary(binary) => Some(binary),
            Self::Leaf(_) => None,
        }
    }

    /// Returns true if the node is a leaf holding exactly the given token.
    pub fn is_leaf_token(&self, token: &str) -> bool {
        self.as_leaf() == Some(token)
    }

    /// Returns the operator of the node, or [`None`] for a leaf.
    pub fn op(&self) -> Option<BinOpKind> {
        self.as_binary().map(|binary| binary.op)
    }

    /// Returns the number of nodes in the tree, including this one.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            if let Self::Binary(binary) = node {
                stack.push(&binary.lhs);
                stack.push(&binary.rhs);
            }
        }
        count
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Leaf(token) => fmt_leaf(f, token),
            Self::Binary(binary) => binary.fmt(f),
        }
    }
}

impl From<Binary> for Node {
    fn from(binary: Binary) -> Self {
        Self::Binary(binary)
    }
}
