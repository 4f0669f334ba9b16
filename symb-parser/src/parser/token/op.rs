//! The binary operators understood by the parser.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The binary operation that is being performed.
///
/// There is no precedence between these operators: the parser always splits on the last one
/// found outside of parentheses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum BinOpKind {
    Exp,
    Mul,
    Div,
    Add,
    Sub,
}

impl BinOpKind {
    /// All operators, in no particular order.
    pub const ALL: [BinOpKind; 5] = [
        BinOpKind::Exp,
        BinOpKind::Mul,
        BinOpKind::Div,
        BinOpKind::Add,
        BinOpKind::Sub,
    ];

    /// Returns the operator written as the given character, if any.
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '^' => Some(Self::Exp),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            '+' => Some(Self::Add),
            '-' => Some(Self::Sub),
            _ => None,
        }
    }

    /// Returns the character used to write the operator.
    pub fn symbol(self) -> char {
        match self {
            Self::Exp => '^',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Add => '+',
            Self::Sub => '-',
        }
    }

    /// Returns true if the operator is `+` or `-`.
    pub fn is_additive(self) -> bool {
        matches!(self, Self::Add | Self::Sub)
    }
}

impl fmt::Display for BinOpKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}
