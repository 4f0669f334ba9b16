//! Errors reported by strict parsing. The default parser never produces any of these.

use ariadne::Fmt;
use symb_attrs::ErrorKind;
use symb_error::EXPR;

/// The source code contained no expression at all.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "empty expression",
    labels = [format!("expected an {} here", "expression".fg(EXPR))],
)]
pub struct EmptyExpression;

/// An opening parenthesis was never closed.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unclosed parenthesis",
    labels = ["this parenthesis is never closed"],
    help = format!("add a closing parenthesis `{}` somewhere after it", ")".fg(EXPR)),
)]
pub struct UnclosedParenthesis;

/// A closing parenthesis had no matching opening parenthesis.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "unopened parenthesis",
    labels = ["this parenthesis closes nothing"],
    help = "remove it, or add an opening parenthesis before it",
)]
pub struct UnopenedParenthesis;

/// An operator was missing one of its operands.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("missing operand for `{}`", op),
    labels = [if *before {
        format!("expected an {} before this operator", "expression".fg(EXPR))
    } else {
        format!("expected an {} after this operator", "expression".fg(EXPR))
    }],
    help = "there are no unary operators; write `0-x` instead of `-x`",
)]
pub struct MissingOperand {
    /// The operator that is missing an operand.
    pub op: char,

    /// The missing operand is the left-hand side. (Otherwise, it is the right-hand side.)
    pub before: bool,
}

/// Two atoms were written next to each other without an operator between them.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = "missing operator between two operands",
    labels = ["this operand", "is followed by this one"],
    help = format!("products must be explicit: write `{}` instead of `{}`", "2*x".fg(EXPR), "2x"),
)]
pub struct AdjacentAtoms;
