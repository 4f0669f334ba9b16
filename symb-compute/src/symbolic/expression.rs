use crate::symbolic::{
    derivative::{derivative, derivative_with_steps, step::DerivativeStep},
    simplify::{simplify, simplify_with_steps, step::Step},
};
use std::{fmt, ops, str::FromStr};
use symb_error::Error;
use symb_parser::parser::{ast::Node, fmt::print, parse, token::op::BinOpKind, Parser};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An expression, holding an optional tree.
///
/// An [`Expression`] is created empty, or from a string or a tree. Simplifying or differentiating
/// it returns a new [`Expression`] and never changes the original one. The combinators
/// [`Expression::add`], [`Expression::subtract`], [`Expression::multiply`], and
/// [`Expression::divide`] place copies of both trees under a new operator node, and simplify the
/// result.
///
/// ```
/// use symb_compute::symbolic::Expression;
///
/// let a = Expression::parse("5*x");
/// let b = Expression::parse("2*x");
/// assert_eq!(a.add(&b).to_string(), "(7*x)");
/// assert_eq!((&a * &b).to_string(), "(7*(x^2))");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Expression {
    /// The tree of the expression, if any.
    root: Option<Node>,
}

impl Expression {
    /// Creates an empty expression.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an expression from a tree.
    pub fn from_root(root: Node) -> Self {
        Self { root: Some(root) }
    }

    /// Parses the source into an expression, without any validation. See [`parse`].
    pub fn parse(source: &str) -> Self {
        Self::from_root(parse(source))
    }

    /// Parses the source and replaces the tree of this expression with the result.
    pub fn parse_expression(&mut self, source: &str) {
        self.root = Some(parse(source));
    }

    /// Validates the source, then parses it into an expression. See [`Parser::try_parse_full`].
    pub fn try_parse(source: &str) -> Result<Self, Vec<Error>> {
        Parser::new(source).try_parse_full().map(Self::from_root)
    }

    /// Returns the tree of the expression, if any.
    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    /// Consumes the expression, returning its tree.
    pub fn into_root(self) -> Option<Node> {
        self.root
    }

    /// Returns true if the expression has no tree.
    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Returns the simplified expression. An empty expression stays empty.
    pub fn simplify(&self) -> Self {
        Self { root: self.root.as_ref().map(simplify) }
    }

    /// Returns the simplified expression along with the rewrites that were performed.
    pub fn simplify_with_steps(&self) -> (Self, Vec<Step>) {
        match &self.root {
            Some(root) => {
                let (root, steps) = simplify_with_steps(root);
                (Self::from_root(root), steps)
            },
            None => (Self::new(), Vec::new()),
        }
    }

    /// Returns the simplified derivative of the expression with respect to `var`. The derivative
    /// of an empty expression is empty.
    ///
    /// Error spans point into the printed form of this expression.
    pub fn derivative(&self, var: &str) -> Result<Self, Error> {
        Ok(Self { root: self.root.as_ref().map(|root| derivative(root, var)).transpose()? })
    }

    /// Returns the simplified derivative of the expression, along with the differentiation rules
    /// that were applied.
    pub fn derivative_with_steps(&self, var: &str) -> Result<(Self, Vec<DerivativeStep>), Error> {
        match &self.root {
            Some(root) => {
                let (root, steps) = derivative_with_steps(root, var)?;
                Ok((Self::from_root(root), steps))
            },
            None => Ok((Self::new(), Vec::new())),
        }
    }

    /// Places copies of both trees under a new operator node and simplifies the result. If either
    /// expression is empty, the result is empty.
    fn combine(&self, op: BinOpKind, other: &Self) -> Self {
        match (&self.root, &other.root) {
            (Some(lhs), Some(rhs)) => {
                Self::from_root(simplify(&Node::binary(lhs.clone(), op, rhs.clone())))
            },
            _ => Self::new(),
        }
    }

    /// Returns the simplified sum of the two expressions.
    pub fn add(&self, other: &Self) -> Self {
        self.combine(BinOpKind::Add, other)
    }

    /// Returns the simplified difference of the two expressions.
    pub fn subtract(&self, other: &Self) -> Self {
        self.combine(BinOpKind::Sub, other)
    }

    /// Returns the simplified product of the two expressions.
    pub fn multiply(&self, other: &Self) -> Self {
        self.combine(BinOpKind::Mul, other)
    }

    /// Returns the quotient of the two expressions. Quotients are not simplified, but both trees
    /// are.
    pub fn divide(&self, other: &Self) -> Self {
        self.combine(BinOpKind::Div, other)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", print(self.root.as_ref()))
    }
}

impl FromStr for Expression {
    type Err = Vec<Error>;

    /// Parses with validation. See [`Expression::try_parse`].
    fn from_str(source: &str) -> Result<Self, Self::Err> {
        Self::try_parse(source)
    }
}

impl From<Node> for Expression {
    fn from(root: Node) -> Self {
        Self::from_root(root)
    }
}

/// Implements an arithmetic operator for `&Expression` through one of the combinators.
macro_rules! impl_op {
    ($trait:ident, $method:ident, $combinator:ident) => {
        impl ops::$trait for &Expression {
            type Output = Expression;

            fn $method(self, rhs: Self) -> Expression {
                Expression::$combinator(self, rhs)
            }
        }
    };
}

impl_op!(Add, add, add);
impl_op!(Sub, sub, subtract);
impl_op!(Mul, mul, multiply);
impl_op!(Div, div, divide);
