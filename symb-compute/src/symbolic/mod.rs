//! Algebraic manipulation of expression trees.
//!
//! # Expression representation
//!
//! This module works directly on the [`Node`] trees produced by [`symb_parser`]: a node is either
//! a leaf holding a token, or an operator with exactly two children. Every operation here takes
//! a tree by reference and builds a new tree, cloning any subtree it reuses.
//!
//! # Simplification
//!
//! [`simplify()`] rewrites a tree bottom-up in a single pass, combining like terms of sums and
//! like factors of products, and applying a few identities to powers. Terms and factors are
//! identified by their printed text, so the simplifier does not reorder anything:
//!
//! ```
//! use symb_compute::symbolic::simplify;
//! use symb_parser::parser::parse;
//!
//! assert_eq!(simplify(&parse("5*x+(2*x)")).to_string(), "(7*x)");
//!
//! // the parser splits on the last operator, so this is `(5*x+2)*x`
//! assert_eq!(simplify(&parse("5*x+2*x")).to_string(), "(((5*x)+2)*x)");
//! ```
//!
//! For more information, see the [`mod@simplify`] module.
//!
//! # Differentiation
//!
//! [`derivative()`] applies one rule per operator and simplifies the result. Quotients, and
//! powers other than the variable raised to a numeric exponent, cannot be differentiated.
//!
//! # Expressions
//!
//! [`Expression`] wraps an optional tree and exposes all of the above, along with the
//! combinators that join two expressions under a new operator.
//!
//! [`Node`]: symb_parser::parser::ast::Node

pub mod derivative;
pub mod expression;
pub mod simplify;
pub mod step_collector;

pub use derivative::{derivative, derivative_with, derivative_with_steps};
pub use expression::Expression;
pub use simplify::{simplify, simplify_with, simplify_with_steps};
pub use step_collector::StepCollector;
