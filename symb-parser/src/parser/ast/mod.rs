//! The expression tree produced by the parser.
//!
//! A tree is made of two kinds of [`Node`]s: leaves holding a single token (a number, a variable
//! name, or any other atom), and [`Binary`] operator nodes that always own exactly two children.
//! Subtrees are never shared; reusing one in another tree means cloning it.

pub mod binary;
pub mod node;

pub use binary::Binary;
pub use node::Node;
