//! Parser and tree model for infix arithmetic over numeric literals and named variables.
//!
//! The [`parser::Parser`] turns a string such as `(x+2)*3` into a binary [`Node`] tree, which can
//! be printed back into fully parenthesized text through its [`Display`](std::fmt::Display)
//! implementation:
//!
//! ```
//! use symb_parser::parser::parse;
//!
//! let node = parse("(x+2)*3");
//! assert_eq!(node.to_string(), "((x+2)*3)");
//! ```
//!
//! [`Node`]: parser::ast::Node

pub mod parser;
pub mod tokenizer;
