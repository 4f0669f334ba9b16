//! Algebraic manipulation of the expression trees produced by [`symb_parser`].
//!
//! See the [`symbolic`] module for simplification, differentiation, and the [`Expression`]
//! wrapper.
//!
//! [`Expression`]: symbolic::Expression

pub mod primitive;
pub mod symbolic;
