use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A rewrite performed by the simplifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Step {
    /// `2*x+3*x = 5*x`
    ///
    /// Two or more contributions to the same term of a sum were added together.
    CombineLikeTerms,

    /// `x-x = 0`
    ///
    /// A term whose coefficient summed to zero was removed from a sum.
    DropZeroTerm,

    /// `x*x = x^2`
    ///
    /// Two or more occurrences of the same factor of a product were collected into a power. The
    /// numeric factors of a product are collected here too, by adding them.
    CombineLikeFactors,

    /// `x*0 = x`
    ///
    /// A factor whose accumulated value was zero was removed from a product.
    DropZeroFactor,

    /// `a^1 = a`
    PowerOne,

    /// `a^0 = 1`
    PowerZero,

    /// `0^a = 0`
    PowerZeroLeft,

    /// `1^a = 1`
    PowerOneLeft,

    /// `2^3 = 8`
    PowerFold,
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let description = match self {
            Self::CombineLikeTerms => "combine like terms",
            Self::DropZeroTerm => "drop a term with a zero coefficient",
            Self::CombineLikeFactors => "combine like factors",
            Self::DropZeroFactor => "drop a factor with a zero exponent",
            Self::PowerOne => "a^1 = a",
            Self::PowerZero => "a^0 = 1",
            Self::PowerZeroLeft => "0^a = 0",
            Self::PowerOneLeft => "1^a = 1",
            Self::PowerFold => "evaluate a numeric power",
        };
        write!(f, "{}", description)
    }
}
