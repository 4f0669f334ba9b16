use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A differentiation rule applied by the differentiator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DerivativeStep {
    /// `(f + g)' = f' + g'`
    SumRule,

    /// `(f - g)' = f' - g'`
    DifferenceRule,

    /// `(x * c)' = c`
    ///
    /// One factor is the variable and the other is not a numeric literal; the other factor is
    /// taken to be the coefficient.
    ConstantMultiple,

    /// `(f * g)' = f' * g + f * g'`
    ProductRule,

    /// `(x ^ n)' = n * x^(n - 1)`
    PowerRule,

    /// `x' = 1`
    Variable,

    /// `c' = 0`, for any leaf other than the variable.
    Constant,
}

impl fmt::Display for DerivativeStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let description = match self {
            Self::SumRule => "sum rule",
            Self::DifferenceRule => "difference rule",
            Self::ConstantMultiple => "constant multiple",
            Self::ProductRule => "product rule",
            Self::PowerRule => "power rule",
            Self::Variable => "derivative of the variable",
            Self::Constant => "derivative of a constant",
        };
        write!(f, "{}", description)
    }
}
