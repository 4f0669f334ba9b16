use ariadne::Fmt;
use symb_attrs::ErrorKind;
use symb_error::EXPR;

/// The derivative of the subexpression cannot be computed symbolically. This happens for every
/// quotient, and for every power that is not the variable raised to a numeric exponent.
#[derive(Debug, Clone, ErrorKind, PartialEq)]
#[error(
    message = format!("cannot differentiate `{}`", expr),
    labels = ["this subexpression"],
    help = format!(
        "only sums, differences, products, and powers like `{}` can be differentiated",
        "x^2".fg(EXPR),
    ),
)]
pub struct DerivativeUnsupported {
    /// The printed form of the subexpression.
    pub expr: String,
}
