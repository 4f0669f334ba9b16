//! Structural validation of source text before strict parsing.

use crate::{
    parser::error::{kind, Error},
    tokenizer::{tokenize_complete, Token, TokenKind},
};
use std::ops::Range;

/// What the previous significant token allows to come next.
#[derive(Debug, Clone, PartialEq)]
enum Prev {
    /// Start of input: an operand is expected.
    Start,

    /// An operator, which must be followed by an operand.
    Operator(char, Range<usize>),

    /// An opening parenthesis, which must be followed by an operand.
    Open(Range<usize>),

    /// An atom, which a touching atom extends. The kind is that of the last token in it.
    Atom(TokenKind, Range<usize>),

    /// A closed group.
    Group(Range<usize>),
}

impl Prev {
    /// Returns the span of the previous operand, if the previous token completed one.
    fn operand_span(&self) -> Option<&Range<usize>> {
        match self {
            Self::Atom(_, span) | Self::Group(span) => Some(span),
            Self::Start | Self::Operator(..) | Self::Open(_) => None,
        }
    }
}

/// Checks the source for unbalanced parentheses, operators with a missing operand, operands with
/// no operator between them, and empty input. All problems found are returned, in source order.
///
/// A run of characters with no operator, parenthesis, or whitespace in it is a single atom, such
/// as `1e3`, `x'` or `a$b`. The exception is a number directly followed by a name, like `2x`,
/// which is reported as a missing operator.
pub fn validate(source: &str) -> Result<(), Vec<Error>> {
    let tokens = tokenize_complete(source);
    let mut errors = Vec::new();
    let mut open_parens: Vec<Range<usize>> = Vec::new();
    let mut prev = Prev::Start;

    for Token { span, kind: token_kind, lexeme } in tokens.iter().filter(|token| !token.is_whitespace()) {
        match token_kind {
            TokenKind::OpenParen => {
                if let Some(prev_span) = prev.operand_span() {
                    errors.push(Error::new(vec![prev_span.clone(), span.clone()], kind::AdjacentAtoms));
                }
                open_parens.push(span.clone());
                prev = Prev::Open(span.clone());
            },
            TokenKind::CloseParen => {
                let Some(open) = open_parens.pop() else {
                    errors.push(Error::new(vec![span.clone()], kind::UnopenedParenthesis));
                    continue;
                };

                match &prev {
                    Prev::Open(_) => {
                        errors.push(Error::new(vec![open.start..span.end], kind::EmptyExpression));
                    },
                    Prev::Operator(op, op_span) => {
                        errors.push(Error::new(vec![op_span.clone()], kind::MissingOperand { op: *op, before: false }));
                    },
                    Prev::Start | Prev::Atom(..) | Prev::Group(_) => (),
                }
                prev = Prev::Group(open.start..span.end);
            },
            token_kind if token_kind.is_operator() => {
                let op = lexeme.chars().next().unwrap_or_default();
                if prev.operand_span().is_none() {
                    errors.push(Error::new(vec![span.clone()], kind::MissingOperand { op, before: true }));
                }
                prev = Prev::Operator(op, span.clone());
            },
            _ => match &mut prev {
                Prev::Atom(prev_kind, prev_span)
                    if prev_span.end == span.start
                        && !(*prev_kind == TokenKind::Number && *token_kind == TokenKind::Name) =>
                {
                    prev_span.end = span.end;
                    *prev_kind = *token_kind;
                },
                _ => {
                    if let Some(prev_span) = prev.operand_span() {
                        errors.push(Error::new(vec![prev_span.clone(), span.clone()], kind::AdjacentAtoms));
                    }
                    prev = Prev::Atom(*token_kind, span.clone());
                },
            },
        }
    }

    match prev {
        Prev::Start => errors.push(Error::new(vec![0..source.len()], kind::EmptyExpression)),
        Prev::Operator(op, op_span) => {
            errors.push(Error::new(vec![op_span], kind::MissingOperand { op, before: false }));
        },
        Prev::Open(_) | Prev::Atom(..) | Prev::Group(_) => (),
    }

    for open in open_parens {
        errors.push(Error::new(vec![open], kind::UnclosedParenthesis));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kind::*;

    /// Validates the source and returns the spans of each error, asserting that every error is of
    /// kind `T`.
    fn error_spans<T: symb_error::ErrorKind + 'static>(source: &str) -> Vec<Vec<Range<usize>>> {
        let errors = validate(source).unwrap_err();
        errors.into_iter()
            .map(|err| {
                assert!(err.is::<T>(), "unexpected error kind: {:?}", err.kind);
                err.spans
            })
            .collect()
    }

    #[test]
    fn valid_inputs() {
        for source in ["x+2", "(x+2)*3", " 5*x + 2*x ", "((x))", "x^2/y-1.5", "(a)+(b)"] {
            assert!(validate(source).is_ok(), "{source}");
        }
    }

    #[test]
    fn empty_input() {
        assert_eq!(error_spans::<EmptyExpression>(""), vec![vec![0..0]]);
        assert_eq!(error_spans::<EmptyExpression>("   "), vec![vec![0..3]]);
    }

    #[test]
    fn empty_group() {
        assert_eq!(error_spans::<EmptyExpression>("x*()"), vec![vec![2..4]]);
    }

    #[test]
    fn unclosed_paren() {
        assert_eq!(error_spans::<UnclosedParenthesis>("(x+2"), vec![vec![0..1]]);
    }

    #[test]
    fn unopened_paren() {
        assert_eq!(error_spans::<UnopenedParenthesis>("x+2)"), vec![vec![3..4]]);
    }

    #[test]
    fn leading_operator() {
        let errors = validate("-x").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].downcast_ref::<MissingOperand>(),
            Some(&MissingOperand { op: '-', before: true }),
        );
    }

    #[test]
    fn trailing_operator() {
        let errors = validate("x*").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].spans, vec![1..2]);
        assert_eq!(
            errors[0].downcast_ref::<MissingOperand>(),
            Some(&MissingOperand { op: '*', before: false }),
        );
    }

    #[test]
    fn operator_before_close() {
        let errors = validate("(x+)").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(
            errors[0].downcast_ref::<MissingOperand>(),
            Some(&MissingOperand { op: '+', before: false }),
        );
    }

    #[test]
    fn implicit_product() {
        assert_eq!(error_spans::<AdjacentAtoms>("2x"), vec![vec![0..1, 1..2]]);
        assert_eq!(error_spans::<AdjacentAtoms>("x y"), vec![vec![0..1, 2..3]]);
        assert_eq!(error_spans::<AdjacentAtoms>("2(x)"), vec![vec![0..1, 1..2]]);
    }

    #[test]
    fn touching_atoms_are_one_atom() {
        for source in ["1e3*x", "ππ+1", "x'+1", "a$b", "2.5.1", "x2"] {
            assert!(validate(source).is_ok(), "{source}");
        }
        assert_eq!(error_spans::<AdjacentAtoms>("1e3x"), vec![vec![0..3, 3..4]]);
        assert_eq!(error_spans::<AdjacentAtoms>("x' y"), vec![vec![0..2, 3..4]]);
    }

    #[test]
    fn reports_every_problem() {
        let errors = validate("(2x+").unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors[0].is::<AdjacentAtoms>());
        assert!(errors[1].is::<MissingOperand>());
        assert!(errors[2].is::<UnclosedParenthesis>());
    }
}
