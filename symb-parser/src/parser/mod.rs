pub mod ast;
pub mod error;
pub mod fmt;
pub mod token;
mod validate;

use ast::Node;
use error::Error;
use token::op::BinOpKind;
pub use validate::validate;

/// How an outer pair of parentheses is removed from a substring before it is split.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Strip {
    /// Strip one leading `(` and one trailing `)` if both are present, whether or not they match
    /// each other.
    Outer,

    /// Strip leading `(` and trailing `)` pairs, as long as they enclose the whole substring,
    /// trimming whitespace after each layer.
    Matched,
}

impl Strip {
    /// Applies the strip to the given (already trimmed) substring.
    fn apply(self, expr: &str) -> &str {
        match self {
            Self::Outer => {
                if expr.len() >= 2 && expr.starts_with('(') && expr.ends_with(')') {
                    &expr[1..expr.len() - 1]
                } else {
                    expr
                }
            },
            Self::Matched => {
                let mut expr = expr;
                while encloses(expr) {
                    expr = expr[1..expr.len() - 1].trim();
                }
                expr
            },
        }
    }
}

/// Returns true if the string starts with `(` and the `)` matching it is the last character.
fn encloses(expr: &str) -> bool {
    if !expr.starts_with('(') {
        return false;
    }

    let mut depth = 0usize;
    for (i, b) in expr.bytes().enumerate() {
        match b {
            b'(' => depth += 1,
            b')' => {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return i == expr.len() - 1;
                }
            },
            _ => (),
        }
    }

    false
}

/// Finds the last operator in the string that is not nested inside parentheses. There is no
/// precedence: `5*x+2*x` splits on its second `*`.
///
/// The depth counter goes up on `)` and down on `(`, since the scan runs from the end of the
/// string to its start.
fn split_point(expr: &str) -> Option<(usize, BinOpKind)> {
    let mut depth = 0isize;
    for (i, b) in expr.bytes().enumerate().rev() {
        match b {
            b')' => depth += 1,
            b'(' => depth -= 1,
            _ if depth == 0 => {
                if let Some(op) = BinOpKind::from_char(b as char) {
                    return Some((i, op));
                }
            },
            _ => (),
        }
    }

    None
}

/// Recursively splits the substring into a tree.
fn parse_node(expr: &str, strip: Strip) -> Node {
    let expr = strip.apply(expr.trim());

    match split_point(expr) {
        Some((i, op)) => Node::binary(
            parse_node(&expr[..i], strip),
            op,
            parse_node(&expr[i + 1..], strip),
        ),
        None => Node::leaf(expr),
    }
}

/// A parser for infix arithmetic. This is the type to use to turn a piece of source code into an
/// expression tree.
///
/// The default [`Parser::parse`] accepts any input and never fails: malformed input produces a
/// tree that may not mean what was intended. [`Parser::try_parse_full`] validates the input first
/// and reports every problem it finds.
#[derive(Debug, Clone)]
pub struct Parser<'source> {
    /// The source code being parsed.
    source: &'source str,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source.
    pub fn new(source: &'source str) -> Self {
        Self { source }
    }

    /// Returns the source code being parsed.
    pub fn source(&self) -> &'source str {
        self.source
    }

    /// Parses the source into a tree, without any validation.
    ///
    /// At each level, the substring is trimmed, one outer pair of parentheses is stripped if the
    /// substring both starts with `(` and ends with `)`, and the substring is split on its last
    /// operator outside of parentheses. A substring with no such operator becomes a leaf holding
    /// the substring verbatim.
    ///
    /// # Recursion
    ///
    /// Every operator in a chain like `a+b+c+...` adds a level of recursion, here and in every
    /// operation on the resulting tree. Inputs with on the order of a hundred thousand chained
    /// operators can overflow the default stack; run them on a thread with a larger stack.
    pub fn parse(&self) -> Node {
        parse_node(self.source, Strip::Outer)
    }

    /// Validates the source, then parses it into a tree.
    ///
    /// The tree is split on the same operators as [`Parser::parse`], but an outer pair of
    /// parentheses is only stripped when the two parentheses match each other, so `(a)+(b)` is
    /// split on `+`.
    pub fn try_parse_full(&self) -> Result<Node, Vec<Error>> {
        validate(self.source)?;
        Ok(parse_node(self.source, Strip::Matched))
    }
}

/// Parses the given source into a tree, without any validation. See [`Parser::parse`].
pub fn parse(source: &str) -> Node {
    Parser::new(source).parse()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn leaf(token: &str) -> Node {
        Node::leaf(token)
    }

    fn bin(lhs: Node, op: BinOpKind, rhs: Node) -> Node {
        Node::binary(lhs, op, rhs)
    }

    #[test]
    fn single_leaf() {
        assert_eq!(parse("x"), leaf("x"));
        assert_eq!(parse("  3.14 "), leaf("3.14"));
    }

    #[test]
    fn simple_sum() {
        let node = parse("x+2");
        assert_eq!(node, bin(leaf("x"), BinOpKind::Add, leaf("2")));
        assert_eq!(node.to_string(), "(x+2)");
    }

    #[test]
    fn parenthesized_product() {
        let node = parse("(x+2)*3");
        assert_eq!(node, bin(
            bin(leaf("x"), BinOpKind::Add, leaf("2")),
            BinOpKind::Mul,
            leaf("3"),
        ));
        assert_eq!(node.to_string(), "((x+2)*3)");
    }

    #[test]
    fn splits_on_last_operator() {
        assert_eq!(parse("5*x+2*x"), bin(
            bin(bin(leaf("5"), BinOpKind::Mul, leaf("x")), BinOpKind::Add, leaf("2")),
            BinOpKind::Mul,
            leaf("x"),
        ));
        assert_eq!(parse("2*3^4"), bin(
            bin(leaf("2"), BinOpKind::Mul, leaf("3")),
            BinOpKind::Exp,
            leaf("4"),
        ));
        assert_eq!(parse("2^3*4"), bin(
            bin(leaf("2"), BinOpKind::Exp, leaf("3")),
            BinOpKind::Mul,
            leaf("4"),
        ));
    }

    #[test]
    fn left_chains_of_one_operator() {
        assert_eq!(parse("a-b-c"), bin(
            bin(leaf("a"), BinOpKind::Sub, leaf("b")),
            BinOpKind::Sub,
            leaf("c"),
        ));
    }

    #[test]
    fn whitespace_around_operators() {
        assert_eq!(parse(" 5*x + 2 "), bin(
            bin(leaf("5"), BinOpKind::Mul, leaf("x")),
            BinOpKind::Add,
            leaf("2"),
        ));
    }

    #[test]
    fn multi_character_atoms() {
        assert_eq!(parse("foo/12.5"), bin(leaf("foo"), BinOpKind::Div, leaf("12.5")));
    }

    #[test]
    fn adjacent_atoms_stay_one_leaf() {
        assert_eq!(parse("2x"), leaf("2x"));
        assert_eq!(parse("x y+1"), bin(leaf("x y"), BinOpKind::Add, leaf("1")));
    }

    #[test]
    fn strips_unmatched_outer_parens() {
        // the leading `(` and trailing `)` do not match each other, but are stripped anyway
        assert_eq!(parse("(a)+(b)"), leaf("a)+(b"));
    }

    #[test]
    fn strips_one_layer_per_level() {
        assert_eq!(parse("((x))"), leaf("(x)"));
        assert_eq!(parse("( x )"), leaf(" x "));
    }

    #[test]
    fn malformed_input_still_parses() {
        assert_eq!(parse(""), leaf(""));
        assert_eq!(parse("-x"), bin(leaf(""), BinOpKind::Sub, leaf("x")));
        assert_eq!(parse("x*"), bin(leaf("x"), BinOpKind::Mul, leaf("")));
        assert_eq!(parse("(x+2"), bin(leaf("(x"), BinOpKind::Add, leaf("2")));
    }

    #[test]
    fn printed_trees_parse_back() {
        let trees = [
            bin(leaf("x"), BinOpKind::Add, leaf("2")),
            bin(bin(leaf("x"), BinOpKind::Add, leaf("y")), BinOpKind::Add, bin(leaf("1"), BinOpKind::Add, leaf("z"))),
            bin(leaf("a"), BinOpKind::Mul, bin(leaf("b"), BinOpKind::Mul, leaf("c"))),
            bin(bin(leaf("x"), BinOpKind::Exp, leaf("2")), BinOpKind::Exp, leaf("3")),
            bin(leaf("x"), BinOpKind::Div, bin(leaf("y"), BinOpKind::Div, leaf("2"))),
        ];

        for tree in trees {
            assert_eq!(parse(&tree.to_string()), tree);
        }
    }

    #[test]
    fn strict_matches_permissive_on_valid_input() {
        for source in ["x+2", "(x+2)*3", "5*x+2*x", "a-b-c", "((x+1)^2)/y", "1e3*x", "ππ+1", "x'+1"] {
            assert_eq!(Parser::new(source).try_parse_full().unwrap(), parse(source), "{source}");
        }
    }

    #[test]
    fn strict_strips_only_matching_parens() {
        assert_eq!(
            Parser::new("(a)+(b)").try_parse_full().unwrap(),
            bin(leaf("a"), BinOpKind::Add, leaf("b")),
        );
        assert_eq!(Parser::new("((x))").try_parse_full().unwrap(), leaf("x"));
        assert_eq!(Parser::new("( x )").try_parse_full().unwrap(), leaf("x"));
    }

    #[test]
    fn long_chains() {
        let source = vec!["x"; 2000].join("+");
        let node = parse(&source);
        assert_eq!(node.node_count(), 3999);
        assert_eq!(Parser::new(&source).try_parse_full().unwrap(), node);
    }

    #[test]
    fn strict_rejects_malformed_input() {
        for source in ["", "2x", "-x", "(x+2", "x+2)", "x*()"] {
            assert!(Parser::new(source).try_parse_full().is_err(), "{source}");
        }
    }
}
