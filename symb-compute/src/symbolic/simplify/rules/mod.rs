//! Implementation of the simplification rules.
//!
//! Each rule is a function that takes an operator node, whose children have already been
//! simplified, and returns `Some(node)` with the rewritten node if the rule applies to it, or
//! `None` if it does not.

pub mod add;
pub mod multiply;
pub mod power;

use crate::symbolic::step_collector::StepCollector;
use super::step::Step;
use symb_parser::parser::{ast::{Binary, Node}, token::op::BinOpKind};

/// If the node is a sum or a difference, calls the given transformation function with it.
///
/// Returns `Some(node)` with the transformed node if a transformation was applied.
pub(crate) fn do_add(node: &Node, f: impl FnOnce(&Binary) -> Option<Node>) -> Option<Node> {
    match node {
        Node::Binary(binary) if binary.op.is_additive() => f(binary),
        _ => None,
    }
}

/// If the node is a product, calls the given transformation function with it.
///
/// Returns `Some(node)` with the transformed node if a transformation was applied.
pub(crate) fn do_multiply(node: &Node, f: impl FnOnce(&Binary) -> Option<Node>) -> Option<Node> {
    match node {
        Node::Binary(binary) if binary.op == BinOpKind::Mul => f(binary),
        _ => None,
    }
}

/// If the node is a power, calls the given transformation function with the left and right-hand
/// side of the power.
///
/// Returns `Some(node)` with the transformed node if a transformation was applied.
pub(crate) fn do_power(node: &Node, f: impl FnOnce(&Node, &Node) -> Option<Node>) -> Option<Node> {
    match node {
        Node::Binary(Binary { lhs, op: BinOpKind::Exp, rhs }) => f(lhs, rhs),
        _ => None,
    }
}

/// Identifies a term of a sum, or a factor of a product.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Key {
    /// The bucket that numeric literals are accumulated into.
    Constant,

    /// A symbolic term or factor, identified by its printed form. When the sum or product is
    /// rebuilt, it is emitted as a leaf holding this text.
    Symbolic(String),
}

impl Key {
    /// Returns the leaf emitted for a symbolic key, or [`None`] for the constant bucket.
    pub fn leaf(&self) -> Option<Node> {
        match self {
            Self::Constant => None,
            Self::Symbolic(printed) => Some(Node::leaf(printed.as_str())),
        }
    }
}

/// A term or factor with its accumulated value.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Entry {
    pub key: Key,

    /// The accumulated coefficient of a term, or exponent of a factor.
    pub value: f64,

    /// How many contributions were accumulated into this entry.
    pub contributions: usize,
}

/// Accumulates values by [`Key`], keeping the keys in the order they were first seen.
#[derive(Debug, Default)]
pub(crate) struct Accumulator {
    entries: Vec<Entry>,
}

impl Accumulator {
    /// Finds the constant entry if `printed` is [`None`], or the symbolic entry with the given
    /// printed form otherwise.
    fn entry(&mut self, printed: Option<&str>) -> Option<&mut Entry> {
        self.entries.iter_mut().find(|entry| match (&entry.key, printed) {
            (Key::Constant, None) => true,
            (Key::Symbolic(key), Some(printed)) => key == printed,
            _ => false,
        })
    }

    /// Adds the value to the constant bucket.
    pub fn add_constant(&mut self, value: f64) {
        match self.entry(None) {
            Some(entry) => {
                entry.value += value;
                entry.contributions += 1;
            },
            None => self.entries.push(Entry { key: Key::Constant, value, contributions: 1 }),
        }
    }

    /// Adds the value to the entry with the given printed form.
    pub fn add_symbolic(&mut self, printed: String, value: f64) {
        match self.entry(Some(&printed)) {
            Some(entry) => {
                entry.value += value;
                entry.contributions += 1;
            },
            None => self.entries.push(Entry {
                key: Key::Symbolic(printed),
                value,
                contributions: 1,
            }),
        }
    }

    /// Returns true if any entry received more than one contribution.
    pub fn any_combined(&self) -> bool {
        self.entries.iter().any(|entry| entry.contributions > 1)
    }

    /// Returns the entries, in the order their keys were first seen.
    pub fn into_entries(self) -> Vec<Entry> {
        self.entries
    }
}

/// Joins the nodes left-to-right with the given operator: `[a, b, c]` becomes `((a op b) op c)`.
/// Returns [`None`] if there are no nodes.
pub(crate) fn chain(nodes: impl IntoIterator<Item = Node>, op: BinOpKind) -> Option<Node> {
    nodes.into_iter().reduce(|acc, node| Node::binary(acc, op, node))
}

/// Applies the rule for the operator of the node.
pub fn all(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    add::all(node, step_collector)
        .or_else(|| multiply::all(node, step_collector))
        .or_else(|| power::all(node, step_collector))
}
