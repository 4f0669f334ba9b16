//! Simplification rules for powers.

use crate::primitive::{node_number, num};
use crate::symbolic::{
    simplify::{rules::do_power, step::Step},
    step_collector::StepCollector,
};
use symb_parser::parser::ast::Node;

/// `a^1 = a`
pub fn power_one(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_power(node, |lhs, rhs| {
        rhs.is_leaf_token("1").then(|| lhs.clone())
    })?;

    step_collector.push(Step::PowerOne);
    Some(opt)
}

/// `a^0 = 1`
pub fn power_zero(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_power(node, |_, rhs| {
        rhs.is_leaf_token("0").then(|| Node::leaf("1"))
    })?;

    step_collector.push(Step::PowerZero);
    Some(opt)
}

/// `0^a = 0`
pub fn power_zero_left(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_power(node, |lhs, _| {
        lhs.is_leaf_token("0").then(|| Node::leaf("0"))
    })?;

    step_collector.push(Step::PowerZeroLeft);
    Some(opt)
}

/// `1^a = 1`
pub fn power_one_left(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_power(node, |lhs, _| {
        lhs.is_leaf_token("1").then(|| Node::leaf("1"))
    })?;

    step_collector.push(Step::PowerOneLeft);
    Some(opt)
}

/// Evaluates a power of two numbers.
///
/// `2^3 = 8`
///
/// Powers whose value is not a finite number, such as `10^400`, are left as they are.
pub fn power_fold(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    let opt = do_power(node, |lhs, rhs| {
        let value = node_number(lhs)?.powf(node_number(rhs)?);
        value.is_finite().then(|| num(value))
    })?;

    step_collector.push(Step::PowerFold);
    Some(opt)
}

/// Applies all power rules, in order. The first one that applies wins.
pub fn all(node: &Node, step_collector: &mut dyn StepCollector<Step>) -> Option<Node> {
    power_one(node, step_collector)
        .or_else(|| power_zero(node, step_collector))
        .or_else(|| power_zero_left(node, step_collector))
        .or_else(|| power_one_left(node, step_collector))
        .or_else(|| power_fold(node, step_collector))
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use symb_parser::parser::parse;
    use super::*;

    fn applied(source: &str) -> (Option<String>, Vec<Step>) {
        let mut steps = Vec::new();
        let node = all(&parse(source), &mut steps).map(|node| node.to_string());
        (node, steps)
    }

    #[test]
    fn exponent_one_wins_over_base_zero() {
        assert_eq!(applied("0^1"), (Some("0".to_string()), vec![Step::PowerOne]));
    }

    #[test]
    fn exponent_zero_wins_over_base_zero() {
        assert_eq!(applied("0^0"), (Some("1".to_string()), vec![Step::PowerZero]));
    }

    #[test]
    fn symbolic_exponents() {
        assert_eq!(applied("0^y"), (Some("0".to_string()), vec![Step::PowerZeroLeft]));
        assert_eq!(applied("1^y"), (Some("1".to_string()), vec![Step::PowerOneLeft]));
        assert_eq!(applied("x^y"), (None, vec![]));
    }

    #[test]
    fn numeric_powers_fold() {
        assert_eq!(applied("2^10"), (Some("1024".to_string()), vec![Step::PowerFold]));
        assert_eq!(applied("4^0.5"), (Some("2".to_string()), vec![Step::PowerFold]));
        assert_eq!(applied("10^400"), (None, vec![]));
    }

    #[test]
    fn tokens_are_compared_verbatim() {
        // `1.0` is not the token `1`, but the power still folds
        assert_eq!(applied("x^1.0"), (None, vec![]));
        assert_eq!(applied("3^1.0"), (Some("3".to_string()), vec![Step::PowerFold]));
    }

    #[test]
    fn only_applies_to_powers() {
        assert_eq!(applied("x*1"), (None, vec![]));
    }
}
