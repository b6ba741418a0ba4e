use crate::{
    filter::{CompareOp, Filter},
    types::Timestamp,
    value::Value,
};
use std::cmp::Ordering;

fn range(lower: u64, upper: u64) -> Filter {
    Filter::gte("seq", Value::Uint(lower)) & Filter::lt("seq", Value::Uint(upper))
}

#[test]
fn compare_op_accepts() {
    assert!(CompareOp::Gte.accepts(Ordering::Equal));
    assert!(!CompareOp::Gt.accepts(Ordering::Equal));
    assert!(CompareOp::Lte.accepts(Ordering::Less));
    assert!(!CompareOp::Lt.accepts(Ordering::Greater));
}

#[test]
fn half_open_range_matches() {
    let filter = range(10, 20);

    assert!(filter.matches(&Value::Uint(10)));
    assert!(filter.matches(&Value::Uint(19)));
    assert!(!filter.matches(&Value::Uint(20)));
    assert!(!filter.matches(&Value::Uint(9)));
}

#[test]
fn mismatched_variant_never_matches() {
    assert!(!range(0, 100).matches(&Value::Int(5)));
}

#[test]
fn empty_and_matches_everything() {
    assert!(Filter::and(vec![]).matches(&Value::from("anything")));
}

#[test]
fn display_renders_expression() {
    let lower = Timestamp::parse_rfc3339("2024-01-01T00:00:00Z").unwrap();
    let upper = Timestamp::parse_rfc3339("2024-01-02T00:00:00Z").unwrap();
    let filter = Filter::gte("created", lower.into()) & Filter::lte("created", upper.into());

    assert_eq!(
        filter.to_string(),
        "created >= 2024-01-01T00:00:00Z AND created <= 2024-01-02T00:00:00Z"
    );
}

#[test]
fn display_parenthesizes_nested_and() {
    let filter = Filter::and(vec![range(1, 2), Filter::gt("seq", Value::Uint(0))]);

    assert_eq!(filter.to_string(), "(seq >= 1 AND seq < 2) AND seq > 0");
}
