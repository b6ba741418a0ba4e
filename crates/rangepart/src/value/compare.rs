use crate::value::Value;
use std::cmp::Ordering;

/// Total canonical comparator used for partition ordering.
///
/// Ordering rules:
/// 1. Variant tag
/// 2. Variant-specific comparison for same-tagged values
///
/// Mixed-variant comparisons are tag-only and must remain deterministic.
#[must_use]
pub fn canonical_cmp(left: &Value, right: &Value) -> Ordering {
    strict_order_cmp(left, right).unwrap_or_else(|| left.tag().cmp(&right.tag()))
}

/// Strict comparator for identical variants.
///
/// Returns `None` for mismatched variants.
#[must_use]
pub fn strict_order_cmp(left: &Value, right: &Value) -> Option<Ordering> {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => Some(a.cmp(b)),
        (Value::Text(a), Value::Text(b)) => Some(a.cmp(b)),
        (Value::Timestamp(a), Value::Timestamp(b)) => Some(a.cmp(b)),
        (Value::Uint(a), Value::Uint(b)) => Some(a.cmp(b)),
        _ => None,
    }
}
