use crate::{
    types::Timestamp,
    value::{Value, ValueTag, canonical_cmp, strict_order_cmp},
};
use std::cmp::Ordering;

#[test]
fn strict_order_same_variant() {
    assert_eq!(
        strict_order_cmp(&Value::Int(-3), &Value::Int(2)),
        Some(Ordering::Less)
    );
    assert_eq!(
        strict_order_cmp(&Value::from("b"), &Value::from("a")),
        Some(Ordering::Greater)
    );

    let ts = Value::Timestamp(Timestamp::from_nanos(10));
    assert_eq!(strict_order_cmp(&ts, &ts), Some(Ordering::Equal));
}

#[test]
fn strict_order_rejects_mixed_variants() {
    assert_eq!(strict_order_cmp(&Value::Int(1), &Value::Uint(1)), None);
}

#[test]
fn canonical_cmp_falls_back_to_tag() {
    assert_eq!(
        canonical_cmp(&Value::Int(i64::MAX), &Value::Uint(0)),
        ValueTag::Int.cmp(&ValueTag::Uint)
    );
}

#[test]
fn text_display_escapes_quotes() {
    assert_eq!(Value::from(r#"a"b\c"#).to_string(), r#""a\"b\\c""#);
}

#[test]
fn numeric_display_is_plain() {
    assert_eq!(Value::Int(-42).to_string(), "-42");
    assert_eq!(Value::Uint(42).to_string(), "42");
}
