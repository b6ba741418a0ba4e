use crate::{
    bound::{FieldArithmetic, FieldKind, UnsupportedTypeError},
    types::Timestamp,
    value::Value,
};

///
/// TimestampArithmetic
/// (nanosecond resolution)
///

pub(super) struct TimestampArithmetic;

impl TimestampArithmetic {
    fn expect(value: &Value) -> Result<Timestamp, UnsupportedTypeError> {
        match value {
            Value::Timestamp(ts) => Ok(*ts),
            other => Err(UnsupportedTypeError {
                kind: FieldKind::Timestamp,
                found: other.tag(),
            }),
        }
    }
}

impl FieldArithmetic for TimestampArithmetic {
    fn kind(&self) -> FieldKind {
        FieldKind::Timestamp
    }

    fn midpoint(&self, lower: &Value, upper: &Value) -> Result<Value, UnsupportedTypeError> {
        let lower = Self::expect(lower)?;
        let upper = Self::expect(upper)?;

        Ok(Value::Timestamp(lower.midpoint(upper).unwrap_or(lower)))
    }
}
