use crate::{
    bound::{FieldArithmetic, FieldKind, UnsupportedTypeError},
    value::Value,
};

///
/// IntArithmetic
///

pub(super) struct IntArithmetic;

impl FieldArithmetic for IntArithmetic {
    fn kind(&self) -> FieldKind {
        FieldKind::Int
    }

    fn midpoint(&self, lower: &Value, upper: &Value) -> Result<Value, UnsupportedTypeError> {
        let (Value::Int(lower), Value::Int(upper)) = (lower, upper) else {
            return Err(mismatch(FieldKind::Int, lower, upper));
        };
        if upper <= lower {
            return Ok(Value::Int(*lower));
        }

        // abs_diff spans the full i64 range without overflow
        let half = lower.abs_diff(*upper) / 2;

        Ok(Value::Int(lower.saturating_add_unsigned(half)))
    }
}

///
/// UintArithmetic
///

pub(super) struct UintArithmetic;

impl FieldArithmetic for UintArithmetic {
    fn kind(&self) -> FieldKind {
        FieldKind::Uint
    }

    fn midpoint(&self, lower: &Value, upper: &Value) -> Result<Value, UnsupportedTypeError> {
        let (Value::Uint(lower), Value::Uint(upper)) = (lower, upper) else {
            return Err(mismatch(FieldKind::Uint, lower, upper));
        };
        if upper <= lower {
            return Ok(Value::Uint(*lower));
        }

        Ok(Value::Uint(lower + (upper - lower) / 2))
    }
}

// Report whichever side is not of the expected kind.
fn mismatch(kind: FieldKind, lower: &Value, upper: &Value) -> UnsupportedTypeError {
    let found = if lower.tag() == kind.tag() {
        upper.tag()
    } else {
        lower.tag()
    };

    UnsupportedTypeError { kind, found }
}
