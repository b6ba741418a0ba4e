//! Boundary arithmetic over the partitioning field.
//!
//! Stateless. Each supported field kind provides a [`FieldArithmetic`]
//! capability selected by its [`FieldKind`] tag; no code here inspects
//! runtime types beyond checking that a value belongs to the kind.

mod numeric;
mod time;


use crate::{
    filter::Filter,
    value::{Value, ValueTag, strict_order_cmp},
};
use serde::{Deserialize, Serialize};
use std::{cmp::Ordering, fmt};
use thiserror::Error as ThisError;

///
/// UnsupportedTypeError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
#[error("{kind} field has no ordering arithmetic for {found} value")]
pub struct UnsupportedTypeError {
    pub kind: FieldKind,
    pub found: ValueTag,
}

///
/// FieldKind
///
/// Value kinds that support bisection.
///

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Int,
    Timestamp,
    Uint,
}

impl FieldKind {
    #[must_use]
    pub fn arithmetic(self) -> &'static dyn FieldArithmetic {
        match self {
            Self::Int => &numeric::IntArithmetic,
            Self::Timestamp => &time::TimestampArithmetic,
            Self::Uint => &numeric::UintArithmetic,
        }
    }

    /// Halvings needed to shrink the widest range of this kind below its
    /// resolution. Used as the default bisection depth cap.
    ///
    /// `DateTime<Utc>` spans roughly 2^74 nanoseconds.
    #[must_use]
    pub const fn max_depth(self) -> u32 {
        match self {
            Self::Int | Self::Uint => 64,
            Self::Timestamp => 75,
        }
    }

    #[must_use]
    pub const fn tag(self) -> ValueTag {
        match self {
            Self::Int => ValueTag::Int,
            Self::Timestamp => ValueTag::Timestamp,
            Self::Uint => ValueTag::Uint,
        }
    }

    /// Reject values of any other variant.
    pub fn check(self, value: &Value) -> Result<(), UnsupportedTypeError> {
        let found = value.tag();
        if found == self.tag() {
            Ok(())
        } else {
            Err(UnsupportedTypeError { kind: self, found })
        }
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag().label())
    }
}

///
/// FieldArithmetic
///
/// Ordering and midpoint capability for one field kind.
///

pub trait FieldArithmetic: Sync {
    fn kind(&self) -> FieldKind;

    /// Total order between two values of this kind.
    fn compare(&self, left: &Value, right: &Value) -> Result<Ordering, UnsupportedTypeError> {
        let kind = self.kind();
        kind.check(left)?;
        kind.check(right)?;

        strict_order_cmp(left, right).ok_or(UnsupportedTypeError {
            kind,
            found: right.tag(),
        })
    }

    /// A value in `[lower, upper)`, as close to halfway as the kind's
    /// resolution allows.
    ///
    /// Returns `lower` when the range is too narrow to split, or inverted.
    fn midpoint(&self, lower: &Value, upper: &Value) -> Result<Value, UnsupportedTypeError>;
}

/// Midpoint of `[lower, upper)` under `kind`.
pub fn midpoint(
    kind: FieldKind,
    lower: &Value,
    upper: &Value,
) -> Result<Value, UnsupportedTypeError> {
    kind.arithmetic().midpoint(lower, upper)
}

///
/// GlobalRange
///
/// The outer bounds of one partitioning run. Both ends are inclusive.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GlobalRange {
    pub lower: Value,
    pub upper: Value,
}

impl GlobalRange {
    #[must_use]
    pub const fn new(lower: Value, upper: Value) -> Self {
        Self { lower, upper }
    }
}

/// Build the filter selecting `field` in `[lower, upper)`.
///
/// The lower comparison is always `>=`: the global lower bound must never
/// drop its first record, and interior lower bounds were already excluded
/// by the left neighbour's strict `<`. The range ending at the global upper
/// bound closes with `<=` so the last record is covered too.
#[must_use]
pub fn build_range_filter(
    field: &str,
    global: &GlobalRange,
    lower: &Value,
    upper: &Value,
) -> Filter {
    let upper_filter = if *upper == global.upper {
        Filter::lte(field, upper.clone())
    } else {
        Filter::lt(field, upper.clone())
    };

    Filter::gte(field, lower.clone()) & upper_filter
}
