//! Boundary filter AST.
//!
//! Pure, store-agnostic description of a range over one field. Stores
//! either render it through `Display` into their own expression syntax or
//! walk the tree directly. `matches` evaluates it in-process against a
//! single field value.

#[cfg(test)]
mod tests;

use crate::value::{Value, strict_order_cmp};
use std::{cmp::Ordering, fmt, ops::BitAnd};

///
/// CompareOp
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum CompareOp {
    Lt,
    Lte,
    Gt,
    Gte,
}

impl CompareOp {
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Lt => "<",
            Self::Lte => "<=",
            Self::Gt => ">",
            Self::Gte => ">=",
        }
    }

    /// Whether an ordering of `field` against the literal satisfies this op.
    #[must_use]
    pub const fn accepts(self, ord: Ordering) -> bool {
        match self {
            Self::Lt => matches!(ord, Ordering::Less),
            Self::Lte => matches!(ord, Ordering::Less | Ordering::Equal),
            Self::Gt => matches!(ord, Ordering::Greater),
            Self::Gte => matches!(ord, Ordering::Greater | Ordering::Equal),
        }
    }
}

impl fmt::Display for CompareOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

///
/// ComparePredicate
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct ComparePredicate {
    pub field: String,
    pub op: CompareOp,
    pub value: Value,
}

impl ComparePredicate {
    #[must_use]
    pub fn new(field: impl Into<String>, op: CompareOp, value: Value) -> Self {
        Self {
            field: field.into(),
            op,
            value,
        }
    }

    /// Mismatched variants never match.
    #[must_use]
    pub fn matches(&self, field_value: &Value) -> bool {
        strict_order_cmp(field_value, &self.value).is_some_and(|ord| self.op.accepts(ord))
    }
}

impl fmt::Display for ComparePredicate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.field, self.op, self.value)
    }
}

///
/// Filter
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Filter {
    And(Vec<Self>),
    Compare(ComparePredicate),
}

impl Filter {
    #[must_use]
    pub const fn and(filters: Vec<Self>) -> Self {
        Self::And(filters)
    }

    #[must_use]
    pub fn lt(field: impl Into<String>, value: Value) -> Self {
        Self::Compare(ComparePredicate::new(field, CompareOp::Lt, value))
    }

    #[must_use]
    pub fn lte(field: impl Into<String>, value: Value) -> Self {
        Self::Compare(ComparePredicate::new(field, CompareOp::Lte, value))
    }

    #[must_use]
    pub fn gt(field: impl Into<String>, value: Value) -> Self {
        Self::Compare(ComparePredicate::new(field, CompareOp::Gt, value))
    }

    #[must_use]
    pub fn gte(field: impl Into<String>, value: Value) -> Self {
        Self::Compare(ComparePredicate::new(field, CompareOp::Gte, value))
    }

    /// Evaluate against the value of the filtered field.
    ///
    /// Field names are not checked; a filter covers exactly one field.
    #[must_use]
    pub fn matches(&self, field_value: &Value) -> bool {
        match self {
            Self::And(filters) => filters.iter().all(|f| f.matches(field_value)),
            Self::Compare(cmp) => cmp.matches(field_value),
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Compare(cmp) => write!(f, "{cmp}"),
            Self::And(filters) => {
                for (i, filter) in filters.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" AND ")?;
                    }
                    match filter {
                        Self::And(_) => write!(f, "({filter})")?,
                        Self::Compare(_) => write!(f, "{filter}")?,
                    }
                }

                Ok(())
            }
        }
    }
}

impl BitAnd for Filter {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        Self::And(vec![self, rhs])
    }
}
