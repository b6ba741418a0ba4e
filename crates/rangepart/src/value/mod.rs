mod compare;

#[cfg(test)]
mod tests;

use crate::types::Timestamp;
use std::fmt;

// re-exports
pub use compare::{canonical_cmp, strict_order_cmp};

///
/// Value
///
/// A single bound of the partitioning field.
/// Every variant renders itself for filter expressions through `Display`.
///

#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Value {
    Int(i64),
    Text(String),
    Timestamp(Timestamp),
    Uint(u64),
}

impl Value {
    /// Stable variant tag, used for diagnostics and mixed-variant ordering.
    #[must_use]
    pub const fn tag(&self) -> ValueTag {
        match self {
            Self::Int(_) => ValueTag::Int,
            Self::Text(_) => ValueTag::Text,
            Self::Timestamp(_) => ValueTag::Timestamp,
            Self::Uint(_) => ValueTag::Uint,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Timestamp(v) => write!(f, "{v}"),
            Self::Uint(v) => write!(f, "{v}"),
            Self::Text(v) => {
                f.write_str("\"")?;
                for ch in v.chars() {
                    if matches!(ch, '"' | '\\') {
                        f.write_str("\\")?;
                    }
                    write!(f, "{ch}")?;
                }
                f.write_str("\"")
            }
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Self::Uint(v)
    }
}

impl From<Timestamp> for Value {
    fn from(v: Timestamp) -> Self {
        Self::Timestamp(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

///
/// ValueTag
///

#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(u8)]
pub enum ValueTag {
    Int = 0x01,
    Text = 0x02,
    Timestamp = 0x03,
    Uint = 0x04,
}

impl ValueTag {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Int => "int",
            Self::Text => "text",
            Self::Timestamp => "timestamp",
            Self::Uint => "uint",
        }
    }
}

impl fmt::Display for ValueTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
