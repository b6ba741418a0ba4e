use crate::{bound::UnsupportedTypeError, config::ConfigError, value::Value};
use std::fmt;
use thiserror::Error as ThisError;

///
/// PartitionError
///
/// Failure of a whole partition-generation call.
/// No variant carries partial results; any error discards the split tree.
///

#[derive(Debug, ThisError)]
pub enum PartitionError<E> {
    #[error(transparent)]
    UnsupportedType(#[from] UnsupportedTypeError),

    #[error("store could not report an exact count for '{filter}'")]
    CountUnavailable { filter: String },

    #[error("partitioning cancelled")]
    Cancelled,

    #[error("invalid global range: lower bound {lower} is not below upper bound {upper}")]
    InvalidRange { lower: Value, upper: Value },

    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Error raised by the counting store, passed through untouched.
    #[error(transparent)]
    Store(E),
}

impl<E> PartitionError<E> {
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::UnsupportedType(_) => ErrorClass::Unsupported,
            Self::CountUnavailable { .. } => ErrorClass::Unavailable,
            Self::Cancelled => ErrorClass::Cancelled,
            Self::InvalidRange { .. } | Self::Config(_) => ErrorClass::InvalidInput,
            Self::Store(_) => ErrorClass::Store,
        }
    }

    #[must_use]
    pub const fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled)
    }

    /// Recover the store's own error, if this is one.
    pub fn into_store_error(self) -> Option<E> {
        match self {
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

///
/// ErrorClass
///

#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ErrorClass {
    Unsupported,
    Unavailable,
    Cancelled,
    InvalidInput,
    Store,
}

impl fmt::Display for ErrorClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Unsupported => "unsupported",
            Self::Unavailable => "unavailable",
            Self::Cancelled => "cancelled",
            Self::InvalidInput => "invalid_input",
            Self::Store => "store",
        };
        write!(f, "{label}")
    }
}
