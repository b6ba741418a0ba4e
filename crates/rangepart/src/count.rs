//! Counting capability boundary.
//!
//! The only way the engine observes the record store.

use crate::filter::Filter;

///
/// CountResponse
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct CountResponse {
    pub total: Option<u64>,
    pub exact: bool,
}

impl CountResponse {
    #[must_use]
    pub const fn exact(total: u64) -> Self {
        Self {
            total: Some(total),
            exact: true,
        }
    }

    /// A lower bound or estimate; unusable for partitioning.
    #[must_use]
    pub const fn estimate(total: u64) -> Self {
        Self {
            total: Some(total),
            exact: false,
        }
    }

    #[must_use]
    pub const fn missing() -> Self {
        Self {
            total: None,
            exact: false,
        }
    }

    /// The total, if it is present and exact.
    #[must_use]
    pub const fn exact_total(self) -> Option<u64> {
        match self.total {
            Some(total) if self.exact => Some(total),
            _ => None,
        }
    }
}

///
/// Counter
///
/// Counts records matching a boundary filter.
/// Retries and transport concerns belong to the implementor.
///

pub trait Counter {
    type Error;

    fn count(&self, filter: &Filter) -> Result<CountResponse, Self::Error>;
}

impl<C: Counter + ?Sized> Counter for &C {
    type Error = C::Error;

    fn count(&self, filter: &Filter) -> Result<CountResponse, Self::Error> {
        (**self).count(filter)
    }
}
