//! Partition generation: recursive bisection under a record ceiling,
//! followed by one greedy merge pass over adjacent ranges.

mod cancel;
mod engine;
mod merge;


use crate::{
    bound::{GlobalRange, build_range_filter},
    filter::Filter,
    value::{Value, canonical_cmp},
};
use std::cmp::Ordering;

// re-exports
pub use cancel::CancelToken;
pub use engine::PartitionEngine;
pub use merge::merge_partitions;

///
/// Partition
///
/// One contiguous range of the partitioning field with the exact record
/// count measured through `filter`.
///

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Partition {
    pub lower: Value,
    pub upper: Value,
    pub count: u64,

    /// Reissue this filter to select exactly the counted records.
    pub filter: Filter,

    /// Leaf that could not be split further yet exceeds the ceiling.
    pub irreducible: bool,
}

impl Partition {
    /// Build a partition over `[lower, upper)` with its canonical filter.
    #[must_use]
    pub fn new(field: &str, global: &GlobalRange, lower: Value, upper: Value, count: u64) -> Self {
        let filter = build_range_filter(field, global, &lower, &upper);

        Self {
            lower,
            upper,
            count,
            filter,
            irreducible: false,
        }
    }

    /// Order by lower bound, then upper bound.
    #[must_use]
    pub fn cmp_bounds(&self, other: &Self) -> Ordering {
        canonical_cmp(&self.lower, &other.lower)
            .then_with(|| canonical_cmp(&self.upper, &other.upper))
    }

    #[must_use]
    pub const fn exceeds(&self, ceiling: u64) -> bool {
        self.count > ceiling
    }
}
