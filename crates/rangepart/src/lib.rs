//! Bounded range partitioning: splits an ordered field domain into
//! contiguous ranges whose record counts stay under a paging ceiling.
//!
//! The record store is never read directly. Everything flows through the
//! injected [`count::Counter`] capability.
#![warn(unreachable_pub)]

pub mod bound;
pub mod config;
pub mod count;
pub mod error;
pub mod filter;
pub mod obs;
pub mod partition;
pub mod types;
pub mod value;

// test
#[cfg(test)]
pub(crate) mod test_support;

///
/// CONSTANTS
///

/// Default maximum number of records permitted in one partition.
///
/// Mirrors the hard paging limit of the stores this crate is built against.
pub const DEFAULT_CEILING: u64 = 100_000;

///
/// Prelude
///
/// Prelude contains only domain vocabulary.
///

pub mod prelude {
    pub use crate::{
        bound::{FieldKind, GlobalRange},
        config::PartitionConfig,
        count::{CountResponse, Counter},
        filter::Filter,
        partition::{Partition, PartitionEngine},
        types::Timestamp,
        value::Value,
    };
}
