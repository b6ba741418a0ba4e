//! Partition tracing boundary.
//!
//! Tracing is optional, injected by the caller, and must not affect results.
//! Errors are returned to the caller and never traced here.

///
/// PartitionTraceSink
///

pub trait PartitionTraceSink: Send + Sync {
    fn on_event(&self, event: PartitionTraceEvent);
}

///
/// IrreducibleReason
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum IrreducibleReason {
    /// Midpoint collapsed onto a bound.
    Resolution,
    /// Bisection depth reached the configured cap.
    DepthLimit,
}

///
/// PartitionTraceEvent
///

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum PartitionTraceEvent {
    Count {
        depth: u32,
        total: u64,
    },
    Bisect {
        depth: u32,
        total: u64,
    },
    Leaf {
        depth: u32,
        count: u64,
    },
    Irreducible {
        depth: u32,
        count: u64,
        reason: IrreducibleReason,
    },
    Merged {
        leaves: usize,
        partitions: usize,
    },
}
