//! Observability: optional, caller-injected tracing of partition runs.

mod trace;

pub use trace::{IrreducibleReason, PartitionTraceEvent, PartitionTraceSink};
