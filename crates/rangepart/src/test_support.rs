//! In-memory counting stores and invariant checks shared by tests.

use crate::{
    bound::GlobalRange,
    count::{CountResponse, Counter},
    filter::Filter,
    obs::{PartitionTraceEvent, PartitionTraceSink},
    partition::{CancelToken, Partition},
    value::{Value, canonical_cmp},
};
use std::{
    cmp::Ordering,
    sync::{
        Mutex,
        atomic::{AtomicBool, AtomicUsize, Ordering as AtomicOrdering},
    },
};
use thiserror::Error as ThisError;

///
/// StoreError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub(crate) enum StoreError {
    #[error("store offline")]
    Offline,
}

///
/// MemoryStore
///
/// Single-field records counted by evaluating each filter in-process.
///

#[derive(Debug, Default)]
pub(crate) struct MemoryStore {
    values: Vec<Value>,
    calls: AtomicUsize,
}

impl MemoryStore {
    pub(crate) fn new(values: impl IntoIterator<Item = Value>) -> Self {
        Self {
            values: values.into_iter().collect(),
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn uints(values: impl IntoIterator<Item = u64>) -> Self {
        Self::new(values.into_iter().map(Value::Uint))
    }

    pub(crate) fn calls(&self) -> usize {
        self.calls.load(AtomicOrdering::Relaxed)
    }

    pub(crate) fn len(&self) -> u64 {
        self.values.len() as u64
    }

    pub(crate) fn matching(&self, filter: &Filter) -> u64 {
        self.values.iter().filter(|v| filter.matches(v)).count() as u64
    }
}

impl Counter for MemoryStore {
    type Error = StoreError;

    fn count(&self, filter: &Filter) -> Result<CountResponse, Self::Error> {
        self.calls.fetch_add(1, AtomicOrdering::Relaxed);

        Ok(CountResponse::exact(self.matching(filter)))
    }
}

///
/// ScriptedStore
///
/// Serves a fixed response (or failure) from a given call onward and
/// delegates earlier calls to an inner `MemoryStore`.
///

pub(crate) struct ScriptedStore {
    pub(crate) inner: MemoryStore,
    pub(crate) from_call: usize,
    pub(crate) response: Result<CountResponse, StoreError>,
}

impl Counter for ScriptedStore {
    type Error = StoreError;

    fn count(&self, filter: &Filter) -> Result<CountResponse, Self::Error> {
        if self.inner.calls() >= self.from_call {
            return self.response.clone();
        }

        self.inner.count(filter)
    }
}

///
/// FailingStore
///
/// Fails the count for one rendered filter and records how many counts
/// arrive after that failure.
///

pub(crate) struct FailingStore {
    inner: MemoryStore,
    fail_on: String,
    failed: AtomicBool,
    after_failure: AtomicUsize,
}

impl FailingStore {
    pub(crate) fn new(inner: MemoryStore, fail_on: impl Into<String>) -> Self {
        Self {
            inner,
            fail_on: fail_on.into(),
            failed: AtomicBool::new(false),
            after_failure: AtomicUsize::new(0),
        }
    }

    pub(crate) fn failed(&self) -> bool {
        self.failed.load(AtomicOrdering::SeqCst)
    }

    pub(crate) fn calls_after_failure(&self) -> usize {
        self.after_failure.load(AtomicOrdering::SeqCst)
    }
}

impl Counter for FailingStore {
    type Error = StoreError;

    fn count(&self, filter: &Filter) -> Result<CountResponse, Self::Error> {
        if self.failed() {
            self.after_failure.fetch_add(1, AtomicOrdering::SeqCst);
        }
        if filter.to_string() == self.fail_on {
            self.failed.store(true, AtomicOrdering::SeqCst);
            return Err(StoreError::Offline);
        }

        self.inner.count(filter)
    }
}

///
/// RecordingSink
///

#[derive(Debug, Default)]
pub(crate) struct RecordingSink {
    events: Mutex<Vec<PartitionTraceEvent>>,
    cancel_on_bisect: Option<CancelToken>,
}

impl RecordingSink {
    pub(crate) fn cancelling(token: CancelToken) -> Self {
        Self {
            events: Mutex::default(),
            cancel_on_bisect: Some(token),
        }
    }

    pub(crate) fn events(&self) -> Vec<PartitionTraceEvent> {
        self.events.lock().map(|e| e.clone()).unwrap_or_default()
    }
}

impl PartitionTraceSink for RecordingSink {
    fn on_event(&self, event: PartitionTraceEvent) {
        if let (PartitionTraceEvent::Bisect { .. }, Some(token)) = (event, &self.cancel_on_bisect) {
            token.cancel();
        }
        if let Ok(mut events) = self.events.lock() {
            events.push(event);
        }
    }
}

/// Check coverage, contiguity, ceiling, and filter reuse against the store.
pub(crate) fn assert_partition_invariants(
    partitions: &[Partition],
    global: &GlobalRange,
    ceiling: u64,
    store: &MemoryStore,
) {
    assert!(!partitions.is_empty(), "at least one partition");

    let first = &partitions[0];
    let last = &partitions[partitions.len() - 1];
    assert_eq!(first.lower, global.lower, "coverage starts at global lower");
    assert_eq!(last.upper, global.upper, "coverage ends at global upper");

    for pair in partitions.windows(2) {
        assert_eq!(pair[0].upper, pair[1].lower, "adjacent partitions touch");
        assert!(
            pair[0].count.saturating_add(pair[1].count) > ceiling,
            "adjacent partitions that fit together were left unmerged"
        );
    }

    let mut sum = 0;
    for partition in partitions {
        assert_eq!(
            canonical_cmp(&partition.lower, &partition.upper),
            Ordering::Less,
            "lower below upper"
        );
        assert!(
            partition.count <= ceiling || partition.irreducible,
            "partition over ceiling without irreducible flag: {partition:?}"
        );
        assert_eq!(
            store.matching(&partition.filter),
            partition.count,
            "reissued filter reproduces count"
        );
        sum += partition.count;
    }

    let in_range = Filter::gte("field", global.lower.clone())
        & Filter::lte("field", global.upper.clone());
    assert_eq!(sum, store.matching(&in_range), "counts sum to the global total");
}
