use crate::{
    bound::{GlobalRange, midpoint},
    config::PartitionConfig,
    count::Counter,
    error::PartitionError,
    obs::{IrreducibleReason, PartitionTraceEvent, PartitionTraceSink},
    partition::{CancelToken, Partition, merge::merge_partitions},
    value::Value,
};
use std::cmp::Ordering;

type EngineResult<T, C> = Result<T, PartitionError<<C as Counter>::Error>>;

///
/// Step
///
/// Outcome of counting one candidate range.
///

enum Step {
    Leaf(Partition),
    Bisect {
        lower: Value,
        mid: Value,
        upper: Value,
    },
}

///
/// PartitionEngine
///
/// Splits a global range into ceiling-bounded partitions.
/// Holds no state between calls; every call starts from a fresh count.
///

pub struct PartitionEngine<'a, C> {
    counter: C,
    config: &'a PartitionConfig,
    cancel: Option<CancelToken>,
    trace: Option<&'a dyn PartitionTraceSink>,
}

impl<'a, C: Counter> PartitionEngine<'a, C> {
    #[must_use]
    pub const fn new(counter: C, config: &'a PartitionConfig) -> Self {
        Self {
            counter,
            config,
            cancel: None,
            trace: None,
        }
    }

    #[must_use]
    pub fn with_cancel(mut self, token: CancelToken) -> Self {
        self.cancel = Some(token);
        self
    }

    #[must_use]
    pub fn with_trace(mut self, sink: &'a dyn PartitionTraceSink) -> Self {
        self.trace = Some(sink);
        self
    }

    /// Partition `[lower, upper]`, evaluating split branches one at a time.
    pub fn generate_partitions(
        &self,
        lower: Value,
        upper: Value,
    ) -> EngineResult<Vec<Partition>, C> {
        let global = self.prepare(lower, upper)?;

        let mut leaves = Vec::new();
        self.split(&global, global.lower.clone(), global.upper.clone(), 0, &mut leaves)?;

        Ok(self.merge(&global, leaves))
    }

    // Validate configuration and bounds before the first count.
    fn prepare(&self, lower: Value, upper: Value) -> EngineResult<GlobalRange, C> {
        self.config.validate()?;

        let order = self.config.kind.arithmetic().compare(&lower, &upper)?;
        if order != Ordering::Less {
            return Err(PartitionError::InvalidRange { lower, upper });
        }

        Ok(GlobalRange::new(lower, upper))
    }

    fn split(
        &self,
        global: &GlobalRange,
        lower: Value,
        upper: Value,
        depth: u32,
        out: &mut Vec<Partition>,
    ) -> EngineResult<(), C> {
        match self.evaluate(global, lower, upper, depth, None)? {
            Step::Leaf(partition) => out.push(partition),
            Step::Bisect { lower, mid, upper } => {
                self.split(global, lower, mid.clone(), depth + 1, out)?;
                self.split(global, mid, upper, depth + 1, out)?;
            }
        }

        Ok(())
    }

    // Count one range and decide whether it is final.
    // `abort` is tripped by a failed sibling branch in a parallel run.
    fn evaluate(
        &self,
        global: &GlobalRange,
        lower: Value,
        upper: Value,
        depth: u32,
        abort: Option<&CancelToken>,
    ) -> EngineResult<Step, C> {
        if self
            .cancel
            .as_ref()
            .into_iter()
            .chain(abort)
            .any(CancelToken::is_cancelled)
        {
            return Err(PartitionError::Cancelled);
        }

        let field = self.config.field.as_str();
        let mut partition = Partition::new(field, global, lower, upper, 0);

        let response = self
            .counter
            .count(&partition.filter)
            .map_err(PartitionError::Store)?;
        let Some(total) = response.exact_total() else {
            return Err(PartitionError::CountUnavailable {
                filter: partition.filter.to_string(),
            });
        };
        partition.count = total;
        self.emit(PartitionTraceEvent::Count { depth, total });

        if total <= self.config.ceiling {
            self.emit(PartitionTraceEvent::Leaf {
                depth,
                count: total,
            });
            return Ok(Step::Leaf(partition));
        }

        let mid = midpoint(self.config.kind, &partition.lower, &partition.upper)?;
        if mid == partition.lower || mid == partition.upper {
            return Ok(self.irreducible(partition, depth, IrreducibleReason::Resolution));
        }

        if depth >= self.config.effective_max_depth() {
            return Ok(self.irreducible(partition, depth, IrreducibleReason::DepthLimit));
        }

        self.emit(PartitionTraceEvent::Bisect { depth, total });

        Ok(Step::Bisect {
            lower: partition.lower,
            mid,
            upper: partition.upper,
        })
    }

    fn irreducible(
        &self,
        mut partition: Partition,
        depth: u32,
        reason: IrreducibleReason,
    ) -> Step {
        partition.irreducible = true;
        self.emit(PartitionTraceEvent::Irreducible {
            depth,
            count: partition.count,
            reason,
        });

        Step::Leaf(partition)
    }

    fn merge(&self, global: &GlobalRange, leaves: Vec<Partition>) -> Vec<Partition> {
        let leaf_count = leaves.len();
        let merged = merge_partitions(leaves, self.config.ceiling, &self.config.field, global);

        self.emit(PartitionTraceEvent::Merged {
            leaves: leaf_count,
            partitions: merged.len(),
        });

        merged
    }

    fn emit(&self, event: PartitionTraceEvent) {
        if let Some(sink) = self.trace {
            sink.on_event(event);
        }
    }
}

impl<C> PartitionEngine<'_, C>
where
    C: Counter + Sync,
    C::Error: Send,
{
    /// Partition `[lower, upper]`, fanning split branches out on the rayon
    /// pool. Returns the same partitions as [`Self::generate_partitions`].
    pub fn generate_partitions_parallel(
        &self,
        lower: Value,
        upper: Value,
    ) -> EngineResult<Vec<Partition>, C> {
        let global = self.prepare(lower, upper)?;
        let abort = CancelToken::new();
        let leaves = self.split_parallel(
            &global,
            global.lower.clone(),
            global.upper.clone(),
            0,
            &abort,
        )?;

        Ok(self.merge(&global, leaves))
    }

    fn split_parallel(
        &self,
        global: &GlobalRange,
        lower: Value,
        upper: Value,
        depth: u32,
        abort: &CancelToken,
    ) -> EngineResult<Vec<Partition>, C> {
        match self.evaluate(global, lower, upper, depth, Some(abort))? {
            Step::Leaf(partition) => Ok(vec![partition]),
            Step::Bisect { lower, mid, upper } => {
                let left_mid = mid.clone();
                let (left, right) = rayon::join(
                    || {
                        self.split_parallel(global, lower, left_mid, depth + 1, abort)
                            .inspect_err(|_| abort.cancel())
                    },
                    || {
                        self.split_parallel(global, mid, upper, depth + 1, abort)
                            .inspect_err(|_| abort.cancel())
                    },
                );

                // left-then-right keeps output independent of completion order
                match (left, right) {
                    (Ok(mut leaves), Ok(right)) => {
                        leaves.extend(right);
                        Ok(leaves)
                    }
                    (Err(err), Ok(_)) | (Ok(_), Err(err)) => Err(err),
                    // a sibling stopped by the abort flag reports Cancelled;
                    // surface the failure that tripped it
                    (Err(left), Err(right)) => {
                        if left.is_cancelled() {
                            Err(right)
                        } else {
                            Err(left)
                        }
                    }
                }
            }
        }
    }
}
