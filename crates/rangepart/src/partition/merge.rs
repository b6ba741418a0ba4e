use crate::{bound::GlobalRange, partition::Partition};

/// Coalesce adjacent partitions into the fewest that stay within `ceiling`.
///
/// Sorts by bounds, then makes a single left-to-right pass: the running
/// partition absorbs its right neighbour whenever the summed count still
/// fits. Partitions already over the ceiling are never absorbed into, and
/// never absorb anything. Filters of merged partitions are rebuilt from
/// the merged bounds.
#[must_use]
pub fn merge_partitions(
    mut partitions: Vec<Partition>,
    ceiling: u64,
    field: &str,
    global: &GlobalRange,
) -> Vec<Partition> {
    partitions.sort_by(Partition::cmp_bounds);

    let mut iter = partitions.into_iter();
    let Some(mut acc) = iter.next() else {
        return Vec::new();
    };

    let mut merged = Vec::new();
    for next in iter {
        let total = acc.count.saturating_add(next.count);

        if total <= ceiling {
            acc = Partition::new(field, global, acc.lower, next.upper, total);
        } else {
            merged.push(acc);
            acc = next;
        }
    }
    merged.push(acc);

    merged
}
