//! Quicksort with Lomuto partitioning (pivot = last element of the range)
//!
//! The recursion is kept as an explicit task stack. After a partition places
//! its pivot at `p`, the right range `[p + 1, high]` is pushed before the left
//! range `[low, p - 1]`, so the left subtree is always visited first and the
//! snapshot order matches a pre-order recursive walk.

use super::{running_percent, Stage, Steps, Trace};
use rustc_hash::FxHashSet;

#[derive(Debug)]
enum Task {
    /// Announce and partition `[low, high]`, or finalize it when `low == high`
    Range { low: usize, high: usize },
    Partition(Partition),
}

/// State of one in-flight Lomuto partition
#[derive(Debug)]
struct Partition {
    low: usize,
    high: usize,
    pivot: i64,
    /// Last index known to hold a value `<= pivot`; `None` stands for `low - 1`
    boundary: Option<usize>,
    /// Next index to compare against the pivot
    next: usize,
}

impl Partition {
    fn new(trace: &Trace, low: usize, high: usize) -> Self {
        Partition {
            low,
            high,
            pivot: trace.values[high],
            boundary: None,
            next: low,
        }
    }

    /// Where the pivot lands once every element has been compared
    fn pivot_slot(&self) -> usize {
        self.boundary.map_or(self.low, |i| i + 1)
    }
}

#[derive(Debug)]
pub struct QuickSort {
    tasks: Vec<Task>,
    finalized: FxHashSet<usize>,
}

/// Quicksort step sequence over a copy of `input`
pub fn steps(input: &[i64]) -> Steps<QuickSort> {
    let mut tasks = Vec::new();
    if !input.is_empty() {
        tasks.push(Task::Range {
            low: 0,
            high: input.len() - 1,
        });
    }
    Steps::new(
        QuickSort {
            tasks,
            finalized: FxHashSet::default(),
        },
        input,
    )
}

impl QuickSort {
    fn progress(&self, trace: &Trace) -> u8 {
        running_percent(self.finalized.len(), trace.len())
    }

    fn enter_range(&mut self, trace: &mut Trace, low: usize, high: usize) {
        if low < high {
            let announce = trace
                .snapshot(self.progress(trace))
                .with_range(low, high)
                .with_description(format!("Sorting index {} - index {}", low, high));
            trace.emit(announce);
            self.tasks
                .push(Task::Partition(Partition::new(trace, low, high)));
        } else {
            self.finalized.insert(low);
            let leaf = trace
                .snapshot(self.progress(trace))
                .with_focus(low)
                .with_range(low, high)
                .with_pivot(high)
                .with_description(format!("End of range: index {} is sorted", low));
            trace.emit(leaf);
        }
    }

    /// Compare one element against the pivot, moving it left of the boundary if needed
    fn compare_next(&self, trace: &mut Trace, part: &mut Partition) {
        let (low, high, pivot) = (part.low, part.high, part.pivot);
        let j = part.next;
        let progress = self.progress(trace);
        let current = trace.values[j];
        let belongs_left = current <= pivot;

        let compare = trace
            .snapshot(progress)
            .with_focus(j)
            .with_range(low, high)
            .with_pivot(high)
            .with_boundary(part.boundary)
            .with_description(format!(
                "Comparing {} <= pivot {} ({})",
                current, pivot, belongs_left
            ));
        trace.emit(compare);

        if belongs_left {
            let i = part.pivot_slot();
            part.boundary = Some(i);
            let bumped = trace
                .snapshot(progress)
                .with_focus(j)
                .with_range(low, high)
                .with_pivot(high)
                .with_boundary(Some(i))
                .with_description(format!("Incrementing boundary to index {}", i));
            trace.emit(bumped);

            trace.values.swap(i, j);
            let swapped = trace
                .snapshot(progress)
                .with_focus(j)
                .with_compare_target(i)
                .with_range(low, high)
                .with_pivot(high)
                .with_boundary(Some(i))
                .with_description(format!("Swapping index {} with boundary index {}", j, i));
            trace.emit(swapped);
        }

        part.next += 1;
    }

    /// Swap the pivot into its final slot and schedule both sub-ranges
    fn place_pivot(&mut self, trace: &mut Trace, part: Partition) {
        let slot = part.pivot_slot();
        trace.values.swap(slot, part.high);

        let placed = trace
            .snapshot(self.progress(trace))
            .with_range(part.low, part.high)
            .with_pivot(part.high)
            .with_boundary(Some(slot))
            .with_description(format!(
                "Placing pivot {} at final position {}",
                part.pivot, slot
            ));
        trace.emit(placed);
        self.finalized.insert(slot);

        if slot < part.high {
            self.tasks.push(Task::Range {
                low: slot + 1,
                high: part.high,
            });
        }
        if slot > part.low {
            self.tasks.push(Task::Range {
                low: part.low,
                high: slot - 1,
            });
        }
    }
}

impl Stage for QuickSort {
    fn advance(&mut self, trace: &mut Trace) -> bool {
        match self.tasks.pop() {
            None => {
                trace.finish();
                false
            }
            Some(Task::Range { low, high }) => {
                self.enter_range(trace, low, high);
                true
            }
            Some(Task::Partition(mut part)) => {
                if part.next < part.high {
                    self.compare_next(trace, &mut part);
                    self.tasks.push(Task::Partition(part));
                } else {
                    self.place_pivot(trace, part);
                }
                true
            }
        }
    }
}
