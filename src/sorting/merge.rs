//! Top-down merge sort
//!
//! Split snapshots are emitted before recursing. The merge walks two pointers
//! over copies of the sorted halves, emitting one comparison and one placement
//! per element, then writes the scratch buffer back in a single step.

use super::{list, running_percent, Stage, Steps, Trace};

#[derive(Debug)]
enum Task {
    Split { low: usize, high: usize },
    BeginMerge { low: usize, mid: usize, high: usize },
    Merge(Merge),
}

/// State of one in-flight merge of `[low, mid]` and `[mid + 1, high]`
#[derive(Debug)]
struct Merge {
    low: usize,
    mid: usize,
    high: usize,
    left: Vec<i64>,
    right: Vec<i64>,
    merged: Vec<i64>,
    i: usize,
    j: usize,
}

#[derive(Debug)]
pub struct MergeSort {
    tasks: Vec<Task>,
    steps_done: usize,
    estimated_total: usize,
}

/// Merge sort step sequence over a copy of `input`
pub fn steps(input: &[i64]) -> Steps<MergeSort> {
    let n = input.len();
    let mut tasks = Vec::new();
    if n > 0 {
        tasks.push(Task::Split { low: 0, high: n - 1 });
    }
    Steps::new(
        MergeSort {
            tasks,
            steps_done: 0,
            estimated_total: estimated_total_steps(n),
        },
        input,
    )
}

/// `ceil(n * (log2(n) + 1))`, or 1 for an empty list
pub fn estimated_total_steps(n: usize) -> usize {
    if n == 0 {
        return 1;
    }
    let n = n as f64;
    (n * (n.log2() + 1.0)).ceil() as usize
}

impl MergeSort {
    fn progress(&self) -> u8 {
        running_percent(self.steps_done, self.estimated_total)
    }

    fn split(&mut self, trace: &mut Trace, low: usize, high: usize) {
        if low >= high {
            return;
        }
        let mid = (low + high) / 2;
        let announce = trace
            .snapshot(self.progress())
            .with_range(low, high)
            .with_boundary(Some(mid))
            .with_description(format!(
                "Splitting [{}..{}] into left [{}..{}] and right [{}..{}]",
                low,
                high,
                low,
                mid,
                mid + 1,
                high
            ));
        trace.emit(announce);

        // Popped in reverse: left half, right half, then the merge
        self.tasks.push(Task::BeginMerge { low, mid, high });
        self.tasks.push(Task::Split { low: mid + 1, high });
        self.tasks.push(Task::Split { low, high: mid });
    }

    fn begin_merge(&mut self, trace: &mut Trace, low: usize, mid: usize, high: usize) {
        let left = trace.values[low..=mid].to_vec();
        let right = trace.values[mid + 1..=high].to_vec();
        let announce = trace
            .snapshot(self.progress())
            .with_range(low, high)
            .with_description(format!("Merging: {} and {}", list(&left), list(&right)));
        trace.emit(announce);

        self.tasks.push(Task::Merge(Merge {
            low,
            mid,
            high,
            merged: Vec::with_capacity(high - low + 1),
            left,
            right,
            i: 0,
            j: 0,
        }));
    }

    /// Place one element into the scratch buffer; returns `false` when both halves are drained
    fn merge_step(&mut self, trace: &mut Trace, m: &mut Merge) -> bool {
        let chosen = if m.i < m.left.len() && m.j < m.right.len() {
            self.steps_done += 1;
            let (a, b) = (m.left[m.i], m.right[m.j]);
            let compare = trace
                .snapshot(self.progress())
                .with_focus(m.low + m.i)
                .with_compare_target(m.mid + 1 + m.j)
                .with_range(m.low, m.high)
                .with_description(format!("Comparing {} and {}", a, b));
            trace.emit(compare);

            // Ties take the left element to keep the sort stable
            if a <= b {
                m.i += 1;
                a
            } else {
                m.j += 1;
                b
            }
        } else if m.i < m.left.len() {
            self.steps_done += 1;
            m.i += 1;
            m.left[m.i - 1]
        } else if m.j < m.right.len() {
            self.steps_done += 1;
            m.j += 1;
            m.right[m.j - 1]
        } else {
            return false;
        };

        m.merged.push(chosen);
        let placed = trace
            .snapshot(self.progress())
            .with_focus(m.low + m.merged.len() - 1)
            .with_range(m.low, m.high)
            .with_description(format!(
                "Placed {} in merged result: {}",
                chosen,
                list(&m.merged)
            ));
        trace.emit(placed);
        true
    }

    fn write_back(&mut self, trace: &mut Trace, m: Merge) {
        trace.values[m.low..=m.high].copy_from_slice(&m.merged);
        self.steps_done += 1;
        let merged = trace
            .snapshot(self.progress())
            .with_range(m.low, m.high)
            .with_description(format!(
                "Merged segment [{}..{}] => {}",
                m.low,
                m.high,
                list(&m.merged)
            ));
        trace.emit(merged);
    }
}

impl Stage for MergeSort {
    fn advance(&mut self, trace: &mut Trace) -> bool {
        match self.tasks.pop() {
            None => {
                trace.finish();
                false
            }
            Some(Task::Split { low, high }) => {
                self.split(trace, low, high);
                true
            }
            Some(Task::BeginMerge { low, mid, high }) => {
                self.begin_merge(trace, low, mid, high);
                true
            }
            Some(Task::Merge(mut m)) => {
                if self.merge_step(trace, &mut m) {
                    self.tasks.push(Task::Merge(m));
                } else {
                    self.write_back(trace, m);
                }
                true
            }
        }
    }
}
