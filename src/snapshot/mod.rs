// Snapshot records and the run history used for time-travel playback

use std::mem;

/// An inclusive `[low, high]` index range within the working array
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexRange {
    low: usize,
    high: usize,
}

impl IndexRange {
    /// Create a range; callers must pass `low <= high`
    pub fn new(low: usize, high: usize) -> Self {
        debug_assert!(low <= high, "reversed index range {}..={}", low, high);
        IndexRange { low, high }
    }

    pub fn low(&self) -> usize {
        self.low
    }

    pub fn high(&self) -> usize {
        self.high
    }

    pub fn contains(&self, index: usize) -> bool {
        (self.low..=self.high).contains(&index)
    }
}

/// One observable moment of a sort in progress
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Full copy of the working array after this step
    pub values: Vec<i64>,
    pub focus: Option<usize>,
    pub compare_target: Option<usize>,
    pub done: bool,
    pub progress_percent: u8,
    pub description: Option<String>,
    /// Active sub-range (quicksort partition, merge sort segment)
    pub range: Option<IndexRange>,
    pub pivot_index: Option<usize>,
    /// Lomuto boundary for quicksort, split point for merge sort
    pub boundary_index: Option<usize>,
    /// Every index at or beyond this one holds its final value
    pub sorted_boundary: Option<usize>,
}

impl Snapshot {
    /// A bare in-progress snapshot with no cursor metadata
    pub fn new(values: Vec<i64>, progress_percent: u8) -> Self {
        Snapshot {
            values,
            focus: None,
            compare_target: None,
            done: false,
            progress_percent,
            description: None,
            range: None,
            pivot_index: None,
            boundary_index: None,
            sorted_boundary: None,
        }
    }

    /// The single terminal snapshot of a run
    pub fn terminal(values: Vec<i64>) -> Self {
        Snapshot {
            done: true,
            description: Some("Done".to_string()),
            sorted_boundary: Some(0),
            ..Snapshot::new(values, 100)
        }
    }

    pub fn with_focus(mut self, index: usize) -> Self {
        self.focus = Some(index);
        self
    }

    pub fn with_compare_target(mut self, index: usize) -> Self {
        self.compare_target = Some(index);
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_range(mut self, low: usize, high: usize) -> Self {
        self.range = Some(IndexRange::new(low, high));
        self
    }

    pub fn with_pivot(mut self, index: usize) -> Self {
        self.pivot_index = Some(index);
        self
    }

    pub fn with_boundary(mut self, index: Option<usize>) -> Self {
        self.boundary_index = index;
        self
    }

    pub fn with_sorted_boundary(mut self, index: usize) -> Self {
        self.sorted_boundary = Some(index);
        self
    }

    pub fn range_low(&self) -> Option<usize> {
        self.range.map(|r| r.low())
    }

    pub fn range_high(&self) -> Option<usize> {
        self.range.map(|r| r.high())
    }

    /// Whether `index` is already in its final position according to this snapshot
    pub fn is_sorted_at(&self, index: usize) -> bool {
        self.done || self.sorted_boundary.is_some_and(|b| index >= b)
    }

    /// Estimate the memory usage of this snapshot in bytes
    pub fn estimated_size(&self) -> usize {
        let values = self.values.len() * mem::size_of::<i64>();
        let description = self.description.as_ref().map_or(0, |d| d.len());
        mem::size_of::<Snapshot>() + values + description
    }
}

/// Append-only buffer of every snapshot emitted during one playback session,
/// plus the cursor used for stepping backward and forward through it
#[derive(Debug, Default)]
pub struct RunHistory {
    snapshots: Vec<Snapshot>,
    cursor: Option<usize>,
    current_memory: usize,
}

impl RunHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a freshly generated snapshot and move the cursor onto it
    pub fn push(&mut self, snapshot: Snapshot) -> &Snapshot {
        self.current_memory += snapshot.estimated_size();
        self.snapshots.push(snapshot);
        let index = self.snapshots.len() - 1;
        self.cursor = Some(index);
        &self.snapshots[index]
    }

    /// Move the cursor onto the next buffered snapshot, if the cursor is behind
    pub fn forward(&mut self) -> Option<&Snapshot> {
        let next = self.cursor.map_or(0, |c| c + 1);
        if next >= self.snapshots.len() {
            return None;
        }
        self.cursor = Some(next);
        self.snapshots.get(next)
    }

    /// Move the cursor one snapshot back; never moves before the first snapshot
    pub fn back(&mut self) -> Option<&Snapshot> {
        match self.cursor {
            Some(c) if c > 0 => {
                self.cursor = Some(c - 1);
                self.snapshots.get(c - 1)
            }
            _ => None,
        }
    }

    /// Whether the cursor sits before the newest buffered snapshot
    pub fn is_behind(&self) -> bool {
        self.cursor.map_or(0, |c| c + 1) < self.snapshots.len()
    }

    pub fn current(&self) -> Option<&Snapshot> {
        self.cursor.and_then(|c| self.snapshots.get(c))
    }

    /// Cursor position, `None` meaning "before the first snapshot"
    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn clear(&mut self) {
        self.snapshots.clear();
        self.cursor = None;
        self.current_memory = 0;
    }

    /// Descriptions of the last `window` snapshots ending at the cursor, oldest first
    pub fn recent_descriptions(&self, window: usize) -> Vec<String> {
        let Some(end) = self.cursor else {
            return Vec::new();
        };
        let start = (end + 1).saturating_sub(window);
        self.snapshots[start..=end]
            .iter()
            .filter_map(|s| s.description.clone())
            .collect()
    }

    /// Get current memory usage
    pub fn memory_usage(&self) -> usize {
        self.current_memory
    }
}
