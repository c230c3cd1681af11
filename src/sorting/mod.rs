//! Step-sequence generators for the supported sorting algorithms
//!
//! Each algorithm is an explicit state machine holding its call stack as data.
//! A call to [`Stage::advance`] performs one logical unit of work (one
//! comparison, one partition step, one merge placement) and queues the
//! snapshots it produced on a shared [`Trace`]. [`Steps`] wraps a stage as a
//! pull-based iterator that drains the queue before advancing again, so the
//! playback controller can pull exactly one [`Snapshot`] at a time.
//!
//! # Guarantees
//!
//! - The input slice is cloned on entry and never mutated.
//! - Every snapshot carries a full copy of the working array.
//! - `progress_percent` is non-decreasing and reaches 100 only on the single
//!   terminal snapshot.
//! - Empty input yields the terminal snapshot and nothing else.

pub mod bubble;
pub mod merge;
pub mod quick;

use crate::errors::ParseAlgorithmError;
use crate::snapshot::Snapshot;
use std::collections::VecDeque;
use std::fmt;
use std::iter::FusedIterator;
use std::str::FromStr;

/// A lazily produced, finite sequence of snapshots
pub type SnapshotStream = Box<dyn Iterator<Item = Snapshot>>;

/// The sorting algorithms that can be visualized
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    #[default]
    Bubble,
    Quick,
    Merge,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Bubble, Algorithm::Quick, Algorithm::Merge];

    /// Machine-readable name, accepted back by [`FromStr`]
    pub fn name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Quick => "quicksort",
            Algorithm::Merge => "mergesort",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Quick => "Quicksort",
            Algorithm::Merge => "Merge Sort",
        }
    }

    /// Start a fresh step sequence over a copy of `input`
    pub fn steps(self, input: &[i64]) -> SnapshotStream {
        match self {
            Algorithm::Bubble => Box::new(bubble::steps(input)),
            Algorithm::Quick => Box::new(quick::steps(input)),
            Algorithm::Merge => Box::new(merge::steps(input)),
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bubble" | "bubblesort" => Ok(Algorithm::Bubble),
            "quick" | "quicksort" => Ok(Algorithm::Quick),
            "merge" | "mergesort" => Ok(Algorithm::Merge),
            _ => Err(ParseAlgorithmError {
                name: s.to_string(),
            }),
        }
    }
}

/// Rounded completion percentage for an in-progress snapshot.
///
/// Capped at 99: only the terminal snapshot reports 100.
pub fn running_percent(done: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let percent = (done as f64 / total as f64 * 100.0).round();
    percent.clamp(0.0, 99.0) as u8
}

/// The working array of one run plus the snapshots queued but not yet pulled
#[derive(Debug)]
pub struct Trace {
    pub values: Vec<i64>,
    pending: VecDeque<Snapshot>,
}

impl Trace {
    fn new(input: &[i64]) -> Self {
        Trace {
            values: input.to_vec(),
            pending: VecDeque::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// A snapshot of the working array as it stands right now
    pub fn snapshot(&self, progress: u8) -> Snapshot {
        Snapshot::new(self.values.clone(), progress)
    }

    pub fn emit(&mut self, snapshot: Snapshot) {
        self.pending.push_back(snapshot);
    }

    /// Queue the terminal snapshot
    pub fn finish(&mut self) {
        self.pending.push_back(Snapshot::terminal(self.values.clone()));
    }
}

/// One algorithm's resumable execution state
pub trait Stage {
    /// Perform the next unit of work, queueing its snapshots on `trace`.
    ///
    /// Returns `false` once the algorithm has queued its terminal snapshot.
    fn advance(&mut self, trace: &mut Trace) -> bool;
}

/// Pull-based iterator over the snapshots of one stage
#[derive(Debug)]
pub struct Steps<S> {
    stage: S,
    trace: Trace,
    exhausted: bool,
}

impl<S: Stage> Steps<S> {
    pub(crate) fn new(stage: S, input: &[i64]) -> Self {
        Steps {
            stage,
            trace: Trace::new(input),
            exhausted: false,
        }
    }
}

impl<S: Stage> Iterator for Steps<S> {
    type Item = Snapshot;

    fn next(&mut self) -> Option<Snapshot> {
        while self.trace.pending.is_empty() && !self.exhausted {
            self.exhausted = !self.stage.advance(&mut self.trace);
        }
        self.trace.pending.pop_front()
    }
}

impl<S: Stage> FusedIterator for Steps<S> {}

/// Render values as `[a, b, c]` for step descriptions
pub(crate) fn list(values: &[i64]) -> String {
    let items: Vec<String> = values.iter().map(|v| v.to_string()).collect();
    format!("[{}]", items.join(", "))
}
