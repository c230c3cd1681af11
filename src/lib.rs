//! # Introduction
//!
//! Sortscope visualizes classic comparison sorts one micro-step at a time.
//! Each algorithm is reformulated as a lazily produced sequence of
//! [`snapshot::Snapshot`]s; a playback controller buffers them so the user
//! can play, pause, and step forward and backward through the run in a
//! terminal UI built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Input list → Generator → Snapshots → Controller (history + cursor) → TUI
//! ```
//!
//! 1. [`sorting`]: bubble sort, quicksort (Lomuto), and merge sort as
//!    explicit state machines that yield one snapshot per pull.
//! 2. [`snapshot`]: the snapshot record and the append-only run history
//!    with its time-travel cursor.
//! 3. [`playback`]: the controller state machine (idle, running, paused,
//!    complete), the auto-advance schedule, and list shuffling.
//! 4. [`ui`]: ratatui-based TUI; not part of the stable library API.

pub mod errors;
pub mod playback;
pub mod snapshot;
pub mod sorting;
pub mod ui;
