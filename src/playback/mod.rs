//! Playback controller: drives a step generator, buffers every snapshot in a
//! [`RunHistory`], and lets the presentation layer step forward and backward
//! through it.
//!
//! # States
//!
//! - **Idle**: no generator yet; the working array is shown as-is.
//! - **Running**: an auto-advance is scheduled and fires through [`Controller::tick`].
//! - **Paused**: generator and history retained, nothing scheduled.
//! - **Complete**: the terminal snapshot is on screen.
//!
//! Every operation cancels the pending auto-advance before doing anything else,
//! so one generator is never pulled twice for a single logical step. Invalid
//! calls (stepping back past the start, starting an empty list) are no-ops.
//!
//! Stepping forward while the cursor is behind the end of history replays the
//! buffered snapshot; the generator is only pulled at the frontier.

pub mod list;
pub mod schedule;

use crate::snapshot::{RunHistory, Snapshot};
use crate::sorting::{Algorithm, SnapshotStream};
use rand::rngs::StdRng;
use rand::SeedableRng;
use schedule::Schedule;
use std::time::{Duration, Instant};
use tracing::{debug, info, trace};

/// Default auto-advance interval in milliseconds
pub const DEFAULT_INTERVAL_MS: u64 = 250;

/// Number of trailing step descriptions exposed to the presentation layer
pub const DEFAULT_DESCRIPTION_WINDOW: usize = 5;

/// Length of the random list generated when resetting an empty list
pub const DEFAULT_LIST_LENGTH: usize = 10;

/// Exclusive upper bound of randomly generated values
pub const DEFAULT_MAX_VALUE: i64 = 100;

/// The list shown before the user picks a length
pub const INITIAL_LIST: [i64; 9] = [8, 2, 4, 7, 1, 3, 9, 6, 5];

/// Tunables for a [`Controller`]
#[derive(Debug, Clone)]
pub struct PlaybackConfig {
    pub interval: Duration,
    pub description_window: usize,
    pub default_list_length: usize,
    pub max_value: i64,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        PlaybackConfig {
            interval: Duration::from_millis(DEFAULT_INTERVAL_MS),
            description_window: DEFAULT_DESCRIPTION_WINDOW,
            default_list_length: DEFAULT_LIST_LENGTH,
            max_value: DEFAULT_MAX_VALUE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackState {
    Idle,
    Running,
    Paused,
    Complete,
}

pub struct Controller {
    algorithm: Algorithm,
    config: PlaybackConfig,

    /// The array the next generator will sort; follows the applied snapshot
    values: Vec<i64>,

    generator: Option<SnapshotStream>,
    history: RunHistory,

    /// Trailing window of step descriptions ending at the cursor
    recent: Vec<String>,

    state: PlaybackState,
    schedule: Schedule,
    rng: StdRng,
}

impl Controller {
    /// Create a controller seeded from the operating system's RNG
    pub fn new(algorithm: Algorithm, values: Vec<i64>, config: PlaybackConfig) -> Self {
        Self::with_rng(algorithm, values, config, StdRng::from_os_rng())
    }

    /// Create a controller whose shuffles are reproducible
    pub fn with_seed(
        algorithm: Algorithm,
        values: Vec<i64>,
        config: PlaybackConfig,
        seed: u64,
    ) -> Self {
        Self::with_rng(algorithm, values, config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(
        algorithm: Algorithm,
        values: Vec<i64>,
        config: PlaybackConfig,
        rng: StdRng,
    ) -> Self {
        Controller {
            algorithm,
            config,
            values,
            generator: None,
            history: RunHistory::new(),
            recent: Vec::new(),
            state: PlaybackState::Idle,
            schedule: Schedule::new(),
            rng,
        }
    }

    /// Begin (or resume) auto-advancing
    pub fn start(&mut self) {
        self.start_at(Instant::now());
    }

    /// [`Controller::start`] with an explicit clock reading for the first tick
    pub fn start_at(&mut self, now: Instant) {
        if self.values.is_empty() {
            return;
        }
        self.schedule.cancel();

        if self.state == PlaybackState::Complete {
            list::reshuffle(&mut self.values, &mut self.rng);
            self.discard_run();
            debug!(values = ?self.values, "reshuffled after completed run");
        }

        if self.generator.is_none() {
            self.generator = Some(self.algorithm.steps(&self.values));
            info!(algorithm = %self.algorithm, len = self.values.len(), "starting sort");
        }

        self.state = PlaybackState::Running;
        self.advance();
        self.reschedule(now);
    }

    /// Pause auto-advance, keeping generator and history
    pub fn stop(&mut self) {
        self.schedule.cancel();
        if self.state == PlaybackState::Running {
            self.state = PlaybackState::Paused;
            debug!(cursor = ?self.history.cursor(), "paused");
        }
    }

    /// Advance exactly one snapshot, replaying history when the cursor is behind
    pub fn step(&mut self) {
        self.schedule.cancel();
        if self.state == PlaybackState::Running {
            self.state = PlaybackState::Paused;
        }
        if self.state == PlaybackState::Complete && !self.history.is_behind() {
            return;
        }
        if self.generator.is_none() && !self.history.is_behind() {
            if self.values.is_empty() {
                return;
            }
            self.generator = Some(self.algorithm.steps(&self.values));
            debug!(algorithm = %self.algorithm, "generator created by manual step");
        }
        self.advance();
        if self.state == PlaybackState::Idle {
            self.state = PlaybackState::Paused;
        }
    }

    /// Rewind one snapshot; never re-invokes the generator
    pub fn step_back(&mut self) {
        self.schedule.cancel();
        if self.state == PlaybackState::Running {
            self.state = PlaybackState::Paused;
        }
        if self.history.back().is_some() {
            self.apply();
        }
    }

    /// Discard the run and reshuffle the working array
    pub fn reset(&mut self) {
        self.schedule.cancel();
        self.discard_run();
        if self.values.is_empty() {
            self.values = list::random_list(
                self.config.default_list_length,
                self.config.max_value,
                &mut self.rng,
            );
        } else {
            list::reshuffle(&mut self.values, &mut self.rng);
        }
        self.state = PlaybackState::Idle;
        info!(len = self.values.len(), "reset");
    }

    /// Replace the working array with a fresh random list of `len` values
    pub fn set_list_length(&mut self, len: usize) {
        self.schedule.cancel();
        self.discard_run();
        self.values = list::random_list(len, self.config.max_value, &mut self.rng);
        self.state = PlaybackState::Idle;
        info!(len, "list resized");
    }

    /// Replace the working array with caller-supplied values
    pub fn set_values(&mut self, values: Vec<i64>) {
        self.schedule.cancel();
        self.discard_run();
        self.values = values;
        self.state = PlaybackState::Idle;
    }

    /// Switch algorithms; the current run is discarded but the array is kept
    pub fn set_algorithm(&mut self, algorithm: Algorithm) {
        if algorithm == self.algorithm {
            return;
        }
        self.schedule.cancel();
        self.discard_run();
        self.algorithm = algorithm;
        self.state = PlaybackState::Idle;
        info!(algorithm = %algorithm, "algorithm changed");
    }

    /// Change the auto-advance interval; a tick already pending keeps its deadline
    pub fn set_speed(&mut self, ms: u64) {
        self.config.interval = Duration::from_millis(ms);
        debug!(ms, "speed changed");
    }

    /// Fire the pending auto-advance if it has come due by `now`.
    ///
    /// Returns whether a snapshot was applied.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.schedule.take_due(now) || self.state != PlaybackState::Running {
            return false;
        }
        let applied = self.advance();
        self.reschedule(now);
        applied
    }

    /// Deadline of the pending auto-advance, if any
    pub fn next_tick_due(&self) -> Option<Instant> {
        self.schedule.due()
    }

    /// Move forward one snapshot: replay if behind, otherwise pull the generator
    fn advance(&mut self) -> bool {
        if self.history.forward().is_some() {
            self.apply();
            return true;
        }

        let pulled = self.generator.as_mut().and_then(|g| g.next());
        match pulled {
            Some(snapshot) => {
                self.history.push(snapshot);
                self.apply();
                true
            }
            None => {
                self.state = PlaybackState::Complete;
                debug!(snapshots = self.history.len(), "generator exhausted");
                false
            }
        }
    }

    fn reschedule(&mut self, now: Instant) {
        if self.state == PlaybackState::Running {
            self.schedule.schedule(now, self.config.interval);
        }
    }

    /// Expose the snapshot under the cursor and refresh derived view state
    fn apply(&mut self) {
        let Some(snapshot) = self.history.current() else {
            return;
        };
        trace!(
            cursor = ?self.history.cursor(),
            description = snapshot.description.as_deref().unwrap_or(""),
            "applied snapshot"
        );
        self.values.clone_from(&snapshot.values);
        let done = snapshot.done;

        self.recent = self
            .history
            .recent_descriptions(self.config.description_window);

        if done {
            self.state = PlaybackState::Complete;
            self.schedule.cancel();
        } else if self.state == PlaybackState::Complete {
            self.state = PlaybackState::Paused;
        }
    }

    fn discard_run(&mut self) {
        self.generator = None;
        self.history.clear();
        self.recent.clear();
    }

    pub fn current(&self) -> Option<&Snapshot> {
        self.history.current()
    }

    /// The array currently on display
    pub fn values(&self) -> &[i64] {
        &self.values
    }

    pub fn recent_descriptions(&self) -> &[String] {
        &self.recent
    }

    pub fn progress(&self) -> u8 {
        self.current().map_or(0, |s| s.progress_percent)
    }

    pub fn cursor(&self) -> Option<usize> {
        self.history.cursor()
    }

    pub fn history(&self) -> &RunHistory {
        &self.history
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    pub fn can_step_back(&self) -> bool {
        self.history.cursor().is_some_and(|c| c > 0)
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Running
    }

    pub fn is_complete(&self) -> bool {
        self.state == PlaybackState::Complete
    }

    pub fn has_pending_tick(&self) -> bool {
        self.schedule.is_pending()
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    pub fn speed(&self) -> Duration {
        self.config.interval
    }
}
