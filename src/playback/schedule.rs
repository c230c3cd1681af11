//! The single pending auto-advance of a playback controller
//!
//! The host event loop owns the clock: it polls [`Schedule::take_due`] with
//! the current instant. Scheduling replaces any pending tick, so at most one
//! auto-advance is ever outstanding.

use std::time::{Duration, Instant};

#[derive(Debug, Default)]
pub struct Schedule {
    due: Option<Instant>,
}

impl Schedule {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule the next tick `delay` after `now`, replacing any pending one
    pub fn schedule(&mut self, now: Instant, delay: Duration) {
        self.due = Some(now + delay);
    }

    pub fn cancel(&mut self) {
        self.due = None;
    }

    pub fn is_pending(&self) -> bool {
        self.due.is_some()
    }

    pub fn due(&self) -> Option<Instant> {
        self.due
    }

    /// Consume the pending tick if it has come due by `now`
    pub fn take_due(&mut self, now: Instant) -> bool {
        match self.due {
            Some(due) if now >= due => {
                self.due = None;
                true
            }
            _ => false,
        }
    }
}
