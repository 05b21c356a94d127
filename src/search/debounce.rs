//! Debounce timer for live query input
//!
//! An explicit cancellable handle instead of an implicit timer id:
//! each keystroke cancels and re-arms the deadline, Enter/Escape
//! cancel it outright before running immediately, and the event loop
//! asks `take_due` once per tick. A stale run can therefore never
//! fire after a newer one was scheduled or forced.

use std::time::{Duration, Instant};

/// Default delay before a paused query is applied
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(600);

/// Cancellable scheduled run of the filter pipeline
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
    pending: Option<String>,
}

impl Debouncer {
    /// Create a debouncer with the given delay
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
            pending: None,
        }
    }

    /// Cancel any armed run and schedule a new one for the value
    pub fn schedule(&mut self, value: impl Into<String>, now: Instant) {
        self.pending = Some(value.into());
        self.deadline = Some(now + self.delay);
    }

    /// Cancel the armed run, if any
    pub fn cancel(&mut self) {
        self.pending = None;
        self.deadline = None;
    }

    /// Whether a run is currently armed
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.deadline.is_some()
    }

    /// Deadline of the armed run, for sizing event-loop poll timeouts
    #[must_use]
    pub const fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Take the pending value once its deadline has passed
    ///
    /// Disarms the debouncer when it fires; returns `None` while the
    /// deadline is still in the future or nothing is armed.
    pub fn take_due(&mut self, now: Instant) -> Option<String> {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                self.pending.take()
            }
            _ => None,
        }
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}
