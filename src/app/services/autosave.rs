use std::time::{Duration, Instant};

/// Quiet period after the last change before a save is written.
pub const AUTOSAVE_DELAY: Duration = Duration::from_millis(500);

/// A single cancel-and-reschedule timer, driven by the caller's clock.
///
/// Bursts of `schedule` calls collapse into one firing `delay` after the last call.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Restart the countdown from `now`, replacing any pending deadline.
    /// A delay too large for the clock fires on the next check.
    pub fn schedule(&mut self, now: Instant) {
        self.deadline = Some(now.checked_add(self.delay).unwrap_or(now));
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    pub fn is_due(&self, now: Instant) -> bool {
        self.deadline.is_some_and(|deadline| now >= deadline)
    }

    /// Consume the pending deadline if it has passed. Returns true exactly once per firing.
    pub fn fire_if_due(&mut self, now: Instant) -> bool {
        if self.is_due(now) {
            self.deadline = None;
            true
        } else {
            false
        }
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(AUTOSAVE_DELAY)
    }
}
