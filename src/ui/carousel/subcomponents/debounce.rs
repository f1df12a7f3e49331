// SPDX-License-Identifier: MPL-2.0
//! Trailing-edge debouncer driven by explicit timestamps.

use std::time::{Duration, Instant};

/// Fires once after triggers have stopped for `delay`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Instant>,
}

impl Debouncer {
    #[must_use]
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
        }
    }

    /// Records a trigger, pushing the deadline back.
    pub fn trigger(&mut self, now: Instant) {
        self.deadline = Some(now + self.delay);
    }

    /// Returns true exactly once when the deadline has passed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn cancel(&mut self) {
        self.deadline = None;
    }

    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_after_quiet_period() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(Duration::from_millis(120));
        debouncer.trigger(start);

        assert!(!debouncer.poll(start + Duration::from_millis(100)));
        assert!(debouncer.poll(start + Duration::from_millis(120)));
        assert!(!debouncer.poll(start + Duration::from_millis(500)));
    }

    #[test]
    fn repeated_triggers_push_deadline() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(Duration::from_millis(120));
        debouncer.trigger(start);
        debouncer.trigger(start + Duration::from_millis(100));

        assert!(!debouncer.poll(start + Duration::from_millis(150)));
        assert!(debouncer.poll(start + Duration::from_millis(220)));
    }

    #[test]
    fn cancel_clears_pending_deadline() {
        let start = Instant::now();
        let mut debouncer = Debouncer::new(Duration::from_millis(50));
        debouncer.trigger(start);
        debouncer.cancel();

        assert!(!debouncer.is_pending());
        assert!(!debouncer.poll(start + Duration::from_secs(1)));
    }
}
