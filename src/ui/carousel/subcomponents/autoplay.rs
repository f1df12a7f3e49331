// SPDX-License-Identifier: MPL-2.0
//! Auto-advance sub-component.
//!
//! A repeating timer that asks for the next slide. Hovering the carousel
//! pauses it, leaving restarts a full interval, manual navigation pushes the
//! next advance back, and the modal suspends it entirely.

use crate::ui::state::AutoAdvanceInterval;
use std::time::Instant;

/// Auto-advance sub-component state.
#[derive(Debug, Clone, Default)]
pub struct State {
    enabled: bool,
    interval: AutoAdvanceInterval,
    hovered: bool,
    suspended: bool,
    next_due: Option<Instant>,
}

/// Messages for the auto-advance sub-component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Begin advancing (initial render).
    Start(Instant),
    PointerEntered,
    PointerLeft(Instant),
    /// The user navigated by hand.
    UserNavigated(Instant),
    /// Pause while something covers the carousel.
    Suspend,
    Resume(Instant),
    /// Check whether an advance is due.
    Tick(Instant),
    /// Stop for good (disposal).
    Stop,
}

/// Effects produced by the auto-advance timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Move to the next slide.
    Advance,
}

impl State {
    #[must_use]
    pub fn new(enabled: bool, interval: AutoAdvanceInterval) -> Self {
        Self {
            enabled,
            interval,
            ..Self::default()
        }
    }

    /// Whether an advance is scheduled.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.next_due.is_some()
    }

    #[must_use]
    pub fn next_due(&self) -> Option<Instant> {
        self.next_due
    }

    #[must_use]
    pub fn interval(&self) -> AutoAdvanceInterval {
        self.interval
    }

    /// Handle an auto-advance message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Start(now) => {
                self.schedule(now);
                Effect::None
            }
            Message::PointerEntered => {
                self.hovered = true;
                self.next_due = None;
                Effect::None
            }
            Message::PointerLeft(now) => {
                self.hovered = false;
                self.schedule(now);
                Effect::None
            }
            Message::UserNavigated(now) => {
                if self.next_due.is_some() {
                    self.next_due = Some(now + self.interval.as_duration());
                }
                Effect::None
            }
            Message::Suspend => {
                self.suspended = true;
                self.next_due = None;
                Effect::None
            }
            Message::Resume(now) => {
                self.suspended = false;
                self.schedule(now);
                Effect::None
            }
            Message::Tick(now) => match self.next_due {
                Some(due) if now >= due => {
                    self.next_due = Some(now + self.interval.as_duration());
                    Effect::Advance
                }
                _ => Effect::None,
            },
            Message::Stop => {
                self.next_due = None;
                Effect::None
            }
        }
    }

    fn schedule(&mut self, now: Instant) {
        self.next_due = if self.enabled && !self.hovered && !self.suspended {
            Some(now + self.interval.as_duration())
        } else {
            None
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn running(start: Instant) -> State {
        let mut state = State::new(true, AutoAdvanceInterval::new(4000));
        state.handle(Message::Start(start));
        state
    }

    #[test]
    fn advances_after_interval() {
        let start = Instant::now();
        let mut state = running(start);

        assert_eq!(
            state.handle(Message::Tick(start + Duration::from_millis(3999))),
            Effect::None
        );
        assert_eq!(
            state.handle(Message::Tick(start + Duration::from_millis(4000))),
            Effect::Advance
        );
        assert_eq!(
            state.handle(Message::Tick(start + Duration::from_millis(4100))),
            Effect::None
        );
    }

    #[test]
    fn disabled_timer_never_runs() {
        let start = Instant::now();
        let mut state = State::new(false, AutoAdvanceInterval::default());
        state.handle(Message::Start(start));
        state.handle(Message::PointerLeft(start));

        assert!(!state.is_running());
        assert_eq!(
            state.handle(Message::Tick(start + Duration::from_secs(60))),
            Effect::None
        );
    }

    #[test]
    fn hover_pauses_and_leave_restarts_full_interval() {
        let start = Instant::now();
        let mut state = running(start);
        state.handle(Message::PointerEntered);

        assert_eq!(
            state.handle(Message::Tick(start + Duration::from_secs(30))),
            Effect::None
        );

        let left = start + Duration::from_secs(31);
        state.handle(Message::PointerLeft(left));
        let mut advances = 0;
        for ms in (0..=4000).step_by(100) {
            if state.handle(Message::Tick(left + Duration::from_millis(ms))) == Effect::Advance {
                advances += 1;
            }
        }
        assert_eq!(advances, 1);
    }

    #[test]
    fn manual_navigation_resets_deadline() {
        let start = Instant::now();
        let mut state = running(start);
        let navigated = start + Duration::from_millis(3000);
        state.handle(Message::UserNavigated(navigated));

        assert_eq!(
            state.handle(Message::Tick(start + Duration::from_millis(4500))),
            Effect::None
        );
        assert_eq!(
            state.handle(Message::Tick(navigated + Duration::from_millis(4000))),
            Effect::Advance
        );
    }

    #[test]
    fn manual_navigation_while_paused_does_not_start_timer() {
        let start = Instant::now();
        let mut state = running(start);
        state.handle(Message::PointerEntered);
        state.handle(Message::UserNavigated(start));
        assert!(!state.is_running());
    }

    #[test]
    fn suspension_blocks_hover_exit_restart() {
        let start = Instant::now();
        let mut state = running(start);
        state.handle(Message::Suspend);
        state.handle(Message::PointerLeft(start));
        assert!(!state.is_running());

        state.handle(Message::Resume(start));
        assert!(state.is_running());
    }

    #[test]
    fn stop_cancels_schedule() {
        let start = Instant::now();
        let mut state = running(start);
        state.handle(Message::Stop);
        assert!(!state.is_running());
    }
}
