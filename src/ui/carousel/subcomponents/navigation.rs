// SPDX-License-Identifier: MPL-2.0
//! Navigation sub-component: the current slide index and its bounds.
//!
//! `current_index` stays in `0..slide_count` whenever there are slides and is
//! `0` when there are none. Every navigation path goes through the same
//! boundary policy.

use serde::{Deserialize, Serialize};

/// What happens when navigating before the first or after the last slide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BoundaryPolicy {
    /// Continue from the other end.
    #[default]
    Wrap,
    /// Stay on the first/last slide.
    Clamp,
}

impl BoundaryPolicy {
    /// Maps a possibly out-of-range target onto `0..count`.
    ///
    /// Returns `None` when there are no slides.
    #[must_use]
    pub fn apply(self, target: isize, count: usize) -> Option<usize> {
        if count == 0 {
            return None;
        }
        let count = count as isize;
        let index = match self {
            BoundaryPolicy::Wrap => target.rem_euclid(count),
            BoundaryPolicy::Clamp => target.clamp(0, count - 1),
        };
        Some(index as usize)
    }
}

/// Navigation sub-component state.
#[derive(Debug, Clone, Default)]
pub struct State {
    current_index: usize,
    slide_count: usize,
    policy: BoundaryPolicy,
}

/// Messages for the navigation sub-component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Previous,
    Next,
    GoTo(usize),
    First,
    Last,
    /// The slide set was rebuilt with this many slides.
    Reset(usize),
    /// The slide at this position was removed.
    SlideRemoved(usize),
}

/// Effects produced by navigation changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// No slides, nothing happened.
    None,
    /// The index was (re)applied; `changed` tells whether it moved.
    Navigated { index: usize, changed: bool },
}

impl State {
    #[must_use]
    pub fn new(policy: BoundaryPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    #[must_use]
    pub fn policy(&self) -> BoundaryPolicy {
        self.policy
    }

    /// Whether a step backwards from the current slide goes nowhere.
    ///
    /// Under [`BoundaryPolicy::Wrap`] that only happens with fewer than two
    /// slides.
    #[must_use]
    pub fn at_first(&self) -> bool {
        match self.policy {
            BoundaryPolicy::Wrap => self.slide_count <= 1,
            BoundaryPolicy::Clamp => self.current_index == 0,
        }
    }

    /// Whether a step forwards from the current slide goes nowhere.
    #[must_use]
    pub fn at_last(&self) -> bool {
        match self.policy {
            BoundaryPolicy::Wrap => self.slide_count <= 1,
            BoundaryPolicy::Clamp => self.current_index + 1 >= self.slide_count,
        }
    }

    /// Handle a navigation message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        let current = self.current_index as isize;
        match msg {
            Message::Previous => self.go_to(current - 1),
            Message::Next => self.go_to(current + 1),
            Message::GoTo(index) => self.go_to(isize::try_from(index).unwrap_or(isize::MAX)),
            Message::First => self.go_to(0),
            Message::Last => self.go_to(self.slide_count as isize - 1),
            Message::Reset(count) => {
                self.slide_count = count;
                self.current_index = 0;
                if count == 0 {
                    Effect::None
                } else {
                    Effect::Navigated {
                        index: 0,
                        changed: current != 0,
                    }
                }
            }
            Message::SlideRemoved(position) => {
                if position >= self.slide_count {
                    return Effect::None;
                }
                self.slide_count -= 1;
                if position < self.current_index {
                    self.current_index -= 1;
                }
                if self.current_index >= self.slide_count {
                    self.current_index = self.slide_count.saturating_sub(1);
                }
                if self.slide_count == 0 {
                    return Effect::None;
                }
                Effect::Navigated {
                    index: self.current_index,
                    changed: self.current_index as isize != current,
                }
            }
        }
    }

    fn go_to(&mut self, target: isize) -> Effect {
        match self.policy.apply(target, self.slide_count) {
            Some(index) => {
                let changed = index != self.current_index;
                self.current_index = index;
                Effect::Navigated { index, changed }
            }
            None => Effect::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_slides(count: usize, policy: BoundaryPolicy) -> State {
        let mut state = State::new(policy);
        state.handle(Message::Reset(count));
        state
    }

    #[test]
    fn wrap_next_from_last_returns_to_first() {
        let mut state = with_slides(3, BoundaryPolicy::Wrap);
        state.handle(Message::Last);
        assert_eq!(
            state.handle(Message::Next),
            Effect::Navigated {
                index: 0,
                changed: true
            }
        );
    }

    #[test]
    fn wrap_previous_from_first_goes_to_last() {
        let mut state = with_slides(4, BoundaryPolicy::Wrap);
        state.handle(Message::Previous);
        assert_eq!(state.current_index(), 3);
    }

    #[test]
    fn wrap_go_to_out_of_range_uses_modulo() {
        let mut state = with_slides(4, BoundaryPolicy::Wrap);
        state.handle(Message::GoTo(6));
        assert_eq!(state.current_index(), 2);
    }

    #[test]
    fn clamp_stays_at_edges() {
        let mut state = with_slides(3, BoundaryPolicy::Clamp);
        assert_eq!(
            state.handle(Message::Previous),
            Effect::Navigated {
                index: 0,
                changed: false
            }
        );
        state.handle(Message::GoTo(10));
        assert_eq!(state.current_index(), 2);
        state.handle(Message::Next);
        assert_eq!(state.current_index(), 2);
    }

    #[test]
    fn navigation_without_slides_is_noop() {
        let mut state = State::new(BoundaryPolicy::Wrap);
        for msg in [
            Message::Next,
            Message::Previous,
            Message::GoTo(3),
            Message::First,
            Message::Last,
        ] {
            assert_eq!(state.handle(msg), Effect::None);
            assert_eq!(state.current_index(), 0);
        }
    }

    #[test]
    fn go_to_current_is_idempotent() {
        let mut state = with_slides(5, BoundaryPolicy::Wrap);
        state.handle(Message::GoTo(3));
        let again = state.handle(Message::GoTo(state.current_index()));
        assert_eq!(
            again,
            Effect::Navigated {
                index: 3,
                changed: false
            }
        );
    }

    #[test]
    fn index_stays_in_bounds_for_mixed_sequences() {
        for policy in [BoundaryPolicy::Wrap, BoundaryPolicy::Clamp] {
            let mut state = with_slides(4, policy);
            let sequence = [
                Message::Next,
                Message::Next,
                Message::Previous,
                Message::GoTo(17),
                Message::Previous,
                Message::Previous,
                Message::Previous,
                Message::Last,
                Message::Next,
                Message::First,
                Message::Previous,
            ];
            for msg in sequence {
                state.handle(msg);
                assert!(state.current_index() < state.slide_count());
            }
        }
    }

    #[test]
    fn removing_slide_before_current_shifts_index() {
        let mut state = with_slides(4, BoundaryPolicy::Wrap);
        state.handle(Message::GoTo(2));
        state.handle(Message::SlideRemoved(1));

        assert_eq!(state.slide_count(), 3);
        assert_eq!(state.current_index(), 1);
    }

    #[test]
    fn removing_current_last_slide_clamps_index() {
        let mut state = with_slides(3, BoundaryPolicy::Wrap);
        state.handle(Message::GoTo(2));
        state.handle(Message::SlideRemoved(2));

        assert_eq!(state.slide_count(), 2);
        assert_eq!(state.current_index(), 1);
    }

    #[test]
    fn removing_slide_after_current_keeps_index() {
        let mut state = with_slides(3, BoundaryPolicy::Wrap);
        state.handle(Message::SlideRemoved(2));
        assert_eq!(state.current_index(), 0);
        assert_eq!(state.slide_count(), 2);
    }

    #[test]
    fn removing_only_slide_empties_state() {
        let mut state = with_slides(1, BoundaryPolicy::Clamp);
        assert_eq!(state.handle(Message::SlideRemoved(0)), Effect::None);
        assert_eq!(state.slide_count(), 0);
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn reset_returns_to_first_slide() {
        let mut state = with_slides(5, BoundaryPolicy::Wrap);
        state.handle(Message::GoTo(4));
        state.handle(Message::Reset(2));
        assert_eq!(state.current_index(), 0);
        assert_eq!(state.slide_count(), 2);
    }

    #[test]
    fn clamp_edges_follow_index() {
        let mut state = with_slides(3, BoundaryPolicy::Clamp);
        assert!(state.at_first());
        assert!(!state.at_last());
        state.handle(Message::Last);
        assert!(state.at_last());
        assert!(!state.at_first());
    }

    #[test]
    fn wrap_has_no_edges_with_several_slides() {
        let mut state = with_slides(3, BoundaryPolicy::Wrap);
        assert!(!state.at_first());
        assert!(!state.at_last());
        state.handle(Message::Last);
        assert!(!state.at_last());
    }

    #[test]
    fn wrap_single_slide_is_both_edges() {
        let state = with_slides(1, BoundaryPolicy::Wrap);
        assert!(state.at_first());
        assert!(state.at_last());
    }
}
