// SPDX-License-Identifier: MPL-2.0
//! Slide transition sub-component.
//!
//! Holds the track position in slide units (`1.0` = one panel width) and
//! tweens it linearly towards a target. The pixel translation is
//! `-position * panel_width`, so a resize never disturbs an animation.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq)]
struct Tween {
    from: f32,
    to: f32,
    started_at: Instant,
    duration: Duration,
}

impl Tween {
    fn sample(&self, now: Instant) -> Option<f32> {
        let elapsed = now.saturating_duration_since(self.started_at);
        if elapsed >= self.duration {
            return None;
        }
        let t = (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0);
        Some(self.from + (self.to - self.from) * t)
    }
}

/// Transition sub-component state.
#[derive(Debug, Clone, PartialEq)]
pub struct State {
    position: f32,
    duration: Duration,
    tween: Option<Tween>,
}

/// Messages for the transition sub-component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    /// Move to a slide with an animation.
    AnimateTo { index: usize, now: Instant },
    /// Move to a slide at once.
    JumpTo(usize),
    /// Place the track at a fractional position, e.g. where a swipe left it.
    Hold(f32),
    /// Advance a running animation.
    Tick(Instant),
}

/// Effects produced by the transition.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    None,
    /// The track position changed and must be re-applied.
    PositionChanged(f32),
}

impl State {
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            position: 0.0,
            duration,
            tween: None,
        }
    }

    /// Current position in slide units.
    #[must_use]
    pub fn position(&self) -> f32 {
        self.position
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.tween.is_some()
    }

    /// Handle a transition message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::AnimateTo { index, now } => {
                let target = index as f32;
                if self.duration.is_zero() || (target - self.position).abs() < f32::EPSILON {
                    return self.handle(Message::JumpTo(index));
                }
                self.tween = Some(Tween {
                    from: self.position,
                    to: target,
                    started_at: now,
                    duration: self.duration,
                });
                Effect::None
            }
            Message::JumpTo(index) => {
                self.tween = None;
                self.set_position(index as f32)
            }
            Message::Hold(position) => {
                self.tween = None;
                self.set_position(position)
            }
            Message::Tick(now) => match self.tween {
                Some(tween) => match tween.sample(now) {
                    Some(position) => self.set_position(position),
                    None => {
                        self.tween = None;
                        self.set_position(tween.to)
                    }
                },
                None => Effect::None,
            },
        }
    }

    fn set_position(&mut self, position: f32) -> Effect {
        if (position - self.position).abs() < f32::EPSILON {
            return Effect::None;
        }
        self.position = position;
        Effect::PositionChanged(position)
    }
}
