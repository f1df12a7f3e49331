// SPDX-License-Identifier: MPL-2.0
//! Swipe sub-component wrapping [`DragState`] with pointer tracking.
//!
//! Presses come from the track's mouse area; moves and releases come from raw
//! window events so a gesture keeps tracking when the pointer leaves the track.

use crate::ui::state::{DragOutcome, DragState, SwipeThresholds};
use iced::Point;
use std::time::Instant;

/// Drag sub-component state.
#[derive(Debug, Clone, Default)]
pub struct State {
    gesture: Option<DragState>,
    pointer: Option<Point>,
    thresholds: SwipeThresholds,
}

/// Messages for the drag sub-component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    /// The track was pressed; `offset` is the current track translation.
    Pressed { now: Instant, offset: f32 },
    /// The pointer moved. `at_first`/`at_last` enable edge resistance.
    PointerMoved {
        position: Point,
        at_first: bool,
        at_last: bool,
    },
    /// A finger touched down at a known position.
    TouchDown(Point),
    Released(Instant),
    /// The gesture was interrupted (lost touch, modal opened).
    Cancelled,
}

/// Effects produced by drag operations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    None,
    /// Apply this live offset to the track.
    Offset(f32),
    /// The gesture ended.
    Finished(DragOutcome),
}

impl State {
    #[must_use]
    pub fn new(thresholds: SwipeThresholds) -> Self {
        Self {
            thresholds,
            ..Self::default()
        }
    }

    /// Live offset applied to the track, zero when idle.
    #[must_use]
    pub fn offset(&self) -> f32 {
        self.gesture
            .as_ref()
            .filter(|gesture| gesture.is_horizontal())
            .map_or(0.0, |gesture| gesture.current_offset_px)
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.gesture.is_some()
    }

    #[must_use]
    pub fn gesture(&self) -> Option<&DragState> {
        self.gesture.as_ref()
    }

    /// Handle a drag message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Pressed { now, offset } => {
                let position = self.pointer.unwrap_or(Point::ORIGIN);
                self.gesture = Some(DragState::start(position, now, offset));
                Effect::None
            }
            Message::PointerMoved {
                position,
                at_first,
                at_last,
            } => {
                self.pointer = Some(position);
                match self.gesture.as_mut() {
                    Some(gesture) => gesture
                        .update(position, at_first, at_last, &self.thresholds)
                        .map_or(Effect::None, Effect::Offset),
                    None => Effect::None,
                }
            }
            Message::TouchDown(position) => {
                self.pointer = Some(position);
                if let Some(gesture) = self.gesture.as_mut() {
                    gesture.reanchor(position);
                }
                Effect::None
            }
            Message::Released(now) => match self.gesture.take() {
                Some(gesture) => Effect::Finished(gesture.finish(now, &self.thresholds)),
                None => Effect::None,
            },
            Message::Cancelled => match self.gesture.take() {
                Some(_) => Effect::Finished(DragOutcome::SnapBack),
                None => Effect::None,
            },
        }
    }
}
