// SPDX-License-Identifier: MPL-2.0
//! Drag state management
//!
//! Tracks a pointer or touch gesture on the slide track between press and
//! release, and classifies it as a swipe, a tap, or a vertical scroll.

use crate::app::config::{
    DEFAULT_EDGE_RESISTANCE, DEFAULT_SWIPE_DISTANCE_PX, DEFAULT_SWIPE_TIME_MS, DRAG_SLOP_PX,
};
use iced::{Point, Vector};
use std::time::{Duration, Instant};

/// Thresholds used to recognize a swipe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeThresholds {
    /// Movement below which the gesture direction is still undecided.
    pub slop_px: f32,
    /// Horizontal travel a swipe must exceed.
    pub distance_px: f32,
    /// Time within which a swipe must complete.
    pub max_duration: Duration,
    /// Factor applied to the live offset when dragging past an edge.
    pub edge_resistance: f32,
}

impl Default for SwipeThresholds {
    fn default() -> Self {
        Self {
            slop_px: DRAG_SLOP_PX,
            distance_px: DEFAULT_SWIPE_DISTANCE_PX,
            max_duration: Duration::from_millis(DEFAULT_SWIPE_TIME_MS),
            edge_resistance: DEFAULT_EDGE_RESISTANCE,
        }
    }
}

/// Which way the gesture is going, once decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Axis {
    Undecided,
    Horizontal,
    Vertical,
}

/// What a finished gesture amounts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragOutcome {
    /// Dragged left far and fast enough.
    Next,
    /// Dragged right far and fast enough.
    Previous,
    /// Moved, but not a swipe: return to the current slide.
    SnapBack,
    /// Pressed and released without moving.
    Tap,
}

/// A gesture in progress.
#[derive(Debug, Clone, PartialEq)]
pub struct DragState {
    /// Pointer position at press.
    pub start_position: Point,
    /// Time of press.
    pub start_time: Instant,
    /// Track translation at press.
    pub start_offset: f32,
    /// Live horizontal offset applied on top of `start_offset`.
    pub current_offset_px: f32,
    /// The gesture turned out to be a vertical scroll and is ignored.
    pub vertical_scroll_detected: bool,
    last_position: Point,
    axis: Axis,
}

impl DragState {
    /// Starts tracking a gesture.
    #[must_use]
    pub fn start(position: Point, now: Instant, start_offset: f32) -> Self {
        Self {
            start_position: position,
            start_time: now,
            start_offset,
            current_offset_px: 0.0,
            vertical_scroll_detected: false,
            last_position: position,
            axis: Axis::Undecided,
        }
    }

    /// Moves the anchor to `position` as long as the pointer has not moved yet.
    ///
    /// Used when a more precise press position (a touch point) arrives after
    /// the gesture was started from the last known cursor position.
    pub fn reanchor(&mut self, position: Point) {
        if self.axis == Axis::Undecided && self.current_offset_px == 0.0 {
            self.start_position = position;
            self.last_position = position;
        }
    }

    /// Whether the live offset is being applied to the track.
    #[must_use]
    pub fn is_horizontal(&self) -> bool {
        self.axis == Axis::Horizontal
    }

    /// Total pointer movement since press.
    #[must_use]
    pub fn displacement(&self) -> Vector {
        self.last_position - self.start_position
    }

    /// Feeds a pointer move.
    ///
    /// `at_first`/`at_last` tell whether there is no slide before/after the
    /// current one, in which case the offset is damped. Returns the new live
    /// offset when it changed.
    pub fn update(
        &mut self,
        position: Point,
        at_first: bool,
        at_last: bool,
        thresholds: &SwipeThresholds,
    ) -> Option<f32> {
        if self.vertical_scroll_detected {
            return None;
        }
        self.last_position = position;
        let delta = self.displacement();

        if self.axis == Axis::Undecided {
            if delta.x.hypot(delta.y) <= thresholds.slop_px {
                return None;
            }
            if delta.y.abs() > delta.x.abs() {
                self.axis = Axis::Vertical;
                self.vertical_scroll_detected = true;
                return None;
            }
            self.axis = Axis::Horizontal;
        }

        let past_edge = (delta.x > 0.0 && at_first) || (delta.x < 0.0 && at_last);
        let offset = if past_edge {
            delta.x * thresholds.edge_resistance
        } else {
            delta.x
        };

        if (offset - self.current_offset_px).abs() < f32::EPSILON {
            return None;
        }
        self.current_offset_px = offset;
        Some(offset)
    }

    /// Classifies the gesture at release.
    #[must_use]
    pub fn finish(&self, now: Instant, thresholds: &SwipeThresholds) -> DragOutcome {
        match self.axis {
            Axis::Undecided => DragOutcome::Tap,
            Axis::Vertical => DragOutcome::SnapBack,
            Axis::Horizontal => {
                let dx = self.displacement().x;
                let elapsed = now.saturating_duration_since(self.start_time);
                if dx.abs() > thresholds.distance_px && elapsed <= thresholds.max_duration {
                    if dx < 0.0 {
                        DragOutcome::Next
                    } else {
                        DragOutcome::Previous
                    }
                } else {
                    DragOutcome::SnapBack
                }
            }
        }
    }
}
