// SPDX-License-Identifier: MPL-2.0
//! UI state management modules
//!
//! Pure state types used by the carousel component, kept free of widget code
//! so they can be tested on their own.

pub mod drag;
pub mod interval;

pub use drag::{DragOutcome, DragState, SwipeThresholds};
pub use interval::AutoAdvanceInterval;
