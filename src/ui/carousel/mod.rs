// SPDX-License-Identifier: MPL-2.0
//! Image carousel: a horizontally sliding track of image panels with
//! previous/next buttons, pagination dots, swipe gestures, auto-advance and a
//! zoom modal.

pub mod component;
pub mod subcomponents;
mod view;

pub use component::{Message, Settings, State, TRACK_ID};
pub use subcomponents::navigation::BoundaryPolicy;
