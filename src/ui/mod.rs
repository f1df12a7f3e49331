// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module follows the Elm-style "state down, messages up" pattern.
//!
//! - [`carousel`] - The carousel component and its sub-components
//! - [`state`] - Pure state types (drag gestures, auto-advance interval)
//! - [`widgets`] - Custom Iced widgets
//! - [`styles`] - Centralized styling (buttons, containers, overlays, tooltips)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod carousel;
pub mod design_tokens;
pub mod state;
pub mod styles;
pub mod theming;
pub mod widgets;
