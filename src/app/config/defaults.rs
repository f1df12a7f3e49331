// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Source**: Image source locations and load timeout
//! - **Autoplay**: Auto-advance interval bounds
//! - **Navigation**: Slide transition duration
//! - **Layout**: Panel sizing and debounce delays
//! - **Gesture**: Swipe recognition thresholds

// ==========================================================================
// Source Defaults
// ==========================================================================

/// Base location used when the static image set has no explicit base.
pub const DEFAULT_IMAGE_BASE: &str = "images/";

/// Default per-image load timeout (in seconds).
pub const DEFAULT_LOAD_TIMEOUT_SECS: u32 = 10;

/// Minimum per-image load timeout (in seconds).
pub const MIN_LOAD_TIMEOUT_SECS: u32 = 1;

/// Maximum per-image load timeout (in seconds).
pub const MAX_LOAD_TIMEOUT_SECS: u32 = 120;

// ==========================================================================
// Autoplay Defaults
// ==========================================================================

/// Default delay between automatic advances (in milliseconds).
pub const DEFAULT_AUTOPLAY_INTERVAL_MS: u64 = 4000;

/// Minimum auto-advance interval (in milliseconds).
pub const MIN_AUTOPLAY_INTERVAL_MS: u64 = 1000;

/// Maximum auto-advance interval (in milliseconds).
pub const MAX_AUTOPLAY_INTERVAL_MS: u64 = 60_000;

// ==========================================================================
// Navigation Defaults
// ==========================================================================

/// Default duration of the animated slide transition (in milliseconds).
pub const DEFAULT_TRANSITION_MS: u64 = 400;

/// Maximum transition duration (in milliseconds).
pub const MAX_TRANSITION_MS: u64 = 2000;

// ==========================================================================
// Layout Defaults
// ==========================================================================

/// Fraction of the viewport height a slide image may occupy.
pub const DEFAULT_MAX_HEIGHT_RATIO: f32 = 0.64;

/// Smallest accepted max height ratio.
pub const MIN_MAX_HEIGHT_RATIO: f32 = 0.1;

/// Largest accepted max height ratio.
pub const MAX_MAX_HEIGHT_RATIO: f32 = 1.0;

/// Vertical padding added to the tallest scaled image (in logical pixels).
pub const DEFAULT_VERTICAL_PADDING: f32 = 16.0;

/// Horizontal padding on each side of a slide image (in logical pixels).
pub const DEFAULT_HORIZONTAL_PADDING: f32 = 16.0;

/// Quiet period before a resize triggers a layout pass (in milliseconds).
pub const DEFAULT_RESIZE_DEBOUNCE_MS: u64 = 120;

/// Quiet period after a late image load before re-layout (in milliseconds).
pub const DEFAULT_SETTLE_DEBOUNCE_MS: u64 = 150;

/// Delay before the modal image is released after closing (in milliseconds).
pub const MODAL_CLEAR_DELAY_MS: u64 = 300;

// ==========================================================================
// Gesture Defaults
// ==========================================================================

/// Minimum horizontal travel for a drag to count as a swipe (in pixels).
pub const DEFAULT_SWIPE_DISTANCE_PX: f32 = 50.0;

/// Maximum gesture duration for a swipe (in milliseconds).
pub const DEFAULT_SWIPE_TIME_MS: u64 = 500;

/// Damping factor applied to drag offsets beyond the first or last slide.
pub const DEFAULT_EDGE_RESISTANCE: f32 = 0.3;

/// Pointer travel below which a gesture is neither a drag nor a scroll.
pub const DRAG_SLOP_PX: f32 = 10.0;
