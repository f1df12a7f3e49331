// SPDX-License-Identifier: MPL-2.0
//! Nested TEA sub-components for the carousel.
//!
//! Each sub-component has its own State, Message, Effect, and handle() method.
//! The main component.rs orchestrates these sub-components.
//!
//! ## Architecture
//!
//! ```text
//! component.rs (orchestrator)
//!     ├── slides      - Slide set, per-slide loads, pruning, fallback
//!     ├── navigation  - Current index and boundary policy
//!     ├── transition  - Linear track animation
//!     ├── layout      - Shared panel dimensions (debounced)
//!     ├── drag        - Swipe gestures
//!     ├── autoplay    - Auto-advance timer
//!     └── modal       - Zoomed image overlay
//! ```

pub mod autoplay;
pub mod debounce;
pub mod drag;
pub mod layout;
pub mod modal;
pub mod navigation;
pub mod slides;
pub mod transition;
