// SPDX-License-Identifier: MPL-2.0
//! `iced_carousel` is an image carousel built with the Iced GUI framework.
//!
//! Slides come from a built-in image list, a directory, or a JSON manifest
//! read from disk or over HTTP. The carousel supports previous/next buttons,
//! pagination dots, keyboard navigation, swipe gestures, auto-advance, and a
//! zoom modal. Interface strings are localized with Fluent.

pub mod app;
pub mod error;
pub mod i18n;
pub mod media;
pub mod ui;

#[cfg(test)]
pub(crate) mod test_utils;
