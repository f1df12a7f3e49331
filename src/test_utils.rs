// SPDX-License-Identifier: MPL-2.0
//! Test utilities for float comparisons and slide fixtures.
//!
//! This module re-exports the `approx` crate's assertion macros for float comparison,
//! which properly handle floating-point precision issues that `assert_eq!` cannot.

pub use approx::assert_relative_eq;

use crate::media::ImageData;

/// Default epsilon for f32 comparisons.
/// Suitable for values that should be "exactly equal" but may have minor floating-point errors.
pub const F32_EPSILON: f32 = 1e-4;

/// A solid image of the given size.
pub fn solid_image(width: u32, height: u32) -> ImageData {
    ImageData::from_rgba(width, height, vec![128; (width * height * 4) as usize])
}
