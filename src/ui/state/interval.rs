// SPDX-License-Identifier: MPL-2.0
//! Auto-advance interval domain type.
//!
//! This module provides a type-safe wrapper for the delay between automatic
//! slide advances, in milliseconds.

use crate::app::config::{
    DEFAULT_AUTOPLAY_INTERVAL_MS, MAX_AUTOPLAY_INTERVAL_MS, MIN_AUTOPLAY_INTERVAL_MS,
};
use std::time::Duration;

/// Delay between automatic advances.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (1–60 seconds).
///
/// # Example
///
/// ```
/// use iced_carousel::ui::state::AutoAdvanceInterval;
///
/// let interval = AutoAdvanceInterval::new(5000);
/// assert_eq!(interval.millis(), 5000);
///
/// // Values outside range are clamped
/// let too_short = AutoAdvanceInterval::new(10);
/// assert_eq!(too_short.millis(), 1000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoAdvanceInterval(u64);

impl AutoAdvanceInterval {
    /// Creates a new interval, clamping to the valid range.
    #[must_use]
    pub fn new(millis: u64) -> Self {
        Self(millis.clamp(MIN_AUTOPLAY_INTERVAL_MS, MAX_AUTOPLAY_INTERVAL_MS))
    }

    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for AutoAdvanceInterval {
    fn default() -> Self {
        Self(DEFAULT_AUTOPLAY_INTERVAL_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_clamps_to_valid_range() {
        assert_eq!(AutoAdvanceInterval::new(0).millis(), MIN_AUTOPLAY_INTERVAL_MS);
        assert_eq!(
            AutoAdvanceInterval::new(u64::MAX).millis(),
            MAX_AUTOPLAY_INTERVAL_MS
        );
    }

    #[test]
    fn new_accepts_valid_values() {
        assert_eq!(AutoAdvanceInterval::new(1000).millis(), 1000);
        assert_eq!(AutoAdvanceInterval::new(4000).millis(), 4000);
    }

    #[test]
    fn default_is_four_seconds() {
        assert_eq!(
            AutoAdvanceInterval::default().as_duration(),
            Duration::from_secs(4)
        );
    }
}
