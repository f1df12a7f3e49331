// SPDX-License-Identifier: MPL-2.0
//! Layout sub-component: shared panel dimensions.
//!
//! Every panel is as wide as the carousel container and as tall as the tallest
//! scaled image plus padding. Images are scaled down (never up) to fit both
//! the available width and a fraction of the viewport height.
//!
//! Recomputation is synchronous and idempotent. Window resizes and images that
//! finish loading after the first pass are debounced.

use super::debounce::Debouncer;
use crate::app::config::{
    DEFAULT_HORIZONTAL_PADDING, DEFAULT_MAX_HEIGHT_RATIO, DEFAULT_RESIZE_DEBOUNCE_MS,
    DEFAULT_SETTLE_DEBOUNCE_MS, DEFAULT_VERTICAL_PADDING,
};
use iced::Size;
use std::time::{Duration, Instant};

/// Tunable layout parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutParams {
    /// Fraction of the viewport height an image may occupy.
    pub max_height_ratio: f32,
    pub vertical_padding: f32,
    /// Padding on each side of an image inside its panel.
    pub horizontal_padding: f32,
    pub resize_debounce: Duration,
    pub settle_debounce: Duration,
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self {
            max_height_ratio: DEFAULT_MAX_HEIGHT_RATIO,
            vertical_padding: DEFAULT_VERTICAL_PADDING,
            horizontal_padding: DEFAULT_HORIZONTAL_PADDING,
            resize_debounce: Duration::from_millis(DEFAULT_RESIZE_DEBOUNCE_MS),
            settle_debounce: Duration::from_millis(DEFAULT_SETTLE_DEBOUNCE_MS),
        }
    }
}

/// Measurements the layout depends on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Metrics {
    /// Width of the carousel container.
    pub container_width: f32,
    /// Height of the window.
    pub viewport_height: f32,
}

/// Result of a layout pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanelLayout {
    pub panel_width: f32,
    pub panel_height: f32,
}

/// Horizontal translation of the track for a position in slide units.
#[must_use]
pub fn translation(position: f32, panel_width: f32) -> f32 {
    -position * panel_width
}

/// Scale factor that fits a natural size into the layout bounds.
#[must_use]
pub fn scale_for(natural: (u32, u32), metrics: &Metrics, params: &LayoutParams) -> f32 {
    let (width, height) = natural;
    if width == 0 || height == 0 {
        return 0.0;
    }
    let available_width = (metrics.container_width - 2.0 * params.horizontal_padding).max(0.0);
    let max_height = params.max_height_ratio * metrics.viewport_height;
    (available_width / width as f32)
        .min(max_height / height as f32)
        .min(1.0)
}

/// Size an image is drawn at.
#[must_use]
pub fn scaled_size(natural: (u32, u32), metrics: &Metrics, params: &LayoutParams) -> Size {
    let scale = scale_for(natural, metrics, params);
    Size::new(natural.0 as f32 * scale, natural.1 as f32 * scale)
}

/// Computes the shared panel dimensions from the natural sizes of the loaded
/// images.
///
/// Returns `None` when there is nothing to lay out: no loaded image or a
/// non-positive container width.
#[must_use]
pub fn compute(
    metrics: &Metrics,
    params: &LayoutParams,
    natural_sizes: impl IntoIterator<Item = (u32, u32)>,
) -> Option<PanelLayout> {
    if metrics.container_width <= 0.0 {
        return None;
    }

    let tallest = natural_sizes
        .into_iter()
        .map(|natural| scaled_size(natural, metrics, params).height)
        .reduce(f32::max)?;

    Some(PanelLayout {
        panel_width: metrics.container_width,
        panel_height: tallest + params.vertical_padding,
    })
}

/// Layout sub-component state.
#[derive(Debug, Clone)]
pub struct State {
    params: LayoutParams,
    metrics: Metrics,
    layout: Option<PanelLayout>,
    resize: Debouncer,
    settle: Debouncer,
}

/// Messages for the layout sub-component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Message {
    /// The container or viewport size changed.
    Resized { metrics: Metrics, now: Instant },
    /// A slide image finished loading.
    ImageSettled(Instant),
    /// Check debounce deadlines.
    Tick(Instant),
}

/// Effects produced by the layout sub-component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// A layout pass is due; the orchestrator calls [`State::recompute`].
    RecomputeNeeded,
}

impl State {
    #[must_use]
    pub fn new(params: LayoutParams, metrics: Metrics) -> Self {
        Self {
            params,
            metrics,
            layout: None,
            resize: Debouncer::new(params.resize_debounce),
            settle: Debouncer::new(params.settle_debounce),
        }
    }

    #[must_use]
    pub fn layout(&self) -> Option<PanelLayout> {
        self.layout
    }

    #[must_use]
    pub fn metrics(&self) -> Metrics {
        self.metrics
    }

    #[must_use]
    pub fn params(&self) -> &LayoutParams {
        &self.params
    }

    /// Whether a debounced pass is waiting.
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.resize.is_pending() || self.settle.is_pending()
    }

    /// Handle a layout message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Resized { metrics, now } => {
                self.metrics = metrics;
                self.resize.trigger(now);
                Effect::None
            }
            Message::ImageSettled(now) => {
                if self.layout.is_none() {
                    // First pass happens right away.
                    Effect::RecomputeNeeded
                } else {
                    self.settle.trigger(now);
                    Effect::None
                }
            }
            Message::Tick(now) => {
                let resized = self.resize.poll(now);
                let settled = self.settle.poll(now);
                if resized || settled {
                    Effect::RecomputeNeeded
                } else {
                    Effect::None
                }
            }
        }
    }

    /// Runs a layout pass over the natural sizes of the loaded slides.
    ///
    /// Returns true when the dimensions changed. A skipped pass keeps the
    /// previous layout.
    pub fn recompute(&mut self, natural_sizes: impl IntoIterator<Item = (u32, u32)>) -> bool {
        match compute(&self.metrics, &self.params, natural_sizes) {
            Some(layout) => {
                let changed = self.layout != Some(layout);
                self.layout = Some(layout);
                changed
            }
            None => {
                log::debug!(
                    "layout skipped (container width {})",
                    self.metrics.container_width
                );
                false
            }
        }
    }

    /// Forgets the current layout and any pending pass.
    pub fn reset(&mut self) {
        self.layout = None;
        self.resize.cancel();
        self.settle.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn metrics(width: f32, height: f32) -> Metrics {
        Metrics {
            container_width: width,
            viewport_height: height,
        }
    }

    fn params() -> LayoutParams {
        LayoutParams {
            max_height_ratio: 0.64,
            vertical_padding: 16.0,
            horizontal_padding: 16.0,
            ..LayoutParams::default()
        }
    }

    #[test]
    fn small_images_are_not_upscaled() {
        let scale = scale_for((100, 50), &metrics(800.0, 1000.0), &params());
        assert_relative_eq!(scale, 1.0);
    }

    #[test]
    fn wide_images_fit_available_width() {
        // available width = 800 - 32 = 768
        let size = scaled_size((1536, 200), &metrics(800.0, 1000.0), &params());
        assert_relative_eq!(size.width, 768.0, epsilon = 1e-3);
        assert_relative_eq!(size.height, 100.0, epsilon = 1e-3);
    }

    #[test]
    fn tall_images_fit_max_height() {
        // max height = 0.64 * 500 = 320
        let size = scaled_size((400, 640), &metrics(800.0, 500.0), &params());
        assert_relative_eq!(size.height, 320.0, epsilon = 1e-3);
        assert_relative_eq!(size.width, 200.0, epsilon = 1e-3);
    }

    #[test]
    fn panel_height_uses_tallest_scaled_image() {
        let layout = compute(
            &metrics(800.0, 1000.0),
            &params(),
            [(300, 100), (300, 250), (300, 180)],
        )
        .expect("layout should be computed");

        assert_relative_eq!(layout.panel_width, 800.0);
        assert_relative_eq!(layout.panel_height, 266.0);
    }

    #[test]
    fn no_loaded_images_skips_layout() {
        assert_eq!(
            compute(&metrics(800.0, 600.0), &params(), std::iter::empty()),
            None
        );
    }

    #[test]
    fn non_positive_width_skips_layout() {
        assert_eq!(compute(&metrics(0.0, 600.0), &params(), [(10, 10)]), None);
        assert_eq!(compute(&metrics(-5.0, 600.0), &params(), [(10, 10)]), None);
    }

    #[test]
    fn recompute_twice_gives_identical_dimensions() {
        let mut state = State::new(params(), metrics(640.0, 480.0));
        let sizes = [(1024, 768), (800, 600)];

        assert!(state.recompute(sizes));
        let first = state.layout();
        assert!(!state.recompute(sizes));
        assert_eq!(state.layout(), first);
    }

    #[test]
    fn skipped_pass_keeps_previous_layout() {
        let mut state = State::new(params(), metrics(640.0, 480.0));
        state.recompute([(100, 100)]);
        let before = state.layout();

        assert!(!state.recompute(std::iter::empty()));
        assert_eq!(state.layout(), before);
    }

    #[test]
    fn first_settled_image_recomputes_immediately() {
        let mut state = State::new(params(), metrics(640.0, 480.0));
        assert_eq!(
            state.handle(Message::ImageSettled(Instant::now())),
            Effect::RecomputeNeeded
        );
    }

    #[test]
    fn late_images_are_debounced() {
        let start = Instant::now();
        let mut state = State::new(params(), metrics(640.0, 480.0));
        state.recompute([(100, 100)]);

        assert_eq!(state.handle(Message::ImageSettled(start)), Effect::None);
        assert_eq!(
            state.handle(Message::Tick(start + Duration::from_millis(100))),
            Effect::None
        );
        assert_eq!(
            state.handle(Message::Tick(start + Duration::from_millis(150))),
            Effect::RecomputeNeeded
        );
    }

    #[test]
    fn resize_is_debounced() {
        let start = Instant::now();
        let mut state = State::new(params(), metrics(640.0, 480.0));
        state.handle(Message::Resized {
            metrics: metrics(900.0, 700.0),
            now: start,
        });

        assert_eq!(state.metrics().container_width, 900.0);
        assert!(state.is_pending());
        assert_eq!(
            state.handle(Message::Tick(start + Duration::from_millis(60))),
            Effect::None
        );
        assert_eq!(
            state.handle(Message::Tick(start + Duration::from_millis(120))),
            Effect::RecomputeNeeded
        );
    }

    #[test]
    fn translation_follows_position() {
        assert_relative_eq!(translation(2.0, 500.0), -1000.0);
        assert_relative_eq!(translation(0.5, 400.0), -200.0);
        assert_relative_eq!(translation(0.0, 400.0), 0.0);
    }
}
