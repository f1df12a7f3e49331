// SPDX-License-Identifier: MPL-2.0
//! Carousel component encapsulating state and update logic.
//!
//! The component owns the sub-components in [`super::subcomponents`] and
//! turns their effects into tasks: image loads, source reloads and scroll
//! operations that move the slide track.

use super::subcomponents::layout::{self, LayoutParams, Metrics, PanelLayout};
use super::subcomponents::navigation::{self, BoundaryPolicy};
use super::subcomponents::slides::{self, LoadRequest, Slide, SlideId};
use super::subcomponents::{autoplay, drag, modal, transition};
use crate::app::config::{
    Config, DEFAULT_AUTOPLAY_INTERVAL_MS, DEFAULT_EDGE_RESISTANCE,
    DEFAULT_HORIZONTAL_PADDING, DEFAULT_LOAD_TIMEOUT_SECS, DEFAULT_MAX_HEIGHT_RATIO,
    DEFAULT_RESIZE_DEBOUNCE_MS, DEFAULT_SETTLE_DEBOUNCE_MS, DEFAULT_SWIPE_DISTANCE_PX,
    DEFAULT_SWIPE_TIME_MS, DEFAULT_TRANSITION_MS, DEFAULT_VERTICAL_PADDING, DRAG_SLOP_PX,
    MAX_LOAD_TIMEOUT_SECS, MAX_MAX_HEIGHT_RATIO, MAX_TRANSITION_MS, MIN_LOAD_TIMEOUT_SECS,
    MIN_MAX_HEIGHT_RATIO,
};
use crate::error::Error;
use crate::i18n::fluent::I18n;
use crate::media::{loader, source, ImageData, Location, SlideSource, SourceSet};
use crate::ui::design_tokens::spacing;
use crate::ui::state::{AutoAdvanceInterval, DragOutcome, SwipeThresholds};
use iced::widget::scrollable::RelativeOffset;
use iced::widget::{operation, Id};
use iced::{event, keyboard, mouse, touch, window, Element, Point, Size, Task};
use std::time::{Duration, Instant};

/// Identifier used for the slide track scrollable.
pub const TRACK_ID: &str = "carousel-track";

/// Tick rate while something moves on screen.
const FRAME_TICK: Duration = Duration::from_millis(16);
/// Tick rate while only timers are pending.
const IDLE_TICK: Duration = Duration::from_millis(100);

/// Resolved carousel settings.
///
/// Built from [`Config`] with every value clamped to its supported range.
#[derive(Debug, Clone)]
pub struct Settings {
    pub source: SlideSource,
    pub fallback: Option<Location>,
    pub load_timeout: Duration,
    pub autoplay: bool,
    pub interval: AutoAdvanceInterval,
    pub boundary: BoundaryPolicy,
    pub transition: Duration,
    pub layout: LayoutParams,
    pub swipe: SwipeThresholds,
    /// Space between the window edge and the carousel container.
    pub margin: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_config(&Config::default(), None, None, false)
    }
}

impl Settings {
    /// Resolves settings from the config file and command-line overrides.
    #[must_use]
    pub fn from_config(
        config: &Config,
        cli_source: Option<&str>,
        cli_fallback: Option<&str>,
        no_autoplay: bool,
    ) -> Self {
        let source = SlideSource::from_config(&config.source, cli_source);
        let fallback = cli_fallback
            .or(config.source.fallback_image.as_deref())
            .map(Location::parse);

        let timeout_secs = config
            .source
            .timeout_secs
            .unwrap_or(DEFAULT_LOAD_TIMEOUT_SECS)
            .clamp(MIN_LOAD_TIMEOUT_SECS, MAX_LOAD_TIMEOUT_SECS);

        let layout = &config.layout;
        let gesture = &config.gesture;

        Self {
            source,
            fallback,
            load_timeout: Duration::from_secs(u64::from(timeout_secs)),
            autoplay: !no_autoplay && config.autoplay.enabled.unwrap_or(true),
            interval: AutoAdvanceInterval::new(
                config
                    .autoplay
                    .interval_ms
                    .unwrap_or(DEFAULT_AUTOPLAY_INTERVAL_MS),
            ),
            boundary: config.navigation.boundary.unwrap_or_default(),
            transition: Duration::from_millis(
                config
                    .navigation
                    .transition_ms
                    .unwrap_or(DEFAULT_TRANSITION_MS)
                    .min(MAX_TRANSITION_MS),
            ),
            layout: LayoutParams {
                max_height_ratio: layout
                    .max_height_ratio
                    .unwrap_or(DEFAULT_MAX_HEIGHT_RATIO)
                    .clamp(MIN_MAX_HEIGHT_RATIO, MAX_MAX_HEIGHT_RATIO),
                vertical_padding: layout
                    .vertical_padding
                    .unwrap_or(DEFAULT_VERTICAL_PADDING)
                    .max(0.0),
                horizontal_padding: layout
                    .horizontal_padding
                    .unwrap_or(DEFAULT_HORIZONTAL_PADDING)
                    .max(0.0),
                resize_debounce: Duration::from_millis(
                    layout
                        .resize_debounce_ms
                        .unwrap_or(DEFAULT_RESIZE_DEBOUNCE_MS),
                ),
                settle_debounce: Duration::from_millis(
                    layout
                        .settle_debounce_ms
                        .unwrap_or(DEFAULT_SETTLE_DEBOUNCE_MS),
                ),
            },
            swipe: SwipeThresholds {
                slop_px: DRAG_SLOP_PX,
                distance_px: gesture
                    .swipe_distance_px
                    .unwrap_or(DEFAULT_SWIPE_DISTANCE_PX)
                    .max(DRAG_SLOP_PX),
                max_duration: Duration::from_millis(
                    gesture.swipe_time_ms.unwrap_or(DEFAULT_SWIPE_TIME_MS),
                ),
                edge_resistance: gesture
                    .edge_resistance
                    .unwrap_or(DEFAULT_EDGE_RESISTANCE)
                    .clamp(0.0, 1.0),
            },
            margin: spacing::LG,
        }
    }

    /// Layout measurements for a window of the given size.
    #[must_use]
    pub fn metrics_for(&self, window: Size) -> Metrics {
        metrics_for(window, self.margin)
    }
}

fn metrics_for(window: Size, margin: f32) -> Metrics {
    Metrics {
        container_width: (window.width - 2.0 * margin).max(0.0),
        viewport_height: window.height,
    }
}

/// Messages emitted by carousel widgets and forwarded events.
#[derive(Debug, Clone)]
pub enum Message {
    Previous,
    Next,
    GoTo(usize),
    /// The slide track was pressed (mouse button or finger).
    TrackPressed,
    PointerEntered,
    PointerLeft,
    CloseModal,
    /// Clicks on the zoomed image itself must not reach the backdrop.
    ModalImagePressed,
    /// Re-read the source and rebuild every slide.
    Reload,
    SourceLoaded {
        generation: u64,
        set: SourceSet,
    },
    SlideLoaded {
        generation: u64,
        id: SlideId,
        result: Result<ImageData, Error>,
    },
    RawEvent {
        window: window::Id,
        event: event::Event,
    },
    Tick(Instant),
}

/// Where a navigation request came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Origin {
    User,
    Autoplay,
}

/// Complete carousel state.
#[derive(Debug, Clone)]
pub struct State {
    source: SlideSource,
    load_timeout: Duration,
    margin: f32,
    slides: slides::State,
    navigation: navigation::State,
    transition: transition::State,
    layout: layout::State,
    drag: drag::State,
    autoplay: autoplay::State,
    modal: modal::State,
    disposed: bool,
}

impl State {
    /// Creates an empty carousel sized for `window`.
    ///
    /// Nothing is loaded until [`State::start`] runs.
    #[must_use]
    pub fn new(settings: Settings, window: Size) -> Self {
        let metrics = settings.metrics_for(window);
        Self {
            slides: slides::State::new(settings.fallback.clone()),
            navigation: navigation::State::new(settings.boundary),
            transition: transition::State::new(settings.transition),
            layout: layout::State::new(settings.layout, metrics),
            drag: drag::State::new(settings.swipe),
            autoplay: autoplay::State::new(settings.autoplay, settings.interval),
            modal: modal::State::default(),
            source: settings.source,
            load_timeout: settings.load_timeout,
            margin: settings.margin,
            disposed: false,
        }
    }

    /// Starts the auto-advance timer and reads the slide source.
    pub fn start(&mut self, now: Instant) -> Task<Message> {
        self.autoplay.handle(autoplay::Message::Start(now));
        self.load_source()
    }

    // ─────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.navigation.current_index()
    }

    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    #[must_use]
    pub fn slides(&self) -> &[Slide] {
        self.slides.slides()
    }

    #[must_use]
    pub fn current_slide(&self) -> Option<&Slide> {
        self.slides.get(self.current_index())
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.slides.generation()
    }

    /// Whether every load of the current generation has finished.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.slides.is_settled()
    }

    #[must_use]
    pub fn panel_layout(&self) -> Option<PanelLayout> {
        self.layout.layout()
    }

    #[must_use]
    pub fn metrics(&self) -> Metrics {
        self.layout.metrics()
    }

    #[must_use]
    pub fn layout_params(&self) -> &LayoutParams {
        self.layout.params()
    }

    #[must_use]
    pub fn margin(&self) -> f32 {
        self.margin
    }

    #[must_use]
    pub fn modal(&self) -> &modal::State {
        &self.modal
    }

    #[must_use]
    pub fn is_modal_shown(&self) -> bool {
        self.modal.is_shown()
    }

    #[must_use]
    pub fn is_autoplay_running(&self) -> bool {
        self.autoplay.is_running()
    }

    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.drag.is_dragging()
    }

    #[must_use]
    pub fn is_animating(&self) -> bool {
        self.transition.is_animating()
    }

    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }

    /// Track position in slide units.
    #[must_use]
    pub fn position(&self) -> f32 {
        self.transition.position()
    }

    /// Width of one panel. Before the first layout pass the container width
    /// is used so the first slide is in view while it loads.
    #[must_use]
    pub fn panel_width(&self) -> f32 {
        self.layout
            .layout()
            .map_or(self.layout.metrics().container_width, |layout| {
                layout.panel_width
            })
    }

    /// Pixel translation of the track, including a live drag.
    #[must_use]
    pub fn track_translation(&self) -> f32 {
        layout::translation(self.position(), self.panel_width()) + self.drag.offset()
    }

    /// How often the component needs [`Message::Tick`], if at all.
    #[must_use]
    pub fn tick_interval(&self) -> Option<Duration> {
        if self.disposed {
            None
        } else if self.transition.is_animating() || self.layout.is_pending() {
            Some(FRAME_TICK)
        } else if self.autoplay.is_running() || self.modal.is_clear_pending() {
            Some(IDLE_TICK)
        } else {
            None
        }
    }

    /// Stops every timer and gesture and abandons loads in flight.
    ///
    /// A disposed carousel ignores all further messages.
    pub fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.autoplay.handle(autoplay::Message::Stop);
        self.drag.handle(drag::Message::Cancelled);
        self.layout.reset();
        self.modal.reset();
        self.slides.invalidate();
        self.disposed = true;
        log::debug!("carousel disposed");
    }

    /// Renders the carousel.
    pub fn view<'a>(&'a self, i18n: &'a I18n) -> Element<'a, Message> {
        super::view::view(self, i18n)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Update
    // ─────────────────────────────────────────────────────────────────────

    /// Handle a carousel message. `now` is the time the message is processed.
    pub fn handle_message(&mut self, message: Message, now: Instant) -> Task<Message> {
        if self.disposed {
            return Task::none();
        }

        match message {
            Message::Previous => self.navigate(navigation::Message::Previous, Origin::User, now),
            Message::Next => self.navigate(navigation::Message::Next, Origin::User, now),
            Message::GoTo(index) => {
                self.navigate(navigation::Message::GoTo(index), Origin::User, now)
            }
            Message::TrackPressed => {
                if !self.modal.is_shown() {
                    let offset = self.track_translation();
                    self.drag.handle(drag::Message::Pressed { now, offset });
                }
                Task::none()
            }
            Message::PointerEntered => {
                self.autoplay.handle(autoplay::Message::PointerEntered);
                Task::none()
            }
            Message::PointerLeft => {
                self.autoplay.handle(autoplay::Message::PointerLeft(now));
                Task::none()
            }
            Message::CloseModal => {
                self.close_modal(now);
                Task::none()
            }
            Message::ModalImagePressed => Task::none(),
            Message::Reload => {
                log::info!("reloading slides from {:?}", self.source);
                self.load_source()
            }
            Message::SourceLoaded { generation, set } => {
                if generation != self.slides.generation() {
                    log::debug!("dropping stale source result (generation {})", generation);
                    return Task::none();
                }
                self.render(set)
            }
            Message::SlideLoaded {
                generation,
                id,
                result,
            } => self.slide_loaded(generation, id, result, now),
            Message::RawEvent { event, .. } => self.handle_raw_event(event, now),
            Message::Tick(instant) => self.tick(instant),
        }
    }

    fn load_source(&mut self) -> Task<Message> {
        let generation = self.slides.invalidate();
        let source = self.source.clone();
        Task::perform(
            source::load(source, self.load_timeout),
            move |set| Message::SourceLoaded { generation, set },
        )
    }

    fn render(&mut self, set: SourceSet) -> Task<Message> {
        self.drag.handle(drag::Message::Cancelled);
        self.layout.reset();

        let slides::Effect::Rendered { requests } = self.slides.handle(slides::Message::Render(set))
        else {
            return Task::none();
        };
        log::info!("rendering {} slide(s)", self.slides.len());

        self.navigation
            .handle(navigation::Message::Reset(self.slides.len()));
        self.transition.handle(transition::Message::JumpTo(0));

        let loads = requests.into_iter().map(|request| self.load_slide(request));
        Task::batch(loads.chain(std::iter::once(self.sync_track())))
    }

    fn load_slide(&self, request: LoadRequest) -> Task<Message> {
        let LoadRequest {
            generation,
            id,
            location,
        } = request;
        Task::perform(
            loader::load_slide_image(location, self.load_timeout),
            move |result| Message::SlideLoaded {
                generation,
                id,
                result,
            },
        )
    }

    fn slide_loaded(
        &mut self,
        generation: u64,
        id: SlideId,
        result: Result<ImageData, Error>,
        now: Instant,
    ) -> Task<Message> {
        let effect = self.slides.handle(slides::Message::Loaded {
            generation,
            id,
            result,
        });

        match effect {
            slides::Effect::Loaded { .. } => {
                if self.layout.handle(layout::Message::ImageSettled(now))
                    == layout::Effect::RecomputeNeeded
                {
                    self.layout.recompute(self.slides.natural_sizes());
                }
                self.sync_track()
            }
            slides::Effect::Pruned { position, fallback } => {
                self.navigation
                    .handle(navigation::Message::SlideRemoved(position));
                if fallback.is_some() {
                    self.navigation
                        .handle(navigation::Message::Reset(self.slides.len()));
                }
                self.transition
                    .handle(transition::Message::JumpTo(self.current_index()));
                self.layout.recompute(self.slides.natural_sizes());

                let sync = self.sync_track();
                match fallback {
                    Some(request) => Task::batch([self.load_slide(request), sync]),
                    None => sync,
                }
            }
            slides::Effect::None | slides::Effect::Rendered { .. } => Task::none(),
        }
    }

    fn navigate(&mut self, msg: navigation::Message, origin: Origin, now: Instant) -> Task<Message> {
        if self.modal.is_shown() {
            return Task::none();
        }

        match self.navigation.handle(msg) {
            navigation::Effect::Navigated { index, .. } => {
                if origin == Origin::User {
                    self.autoplay.handle(autoplay::Message::UserNavigated(now));
                }
                self.transition
                    .handle(transition::Message::AnimateTo { index, now });
                self.sync_track()
            }
            navigation::Effect::None => Task::none(),
        }
    }

    fn tick(&mut self, now: Instant) -> Task<Message> {
        let mut moved = matches!(
            self.transition.handle(transition::Message::Tick(now)),
            transition::Effect::PositionChanged(_)
        );

        if self.layout.handle(layout::Message::Tick(now)) == layout::Effect::RecomputeNeeded {
            moved |= self.layout.recompute(self.slides.natural_sizes());
        }

        self.modal.handle(modal::Message::Tick(now));

        let advance = if !self.drag.is_dragging()
            && self.autoplay.handle(autoplay::Message::Tick(now)) == autoplay::Effect::Advance
        {
            self.navigate(navigation::Message::Next, Origin::Autoplay, now)
        } else {
            Task::none()
        };

        if moved {
            Task::batch([self.sync_track(), advance])
        } else {
            advance
        }
    }

    fn open_modal(&mut self) {
        let Some(slide) = self.current_slide() else {
            return;
        };
        let Some(image) = slide.image().cloned() else {
            return;
        };
        let alt = slide.alt_text();

        if self.modal.handle(modal::Message::Show { image, alt }) == modal::Effect::Opened {
            self.drag.handle(drag::Message::Cancelled);
            self.autoplay.handle(autoplay::Message::Suspend);
        }
    }

    fn close_modal(&mut self, now: Instant) {
        if self.modal.handle(modal::Message::Close(now)) == modal::Effect::Closed {
            self.autoplay.handle(autoplay::Message::Resume(now));
        }
    }

    /// Applies the end of a gesture that left the track displaced by `offset`.
    fn finish_drag(&mut self, outcome: DragOutcome, offset: f32, now: Instant) -> Task<Message> {
        match outcome {
            DragOutcome::Tap => {
                self.open_modal();
                Task::none()
            }
            DragOutcome::SnapBack => self.sync_track(),
            DragOutcome::Next | DragOutcome::Previous => {
                let width = self.panel_width();
                if width > 0.0 {
                    // Continue the animation from where the finger let go.
                    let released = self.position() - offset / width;
                    self.transition.handle(transition::Message::Hold(released));
                }
                let msg = if outcome == DragOutcome::Next {
                    navigation::Message::Next
                } else {
                    navigation::Message::Previous
                };
                let task = self.navigate(msg, Origin::User, now);
                Task::batch([task, self.sync_track()])
            }
        }
    }

    fn handle_raw_event(&mut self, event: event::Event, now: Instant) -> Task<Message> {
        match event {
            event::Event::Window(window::Event::Resized(size)) => {
                let metrics = metrics_for(size, self.margin);
                self.layout
                    .handle(layout::Message::Resized { metrics, now });
                Task::none()
            }
            event::Event::Mouse(mouse::Event::CursorMoved { position })
            | event::Event::Touch(touch::Event::FingerMoved { position, .. }) => {
                self.pointer_moved(position)
            }
            event::Event::Touch(touch::Event::FingerPressed { position, .. }) => {
                self.drag.handle(drag::Message::TouchDown(position));
                Task::none()
            }
            event::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left))
            | event::Event::Touch(touch::Event::FingerLifted { .. }) => {
                self.end_drag(drag::Message::Released(now), now)
            }
            event::Event::Mouse(mouse::Event::CursorLeft)
            | event::Event::Touch(touch::Event::FingerLost { .. }) => {
                self.end_drag(drag::Message::Cancelled, now)
            }
            event::Event::Keyboard(keyboard::Event::KeyPressed {
                key: keyboard::Key::Named(named),
                ..
            }) => self.handle_key(named, now),
            _ => Task::none(),
        }
    }

    fn end_drag(&mut self, msg: drag::Message, now: Instant) -> Task<Message> {
        let offset = self.drag.offset();
        match self.drag.handle(msg) {
            drag::Effect::Finished(outcome) => self.finish_drag(outcome, offset, now),
            _ => Task::none(),
        }
    }

    fn handle_key(&mut self, key: keyboard::key::Named, now: Instant) -> Task<Message> {
        use keyboard::key::Named;

        match key {
            Named::ArrowLeft => self.navigate(navigation::Message::Previous, Origin::User, now),
            Named::ArrowRight => self.navigate(navigation::Message::Next, Origin::User, now),
            Named::Home => self.navigate(navigation::Message::First, Origin::User, now),
            Named::End => self.navigate(navigation::Message::Last, Origin::User, now),
            Named::Escape => {
                self.close_modal(now);
                Task::none()
            }
            Named::F5 => self.handle_message(Message::Reload, now),
            _ => Task::none(),
        }
    }

    fn pointer_moved(&mut self, position: Point) -> Task<Message> {
        let effect = self.drag.handle(drag::Message::PointerMoved {
            position,
            at_first: self.navigation.at_first(),
            at_last: self.navigation.at_last(),
        });
        match effect {
            drag::Effect::Offset(_) => self.sync_track(),
            _ => Task::none(),
        }
    }

    /// Scrolls the track so that it shows the current translation.
    ///
    /// The track holds one empty gutter panel on each side of the slides, so
    /// its scroll offset is `panel_width - translation` out of a scrollable
    /// range of `(slide_count + 1) * panel_width`.
    fn sync_track(&self) -> Task<Message> {
        if self.slides.is_empty() {
            return Task::none();
        }

        operation::snap_to(
            Id::new(TRACK_ID),
            RelativeOffset {
                x: track_offset(
                    self.track_translation(),
                    self.panel_width(),
                    self.slides.len(),
                ),
                y: 0.0,
            },
        )
    }
}

/// Relative horizontal scroll offset that shows the track at `translation`.
#[must_use]
pub fn track_offset(translation: f32, panel_width: f32, slide_count: usize) -> f32 {
    if slide_count == 0 || panel_width <= 0.0 {
        return 0.0;
    }
    let range = (slide_count + 1) as f32 * panel_width;
    ((panel_width - translation) / range).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::SlideDescriptor;
    use crate::test_utils::{assert_relative_eq, solid_image, F32_EPSILON};

    const WINDOW: Size = Size::new(900.0, 650.0);

    fn loaded(count: usize, settings: Settings) -> (State, Instant) {
        let start = Instant::now();
        let mut state = State::new(settings, WINDOW);
        let _ = state.start(start);
        let set = SourceSet {
            base: Location::parse("images/"),
            descriptors: (0..count)
                .map(|i| SlideDescriptor::new(format!("slide_{i}.png")))
                .collect(),
        };
        let _ = state.handle_message(
            Message::SourceLoaded {
                generation: state.generation(),
                set,
            },
            start,
        );
        for ordinal in 0..count {
            let _ = state.handle_message(
                Message::SlideLoaded {
                    generation: state.generation(),
                    id: SlideId(ordinal),
                    result: Ok(solid_image(400, 300)),
                },
                start,
            );
        }
        (state, start)
    }

    #[test]
    fn view_builds_empty_loaded_and_modal_states() {
        let i18n = I18n::default();
        let empty = State::new(Settings::default(), WINDOW);
        let _ = empty.view(&i18n);

        let (mut state, start) = loaded(2, Settings::default());
        let _ = state.view(&i18n);

        let _ = state.handle_message(Message::TrackPressed, start);
        let release = event::Event::Mouse(mouse::Event::ButtonReleased(mouse::Button::Left));
        let _ = state.handle_message(
            Message::RawEvent {
                window: window::Id::unique(),
                event: release,
            },
            start,
        );
        assert!(state.is_modal_shown());
        let _ = state.view(&i18n);
    }

    #[test]
    fn settings_clamp_out_of_range_values() {
        let mut config = Config::default();
        config.source.timeout_secs = Some(0);
        config.layout.max_height_ratio = Some(3.0);
        config.navigation.transition_ms = Some(60_000);
        config.gesture.edge_resistance = Some(-1.0);

        let settings = Settings::from_config(&config, None, None, false);
        assert_eq!(settings.load_timeout, Duration::from_secs(1));
        assert_relative_eq!(settings.layout.max_height_ratio, 1.0);
        assert_eq!(settings.transition, Duration::from_millis(2000));
        assert_relative_eq!(settings.swipe.edge_resistance, 0.0);
    }

    #[test]
    fn no_autoplay_flag_overrides_config() {
        let settings = Settings::from_config(&Config::default(), None, None, true);
        assert!(!settings.autoplay);
    }

    #[test]
    fn cli_fallback_wins_over_config() {
        let mut config = Config::default();
        config.source.fallback_image = Some("images/from_config.png".into());
        let settings = Settings::from_config(&config, None, Some("images/cli.png"), false);
        assert_eq!(settings.fallback, Some(Location::parse("images/cli.png")));
    }

    #[test]
    fn container_width_excludes_margins() {
        let settings = Settings::default();
        let metrics = settings.metrics_for(WINDOW);
        assert_relative_eq!(metrics.container_width, 900.0 - 2.0 * spacing::LG);
        assert_relative_eq!(metrics.viewport_height, 650.0);
    }

    #[test]
    fn track_offset_maps_translation_into_scroll_range() {
        // Three slides of 100px: scroll range is 400px, first slide at 100px.
        assert_relative_eq!(track_offset(0.0, 100.0, 3), 0.25);
        assert_relative_eq!(track_offset(-200.0, 100.0, 3), 0.75);
        // Dragging past the last slide never leaves the range.
        assert_relative_eq!(track_offset(-500.0, 100.0, 3), 1.0);
        assert_relative_eq!(track_offset(0.0, 0.0, 3), 0.0);
    }

    #[test]
    fn layout_is_computed_once_images_arrive() {
        let (state, _) = loaded(2, Settings::default());
        let layout = state.panel_layout().expect("layout after first image");

        assert_relative_eq!(layout.panel_width, 900.0 - 2.0 * spacing::LG);
        // 300px tall images fit within 0.64 * 650 = 416px, so no scaling.
        assert_relative_eq!(
            layout.panel_height,
            300.0 + DEFAULT_VERTICAL_PADDING,
            epsilon = F32_EPSILON
        );
    }

    #[test]
    fn translation_follows_position() {
        let mut settings = Settings::default();
        settings.transition = Duration::ZERO;
        let (mut state, start) = loaded(3, settings);

        let _ = state.handle_message(Message::GoTo(2), start);
        assert_relative_eq!(state.track_translation(), -2.0 * state.panel_width());
    }

    #[test]
    fn tick_interval_tracks_activity() {
        let mut settings = Settings::default();
        settings.autoplay = false;
        let (mut state, start) = loaded(3, settings);
        // Later images settle through a debounce.
        assert_eq!(state.tick_interval(), Some(FRAME_TICK));

        let idle = start + Duration::from_secs(1);
        let _ = state.handle_message(Message::Tick(idle), idle);
        assert_eq!(state.tick_interval(), None);

        let _ = state.handle_message(Message::Next, idle);
        assert_eq!(state.tick_interval(), Some(FRAME_TICK));

        let done = idle + Duration::from_secs(5);
        let _ = state.handle_message(Message::Tick(done), done);
        assert_eq!(state.tick_interval(), None);
    }

    #[test]
    fn autoplay_ticks_slowly_when_idle() {
        let (mut state, start) = loaded(3, Settings::default());
        let settled = start + Duration::from_secs(1);
        let _ = state.handle_message(Message::Tick(settled), settled);
        assert_eq!(state.tick_interval(), Some(IDLE_TICK));
    }

    #[test]
    fn dispose_stops_everything() {
        let (mut state, start) = loaded(3, Settings::default());
        let generation = state.generation();
        state.dispose();

        assert!(state.is_disposed());
        assert!(!state.is_autoplay_running());
        assert_eq!(state.tick_interval(), None);
        assert!(state.generation() > generation);

        let _ = state.handle_message(Message::Next, start);
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn stale_source_result_is_ignored() {
        let (mut state, start) = loaded(3, Settings::default());
        let stale = state.generation() - 1;

        let _ = state.handle_message(
            Message::SourceLoaded {
                generation: stale,
                set: SourceSet::empty(Location::parse("images/")),
            },
            start,
        );
        assert_eq!(state.slide_count(), 3);
    }
}
