// SPDX-License-Identifier: MPL-2.0
//! Application root state and wiring between the carousel, localization and
//! configuration.
//!
//! The `App` struct loads `settings.toml`, builds the carousel from it and
//! forwards messages, native events and ticks to the carousel component.

pub mod config;
mod message;
pub mod paths;
mod subscription;
mod view;

pub use message::{Flags, Message};

use crate::i18n::fluent::I18n;
use crate::ui::carousel;
use crate::ui::theming::ThemeMode;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    carousel: carousel::State,
    theme_mode: ThemeMode,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("slides", &self.carousel.slide_count())
            .field("current_index", &self.carousel.current_index())
            .finish()
    }
}

pub const WINDOW_DEFAULT_HEIGHT: u32 = 650;
pub const WINDOW_DEFAULT_WIDTH: u32 = 900;
pub const MIN_WINDOW_HEIGHT: u32 = 400;
pub const MIN_WINDOW_WIDTH: u32 = 480;

/// Size the window opens at.
#[must_use]
pub fn default_window_size() -> iced::Size {
    iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32)
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: default_window_size(),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        exit_on_close_request: false,
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        Self {
            i18n: I18n::default(),
            carousel: carousel::State::new(carousel::Settings::default(), default_window_size()),
            theme_mode: ThemeMode::System,
        }
    }
}

impl App {
    /// Initializes application state and starts loading the slide source.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        if let Some(warning) = config_warning {
            log::warn!("using default settings: {}", warning);
        }

        let i18n = I18n::new(flags.lang.clone(), &config);
        let settings = carousel::Settings::from_config(
            &config,
            flags.source.as_deref(),
            flags.fallback.as_deref(),
            flags.no_autoplay,
        );
        log::info!("slide source: {:?}", settings.source);

        let mut app = App {
            i18n,
            carousel: carousel::State::new(settings, default_window_size()),
            theme_mode: config.general.theme_mode,
        };

        let task = app.carousel.start(Instant::now()).map(Message::Carousel);
        (app, task)
    }

    fn title(&self) -> String {
        match self.carousel.current_slide() {
            Some(slide) => {
                let title = slide.alt_text();
                let current = (self.carousel.current_index() + 1).to_string();
                let total = self.carousel.slide_count().to_string();
                self.i18n.tr_with_args(
                    "window-title-with-slide",
                    &[
                        ("title", title.as_str()),
                        ("current", current.as_str()),
                        ("total", total.as_str()),
                    ],
                )
            }
            None => self.i18n.tr("window-title"),
        }
    }

    fn theme(&self) -> Theme {
        self.theme_mode.theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        if self.carousel.is_disposed() {
            return Subscription::none();
        }
        Subscription::batch([
            subscription::create_event_subscription(),
            subscription::create_tick_subscription(self.carousel.tick_interval()),
        ])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Carousel(msg) => self
                .carousel
                .handle_message(msg, Instant::now())
                .map(Message::Carousel),
            Message::Tick(now) => self
                .carousel
                .handle_message(carousel::Message::Tick(now), now)
                .map(Message::Carousel),
            Message::WindowCloseRequested(id) => {
                self.carousel.dispose();
                window::close(id)
            }
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            carousel: &self.carousel,
        })
    }
}
