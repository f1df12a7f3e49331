// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::carousel;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Carousel(carousel::Message),
    /// Periodic tick driving animations, debounces and auto-advance.
    Tick(Instant),
    /// Window close was requested (user clicked X or pressed Alt+F4).
    WindowCloseRequested(iced::window::Id),
}

/// Runtime flags passed in from the CLI or launcher to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_CAROUSEL_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
    /// Image directory or JSON manifest (path or URL) to show instead of the
    /// configured source.
    pub source: Option<String>,
    /// Image shown when no slide can be loaded.
    pub fallback: Option<String>,
    /// Start with auto-advance disabled.
    pub no_autoplay: bool,
}
