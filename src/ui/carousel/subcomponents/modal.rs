// SPDX-License-Identifier: MPL-2.0
//! Zoom modal sub-component.
//!
//! Shows one slide image at full size above the carousel. The image is kept
//! for a short while after closing so a fade-out has something to draw.

use crate::app::config::MODAL_CLEAR_DELAY_MS;
use crate::media::ImageData;
use std::time::{Duration, Instant};

const CLEAR_DELAY: Duration = Duration::from_millis(MODAL_CLEAR_DELAY_MS);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    #[default]
    Hidden,
    Shown,
}

/// Modal sub-component state.
#[derive(Debug, Clone, Default)]
pub struct State {
    visibility: Visibility,
    image: Option<ImageData>,
    alt: String,
    clear_at: Option<Instant>,
}

/// Messages for the modal sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    Show { image: ImageData, alt: String },
    Close(Instant),
    /// Release the image once the clear delay has passed.
    Tick(Instant),
}

/// Effects produced by the modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    None,
    /// The modal became visible; carousel input is suspended.
    Opened,
    /// The modal was hidden; carousel input is restored.
    Closed,
}

impl State {
    #[must_use]
    pub fn is_shown(&self) -> bool {
        self.visibility == Visibility::Shown
    }

    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    #[must_use]
    pub fn image(&self) -> Option<&ImageData> {
        self.image.as_ref()
    }

    #[must_use]
    pub fn alt(&self) -> &str {
        &self.alt
    }

    /// Whether the image is still waiting to be released.
    #[must_use]
    pub fn is_clear_pending(&self) -> bool {
        self.clear_at.is_some()
    }

    /// Handle a modal message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Show { image, alt } => {
                self.image = Some(image);
                self.alt = alt;
                self.clear_at = None;
                if self.is_shown() {
                    Effect::None
                } else {
                    self.visibility = Visibility::Shown;
                    Effect::Opened
                }
            }
            Message::Close(now) => {
                if !self.is_shown() {
                    return Effect::None;
                }
                self.visibility = Visibility::Hidden;
                self.clear_at = Some(now + CLEAR_DELAY);
                Effect::Closed
            }
            Message::Tick(now) => {
                if self.clear_at.is_some_and(|at| now >= at) {
                    self.clear_at = None;
                    self.image = None;
                    self.alt.clear();
                }
                Effect::None
            }
        }
    }

    /// Hides the modal and drops the image at once.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
