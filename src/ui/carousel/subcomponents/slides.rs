// SPDX-License-Identifier: MPL-2.0
//! Slide set sub-component.
//!
//! Turns descriptors into slides, asks for one load per slide and tracks each
//! result. Slides whose image fails are removed so they never take a
//! navigable position. When nothing loads, a single fallback image is tried.
//!
//! Each render starts a new generation. Results carrying an older generation
//! are dropped, which cancels loads that were still in flight.

use crate::error::Error;
use crate::media::{ImageData, Location, SlideDescriptor, SourceSet};

/// Stable identifier of a slide within one generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlideId(pub usize);

#[derive(Debug, Clone)]
pub enum SlideStatus {
    Pending,
    Loaded(ImageData),
}

/// One slide in the visible sequence.
#[derive(Debug, Clone)]
pub struct Slide {
    pub id: SlideId,
    pub descriptor: SlideDescriptor,
    pub location: Location,
    pub status: SlideStatus,
}

impl Slide {
    /// Text describing the image: its title, or a name derived from the file.
    #[must_use]
    pub fn alt_text(&self) -> String {
        self.descriptor
            .title
            .clone()
            .unwrap_or_else(|| self.location.alt_text())
    }

    #[must_use]
    pub fn image(&self) -> Option<&ImageData> {
        match &self.status {
            SlideStatus::Loaded(image) => Some(image),
            SlideStatus::Pending => None,
        }
    }

    #[must_use]
    pub fn natural_size(&self) -> Option<(u32, u32)> {
        self.image().map(|image| (image.width, image.height))
    }
}

/// A load the orchestrator must perform.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadRequest {
    pub generation: u64,
    pub id: SlideId,
    pub location: Location,
}

/// Slide set sub-component state.
#[derive(Debug, Clone, Default)]
pub struct State {
    generation: u64,
    slides: Vec<Slide>,
    outstanding: usize,
    fallback: Option<Location>,
    fallback_attempted: bool,
}

/// Messages for the slide set sub-component.
#[derive(Debug, Clone)]
pub enum Message {
    /// Replace the slide set.
    Render(SourceSet),
    /// A load finished.
    Loaded {
        generation: u64,
        id: SlideId,
        result: Result<ImageData, Error>,
    },
}

/// Effects produced by the slide set.
#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    None,
    /// A new set was created; these loads must start.
    Rendered { requests: Vec<LoadRequest> },
    /// The slide at `position` finished loading.
    Loaded { position: usize },
    /// The slide at `position` failed and was removed. `fallback` is set when
    /// the set became empty and the fallback image must now be loaded.
    Pruned {
        position: usize,
        fallback: Option<LoadRequest>,
    },
}

impl State {
    #[must_use]
    pub fn new(fallback: Option<Location>) -> Self {
        Self {
            fallback,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    #[must_use]
    pub fn get(&self, position: usize) -> Option<&Slide> {
        self.slides.get(position)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.slides.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    /// Whether every load of the current generation has finished.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.outstanding == 0
    }

    /// Natural sizes of the loaded slides, in order.
    pub fn natural_sizes(&self) -> impl Iterator<Item = (u32, u32)> + '_ {
        self.slides.iter().filter_map(Slide::natural_size)
    }

    /// Starts a new generation without touching the visible slides.
    ///
    /// Results of loads already in flight will be ignored.
    pub fn invalidate(&mut self) -> u64 {
        self.generation += 1;
        self.outstanding = 0;
        self.generation
    }

    /// Handle a slide set message.
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Render(set) => self.render(set),
            Message::Loaded {
                generation,
                id,
                result,
            } => {
                if generation != self.generation {
                    log::debug!("dropping stale load result for {:?}", id);
                    return Effect::None;
                }
                let Some(position) = self.slides.iter().position(|slide| slide.id == id) else {
                    return Effect::None;
                };
                if !matches!(self.slides[position].status, SlideStatus::Pending) {
                    return Effect::None;
                }
                self.outstanding = self.outstanding.saturating_sub(1);

                match result {
                    Ok(image) => {
                        self.slides[position].status = SlideStatus::Loaded(image);
                        Effect::Loaded { position }
                    }
                    Err(err) => {
                        let removed = self.slides.remove(position);
                        log::warn!("removing slide {}: {}", removed.location, err);
                        let fallback = if self.slides.is_empty() && self.is_settled() {
                            self.start_fallback()
                        } else {
                            None
                        };
                        Effect::Pruned { position, fallback }
                    }
                }
            }
        }
    }

    fn render(&mut self, set: SourceSet) -> Effect {
        let generation = self.invalidate();
        self.fallback_attempted = false;

        self.slides = set
            .descriptors
            .iter()
            .enumerate()
            .map(|(ordinal, descriptor)| Slide {
                id: SlideId(ordinal),
                location: set.resolve(descriptor),
                descriptor: descriptor.clone(),
                status: SlideStatus::Pending,
            })
            .collect();
        self.outstanding = self.slides.len();

        let mut requests: Vec<LoadRequest> = self
            .slides
            .iter()
            .map(|slide| LoadRequest {
                generation,
                id: slide.id,
                location: slide.location.clone(),
            })
            .collect();

        if requests.is_empty() {
            requests.extend(self.start_fallback());
        }
        Effect::Rendered { requests }
    }

    fn start_fallback(&mut self) -> Option<LoadRequest> {
        if self.fallback_attempted {
            log::info!("fallback image failed, carousel is empty");
            return None;
        }
        self.fallback_attempted = true;
        let Some(location) = self.fallback.clone() else {
            log::info!("no slide could be loaded and no fallback image is configured");
            return None;
        };
        log::info!("no slide could be loaded, trying fallback {}", location);

        let id = SlideId(usize::MAX);
        self.slides.push(Slide {
            id,
            descriptor: SlideDescriptor::new(location.to_string()),
            location: location.clone(),
            status: SlideStatus::Pending,
        });
        self.outstanding = 1;
        Some(LoadRequest {
            generation: self.generation,
            id,
            location,
        })
    }
}
