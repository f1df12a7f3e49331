// SPDX-License-Identifier: MPL-2.0
//! Slide media: where images come from and how they are loaded.
//!
//! - [`source`] produces the ordered slide descriptors
//! - [`location`] resolves and fetches paths and URLs
//! - [`loader`] fetches and decodes one slide image with a timeout
//! - [`image`] holds decoded image data
//! - [`scanner`] lists images in a directory

pub mod image;
pub mod loader;
pub mod location;
pub mod scanner;
pub mod source;

pub use image::ImageData;
pub use location::Location;
pub use source::{SlideDescriptor, SlideSource, SourceSet};
