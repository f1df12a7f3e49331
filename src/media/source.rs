// SPDX-License-Identifier: MPL-2.0
//! Slide sources: where the ordered list of slide descriptors comes from.
//!
//! A source is either a fixed list of image names, a directory scanned at
//! startup, or a JSON manifest (`[{ "image": ..., "title": ..., "description": ... }]`)
//! fetched over HTTP(S) or read from disk.
//!
//! [`load`] never fails: any problem is logged and yields an empty set so the
//! carousel can still fall back to its placeholder image. [`try_load`] exposes
//! the underlying [`SourceError`].

use crate::app::config::{SourceConfig, DEFAULT_IMAGES, DEFAULT_IMAGE_BASE};
use crate::error::SourceError;
use crate::media::location::Location;
use crate::media::scanner;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

/// One slide as declared by a source, before any image is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlideDescriptor {
    /// Image reference, relative to the source base or absolute.
    #[serde(rename = "image")]
    pub image_path: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Exact image location when the source already knows it (directory
    /// scans). Takes precedence over `image_path`.
    #[serde(skip)]
    pub location: Option<Location>,
}

impl SlideDescriptor {
    /// Descriptor with only an image reference.
    #[must_use]
    pub fn new(image_path: impl Into<String>) -> Self {
        Self {
            image_path: image_path.into(),
            title: None,
            description: None,
            location: None,
        }
    }

    /// Descriptor for an image at a known path.
    #[must_use]
    pub fn at_path(path: PathBuf) -> Self {
        let name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            location: Some(Location::Path(path)),
            ..Self::new(name)
        }
    }
}

/// Where slide descriptors come from.
#[derive(Debug, Clone, PartialEq)]
pub enum SlideSource {
    /// Fixed ordered image references resolved against `base`.
    Static { base: Location, images: Vec<String> },
    /// Every supported image in a directory, sorted by file name.
    Directory(PathBuf),
    /// A JSON manifest. Relative entries resolve against `base` if given,
    /// otherwise against the manifest's own directory.
    Manifest {
        location: Location,
        base: Option<Location>,
    },
}

impl SlideSource {
    /// Picks the source from a command-line argument or the `[source]` section.
    ///
    /// A command-line argument naming a directory scans it; any other argument
    /// is read as a manifest. Without an argument the configured manifest wins
    /// over the configured image list, which wins over the built-in set.
    #[must_use]
    pub fn from_config(config: &SourceConfig, cli_source: Option<&str>) -> Self {
        let base = config.base.as_deref().map(Location::parse);

        if let Some(reference) = cli_source {
            return match Location::parse(reference) {
                Location::Path(path) if path.is_dir() => SlideSource::Directory(path),
                location => SlideSource::Manifest { location, base },
            };
        }

        if let Some(manifest) = config.manifest.as_deref() {
            return SlideSource::Manifest {
                location: Location::parse(manifest),
                base,
            };
        }

        let images = config.images.clone().unwrap_or_else(|| {
            DEFAULT_IMAGES
                .iter()
                .map(|name| (*name).to_string())
                .collect()
        });
        SlideSource::Static {
            base: base.unwrap_or_else(|| Location::parse(DEFAULT_IMAGE_BASE)),
            images,
        }
    }

    fn base(&self) -> Location {
        match self {
            SlideSource::Static { base, .. } => base.clone(),
            SlideSource::Directory(path) => Location::Path(path.clone()),
            SlideSource::Manifest { location, base } => {
                base.clone().unwrap_or_else(|| location.parent())
            }
        }
    }
}

/// Ordered descriptors plus the base their relative references resolve against.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceSet {
    pub base: Location,
    pub descriptors: Vec<SlideDescriptor>,
}

impl SourceSet {
    /// A set with no slides.
    #[must_use]
    pub fn empty(base: Location) -> Self {
        Self {
            base,
            descriptors: Vec::new(),
        }
    }

    /// Location of a descriptor's image.
    #[must_use]
    pub fn resolve(&self, descriptor: &SlideDescriptor) -> Location {
        match &descriptor.location {
            Some(location) => location.clone(),
            None => self.base.resolve(&descriptor.image_path),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

/// Parses a JSON manifest.
///
/// # Errors
///
/// - [`SourceError::Malformed`] when the bytes are not JSON or an entry lacks `image`
/// - [`SourceError::NotAnArray`] when the top-level value is not an array
/// - [`SourceError::Empty`] when the array has no entries
pub fn parse_manifest(bytes: &[u8]) -> Result<Vec<SlideDescriptor>, SourceError> {
    let value: serde_json::Value = serde_json::from_slice(bytes)?;
    let entries = match value {
        serde_json::Value::Array(entries) => entries,
        _ => return Err(SourceError::NotAnArray),
    };
    if entries.is_empty() {
        return Err(SourceError::Empty);
    }
    entries
        .into_iter()
        .map(|entry| serde_json::from_value(entry).map_err(SourceError::from))
        .collect()
}

/// Produces the descriptors of `source`, reporting why it could not.
///
/// Reading a manifest is bounded by `timeout`.
///
/// # Errors
///
/// Returns a [`SourceError`] when the source cannot be read in time, is
/// malformed, or holds no slides.
pub async fn try_load(source: &SlideSource, timeout: Duration) -> Result<SourceSet, SourceError> {
    let base = source.base();
    let descriptors = match source {
        SlideSource::Static { images, .. } => images
            .iter()
            .map(|image| SlideDescriptor::new(image.clone()))
            .collect(),
        SlideSource::Directory(path) => scanner::scan_directory(path)
            .map_err(|e| SourceError::Unavailable(e.to_string()))?
            .into_iter()
            .map(SlideDescriptor::at_path)
            .collect(),
        SlideSource::Manifest { location, .. } => {
            let bytes = tokio::time::timeout(timeout, location.fetch_bytes())
                .await
                .map_err(|_| {
                    SourceError::Unavailable(format!("{location} timed out after {timeout:?}"))
                })?
                .map_err(|e| SourceError::Unavailable(e.to_string()))?;
            parse_manifest(&bytes)?
        }
    };

    let set = SourceSet { base, descriptors };
    if set.is_empty() {
        return Err(SourceError::Empty);
    }
    Ok(set)
}

/// Produces the descriptors of `source`, or an empty set if it fails.
///
/// A single attempt is made; the failure is logged at `warn`.
pub async fn load(source: SlideSource, timeout: Duration) -> SourceSet {
    match try_load(&source, timeout).await {
        Ok(set) => {
            log::debug!("source provided {} slide(s)", set.descriptors.len());
            set
        }
        Err(err) => {
            log::warn!("slide source failed, continuing without slides: {}", err);
            SourceSet::empty(source.base())
        }
    }
}
