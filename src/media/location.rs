// SPDX-License-Identifier: MPL-2.0
//! Image and manifest locations: local paths or HTTP(S) URLs.
//!
//! A [`Location`] can be resolved against a base (relative references such as
//! `images/cat.png` are joined the same way a browser would) and fetched as raw
//! bytes. HTTP requests carry `Cache-Control: no-cache` so a reload always
//! sees the current resource.

use crate::error::{Error, Result};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;
use url::Url;

static HTTP_CLIENT: OnceLock<reqwest::Client> = OnceLock::new();

/// Where an image or manifest lives.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Location {
    Path(PathBuf),
    Url(Url),
}

impl Location {
    /// Parses a user-supplied reference.
    ///
    /// `http://` and `https://` references become URLs, `file://` URLs become
    /// paths, anything else is taken as a filesystem path.
    #[must_use]
    pub fn parse(reference: &str) -> Self {
        let trimmed = reference.trim();
        if let Ok(url) = Url::parse(trimmed) {
            match url.scheme() {
                "http" | "https" => return Location::Url(url),
                "file" => {
                    if let Ok(path) = url.to_file_path() {
                        return Location::Path(path);
                    }
                }
                _ => {}
            }
        }
        Location::Path(PathBuf::from(trimmed))
    }

    /// Resolves `reference` against this location, treated as a directory.
    ///
    /// Absolute references (URLs or absolute paths) are returned unchanged.
    #[must_use]
    pub fn resolve(&self, reference: &str) -> Location {
        match Location::parse(reference) {
            Location::Url(url) => Location::Url(url),
            Location::Path(path) if path.is_absolute() => Location::Path(path),
            Location::Path(relative) => match self {
                Location::Path(base) => Location::Path(base.join(relative)),
                Location::Url(base) => {
                    let mut dir = base.clone();
                    if !dir.path().ends_with('/') {
                        let with_slash = format!("{}/", dir.path());
                        dir.set_path(&with_slash);
                    }
                    match dir.join(reference.trim()) {
                        Ok(url) => Location::Url(url),
                        Err(_) => Location::Url(dir),
                    }
                }
            },
        }
    }

    /// The location containing this one (a file's directory).
    #[must_use]
    pub fn parent(&self) -> Location {
        match self {
            Location::Path(path) => Location::Path(
                path.parent()
                    .map(Path::to_path_buf)
                    .unwrap_or_default(),
            ),
            Location::Url(url) => Location::Url(url.join(".").unwrap_or_else(|_| url.clone())),
        }
    }

    /// Last path segment, if any.
    #[must_use]
    pub fn file_name(&self) -> Option<String> {
        match self {
            Location::Path(path) => path
                .file_name()
                .map(|name| name.to_string_lossy().into_owned()),
            Location::Url(url) => url
                .path_segments()
                .and_then(|mut segments| segments.next_back())
                .filter(|segment| !segment.is_empty())
                .map(str::to_string),
        }
    }

    /// Human-readable description derived from the file name.
    ///
    /// `abstract_painting-1.png` becomes `abstract painting 1`.
    #[must_use]
    pub fn alt_text(&self) -> String {
        let name = self.file_name().unwrap_or_default();
        let stem = match name.rsplit_once('.') {
            Some((stem, _)) if !stem.is_empty() => stem,
            _ => name.as_str(),
        };
        stem.replace(['_', '-'], " ")
    }

    /// Reads the whole resource into memory.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] for unreadable files and [`Error::Http`] for
    /// failed requests or non-success status codes.
    pub async fn fetch_bytes(&self) -> Result<Vec<u8>> {
        match self {
            Location::Path(path) => Ok(tokio::fs::read(path).await?),
            Location::Url(url) => {
                let response = http_client()?
                    .get(url.clone())
                    .header(reqwest::header::CACHE_CONTROL, "no-cache")
                    .send()
                    .await?
                    .error_for_status()?;
                Ok(response.bytes().await?.to_vec())
            }
        }
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Location::Path(path) => write!(f, "{}", path.display()),
            Location::Url(url) => write!(f, "{}", url),
        }
    }
}

fn http_client() -> Result<&'static reqwest::Client> {
    if let Some(client) = HTTP_CLIENT.get() {
        return Ok(client);
    }
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::limited(10))
        .user_agent(concat!("IcedCarousel/", env!("CARGO_PKG_VERSION")))
        .build()
        .map_err(|e| Error::Http(e.to_string()))?;
    Ok(HTTP_CLIENT.get_or_init(|| client))
}
