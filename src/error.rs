// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.
//!
//! Every variant carries a plain message so the error stays `Clone` and can be
//! moved through Iced messages (image load results travel from async tasks
//! back into `update`).

use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(String),
    #[error("HTTP Error: {0}")]
    Http(String),
    #[error("Image Error: {0}")]
    Image(String),
    #[error("Timed out after {0:?}")]
    Timeout(Duration),
    #[error("Config Error: {0}")]
    Config(String),
    #[error("Source Error: {0}")]
    Source(#[from] SourceError),
}

/// Reasons a slide source could not produce descriptors.
///
/// All of them are recovered by the source provider, which falls back to an
/// empty slide set.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SourceError {
    /// The resource could not be fetched or read.
    #[error("source unavailable: {0}")]
    Unavailable(String),
    /// The resource parsed as JSON but is not an array.
    #[error("source is not a JSON array")]
    NotAnArray,
    /// The resource is an empty array (or the directory holds no images).
    #[error("source contains no slides")]
    Empty,
    /// The resource is not valid JSON or an entry has the wrong shape.
    #[error("malformed source: {0}")]
    Malformed(String),
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err.to_string())
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<image_rs::ImageError> for Error {
    fn from(err: image_rs::ImageError) -> Self {
        Error::Image(err.to_string())
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Http(err.to_string())
    }
}

impl From<serde_json::Error> for SourceError {
    fn from(err: serde_json::Error) -> Self {
        SourceError::Malformed(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_formats_io_error() {
        let err = Error::Io("disk failure".to_string());
        assert_eq!(format!("{}", err), "I/O Error: disk failure");
    }

    #[test]
    fn from_io_error_produces_io_variant() {
        let io_error = std::io::Error::other("boom");
        let err: Error = io_error.into();
        match err {
            Error::Io(message) => assert!(message.contains("boom")),
            _ => panic!("expected Io variant"),
        }
    }

    #[test]
    fn config_error_formats_properly() {
        let err = Error::Config("bad field".into());
        assert_eq!(format!("{}", err), "Config Error: bad field");
    }

    #[test]
    fn source_error_converts_into_error() {
        let err: Error = SourceError::NotAnArray.into();
        assert_eq!(err, Error::Source(SourceError::NotAnArray));
        assert_eq!(format!("{}", err), "Source Error: source is not a JSON array");
    }

    #[test]
    fn json_error_becomes_malformed_source() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: SourceError = json_err.into();
        assert!(matches!(err, SourceError::Malformed(_)));
    }

    #[test]
    fn timeout_display_includes_duration() {
        let err = Error::Timeout(Duration::from_secs(3));
        assert!(format!("{}", err).contains("3s"));
    }
}
