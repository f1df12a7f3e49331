// SPDX-License-Identifier: MPL-2.0
//! Asynchronous slide image loading.
//!
//! Each slide is fetched and decoded independently so one slow or broken image
//! never holds back the others. Decoding runs on tokio's blocking pool and the
//! whole load is bounded by a timeout.

use crate::error::{Error, Result};
use crate::media::image::ImageData;
use crate::media::location::Location;
use std::time::Duration;

/// Fetches and decodes one image, giving up after `timeout`.
///
/// # Errors
///
/// Returns [`Error::Timeout`] when the deadline passes, otherwise whatever the
/// fetch ([`Error::Io`], [`Error::Http`]) or decode ([`Error::Image`]) step
/// reported.
pub async fn load_slide_image(location: Location, timeout: Duration) -> Result<ImageData> {
    let work = async {
        let bytes = location.fetch_bytes().await?;
        tokio::task::spawn_blocking(move || ImageData::decode(&bytes))
            .await
            .map_err(|e| Error::Image(e.to_string()))?
    };

    match tokio::time::timeout(timeout, work).await {
        Ok(result) => result,
        Err(_) => Err(Error::Timeout(timeout)),
    }
}
