// SPDX-License-Identifier: MPL-2.0
//! Image decoding for slide panels (PNG, JPEG, GIF, WebP, etc.).

use crate::error::Result;
use iced::widget::image;
use image_rs::GenericImageView;

/// A decoded image ready to be drawn, with its natural dimensions.
#[derive(Debug, Clone)]
pub struct ImageData {
    pub handle: image::Handle,
    pub width: u32,
    pub height: u32,
}

impl ImageData {
    /// Creates a new `ImageData` from RGBA pixels.
    #[must_use]
    pub fn from_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Self {
        let handle = image::Handle::from_rgba(width, height, pixels);
        Self {
            handle,
            width,
            height,
        }
    }

    /// Decodes encoded bytes (PNG, JPEG, ...) into RGBA pixels.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Image`](crate::error::Error::Image) when the bytes are
    /// not a supported image or the image has a zero dimension.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        let img = image_rs::load_from_memory(bytes)?;
        let (width, height) = img.dimensions();
        if width == 0 || height == 0 {
            return Err(crate::error::Error::Image(
                "image has empty dimensions".into(),
            ));
        }

        let pixels = img.to_rgba8().into_vec();
        Ok(Self::from_rgba(width, height, pixels))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use image_rs::{ImageFormat, Rgba, RgbaImage};
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let mut bytes = Vec::new();
        RgbaImage::from_pixel(width, height, Rgba([255, 0, 0, 255]))
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .expect("failed to encode png");
        bytes
    }

    #[test]
    fn decode_png_returns_natural_dimensions() {
        let data = ImageData::decode(&png_bytes(4, 2)).expect("png should decode");
        assert_eq!((data.width, data.height), (4, 2));
    }

    #[test]
    fn decode_invalid_bytes_returns_image_error() {
        match ImageData::decode(b"not a png") {
            Err(Error::Image(message)) => assert!(!message.is_empty()),
            other => panic!("expected Image error for invalid bytes, got {other:?}"),
        }
    }

    #[test]
    fn decode_truncated_png_returns_image_error() {
        let bytes = png_bytes(8, 8);
        assert!(matches!(
            ImageData::decode(&bytes[..bytes.len() / 2]),
            Err(Error::Image(_))
        ));
    }
}
