//! QR code rendering to PNG data URIs.

use base64::Engine as _;
use image::{ImageFormat, Luma};
use qrcode::QrCode;
use std::io::Cursor;

/// Media type prefix of every produced data URI.
pub const PNG_DATA_URI_PREFIX: &str = "data:image/png;base64,";

/// Smallest edge, in pixels, of rendered codes.
const MIN_DIMENSION: u32 = 200;

#[derive(Debug, thiserror::Error)]
pub enum QrEncodeError {
    #[error("payload cannot be encoded as a QR code: {0}")]
    Payload(#[from] qrcode::types::QrError),
    #[error("failed to encode QR image: {0}")]
    Image(#[from] image::ImageError),
}

/// Encodes text into a QR image data URI.
#[cfg_attr(test, mockall::automock)]
pub trait QrEncoder: Send + Sync {
    fn to_data_url(&self, text: &str) -> Result<String, QrEncodeError>;
}

/// Renders greyscale PNG QR codes with a quiet zone.
#[derive(Debug, Clone, Default)]
pub struct PngQrEncoder;

impl PngQrEncoder {
    pub fn new() -> Self {
        Self
    }
}

impl QrEncoder for PngQrEncoder {
    fn to_data_url(&self, text: &str) -> Result<String, QrEncodeError> {
        let code = QrCode::new(text.as_bytes())?;
        let image = code
            .render::<Luma<u8>>()
            .min_dimensions(MIN_DIMENSION, MIN_DIMENSION)
            .build();

        let mut png = Cursor::new(Vec::new());
        image.write_to(&mut png, ImageFormat::Png)?;

        let encoded = base64::engine::general_purpose::STANDARD.encode(png.into_inner());
        Ok(format!("{PNG_DATA_URI_PREFIX}{encoded}"))
    }
}
