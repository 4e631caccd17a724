//! Image encoding: `DynamicImage` → base64 JPEG wrapped in `ResumeImage`.

use std::io::Cursor;

use base64::{engine::general_purpose::STANDARD, Engine as _};
use image::{DynamicImage, ImageFormat};
use tracing::debug;

pub const JPEG_MIME: &str = "image/jpeg";

/// A rendered résumé page, ready to be inlined into a model request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResumeImage {
    pub mime_type: String,
    /// Standard-alphabet base64 of the encoded bytes.
    pub data: String,
}

impl ResumeImage {
    pub fn jpeg(data: String) -> Self {
        Self {
            mime_type: JPEG_MIME.to_string(),
            data,
        }
    }
}

/// JPEG has no alpha channel, so the page is flattened to RGB first.
pub fn encode_jpeg(img: &DynamicImage) -> Result<ResumeImage, image::ImageError> {
    let rgb = DynamicImage::ImageRgb8(img.to_rgb8());

    let mut buf = Vec::new();
    rgb.write_to(&mut Cursor::new(&mut buf), ImageFormat::Jpeg)?;

    let b64 = STANDARD.encode(&buf);
    debug!("Encoded résumé page → {} bytes base64", b64.len());

    Ok(ResumeImage::jpeg(b64))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{Rgba, RgbaImage};

    #[test]
    fn encode_rgba_page_as_jpeg() {
        let img = DynamicImage::ImageRgba8(RgbaImage::from_pixel(16, 16, Rgba([20, 40, 60, 128])));
        let encoded = encode_jpeg(&img).expect("encode should succeed");
        assert_eq!(encoded.mime_type, "image/jpeg");

        let decoded = STANDARD.decode(&encoded.data).expect("valid base64");
        // JPEG SOI marker
        assert_eq!(&decoded[..2], &[0xFF, 0xD8]);
    }
}
