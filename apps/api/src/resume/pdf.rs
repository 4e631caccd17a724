//! First-page rasterisation of an uploaded résumé via pdfium.
//!
//! pdfium is not async-aware; `render_first_page` is blocking and callers run
//! it on `spawn_blocking` (see [`crate::resume::prepare_resume`]).

use std::path::PathBuf;

use image::DynamicImage;
use pdfium_render::prelude::*;
use thiserror::Error;
use tracing::debug;

const PDF_MAGIC: &[u8; 4] = b"%PDF";

#[derive(Debug, Error)]
pub enum PdfError {
    #[error("The uploaded PDF is empty. Please upload a valid file.")]
    Empty,

    #[error("The uploaded file is not a PDF (first bytes: {magic:?}).")]
    NotAPdf { magic: Vec<u8> },

    #[error("The PDF is password protected. Please upload an unencrypted file.")]
    Encrypted,

    #[error("Unable to read the PDF. It might be empty or corrupted. ({0})")]
    Unreadable(String),

    #[error("PDF has no pages. Please upload a valid PDF with content.")]
    NoPages,

    #[error("Failed to render the first page: {0}")]
    RenderFailed(String),

    #[error("Failed to encode the rendered page: {0}")]
    EncodeFailed(#[from] image::ImageError),

    #[error("PDF rendering library is unavailable: {0}")]
    LibraryUnavailable(String),

    #[error("Render task failed: {0}")]
    TaskFailed(String),
}

/// Rejects uploads that cannot possibly be a PDF before pdfium sees them.
pub fn validate_pdf(bytes: &[u8]) -> Result<(), PdfError> {
    if bytes.is_empty() {
        return Err(PdfError::Empty);
    }
    if bytes.len() < PDF_MAGIC.len() || &bytes[..PDF_MAGIC.len()] != PDF_MAGIC {
        return Err(PdfError::NotAPdf {
            magic: bytes.iter().take(PDF_MAGIC.len()).copied().collect(),
        });
    }
    Ok(())
}

/// Renders page one of a PDF held in memory.
///
/// Carried in `AppState` as `Arc<dyn PdfRasterizer>`.
pub trait PdfRasterizer: Send + Sync {
    fn render_first_page(&self, pdf: &[u8]) -> Result<DynamicImage, PdfError>;
}

/// pdfium-backed rasteriser. Binds the library per call so no pdfium state
/// outlives a request.
pub struct PdfiumRasterizer {
    library_dir: Option<PathBuf>,
    max_pixels: u32,
}

impl PdfiumRasterizer {
    pub fn new(library_dir: Option<PathBuf>, max_pixels: u32) -> Self {
        Self {
            library_dir,
            max_pixels,
        }
    }

    fn bind(&self) -> Result<Pdfium, PdfError> {
        let bindings = match &self.library_dir {
            Some(dir) => {
                Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path(dir))
            }
            None => Pdfium::bind_to_system_library(),
        }
        .map_err(|e| PdfError::LibraryUnavailable(format!("{e:?}")))?;

        Ok(Pdfium::new(bindings))
    }

    /// Checks that the pdfium library can be bound. Used once at startup.
    pub fn check_library(&self) -> Result<(), PdfError> {
        self.bind().map(|_| ())
    }
}

impl PdfRasterizer for PdfiumRasterizer {
    fn render_first_page(&self, pdf: &[u8]) -> Result<DynamicImage, PdfError> {
        let pdfium = self.bind()?;

        let document = pdfium
            .load_pdf_from_byte_slice(pdf, None)
            .map_err(classify_load_error)?;

        let pages = document.pages();
        debug!("PDF loaded: {} pages", pages.len());
        if pages.len() == 0 {
            return Err(PdfError::NoPages);
        }

        let page = pages
            .first()
            .map_err(|e| PdfError::RenderFailed(format!("{e:?}")))?;

        // Caps only; a page already within bounds is not upscaled.
        let max_edge = i32::try_from(self.max_pixels).unwrap_or(i32::MAX);
        let render_config = PdfRenderConfig::new()
            .set_maximum_width(max_edge)
            .set_maximum_height(max_edge);

        let bitmap = page
            .render_with_config(&render_config)
            .map_err(|e| PdfError::RenderFailed(format!("{e:?}")))?;

        let image = bitmap.as_image();
        debug!("Rendered page 1 → {}x{} px", image.width(), image.height());

        Ok(image)
    }
}

fn classify_load_error(err: PdfiumError) -> PdfError {
    match err {
        PdfiumError::PdfiumLibraryInternalError(PdfiumInternalError::PasswordError) => {
            PdfError::Encrypted
        }
        other => PdfError::Unreadable(format!("{other:?}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_upload_is_rejected() {
        assert!(matches!(validate_pdf(b""), Err(PdfError::Empty)));
    }

    #[test]
    fn test_non_pdf_bytes_are_rejected() {
        match validate_pdf(b"\x89PNG\r\n") {
            Err(PdfError::NotAPdf { magic }) => assert_eq!(magic, b"\x89PNG".to_vec()),
            other => panic!("expected NotAPdf, got {other:?}"),
        }
    }

    #[test]
    fn test_short_upload_is_not_a_pdf() {
        assert!(matches!(validate_pdf(b"%P"), Err(PdfError::NotAPdf { .. })));
    }

    #[test]
    fn test_pdf_header_is_accepted() {
        assert!(validate_pdf(b"%PDF-1.7\n%\xe2\xe3\xcf\xd3\n").is_ok());
    }

    #[test]
    fn test_password_error_is_encrypted() {
        let err = PdfiumError::PdfiumLibraryInternalError(PdfiumInternalError::PasswordError);
        assert!(matches!(classify_load_error(err), PdfError::Encrypted));
    }

    #[test]
    fn test_format_error_is_unreadable() {
        let err = PdfiumError::PdfiumLibraryInternalError(PdfiumInternalError::FormatError);
        match classify_load_error(err) {
            PdfError::Unreadable(detail) => assert!(detail.contains("FormatError")),
            other => panic!("expected Unreadable, got {other:?}"),
        }
    }

    #[test]
    fn test_user_facing_messages() {
        assert_eq!(
            PdfError::NoPages.to_string(),
            "PDF has no pages. Please upload a valid PDF with content."
        );
        assert!(PdfError::Unreadable("FormatError".into())
            .to_string()
            .starts_with("Unable to read the PDF"));
    }
}
