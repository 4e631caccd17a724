// Student-side résumé handling: PDF → first-page JPEG → model feedback.

pub mod encode;
pub mod handlers;
pub mod pdf;
pub mod upload;

use std::sync::Arc;

use tracing::info;

pub use encode::ResumeImage;

use crate::resume::encode::encode_jpeg;
use crate::resume::pdf::{validate_pdf, PdfError, PdfRasterizer};

/// Validates the upload, renders its first page off the async runtime and
/// encodes it for the model.
pub async fn prepare_resume(
    rasterizer: Arc<dyn PdfRasterizer>,
    pdf: bytes::Bytes,
) -> Result<ResumeImage, PdfError> {
    validate_pdf(&pdf)?;
    let size = pdf.len();

    let image = tokio::task::spawn_blocking(move || {
        let page = rasterizer.render_first_page(&pdf)?;
        encode_jpeg(&page).map_err(PdfError::from)
    })
    .await
    .map_err(|e| PdfError::TaskFailed(e.to_string()))??;

    info!("Résumé prepared ({size} byte PDF)");
    Ok(image)
}
