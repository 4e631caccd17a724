//! Multipart form reading shared by the evaluation and tracker endpoints.

use std::collections::HashMap;

use axum::extract::multipart::MultipartError;
use axum::extract::Multipart;
use axum::http::StatusCode;
use bytes::Bytes;

use crate::errors::AppError;

/// Name of the file part carrying the résumé PDF.
pub const RESUME_FIELD: &str = "resume";

/// The body limit surfaces as a stream read failure; its status tells it apart.
fn multipart_error(err: MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        AppError::PayloadTooLarge(
            "The upload exceeds the maximum allowed size. Please upload a smaller PDF.".to_string(),
        )
    } else {
        AppError::Validation(err.body_text())
    }
}

#[derive(Debug)]
pub struct UploadedFile {
    pub file_name: Option<String>,
    pub bytes: Bytes,
}

/// All parts of a submitted form: text fields by name plus the optional résumé.
#[derive(Debug, Default)]
pub struct FormFields {
    texts: HashMap<String, String>,
    pub resume: Option<UploadedFile>,
}

impl FormFields {
    pub async fn read(mut multipart: Multipart) -> Result<Self, AppError> {
        let mut fields = FormFields::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(multipart_error)?
        {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };

            if name == RESUME_FIELD {
                let file_name = field.file_name().map(str::to_string);
                let bytes = field
                    .bytes()
                    .await
                    .map_err(multipart_error)?;
                fields.resume = Some(UploadedFile { file_name, bytes });
            } else {
                let text = field
                    .text()
                    .await
                    .map_err(multipart_error)?;
                fields.texts.insert(name, text);
            }
        }

        Ok(fields)
    }

    /// Trimmed text value; blank counts as absent.
    pub fn text(&self, name: &str) -> Option<&str> {
        self.texts
            .get(name)
            .map(|s| s.trim())
            .filter(|s| !s.is_empty())
    }

    /// A file input left empty still submits a part with no filename and no bytes.
    pub fn take_resume(&mut self) -> Result<UploadedFile, AppError> {
        match self.resume.take() {
            Some(file)
                if !(file.bytes.is_empty()
                    && file.file_name.as_deref().map_or(true, str::is_empty)) =>
            {
                Ok(file)
            }
            _ => Err(AppError::Validation("Please upload a PDF file.".to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fields_with(texts: &[(&str, &str)], resume: Option<UploadedFile>) -> FormFields {
        FormFields {
            texts: texts
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
            resume,
        }
    }

    #[test]
    fn test_blank_text_counts_as_missing() {
        let fields = fields_with(&[("job_description", "   \n")], None);
        assert_eq!(fields.text("job_description"), None);
    }

    #[test]
    fn test_text_is_trimmed() {
        let fields = fields_with(&[("name", "  Ada  ")], None);
        assert_eq!(fields.text("name"), Some("Ada"));
    }

    #[test]
    fn test_unselected_file_input_is_missing() {
        let mut fields = fields_with(
            &[],
            Some(UploadedFile {
                file_name: Some(String::new()),
                bytes: Bytes::new(),
            }),
        );
        assert!(matches!(fields.take_resume(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_named_empty_file_is_kept_for_pdf_validation() {
        let mut fields = fields_with(
            &[],
            Some(UploadedFile {
                file_name: Some("cv.pdf".to_string()),
                bytes: Bytes::new(),
            }),
        );
        let file = fields.take_resume().unwrap();
        assert!(file.bytes.is_empty());
    }
}
