//! Multipart extraction for transcript uploads

use axum::extract::Multipart;
use axum::http::StatusCode;
use bytes::Bytes;
use transcript_core::constants::{TRANSCRIPT_CONTENT_TYPE, UPLOAD_FIELD_NAME};
use transcript_core::AppError;

/// The uploaded document as read from the form.
#[derive(Debug)]
pub struct UploadedFile {
    pub content: Bytes,
    pub file_name: Option<String>,
    pub content_type: String,
}

/// Whether a declared content type is HTML (`text/html`, with or without parameters).
pub fn is_html_content_type(content_type: &str) -> bool {
    content_type
        .trim()
        .to_ascii_lowercase()
        .starts_with(TRANSCRIPT_CONTENT_TYPE)
}

/// Read the first field named `file` from the form.
///
/// The declared content type is checked before the body is read, so rejected files are never
/// buffered. Other fields are skipped.
pub async fn extract_transcript_file(mut multipart: Multipart) -> Result<UploadedFile, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::MalformedUpload(format!("Failed to read multipart: {}", e)))?
    {
        if field.name() != Some(UPLOAD_FIELD_NAME) {
            continue;
        }

        let content_type = field.content_type().unwrap_or_default().to_string();
        if !is_html_content_type(&content_type) {
            return Err(AppError::UnsupportedContentType(format!(
                "File must be of type {}",
                TRANSCRIPT_CONTENT_TYPE
            )));
        }

        let file_name = field.file_name().map(|s| s.to_string());

        let content = field.bytes().await.map_err(|e| {
            if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
                AppError::PayloadTooLarge(e.body_text())
            } else {
                AppError::UploadFailed(format!("Failed to read file data: {}", e))
            }
        })?;

        return Ok(UploadedFile {
            content,
            file_name,
            content_type,
        });
    }

    Err(AppError::MalformedUpload(format!(
        "No '{}' field in form",
        UPLOAD_FIELD_NAME
    )))
}
