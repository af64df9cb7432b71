use crate::error::{ErrorResponse, HttpAppError, UploadErrorResponse};
use crate::state::AppState;
use crate::utils::upload::extract_transcript_file;
use axum::{
    extract::{multipart::MultipartRejection, Multipart, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Serialize;
use std::sync::Arc;
use transcript_core::constants::TRANSCRIPT_CONTENT_TYPE;
use transcript_core::{AppError, TranscriptId};
use utoipa::ToSchema;

#[derive(Debug, Serialize, ToSchema)]
pub struct UploadResponse {
    /// Public URL of the stored transcript
    pub url: String,
    pub id: String,
}

#[utoipa::path(
    post,
    path = "/transcripts",
    tag = "transcripts",
    request_body(content = inline(Object), content_type = "multipart/form-data"),
    responses(
        (status = 201, description = "Transcript stored", body = UploadResponse),
        (status = 400, description = "Malformed form or wrong content type"),
        (status = 401, description = "Missing or invalid authorization", body = ErrorResponse),
        (status = 500, description = "Transcript could not be stored", body = UploadErrorResponse)
    )
)]
pub async fn upload_transcript(
    State(state): State<Arc<AppState>>,
    multipart: Result<Multipart, MultipartRejection>,
) -> Result<impl IntoResponse, HttpAppError> {
    let multipart = multipart.map_err(|e| AppError::MalformedUpload(e.body_text()))?;
    let file = extract_transcript_file(multipart).await?;

    let id = TranscriptId::generate();
    let size = file.content.len();

    state
        .storage
        .put(id.as_str(), file.content, TRANSCRIPT_CONTENT_TYPE)
        .await
        .map_err(|e| AppError::UploadFailed(e.to_string()))?;

    tracing::info!(
        id = %id,
        size_bytes = size,
        file_name = ?file.file_name,
        declared_content_type = %file.content_type,
        "Transcript uploaded"
    );

    let url = state.transcript_url(id.as_str());
    Ok((
        StatusCode::CREATED,
        Json(UploadResponse {
            url,
            id: id.into_inner(),
        }),
    ))
}
