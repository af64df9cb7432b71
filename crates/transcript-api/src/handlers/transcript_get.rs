use crate::error::{ErrorResponse, HttpAppError};
use crate::state::AppState;
use axum::{
    body::Body,
    extract::{Path, State},
    http::header,
    response::IntoResponse,
};
use std::sync::Arc;
use transcript_core::constants::TRANSCRIPT_CONTENT_TYPE;

#[utoipa::path(
    get,
    path = "/transcripts/{id}",
    tag = "transcripts",
    params(
        ("id" = String, Path, description = "Transcript ID")
    ),
    responses(
        (status = 200, description = "Transcript document", body = String, content_type = "text/html"),
        (status = 404, description = "Transcript not found", body = ErrorResponse),
        (status = 500, description = "Storage error", body = ErrorResponse)
    )
)]
pub async fn get_transcript(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpAppError> {
    let stream = state.storage.get_stream(&id).await?;

    Ok((
        [(header::CONTENT_TYPE, TRANSCRIPT_CONTENT_TYPE)],
        Body::from_stream(stream),
    ))
}
