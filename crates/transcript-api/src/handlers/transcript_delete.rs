use super::MessageResponse;
use crate::error::ErrorResponse;
use axum::{extract::Path, Json};

/// Transcripts are immutable once uploaded: this acknowledges the request and leaves storage
/// untouched.
#[utoipa::path(
    delete,
    path = "/transcripts/{id}",
    tag = "transcripts",
    params(
        ("id" = String, Path, description = "Transcript ID")
    ),
    responses(
        (status = 200, description = "Acknowledged; nothing is deleted", body = MessageResponse),
        (status = 401, description = "Missing or invalid authorization", body = ErrorResponse)
    )
)]
pub async fn delete_transcript(Path(id): Path<String>) -> Json<MessageResponse> {
    tracing::info!(id = %id, "Delete requested; transcripts are never removed");
    Json(MessageResponse::new("Success"))
}
