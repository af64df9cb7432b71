//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::error;
use crate::handlers;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Transcript API",
        version = "0.1.0",
        description = "Stores HTML transcripts under short generated ids and serves them back. Uploading and deleting require the configured token in the Authorization header."
    ),
    paths(
        handlers::transcript_get::get_transcript,
        handlers::transcript_upload::upload_transcript,
        handlers::transcript_delete::delete_transcript,
    ),
    components(schemas(
        handlers::MessageResponse,
        handlers::transcript_upload::UploadResponse,
        error::ErrorResponse,
        error::UploadErrorResponse,
    )),
    tags(
        (name = "transcripts", description = "Transcript upload and retrieval")
    )
)]
pub struct ApiDoc;

pub fn get_openapi_spec() -> utoipa::openapi::OpenApi {
    ApiDoc::openapi()
}
