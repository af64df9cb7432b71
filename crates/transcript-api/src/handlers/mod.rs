pub mod transcript_delete;
pub mod transcript_get;
pub mod transcript_upload;

use serde::Serialize;
use utoipa::ToSchema;

/// Plain `{ "message": ... }` body.
#[derive(Debug, Serialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
