//! Shared key generation for storage backends.

use crate::traits::{StorageError, StorageResult};
use transcript_core::constants::{TRANSCRIPT_EXTENSION, TRANSCRIPT_KEY_PREFIX};

/// Reject ids that could address anything outside the transcript namespace.
pub fn validate_id(id: &str) -> StorageResult<()> {
    if id.is_empty() {
        return Err(StorageError::InvalidKey("Transcript id is empty".to_string()));
    }
    if id.contains('/') || id.contains('\\') || id.contains("..") || id.starts_with('.') {
        return Err(StorageError::InvalidKey(format!(
            "Transcript id contains invalid characters: {}",
            id
        )));
    }
    Ok(())
}

/// File name of a transcript: `{id}.html`.
pub fn file_name(id: &str) -> String {
    format!("{}.{}", id, TRANSCRIPT_EXTENSION)
}

/// Object key of a transcript in a bucket: `transcripts/{id}.html`.
pub fn object_key(id: &str) -> String {
    format!("{}/{}", TRANSCRIPT_KEY_PREFIX, file_name(id))
}
