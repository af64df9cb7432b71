//! Transcript identifier

use std::fmt::{Display, Formatter, Result as FmtResult};
use uuid::Uuid;

/// Short public identifier of a stored transcript.
///
/// Generated ids are the first group of a random UUID v4 (8 lowercase hex characters).
/// Collisions between generated ids are not detected; a colliding upload overwrites the
/// earlier transcript.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TranscriptId(String);

impl TranscriptId {
    /// Mint a fresh identifier for a new upload.
    pub fn generate() -> Self {
        let uuid = Uuid::new_v4().to_string();
        let first = uuid.split('-').next().unwrap_or(&uuid);
        TranscriptId(first.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl Display for TranscriptId {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TranscriptId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generated_id_is_first_uuid_group() {
        let id = TranscriptId::generate();
        assert_eq!(id.as_str().len(), 8);
        assert!(id.as_str().chars().all(|c| c.is_ascii_hexdigit()));
        assert!(!id.as_str().contains('-'));
    }

    #[test]
    fn test_generated_ids_are_distinct() {
        let ids: HashSet<String> = (0..100)
            .map(|_| TranscriptId::generate().into_inner())
            .collect();
        assert_eq!(ids.len(), 100);
    }
}
