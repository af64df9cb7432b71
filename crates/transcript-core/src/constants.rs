/// Content type every transcript is stored and served with.
pub const TRANSCRIPT_CONTENT_TYPE: &str = "text/html";

/// Object key prefix for transcripts in a bucket.
pub const TRANSCRIPT_KEY_PREFIX: &str = "transcripts";

/// File extension appended to every stored transcript.
pub const TRANSCRIPT_EXTENSION: &str = "html";

/// Multipart form field carrying the uploaded document.
pub const UPLOAD_FIELD_NAME: &str = "file";
