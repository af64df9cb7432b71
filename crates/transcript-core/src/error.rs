//! Error types module
//!
//! All request-level failures are unified under [`AppError`]. Each variant describes its own HTTP
//! presentation through [`ErrorMetadata`], so the API layer can render any error without
//! matching on variants itself.

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for recoverable issues like oversized bodies
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Metadata for error responses - defines how an error should be presented
pub trait ErrorMetadata {
    /// HTTP status code to return
    fn http_status_code(&self) -> u16;

    /// Client-facing message (may differ from internal error message)
    fn client_message(&self) -> String;

    /// Whether details should be hidden from clients
    fn is_sensitive(&self) -> bool;

    /// Log level for this error
    fn log_level(&self) -> LogLevel;
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Malformed upload: {0}")]
    MalformedUpload(String),

    #[error("Unsupported content type: {0}")]
    UnsupportedContentType(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("File too large: {0}")]
    PayloadTooLarge(String),

    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Internal error: {0}")]
    Internal(String),

    #[error("Internal error with source")]
    InternalWithSource {
        message: String,
        #[source]
        source: anyhow::Error,
    },
}

impl From<anyhow::Error> for AppError {
    fn from(err: anyhow::Error) -> Self {
        AppError::InternalWithSource {
            message: err.to_string(),
            source: err,
        }
    }
}

/// Static metadata for each variant: (http_status, sensitive, log_level).
fn app_error_static_metadata(err: &AppError) -> (u16, bool, LogLevel) {
    match err {
        AppError::InvalidInput(_) => (400, false, LogLevel::Debug),
        AppError::MalformedUpload(_) => (400, false, LogLevel::Debug),
        AppError::UnsupportedContentType(_) => (400, false, LogLevel::Debug),
        AppError::Unauthorized(_) => (401, true, LogLevel::Debug),
        AppError::NotFound(_) => (404, false, LogLevel::Debug),
        AppError::PayloadTooLarge(_) => (413, false, LogLevel::Warn),
        AppError::UploadFailed(_) => (500, true, LogLevel::Error),
        AppError::Storage(_) => (500, true, LogLevel::Error),
        AppError::Internal(_) => (500, true, LogLevel::Error),
        AppError::InternalWithSource { .. } => (500, true, LogLevel::Error),
    }
}

impl AppError {
    /// Get error type name for logging
    pub fn error_type(&self) -> &str {
        match self {
            AppError::InvalidInput(_) => "InvalidInput",
            AppError::MalformedUpload(_) => "MalformedUpload",
            AppError::UnsupportedContentType(_) => "UnsupportedContentType",
            AppError::Unauthorized(_) => "Unauthorized",
            AppError::NotFound(_) => "NotFound",
            AppError::PayloadTooLarge(_) => "PayloadTooLarge",
            AppError::UploadFailed(_) => "UploadFailed",
            AppError::Storage(_) => "Storage",
            AppError::Internal(_) => "Internal",
            AppError::InternalWithSource { .. } => "Internal",
        }
    }

    /// Get detailed error information including error chain
    pub fn detailed_message(&self) -> String {
        use std::error::Error;

        let mut details = self.to_string();

        let mut source = self.source();
        let mut depth = 0;
        while let Some(err) = source {
            depth += 1;
            if depth > 5 {
                details.push_str("\n  ... (truncated)");
                break;
            }
            details.push_str(&format!("\n  Caused by: {}", err));
            source = err.source();
        }

        details
    }
}

impl ErrorMetadata for AppError {
    fn http_status_code(&self) -> u16 {
        app_error_static_metadata(self).0
    }

    fn is_sensitive(&self) -> bool {
        app_error_static_metadata(self).1
    }

    fn log_level(&self) -> LogLevel {
        app_error_static_metadata(self).2
    }

    fn client_message(&self) -> String {
        match self {
            AppError::InvalidInput(ref msg) => msg.clone(),
            AppError::MalformedUpload(_) => "Error Uploading File".to_string(),
            AppError::UnsupportedContentType(ref msg) => msg.clone(),
            AppError::Unauthorized(ref msg) => msg.clone(),
            AppError::NotFound(ref msg) => msg.clone(),
            AppError::PayloadTooLarge(ref msg) => msg.clone(),
            AppError::UploadFailed(_) => "Error Uploading File".to_string(),
            AppError::Storage(_) => "Failed to access storage".to_string(),
            AppError::Internal(_) => "Internal server error".to_string(),
            AppError::InternalWithSource { .. } => "Internal server error".to_string(),
        }
    }
}
