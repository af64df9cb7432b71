//! Storage abstraction trait
//!
//! This module defines the Storage trait that all storage backends must implement.

use crate::StorageBackend;
use async_trait::async_trait;
use bytes::Bytes;
use futures::Stream;
use std::pin::Pin;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Upload failed: {0}")]
    UploadFailed(String),

    #[error("Download failed: {0}")]
    DownloadFailed(String),

    #[error("Transcript not found: {0}")]
    NotFound(String),

    #[error("Invalid storage key: {0}")]
    InvalidKey(String),

    #[error("Storage backend error: {0}")]
    BackendError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Chunked transcript body as produced by [`Storage::get_stream`].
pub type ByteStream = Pin<Box<dyn Stream<Item = Result<Bytes, StorageError>> + Send>>;

/// Storage abstraction trait
///
/// Every method takes the transcript id; the backend maps it to its own key layout.
/// Implementations are shared across requests behind an `Arc<dyn Storage>`.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Store `content` under `id`, replacing anything already stored there.
    async fn put(&self, id: &str, content: Bytes, content_type: &str) -> StorageResult<()>;

    /// Read the full content stored under `id`.
    async fn get(&self, id: &str) -> StorageResult<Bytes>;

    /// Read the content stored under `id` as a stream of chunks.
    ///
    /// A missing transcript is reported as `NotFound` before any chunk is produced.
    async fn get_stream(&self, id: &str) -> StorageResult<ByteStream>;

    /// Check if a transcript exists
    async fn exists(&self, id: &str) -> StorageResult<bool>;

    /// Get the storage backend type
    fn backend_type(&self) -> StorageBackend;
}
