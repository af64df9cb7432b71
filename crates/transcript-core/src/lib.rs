//! Transcript Core Library
//!
//! This crate provides the domain types shared by the storage backends and the HTTP API:
//! configuration, the error taxonomy, the transcript identifier, and the storage backend kind.

pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod storage_types;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, ErrorMetadata, LogLevel};
pub use models::TranscriptId;
pub use storage_types::StorageBackend;
