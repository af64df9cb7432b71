//! Transcript Storage Library
//!
//! This crate provides the storage abstraction for transcripts and its two implementations:
//! an S3-compatible object store and the local filesystem.
//!
//! # Storage key format
//!
//! Callers address transcripts by id only. Each backend derives the physical location through
//! the `keys` module:
//!
//! - **Object storage**: `transcripts/{id}.html`
//! - **Local filesystem**: `{dir}/{id}.html`
//!
//! Ids that could escape that namespace (`/`, `\`, `..`, leading `.`) are rejected.

pub mod factory;
pub(crate) mod keys;
#[cfg(feature = "storage-local")]
pub mod local;
#[cfg(feature = "storage-s3")]
pub mod s3;
pub mod traits;

// Re-export commonly used types
pub use factory::create_storage;
#[cfg(feature = "storage-local")]
pub use local::LocalStorage;
#[cfg(feature = "storage-s3")]
pub use s3::S3Storage;
pub use traits::{ByteStream, Storage, StorageError, StorageResult};
pub use transcript_core::StorageBackend;
