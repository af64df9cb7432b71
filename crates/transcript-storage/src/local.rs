use crate::keys;
use crate::traits::{ByteStream, Storage, StorageError, StorageResult};
use crate::StorageBackend;
use async_trait::async_trait;
use bytes::Bytes;
use futures::StreamExt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Local filesystem storage implementation
///
/// Transcripts are stored flat as `{base_path}/{id}.html`.
#[derive(Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    /// Create a new LocalStorage instance, creating `base_path` if needed.
    pub async fn new(base_path: impl Into<PathBuf>) -> StorageResult<Self> {
        let base_path = base_path.into();

        fs::create_dir_all(&base_path).await.map_err(|e| {
            StorageError::ConfigError(format!(
                "Failed to create storage directory {}: {}",
                base_path.display(),
                e
            ))
        })?;

        Ok(LocalStorage { base_path })
    }

    pub fn base_path(&self) -> &Path {
        &self.base_path
    }

    /// Convert a transcript id to its filesystem path
    fn id_to_path(&self, id: &str) -> StorageResult<PathBuf> {
        keys::validate_id(id)?;
        Ok(self.base_path.join(keys::file_name(id)))
    }
}

fn read_error(id: &str, path: &Path, e: std::io::Error) -> StorageError {
    if e.kind() == ErrorKind::NotFound {
        StorageError::NotFound(id.to_string())
    } else {
        StorageError::DownloadFailed(format!("Failed to read file {}: {}", path.display(), e))
    }
}

#[async_trait]
impl Storage for LocalStorage {
    async fn put(&self, id: &str, content: Bytes, _content_type: &str) -> StorageResult<()> {
        let path = self.id_to_path(id)?;
        let size = content.len();
        let start = std::time::Instant::now();

        let mut file = fs::File::create(&path).await.map_err(|e| {
            StorageError::UploadFailed(format!("Failed to create file {}: {}", path.display(), e))
        })?;

        file.write_all(&content).await.map_err(|e| {
            StorageError::UploadFailed(format!("Failed to write file {}: {}", path.display(), e))
        })?;

        file.sync_all().await.map_err(|e| {
            StorageError::UploadFailed(format!("Failed to sync file {}: {}", path.display(), e))
        })?;

        tracing::info!(
            path = %path.display(),
            id = %id,
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Local storage put successful"
        );

        Ok(())
    }

    async fn get(&self, id: &str) -> StorageResult<Bytes> {
        let path = self.id_to_path(id)?;
        let start = std::time::Instant::now();

        let data = fs::read(&path).await.map_err(|e| read_error(id, &path, e))?;

        tracing::info!(
            path = %path.display(),
            id = %id,
            size_bytes = data.len(),
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "Local storage get successful"
        );

        Ok(Bytes::from(data))
    }

    async fn get_stream(&self, id: &str) -> StorageResult<ByteStream> {
        let path = self.id_to_path(id)?;
        let start = std::time::Instant::now();

        let file = fs::File::open(&path)
            .await
            .map_err(|e| read_error(id, &path, e))?;

        let id = id.to_string();
        let path_display = path.display().to_string();
        let stream = tokio_util::io::ReaderStream::new(file).map(move |item| {
            item.map_err(|e| {
                tracing::error!(
                    path = %path_display,
                    id = %id,
                    duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                    "Local storage stream read error"
                );
                StorageError::DownloadFailed(format!("Failed to read chunk: {}", e))
            })
        });

        Ok(Box::pin(stream))
    }

    async fn exists(&self, id: &str) -> StorageResult<bool> {
        let path = self.id_to_path(id)?;
        fs::try_exists(&path).await.map_err(|e| {
            tracing::error!(
                path = %path.display(),
                id = %id,
                error = %e,
                "Local storage existence check failed"
            );
            StorageError::IoError(e)
        })
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::Local
    }
}
