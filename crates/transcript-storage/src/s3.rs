use crate::keys;
use crate::traits::{ByteStream, Storage, StorageError, StorageResult};
use crate::StorageBackend;
use async_trait::async_trait;
use bytes::Bytes;
use futures::StreamExt;
use object_store::aws::AmazonS3Builder;
use object_store::path::Path;
use object_store::Error as ObjectStoreError;
use object_store::{
    Attribute, Attributes, GetOptions, GetResult, ObjectStore, PutOptions, PutPayload,
    Result as ObjectResult,
};
use std::sync::Arc;
use transcript_core::config::S3Settings;

/// S3 storage implementation
///
/// Works against AWS S3 and S3-compatible providers. Transcripts live under
/// `transcripts/{id}.html` in the configured bucket.
#[derive(Clone)]
pub struct S3Storage {
    store: Arc<dyn ObjectStore>,
    bucket: String,
}

impl S3Storage {
    /// Create a new S3Storage instance
    ///
    /// Credentials not given in `settings` fall back to the usual AWS environment variables.
    /// A custom endpoint starting with `http://` (e.g. MinIO at "http://localhost:9000")
    /// enables plain HTTP.
    pub fn new(settings: &S3Settings) -> StorageResult<Self> {
        let mut builder = AmazonS3Builder::from_env()
            .with_region(settings.region.clone())
            .with_bucket_name(settings.bucket.clone());

        if let Some(ref endpoint) = settings.endpoint {
            let allow_http = endpoint.starts_with("http://");
            builder = builder
                .with_endpoint(endpoint.clone())
                .with_allow_http(allow_http);
        }

        if let Some(ref access_key_id) = settings.access_key_id {
            builder = builder.with_access_key_id(access_key_id.clone());
        }

        if let Some(ref secret_access_key) = settings.secret_access_key {
            builder = builder.with_secret_access_key(secret_access_key.clone());
        }

        let store = builder
            .build()
            .map_err(|e| StorageError::ConfigError(e.to_string()))?;

        Ok(Self::with_store(Arc::new(store), settings.bucket.clone()))
    }

    /// Wrap an already-built object store.
    pub fn with_store(store: Arc<dyn ObjectStore>, bucket: impl Into<String>) -> Self {
        S3Storage {
            store,
            bucket: bucket.into(),
        }
    }

    async fn fetch(&self, id: &str, key: &str) -> StorageResult<GetResult> {
        let location = Path::from(key.to_string());

        let result: ObjectResult<_> =
            ObjectStore::get_opts(self.store.as_ref(), &location, GetOptions::default()).await;

        result.map_err(|e| match e {
            ObjectStoreError::NotFound { .. } => StorageError::NotFound(id.to_string()),
            other => {
                tracing::error!(
                    error = %other,
                    bucket = %self.bucket,
                    key = %key,
                    "S3 get failed"
                );
                StorageError::DownloadFailed(other.to_string())
            }
        })
    }
}

#[async_trait]
impl Storage for S3Storage {
    async fn put(&self, id: &str, content: Bytes, content_type: &str) -> StorageResult<()> {
        keys::validate_id(id)?;
        let key = keys::object_key(id);
        let size = content.len() as u64;
        let location = Path::from(key.clone());

        let mut attributes = Attributes::new();
        attributes.insert(Attribute::ContentType, content_type.to_string().into());
        let options = PutOptions {
            attributes,
            ..Default::default()
        };

        let start = std::time::Instant::now();

        let result: ObjectResult<_> = ObjectStore::put_opts(
            self.store.as_ref(),
            &location,
            PutPayload::from(content),
            options,
        )
        .await;

        result.map_err(|e| {
            tracing::error!(
                error = %e,
                bucket = %self.bucket,
                key = %key,
                size_bytes = size,
                duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                "S3 put failed"
            );
            StorageError::UploadFailed(e.to_string())
        })?;

        tracing::info!(
            bucket = %self.bucket,
            key = %key,
            size_bytes = size,
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "S3 put successful"
        );

        Ok(())
    }

    async fn get(&self, id: &str) -> StorageResult<Bytes> {
        keys::validate_id(id)?;
        let key = keys::object_key(id);
        let start = std::time::Instant::now();

        let bytes = self
            .fetch(id, &key)
            .await?
            .bytes()
            .await
            .map_err(|e| StorageError::DownloadFailed(e.to_string()))?;

        tracing::info!(
            bucket = %self.bucket,
            key = %key,
            size_bytes = bytes.len(),
            duration_ms = start.elapsed().as_secs_f64() * 1000.0,
            "S3 get successful"
        );

        Ok(bytes)
    }

    async fn get_stream(&self, id: &str) -> StorageResult<ByteStream> {
        keys::validate_id(id)?;
        let key = keys::object_key(id);
        let start = std::time::Instant::now();

        let result = self.fetch(id, &key).await?;

        let bucket = self.bucket.clone();
        let stream = result.into_stream().map(move |res| {
            res.map_err(|e| {
                tracing::error!(
                    bucket = %bucket,
                    key = %key,
                    duration_ms = start.elapsed().as_secs_f64() * 1000.0,
                    "S3 stream download error"
                );
                StorageError::DownloadFailed(e.to_string())
            })
        });

        Ok(Box::pin(stream))
    }

    async fn exists(&self, id: &str) -> StorageResult<bool> {
        keys::validate_id(id)?;
        let location = Path::from(keys::object_key(id));
        let options = GetOptions {
            head: true,
            ..Default::default()
        };
        match ObjectStore::get_opts(self.store.as_ref(), &location, options).await {
            Ok(_) => Ok(true),
            Err(ObjectStoreError::NotFound { .. }) => Ok(false),
            Err(e) => Err(StorageError::BackendError(e.to_string())),
        }
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::S3
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use object_store::memory::InMemory;

    fn in_memory() -> (Arc<InMemory>, S3Storage) {
        let store = Arc::new(InMemory::new());
        let storage = S3Storage::with_store(store.clone(), "test-bucket");
        (store, storage)
    }

    #[tokio::test]
    async fn test_put_writes_namespaced_key_with_content_type() {
        let (store, storage) = in_memory();
        let data = Bytes::from_static(b"<html>transcript</html>");

        storage.put("0badf00d", data.clone(), "text/html").await.unwrap();

        let location = Path::from("transcripts/0badf00d.html");
        let result = ObjectStore::get_opts(store.as_ref(), &location, GetOptions::default())
            .await
            .unwrap();
        let content_type: Option<&str> = result
            .attributes
            .get(&Attribute::ContentType)
            .map(|v| v.as_ref());
        assert_eq!(content_type, Some("text/html"));
        assert_eq!(result.bytes().await.unwrap(), data);
    }

    #[tokio::test]
    async fn test_put_get_round_trip() {
        let (_store, storage) = in_memory();
        let data = Bytes::from_static(b"<html><body>round trip</body></html>");

        storage.put("cafebabe", data.clone(), "text/html").await.unwrap();

        assert_eq!(storage.get("cafebabe").await.unwrap(), data);
        assert!(storage.exists("cafebabe").await.unwrap());

        let mut stream = storage.get_stream("cafebabe").await.unwrap();
        let mut streamed = Vec::new();
        while let Some(chunk) = stream.next().await {
            streamed.extend_from_slice(&chunk.unwrap());
        }
        assert_eq!(streamed, data.to_vec());
    }

    #[tokio::test]
    async fn test_missing_object_is_not_found() {
        let (_store, storage) = in_memory();

        assert!(matches!(
            storage.get("deadbeef").await,
            Err(StorageError::NotFound(_))
        ));
        assert!(matches!(
            storage.get_stream("deadbeef").await,
            Err(StorageError::NotFound(_))
        ));
        assert!(!storage.exists("deadbeef").await.unwrap());
    }

    #[tokio::test]
    async fn test_invalid_id_rejected_before_backend() {
        let (_store, storage) = in_memory();

        let result = storage
            .put("../other", Bytes::from_static(b"x"), "text/html")
            .await;
        assert!(matches!(result, Err(StorageError::InvalidKey(_))));
        assert_eq!(storage.backend_type(), StorageBackend::S3);
    }

    #[test]
    fn test_new_with_custom_endpoint() {
        let settings = S3Settings {
            bucket: "transcripts".to_string(),
            region: "us-east-1".to_string(),
            endpoint: Some("http://localhost:9000".to_string()),
            access_key_id: Some("minio".to_string()),
            secret_access_key: Some("minio-secret".to_string()),
        };
        assert!(S3Storage::new(&settings).is_ok());
    }
}
