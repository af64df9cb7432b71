//! Test helpers: build AppState and router for integration tests.
//!
//! Run from workspace root: `cargo test -p transcript-api`.

#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::multipart::{MultipartForm, Part};
use bytes::Bytes;
use axum_test::{TestResponse, TestServer};
use object_store::memory::InMemory;
use std::path::Path;
use std::sync::Arc;
use tempfile::TempDir;
use transcript_api::setup::routes;
use transcript_api::AppState;
use transcript_core::Config;
use transcript_storage::{
    ByteStream, LocalStorage, S3Storage, Storage, StorageBackend, StorageError, StorageResult,
};

pub const TEST_AUTH_TOKEN: &str = "test-auth-token-0123456789";
pub const TEST_BASE_URI: &str = "https://transcripts.example.com/t";

pub const SAMPLE_HTML: &[u8] =
    b"<!DOCTYPE html><html><body><h1>Transcript</h1><p>speaker: hello</p></body></html>";

/// Test application: server plus the storage it writes to.
pub struct TestApp {
    pub server: TestServer,
    pub storage: Arc<dyn Storage>,
    pub _temp_dir: TempDir,
}

impl TestApp {
    pub fn client(&self) -> &TestServer {
        &self.server
    }

    pub fn storage_dir(&self) -> &Path {
        self._temp_dir.path()
    }

    /// Number of transcript files written to the local storage directory.
    pub fn stored_file_count(&self) -> usize {
        std::fs::read_dir(self.storage_dir())
            .expect("Failed to read storage directory")
            .count()
    }
}

pub fn create_test_config(storage_path: &Path) -> Config {
    let storage_path = storage_path.to_string_lossy().to_string();
    Config::from_lookup(|key| match key {
        "AUTH_TOKEN" => Some(TEST_AUTH_TOKEN.to_string()),
        "URI" => Some(TEST_BASE_URI.to_string()),
        "STORAGE_BACKEND" => Some("local".to_string()),
        "LOCAL_STORAGE_PATH" => Some(storage_path.clone()),
        _ => None,
    })
    .expect("Failed to build test config")
}

async fn build_app(config: Config, storage: Arc<dyn Storage>, temp_dir: TempDir) -> TestApp {
    let state = Arc::new(AppState::new(config.clone(), storage.clone()));
    let router = routes::setup_routes(&config, state)
        .await
        .expect("Failed to build router");
    let server = TestServer::new(router).expect("Failed to start test server");

    TestApp {
        server,
        storage,
        _temp_dir: temp_dir,
    }
}

/// Setup test app backed by local storage in a temp directory.
pub async fn setup_test_app() -> TestApp {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let config = create_test_config(temp_dir.path());
    let storage: Arc<dyn Storage> = Arc::new(
        LocalStorage::new(temp_dir.path())
            .await
            .expect("Failed to create local storage"),
    );

    build_app(config, storage, temp_dir).await
}

/// Setup test app backed by an in-memory object store standing in for S3.
pub async fn setup_object_store_test_app() -> (TestApp, Arc<InMemory>) {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let config = create_test_config(temp_dir.path());
    let store = Arc::new(InMemory::new());
    let storage: Arc<dyn Storage> = Arc::new(S3Storage::with_store(store.clone(), "test-bucket"));

    (build_app(config, storage, temp_dir).await, store)
}

/// Backend that is unreachable: every operation fails.
pub struct UnavailableStorage;

#[async_trait]
impl Storage for UnavailableStorage {
    async fn put(&self, _id: &str, _content: Bytes, _content_type: &str) -> StorageResult<()> {
        Err(StorageError::UploadFailed("connection refused".to_string()))
    }

    async fn get(&self, _id: &str) -> StorageResult<Bytes> {
        Err(StorageError::DownloadFailed("connection refused".to_string()))
    }

    async fn get_stream(&self, _id: &str) -> StorageResult<ByteStream> {
        Err(StorageError::DownloadFailed("connection refused".to_string()))
    }

    async fn exists(&self, _id: &str) -> StorageResult<bool> {
        Err(StorageError::BackendError("connection refused".to_string()))
    }

    fn backend_type(&self) -> StorageBackend {
        StorageBackend::S3
    }
}

/// Setup test app over an arbitrary storage backend.
pub async fn setup_test_app_with_storage(storage: Arc<dyn Storage>) -> TestApp {
    let temp_dir = tempfile::tempdir().expect("Failed to create temp directory");
    let config = create_test_config(temp_dir.path());

    build_app(config, storage, temp_dir).await
}

pub fn file_form(content: &[u8], mime_type: &str) -> MultipartForm {
    MultipartForm::new().add_part(
        "file",
        Part::bytes(content.to_vec())
            .file_name("transcript.html")
            .mime_type(mime_type),
    )
}

/// POST a transcript with the test token.
pub async fn upload(server: &TestServer, content: &[u8], mime_type: &str) -> TestResponse {
    server
        .post("/transcripts")
        .add_header("Authorization", TEST_AUTH_TOKEN)
        .multipart(file_form(content, mime_type))
        .await
}

/// Upload an HTML transcript and return its id.
pub async fn upload_html(server: &TestServer, content: &[u8]) -> String {
    let response = upload(server, content, "text/html").await;
    assert_eq!(response.status_code(), 201);
    let body: serde_json::Value = response.json();
    body["id"]
        .as_str()
        .expect("upload response has an id")
        .to_string()
}
