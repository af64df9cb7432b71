//! Storage setup and initialization

use anyhow::Result;
use std::sync::Arc;
use transcript_core::Config;
use transcript_storage::{create_storage, Storage};

pub async fn setup_storage(config: &Config) -> Result<Arc<dyn Storage>> {
    tracing::info!("Initializing storage backend...");
    let storage = create_storage(config).await?;

    match config.s3() {
        Some(s3) => tracing::info!(
            backend = %storage.backend_type(),
            bucket = %s3.bucket,
            region = %s3.region,
            endpoint = ?s3.endpoint,
            "Storage backend initialized successfully"
        ),
        None => tracing::info!(
            backend = %storage.backend_type(),
            path = ?config.local_storage_path(),
            "Storage backend initialized successfully"
        ),
    }

    Ok(storage)
}
