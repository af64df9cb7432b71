//! Application state shared by all handlers.

use std::sync::Arc;
use transcript_core::Config;
use transcript_storage::Storage;

/// Process-wide state built once at startup and read-only afterwards.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub storage: Arc<dyn Storage>,
}

impl AppState {
    pub fn new(config: Config, storage: Arc<dyn Storage>) -> Self {
        Self { config, storage }
    }

    /// Public URL under which a transcript is served.
    pub fn transcript_url(&self, id: &str) -> String {
        format!("{}/{}", self.config.public_base_uri(), id)
    }
}
