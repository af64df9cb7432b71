//! Configuration module
//!
//! Configuration is read once at startup from the process environment (after loading an optional
//! `.env` file). There is no hot reload.

use std::env;

use crate::storage_types::StorageBackend;

const DEFAULT_PORT: u16 = 8080;
const MAX_UPLOAD_SIZE_MB: usize = 10;

/// Object-storage settings, present when the S3 backend is selected.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct S3Settings {
    pub bucket: String,
    pub region: String,
    /// Custom endpoint for S3-compatible providers (MinIO, R2, DigitalOcean Spaces, etc.)
    pub endpoint: Option<String>,
    pub access_key_id: Option<String>,
    pub secret_access_key: Option<String>,
}

/// Application configuration.
#[derive(Clone, Debug)]
pub struct Config {
    pub server_port: u16,
    pub auth_token: String,
    pub public_base_uri: String,
    pub storage_backend: StorageBackend,
    pub s3: Option<S3Settings>,
    pub local_storage_path: Option<String>,
    pub cors_origins: Vec<String>,
    pub max_upload_size_bytes: usize,
    pub environment: String,
}

impl Config {
    /// Load configuration from the environment, honoring a `.env` file when present.
    ///
    /// Only required variables are checked here; call [`Config::validate`] before use.
    pub fn from_env() -> Result<Self, anyhow::Error> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Empty values are treated as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let environment = get("ENVIRONMENT")
            .or_else(|| get("APP_ENV"))
            .unwrap_or_else(|| "development".to_string());

        let server_port = match get("PORT") {
            Some(port) => port
                .trim()
                .parse()
                .map_err(|_| anyhow::anyhow!("PORT must be a valid number"))?,
            None => DEFAULT_PORT,
        };

        let auth_token = get("AUTH_TOKEN")
            .ok_or_else(|| anyhow::anyhow!("AUTH_TOKEN environment variable not set"))?;

        let public_base_uri = get("URI")
            .map(|uri| uri.trim().trim_end_matches('/').to_string())
            .ok_or_else(|| anyhow::anyhow!("URI environment variable not set"))?;

        let storage_backend = match get("STORAGE_BACKEND") {
            Some(value) => value.parse::<StorageBackend>()?,
            None => StorageBackend::S3,
        };

        let s3 = match storage_backend {
            StorageBackend::S3 => Some(S3Settings {
                bucket: get("AWS_BUCKET").ok_or_else(|| {
                    anyhow::anyhow!("AWS_BUCKET must be set when using S3 storage backend")
                })?,
                region: get("AWS_REGION").ok_or_else(|| {
                    anyhow::anyhow!("AWS_REGION must be set when using S3 storage backend")
                })?,
                endpoint: get("AWS_ENDPOINT_URL"),
                access_key_id: get("AWS_ACCESS_KEY_ID"),
                secret_access_key: get("AWS_SECRET_ACCESS_KEY"),
            }),
            StorageBackend::Local => None,
        };

        let local_storage_path = get("LOCAL_STORAGE_PATH");

        let cors_origins = get("CORS_ORIGINS")
            .unwrap_or_else(|| "*".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let max_upload_size_mb = get("MAX_UPLOAD_SIZE_MB")
            .and_then(|v| v.trim().parse::<usize>().ok())
            .unwrap_or(MAX_UPLOAD_SIZE_MB)
            .max(1);

        Ok(Config {
            server_port,
            auth_token,
            public_base_uri,
            storage_backend,
            s3,
            local_storage_path,
            cors_origins,
            max_upload_size_bytes: max_upload_size_mb * 1024 * 1024,
            environment,
        })
    }

    pub fn validate(&self) -> Result<(), anyhow::Error> {
        if self.auth_token.trim().is_empty() {
            return Err(anyhow::anyhow!("AUTH_TOKEN must not be empty"));
        }

        if self.public_base_uri.is_empty() {
            return Err(anyhow::anyhow!("URI must not be empty"));
        }

        match self.storage_backend {
            StorageBackend::S3 if self.s3.is_none() => Err(anyhow::anyhow!(
                "AWS_BUCKET and AWS_REGION must be set when using S3 storage backend"
            )),
            StorageBackend::Local if self.local_storage_path.is_none() => Err(anyhow::anyhow!(
                "LOCAL_STORAGE_PATH must be set when using local storage backend"
            )),
            _ => Ok(()),
        }
    }

    /// Check if the application is running in production mode
    pub fn is_production(&self) -> bool {
        let env = self.environment.to_lowercase();
        env == "production" || env == "prod"
    }

    pub fn server_port(&self) -> u16 {
        self.server_port
    }

    pub fn auth_token(&self) -> &str {
        &self.auth_token
    }

    pub fn public_base_uri(&self) -> &str {
        &self.public_base_uri
    }

    pub fn storage_backend(&self) -> StorageBackend {
        self.storage_backend
    }

    pub fn s3(&self) -> Option<&S3Settings> {
        self.s3.as_ref()
    }

    pub fn local_storage_path(&self) -> Option<&str> {
        self.local_storage_path.as_deref()
    }

    pub fn cors_origins(&self) -> &[String] {
        &self.cors_origins
    }

    pub fn max_upload_size_bytes(&self) -> usize {
        self.max_upload_size_bytes
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }
}
