//! HTTP listener and graceful shutdown

use anyhow::{Context, Result};
use axum::Router;
use std::net::{Ipv4Addr, SocketAddr};
use transcript_core::Config;

/// Address the server binds: all interfaces on the configured port.
fn listen_addr(config: &Config) -> SocketAddr {
    SocketAddr::from((Ipv4Addr::UNSPECIFIED, config.server_port()))
}

/// Serve `app` until SIGINT or SIGTERM, then drain in-flight requests.
pub async fn start_server(config: &Config, app: Router) -> Result<()> {
    let addr = listen_addr(config);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    tracing::info!(
        addr = %addr,
        storage_backend = %config.storage_backend(),
        public_base_uri = %config.public_base_uri(),
        "Transcript server listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Resolves on the first of Ctrl+C or SIGTERM.
///
/// A signal whose handler cannot be installed is logged and never fires, so the server keeps
/// running until the other one arrives.
async fn shutdown_signal() {
    let ctrl_c = async {
        match tokio::signal::ctrl_c().await {
            Ok(()) => tracing::info!("Received Ctrl+C, shutting down"),
            Err(e) => {
                tracing::error!(error = %e, "Failed to listen for Ctrl+C");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
                tracing::info!("Received SIGTERM, shutting down");
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to install SIGTERM handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_listen_addr_binds_all_interfaces() {
        let config = Config::from_lookup(|key| match key {
            "AUTH_TOKEN" => Some("secret".to_string()),
            "URI" => Some("http://localhost:3000".to_string()),
            "STORAGE_BACKEND" => Some("local".to_string()),
            "LOCAL_STORAGE_PATH" => Some("/tmp/transcripts".to_string()),
            "PORT" => Some("3000".to_string()),
            _ => None,
        })
        .unwrap();

        assert_eq!(listen_addr(&config).to_string(), "0.0.0.0:3000");
    }
}
