//! Shared-token authorization for mutating routes.

use crate::error::HttpAppError;
use crate::state::AppState;
use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::{IntoResponse, Response},
};
use std::sync::Arc;
use subtle::ConstantTimeEq;
use transcript_core::AppError;

fn secure_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.as_bytes().ct_eq(b.as_bytes()).into()
}

/// Reject the request with 401 unless its `Authorization` header equals the configured token.
///
/// The whole header value is compared, so a token configured as `Bearer abc` must be sent as
/// `Bearer abc`.
pub async fn auth_middleware(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    let authorized = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .map(|h| secure_compare(h, state.config.auth_token()))
        .unwrap_or(false);

    if !authorized {
        tracing::warn!(
            method = %request.method(),
            path = %request.uri().path(),
            "Rejected request with missing or invalid authorization"
        );
        return HttpAppError(AppError::Unauthorized("Unauthorized".to_string())).into_response();
    }

    next.run(request).await
}
