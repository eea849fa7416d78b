use std::time::Duration;

use axum::extract::Extension;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;

use crate::config::settings;
use crate::context::AppContext;
use crate::models::RequestContext;

/// Process liveness only — never calls an upstream.
pub async fn health() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "ok": true })))
}

/// Runs the Concept Resolver's and Upstream Annotations Client's GTG probes
/// concurrently with a short timeout; 200 only if both succeed.
pub async fn gtg(Extension(ctx): Extension<AppContext>) -> impl IntoResponse {
    let request_ctx = RequestContext::synthetic(settings());

    let ready = tokio::time::timeout(Duration::from_secs(2), ctx.merge_engine().gtg(&request_ctx))
        .await
        .unwrap_or(false);

    if ready {
        (StatusCode::OK, Json(json!({ "ok": true })))
    } else {
        (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({ "ok": false })),
        )
    }
}
