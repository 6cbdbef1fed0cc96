//! Router assembly
//!
//! Builds the fixed route table, the cross-origin layer, and the JSON body
//! guard. Route matching is exact; a method mismatch on a known path falls
//! through to the 404 responder, same as an unknown path.

use crate::config::CorsPolicy;
use crate::error::ApiError;
use crate::handlers;
use crate::state::AppState;
use axum::{
    body::{to_bytes, Body},
    extract::Request,
    http::{header, HeaderMap},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::get,
    Router,
};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};
use tracing::debug;

/// Largest body the JSON guard will buffer for validation.
const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Build the application router.
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors);

    Router::new()
        .route("/", get(handlers::root).fallback(handlers::route_not_found))
        .route(
            "/health",
            get(handlers::health).fallback(handlers::route_not_found),
        )
        .route(
            "/api/v1/status",
            get(handlers::api_status).fallback(handlers::route_not_found),
        )
        .fallback(handlers::route_not_found)
        .with_state(state)
        .layer(middleware::from_fn(json_body_guard))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Cross-origin layer for the configured policy.
///
/// The wildcard policy emits `*` for any origin. An allow-list reflects the
/// request origin only on an exact match; otherwise the permissive header is
/// omitted and the request is served normally.
fn cors_layer(policy: &CorsPolicy) -> CorsLayer {
    let origin = match policy {
        CorsPolicy::AllowAny => AllowOrigin::any(),
        CorsPolicy::AllowList(origins) => AllowOrigin::list(origins.iter().cloned()),
    };

    CorsLayer::new()
        .allow_origin(origin)
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Validate JSON request bodies before routing.
///
/// Requests declaring `Content-Type: application/json` with a non-empty body
/// must carry syntactically valid JSON; anything else is rejected with a 400
/// before any handler runs. Handlers never read the body, so a valid body is
/// passed through untouched.
async fn json_body_guard(req: Request, next: Next) -> Response {
    if !is_json_content_type(req.headers()) {
        return next.run(req).await;
    }

    let (parts, body) = req.into_parts();

    let bytes = match to_bytes(body, MAX_BODY_BYTES).await {
        Ok(bytes) => bytes,
        Err(err) => {
            debug!("Failed to buffer request body: {}", err);
            return ApiError::InvalidBody.into_response();
        }
    };

    if !bytes.is_empty() && serde_json::from_slice::<serde_json::Value>(&bytes).is_err() {
        debug!("Rejecting malformed JSON body ({} bytes)", bytes.len());
        return ApiError::InvalidBody.into_response();
    }

    next.run(Request::from_parts(parts, Body::from(bytes))).await
}

fn is_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(header::CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|media_type| media_type.trim().eq_ignore_ascii_case("application/json"))
        .unwrap_or(false)
}
