//! HTTP request handlers
//!
//! Every handler is a pure function of request metadata (clock, uptime,
//! path); none reads the request body.

use crate::api::{ApiStatus, HealthResponse, ServiceStatus};
use crate::error::ApiError;
use crate::state::AppState;
use axum::{extract::State, http::Uri, Json};
use chrono::{SecondsFormat, Utc};
use tracing::debug;

const SERVICE_NAME: &str = "gre-backend-railway";
const SERVICE_STATE: &str = "running";
const SERVICE_MESSAGE: &str = "Backend is live on Railway";

const API_VERSION: &str = "v1";
const API_NOTES: &str = "Replace this with real auth/courses/tests endpoints next.";

/// Root status banner
pub async fn root() -> Json<ServiceStatus> {
    Json(ServiceStatus {
        service: SERVICE_NAME.to_string(),
        status: SERVICE_STATE.to_string(),
        message: SERVICE_MESSAGE.to_string(),
    })
}

/// Health check
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        uptime_seconds: state.uptime_seconds(),
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        environment: state.config.environment.clone(),
    })
}

/// Versioned API status
pub async fn api_status() -> Json<ApiStatus> {
    Json(ApiStatus {
        api: API_VERSION.to_string(),
        ready: true,
        notes: API_NOTES.to_string(),
    })
}

/// Catch-all responder for unmatched paths and methods
pub async fn route_not_found(uri: Uri) -> ApiError {
    debug!("No route for {}", uri.path());
    ApiError::RouteNotFound(uri.path().to_string())
}
