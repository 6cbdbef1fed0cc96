//! Error types for the HTTP API

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    /// Request body claimed to be JSON but did not parse (400)
    #[error("request body is not valid JSON")]
    InvalidBody,

    /// No route matched the request (404)
    #[error("no route for {0}")]
    RouteNotFound(String),
}

/// Error response body
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::InvalidBody => (
                StatusCode::BAD_REQUEST,
                ErrorResponse {
                    error: "Request body is not valid JSON".to_string(),
                    path: None,
                },
            ),
            ApiError::RouteNotFound(path) => (
                StatusCode::NOT_FOUND,
                ErrorResponse {
                    error: "Route not found".to_string(),
                    path: Some(path),
                },
            ),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[test]
    fn test_api_error_display() {
        let err = ApiError::InvalidBody;
        assert_eq!(format!("{}", err), "request body is not valid JSON");

        let err = ApiError::RouteNotFound("/missing".to_string());
        assert_eq!(format!("{}", err), "no route for /missing");
    }

    #[tokio::test]
    async fn test_invalid_body_into_response() {
        let response = ApiError::InvalidBody.into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(json["error"], "Request body is not valid JSON");
        assert!(json.get("path").is_none());
    }

    #[tokio::test]
    async fn test_route_not_found_into_response() {
        let response = ApiError::RouteNotFound("/unknown-path".to_string()).into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

        assert_eq!(json["error"], "Route not found");
        assert_eq!(json["path"], "/unknown-path");
    }
}
