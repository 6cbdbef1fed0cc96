//! API response types

use serde::{Deserialize, Serialize};

/// Root route response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceStatus {
    /// Service identifier
    pub service: String,

    /// Run state label
    pub status: String,

    /// Human-readable banner
    pub message: String,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    /// Always true while the process is serving
    pub ok: bool,

    /// Whole seconds since process start
    pub uptime_seconds: u64,

    /// Current time, ISO-8601 UTC
    pub timestamp: String,

    /// Deployment environment label
    pub environment: String,
}

/// Versioned API status response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiStatus {
    /// API version tag
    pub api: String,

    /// Readiness flag
    pub ready: bool,

    /// Placeholder notes
    pub notes: String,
}
