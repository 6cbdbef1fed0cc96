//! GRE backend HTTP edge responder
//!
//! This crate provides the HTTP surface for the GRE backend deployment:
//! a fixed route table (root status, health check, versioned API status),
//! a catch-all 404 responder, permissive cross-origin handling, and JSON
//! body validation.

pub mod api;
pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;

pub use api::{ApiStatus, HealthResponse, ServiceStatus};
pub use config::{Config, CorsPolicy};
pub use error::ApiError;
pub use router::create_router;
pub use state::AppState;
